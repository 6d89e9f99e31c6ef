//! Sub-sequence extraction and insertion.
//!
//! The two operations deliberately differ in strictness: [`SubSeq`] clips an
//! out-of-range window silently, while [`Insert`] rejects an out-of-range
//! index (and an empty sequence) at compile time. Both behaviors are part of
//! the contract; do not unify them.

use std::marker::PhantomData;

use crate::boolean::{And, Branch, False, True};
use crate::func::Reducer;
use crate::ops::concat::{Concat, ConcatAll};
use crate::ops::reduce::Reduce;
use crate::tuple::{HasLength, List, Tuple};
use crate::unary::{Add, Compare, LessThan, Sub, Unary, UnaryOf, S, Z};

/// Whether `Index` is at or past `Start`.
type GeStart<Index, Start> = <(Index, Start) as Compare<False, True, True>>::Result;

/// Whether `Index` is before `End`.
type LtEnd<Index, End> = <(Index, End) as Compare<True, False, False>>::Result;

/// One past the last position of the window.
type EndOf<Start, Len> = <(Start, Len) as Add>::Result;

/// Whether `Index` falls within the window `[Start, Start + Len)`.
type InWindow<Index, Start, Len> =
    <(GeStart<Index, Start>, LtEnd<Index, EndOf<Start, Len>>) as And>::Result;

/// What the element `T` contributes at position `Index`: itself, or nothing.
type Taken<T, Index, Start, Len> = <InWindow<Index, Start, Len> as Branch<(T, ()), ()>>::Chosen;

/// The running state of a window fold: the position of the next element, and
/// the elements kept so far.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""))]
pub struct Scanned<Index, Kept>(PhantomData<(Index, Kept)>);

/// The reducer behind [`SubSeq`]: keeps the elements whose position falls
/// within `[Start, Start + Len)` and drops the rest.
///
/// Membership in the window is tested per element, so positions the list does
/// not reach simply never come up — there is no bounds check anywhere.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""))]
pub struct Window<Start, Len>(PhantomData<(Start, Len)>);

impl<Start, Len, Index, Kept, T> Reducer<Scanned<Index, Kept>, T> for Window<Start, Len>
where
    Start: Unary,
    Len: Unary,
    Index: Unary,
    (Start, Len): Add,
    (Index, Start): Compare<False, True, True>,
    (Index, EndOf<Start, Len>): Compare<True, False, False>,
    (GeStart<Index, Start>, LtEnd<Index, EndOf<Start, Len>>): And,
    InWindow<Index, Start, Len>: Branch<(T, ()), ()>,
    Kept: Concat<Taken<T, Index, Start, Len>>,
{
    type Output =
        Scanned<S<Index>, <Kept as Concat<Taken<T, Index, Start, Len>>>::Concatenated>;
}

/// Project the kept elements out of a finished window fold.
pub trait WindowResult {
    /// The elements the fold kept.
    type Kept;
}

impl<Index, Kept> WindowResult for Scanned<Index, Kept> {
    type Kept = Kept;
}

/// Extract the elements at positions `[Start, Start + Len)` of a list.
///
/// Positions outside the list contribute nothing: an out-of-range window is
/// silently clipped rather than rejected, so the result may hold fewer than
/// `Len` elements. This looseness is documented behavior — callers that need
/// strict bounds checking must validate the window themselves.
pub trait SubSeq<Start, Len> {
    /// The extracted window.
    type Extracted;
}

impl<L, Start, Len> SubSeq<Start, Len> for L
where
    L: Reduce<Window<Start, Len>, Scanned<Z, ()>>,
    <L as Reduce<Window<Start, Len>, Scanned<Z, ()>>>::Reduced: WindowResult,
{
    type Extracted =
        <<L as Reduce<Window<Start, Len>, Scanned<Z, ()>>>::Reduced as WindowResult>::Kept;
}

/// The elements of `Seq` at positions `[START, START + LEN)`, as a tuple.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::SubSeqOf;
///
/// assert_type_eq_all!(SubSeqOf<(i32, f32, char, bool), 1, 2>, (f32, char));
/// assert_type_eq_all!(SubSeqOf<(i32, f32, char, bool), 0, 4>, (i32, f32, char, bool));
/// ```
///
/// Out-of-range windows clip silently instead of failing:
///
/// ```
/// # use static_assertions::assert_type_eq_all;
/// # use tuplicity::ops::SubSeqOf;
/// assert_type_eq_all!(SubSeqOf<(i32, f32), 1, 16>, (f32,));
/// assert_type_eq_all!(SubSeqOf<(i32, f32), 7, 2>, ());
/// ```
pub type SubSeqOf<Seq, const START: usize, const LEN: usize> =
    <<<Seq as Tuple>::AsList as SubSeq<UnaryOf<START>, UnaryOf<LEN>>>::Extracted as List>::AsTuple;

/// A list with at least one element.
///
/// This is the precondition [`Insert`] places on its input; the unsatisfied
/// bound is the "cannot insert into an empty sequence" error.
#[diagnostic::on_unimplemented(message = "cannot insert into an empty sequence")]
pub trait NonEmpty {}

impl<H, T> NonEmpty for (H, T) {}

/// The length of the list `L`.
type LenOf<L> = <L as HasLength>::Length;

/// The width of the right half of a split: everything from `Index` on.
type RightLen<L, Index> = <(LenOf<L>, Index) as Sub>::Result;

/// The elements before `Index`.
type LeftOf<L, Index> = <L as SubSeq<Z, Index>>::Extracted;

/// The elements from `Index` on.
type RightOf<L, Index> = <L as SubSeq<Index, RightLen<L, Index>>>::Extracted;

/// The three-way split `[left, items, right]`, ready for concatenation.
type Split<L, Index, Items> = (LeftOf<L, Index>, (Items, (RightOf<L, Index>, ())));

/// Insert the elements of the list `Items` at position `Index`: the list is
/// split at `Index` and rejoined as `[left, items, right]`.
///
/// Two preconditions are enforced at compile time: the list must be non-empty
/// ([`NonEmpty`]), and `Index` must be strictly less than its length
/// ([`LessThan`]). In particular insertion at the very end
/// (`Index == length`) is not supported through this operation; use
/// [`PushBackOf`](crate::ops::PushBackOf) for that.
pub trait Insert<Index, Items> {
    /// The list with `Items` inserted.
    type Inserted;
}

impl<L, Index, Items> Insert<Index, Items> for L
where
    L: NonEmpty + HasLength,
    Index: Unary + LessThan<LenOf<L>>,
    (LenOf<L>, Index): Sub,
    L: SubSeq<Z, Index> + SubSeq<Index, RightLen<L, Index>>,
    Split<L, Index, Items>: ConcatAll,
{
    type Inserted = <Split<L, Index, Items> as ConcatAll>::Concatenated;
}

/// The sequence `Seq` with the elements of the tuple `Items` inserted at
/// position `INDEX`.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::InsertOf;
///
/// assert_type_eq_all!(InsertOf<(i32, f32), 1, (char,)>, (i32, char, f32));
/// assert_type_eq_all!(InsertOf<(i32, f32), 0, (char, bool)>, (char, bool, i32, f32));
/// ```
///
/// # Counterexamples
///
/// Inserting into the empty sequence is a compile error:
///
/// ```compile_fail
/// # use static_assertions::assert_type_eq_all;
/// # use tuplicity::ops::InsertOf;
/// assert_type_eq_all!(InsertOf<(), 0, (char,)>, (char,));
/// ```
///
/// So is an index past the last element — including one exactly at the end,
/// which `push_back` covers instead:
///
/// ```compile_fail
/// # use static_assertions::assert_type_eq_all;
/// # use tuplicity::ops::InsertOf;
/// assert_type_eq_all!(InsertOf<(i32, f32), 2, (char,)>, (i32, f32, char));
/// ```
pub type InsertOf<Seq, const INDEX: usize, Items> =
    <<<Seq as Tuple>::AsList as Insert<UnaryOf<INDEX>, <Items as Tuple>::AsList>>::Inserted as List>::AsTuple;

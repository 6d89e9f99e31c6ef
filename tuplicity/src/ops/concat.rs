//! Concatenation: the structural primitive most other combinators bottom out
//! in.

use crate::tuple::{List, Tuple};

/// Concatenate two lists, preserving order, with `Self`'s elements first.
///
/// Concatenation is total: it has no failure mode beyond both inputs having to
/// be lists in the first place. It is associative, and the empty list is its
/// identity element on both sides.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::prelude::*;
///
/// assert_type_eq_all!(ConcatOf<(i32, f32), (char,)>, (i32, f32, char));
/// assert_type_eq_all!(ConcatOf<(), (i32,)>, (i32,));
/// assert_type_eq_all!(ConcatOf<(i32,), ()>, (i32,));
/// ```
pub trait Concat<Rhs> {
    /// The concatenated list.
    type Concatenated;
}

impl<Rhs> Concat<Rhs> for () {
    type Concatenated = Rhs;
}

impl<H, T, Rhs> Concat<Rhs> for (H, T)
where
    T: Concat<Rhs>,
{
    type Concatenated = (H, T::Concatenated);
}

/// The concatenation of the sequences `A` and `B`, as a tuple.
pub type ConcatOf<A, B> =
    <<<A as Tuple>::AsList as Concat<<B as Tuple>::AsList>>::Concatenated as List>::AsTuple;

/// The sequence `Seq` with the elements of the tuple `Items` prepended, in the
/// order given, ahead of all of `Seq`'s elements.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::prelude::*;
///
/// assert_type_eq_all!(PushFrontOf<(i32, f32), (char, bool)>, (char, bool, i32, f32));
/// ```
pub type PushFrontOf<Seq, Items> = ConcatOf<Items, Seq>;

/// The sequence `Seq` with the elements of the tuple `Items` appended, in the
/// order given, after all of `Seq`'s elements.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::prelude::*;
///
/// assert_type_eq_all!(PushBackOf<(i32, f32), (char, bool)>, (i32, f32, char, bool));
/// ```
pub type PushBackOf<Seq, Items> = ConcatOf<Seq, Items>;

/// Fold concatenation across any number of lists, starting from the empty
/// list.
///
/// `Self` is a list *of lists*; the result splices them together in order.
/// Zero lists concatenate to the empty list.
pub trait ConcatAll {
    /// The concatenation of all the lists.
    type Concatenated;
}

impl ConcatAll for () {
    type Concatenated = ();
}

impl<H, T> ConcatAll for (H, T)
where
    T: ConcatAll,
    H: Concat<T::Concatenated>,
{
    type Concatenated = <H as Concat<T::Concatenated>>::Concatenated;
}

/// Convert each element of a list — itself a sequence in tuple form — into its
/// list form.
///
/// This is the boundary step for [`ConcatAllOf`], whose argument is a tuple of
/// tuples.
pub trait EachToList {
    /// The same list with every element converted.
    type AsLists;
}

impl EachToList for () {
    type AsLists = ();
}

impl<H, T> EachToList for (H, T)
where
    H: Tuple,
    T: EachToList,
{
    type AsLists = (H::AsList, T::AsLists);
}

/// The concatenation of every sequence in the tuple `Seqs`, in order.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::prelude::*;
///
/// assert_type_eq_all!(ConcatAllOf<((i32,), (f32, char), ())>, (i32, f32, char));
/// assert_type_eq_all!(ConcatAllOf<()>, ());
/// ```
pub type ConcatAllOf<Seqs> =
    <<<<Seqs as Tuple>::AsList as EachToList>::AsLists as ConcatAll>::Concatenated as List>::AsTuple;

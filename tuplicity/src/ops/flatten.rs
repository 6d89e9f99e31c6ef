//! Flattening of nested sequences, one level at a time or to a fixpoint.

use crate::boolean::{Bool, False, Or, True};
use crate::func::Reducer;
use crate::ops::concat::Concat;
use crate::ops::element::Element;
use crate::ops::reduce::Reduce;
use crate::tuple::{List, Tuple};

/// The reducer behind [`FlattenOnce`]: concatenates each element's spliced
/// form (see [`Element::Spliced`]) onto the running list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SpliceStep;

impl<Acc, T> Reducer<Acc, T> for SpliceStep
where
    T: Element,
    Acc: Concat<T::Spliced>,
{
    type Output = <Acc as Concat<T::Spliced>>::Concatenated;
}

/// Splice each element that is itself a sequence in place, one level deep.
///
/// Non-sequence elements pass through unchanged, and an element nested two
/// levels deep is only unwrapped by one level.
pub trait FlattenOnce {
    /// The list flattened by one level.
    type Flattened;
}

impl<L> FlattenOnce for L
where
    L: Reduce<SpliceStep, ()>,
{
    type Flattened = <L as Reduce<SpliceStep, ()>>::Reduced;
}

/// The sequence `Seq` flattened by exactly one level.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::FlattenOnceOf;
///
/// assert_type_eq_all!(
///     FlattenOnceOf<(i32, (f32, char), f64)>,
///     (i32, f32, char, f64),
/// );
///
/// // One level only: the inner nesting survives one flattening...
/// assert_type_eq_all!(
///     FlattenOnceOf<(i32, ((f32, char),))>,
///     (i32, (f32, char)),
/// );
/// // ...and a flat sequence is a fixpoint.
/// assert_type_eq_all!(
///     FlattenOnceOf<FlattenOnceOf<(i32, ((f32, char),))>>,
///     (i32, f32, char),
/// );
/// ```
pub type FlattenOnceOf<Seq> =
    <<<Seq as Tuple>::AsList as FlattenOnce>::Flattened as List>::AsTuple;

/// The reducer behind [`HasNested`]: disjoins each element's
/// [`IsSeq`](Element::IsSeq) into the running boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AnyNested;

impl<Acc, T> Reducer<Acc, T> for AnyNested
where
    T: Element,
    (Acc, T::IsSeq): Or,
{
    type Output = <(Acc, T::IsSeq) as Or>::Result;
}

/// Whether any element of the list is itself a sequence.
///
/// This is the termination test for [`Flatten`]: a list with no sequence
/// elements is its own fixpoint.
pub trait HasNested {
    /// [`True`](crate::boolean::True) if some element is a sequence.
    type Nested: Bool;
}

impl<L> HasNested for L
where
    L: Reduce<AnyNested, False>,
    <L as Reduce<AnyNested, False>>::Reduced: Bool,
{
    type Nested = <L as Reduce<AnyNested, False>>::Reduced;
}

/// Flatten until no element is a sequence.
///
/// [`FlattenOnce`] is applied repeatedly; each application strictly reduces
/// the nesting depth, so the recursion reaches the fixpoint for any finite
/// nesting.
pub trait Flatten {
    /// The fully flattened list.
    type Flattened;
}

impl<L> Flatten for L
where
    L: HasNested + FlattenIf<<L as HasNested>::Nested>,
{
    type Flattened = <L as FlattenIf<<L as HasNested>::Nested>>::Flattened;
}

/// One step of the fixpoint recursion, dispatched on whether another level of
/// nesting remains.
pub trait FlattenIf<B> {
    /// The fully flattened list.
    type Flattened;
}

impl<L> FlattenIf<False> for L {
    type Flattened = L;
}

impl<L> FlattenIf<True> for L
where
    L: FlattenOnce,
    <L as FlattenOnce>::Flattened: Flatten,
{
    type Flattened = <<L as FlattenOnce>::Flattened as Flatten>::Flattened;
}

/// The sequence `Seq` flattened until no element is a sequence.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::FlattenOf;
///
/// assert_type_eq_all!(
///     FlattenOf<(i32, ((f32, (char,)), bool), f64)>,
///     (i32, f32, char, bool, f64),
/// );
/// // An already-flat sequence is its own fixpoint.
/// assert_type_eq_all!(FlattenOf<(i32, f32)>, (i32, f32));
/// assert_type_eq_all!(FlattenOf<()>, ());
/// ```
pub type FlattenOf<Seq> = <<<Seq as Tuple>::AsList as Flatten>::Flattened as List>::AsTuple;

//! Filtering by a predicate.

use std::marker::PhantomData;

use crate::boolean::Branch;
use crate::func::{Predicate, Reducer};
use crate::ops::concat::Concat;
use crate::ops::reduce::Reduce;
use crate::tuple::{List, Tuple};

/// What the element `T` contributes to a filtered list: itself, or nothing.
type Kept<P, T> = <<P as Predicate<T>>::Holds as Branch<(T, ()), ()>>::Chosen;

/// The reducer behind [`Filter`]: appends each element for which `P` holds to
/// the running list, and skips the rest.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""))]
pub struct KeepIf<P>(PhantomData<P>);

impl<P, Acc, T> Reducer<Acc, T> for KeepIf<P>
where
    P: Predicate<T>,
    P::Holds: Branch<(T, ()), ()>,
    Acc: Concat<Kept<P, T>>,
{
    type Output = <Acc as Concat<Kept<P, T>>>::Concatenated;
}

/// Keep the elements for which the predicate `P` holds, preserving their
/// relative order.
///
/// A filter that matches nothing yields the empty list; that is a well-defined
/// result, never an error.
pub trait Filter<P> {
    /// The filtered list.
    type Filtered;
}

impl<P, L> Filter<P> for L
where
    L: Reduce<KeepIf<P>, ()>,
{
    type Filtered = <L as Reduce<KeepIf<P>, ()>>::Reduced;
}

/// The elements of `Seq` for which `P` holds, in their original relative
/// order.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::prelude::*;
///
/// tuplicity::predicate! {
///     /// Holds for the built-in integer primitives.
///     pub IsInt {
///         holds: i8 | i16 | i32 | i64,
///         fails: f32 | f64 | char | bool,
///     }
/// }
///
/// assert_type_eq_all!(FilterOf<(i32, f32, i32, char), IsInt>, (i32, i32));
/// assert_type_eq_all!(FilterOf<(f32, char), IsInt>, ());
/// assert_type_eq_all!(FilterOf<(), IsInt>, ());
/// ```
pub type FilterOf<Seq, P> = <<<Seq as Tuple>::AsList as Filter<P>>::Filtered as List>::AsTuple;

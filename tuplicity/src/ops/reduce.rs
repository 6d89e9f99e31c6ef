//! The fold engine: a strict left fold of a binary step operation across a
//! sequence.
//!
//! This is the single most reusable construct in the library: every
//! "aggregate across all elements" operation — [`Filter`](crate::ops::Filter),
//! [`Any`](crate::ops::Any), [`FlattenOnce`](crate::ops::FlattenOnce),
//! [`SubSeq`](crate::ops::SubSeq) — is a [`Reduce`] with a problem-specific
//! [`Reducer`] and accumulator shape.

use crate::func::Reducer;
use crate::tuple::Tuple;

/// Left fold of the reducer `R` across a list, starting from the accumulator
/// `Init`.
///
/// Elements are processed strictly left to right: the accumulator after
/// element `k` is `R` applied to the accumulator after element `k - 1` and
/// element `k`. The result is the final accumulator, unprojected — a reducer
/// that rebuilds a sequence yields a list, a reducer that aggregates a test
/// yields a [`Bool`](crate::boolean::Bool), and a reducer with auxiliary
/// bookkeeping yields whatever marker it threads (see
/// [`SubSeq`](crate::ops::SubSeq) for an example of projecting a result back
/// out of such a marker).
///
/// Reducing the empty list yields `Init` unchanged; reducing a single-element
/// list applies the step exactly once.
///
/// # Examples
///
/// A reducer that appends each element to the running list rebuilds the
/// sequence it is folded over:
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::func::Reducer;
/// use tuplicity::ops::{Concat, ReduceOf};
///
/// struct Append;
///
/// impl<Acc, T> Reducer<Acc, T> for Append
/// where
///     Acc: Concat<(T, ())>,
/// {
///     type Output = <Acc as Concat<(T, ())>>::Concatenated;
/// }
///
/// assert_type_eq_all!(
///     ReduceOf<(i32, f32, char), Append, ()>,
///     (i32, (f32, (char, ()))),
/// );
/// assert_type_eq_all!(ReduceOf<(), Append, ()>, ());
/// ```
pub trait Reduce<R, Init> {
    /// The final accumulator.
    type Reduced;
}

impl<R, Init> Reduce<R, Init> for () {
    type Reduced = Init;
}

impl<R, Init, H, T> Reduce<R, Init> for (H, T)
where
    R: Reducer<Init, H>,
    T: Reduce<R, R::Output>,
{
    type Reduced = <T as Reduce<R, R::Output>>::Reduced;
}

/// The result of folding the reducer `R` across the sequence `Seq`, starting
/// from `Init`.
///
/// The result is the raw final accumulator, which need not be a sequence; no
/// tuple conversion is applied.
pub type ReduceOf<Seq, R, Init> = <<Seq as Tuple>::AsList as Reduce<R, Init>>::Reduced;

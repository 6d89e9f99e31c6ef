//! Searching: any-match, first-match, first-match index, and membership.

use std::marker::PhantomData;

use crate::boolean::{Bool, False, Or, True};
use crate::func::{Predicate, Reducer};
use crate::ops::reduce::Reduce;
use crate::tuple::Tuple;
use crate::unary::{Unary, S, Z};

/// The reducer behind [`Any`]: disjoins the predicate's verdict on each
/// element into the running boolean.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""))]
pub struct AnyStep<P>(PhantomData<P>);

impl<P, Acc, T> Reducer<Acc, T> for AnyStep<P>
where
    P: Predicate<T>,
    (Acc, P::Holds): Or,
{
    type Output = <(Acc, P::Holds) as Or>::Result;
}

/// Whether the predicate `P` holds for at least one element of the list.
///
/// The empty list yields [`False`] — a well-defined result, never an error.
pub trait Any<P> {
    /// [`True`](crate::boolean::True) if some element satisfies `P`.
    type Holds: Bool;
}

impl<P, L> Any<P> for L
where
    L: Reduce<AnyStep<P>, False>,
    <L as Reduce<AnyStep<P>, False>>::Reduced: Bool,
{
    type Holds = <L as Reduce<AnyStep<P>, False>>::Reduced;
}

/// Whether `P` holds for at least one element of `Seq`, as a compile-time
/// boolean.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::boolean::{False, True};
/// use tuplicity::ops::AnyOf;
///
/// tuplicity::predicate! {
///     /// Holds for the built-in floating point primitives.
///     pub IsFloat {
///         holds: f32 | f64,
///         fails: i8 | i16 | i32 | i64 | char | bool,
///     }
/// }
///
/// assert_type_eq_all!(AnyOf<(i32, f32, char), IsFloat>, True);
/// assert_type_eq_all!(AnyOf<(i32, char), IsFloat>, False);
/// assert_type_eq_all!(AnyOf<(), IsFloat>, False);
/// ```
pub type AnyOf<Seq, P> = <<Seq as Tuple>::AsList as Any<P>>::Holds;

/// The first element of a list satisfying the predicate `P`, together with its
/// zero-based index.
///
/// Unlike [`Filter`](crate::ops::Filter), which yields an empty result when
/// nothing matches, a search that finds nothing is a compile error: the empty
/// list has no `Find` impl, and neither does a list none of whose elements
/// satisfies `P`.
#[diagnostic::on_unimplemented(
    message = "no element of the sequence satisfies the predicate `{P}`"
)]
pub trait Find<P> {
    /// The first element satisfying `P`.
    type Found;

    /// The zero-based index of that element.
    type Index: Unary;
}

impl<P, H, T> Find<P> for (H, T)
where
    P: Predicate<H>,
    (H, T): FindIf<P, <P as Predicate<H>>::Holds>,
{
    type Found = <(H, T) as FindIf<P, <P as Predicate<H>>::Holds>>::Found;
    type Index = <(H, T) as FindIf<P, <P as Predicate<H>>::Holds>>::Index;
}

/// One step of the search, dispatched on whether the head matched.
pub trait FindIf<P, B> {
    /// The first element satisfying `P`.
    type Found;

    /// The zero-based index of that element.
    type Index: Unary;
}

impl<P, H, T> FindIf<P, True> for (H, T) {
    type Found = H;
    type Index = Z;
}

impl<P, H, T> FindIf<P, False> for (H, T)
where
    T: Find<P>,
{
    type Found = <T as Find<P>>::Found;
    type Index = S<<T as Find<P>>::Index>;
}

/// The first element of `Seq` satisfying `P`.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::FindOf;
///
/// tuplicity::predicate! {
///     /// Holds for the built-in floating point primitives.
///     pub IsFloat {
///         holds: f32 | f64,
///         fails: i8 | i16 | i32 | i64 | char | bool,
///     }
/// }
///
/// assert_type_eq_all!(FindOf<(i32, f32, f64), IsFloat>, f32);
/// ```
///
/// # Counterexamples
///
/// When no element matches, the search fails to compile:
///
/// ```compile_fail
/// # use static_assertions::assert_type_eq_all;
/// # use tuplicity::ops::FindOf;
/// # tuplicity::predicate! {
/// #     /// Holds for the built-in floating point primitives.
/// #     pub IsFloat {
/// #         holds: f32 | f64,
/// #         fails: i8 | i16 | i32 | i64 | char | bool,
/// #     }
/// # }
/// assert_type_eq_all!(FindOf<(i32, char), IsFloat>, f32);
/// ```
pub type FindOf<Seq, P> = <<Seq as Tuple>::AsList as Find<P>>::Found;

/// The zero-based index of the first element of `Seq` satisfying `P`, as a
/// unary type-level number.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::FindIndexOf;
/// use tuplicity::unary::UnaryOf;
///
/// tuplicity::predicate! {
///     /// Holds for the built-in floating point primitives.
///     pub IsFloat {
///         holds: f32 | f64,
///         fails: i8 | i16 | i32 | i64 | char | bool,
///     }
/// }
///
/// assert_type_eq_all!(FindIndexOf<(i32, f32, char), IsFloat>, UnaryOf<1>);
/// ```
///
/// # Counterexamples
///
/// Searching a sequence with no match — in particular the empty sequence — is
/// a compile error:
///
/// ```compile_fail
/// # use static_assertions::assert_type_eq_all;
/// # use tuplicity::ops::FindIndexOf;
/// # use tuplicity::unary::UnaryOf;
/// # tuplicity::predicate! {
/// #     /// Holds for the built-in floating point primitives.
/// #     pub IsFloat {
/// #         holds: f32 | f64,
/// #         fails: i8 | i16 | i32 | i64 | char | bool,
/// #     }
/// # }
/// assert_type_eq_all!(FindIndexOf<(i32,), IsFloat>, UnaryOf<0>);
/// ```
pub type FindIndexOf<Seq, P> = <<Seq as Tuple>::AsList as Find<P>>::Index;

/// Exact-identity membership: satisfied precisely when the element type `T`
/// occurs in the list, with `Index` naming the occurrence as a unary number.
///
/// Open-world trait coherence cannot decide that two arbitrary types are
/// *different*, so membership is a constraint to satisfy rather than a
/// boolean to compute: use it as a bound, let inference find `Index`, and
/// observe the negative case with
/// [`static_assertions::assert_not_impl_any!`]. When `T` occurs more than
/// once, any of the occurrence indices satisfies the constraint, and asking
/// inference to choose one is ambiguous — pin `Index` explicitly in that
/// case.
///
/// # Examples
///
/// ```
/// use static_assertions::{assert_impl_all, assert_not_impl_any};
/// use tuplicity::ops::Member;
/// use tuplicity::unary::types::*;
///
/// assert_impl_all!((i32, (f32, (char, ()))): Member<char, _2>);
/// assert_not_impl_any!((i32, (f32, ())): Member<char, _0>);
/// ```
#[diagnostic::on_unimplemented(
    message = "the sequence does not contain the type `{T}`",
    label = "`{T}` does not occur in this sequence"
)]
pub trait Member<T, Index> {}

impl<T, Tail> Member<T, Z> for (T, Tail) {}

impl<T, H, Tail, Index> Member<T, S<Index>> for (H, Tail) where Tail: Member<T, Index> {}

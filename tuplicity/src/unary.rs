//! The unary numbers, represented by zero [`Z`] and successor [`S`].
//!
//! Indices and lengths of type sequences are unary type-level numbers, so that
//! arithmetic and comparison on them can be performed by induction. The
//! [`Number`]/[`UnaryOf`] bridge converts back and forth between `const usize`
//! parameters and their unary representation.

/// The number zero.
///
/// # Examples
///
/// ```
/// use tuplicity::unary::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use tuplicity::unary::{S, Z};
///
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// A convenient type synonym for writing out unary types using constants.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// All unary numbers can be converted to their value-level equivalent `usize`.
///
/// # Examples
///
/// ```
/// use tuplicity::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<1>>::VALUE, 1);
/// assert_eq!(<UnaryOf<2>>::VALUE, 2);
/// // ...
/// assert_eq!(<UnaryOf<64>>::VALUE, 64);
/// ```
pub trait Unary: sealed::Unary + Sized + 'static {
    /// The runtime value of this type-level number, as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Ensure that a unary number is strictly less than some other number.
///
/// This is the bound that index-taking operations place on their index, so an
/// out-of-range index fails to compile rather than wrapping or clipping.
///
/// # Examples
///
/// This compiles, because `1 < 2`:
///
/// ```
/// use tuplicity::unary::*;
///
/// fn ok() where UnaryOf<1>: LessThan<UnaryOf<2>> {}
/// ```
///
/// But this does not compile, because `2 >= 1`:
///
/// ```compile_fail
/// # use tuplicity::unary::*;
/// #
/// fn bad() where UnaryOf<2>: LessThan<UnaryOf<1>> {}
/// ```
///
/// Because [`LessThan`] is a *strict* less-than relationship (i.e. `<`, not
/// `<=`), this does not compile either:
///
/// ```compile_fail
/// # use tuplicity::unary::*;
/// #
/// fn bad() where UnaryOf<16>: LessThan<UnaryOf<16>> {}
/// ```
#[diagnostic::on_unimplemented(
    message = "the index `{Self}` is out of bounds: it must be strictly less than `{N}`"
)]
pub trait LessThan<N: Unary>
where
    Self: Unary,
{
}

impl<N: Unary> LessThan<S<N>> for Z {}

impl<N: Unary, M: LessThan<N>> LessThan<S<N>> for S<M> {}

/// Compare two unary numbers and branch on their comparison, at the type
/// level.
///
/// Window extraction uses this to test whether a running index has entered or
/// left the requested range, with [`True`](crate::boolean::True) and
/// [`False`](crate::boolean::False) as the branch results.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::unary::{Compare, UnaryOf};
///
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u8);
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u16);
/// assert_type_eq_all!(<(UnaryOf<2>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u32);
/// ```
pub trait Compare<IfLess, IfEqual, IfGreater>: sealed::Compare {
    /// The result of the comparison: `IfLess`, `IfEqual`, or `IfGreater`
    /// according to how the pair's first component compares to its second.
    type Result;
}

impl<N: Unary, M: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater>
    for (S<N>, S<M>)
where
    (N, M): Compare<IfLess, IfEqual, IfGreater>,
{
    type Result = <(N, M) as Compare<IfLess, IfEqual, IfGreater>>::Result;
}

impl<IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, Z) {
    type Result = IfEqual;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (S<N>, Z) {
    type Result = IfGreater;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, S<N>) {
    type Result = IfLess;
}

/// Add two unary numbers at the type level.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::unary::*;
///
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Add>::Result, UnaryOf<2>);
/// assert_type_eq_all!(<(UnaryOf<5>, UnaryOf<7>) as Add>::Result, UnaryOf<12>);
/// ```
pub trait Add: sealed::Add {
    /// The result of the addition.
    type Result: Unary;
}

impl<N: Unary> Add for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Add for (N, S<M>)
where
    (N, M): Add,
{
    type Result = S<<(N, M) as Add>::Result>;
}

/// Subtract the second component of a pair of unary numbers from the first.
///
/// Subtraction is partial: it is only defined when the result would not go
/// below zero, so an underflowing subtraction is a compile error. Insertion
/// uses this to compute the width of the right half of a split sequence.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::unary::*;
///
/// assert_type_eq_all!(<(UnaryOf<7>, UnaryOf<5>) as Sub>::Result, UnaryOf<2>);
/// assert_type_eq_all!(<(UnaryOf<3>, UnaryOf<0>) as Sub>::Result, UnaryOf<3>);
/// ```
///
/// ```compile_fail
/// # use tuplicity::unary::*;
/// # use static_assertions::assert_type_eq_all;
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<2>) as Sub>::Result, UnaryOf<0>);
/// ```
pub trait Sub: sealed::Sub {
    /// The result of the subtraction.
    type Result: Unary;
}

impl<N: Unary> Sub for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Sub for (S<N>, S<M>)
where
    (N, M): Sub,
{
    type Result = <(N, M) as Sub>::Result;
}

/// A trait marking wrapped type-level constants.
pub trait Constant: sealed::Constant {}

/// A wrapper for type-level `usize` values to allow implementing traits on
/// them.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// A trait which allows conversion from a wrapper type over a type-level
/// `usize` to a unary type-level number representation.
pub trait ToUnary {
    /// The result of conversion.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// A trait which allows conversion from a unary type-level representation to a
/// wrapper over a type-level `usize`.
pub trait ToConstant: Unary {
    /// The result of conversion.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

tuplicity_macro::impl_unary_conversions!(64);

/// Short names for the small unary numbers, for use in tests and examples.
pub mod types {
    use super::{S, Z};

    /// The number 0.
    pub type _0 = Z;
    /// The number 1.
    pub type _1 = S<_0>;
    /// The number 2.
    pub type _2 = S<_1>;
    /// The number 3.
    pub type _3 = S<_2>;
    /// The number 4.
    pub type _4 = S<_3>;
    /// The number 5.
    pub type _5 = S<_4>;
    /// The number 6.
    pub type _6 = S<_5>;
    /// The number 7.
    pub type _7 = S<_6>;
    /// The number 8.
    pub type _8 = S<_7>;
    /// The number 9.
    pub type _9 = S<_8>;
    /// The number 10.
    pub type _10 = S<_9>;
    /// The number 11.
    pub type _11 = S<_10>;
    /// The number 12.
    pub type _12 = S<_11>;
    /// The number 13.
    pub type _13 = S<_12>;
    /// The number 14.
    pub type _14 = S<_13>;
    /// The number 15.
    pub type _15 = S<_14>;
    /// The number 16.
    pub type _16 = S<_15>;
}

mod sealed {
    use super::*;

    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Compare {}
    impl<N: Unary, M: Unary> Compare for (N, M) {}

    pub trait Add {}
    impl<N: Unary, M: Unary> Add for (N, M) {}

    pub trait Sub {}
    impl<N: Unary, M: Unary> Sub for (N, M) {}
}

static_assertions::assert_type_eq_all!(UnaryOf<3>, S<S<S<Z>>>);
static_assertions::assert_type_eq_all!(<UnaryOf<4> as ToConstant>::AsConstant, Number<4>);

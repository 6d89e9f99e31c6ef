//! The compile-time booleans, represented by [`True`] and [`False`].
//!
//! Predicates and membership tests evaluate to one of these two types, and
//! [`Branch`] selects between two candidate types according to one of them.
//! Connectives operate on pairs, in the same style as the arithmetic on unary
//! numbers in [`unary`](crate::unary).

/// The true boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct True;

/// The false boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct False;

/// All compile-time booleans can be converted to their value-level equivalent
/// `bool`.
///
/// # Examples
///
/// ```
/// use tuplicity::boolean::*;
///
/// assert!(True::VALUE);
/// assert!(!False::VALUE);
/// ```
pub trait Bool: sealed::Bool + Sized + 'static {
    /// The runtime value of this type-level boolean, as a `bool`.
    const VALUE: bool;
}

impl Bool for True {
    const VALUE: bool = true;
}

impl Bool for False {
    const VALUE: bool = false;
}

/// Branch on a type-level boolean, selecting `IfTrue` or `IfFalse`.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::boolean::*;
///
/// assert_type_eq_all!(<True as Branch<u8, u16>>::Chosen, u8);
/// assert_type_eq_all!(<False as Branch<u8, u16>>::Chosen, u16);
/// ```
pub trait Branch<IfTrue, IfFalse>: Bool {
    /// The selected type.
    type Chosen;
}

impl<IfTrue, IfFalse> Branch<IfTrue, IfFalse> for True {
    type Chosen = IfTrue;
}

impl<IfTrue, IfFalse> Branch<IfTrue, IfFalse> for False {
    type Chosen = IfFalse;
}

/// Conjunction of a pair of type-level booleans.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::boolean::*;
///
/// assert_type_eq_all!(<(True, True) as And>::Result, True);
/// assert_type_eq_all!(<(True, False) as And>::Result, False);
/// assert_type_eq_all!(<(False, True) as And>::Result, False);
/// ```
pub trait And: sealed::Pair {
    /// The result of the conjunction.
    type Result: Bool;
}

impl<B: Bool> And for (True, B) {
    type Result = B;
}

impl<B: Bool> And for (False, B) {
    type Result = False;
}

/// Disjunction of a pair of type-level booleans.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::boolean::*;
///
/// assert_type_eq_all!(<(False, False) as Or>::Result, False);
/// assert_type_eq_all!(<(False, True) as Or>::Result, True);
/// assert_type_eq_all!(<(True, False) as Or>::Result, True);
/// ```
pub trait Or: sealed::Pair {
    /// The result of the disjunction.
    type Result: Bool;
}

impl<B: Bool> Or for (True, B) {
    type Result = True;
}

impl<B: Bool> Or for (False, B) {
    type Result = B;
}

mod sealed {
    use super::*;

    pub trait Bool: 'static {}
    impl Bool for True {}
    impl Bool for False {}

    pub trait Pair {}
    impl<B1: Bool, B2: Bool> Pair for (B1, B2) {}
}

//! Conversions back and forth between flat tuples and their corresponding
//! inductive list structures.
//!
//! Internally, every combinator in this library operates on inductive
//! type-level lists, but the external interface is in terms of tuples, for
//! readability: callers write `(i32, f32, char)` and the operations convert to
//! and from `(i32, (f32, (char, ())))` at their boundaries. The traits here
//! convert between the two equivalent representations.
//!
//! At present, tuples up to size 32 are supported.

use crate::unary::*;

/// Convert a tuple into its corresponding inductive list structure.
///
/// This bound is what every sequence-accepting operation places on its input:
/// passing a type that is not a tuple fails to satisfy it, and the operation
/// does not compile.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::tuple::Tuple;
///
/// assert_type_eq_all!(<(i32, f32, char) as Tuple>::AsList, (i32, (f32, (char, ()))));
/// assert_type_eq_all!(<() as Tuple>::AsList, ());
/// ```
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;
}

/// Convert an inductive list structure into its corresponding tuple.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::tuple::List;
///
/// assert_type_eq_all!(<(i32, (f32, (char, ()))) as List>::AsTuple, (i32, f32, char));
/// ```
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// The length of a sequence, as a unary type-level number.
///
/// # Examples
///
/// ```
/// use tuplicity::tuple::LengthOf;
/// use tuplicity::unary::Unary;
///
/// assert_eq!(<LengthOf<(i32, f32, char)>>::VALUE, 3);
/// assert_eq!(<LengthOf<()>>::VALUE, 0);
/// ```
pub type LengthOf<Seq> = <<Seq as Tuple>::AsList as HasLength>::Length;

tuplicity_macro::impl_tuples!(32);

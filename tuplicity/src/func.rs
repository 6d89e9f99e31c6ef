//! The type-level functions threaded through the combinators.
//!
//! Rust generics cannot be passed around unapplied, so an operation that takes
//! a "function over types" — the mapping of a transform, the classifier of a
//! filter, the step of a reduce — takes a *marker type* implementing one of
//! the traits here instead. Defining a new function is defining a new marker
//! and implementing the matching trait for it.

use crate::boolean::Bool;

/// A unary type-level function, applied element-wise by
/// [`Transform`](crate::ops::Transform).
///
/// # Examples
///
/// A function wrapping its argument in [`Box`]:
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::func::Func;
///
/// struct Boxed;
///
/// impl<T> Func<T> for Boxed {
///     type Output = Box<T>;
/// }
///
/// assert_type_eq_all!(<Boxed as Func<i32>>::Output, Box<i32>);
/// ```
pub trait Func<T> {
    /// The result of applying the function to `T`.
    type Output;
}

/// A type-level classifier mapping each element type to a compile-time
/// boolean. Used by [`Filter`](crate::ops::Filter), [`Any`](crate::ops::Any),
/// and [`Find`](crate::ops::Find).
///
/// Trait coherence in Rust is open-world: a predicate cannot say "and `False`
/// for everything else", so each predicate must enumerate the element types it
/// rejects as well as the ones it accepts. The [`predicate!`](crate::predicate)
/// macro generates both tables:
///
/// ```
/// use tuplicity::boolean::{Bool, True};
/// use tuplicity::func::Predicate;
///
/// tuplicity::predicate! {
///     /// Holds for the built-in floating point primitives.
///     pub IsFloat {
///         holds: f32 | f64,
///         fails: i8 | i16 | i32 | i64 | char | bool,
///     }
/// }
///
/// assert!(<IsFloat as Predicate<f64>>::Holds::VALUE);
/// assert!(!<IsFloat as Predicate<char>>::Holds::VALUE);
/// ```
pub trait Predicate<T> {
    /// Whether the predicate holds for `T`.
    type Holds: Bool;
}

/// A binary step operation folded across a sequence by
/// [`Reduce`](crate::ops::Reduce).
///
/// The accumulator is an arbitrary type: a list for reducers that rebuild a
/// sequence, a [`Bool`] for reducers that aggregate a test, or a bookkeeping
/// marker carrying whatever auxiliary state the step needs. Each reducer
/// defines its own accumulator shape; the fold engine only threads it through.
pub trait Reducer<Acc, T> {
    /// The accumulator resulting from one application of the step.
    type Output;
}

/// Define a [`Predicate`] by enumerating the element types it holds for and
/// the ones it fails for.
///
/// The expansion is a unit marker struct plus one `Predicate` impl per listed
/// type. See [`Predicate`] for why the `fails` table must be written out.
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
/// ```
#[macro_export]
macro_rules! predicate {
    ($(#[$attr:meta])* $vis:vis $name:ident {
        holds: $($yes:ty)|* $(,)?
    }) => {
        $crate::predicate! {
            $(#[$attr])* $vis $name {
                holds: $($yes)|*,
                fails:,
            }
        }
    };
    ($(#[$attr:meta])* $vis:vis $name:ident {
        holds: $($yes:ty)|*,
        fails: $($no:ty)|* $(,)?
    }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $vis struct $name;

        $(
            impl $crate::func::Predicate<$yes> for $name {
                type Holds = $crate::boolean::True;
            }
        )*

        $(
            impl $crate::func::Predicate<$no> for $name {
                type Holds = $crate::boolean::False;
            }
        )*
    };
}

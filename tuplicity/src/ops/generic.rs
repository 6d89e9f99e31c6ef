//! Decomposing generic instantiations into argument sequences, and applying
//! argument sequences back to type constructors.
//!
//! Rust has no higher-kinded type parameters, so an unapplied constructor like
//! `Option` cannot be passed to an operation directly. Instead a constructor
//! is *defunctionalized*: represented by a unit marker type implementing
//! [`Apply`]. The [`generic!`](crate::generic) macro defines the marker and
//! wires up both directions at once; markers for the common standard library
//! constructors are predefined here.

use crate::tuple::{List, Tuple};

/// A defunctionalized type constructor: applying it to a list of argument
/// types yields the instantiated type.
pub trait Apply<Args> {
    /// The constructor instantiated with `Args`.
    type Applied;
}

/// Decompose a generic instantiation into the constructor that built it and
/// the list of its type arguments.
///
/// Only types registered as instantiations — via [`generic!`](crate::generic)
/// or the predefined standard library impls — satisfy this bound; asking to
/// decompose anything else is a compile error.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a registered generic instantiation",
    note = "register the constructor with `tuplicity::generic!` to decompose its instantiations"
)]
pub trait Decompose {
    /// The marker for the constructor, implementing [`Apply`].
    type Template: Apply<Self::Args, Applied = Self>;

    /// The constructor's type arguments, as a list.
    type Args;
}

/// The type constructor `F` instantiated with the elements of the sequence
/// `Seq` as its arguments — the inverse of [`DecomposeOf`].
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::{AssignOf, OfResult};
///
/// assert_type_eq_all!(AssignOf<OfResult, (i32, String)>, Result<i32, String>);
/// ```
pub type AssignOf<F, Seq> = <F as Apply<<Seq as Tuple>::AsList>>::Applied;

/// The type arguments of the generic instantiation `T`, as a tuple.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::DecomposeOf;
///
/// assert_type_eq_all!(DecomposeOf<Result<i32, String>>, (i32, String));
/// assert_type_eq_all!(DecomposeOf<Option<char>>, (char,));
/// ```
pub type DecomposeOf<T> = <<T as Decompose>::Args as List>::AsTuple;

/// The constructor marker of the generic instantiation `T`.
///
/// Round-tripping through [`AssignOf`] reproduces the original type exactly:
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::{AssignOf, DecomposeOf, TemplateOf};
///
/// type T = Result<bool, u8>;
/// assert_type_eq_all!(AssignOf<TemplateOf<T>, DecomposeOf<T>>, T);
/// ```
pub type TemplateOf<T> = <T as Decompose>::Template;

/// Register a type constructor for [`Decompose`]/[`Apply`].
///
/// The expansion is a unit marker struct implementing [`Apply`], plus the
/// [`Decompose`] impl for the constructor's instantiations.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::{AssignOf, DecomposeOf};
///
/// pub struct Pair<A, B>(A, B);
///
/// tuplicity::generic! {
///     /// The constructor of `Pair`.
///     pub OfPair for Pair<A, B>
/// }
///
/// assert_type_eq_all!(DecomposeOf<Pair<i32, char>>, (i32, char));
/// assert_type_eq_all!(AssignOf<OfPair, (i32, char)>, Pair<i32, char>);
/// ```
#[macro_export]
macro_rules! generic {
    ($(#[$attr:meta])* $vis:vis $marker:ident for $ty:ident<$($p:ident),+ $(,)?>) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $vis struct $marker;

        impl<$($p),+> $crate::ops::generic::Apply<$crate::generic!(@list $($p),+)> for $marker {
            type Applied = $ty<$($p),+>;
        }

        impl<$($p),+> $crate::ops::generic::Decompose for $ty<$($p),+> {
            type Template = $marker;
            type Args = $crate::generic!(@list $($p),+);
        }
    };
    (@list) => { () };
    (@list $head:ident $(, $tail:ident)*) => { ($head, $crate::generic!(@list $($tail),*)) };
}

crate::generic! {
    /// The constructor of [`Option`].
    pub OfOption for Option<T>
}

crate::generic! {
    /// The constructor of [`Result`].
    pub OfResult for Result<T, E>
}

crate::generic! {
    /// The constructor of [`Box`].
    pub OfBox for Box<T>
}

crate::generic! {
    /// The constructor of [`Vec`].
    pub OfVec for Vec<T>
}

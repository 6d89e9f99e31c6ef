//! Element-wise transformation.

use crate::func::Func;
use crate::tuple::{List, Tuple};

/// Apply the type-level function `F` to every element of a list, preserving
/// order and length.
pub trait Transform<F> {
    /// The transformed list.
    type Transformed;
}

impl<F> Transform<F> for () {
    type Transformed = ();
}

impl<F, H, T> Transform<F> for (H, T)
where
    F: Func<H>,
    T: Transform<F>,
{
    type Transformed = (F::Output, T::Transformed);
}

/// The sequence `Seq` with `F` applied to each element.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::func::Func;
/// use tuplicity::ops::TransformOf;
///
/// struct Optioned;
///
/// impl<T> Func<T> for Optioned {
///     type Output = Option<T>;
/// }
///
/// assert_type_eq_all!(
///     TransformOf<(i32, f32, char), Optioned>,
///     (Option<i32>, Option<f32>, Option<char>),
/// );
/// assert_type_eq_all!(TransformOf<(), Optioned>, ());
/// ```
pub type TransformOf<Seq, F> =
    <<<Seq as Tuple>::AsList as Transform<F>>::Transformed as List>::AsTuple;

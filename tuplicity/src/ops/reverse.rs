//! Reversal.

use crate::tuple::{List, Tuple};

/// Reverse the order of a list's elements.
///
/// The empty list and the single-element list are each their own reverse, and
/// reversal is an involution: reversing twice gives back the original list.
pub trait Reverse {
    /// The reversed list.
    type Reversed;
}

impl<L> Reverse for L
where
    L: ReverseOnto<()>,
{
    type Reversed = <L as ReverseOnto<()>>::Output;
}

/// Reverse `Self` onto an already-reversed accumulator: the head moves onto
/// the accumulator at each step, so the last element ends up outermost.
pub trait ReverseOnto<Acc> {
    /// The accumulator with `Self`'s elements reversed onto it.
    type Output;
}

impl<Acc> ReverseOnto<Acc> for () {
    type Output = Acc;
}

impl<H, T, Acc> ReverseOnto<Acc> for (H, T)
where
    T: ReverseOnto<(H, Acc)>,
{
    type Output = <T as ReverseOnto<(H, Acc)>>::Output;
}

/// The sequence `Seq` with its elements in the opposite order.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::ops::ReverseOf;
///
/// assert_type_eq_all!(ReverseOf<(i32, f32, char)>, (char, f32, i32));
/// assert_type_eq_all!(ReverseOf<(i32,)>, (i32,));
/// assert_type_eq_all!(ReverseOf<()>, ());
/// assert_type_eq_all!(ReverseOf<ReverseOf<(i32, f32, char)>>, (i32, f32, char));
/// ```
pub type ReverseOf<Seq> = <<<Seq as Tuple>::AsList as Reverse>::Reversed as List>::AsTuple;

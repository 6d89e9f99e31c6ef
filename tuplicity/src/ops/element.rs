//! Classification of a single sequence slot.

use crate::boolean::Bool;

/// Classify one element of a sequence: whether it is itself a sequence, and
/// what it contributes when spliced into a one-level flattening.
///
/// Every tuple type up to size 32 implements `Element` with
/// [`IsSeq`](Element::IsSeq) `=` [`True`](crate::boolean::True) and its own
/// elements as the spliced form (these impls are generated alongside the
/// [`Tuple`](crate::tuple::Tuple) conversions). The standard leaf types —
/// the primitives, `String`, `&'static str` — implement it with `IsSeq =`
/// [`False`](crate::boolean::False) and a singleton spliced form.
///
/// Trait coherence is open-world, so "everything that is not a tuple" cannot
/// be covered by a blanket impl; a user-defined type only participates in
/// flattening once it is registered as a leaf with [`leaf!`](crate::leaf):
///
/// ```
/// struct Widget;
///
/// tuplicity::leaf!(Widget);
/// ```
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::boolean::{False, True};
/// use tuplicity::ops::Element;
///
/// assert_type_eq_all!(<(f32, char) as Element>::IsSeq, True);
/// assert_type_eq_all!(<(f32, char) as Element>::Spliced, (f32, (char, ())));
/// assert_type_eq_all!(<i32 as Element>::IsSeq, False);
/// assert_type_eq_all!(<i32 as Element>::Spliced, (i32, ()));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is neither a tuple nor a registered leaf type",
    note = "flattening must classify every element; mark `{Self}` as a non-sequence element with `tuplicity::leaf!({Self});`"
)]
pub trait Element {
    /// Whether this element is itself a sequence.
    type IsSeq: Bool;

    /// The list this element contributes when spliced into a one-level
    /// flattening: its own elements if it is a sequence, otherwise just
    /// itself.
    type Spliced;
}

/// Register one or more types as leaf (non-sequence) elements.
///
/// A leaf element passes through flattening unchanged. The primitives and the
/// common standard library scalars are pre-registered; invoke this macro for
/// your own element types.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use tuplicity::prelude::*;
///
/// struct Red;
/// struct Green;
///
/// tuplicity::leaf!(Red, Green);
///
/// assert_type_eq_all!(FlattenOnceOf<(Red, (Green, Red))>, (Red, Green, Red));
/// ```
#[macro_export]
macro_rules! leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::ops::element::Element for $ty {
                type IsSeq = $crate::boolean::False;
                type Spliced = ($ty, ());
            }
        )*
    };
}

crate::leaf! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    bool, char,
    String, &'static str,
}

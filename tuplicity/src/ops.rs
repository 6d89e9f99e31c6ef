//! The combinator operations over type sequences.
//!
//! Each operation is a trait over the inductive list form of a sequence (see
//! [`tuple`](crate::tuple)), together with a tuple-facing type alias so that
//! callers can stay entirely in tuple syntax: [`ReverseOf`]`<(i32, f32)>` is
//! `(f32, i32)`, and so on. The aliases are the intended public surface; the
//! traits are exposed for use in bounds of generic code.
//!
//! Operations that aggregate across all elements — [`Filter`], [`Any`],
//! [`FlattenOnce`], [`ConcatAll`], [`SubSeq`] — are folds: instances of
//! [`Reduce`] with an operation-specific [`Reducer`](crate::func::Reducer) and
//! accumulator shape. The remaining operations recurse on the list structure
//! directly.

pub mod concat;
pub mod element;
pub mod filter;
pub mod flatten;
pub mod generic;
pub mod reduce;
pub mod reverse;
pub mod search;
pub mod transform;
pub mod window;

pub use concat::{Concat, ConcatAll, ConcatAllOf, ConcatOf, EachToList, PushBackOf, PushFrontOf};
pub use element::Element;
pub use filter::{Filter, FilterOf, KeepIf};
pub use flatten::{Flatten, FlattenOf, FlattenOnce, FlattenOnceOf, HasNested};
pub use generic::{Apply, AssignOf, Decompose, DecomposeOf, OfBox, OfOption, OfResult, OfVec, TemplateOf};
pub use reduce::{Reduce, ReduceOf};
pub use reverse::{Reverse, ReverseOf, ReverseOnto};
pub use search::{Any, AnyOf, AnyStep, Find, FindIndexOf, FindOf, Member};
pub use transform::{Transform, TransformOf};
pub use window::{Insert, InsertOf, NonEmpty, SubSeq, SubSeqOf};

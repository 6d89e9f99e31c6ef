//! A fluent, zero-sized façade for composing operations left to right.
//!
//! Nesting type aliases reads inside-out:
//! `ReverseOf<FilterOf<(i32, f32, i32), IsInt>>`. A [`Chain`] carries the
//! running sequence through ordinary method calls instead, so the same
//! pipeline reads in application order. The wrapper is pure convenience: it
//! holds no state beyond the sequence type itself (it is zero-sized and
//! vanishes at compile time), and every method produces exactly the type the
//! underlying alias would.
//!
//! # Examples
//!
//! ```
//! use tuplicity::prelude::*;
//!
//! tuplicity::predicate! {
//!     /// Holds for the built-in integer primitives.
//!     pub IsInt {
//!         holds: i8 | i16 | i32 | i64,
//!         fails: f32 | f64 | char | bool,
//!     }
//! }
//!
//! let out = seq::<(i32, f32, i32, char)>()
//!     .filter::<IsInt>()
//!     .push_back::<(bool,)>()
//!     .reverse()
//!     .finish();
//!
//! fn expects(_: std::marker::PhantomData<(bool, i32, i32)>) {}
//! expects(out);
//! ```

use std::marker::PhantomData;

use crate::boolean::Bool;
use crate::ops::concat::Concat;
use crate::ops::filter::Filter;
use crate::ops::flatten::{Flatten, FlattenOnce};
use crate::ops::generic::Apply;
use crate::ops::reduce::Reduce;
use crate::ops::reverse::Reverse;
use crate::ops::search::{Any, Find, Member};
use crate::ops::transform::Transform;
use crate::ops::window::{Insert, SubSeq};
use crate::tuple::{HasLength, List, Tuple};
use crate::unary::{Number, ToUnary, Unary, UnaryOf};

/// A sequence being threaded through a left-to-right pipeline of operations.
///
/// Construct one with [`seq`], transform it with the chainable methods, and
/// take the result back out with [`finish`](Chain::finish) (or one of the
/// terminal methods, for operations whose result is not a sequence).
#[derive(derivative::Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
#[must_use]
pub struct Chain<Seq: Tuple>(PhantomData<Seq>);

/// Start a pipeline over the sequence `Seq`.
pub fn seq<Seq: Tuple>() -> Chain<Seq> {
    Chain(PhantomData)
}

impl<Seq: Tuple> Chain<Seq> {
    /// End the pipeline, yielding the running sequence as a phantom value
    /// suitable for type-level inspection.
    pub fn finish(self) -> PhantomData<Seq> {
        PhantomData
    }

    /// The length of the running sequence.
    pub fn len(self) -> usize
    where
        Seq::AsList: HasLength,
    {
        <<Seq::AsList as HasLength>::Length as Unary>::VALUE
    }

    /// Whether the running sequence is empty.
    pub fn is_empty(self) -> bool
    where
        Seq::AsList: HasLength,
    {
        self.len() == 0
    }

    /// Concatenate the sequence `B` after the running sequence.
    pub fn concat<B>(self) -> Chain<crate::ops::ConcatOf<Seq, B>>
    where
        B: Tuple,
        Seq::AsList: Concat<B::AsList>,
        <Seq::AsList as Concat<B::AsList>>::Concatenated: List,
    {
        Chain(PhantomData)
    }

    /// Prepend the elements of the tuple `Items`, in the order given.
    pub fn push_front<Items>(self) -> Chain<crate::ops::PushFrontOf<Seq, Items>>
    where
        Items: Tuple,
        Items::AsList: Concat<Seq::AsList>,
        <Items::AsList as Concat<Seq::AsList>>::Concatenated: List,
    {
        Chain(PhantomData)
    }

    /// Append the elements of the tuple `Items`, in the order given.
    pub fn push_back<Items>(self) -> Chain<crate::ops::PushBackOf<Seq, Items>>
    where
        Items: Tuple,
        Seq::AsList: Concat<Items::AsList>,
        <Seq::AsList as Concat<Items::AsList>>::Concatenated: List,
    {
        Chain(PhantomData)
    }

    /// Keep the elements at positions `[START, START + LEN)`; out-of-range
    /// positions are silently clipped.
    pub fn subseq<const START: usize, const LEN: usize>(
        self,
    ) -> Chain<crate::ops::SubSeqOf<Seq, START, LEN>>
    where
        Number<START>: ToUnary,
        Number<LEN>: ToUnary,
        Seq::AsList: SubSeq<UnaryOf<START>, UnaryOf<LEN>>,
        <Seq::AsList as SubSeq<UnaryOf<START>, UnaryOf<LEN>>>::Extracted: List,
    {
        Chain(PhantomData)
    }

    /// Insert the elements of the tuple `Items` at position `INDEX`.
    ///
    /// The running sequence must be non-empty and `INDEX` must be strictly
    /// less than its length; both are compile-time preconditions.
    pub fn insert<const INDEX: usize, Items>(
        self,
    ) -> Chain<crate::ops::InsertOf<Seq, INDEX, Items>>
    where
        Items: Tuple,
        Number<INDEX>: ToUnary,
        Seq::AsList: Insert<UnaryOf<INDEX>, Items::AsList>,
        <Seq::AsList as Insert<UnaryOf<INDEX>, Items::AsList>>::Inserted: List,
    {
        Chain(PhantomData)
    }

    /// Apply the type-level function `F` to every element.
    pub fn transform<F>(self) -> Chain<crate::ops::TransformOf<Seq, F>>
    where
        Seq::AsList: Transform<F>,
        <Seq::AsList as Transform<F>>::Transformed: List,
    {
        Chain(PhantomData)
    }

    /// Keep the elements for which the predicate `P` holds.
    pub fn filter<P>(self) -> Chain<crate::ops::FilterOf<Seq, P>>
    where
        Seq::AsList: Filter<P>,
        <Seq::AsList as Filter<P>>::Filtered: List,
    {
        Chain(PhantomData)
    }

    /// Reverse the order of the elements.
    pub fn reverse(self) -> Chain<crate::ops::ReverseOf<Seq>>
    where
        Seq::AsList: Reverse,
        <Seq::AsList as Reverse>::Reversed: List,
    {
        Chain(PhantomData)
    }

    /// Splice each element that is itself a sequence in place, one level
    /// deep.
    pub fn flatten_once(self) -> Chain<crate::ops::FlattenOnceOf<Seq>>
    where
        Seq::AsList: FlattenOnce,
        <Seq::AsList as FlattenOnce>::Flattened: List,
    {
        Chain(PhantomData)
    }

    /// Flatten until no element is a sequence.
    pub fn flatten(self) -> Chain<crate::ops::FlattenOf<Seq>>
    where
        Seq::AsList: Flatten,
        <Seq::AsList as Flatten>::Flattened: List,
    {
        Chain(PhantomData)
    }

    /// Assert at compile time that the element type `T` occurs in the running
    /// sequence, then continue the pipeline unchanged.
    ///
    /// `Index` is found by inference; pin it explicitly if `T` occurs more
    /// than once.
    pub fn includes<T, Index>(self) -> Chain<Seq>
    where
        Seq::AsList: Member<T, Index>,
    {
        self
    }

    /// Whether the predicate `P` holds for at least one element.
    pub fn any<P>(self) -> bool
    where
        Seq::AsList: Any<P>,
    {
        <<Seq::AsList as Any<P>>::Holds as Bool>::VALUE
    }

    /// The zero-based index of the first element satisfying `P`.
    ///
    /// Fails to compile when no element matches.
    pub fn find_index<P>(self) -> usize
    where
        Seq::AsList: Find<P>,
    {
        <<Seq::AsList as Find<P>>::Index as Unary>::VALUE
    }

    /// The first element satisfying `P`, as a phantom value.
    ///
    /// Fails to compile when no element matches.
    pub fn find<P>(self) -> PhantomData<crate::ops::FindOf<Seq, P>>
    where
        Seq::AsList: Find<P>,
    {
        PhantomData
    }

    /// Fold the reducer `R` across the sequence starting from `Init`,
    /// yielding the raw final accumulator as a phantom value.
    pub fn reduce<R, Init>(self) -> PhantomData<crate::ops::ReduceOf<Seq, R, Init>>
    where
        Seq::AsList: Reduce<R, Init>,
    {
        PhantomData
    }

    /// Instantiate the type constructor `F` with the running sequence's
    /// elements as its arguments, as a phantom value.
    pub fn assign<F>(self) -> PhantomData<crate::ops::AssignOf<F, Seq>>
    where
        F: Apply<Seq::AsList>,
    {
        PhantomData
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::ConcatAllOf;

    crate::predicate! {
        /// Holds for the built-in integer primitives.
        pub IsInt {
            holds: i8 | i16 | i32 | i64,
            fails: f32 | f64 | char | bool,
        }
    }

    fn expects<Expected: Tuple>(_: PhantomData<Expected>) {}

    /// A pipeline must produce exactly what the underlying aliases produce.
    #[test]
    fn chain_matches_direct_application() {
        type Direct =
            crate::ops::ReverseOf<crate::ops::FilterOf<(i32, f32, i32, char), IsInt>>;

        let chained = seq::<(i32, f32, i32, char)>()
            .filter::<IsInt>()
            .reverse()
            .finish();
        expects::<Direct>(chained);
    }

    #[test]
    fn terminal_values() {
        assert_eq!(seq::<(i32, f32, char)>().len(), 3);
        assert!(seq::<()>().is_empty());
        assert!(seq::<(i32, f32)>().any::<IsInt>());
        assert!(!seq::<(f32, char)>().any::<IsInt>());
        assert_eq!(seq::<(f32, i32, char)>().find_index::<IsInt>(), 1);
    }

    #[test]
    fn structural_pipeline() {
        let out = seq::<(i32, f32)>()
            .insert::<1, (char,)>()
            .subseq::<1, 1>()
            .finish();
        expects::<(char,)>(out);

        let out = seq::<(i32, (f32, char), f64)>().flatten_once().finish();
        expects::<(i32, f32, char, f64)>(out);

        let nested = seq::<((i32,), (f32, char))>().includes::<(f32, char), _>();
        let flat = nested.flatten();
        expects::<(i32, f32, char)>(flat.finish());

        let all: PhantomData<ConcatAllOf<((i32,), (f32, char), ())>> = PhantomData;
        expects::<(i32, f32, char)>(all);
    }
}

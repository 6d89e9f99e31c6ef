/*!
> **tuplicity (coinage):** The quality of being a tuple; the state of having
> one's structure known, member by member, at compile time.
>
> **tuplicity (crate):** Type-level algebra over Rust tuples.

A tuple type is a sequence of types, and sequences can be computed with:
transformed element by element, filtered by a predicate, concatenated,
windowed, reversed, flattened, searched, and folded — all before the program
runs. This crate provides that algebra for ordinary Rust tuples, entirely at
the type level. There are no values involved (every operation acts on types
and produces types), no runtime cost, and no unsafe code; when a precondition
is violated, the result is a compile error with a message naming the actual
mistake.

Underneath, every operation is a fold: a single [`Reduce`](ops::Reduce)
engine walks the sequence once, threading an accumulator through a
[`Reducer`](func::Reducer), and each operation is a particular reducer plus a
projection of the final accumulator. User-defined element-wise operations
plug into the same seams: a [`Func`](func::Func) maps one type to another, a
[`Predicate`](func::Predicate) classifies one type as matching or not, and a
[`Reducer`](func::Reducer) folds a whole sequence into anything at all.

## Quick reference

The **[`prelude`]** module exports the common surface; most programs should
`use tuplicity::prelude::*;`.

Every operation is available in two forms: a trait over the inductive list
representation (for writing bounds), and a type alias over flat tuples (for
everyday use). The aliases are the friendly face:

| Alias | Result | Chain method |
| :---- | :----- | :----------- |
| [`TransformOf<Seq, F>`](ops::TransformOf) | each element mapped through the [`Func`](func::Func) `F` | [`transform`](Chain::transform) |
| [`FilterOf<Seq, P>`](ops::FilterOf) | the elements for which the [`Predicate`](func::Predicate) `P` holds | [`filter`](Chain::filter) |
| [`ConcatOf<A, B>`](ops::ConcatOf) | `A` followed by `B` | [`concat`](Chain::concat) |
| [`PushFrontOf<Seq, Items>`](ops::PushFrontOf) | `Items` prepended to `Seq` | [`push_front`](Chain::push_front) |
| [`PushBackOf<Seq, Items>`](ops::PushBackOf) | `Items` appended to `Seq` | [`push_back`](Chain::push_back) |
| [`SubSeqOf<Seq, START, LEN>`](ops::SubSeqOf) | the window `[START, START + LEN)`, clipped to the sequence | [`subseq`](Chain::subseq) |
| [`InsertOf<Seq, INDEX, Items>`](ops::InsertOf) | `Items` spliced in at `INDEX` (bounds checked at compile time) | [`insert`](Chain::insert) |
| [`ReverseOf<Seq>`](ops::ReverseOf) | the elements in reverse order | [`reverse`](Chain::reverse) |
| [`FlattenOnceOf<Seq>`](ops::FlattenOnceOf) | nested sequences spliced in place, one level deep | [`flatten_once`](Chain::flatten_once) |
| [`FlattenOf<Seq>`](ops::FlattenOf) | flattened until no element is a sequence | [`flatten`](Chain::flatten) |
| [`AnyOf<Seq, P>`](ops::AnyOf) | [`True`](boolean::True) if some element satisfies `P` | [`any`](Chain::any) |
| [`FindOf<Seq, P>`](ops::FindOf) | the first element satisfying `P` (compile error if none) | [`find`](Chain::find) |
| [`FindIndexOf<Seq, P>`](ops::FindIndexOf) | its index, as a unary number | [`find_index`](Chain::find_index) |
| [`ConcatAllOf<Seqs>`](ops::ConcatAllOf) | a sequence of sequences joined end to end | — |
| [`ReduceOf<Seq, R, Init>`](ops::ReduceOf) | the raw result of folding the [`Reducer`](func::Reducer) `R` | [`reduce`](Chain::reduce) |
| [`DecomposeOf<T>`](ops::DecomposeOf) | the type arguments of the generic instantiation `T` | — |
| [`AssignOf<F, Seq>`](ops::AssignOf) | the constructor `F` applied to the elements of `Seq` | [`assign`](Chain::assign) |

Membership is a constraint rather than an alias: bound a sequence by
[`Member<T, Index>`](ops::Member) (or call [`includes`](Chain::includes) in a
chain) to require at compile time that it contains `T`.

Three macros define the user-extensible pieces:
[`predicate!`](crate::predicate) builds a [`Predicate`](func::Predicate) from
a table of types, [`generic!`](crate::generic) registers a type constructor
for decomposition and assignment, and [`leaf!`](crate::leaf) registers a type
as atomic for the flattening operations.

## Example

```
use static_assertions::assert_type_eq_all;
use tuplicity::prelude::*;

tuplicity::predicate! {
    /// Holds for the built-in integer primitives.
    pub IsInt {
        holds: i8 | i16 | i32 | i64,
        fails: f32 | f64 | char | bool,
    }
}

// Alias form: compute with types directly...
assert_type_eq_all!(FilterOf<(i32, f32, i64, char), IsInt>, (i32, i64));
assert_type_eq_all!(ReverseOf<(i32, f32, char)>, (char, f32, i32));
assert_type_eq_all!(FlattenOf<(i32, ((f32,), char))>, (i32, f32, char));

// ...or chain form: the same operations, reading left to right.
let out = seq::<(i32, f32, i64, char)>()
    .filter::<IsInt>()
    .push_back::<(bool,)>()
    .reverse()
    .finish();
fn expects(_: std::marker::PhantomData<(bool, i64, i32)>) {}
expects(out);
```
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod boolean;
pub mod chain;
pub mod func;
pub mod ops;
pub mod tuple;
pub mod unary;

pub use chain::{seq, Chain};

/// The prelude module for quickly getting started with Tuplicity.
///
/// This module is designed to be imported as `use tuplicity::prelude::*;`, which brings into
/// scope the operation aliases, the chaining interface, and the traits needed to write bounds
/// over them.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::chain::{seq, Chain};
    #[doc(no_inline)]
    pub use crate::func::{Func, Predicate, Reducer};
    #[doc(no_inline)]
    pub use crate::ops::{
        AnyOf, AssignOf, ConcatAllOf, ConcatOf, DecomposeOf, FilterOf, FindIndexOf, FindOf,
        FlattenOf, FlattenOnceOf, InsertOf, Member, PushBackOf, PushFrontOf, ReduceOf, ReverseOf,
        SubSeqOf, TemplateOf, TransformOf,
    };
    #[doc(no_inline)]
    pub use crate::tuple::{LengthOf, List, Tuple};
    #[doc(no_inline)]
    pub use crate::unary::{Number, ToConstant, ToUnary, Unary, UnaryOf, S, Z};
}

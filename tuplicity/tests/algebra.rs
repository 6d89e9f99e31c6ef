use std::marker::PhantomData;

use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};
use tuplicity::ops::ReduceOf;
use tuplicity::prelude::*;
use tuplicity::unary::types::*;

tuplicity::predicate! {
    /// Holds for the built-in integer primitives.
    pub IsInt {
        holds: i8 | i16 | i32 | i64,
        fails: f32 | f64 | char | bool,
    }
}

tuplicity::predicate! {
    /// Holds for the built-in floating point primitives.
    pub IsFloat {
        holds: f32 | f64,
        fails: i8 | i16 | i32 | i64 | char | bool,
    }
}

/// Wraps a type in `Option`.
#[derive(Debug, Clone, Copy)]
pub struct Lift;

impl<T> Func<T> for Lift {
    type Output = Option<T>;
}

/// Prepends each element to the accumulator list, so that folding over a list
/// rebuilds it in reverse.
#[derive(Debug, Clone, Copy)]
pub struct Prepend;

impl<Acc, T> Reducer<Acc, T> for Prepend {
    type Output = (T, Acc);
}

// Concatenation is associative with the empty tuple as identity.
type A = (i32, f32);
type B = (char,);
type C = (bool, u8);
assert_type_eq_all!(ConcatOf<ConcatOf<A, B>, C>, ConcatOf<A, ConcatOf<B, C>>);
assert_type_eq_all!(ConcatOf<A, ()>, A);
assert_type_eq_all!(ConcatOf<(), A>, A);
assert_type_eq_all!(ConcatAllOf<(A, B, C)>, (i32, f32, char, bool, u8));
assert_type_eq_all!(ConcatAllOf<()>, ());

// Pushing is concatenation with the arguments in the right order.
assert_type_eq_all!(PushFrontOf<A, B>, (char, i32, f32));
assert_type_eq_all!(PushBackOf<A, B>, (i32, f32, char));
assert_type_eq_all!(PushFrontOf<(), A>, A);

// Reversal is an involution and distributes (flipped) over concatenation.
assert_type_eq_all!(ReverseOf<ReverseOf<(i32, f32, char)>>, (i32, f32, char));
assert_type_eq_all!(ReverseOf<()>, ());
assert_type_eq_all!(
    ReverseOf<ConcatOf<A, B>>,
    ConcatOf<ReverseOf<B>, ReverseOf<A>>,
);

// Filtering preserves relative order, keeps everything under an
// always-holding view of the elements, and is idempotent.
assert_type_eq_all!(FilterOf<(i32, f32, i64, char), IsInt>, (i32, i64));
assert_type_eq_all!(FilterOf<(f32, char), IsInt>, ());
assert_type_eq_all!(FilterOf<(), IsInt>, ());
assert_type_eq_all!(
    FilterOf<FilterOf<(i32, f32, i64), IsInt>, IsInt>,
    FilterOf<(i32, f32, i64), IsInt>,
);

// Transformation preserves length and order.
assert_type_eq_all!(
    TransformOf<(i32, char), Lift>,
    (Option<i32>, Option<char>),
);
assert_type_eq_all!(TransformOf<(), Lift>, ());
assert_type_eq_all!(LengthOf<TransformOf<(i32, char), Lift>>, LengthOf<(i32, char)>);

// Windows clip silently; a full-width window is the identity.
assert_type_eq_all!(SubSeqOf<(i32, f32, char, bool), 1, 2>, (f32, char));
assert_type_eq_all!(SubSeqOf<(i32, f32, char), 0, 3>, (i32, f32, char));
assert_type_eq_all!(SubSeqOf<(i32, f32), 1, 50>, (f32,));
assert_type_eq_all!(SubSeqOf<(i32, f32), 9, 1>, ());
assert_type_eq_all!(SubSeqOf<(), 0, 3>, ());

// Inserting and then windowing at the same position gives back the items.
assert_type_eq_all!(InsertOf<(i32, f32), 1, (char, bool)>, (i32, char, bool, f32));
assert_type_eq_all!(SubSeqOf<InsertOf<(i32, f32), 1, (char, bool)>, 1, 2>, (char, bool));
assert_type_eq_all!(InsertOf<(i32, f32), 0, (char,)>, (char, i32, f32));

// Flattening splices one level at a time and reaches a fixpoint.
assert_type_eq_all!(FlattenOnceOf<(i32, (f32, char), f64)>, (i32, f32, char, f64));
assert_type_eq_all!(FlattenOnceOf<(i32, (), f64)>, (i32, f64));
assert_type_eq_all!(FlattenOnceOf<(i32, f64)>, (i32, f64));
assert_type_eq_all!(
    FlattenOf<(i32, ((f32, (char,)), bool), f64)>,
    (i32, f32, char, bool, f64),
);
assert_type_eq_all!(FlattenOf<FlattenOf<(i32, ((f32,),))>>, FlattenOf<(i32, ((f32,),))>);

// Searching: any-match is total, first-match is partial.
assert_type_eq_all!(AnyOf<(i32, f32, char), IsFloat>, tuplicity::boolean::True);
assert_type_eq_all!(AnyOf<(i32, char), IsFloat>, tuplicity::boolean::False);
assert_type_eq_all!(AnyOf<(), IsFloat>, tuplicity::boolean::False);
assert_type_eq_all!(FindOf<(i32, f32, f64), IsFloat>, f32);
assert_type_eq_all!(FindIndexOf<(i32, f32, f64), IsFloat>, _1);
assert_type_eq_all!(FindIndexOf<(f64, i32), IsFloat>, _0);

// The found element always satisfies the predicate that found it.
assert_type_eq_all!(
    AnyOf<(FindOf<(i32, f32, f64), IsFloat>,), IsFloat>,
    tuplicity::boolean::True,
);

// Membership is a constraint: satisfiable where the type occurs, refutable
// where it does not.
assert_impl_all!(<(i32, f32, char) as Tuple>::AsList: Member<char, _2>);
assert_impl_all!(<(i32, f32, char) as Tuple>::AsList: Member<i32, _0>);
assert_not_impl_any!(<(i32, f32) as Tuple>::AsList: Member<char, _0>);
assert_not_impl_any!(<(i32, f32) as Tuple>::AsList: Member<char, _1>);

// Reduction over the empty sequence is the initial accumulator, and the
// prepend reducer rebuilds the list reversed.
assert_type_eq_all!(ReduceOf<(), Prepend, ()>, ());
assert_type_eq_all!(
    ReduceOf<(i32, f32, char), Prepend, ()>,
    <ReverseOf<(i32, f32, char)> as Tuple>::AsList,
);

// Decomposition and assignment are mutually inverse.
assert_type_eq_all!(DecomposeOf<Result<i32, String>>, (i32, String));
assert_type_eq_all!(
    AssignOf<TemplateOf<Result<i32, String>>, DecomposeOf<Result<i32, String>>>,
    Result<i32, String>,
);
assert_type_eq_all!(AssignOf<tuplicity::ops::OfOption, (char,)>, Option<char>);
assert_type_eq_all!(DecomposeOf<Vec<u8>>, (u8,));

// Chained pipelines produce exactly what the aliases produce.
#[test]
fn chain_agrees_with_aliases() {
    fn expects<Expected: Tuple>(_: PhantomData<Expected>) {}

    let out = seq::<(i32, f32, i64, char)>()
        .filter::<IsInt>()
        .push_back::<(bool,)>()
        .reverse()
        .finish();
    expects::<ReverseOf<PushBackOf<FilterOf<(i32, f32, i64, char), IsInt>, (bool,)>>>(out);

    let out = seq::<(i32, (f32, char))>()
        .flatten()
        .insert::<2, (bool,)>()
        .subseq::<1, 2>()
        .finish();
    expects::<(f32, bool)>(out);
}

#[test]
fn terminal_values() {
    assert_eq!(seq::<(i32, f32, char)>().len(), 3);
    assert!(seq::<()>().is_empty());
    assert!(!seq::<(i32, f32, char)>().is_empty());
    assert!(seq::<(i32, f32)>().any::<IsFloat>());
    assert!(!seq::<(i32, char)>().any::<IsFloat>());
    assert_eq!(seq::<(i32, f32, f64)>().find_index::<IsFloat>(), 1);
    assert_eq!(<_2 as Unary>::VALUE, 2);
    assert_eq!(<UnaryOf<5> as Unary>::VALUE, 5);
}

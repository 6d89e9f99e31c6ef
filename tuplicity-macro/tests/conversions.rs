use static_assertions::assert_type_eq_all;
use tuplicity::tuple::{List, Tuple};
use tuplicity::unary::types::*;
use tuplicity::unary::UnaryOf;

// Flat tuples and their inductive list forms convert both ways.
assert_type_eq_all!(<() as Tuple>::AsList, ());
assert_type_eq_all!(<(i32,) as Tuple>::AsList, (i32, ()));
assert_type_eq_all!(<(i32, f32, char) as Tuple>::AsList, (i32, (f32, (char, ()))));
assert_type_eq_all!(<(i32, (f32, (char, ()))) as List>::AsTuple, (i32, f32, char));

// Constants bridge to unary numbers and back.
assert_type_eq_all!(UnaryOf<0>, _0);
assert_type_eq_all!(UnaryOf<3>, _3);
assert_type_eq_all!(UnaryOf<16>, _16);

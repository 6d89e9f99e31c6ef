//! Procedural macros used by and exported from the `tuplicity` crate.
//!
//! Two impl families in `tuplicity` cannot be written generically and must be
//! enumerated per arity or per constant: the conversions between flat tuples
//! and their inductive list form, and the bridge between `Number<N>` constants
//! and unary type-level numbers. The macros here generate both families. They
//! are invoked from fixed locations inside `tuplicity` and emit
//! `crate::`-relative paths, so they are not useful from any other crate.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse_macro_input, Ident, LitInt};

/// Generate `Tuple`, `List`, and `Element` impls for every tuple arity up to
/// and including the given maximum.
///
/// For each arity `k`, three impls are emitted: the flat tuple `(E1, ..., Ek)`
/// converts to the inductive list `(E1, (E2, ... (Ek, ())))`, that list
/// converts back, and the flat tuple classifies as a sequence element whose
/// spliced form is its own list of elements.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max: usize = match max.base10_parse() {
        Ok(max) => max,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut out = TokenStream2::new();
    for arity in 0..=max {
        out.extend(tuple_impls(arity));
    }
    out.into()
}

/// Generate the impls converting between `Number<N>` and the unary numbers,
/// for every `N` up to and including the given maximum.
#[proc_macro]
pub fn impl_unary_conversions(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max: usize = match max.base10_parse() {
        Ok(max) => max,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut out = TokenStream2::new();
    let mut unary = quote!(crate::unary::Z);
    for n in 0..=max {
        let n = LitInt::new(&n.to_string(), Span::call_site());
        out.extend(quote! {
            impl crate::unary::ToUnary for crate::unary::Number<#n> {
                type AsUnary = #unary;
            }

            impl crate::unary::ToConstant for #unary {
                type AsConstant = crate::unary::Number<#n>;
            }
        });
        unary = quote!(crate::unary::S<#unary>);
    }
    out.into()
}

/// The element type parameters `E1, ..., Ek` for a tuple of the given arity.
fn params(arity: usize) -> Vec<Ident> {
    (1..=arity)
        .map(|i| Ident::new(&format!("E{}", i), Span::call_site()))
        .collect()
}

/// The inductive list type `(E1, (E2, ... (Ek, ())))` over the given
/// parameters; the empty list for no parameters.
fn cons_list(params: &[Ident]) -> TokenStream2 {
    params
        .iter()
        .rev()
        .fold(quote!(()), |tail, head| quote!((#head, #tail)))
}

fn tuple_impls(arity: usize) -> TokenStream2 {
    let es = params(arity);
    let tuple = if arity == 0 {
        quote!(())
    } else {
        quote!((#(#es,)*))
    };
    let list = cons_list(&es);
    quote! {
        impl<#(#es),*> crate::tuple::Tuple for #tuple {
            type AsList = #list;
        }

        impl<#(#es),*> crate::tuple::List for #list {
            type AsTuple = #tuple;
        }

        impl<#(#es),*> crate::ops::element::Element for #tuple {
            type IsSeq = crate::boolean::True;
            type Spliced = #list;
        }
    }
}

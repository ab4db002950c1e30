//! Procedural macros for the `reftuple` crate. Use them through their re-exports from there.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    quote::ToTokens,
    reftuple_compiler::{lists, parse::Bound, unary, TupleExpr, TupleType},
    syn::parse_macro_input,
};

/// The type of a tuple, written with its element kinds: `T`, `const T`, `&'a mut T`, `&'a T`,
/// and `&'a move T`. Lifetimes may be left out wherever Rust would infer them.
///
/// # Examples
///
/// ```
/// use reftuple::{element::*, Tuple};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     Tuple![u8, const String, &'static mut i32, &'static [u8], &'static move Vec<u8>],
///     reftuple::Tuple<(
///         Val<u8>,
///         Const<String>,
///         Mut<'static, i32>,
///         Ref<'static, [u8]>,
///         Move<'static, Vec<u8>>,
///     )>,
/// );
/// assert_type_eq_all!(Tuple![], reftuple::Tuple<()>);
/// ```
///
/// Only references can be moved from, and a `const` element cannot be a reference:
///
/// ```compile_fail
/// type Bad = reftuple::Tuple![const &'static u8];
/// ```
///
/// See the documentation of the `reftuple` crate for details.
#[proc_macro]
#[allow(non_snake_case)]
pub fn Tuple(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as TupleType)
        .into_token_stream()
        .into()
}

/// Construct a tuple from a list of expressions, each of which may be prefixed by `ref`,
/// `ref mut`, `move`, or `const` to choose its element kind. An unprefixed expression is stored
/// by value.
///
/// # Examples
///
/// ```
/// use reftuple::prelude::*;
///
/// let (name, mut count, mut log) = (String::from("n"), 0, String::new());
/// let mut t = tuple![name, ref mut count, move log, const 1.5];
/// *t.get_mut::<1>() += 1;
/// t.get_mut::<2>().push_str("entry");
/// let _: &mut Tuple![String, &mut i32, &move String, const f64] = &mut t;
/// drop(t);
/// assert_eq!((count, log.as_str()), (1, "entry"));
/// ```
///
/// A `move` prefix followed by a closure's parameter list is the closure itself, by value:
///
/// ```
/// use reftuple::prelude::*;
///
/// let offset = 2;
/// let t = tuple![move |x: i32| x + offset];
/// assert_eq!((t.get::<0>())(1), 3);
/// ```
///
/// See the documentation of the `reftuple` crate for details.
#[proc_macro]
pub fn tuple(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as TupleExpr)
        .into_token_stream()
        .into()
}

/// **Internal implementation detail:** This proc-macro generates the per-arity impls for
/// `reftuple::list`, for every tuple size up to and including its argument.
#[doc(hidden)]
#[proc_macro]
pub fn impl_lists(input: TokenStream) -> TokenStream {
    let Bound(max_arity) = parse_macro_input!(input as Bound);
    lists::impl_lists(max_arity).into()
}

/// **Internal implementation detail:** This proc-macro generates the conversions between
/// `Count<N>` and unary arities for all `N` up to and including its argument.
#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let Bound(max) = parse_macro_input!(input as Bound);
    unary::generate_unary_conversion_impls(max).into()
}

//! Generation of the table from constant counts to unary arities.

use {proc_macro2::TokenStream, quote::quote};

/// Generate `Counted` for `Count<0>` through `Count<max>`, each naming the unary arity with the
/// same value.
///
/// The output names `Count`, `Counted`, `Z` and `S` unqualified, so it must be expanded where all
/// of those are in scope.
pub fn generate_unary_conversion_impls(max: usize) -> TokenStream {
    let mut impls = TokenStream::new();
    let mut unary = quote!(Z);
    for n in 0..=max {
        impls.extend(quote! {
            impl Counted for Count<#n> {
                type Unary = #unary;
            }
        });
        unary = quote!(S<#unary>);
    }
    impls
}

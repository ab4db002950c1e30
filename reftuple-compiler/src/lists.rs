//! Generation of the per-arity impls of the traits in `reftuple::list`.
//!
//! Each trait there describes one whole-tuple operation (construct, copy, assign, compare, swap,
//! and so on) and is implemented here for every flat tuple of slots up to some arity, by applying
//! the corresponding per-slot trait from `reftuple::element` to each position in turn.
//!
//! The output refers to the library through `crate::` paths, so it is only meaningful when
//! expanded inside the `reftuple` crate.

use {
    proc_macro2::{Span, TokenStream},
    quote::{format_ident, quote},
    syn::{Ident, Index, Lifetime},
};

/// Generate every list impl for all arities from zero up to and including `max_arity`.
pub fn impl_lists(max_arity: usize) -> TokenStream {
    let mut impls = TokenStream::new();
    for arity in 0..=max_arity {
        let arity = Arity::new(arity);
        impls.extend(arity.flat_and_list());
        impls.extend(arity.get());
        impls.extend(arity.construct());
        impls.extend(arity.copy_and_move());
        impls.extend(arity.assign());
        impls.extend(arity.eq());
        impls.extend(arity.swap());
        impls.extend(arity.views());
        impls.extend(arity.free_constructors());
    }
    impls
}

/// The identifiers used when generating impls for a single arity.
struct Arity {
    /// Slot types of the tuple being implemented for.
    slots: Vec<Ident>,
    /// Types of the other tuple involved (arguments, sources, right-hand sides).
    others: Vec<Ident>,
    /// One lifetime per position, for borrowed arguments.
    lifetimes: Vec<Lifetime>,
    /// Field indices.
    indices: Vec<Index>,
}

impl Arity {
    fn new(n: usize) -> Self {
        Arity {
            slots: (0..n).map(|i| format_ident!("S{}", i)).collect(),
            others: (0..n).map(|i| format_ident!("A{}", i)).collect(),
            lifetimes: (0..n)
                .map(|i| Lifetime::new(&format!("'a{}", i), Span::call_site()))
                .collect(),
            indices: (0..n).map(Index::from).collect(),
        }
    }

    /// The inductive list type `(S0, (S1, (..., ())))` with the same elements as the flat tuple.
    fn list_type(&self) -> TokenStream {
        self.slots
            .iter()
            .rev()
            .fold(quote!(()), |rest, slot| quote!((#slot, #rest)))
    }

    fn flat_and_list(&self) -> TokenStream {
        let Arity { slots, indices, .. } = self;
        let list = self.list_type();
        let values: Vec<Ident> = (0..slots.len()).map(|i| format_ident!("v{}", i)).collect();
        let into_list = indices
            .iter()
            .rev()
            .fold(quote!(()), |rest, i| quote!((self.#i, #rest)));
        let pattern = values
            .iter()
            .rev()
            .fold(quote!(()), |rest, v| quote!((#v, #rest)));

        quote! {
            impl<#(#slots),*> crate::list::Flat for (#(#slots,)*) {
                type AsList = #list;

                fn into_list(self) -> Self::AsList {
                    #into_list
                }
            }

            impl<#(#slots),*> crate::list::List for #list {
                type AsFlat = (#(#slots,)*);

                fn into_flat(self) -> Self::AsFlat {
                    let #pattern = self;
                    (#(#values,)*)
                }
            }
        }
    }

    fn get(&self) -> TokenStream {
        let Arity { slots, indices, .. } = self;
        let mut impls = TokenStream::new();
        for (n, (slot, i)) in slots.iter().zip(indices).enumerate() {
            impls.extend(quote! {
                impl<#(#slots),*> crate::list::Get<#n> for (#(#slots,)*)
                where
                    #slot: crate::element::Element,
                {
                    type Slot = #slot;

                    fn slot(&self) -> &#slot {
                        &self.#i
                    }

                    fn slot_mut(&mut self) -> &mut #slot {
                        &mut self.#i
                    }

                    fn into_slot(self) -> #slot {
                        self.#i
                    }
                }
            });
        }
        impls
    }

    fn construct(&self) -> TokenStream {
        let Arity {
            slots,
            others,
            indices,
            ..
        } = self;

        quote! {
            impl<#(#slots,)* #(#others,)*> crate::list::ConstructList<(#(#others,)*)> for (#(#slots,)*)
            where
                #(#slots: crate::element::Construct<#others>,)*
            {
                fn construct_list(_args: (#(#others,)*)) -> Self {
                    (#(<#slots as crate::element::Construct<#others>>::construct(_args.#indices),)*)
                }
            }

            impl<#(#slots,)* #(#others,)*> ::core::convert::From<(#(#others,)*)> for crate::Tuple<(#(#slots,)*)>
            where
                #(#slots: crate::element::Construct<#others>,)*
            {
                fn from(args: (#(#others,)*)) -> Self {
                    crate::Tuple::new(args)
                }
            }
        }
    }

    fn copy_and_move(&self) -> TokenStream {
        let Arity {
            slots,
            others,
            indices,
            ..
        } = self;

        quote! {
            impl<'r, #(#slots,)* #(#others: 'r,)*> crate::list::CopyList<'r, (#(#others,)*)> for (#(#slots,)*)
            where
                #(#slots: crate::element::CopyFrom<'r, #others>,)*
            {
                fn copy_list(_source: &'r (#(#others,)*)) -> Self {
                    (#(<#slots as crate::element::CopyFrom<'r, #others>>::copy_from(&_source.#indices),)*)
                }
            }

            impl<#(#slots,)* #(#others,)*> crate::list::MoveList<(#(#others,)*)> for (#(#slots,)*)
            where
                #(#slots: crate::element::MoveFrom<#others>,)*
            {
                fn move_list(_source: (#(#others,)*)) -> Self {
                    (#(<#slots as crate::element::MoveFrom<#others>>::move_from(_source.#indices),)*)
                }
            }
        }
    }

    fn assign(&self) -> TokenStream {
        let Arity {
            slots,
            others,
            indices,
            ..
        } = self;

        quote! {
            impl<#(#slots,)* #(#others,)*> crate::list::CopyAssignList<(#(#others,)*)> for (#(#slots,)*)
            where
                #(#slots: crate::element::CopyAssign<#others>,)*
            {
                fn copy_assign_list(&mut self, _source: &(#(#others,)*)) {
                    #(crate::element::CopyAssign::copy_assign(&mut self.#indices, &_source.#indices);)*
                }
            }

            impl<#(#slots,)* #(#others,)*> crate::list::MoveAssignList<(#(#others,)*)> for (#(#slots,)*)
            where
                #(#slots: crate::element::MoveAssign<#others>,)*
            {
                fn move_assign_list(&mut self, _source: (#(#others,)*)) {
                    #(crate::element::MoveAssign::move_assign(&mut self.#indices, _source.#indices);)*
                }
            }
        }
    }

    fn eq(&self) -> TokenStream {
        let Arity {
            slots,
            others,
            indices,
            ..
        } = self;

        quote! {
            impl<#(#slots,)* #(#others,)*> crate::list::EqList<(#(#others,)*)> for (#(#slots,)*)
            where
                #(
                    #slots: crate::element::Element,
                    #others: crate::element::Element,
                    <#slots as crate::element::Element>::Target:
                        ::core::cmp::PartialEq<<#others as crate::element::Element>::Target>,
                    <#others as crate::element::Element>::Target:
                        ::core::cmp::PartialEq<<#slots as crate::element::Element>::Target>,
                )*
            {
                fn eq_list(&self, _other: &(#(#others,)*)) -> bool {
                    true #(&& crate::element::Element::get(&self.#indices)
                        == crate::element::Element::get(&_other.#indices))*
                }
            }
        }
    }

    fn swap(&self) -> TokenStream {
        let Arity { slots, indices, .. } = self;

        quote! {
            impl<#(#slots),*> crate::list::SwapList for (#(#slots,)*)
            where
                #(#slots: crate::element::Swap,)*
            {
                fn swap_list(&mut self, _other: &mut Self) {
                    #(crate::element::Swap::swap(&mut self.#indices, &mut _other.#indices);)*
                }
            }

            impl<#(#slots),*> crate::list::SwapThroughList for (#(#slots,)*)
            where
                #(#slots: crate::element::SwapThrough,)*
            {
                fn swap_through_list(self, _other: Self) {
                    #(crate::element::SwapThrough::swap_through(self.#indices, _other.#indices);)*
                }
            }
        }
    }

    /// Impls which look at every element without changing the tuple's shape: formatting,
    /// consuming into parts, and borrowing.
    fn views(&self) -> TokenStream {
        let Arity { slots, indices, .. } = self;

        quote! {
            impl<#(#slots),*> crate::list::DebugList for (#(#slots,)*)
            where
                #(
                    #slots: crate::element::Element,
                    <#slots as crate::element::Element>::Target: ::core::fmt::Debug,
                )*
            {
                fn debug_list(&self, _f: &mut ::core::fmt::DebugTuple<'_, '_>) {
                    #(let _ = _f.field(&crate::element::Element::get(&self.#indices));)*
                }
            }

            impl<#(#slots),*> crate::list::OwnedList for (#(#slots,)*)
            where
                #(#slots: crate::element::Element,)*
            {
                type Owned = (#(<#slots as crate::element::Element>::Owned,)*);

                fn into_owned_list(self) -> Self::Owned {
                    (#(crate::element::Element::into_owned(self.#indices),)*)
                }
            }

            impl<'s, #(#slots),*> crate::list::RefList<'s> for (#(#slots,)*)
            where
                #(
                    #slots: crate::element::Element + 's,
                    <#slots as crate::element::Element>::Target: 's,
                )*
            {
                type Refs = (#(&'s <#slots as crate::element::Element>::Target,)*);

                fn ref_list(&'s self) -> Self::Refs {
                    (#(crate::element::Element::get(&self.#indices),)*)
                }
            }

            impl<'s, #(#slots),*> crate::list::BindList<'s> for (#(#slots,)*)
            where
                #(#slots: crate::element::Bind<'s>,)*
            {
                type Bindings = (#(<#slots as crate::element::Bind<'s>>::Binding,)*);

                fn bind_list(&'s mut self) -> Self::Bindings {
                    (#(crate::element::Bind::bind(&mut self.#indices),)*)
                }
            }
        }
    }

    /// Impls backing `make_tuple`, `tie`, and `forward_as_tuple`, which all take a flat tuple of
    /// plain Rust values or references.
    fn free_constructors(&self) -> TokenStream {
        let Arity {
            others,
            lifetimes,
            indices,
            ..
        } = self;

        quote! {
            impl<#(#others),*> crate::list::Decay for (#(#others,)*) {
                type Slots = (#(crate::element::Val<#others>,)*);

                fn decay(self) -> Self::Slots {
                    (#(crate::element::Val(self.#indices),)*)
                }
            }

            impl<#(#lifetimes,)* #(#others: ?Sized),*> crate::list::Tie for (#(&#lifetimes mut #others,)*) {
                type Slots = (#(crate::element::Mut<#lifetimes, #others>,)*);

                fn tie(self) -> Self::Slots {
                    (#(crate::element::Mut::new(self.#indices),)*)
                }
            }

            impl<#(#others),*> crate::list::ForwardList for (#(#others,)*)
            where
                #(#others: crate::element::Forward,)*
            {
                type Slots = (#(<#others as crate::element::Forward>::Slot,)*);

                fn forward_list(self) -> Self::Slots {
                    (#(crate::element::Forward::forward(self.#indices),)*)
                }
            }
        }
    }
}

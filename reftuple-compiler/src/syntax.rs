//! The surface syntax of the `Tuple!` and `tuple!` macros, and its lowering to slot types and
//! slot constructors.

use {
    lazy_static::lazy_static,
    proc_macro2::{Span, TokenStream},
    proc_macro_crate::{crate_name, FoundCrate},
    quote::{quote, quote_spanned, ToTokens},
    std::fmt,
    syn::{Expr, Ident, Lifetime, Type},
};

use crate::Spanned;

lazy_static! {
    static ref CRATE_NAME: String = match crate_name("reftuple") {
        Ok(FoundCrate::Name(name)) => name,
        Ok(FoundCrate::Itself) | Err(_) => "reftuple".to_owned(),
    };
}

/// The path to the `reftuple` crate as seen from the macro's call site.
fn reftuple_crate(span: Span) -> Ident {
    Ident::new(&CRATE_NAME, span)
}

/// The five kinds of element a tuple can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// An owned value: `T`.
    Val,
    /// An owned value which is never written after construction: `const T`.
    Const,
    /// A mutable reference: `&'a mut T`.
    Mut,
    /// A read-only reference: `&'a T`.
    Ref,
    /// A reference whose referent is read by moving it out: `&'a move T`.
    Move,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 5] = [Kind::Val, Kind::Const, Kind::Mut, Kind::Ref, Kind::Move];

    /// Whether this kind refers to storage outside the tuple.
    pub fn is_reference(self) -> bool {
        matches!(self, Kind::Mut | Kind::Ref | Kind::Move)
    }

    /// The name of the slot type holding an element of this kind.
    pub fn slot_name(self) -> &'static str {
        match self {
            Kind::Val => "Val",
            Kind::Const => "Const",
            Kind::Mut => "Mut",
            Kind::Ref => "Ref",
            Kind::Move => "Move",
        }
    }
}

/// One element in the `Tuple!` type DSL.
#[derive(Debug, Clone)]
pub struct ElementType {
    /// What kind of element this is.
    pub kind: Kind,
    /// The lifetime of a reference element, if one was written.
    pub lifetime: Option<Lifetime>,
    /// The element (or referent) type.
    pub ty: Type,
}

/// The whole input to `Tuple!`.
#[derive(Debug, Clone)]
pub struct TupleType {
    /// The elements, in order.
    pub elements: Vec<Spanned<ElementType>>,
}

/// One element in the `tuple!` expression DSL.
#[derive(Debug, Clone)]
pub struct ElementExpr {
    /// What kind of element this is.
    pub kind: Kind,
    /// The value, or the place to be referenced.
    pub expr: Expr,
}

/// The whole input to `tuple!`.
#[derive(Debug, Clone)]
pub struct TupleExpr {
    /// The elements, in order.
    pub elements: Vec<Spanned<ElementExpr>>,
}

impl ToTokens for Spanned<ElementType> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        // Give the generated slot type the span of its element, so that unsatisfied bounds are
        // reported at the element that caused them.
        let span = self.span;
        let c = reftuple_crate(span);
        let slot = Ident::new(self.kind.slot_name(), span);
        let ty = &self.ty;
        if self.kind.is_reference() {
            let lifetime = self
                .lifetime
                .clone()
                .unwrap_or_else(|| Lifetime::new("'_", span));
            quote_spanned!(span=> #c::element::#slot<#lifetime, #ty>).to_tokens(tokens)
        } else {
            quote_spanned!(span=> #c::element::#slot<#ty>).to_tokens(tokens)
        }
    }
}

impl ToTokens for TupleType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let c = reftuple_crate(Span::call_site());
        let elements = &self.elements;
        quote!(#c::Tuple<(#(#elements,)*)>).to_tokens(tokens)
    }
}

impl ToTokens for Spanned<ElementExpr> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let span = self.span;
        let c = reftuple_crate(span);
        let expr = &self.expr;
        match self.kind {
            Kind::Val => quote_spanned!(span=> #c::element::Val(#expr)),
            Kind::Const => quote_spanned!(span=> #c::element::Const::new(#expr)),
            Kind::Mut => quote_spanned!(span=> #c::element::Mut::new(&mut (#expr))),
            Kind::Ref => quote_spanned!(span=> #c::element::Ref::new(&(#expr))),
            Kind::Move => quote_spanned!(span=> #c::element::Move::new(&mut (#expr))),
        }
        .to_tokens(tokens)
    }
}

impl ToTokens for TupleExpr {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let c = reftuple_crate(Span::call_site());
        let elements = &self.elements;
        quote!(#c::Tuple::from_slots((#(#elements,)*))).to_tokens(tokens)
    }
}

/// Print an element back in the surface syntax it was parsed from.
impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ty = self.ty.to_token_stream();
        let lifetime = match &self.lifetime {
            Some(lifetime) => format!("{} ", lifetime),
            None => String::new(),
        };
        match self.kind {
            Kind::Val => write!(f, "{}", ty),
            Kind::Const => write!(f, "const {}", ty),
            Kind::Mut => write!(f, "&{}mut {}", lifetime, ty),
            Kind::Ref => write!(f, "&{}{}", lifetime, ty),
            Kind::Move => write!(f, "&{}move {}", lifetime, ty),
        }
    }
}

impl fmt::Display for TupleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let count = self.elements.len();
        for (i, element) in self.elements.iter().enumerate() {
            write!(f, "{}", element.inner)?;
            if i + 1 < count {
                write!(f, ", ")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "quickcheck")]
mod arbitrary {
    use {
        super::*,
        quickcheck::{Arbitrary, Gen},
    };

    const TYPES: &[&str] = &["u8", "String", "Vec<u8>", "[u8]", "str", "(i32, bool)", "()"];
    const LIFETIMES: &[&str] = &["'a", "'b", "'static"];

    impl Arbitrary for Kind {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(&Kind::ALL).unwrap()
        }
    }

    impl Arbitrary for Spanned<ElementType> {
        fn arbitrary(g: &mut Gen) -> Self {
            let kind = Kind::arbitrary(g);
            let lifetime = if kind.is_reference() && bool::arbitrary(g) {
                Some(Lifetime::new(g.choose(LIFETIMES).unwrap(), Span::call_site()))
            } else {
                None
            };
            let ty = syn::parse_str(g.choose(TYPES).unwrap()).unwrap();
            Spanned::call_site(ElementType { kind, lifetime, ty })
        }
    }

    impl Arbitrary for TupleType {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % (crate::MAX_ARITY + 1);
            TupleType {
                elements: (0..len).map(|_| Arbitrary::arbitrary(g)).collect(),
            }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let elements = self.elements.clone();
            Box::new((0..elements.len()).rev().map(move |len| TupleType {
                elements: elements[..len].to_vec(),
            }))
        }
    }
}

use syn::{
    parse::{Parse, ParseStream, Result},
    punctuated::Punctuated,
    Expr, Lifetime, LitInt, Token, Type,
};

use crate::{CompileError, ElementExpr, ElementType, Kind, Spanned, TupleExpr, TupleType, MAX_ARITY};

impl<T: Parse> Parse for Spanned<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        let span = input.span();
        let inner = input.parse::<T>()?;
        Ok(Spanned { inner, span })
    }
}

impl Parse for ElementType {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Token![const]) {
            let const_token = input.parse::<Token![const]>()?;
            if input.peek(Token![&]) {
                return Err(CompileError::ConstReference.at(const_token.span));
            }
            let ty = input.parse::<Type>()?;
            return Ok(ElementType {
                kind: Kind::Const,
                lifetime: None,
                ty,
            });
        }

        if !input.peek(Token![&]) {
            let ty = input.parse::<Type>()?;
            return Ok(ElementType {
                kind: Kind::Val,
                lifetime: None,
                ty,
            });
        }

        input.parse::<Token![&]>()?;
        let lifetime = if input.peek(Lifetime) {
            Some(input.parse::<Lifetime>()?)
        } else {
            None
        };
        let kind = reference_kind(input)?;
        let ty = input.parse::<Type>()?;
        Ok(ElementType { kind, lifetime, ty })
    }
}

/// Parse the optional `mut` or `move` after a reference sigil.
fn reference_kind(input: ParseStream) -> Result<Kind> {
    let kind = if input.peek(Token![mut]) {
        input.parse::<Token![mut]>()?;
        Kind::Mut
    } else if input.peek(Token![move]) {
        input.parse::<Token![move]>()?;
        Kind::Move
    } else {
        return Ok(Kind::Ref);
    };
    if input.peek(Token![mut]) || input.peek(Token![move]) {
        return Err(CompileError::MutableMove.at(input.span()));
    }
    Ok(kind)
}

impl Parse for TupleType {
    fn parse(input: ParseStream) -> Result<Self> {
        let span = input.span();
        let elements: Vec<_> = Punctuated::<Spanned<ElementType>, Token![,]>::parse_terminated(input)?
            .into_iter()
            .collect();
        if elements.len() > MAX_ARITY {
            return Err(CompileError::TooManyElements(elements.len()).at(span));
        }
        Ok(TupleType { elements })
    }
}

impl Parse for ElementExpr {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Token![const]) {
            let const_token = input.parse::<Token![const]>()?;
            if input.peek(Token![ref]) || input.peek(Token![move]) {
                return Err(CompileError::ConstReference.at(const_token.span));
            }
            let expr = input.parse::<Expr>()?;
            return Ok(ElementExpr {
                kind: Kind::Const,
                expr,
            });
        }

        // A `move` followed by bars is a closure, and so is an ordinary value.
        let kind = if input.peek(Token![ref]) {
            input.parse::<Token![ref]>()?;
            if input.peek(Token![mut]) {
                input.parse::<Token![mut]>()?;
                Kind::Mut
            } else {
                Kind::Ref
            }
        } else if input.peek(Token![move]) && !(input.peek2(Token![|]) || input.peek2(Token![||])) {
            input.parse::<Token![move]>()?;
            Kind::Move
        } else {
            Kind::Val
        };
        if kind.is_reference() && (input.peek(Token![mut]) || input.peek(Token![move])) {
            return Err(CompileError::MutableMove.at(input.span()));
        }

        let expr = input.parse::<Expr>()?;
        Ok(ElementExpr { kind, expr })
    }
}

impl Parse for TupleExpr {
    fn parse(input: ParseStream) -> Result<Self> {
        let span = input.span();
        let elements: Vec<_> = Punctuated::<Spanned<ElementExpr>, Token![,]>::parse_terminated(input)?
            .into_iter()
            .collect();
        if elements.len() > MAX_ARITY {
            return Err(CompileError::TooManyElements(elements.len()).at(span));
        }
        Ok(TupleExpr { elements })
    }
}

/// The argument to the impl generators: the largest arity (or number) to generate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound(pub usize);

impl Parse for Bound {
    fn parse(input: ParseStream) -> Result<Self> {
        let lit = input.parse::<LitInt>()?;
        Ok(Bound(lit.base10_parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_kinds() {
        let parsed: TupleType =
            syn::parse_str("i32, const String, &'a mut u8, &str, &'b move Vec<u8>").unwrap();
        let kinds: Vec<Kind> = parsed.elements.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [Kind::Val, Kind::Const, Kind::Mut, Kind::Ref, Kind::Move]
        );
        assert!(parsed.elements[3].lifetime.is_none());
        assert_eq!(parsed.elements[4].lifetime.as_ref().unwrap().ident, "b");
    }

    #[test]
    fn empty_input() {
        let parsed: TupleType = syn::parse_str("").unwrap();
        assert!(parsed.elements.is_empty());
        let parsed: TupleExpr = syn::parse_str("").unwrap();
        assert!(parsed.elements.is_empty());
    }

    #[test]
    fn closures_are_values() {
        let parsed: TupleExpr = syn::parse_str("move || 1, move x, move |y| y").unwrap();
        let kinds: Vec<Kind> = parsed.elements.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [Kind::Val, Kind::Move, Kind::Val]);
    }

    #[test]
    fn reference_exprs() {
        let parsed: TupleExpr = syn::parse_str("a, ref b, ref mut c.d, const e + 1").unwrap();
        let kinds: Vec<Kind> = parsed.elements.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [Kind::Val, Kind::Ref, Kind::Mut, Kind::Const]);
    }

    #[test]
    fn bound() {
        assert_eq!(syn::parse_str::<Bound>("12").unwrap(), Bound(12));
        assert!(syn::parse_str::<Bound>("twelve").is_err());
    }
}

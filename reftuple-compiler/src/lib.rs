//! The compiler behind the macros exported by the `reftuple` crate.
//!
//! There are two kinds of macro here. The element DSLs, [`TupleType`] and [`TupleExpr`], are
//! parsed from user input and lowered to slot types and slot constructors. The generators in
//! [`lists`] and [`unary`] produce the per-arity trait impls the library itself is built from.

use {
    proc_macro2::Span,
    std::ops::{Deref, DerefMut},
    thiserror::Error,
};

pub mod lists;
pub mod parse;
pub mod syntax;
pub mod unary;

pub use syntax::{ElementExpr, ElementType, Kind, TupleExpr, TupleType};

/// The largest arity for which the library generates its list impls.
///
/// This matches the largest tuple for which the standard library implements `Default`, so that
/// every generated tuple of values can still be default-constructed.
pub const MAX_ARITY: usize = 12;

/// The errors which can be reported while parsing the element DSLs.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompileError {
    #[error("`const` elements hold values: a read-only reference is written `&T` in a type and `ref e` in an expression")]
    ConstReference,
    #[error("a reference element is either `mut` or `move`, not both")]
    MutableMove,
    #[error("a tuple can have at most {} elements, but this one has {0}", MAX_ARITY)]
    TooManyElements(usize),
}

impl CompileError {
    /// Convert this error into a [`syn::Error`] reported at `span`.
    pub fn at(&self, span: Span) -> syn::Error {
        syn::Error::new(span, self.to_string())
    }
}

/// A value annotated with the span of the input it was parsed from.
#[derive(Debug, Clone, Copy)]
pub struct Spanned<T> {
    /// The inner value.
    pub inner: T,
    /// The span associated with the inner value.
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Annotate `inner` with the call-site span.
    pub fn call_site(inner: T) -> Self {
        Spanned {
            inner,
            span: Span::call_site(),
        }
    }
}

impl<T> Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for Spanned<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

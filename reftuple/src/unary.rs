//! Arities at the type level, counted in unary.
//!
//! An arity is either [`Z`] or one more than another arity, [`S`]. The arity of a tuple is
//! available as [`Arity`](crate::tuple::Arity), and the arity of a concatenation is the [`Sum`]
//! of the arities of its operands, so both can be checked by the type checker rather than at run
//! time.

/// Zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One more than `N`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// A type-level arity, with its value.
///
/// ```
/// use reftuple::unary::{Unary, UnaryOf, S, Z};
///
/// assert_eq!(Z::VALUE, 0);
/// assert_eq!(<S<S<Z>>>::VALUE, 2);
/// assert_eq!(<UnaryOf<24>>::VALUE, 24);
/// ```
pub trait Unary: sealed::Sealed + Copy + Default + Send + Sync + 'static {
    /// This arity as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// The sum of two arities.
///
/// ```
/// use reftuple::unary::{Sum, UnaryOf, Z};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Sum<UnaryOf<5>, UnaryOf<7>>, UnaryOf<12>);
/// assert_type_eq_all!(Sum<Z, UnaryOf<3>>, UnaryOf<3>);
/// ```
pub type Sum<N, M> = <N as Plus<M>>::Output;

/// Addition of arities, by recursion on the right operand.
pub trait Plus<M: Unary>: Unary {
    /// `Self + M`.
    type Output: Unary;
}

impl<N: Unary> Plus<Z> for N {
    type Output = N;
}

impl<N: Plus<M>, M: Unary> Plus<S<M>> for N {
    type Output = S<<N as Plus<M>>::Output>;
}

/// The unary arity with the value `N`, for writing arities in tests and signatures:
/// `UnaryOf<2>` is `S<S<Z>>`.
pub type UnaryOf<const N: usize> = <Count<N> as Counted>::Unary;

/// An arity written as a `usize` constant, to be converted with [`Counted`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Count<const N: usize>;

/// Conversion from a constant [`Count`] to the unary arity with the same value.
pub trait Counted {
    /// The unary arity.
    type Unary: Unary;
}

// Twice the largest tuple, so that any concatenation of two tuples can be written out.
reftuple_macro::generate_unary_conversion_impls!(24);

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Z {}
    impl<N: super::Unary> Sealed for super::S<N> {}
}

//! Concatenation of tuples.
//!
//! Concatenation is built entirely on the public surface of [`Tuple`]: the slots are taken out of
//! each operand, appended as inductive lists, and wrapped again. Since slots are moved rather than
//! read, reference elements of the operands stay reference elements of the result, referring to
//! the same places.

use crate::{
    list::{Concat, Flat, List},
    tuple::Tuple,
};

/// The slots of the concatenation of a `Tuple<A>` and a `Tuple<B>`.
pub type CatSlots<A, B> =
    <<<A as Flat>::AsList as Concat<<B as Flat>::AsList>>::Output as List>::AsFlat;

/// The concatenation of a `Tuple<A>` and a `Tuple<B>`.
pub type Cat<A, B> = Tuple<CatSlots<A, B>>;

/// Concatenate two tuples.
///
/// The arity of the result is the sum of the arities of the operands, and must not exceed `12`.
///
/// # Examples
///
/// ```
/// use reftuple::prelude::*;
///
/// let mut x = 0;
/// let joined: Tuple![i32, &str, &mut i32] = concat(make_tuple((1, "one")), tie((&mut x,)));
/// let (n, s, r) = joined.into_parts();
/// *r = n;
/// assert_eq!(s, "one");
/// assert_eq!(x, 1);
/// ```
pub fn concat<A, B>(left: Tuple<A>, right: Tuple<B>) -> Cat<A, B>
where
    A: Flat,
    B: Flat,
    A::AsList: Concat<B::AsList>,
    <A::AsList as Concat<B::AsList>>::Output: List,
{
    let list = left.into_slots().into_list().concat(right.into_slots().into_list());
    Tuple::from_slots(list.into_flat())
}

/// Concatenate any number of tuples, left to right.
///
/// # Examples
///
/// ```
/// use reftuple::prelude::*;
///
/// let t = tuple_cat!(make_tuple((1,)), make_tuple(()), make_tuple(('a', "b")));
/// assert_eq!(t, make_tuple((1, 'a', "b")));
/// assert_eq!(tuple_cat!(), make_tuple(()));
/// ```
#[macro_export]
macro_rules! tuple_cat {
    () => {
        $crate::Tuple::from_slots(())
    };
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::cat::concat($first, $crate::tuple_cat!($($rest),+))
    };
}

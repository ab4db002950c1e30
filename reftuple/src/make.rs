//! Free functions for building tuples out of flat Rust tuples.
//!
//! Each of these picks the element kinds from the arguments, so no type annotation is needed.
//! To mix kinds explicitly, use the [`tuple!`](macro@crate::tuple) macro.

use crate::{
    list::{Decay, ForwardList, Tie},
    tuple::Tuple,
};

/// Build a tuple of values.
///
/// # Examples
///
/// ```
/// use reftuple::prelude::*;
/// use reftuple::element::Val;
/// use static_assertions::assert_type_eq_all;
///
/// let t = make_tuple((1u8, "two"));
/// assert_type_eq_all!(
///     Tuple<(Val<u8>, Val<&'static str>)>,
///     Tuple![u8, &'static str],
/// );
/// let _: Tuple<(Val<u8>, Val<&str>)> = t;
/// ```
pub fn make_tuple<A: Decay>(values: A) -> Tuple<A::Slots> {
    Tuple::from_slots(values.decay())
}

/// Build a tuple of mutable references, which can then be assigned to as a whole.
///
/// # Examples
///
/// ```
/// use reftuple::prelude::*;
///
/// let (mut x, mut s) = (0, String::new());
/// tie((&mut x, &mut s)).assign_from(make_tuple((7, "seven")));
/// assert_eq!(x, 7);
/// assert_eq!(s, "seven");
/// ```
pub fn tie<A: Tie>(places: A) -> Tuple<A::Slots> {
    Tuple::from_slots(places.tie())
}

/// Build a tuple of references which keep the kind of each argument: `&T` becomes a read-only
/// reference element, `&mut T` a mutable one, and [`Move`](crate::Move) a reference whose
/// referent will be moved from when it is read as a value.
///
/// # Examples
///
/// ```
/// use reftuple::prelude::*;
/// use reftuple::element::{Move, Mut, Ref};
///
/// let (a, mut b, mut c) = (1, 2, String::from("c"));
/// let t: Tuple<(Ref<i32>, Mut<i32>, Move<String>)> =
///     forward_as_tuple((&a, &mut b, Move::new(&mut c)));
/// assert_eq!(t, make_tuple((1, 2, "c")));
/// ```
pub fn forward_as_tuple<A: ForwardList>(args: A) -> Tuple<A::Slots> {
    Tuple::from_slots(args.forward_list())
}

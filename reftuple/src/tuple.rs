//! The [`Tuple`] type and the operations available on it.

use std::fmt;

use crate::{
    element::{Element, ElementMut},
    list::{
        BindList, ConstructList, CopyAssignList, CopyList, DebugList, EqList, Flat, Get, HasLength,
        MoveAssignList, MoveList, OwnedList, RefList, SwapList, SwapThroughList,
    },
    unary::Unary,
};

/// A fixed-arity heterogeneous tuple whose elements may be values or references.
///
/// The type parameter is a flat Rust tuple of *slots* (see [`element`](crate::element)), one per
/// element, which decide how each element is stored and how it behaves under construction,
/// assignment, comparison, and swap. It is easiest to write with the [`Tuple!`](macro@crate::Tuple)
/// macro:
///
/// ```
/// use reftuple::prelude::*;
/// use reftuple::element::{Mut, Ref, Val};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     Tuple![i32, &'static mut String, &'static str],
///     Tuple<(Val<i32>, Mut<'static, String>, Ref<'static, str>)>,
/// );
/// ```
///
/// A `Tuple` is exactly as large as its slots, which are exactly as large as the values and
/// references they hold. It is [`Copy`], [`Clone`], or [`Default`] exactly when all of its slots
/// are.
///
/// # Reference elements
///
/// Assignment to a tuple writes through its reference elements to their referents, and never
/// makes them refer somewhere else:
///
/// ```
/// use reftuple::prelude::*;
///
/// let (mut a, mut b) = (1, String::from("one"));
/// let mut refs = tie((&mut a, &mut b));
/// refs.assign(&make_tuple((2, "two")));
/// drop(refs);
/// assert_eq!((a, b.as_str()), (2, "two"));
/// ```
///
/// Read-only elements make a tuple unassignable:
///
/// ```compile_fail
/// use reftuple::prelude::*;
///
/// let x = 1;
/// let mut t: Tuple![&i32] = Tuple::new((&x,));
/// t.assign(&make_tuple((2,)));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
pub struct Tuple<L> {
    slots: L,
}

/// The slot at index `I` of the slots `L`.
pub type SlotOf<L, const I: usize> = <L as Get<I>>::Slot;

/// What reading the element at index `I` of a `Tuple<L>` shows: the value of a value element, or
/// the referent of a reference element.
pub type TargetOf<L, const I: usize> = <SlotOf<L, I> as Element>::Target;

/// The declared type of the element at index `I` of a `Tuple<L>`: the value type of a value
/// element, or the reference itself (`&'a mut T`, `&'a T`, or [`Move<'a, T>`](crate::Move)) of
/// a reference element. This is what [`Tuple::into_get`] yields.
///
/// ```
/// use reftuple::prelude::*;
/// use reftuple::tuple::{ElementOf, IntoSlots};
/// use static_assertions::assert_type_eq_all;
///
/// type T = Tuple![i32, const u8, &'static mut bool, &'static str, &'static move char];
/// type Slots = <T as IntoSlots>::Slots;
///
/// assert_type_eq_all!(ElementOf<Slots, 0>, i32);
/// assert_type_eq_all!(ElementOf<Slots, 1>, u8);
/// assert_type_eq_all!(ElementOf<Slots, 2>, &'static mut bool);
/// assert_type_eq_all!(ElementOf<Slots, 3>, &'static str);
/// assert_type_eq_all!(ElementOf<Slots, 4>, Move<'static, char>);
/// ```
pub type ElementOf<L, const I: usize> = <SlotOf<L, I> as Element>::Owned;

/// The arity of a `Tuple<L>`, as a unary type-level number.
pub type Arity<L> = <<L as Flat>::AsList as HasLength>::Length;

/// Name the slots of a tuple type, for use with the aliases in this module.
pub trait IntoSlots {
    /// The flat tuple of slots.
    type Slots;
}

impl<L> IntoSlots for Tuple<L> {
    type Slots = L;
}

impl<L> Tuple<L> {
    /// Wrap a flat tuple of slots.
    pub const fn from_slots(slots: L) -> Self {
        Tuple { slots }
    }

    /// Unwrap the flat tuple of slots.
    pub fn into_slots(self) -> L {
        self.slots
    }

    /// Construct a tuple from a flat Rust tuple of exactly one argument per element.
    ///
    /// Value elements are converted from their argument with [`From`]. Reference elements bind
    /// to their argument, which must be a reference of a compatible kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// let name = String::from("x");
    /// let t: Tuple![i64, String, &String] = Tuple::new((1i32, "y", &name));
    /// assert_eq!(t, make_tuple((1i64, "y", "x")));
    /// ```
    ///
    /// Tuples nest, and each nested tuple is constructed from its own argument:
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// let inner = make_tuple((1, "one"));
    /// let t: Tuple![Tuple![i64, String], bool] = Tuple::new((&inner, true));
    /// assert_eq!(t.get::<0>().get::<1>(), "one");
    /// ```
    ///
    /// The number of arguments must match the arity:
    ///
    /// ```compile_fail
    /// use reftuple::prelude::*;
    ///
    /// let t: Tuple![i32, i32] = Tuple::new((1,));
    /// ```
    pub fn new<A>(args: A) -> Self
    where
        L: ConstructList<A>,
    {
        Tuple {
            slots: L::construct_list(args),
        }
    }

    /// Construct a tuple by copying every element of `source`, converting each where the element
    /// types differ.
    ///
    /// Reference elements of `self` refer to what `source` shows at the same position: if
    /// `source` holds a reference there, they share its referent.
    ///
    /// This is also available as `Tuple::from(&source)`.
    ///
    /// A nested tuple is not converted element by element:
    ///
    /// ```compile_fail
    /// use reftuple::prelude::*;
    ///
    /// let narrow: Tuple![Tuple![i32]] = make_tuple((make_tuple((1,)),));
    /// let wide: Tuple![Tuple![i64]] = Tuple::from_ref(&narrow);
    /// ```
    ///
    /// Convert the inner tuple instead, by constructing from a reference to it:
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// let narrow: Tuple![Tuple![i32]] = make_tuple((make_tuple((1,)),));
    /// let wide: Tuple![Tuple![i64]] = Tuple::new((narrow.get::<0>(),));
    /// assert_eq!(*wide.get::<0>().get::<0>(), 1i64);
    /// ```
    pub fn from_ref<'r, S: 'r>(source: &'r Tuple<S>) -> Self
    where
        L: CopyList<'r, S>,
    {
        Tuple {
            slots: L::copy_list(&source.slots),
        }
    }

    /// Construct a tuple by consuming `source`, converting each element where the element types
    /// differ.
    ///
    /// Value elements of `source` are moved. Reference elements are read as values where `self`
    /// holds a value (cloning the referent of a [`Mut`](crate::Mut) or [`Ref`](crate::Ref), and
    /// taking the referent of a [`Move`](crate::Move)), and handed over where `self` holds a
    /// reference.
    ///
    /// The consumed source cannot be used again:
    ///
    /// ```compile_fail
    /// use reftuple::prelude::*;
    ///
    /// let source = make_tuple((String::from("s"),));
    /// let moved: Tuple![String] = Tuple::from_tuple(source);
    /// source.get::<0>();
    /// ```
    pub fn from_tuple<S>(source: Tuple<S>) -> Self
    where
        L: MoveList<S>,
    {
        Tuple {
            slots: L::move_list(source.slots),
        }
    }

    /// Convert into another tuple of the same arity by consuming `self`, as with
    /// [`from_tuple`](Tuple::from_tuple).
    ///
    /// # Examples
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// let narrow = make_tuple((1i32, 'c'));
    /// let wide: Tuple![i64, u32] = narrow.convert();
    /// assert_eq!(wide, make_tuple((1i64, 99u32)));
    /// ```
    pub fn convert<M>(self) -> Tuple<M>
    where
        M: MoveList<L>,
    {
        Tuple::from_tuple(self)
    }

    /// Read the element at index `I`. For a reference element, this reads the referent.
    ///
    /// # Examples
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// let s = String::from("referent");
    /// let t: Tuple![u8, &String] = Tuple::new((1u8, &s));
    /// assert_eq!(*t.get::<0>(), 1);
    /// assert!(std::ptr::eq(t.get::<1>(), &s));
    /// ```
    pub fn get<const I: usize>(&self) -> &TargetOf<L, I>
    where
        L: Get<I>,
    {
        Element::get(<L as Get<I>>::slot(&self.slots))
    }

    /// Mutably access the element at index `I`, which must be a [`Val`](crate::Val),
    /// [`Mut`](crate::Mut), or [`Move`](crate::Move). For a reference element, this accesses
    /// the referent.
    pub fn get_mut<const I: usize>(&mut self) -> &mut TargetOf<L, I>
    where
        L: Get<I>,
        SlotOf<L, I>: ElementMut,
    {
        ElementMut::get_mut(<L as Get<I>>::slot_mut(&mut self.slots))
    }

    /// Consume the tuple, keeping only the element at index `I`, as its declared type (see
    /// [`ElementOf`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// let mut x = 0;
    /// let t: Tuple![String, &mut i32] = Tuple::new(("owned", &mut x));
    /// let r: &mut i32 = t.into_get::<1>();
    /// *r = 5;
    /// assert_eq!(x, 5);
    /// ```
    pub fn into_get<const I: usize>(self) -> ElementOf<L, I>
    where
        L: Get<I>,
    {
        Element::into_owned(<L as Get<I>>::into_slot(self.slots))
    }

    /// Assign every element from the corresponding element of `source`, left to right,
    /// converting where the element types differ.
    ///
    /// Value elements are replaced. Reference elements assign to their referents and keep
    /// referring to them. Tuples with [`Const`](crate::Const) or [`Ref`](crate::Ref) elements
    /// cannot be assigned.
    pub fn assign<S>(&mut self, source: &Tuple<S>) -> &mut Self
    where
        L: CopyAssignList<S>,
    {
        self.slots.copy_assign_list(&source.slots);
        self
    }

    /// Assign every element by consuming the corresponding element of `source`, left to right.
    ///
    /// This is [`assign`](Tuple::assign), except that `source`'s value elements are moved rather
    /// than cloned, and its [`Move`](crate::Move) elements hand over their referents.
    ///
    /// # Examples
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// let mut s = String::from("payload");
    /// let mut t: Tuple![String] = Default::default();
    /// t.assign_from(forward_as_tuple((Move::new(&mut s),)));
    /// assert_eq!(t.get::<0>(), "payload");
    /// assert_eq!(s, "");
    /// ```
    pub fn assign_from<S>(&mut self, source: Tuple<S>) -> &mut Self
    where
        L: MoveAssignList<S>,
    {
        self.slots.move_assign_list(source.slots);
        self
    }

    /// Exchange every element with the corresponding element of `other`, left to right.
    ///
    /// Reference elements exchange the values of their referents, and keep referring to the same
    /// places.
    ///
    /// ```compile_fail
    /// use reftuple::prelude::*;
    ///
    /// let (x, y) = (1, 2);
    /// let mut a: Tuple![&i32] = Tuple::new((&x,));
    /// let mut b: Tuple![&i32] = Tuple::new((&y,));
    /// a.swap(&mut b);
    /// ```
    pub fn swap(&mut self, other: &mut Self)
    where
        L: SwapList,
    {
        self.slots.swap_list(&mut other.slots)
    }

    /// Exchange the referents of two tuples of [`Mut`](crate::Mut) and [`Move`](crate::Move)
    /// elements, consuming both. Neither tuple needs to be mutable.
    ///
    /// # Examples
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// let (mut a, mut b) = (1, 2);
    /// let left = tie((&mut a,));
    /// let right = tie((&mut b,));
    /// left.swap_referents(right);
    /// assert_eq!((a, b), (2, 1));
    /// ```
    pub fn swap_referents(self, other: Self)
    where
        L: SwapThroughList,
    {
        self.slots.swap_through_list(other.slots)
    }

    /// Consume the tuple into a flat Rust tuple of its elements' declared types (see
    /// [`ElementOf`]), for destructuring.
    ///
    /// # Examples
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// let mut y = 0;
    /// let (x, r) = tuple![String::from("x"), ref mut y].into_parts();
    /// *r += 1;
    /// assert_eq!(x, "x");
    /// assert_eq!(y, 1);
    /// ```
    pub fn into_parts(self) -> L::Owned
    where
        L: OwnedList,
    {
        self.slots.into_owned_list()
    }

    /// Borrow every element as a flat Rust tuple of shared references to what it shows.
    pub fn as_refs<'s>(&'s self) -> <L as RefList<'s>>::Refs
    where
        L: RefList<'s>,
    {
        self.slots.ref_list()
    }

    /// Borrow every element as a flat Rust tuple of references, for destructuring in place:
    /// mutable references for [`Val`](crate::Val), [`Mut`](crate::Mut), and
    /// [`Move`](crate::Move) elements, shared references for the others.
    ///
    /// # Examples
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// let mut t = make_tuple((1, String::from("a")));
    /// let (n, s) = t.bind();
    /// *n += 1;
    /// s.push('b');
    /// assert_eq!(t, make_tuple((2, "ab")));
    /// ```
    pub fn bind<'s>(&'s mut self) -> <L as BindList<'s>>::Bindings
    where
        L: BindList<'s>,
    {
        self.slots.bind_list()
    }
}

impl<L: Flat> Tuple<L> {
    /// The number of elements.
    ///
    /// ```
    /// use reftuple::prelude::*;
    ///
    /// assert_eq!(<Tuple![]>::LEN, 0);
    /// assert_eq!(<Tuple![u8, &'static str, const bool]>::LEN, 3);
    /// ```
    pub const LEN: usize = <Arity<L> as Unary>::VALUE;
}

impl<'r, L, S: 'r> From<&'r Tuple<S>> for Tuple<L>
where
    L: CopyList<'r, S>,
{
    fn from(source: &'r Tuple<S>) -> Self {
        Tuple::from_ref(source)
    }
}

/// Tuples of the same arity compare equal when every pair of elements at the same position does,
/// checked left to right. Reference elements compare by their referents, not their addresses.
///
/// ```
/// use reftuple::prelude::*;
///
/// let (x, y) = (1, 1);
/// let a: Tuple![&i32] = Tuple::new((&x,));
/// let b: Tuple![&i32] = Tuple::new((&y,));
/// assert_eq!(a, b);
/// assert_eq!(a, make_tuple((1,)));
/// ```
///
/// Tuples of different arities cannot be compared at all:
///
/// ```compile_fail
/// use reftuple::prelude::*;
///
/// make_tuple((1,)) == make_tuple((1, 2));
/// ```
impl<L, R> PartialEq<Tuple<R>> for Tuple<L>
where
    L: EqList<R>,
{
    fn eq(&self, other: &Tuple<R>) -> bool {
        self.slots.eq_list(&other.slots)
    }
}

impl<L: DebugList> fmt::Debug for Tuple<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tuple = f.debug_tuple("Tuple");
        self.slots.debug_list(&mut tuple);
        tuple.finish()
    }
}

/// Exchange the contents of two tuples. See [`Tuple::swap`].
pub fn swap<L: SwapList>(left: &mut Tuple<L>, right: &mut Tuple<L>) {
    left.swap(right)
}

#[cfg(feature = "quickcheck")]
impl<L: quickcheck::Arbitrary> quickcheck::Arbitrary for Tuple<L> {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Tuple::from_slots(L::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.slots.shrink().map(Tuple::from_slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Const, Move, Mut, Ref, Val};
    use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

    assert_impl_all!(Tuple<()>: Copy, Default, PartialEq, fmt::Debug);
    assert_impl_all!(Tuple<(Val<u8>, Const<u16>, Ref<'static, str>)>: Copy, Clone);
    assert_not_impl_any!(Tuple<(Val<u8>, Mut<'static, u8>)>: Clone, Default);
    assert_not_impl_any!(Tuple<(Val<String>,)>: Copy);

    assert_eq_size!(Tuple<(Val<u8>, Val<u64>)>, (u8, u64));
    assert_eq_size!(Tuple<(Val<u64>, Val<u8>)>, (u8, u64));
    assert_eq_size!(Tuple<(Mut<'static, u8>, Move<'static, u8>)>, (&'static u8, &'static u8));
    assert_eq_size!(Tuple<(Ref<'static, str>,)>, &'static str);

    #[test]
    fn len() {
        assert_eq!(Tuple::<()>::LEN, 0);
        assert_eq!(Tuple::<(Val<u8>, Ref<'static, str>)>::LEN, 2);
    }

    #[test]
    fn debug_shows_targets() {
        let x = 5;
        let t: Tuple<(Val<&str>, Ref<i32>)> = Tuple::new(("a", &x));
        assert_eq!(format!("{:?}", t), r#"Tuple("a", 5)"#);
        assert_eq!(format!("{:?}", Tuple::from_slots(())), "Tuple");
    }

    #[test]
    fn copy_shares_referents() {
        let x = 1;
        let a: Tuple<(Ref<i32>,)> = Tuple::new((&x,));
        let b = a;
        assert!(std::ptr::eq(a.get::<0>(), b.get::<0>()));
    }
}

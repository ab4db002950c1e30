//! The slots a [`Tuple`](crate::Tuple) stores its elements in.
//!
//! Each element of a tuple lives in one of five slot types, and the slot type decides what every
//! tuple operation does to that element:
//!
//! | Slot | Holds | [`get`](Element::get) shows | Assignment | Swap |
//! | :--- | :---- | :-------------------------- | :--------- | :--- |
//! | [`Val<T>`] | a `T` | the `T` | replaces the `T` | swaps the `T`s |
//! | [`Const<T>`] | a `T`, never written after construction | the `T` | not available | not available |
//! | [`Mut<'a, T>`] | a `&'a mut T` | the referent | writes through to the referent | swaps the referents |
//! | [`Ref<'a, T>`] | a `&'a T` | the referent | not available | not available |
//! | [`Move<'a, T>`] | a `&'a mut T` whose referent is read by moving it out | the referent | writes through to the referent | swaps the referents |
//!
//! A reference slot is never re-bound once constructed: assignment and swap act on what it
//! refers to. Copying a [`Ref`] copies the reference, not the referent. [`Mut`] and [`Move`]
//! cannot be copied at all, because they hold unique borrows.
//!
//! The traits in this module describe single-slot operations. They are sealed, and are
//! implemented exactly for the five slot types. The whole-tuple versions in
//! [`list`](crate::list) apply them to each position in turn.

use std::{
    fmt::Debug,
    mem,
    ops::{Deref, DerefMut},
};

/// An element held by value.
///
/// # Examples
///
/// ```
/// use reftuple::prelude::*;
///
/// let mut t: Tuple![i32, String] = Tuple::new((1, "one"));
/// *t.get_mut::<0>() += 1;
/// assert_eq!(*t.get::<0>(), 2);
/// assert_eq!(t.get::<1>(), "one");
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Val<T>(pub T);

/// An element held by value which is never written after the tuple is constructed.
///
/// # Examples
///
/// ```
/// use reftuple::prelude::*;
///
/// let t: Tuple![const u8] = Tuple::new((7,));
/// assert_eq!(*t.get::<0>(), 7);
/// ```
///
/// There is no mutable access:
///
/// ```compile_fail
/// use reftuple::prelude::*;
///
/// let mut t: Tuple![const u8] = Tuple::new((7,));
/// *t.get_mut::<0>() = 8;
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Const<T>(T);

impl<T> Const<T> {
    /// Wrap a value.
    pub const fn new(value: T) -> Self {
        Const(value)
    }

    /// Unwrap the value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Const<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// A mutable reference element.
///
/// # Examples
///
/// ```
/// use reftuple::prelude::*;
///
/// let mut x = 1;
/// let mut t: Tuple![&mut i32] = Tuple::new((&mut x,));
/// *t.get_mut::<0>() = 2;
/// drop(t);
/// assert_eq!(x, 2);
/// ```
#[repr(transparent)]
#[derive(Debug)]
pub struct Mut<'a, T: ?Sized>(&'a mut T);

impl<'a, T: ?Sized> Mut<'a, T> {
    /// Refer to `referent`.
    pub fn new(referent: &'a mut T) -> Self {
        Mut(referent)
    }

    /// Give back the reference.
    pub fn into_inner(self) -> &'a mut T {
        self.0
    }
}

impl<'a, T: ?Sized> Deref for Mut<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<'a, T: ?Sized> DerefMut for Mut<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.0
    }
}

/// A read-only reference element.
#[repr(transparent)]
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Copy(bound = ""), Debug(bound = "T: Debug"))]
pub struct Ref<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> Ref<'a, T> {
    /// Refer to `referent`.
    pub fn new(referent: &'a T) -> Self {
        Ref(referent)
    }

    /// Give back the reference.
    pub fn into_inner(self) -> &'a T {
        self.0
    }
}

impl<'a, T: ?Sized> Deref for Ref<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

/// A reference element whose referent is handed over, rather than copied, whenever the element
/// is read as an owned value.
///
/// Reading a `Move` by value with [`IntoValue`] (which is what converting a tuple into a tuple of
/// values does) takes the referent and leaves `T::default()` behind, which is the moved-from
/// state of the referent.
///
/// # Examples
///
/// ```
/// use reftuple::prelude::*;
///
/// let mut s = String::from("moved");
/// let t: Tuple![&move String] = forward_as_tuple((Move::new(&mut s),));
/// let owned: Tuple![String] = t.convert();
/// assert_eq!(owned.get::<0>(), "moved");
/// assert_eq!(s, "");
/// ```
#[repr(transparent)]
#[derive(Debug)]
pub struct Move<'a, T: ?Sized>(&'a mut T);

impl<'a, T: ?Sized> Move<'a, T> {
    /// Refer to `referent`, which will be moved from when this element is consumed as a value.
    pub fn new(referent: &'a mut T) -> Self {
        Move(referent)
    }

    /// Give back the reference.
    pub fn into_inner(self) -> &'a mut T {
        self.0
    }
}

impl<'a, T: Default> Move<'a, T> {
    /// Move the referent out, leaving its default value behind.
    pub fn take(self) -> T {
        mem::take(self.0)
    }
}

impl<'a, T: ?Sized> Deref for Move<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<'a, T: ?Sized> DerefMut for Move<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.0
    }
}

/// Every slot type: something which shows a [`Target`](Element::Target) when read, and yields an
/// [`Owned`](Element::Owned) when the tuple holding it is consumed.
pub trait Element: sealed::Element {
    /// What reading the element shows: the value for value slots, the referent for reference
    /// slots.
    type Target: ?Sized;

    /// What consuming the element yields: the value for value slots, the reference (keeping its
    /// kind) for reference slots.
    type Owned;

    /// Read the element.
    fn get(&self) -> &Self::Target;

    /// Consume the element.
    fn into_owned(self) -> Self::Owned;
}

/// Slots which can be written through: [`Val`], [`Mut`], and [`Move`].
pub trait ElementMut: Element {
    /// Mutably access the element.
    fn get_mut(&mut self) -> &mut Self::Target;
}

impl<T> Element for Val<T> {
    type Target = T;
    type Owned = T;

    fn get(&self) -> &T {
        &self.0
    }

    fn into_owned(self) -> T {
        self.0
    }
}

impl<T> ElementMut for Val<T> {
    fn get_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Element for Const<T> {
    type Target = T;
    type Owned = T;

    fn get(&self) -> &T {
        &self.0
    }

    fn into_owned(self) -> T {
        self.0
    }
}

impl<'a, T: ?Sized> Element for Mut<'a, T> {
    type Target = T;
    type Owned = &'a mut T;

    fn get(&self) -> &T {
        self.0
    }

    fn into_owned(self) -> &'a mut T {
        self.0
    }
}

impl<'a, T: ?Sized> ElementMut for Mut<'a, T> {
    fn get_mut(&mut self) -> &mut T {
        self.0
    }
}

impl<'a, T: ?Sized> Element for Ref<'a, T> {
    type Target = T;
    type Owned = &'a T;

    fn get(&self) -> &T {
        self.0
    }

    fn into_owned(self) -> &'a T {
        self.0
    }
}

impl<'a, T: ?Sized> Element for Move<'a, T> {
    type Target = T;
    type Owned = Move<'a, T>;

    fn get(&self) -> &T {
        self.0
    }

    fn into_owned(self) -> Move<'a, T> {
        self
    }
}

impl<'a, T: ?Sized> ElementMut for Move<'a, T> {
    fn get_mut(&mut self) -> &mut T {
        self.0
    }
}

/// Read an element as an owned value, consuming it.
///
/// Value slots give up their value. Reading a [`Mut`] or [`Ref`] this way clones the referent,
/// and reading a [`Move`] takes the referent, leaving its default behind.
pub trait IntoValue: Element {
    /// The owned value.
    type Value;

    /// Consume the element, producing an owned value.
    fn into_value(self) -> Self::Value;
}

impl<T> IntoValue for Val<T> {
    type Value = T;

    fn into_value(self) -> T {
        self.0
    }
}

impl<T> IntoValue for Const<T> {
    type Value = T;

    fn into_value(self) -> T {
        self.0
    }
}

impl<'a, T: Clone> IntoValue for Mut<'a, T> {
    type Value = T;

    fn into_value(self) -> T {
        self.0.clone()
    }
}

impl<'a, T: Clone> IntoValue for Ref<'a, T> {
    type Value = T;

    fn into_value(self) -> T {
        self.0.clone()
    }
}

impl<'a, T: Default> IntoValue for Move<'a, T> {
    type Value = T;

    fn into_value(self) -> T {
        mem::take(self.0)
    }
}

/// Construct a slot from one forwarded argument.
///
/// Value slots convert their argument with [`From`]. Reference slots bind to a reference of the
/// matching kind, without touching the referent.
pub trait Construct<A>: Element + Sized {
    /// Construct the slot.
    fn construct(arg: A) -> Self;
}

impl<T: From<A>, A> Construct<A> for Val<T> {
    fn construct(arg: A) -> Self {
        Val(T::from(arg))
    }
}

impl<T: From<A>, A> Construct<A> for Const<T> {
    fn construct(arg: A) -> Self {
        Const(T::from(arg))
    }
}

impl<'a, T: ?Sized> Construct<&'a mut T> for Mut<'a, T> {
    fn construct(arg: &'a mut T) -> Self {
        Mut(arg)
    }
}

impl<'a, T: ?Sized> Construct<Mut<'a, T>> for Mut<'a, T> {
    fn construct(arg: Mut<'a, T>) -> Self {
        arg
    }
}

impl<'a, T: ?Sized> Construct<&'a T> for Ref<'a, T> {
    fn construct(arg: &'a T) -> Self {
        Ref(arg)
    }
}

impl<'a, T: ?Sized> Construct<&'a mut T> for Ref<'a, T> {
    fn construct(arg: &'a mut T) -> Self {
        Ref(arg)
    }
}

impl<'a, T: ?Sized> Construct<Ref<'a, T>> for Ref<'a, T> {
    fn construct(arg: Ref<'a, T>) -> Self {
        arg
    }
}

impl<'a, T: ?Sized> Construct<Move<'a, T>> for Move<'a, T> {
    fn construct(arg: Move<'a, T>) -> Self {
        arg
    }
}

/// Construct a slot by copying from a borrowed slot of another tuple.
///
/// Value slots clone the source's target and convert it with [`From`]. A [`Ref`] refers to
/// whatever the source shows, which is the source's referent if the source is itself a reference.
pub trait CopyFrom<'r, S: 'r>: Sized {
    /// Construct the slot from `source`.
    fn copy_from(source: &'r S) -> Self;
}

impl<'r, T, S> CopyFrom<'r, S> for Val<T>
where
    S: Element + 'r,
    S::Target: Clone,
    T: From<S::Target>,
{
    fn copy_from(source: &'r S) -> Self {
        Val(T::from(source.get().clone()))
    }
}

impl<'r, T, S> CopyFrom<'r, S> for Const<T>
where
    S: Element + 'r,
    S::Target: Clone,
    T: From<S::Target>,
{
    fn copy_from(source: &'r S) -> Self {
        Const(T::from(source.get().clone()))
    }
}

impl<'r: 'a, 'a, T: ?Sized, S> CopyFrom<'r, S> for Ref<'a, T>
where
    S: Element<Target = T> + 'r,
{
    fn copy_from(source: &'r S) -> Self {
        Ref(source.get())
    }
}

/// Construct a slot by consuming a slot of another tuple.
///
/// Value slots read the source with [`IntoValue`] and convert the result with [`From`]. Reference
/// slots take over the source's reference, which may be weakened from [`Mut`] or [`Move`] to
/// [`Ref`] but never strengthened.
pub trait MoveFrom<S>: Sized {
    /// Construct the slot from `source`.
    fn move_from(source: S) -> Self;
}

impl<T, S> MoveFrom<S> for Val<T>
where
    S: IntoValue,
    T: From<S::Value>,
{
    fn move_from(source: S) -> Self {
        Val(T::from(source.into_value()))
    }
}

impl<T, S> MoveFrom<S> for Const<T>
where
    S: IntoValue,
    T: From<S::Value>,
{
    fn move_from(source: S) -> Self {
        Const(T::from(source.into_value()))
    }
}

impl<'a, 'b: 'a, T: ?Sized> MoveFrom<Mut<'b, T>> for Mut<'a, T> {
    fn move_from(source: Mut<'b, T>) -> Self {
        Mut(source.0)
    }
}

impl<'a, 'b: 'a, T: ?Sized> MoveFrom<Ref<'b, T>> for Ref<'a, T> {
    fn move_from(source: Ref<'b, T>) -> Self {
        Ref(source.0)
    }
}

impl<'a, 'b: 'a, T: ?Sized> MoveFrom<Mut<'b, T>> for Ref<'a, T> {
    fn move_from(source: Mut<'b, T>) -> Self {
        Ref(source.0)
    }
}

impl<'a, 'b: 'a, T: ?Sized> MoveFrom<Move<'b, T>> for Ref<'a, T> {
    fn move_from(source: Move<'b, T>) -> Self {
        Ref(source.0)
    }
}

impl<'a, 'b: 'a, T: ?Sized> MoveFrom<Move<'b, T>> for Move<'a, T> {
    fn move_from(source: Move<'b, T>) -> Self {
        Move(source.0)
    }
}

/// Assign to a slot from a borrowed slot of another tuple.
///
/// A [`Val`] replaces its value. A [`Mut`] or [`Move`] assigns to its referent and keeps
/// referring to the same place.
pub trait CopyAssign<S> {
    /// Assign from `source`.
    fn copy_assign(&mut self, source: &S);
}

impl<T, S> CopyAssign<S> for Val<T>
where
    S: Element,
    S::Target: Clone,
    T: From<S::Target>,
{
    fn copy_assign(&mut self, source: &S) {
        self.0 = T::from(source.get().clone());
    }
}

impl<'a, T, S> CopyAssign<S> for Mut<'a, T>
where
    S: Element,
    S::Target: Clone,
    T: From<S::Target>,
{
    fn copy_assign(&mut self, source: &S) {
        *self.0 = T::from(source.get().clone());
    }
}

impl<'a, T, S> CopyAssign<S> for Move<'a, T>
where
    S: Element,
    S::Target: Clone,
    T: From<S::Target>,
{
    fn copy_assign(&mut self, source: &S) {
        *self.0 = T::from(source.get().clone());
    }
}

/// Assign to a slot by consuming a slot of another tuple.
///
/// The source is read with [`IntoValue`], so a [`Move`] source hands over its referent and a
/// [`Mut`] or [`Ref`] source is cloned.
pub trait MoveAssign<S> {
    /// Assign from `source`.
    fn move_assign(&mut self, source: S);
}

impl<T, S> MoveAssign<S> for Val<T>
where
    S: IntoValue,
    T: From<S::Value>,
{
    fn move_assign(&mut self, source: S) {
        self.0 = T::from(source.into_value());
    }
}

impl<'a, T, S> MoveAssign<S> for Mut<'a, T>
where
    S: IntoValue,
    T: From<S::Value>,
{
    fn move_assign(&mut self, source: S) {
        *self.0 = T::from(source.into_value());
    }
}

impl<'a, T, S> MoveAssign<S> for Move<'a, T>
where
    S: IntoValue,
    T: From<S::Value>,
{
    fn move_assign(&mut self, source: S) {
        *self.0 = T::from(source.into_value());
    }
}

/// Exchange the contents of two slots of the same type.
///
/// Reference slots exchange their referents' values. Unsized referents cannot be exchanged.
pub trait Swap {
    /// Exchange with `other`.
    fn swap(&mut self, other: &mut Self);
}

impl<T> Swap for Val<T> {
    fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.0, &mut other.0)
    }
}

impl<'a, T> Swap for Mut<'a, T> {
    fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut *self.0, &mut *other.0)
    }
}

impl<'a, T> Swap for Move<'a, T> {
    fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut *self.0, &mut *other.0)
    }
}

/// Exchange the referents of two reference slots, consuming both slots.
///
/// Unlike [`Swap`], this needs no mutable access to the slots themselves, only the unique
/// borrows they hold.
pub trait SwapThrough: Sized {
    /// Exchange referents with `other`.
    fn swap_through(self, other: Self);
}

impl<'a, T> SwapThrough for Mut<'a, T> {
    fn swap_through(self, other: Self) {
        mem::swap(self.0, other.0)
    }
}

impl<'a, T> SwapThrough for Move<'a, T> {
    fn swap_through(self, other: Self) {
        mem::swap(self.0, other.0)
    }
}

/// Borrow a slot as a plain reference, for destructuring a tuple into named bindings.
///
/// Writable slots give a `&mut`, read-only slots give a `&`.
pub trait Bind<'s>: 's {
    /// The binding produced.
    type Binding;

    /// Borrow the slot.
    fn bind(&'s mut self) -> Self::Binding;
}

impl<'s, T: 's> Bind<'s> for Val<T> {
    type Binding = &'s mut T;

    fn bind(&'s mut self) -> &'s mut T {
        &mut self.0
    }
}

impl<'s, T: 's> Bind<'s> for Const<T> {
    type Binding = &'s T;

    fn bind(&'s mut self) -> &'s T {
        &self.0
    }
}

impl<'s, 'a: 's, T: ?Sized + 's> Bind<'s> for Mut<'a, T> {
    type Binding = &'s mut T;

    fn bind(&'s mut self) -> &'s mut T {
        &mut *self.0
    }
}

impl<'s, 'a: 's, T: ?Sized + 's> Bind<'s> for Ref<'a, T> {
    type Binding = &'a T;

    fn bind(&'s mut self) -> &'a T {
        self.0
    }
}

impl<'s, 'a: 's, T: ?Sized + 's> Bind<'s> for Move<'a, T> {
    type Binding = &'s mut T;

    fn bind(&'s mut self) -> &'s mut T {
        &mut *self.0
    }
}

/// Arguments which can be forwarded into a tuple of references, keeping their kind:
/// `&T` becomes [`Ref`], `&mut T` becomes [`Mut`], and [`Move`] stays [`Move`].
pub trait Forward {
    /// The slot the argument is forwarded into.
    type Slot: Element;

    /// Wrap the argument in its slot.
    fn forward(self) -> Self::Slot;
}

impl<'a, T: ?Sized> Forward for &'a T {
    type Slot = Ref<'a, T>;

    fn forward(self) -> Ref<'a, T> {
        Ref(self)
    }
}

impl<'a, T: ?Sized> Forward for &'a mut T {
    type Slot = Mut<'a, T>;

    fn forward(self) -> Mut<'a, T> {
        Mut(self)
    }
}

impl<'a, T: ?Sized> Forward for Move<'a, T> {
    type Slot = Move<'a, T>;

    fn forward(self) -> Move<'a, T> {
        self
    }
}

#[cfg(feature = "quickcheck")]
mod arbitrary {
    use {
        super::*,
        quickcheck::{Arbitrary, Gen},
    };

    impl<T: Arbitrary> Arbitrary for Val<T> {
        fn arbitrary(g: &mut Gen) -> Self {
            Val(T::arbitrary(g))
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            Box::new(self.0.shrink().map(Val))
        }
    }

    impl<T: Arbitrary> Arbitrary for Const<T> {
        fn arbitrary(g: &mut Gen) -> Self {
            Const(T::arbitrary(g))
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            Box::new(self.0.shrink().map(Const))
        }
    }
}

mod sealed {
    use super::*;

    pub trait Element {}
    impl<T> Element for Val<T> {}
    impl<T> Element for Const<T> {}
    impl<'a, T: ?Sized> Element for Mut<'a, T> {}
    impl<'a, T: ?Sized> Element for Ref<'a, T> {}
    impl<'a, T: ?Sized> Element for Move<'a, T> {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_slots_write_through() {
        let mut x = 1;
        let mut m = Mut::new(&mut x);
        m.copy_assign(&Val(5));
        assert_eq!(*m.get(), 5);
        drop(m);
        assert_eq!(x, 5);
    }

    #[test]
    fn move_leaves_default_behind() {
        let mut s = String::from("taken");
        let value = Move::new(&mut s).into_value();
        assert_eq!(value, "taken");
        assert!(s.is_empty());
    }

    #[test]
    fn lvalue_reads_copy() {
        let mut s = String::from("kept");
        let value = Mut::new(&mut s).into_value();
        assert_eq!(value, "kept");
        assert_eq!(s, "kept");
    }

    #[test]
    fn swap_through_exchanges_referents() {
        let (mut a, mut b) = (1, 2);
        Mut::new(&mut a).swap_through(Mut::new(&mut b));
        assert_eq!((a, b), (2, 1));
    }

    #[test]
    fn copying_a_reference_copies_the_address() {
        let x = 3;
        let r = Ref::new(&x);
        let copy: Ref<i32> = CopyFrom::copy_from(&r);
        assert!(std::ptr::eq(copy.into_inner(), &x));
    }

    #[test]
    fn ref_binds_to_mut() {
        let mut x = 3;
        let r: Ref<i32> = Construct::construct(&mut x);
        assert_eq!(*r, 3);
    }
}

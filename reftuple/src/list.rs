//! Whole-tuple operations over the flat tuples of slots which a [`Tuple`](crate::Tuple) stores.
//!
//! Every trait here is implemented for flat tuples of every arity from `0` to `12`, by applying
//! the corresponding per-slot trait from [`element`](crate::element) to each position from left
//! to right. None of them allocate, and none of them copy an element they were not asked to
//! copy.
//!
//! Alongside the flat representation, this module also provides the inductive one: a flat tuple
//! `(A, B, C)` corresponds to the list `(A, (B, (C, ())))`, and [`Flat`] and [`List`] convert
//! between the two. Operations which recurse over the elements, such as [`Concat`] and
//! [`HasLength`], are written against the inductive form.

use std::fmt;

use crate::{
    element,
    unary::{self, Unary, Z},
};

/// Convert a flat tuple into its corresponding inductive list structure.
pub trait Flat: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsFlat = Self>;

    /// Convert to the inductive list.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding flat tuple.
pub trait List: HasLength + Sized {
    /// The corresponding flat tuple.
    type AsFlat: Flat<AsList = Self>;

    /// Convert to the flat tuple.
    fn into_flat(self) -> Self::AsFlat;
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = unary::S<Ts::Length>;
}

/// Append one inductive list to another.
///
/// # Examples
///
/// ```
/// use reftuple::list::Concat;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     <(u8, (u16, ())) as Concat<(u32, ())>>::Output,
///     (u8, (u16, (u32, ()))),
/// );
/// assert_eq!((1, (2, ())).concat((3, ())), (1, (2, (3, ()))));
/// ```
pub trait Concat<R> {
    /// The combined list.
    type Output;

    /// Append `rest` to the end of `self`.
    fn concat(self, rest: R) -> Self::Output;
}

impl<R> Concat<R> for () {
    type Output = R;

    fn concat(self, rest: R) -> R {
        rest
    }
}

impl<T, Ts: Concat<R>, R> Concat<R> for (T, Ts) {
    type Output = (T, Ts::Output);

    fn concat(self, rest: R) -> Self::Output {
        (self.0, self.1.concat(rest))
    }
}

/// Project the slot at index `I`.
///
/// There is no impl for an index past the end, so an out-of-range index is a compile-time error:
///
/// ```compile_fail
/// use reftuple::prelude::*;
///
/// let t = make_tuple((1, 2));
/// t.get::<2>();
/// ```
pub trait Get<const I: usize> {
    /// The slot at index `I`.
    type Slot: element::Element;

    /// Borrow the slot.
    fn slot(&self) -> &Self::Slot;

    /// Mutably borrow the slot.
    fn slot_mut(&mut self) -> &mut Self::Slot;

    /// Take the slot, discarding the others.
    fn into_slot(self) -> Self::Slot;
}

/// Construct every slot from the corresponding forwarded argument.
pub trait ConstructList<A>: Sized {
    /// Construct the slots.
    fn construct_list(args: A) -> Self;
}

/// Construct every slot by copying from the corresponding slot of a borrowed source.
pub trait CopyList<'r, S: 'r>: Sized {
    /// Construct the slots.
    fn copy_list(source: &'r S) -> Self;
}

/// Construct every slot by consuming the corresponding slot of a source.
pub trait MoveList<S>: Sized {
    /// Construct the slots.
    fn move_list(source: S) -> Self;
}

/// Assign to every slot from the corresponding slot of a borrowed source.
pub trait CopyAssignList<S> {
    /// Assign, left to right.
    fn copy_assign_list(&mut self, source: &S);
}

/// Assign to every slot by consuming the corresponding slot of a source.
pub trait MoveAssignList<S> {
    /// Assign, left to right.
    fn move_assign_list(&mut self, source: S);
}

/// Compare the targets of two tuples of slots position by position.
///
/// Each pair of targets must be comparable in both directions.
pub trait EqList<R> {
    /// Whether every pair of targets is equal, checked left to right, stopping at the first
    /// unequal pair.
    fn eq_list(&self, other: &R) -> bool;
}

/// Exchange every slot with the corresponding slot of another tuple of the same type.
pub trait SwapList {
    /// Exchange, left to right.
    fn swap_list(&mut self, other: &mut Self);
}

/// Exchange the referents of every slot with those of another tuple of references, consuming
/// both.
pub trait SwapThroughList: Sized {
    /// Exchange, left to right.
    fn swap_through_list(self, other: Self);
}

/// Format every target as a field of a tuple.
pub trait DebugList {
    /// Add each target as a field.
    fn debug_list(&self, f: &mut fmt::DebugTuple<'_, '_>);
}

/// Consume every slot into its owned form.
pub trait OwnedList {
    /// The flat tuple of owned forms.
    type Owned;

    /// Consume the slots.
    fn into_owned_list(self) -> Self::Owned;
}

/// Borrow every target.
pub trait RefList<'s>: 's {
    /// The flat tuple of borrowed targets.
    type Refs;

    /// Borrow the targets.
    fn ref_list(&'s self) -> Self::Refs;
}

/// Borrow every slot as a plain reference, mutable where the slot allows it.
pub trait BindList<'s>: 's {
    /// The flat tuple of bindings.
    type Bindings;

    /// Borrow the slots.
    fn bind_list(&'s mut self) -> Self::Bindings;
}

/// Wrap every element of a flat tuple of values in a [`Val`](crate::element::Val).
pub trait Decay {
    /// The flat tuple of slots.
    type Slots;

    /// Wrap the values.
    fn decay(self) -> Self::Slots;
}

/// Wrap every element of a flat tuple of mutable references in a [`Mut`](crate::element::Mut).
pub trait Tie {
    /// The flat tuple of slots.
    type Slots;

    /// Wrap the references.
    fn tie(self) -> Self::Slots;
}

/// Wrap every element of a flat tuple of forwarded references in the slot matching its kind.
pub trait ForwardList {
    /// The flat tuple of slots.
    type Slots;

    /// Wrap the references.
    fn forward_list(self) -> Self::Slots;
}

reftuple_macro::impl_lists!(12);

use std::mem::{align_of, size_of};

use reftuple::{
    element::Val,
    list::{CopyAssignList, SwapList, SwapThroughList},
    prelude::*,
    tuple::IntoSlots,
};
use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

mod common;
use common::*;

// Values are stored unboxed and references as plain references.
assert_eq_size!(Tuple![u8, u64, u16], (u8, u64, u16));
assert_eq_size!(Tuple![&'static mut u64, &'static str], (&'static mut u64, &'static str));
assert_eq_size!(Tuple![&'static move String], &'static mut String);
assert_eq_size!(Tuple![], ());
assert_eq_size!(Tuple![Empty, Empty], ());

// Element order does not change the size.
assert_eq_size!(Tuple![u8, u64, u16], Tuple![u64, u16, u8]);
assert_eq_size!(Tuple![u8, &'static str, u32], Tuple![&'static str, u32, u8]);

// Trivially copyable elements make a trivially copyable tuple.
assert_impl_all!(Tuple![u8, const i64, &'static str, Empty]: Copy, Clone);
assert_impl_all!(Tuple![]: Copy, Default);
assert_impl_all!(Tuple![CopyOnly, const String]: Clone);
assert_not_impl_any!(Tuple![CopyOnly]: Copy);
assert_not_impl_any!(Tuple![MoveOnly]: Clone);
assert_not_impl_any!(Tuple![u8, &'static mut u8]: Clone, Copy, Default);
assert_not_impl_any!(Tuple![&'static move u8]: Clone, Copy, Default);
assert_not_impl_any!(Tuple![&'static u8]: Default);

// Unsized referents can be read and mutated in place, but never swapped or assigned.
assert_not_impl_any!(
    <Tuple![&'static mut str] as IntoSlots>::Slots:
        SwapList, SwapThroughList, CopyAssignList<(Val<String>,)>
);
assert_not_impl_any!(<Tuple![&'static mut [u8]] as IntoSlots>::Slots: SwapList, SwapThroughList);

// Read-only references still copy, but do not swap.
assert_impl_all!(Tuple![&'static str, u8]: Copy, Clone);
assert_impl_all!(Tuple![&'static Immovable, u8]: Copy, Clone);
assert_not_impl_any!(<Tuple![&'static str, u8] as IntoSlots>::Slots: SwapList);

#[test]
fn alignment_matches_native_tuples() {
    assert_eq!(align_of::<Tuple![u8, u64]>(), align_of::<(u8, u64)>());
    assert_eq!(size_of::<Tuple![u16, u8, u16]>(), size_of::<(u16, u16, u8)>());
}

#[test]
fn copies_are_independent() {
    let a = make_tuple((1, 'a'));
    let mut b = a;
    *b.get_mut::<0>() = 2;
    assert_eq!(a, make_tuple((1, 'a')));
    assert_eq!(b, make_tuple((2, 'a')));
}

use reftuple::{
    prelude::*,
    tuple::{ElementOf, IntoSlots},
};
use static_assertions::assert_type_eq_all;

mod common;
use common::*;

type Mixed<'a> = Tuple![i32, const u8, &'a mut String, &'a str, &'a move MoveOnly];
type MixedSlots<'a> = <Mixed<'a> as IntoSlots>::Slots;

assert_type_eq_all!(ElementOf<MixedSlots<'static>, 0>, i32);
assert_type_eq_all!(ElementOf<MixedSlots<'static>, 1>, u8);
assert_type_eq_all!(ElementOf<MixedSlots<'static>, 2>, &'static mut String);
assert_type_eq_all!(ElementOf<MixedSlots<'static>, 3>, &'static str);
assert_type_eq_all!(ElementOf<MixedSlots<'static>, 4>, Move<'static, MoveOnly>);

#[test]
fn every_kind_reads_its_target() {
    let mut s = String::from("mut");
    let mut m = MoveOnly::new(4);
    let t: Mixed = Tuple::new((1, 2u8, &mut s, "ref", Move::new(&mut m)));
    assert_eq!(*t.get::<0>(), 1);
    assert_eq!(*t.get::<1>(), 2);
    assert_eq!(t.get::<2>(), "mut");
    assert_eq!(t.get::<3>(), "ref");
    assert_eq!(t.get::<4>().value(), Some(4));
    assert_eq!(Mixed::LEN, 5);
}

#[test]
fn writable_kinds() {
    let mut s = String::from("mut");
    let mut m = MoveOnly::new(4);
    let mut t: Mixed = Tuple::new((1, 2u8, &mut s, "ref", Move::new(&mut m)));
    *t.get_mut::<0>() += 1;
    t.get_mut::<2>().push('!');
    *t.get_mut::<4>() = MoveOnly::new(5);
    assert_eq!(*t.get::<0>(), 2);
    drop(t);
    assert_eq!(s, "mut!");
    assert_eq!(m.value(), Some(5));
}

#[test]
fn unsized_referents() {
    let mut bytes = [1u8, 2, 3];
    let mut text = String::from("loud");
    let mut t: Tuple![&mut [u8], &mut str] = Tuple::new((&mut bytes[..], text.as_mut_str()));
    t.get_mut::<0>()[0] = 9;
    t.get_mut::<1>().make_ascii_uppercase();
    assert_eq!(t.get::<0>().len(), 3);
    drop(t);
    assert_eq!(bytes, [9, 2, 3]);
    assert_eq!(text, "LOUD");
}

fn mixed<'a>(s: &'a mut String, m: &'a mut MoveOnly) -> Mixed<'a> {
    Tuple::new((1, 2u8, s, "ref", Move::new(m)))
}

#[test]
fn into_get_yields_declared_types() {
    let mut s = String::from("s");
    let mut m = MoveOnly::new(1);

    let value: i32 = mixed(&mut s, &mut m).into_get::<0>();
    assert_eq!(value, 1);
    let reference: &mut String = mixed(&mut s, &mut m).into_get::<2>();
    reference.push('t');
    let moving: Move<MoveOnly> = mixed(&mut s, &mut m).into_get::<4>();
    assert_eq!(moving.take().value(), Some(1));
    assert_eq!(s, "st");
    assert!(m.is_moved_from());
}

#[test]
fn into_parts_destructures() {
    let mut y = 1;
    let (x, r, c) = tuple![String::from("x"), ref mut y, const 'c'].into_parts();
    *r += 1;
    assert_eq!((x.as_str(), c), ("x", 'c'));
    assert_eq!(y, 2);
}

#[test]
fn bind_in_place() {
    let mut y = 10;
    let mut t = tuple![1, ref mut y, const "fixed"];
    {
        let (a, b, c) = t.bind();
        *a += 1;
        *b += 1;
        assert_eq!(*c, "fixed");
    }
    assert_eq!(*t.get::<0>(), 2);
    drop(t);
    assert_eq!(y, 11);
}

#[test]
fn as_refs_shows_targets() {
    let x = 3;
    let t = forward_as_tuple((&x,));
    let (r,) = t.as_refs();
    assert!(std::ptr::eq(r, &x));
}

#[test]
fn macro_kinds() {
    let (a, mut b, mut c) = (1, 2, MoveOnly::new(3));
    let t = tuple![0, const 'k', ref a, ref mut b, move c];
    let _: Tuple![i32, const char, &i32, &mut i32, &move MoveOnly] = t;
}

use reftuple::prelude::*;

mod common;
use common::*;

#[test]
fn values() {
    let mut a = make_tuple((1, String::from("a")));
    let mut b = make_tuple((2, String::from("b")));
    a.swap(&mut b);
    assert_eq!(a, make_tuple((2, "b")));
    assert_eq!(b, make_tuple((1, "a")));
}

#[test]
fn free_function() {
    let mut a = make_tuple((MoveOnly::new(1),));
    let mut b = make_tuple((MoveOnly::new(2),));
    reftuple::swap(&mut a, &mut b);
    assert_eq!(a.get::<0>().value(), Some(2));
    assert_eq!(b.get::<0>().value(), Some(1));
}

#[test]
fn swapping_twice_restores() {
    let mut a = make_tuple((1, 'a'));
    let mut b = make_tuple((2, 'b'));
    a.swap(&mut b);
    a.swap(&mut b);
    assert_eq!(a, make_tuple((1, 'a')));
    assert_eq!(b, make_tuple((2, 'b')));
}

#[test]
fn references_exchange_referents() {
    let (mut a, mut b) = (1, String::from("b"));
    let (mut c, mut d) = (3, String::from("d"));
    {
        let mut left = tie((&mut a, &mut b));
        let mut right = tie((&mut c, &mut d));
        let before: *const i32 = left.get::<0>();
        left.swap(&mut right);
        let after: *const i32 = left.get::<0>();
        assert_eq!(before, after);
    }
    assert_eq!((a, b.as_str()), (3, "d"));
    assert_eq!((c, d.as_str()), (1, "b"));
}

#[test]
fn mixed_values_and_references() {
    let (mut x, mut y) = (1, 2);
    let mut left: Tuple![char, &mut i32] = Tuple::new(('l', &mut x));
    let mut right: Tuple![char, &mut i32] = Tuple::new(('r', &mut y));
    reftuple::swap(&mut left, &mut right);
    assert_eq!(*left.get::<0>(), 'r');
    assert_eq!(*right.get::<0>(), 'l');
    drop((left, right));
    assert_eq!((x, y), (2, 1));
}

#[test]
fn swap_referents_of_shared_bindings() {
    let (mut a, mut b) = (MoveOnly::new(1), MoveOnly::new(2));
    let (mut s, mut t) = (String::from("s"), String::from("t"));
    let left = forward_as_tuple((Move::new(&mut a), &mut s));
    let right = forward_as_tuple((Move::new(&mut b), &mut t));
    left.swap_referents(right);
    assert_eq!(a.value(), Some(2));
    assert_eq!(b.value(), Some(1));
    assert_eq!((s.as_str(), t.as_str()), ("t", "s"));
}

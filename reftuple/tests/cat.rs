use reftuple::{cat::Cat, prelude::*};
use static_assertions::assert_type_eq_all;

mod common;
use common::*;

assert_type_eq_all!(
    Cat<(reftuple::Val<u8>,), (reftuple::Ref<'static, str>, reftuple::Const<char>)>,
    Tuple![u8, &'static str, const char],
);

#[test]
fn values() {
    let joined = concat(make_tuple((1, 'a')), make_tuple(("b", 2.5)));
    assert_eq!(joined, make_tuple((1, 'a', "b", 2.5)));
    assert_eq!(<Tuple![i32, char, &str, f64]>::LEN, 4);
}

#[test]
fn empty_operands() {
    let t = make_tuple((1,));
    assert_eq!(concat(make_tuple(()), t), make_tuple((1,)));
    assert_eq!(concat(t, make_tuple(())), make_tuple((1,)));
    assert_eq!(concat(make_tuple(()), make_tuple(())), make_tuple(()));
}

#[test]
fn references_keep_referring() {
    let (mut x, mut m) = (0, MoveOnly::new(1));
    let joined = concat(tie((&mut x,)), forward_as_tuple((Move::new(&mut m),)));
    let owned: Tuple![i32, MoveOnly] = joined.convert();
    assert_eq!(owned.get::<1>().value(), Some(1));
    assert!(m.is_moved_from());

    let mut joined = concat(make_tuple(('v',)), tie((&mut x,)));
    joined.assign(&make_tuple(('w', 5)));
    assert_eq!(*joined.get::<0>(), 'w');
    drop(joined);
    assert_eq!(x, 5);
}

#[test]
fn many_operands() {
    let s = String::from("s");
    let t = tuple_cat!(
        make_tuple((1, 2)),
        forward_as_tuple((&s,)),
        make_tuple(()),
        make_tuple((Wide(3),)),
    );
    assert_eq!(t, make_tuple((1, 2, "s", 3)));
    assert!(std::ptr::eq(t.get::<2>(), &s));
    assert_eq!(tuple_cat!(make_tuple((1,))), make_tuple((1,)));
}

#[test]
fn up_to_the_maximum_arity() {
    let six = make_tuple((0u8, 1u8, 2u8, 3u8, 4u8, 5u8));
    let twelve = concat(six, six);
    assert_eq!(*twelve.get::<11>(), 5);
    assert_eq!(<Tuple![u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8]>::LEN, 12);
}

fn len_of<L: reftuple::list::Flat>(_: &Tuple<L>) -> usize {
    Tuple::<L>::LEN
}

#[test]
fn read_only_reference_to_an_immovable_value() {
    let im = Immovable::new(7);
    let left: Tuple![&Immovable, f64] = Tuple::new((&im, 12.0f64));
    let right = <Tuple![i32]>::default();
    let joined = concat(left, right);
    assert_eq!(len_of(&joined), 3);
    assert_eq!(*joined.get::<2>(), *right.get::<0>());
    assert_eq!(*joined.get::<1>(), 12.0);
    assert!(std::ptr::eq(joined.get::<0>(), &im));
}

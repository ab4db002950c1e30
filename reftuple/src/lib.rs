/*!
Fixed-arity heterogeneous tuples whose elements may be values *or references*, with reference
elements that behave like references: they are assigned *through*, swapped *through*, compared
by what they refer to, and never re-bound.

A Rust tuple `(A, B)` can already hold references, but then `(&mut a, &mut b) = ...` replaces the
references rather than assigning to `a` and `b`, and `==` on two tuples of references needs both
sides to hold references. A [`Tuple`](struct@Tuple) instead knows, for each element, whether it is:

| Element kind | Written in [`Tuple!`] | Written in [`tuple!`] | Slot |
| :----------- | :-------------------- | :-------------------- | :--- |
| a value | `T` | `e` | [`Val<T>`](Val) |
| a value never written after construction | `const T` | `const e` | [`Const<T>`](Const) |
| a mutable reference | `&'a mut T` | `ref mut e` | [`Mut<'a, T>`](Mut) |
| a read-only reference | `&'a T` | `ref e` | [`Ref<'a, T>`](Ref) |
| a reference to a value to be moved from | `&'a move T` | `move e` | [`Move<'a, T>`](Move) |

and every operation on the tuple does the right thing for each kind. For example, assigning to a
tuple of mutable references assigns to their referents:

```
use reftuple::prelude::*;

let (mut x, mut name) = (0, String::new());
tie((&mut x, &mut name)).assign(&make_tuple((42, "answer")));
assert_eq!((x, name.as_str()), (42, "answer"));
```

Tuples compare by value, whatever their element kinds, as long as their arities match and their
elements compare in both directions:

```
use reftuple::prelude::*;

let owned = make_tuple((1, String::from("a")));
let (one, a) = (1, "a");
let borrowed = forward_as_tuple((&one, &a));
assert_eq!(owned, borrowed);
assert_eq!(borrowed, owned);
```

Operations which make no sense for some element kind are rejected at compile time, as are
out-of-range indices and comparisons between tuples of different arities. Nothing in this crate
fails at run time.

## Quick reference

| Operation | Available when |
| :-------- | :------------- |
| [`Tuple::new`], `From<(A, ...)>` | every element can be constructed from its argument |
| [`Tuple::from_ref`], `From<&Tuple<S>>` | every element can be copy-constructed from the source's |
| [`Tuple::from_tuple`], [`Tuple::convert`] | every element can be move-constructed from the source's |
| [`Tuple::get`], [`Tuple::into_get`] | always, for an index in range |
| [`Tuple::get_mut`] | the element at that index is not `const` or a read-only reference |
| [`Tuple::assign`], [`Tuple::assign_from`] | no element is `const` or a read-only reference |
| [`Tuple::swap`], [`swap`] | no element is `const` or a read-only reference |
| [`Tuple::swap_referents`] | every element is a mutable or moving reference |
| `==` | arities match and element pairs compare both ways |
| [`Clone`], [`Copy`] | no element is a mutable or moving reference, and the values allow it |
| [`Default`] | every element is a value with a default |
| [`concat`], [`tuple_cat!`] | the total arity is at most 12 |

The free constructors [`make_tuple`], [`tie`], and [`forward_as_tuple`] build tuples of values,
of mutable references, and of references of whatever kind they were given, respectively.

## Features

- `quickcheck`: implements `quickcheck::Arbitrary` for [`Val`], [`Const`], and
  [`Tuple`](struct@Tuple).
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod cat;
pub mod element;
pub mod list;
pub mod tuple;
pub mod unary;

mod make;

pub use cat::concat;
pub use element::{Const, Move, Mut, Ref, Val};
pub use make::{forward_as_tuple, make_tuple, tie};
pub use reftuple_macro::{tuple, Tuple};
pub use tuple::{swap, Tuple};

/// This is a dummy module for the `Tuple!` and `tuple!` proc macros to refer to from within
/// reftuple to ensure that the same path can resolve to the same types in different scopes (the
/// scope of being inside the reftuple crate somewhere and the scope of being inside a doctest
/// being compiled within reftuple, which *looks* like the reftuple crate itself to any proc macro
/// but actually isn't and has the reftuple crate as an extern crate in scope.)
pub(crate) mod reftuple {
    pub use crate::*;
}

/// The prelude module for quickly getting started with reftuple.
///
/// This module is designed to be imported as `use reftuple::prelude::*;`, which brings into scope
/// the tuple type, its macros, its free constructors, and the slot types needed to name
/// [`Move`] references.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::element::Move;
    #[doc(no_inline)]
    pub use crate::tuple_cat;
    #[doc(no_inline)]
    pub use crate::tuple::Tuple;
    #[doc(no_inline)]
    pub use crate::{concat, forward_as_tuple, make_tuple, tie};
    #[doc(no_inline)]
    pub use reftuple_macro::{tuple, Tuple};
}

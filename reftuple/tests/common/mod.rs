#![allow(dead_code)]

/// A tag which `CopyOnly` can be constructed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImplicitTag;

/// Cloneable, but not `Copy`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyOnly {
    pub value: i32,
}

impl CopyOnly {
    pub fn new(value: i32) -> Self {
        CopyOnly { value }
    }
}

impl From<ImplicitTag> for CopyOnly {
    fn from(_: ImplicitTag) -> Self {
        CopyOnly { value: -1 }
    }
}

impl From<i32> for CopyOnly {
    fn from(value: i32) -> Self {
        CopyOnly { value }
    }
}

/// Not cloneable. Its default is the state it is left in after being moved from.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MoveOnly {
    value: Option<i32>,
}

impl MoveOnly {
    pub fn new(value: i32) -> Self {
        MoveOnly { value: Some(value) }
    }

    pub fn value(&self) -> Option<i32> {
        self.value
    }

    pub fn is_moved_from(&self) -> bool {
        self.value.is_none()
    }
}

impl From<i32> for MoveOnly {
    fn from(value: i32) -> Self {
        MoveOnly::new(value)
    }
}

/// A wider integer, constructible from and comparable with `i32` in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wide(pub i64);

impl From<i32> for Wide {
    fn from(n: i32) -> Self {
        Wide(n.into())
    }
}

impl PartialEq<i32> for Wide {
    fn eq(&self, other: &i32) -> bool {
        self.0 == i64::from(*other)
    }
}

impl PartialEq<Wide> for i32 {
    fn eq(&self, other: &Wide) -> bool {
        i64::from(*self) == other.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

/// Neither `Clone` nor `Unpin`; only ever held by reference.
#[derive(Debug, PartialEq, Eq)]
pub struct Immovable {
    pub id: i32,
    _pinned: std::marker::PhantomPinned,
}

impl Immovable {
    pub fn new(id: i32) -> Self {
        Immovable {
            id,
            _pinned: std::marker::PhantomPinned,
        }
    }
}

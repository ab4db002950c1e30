use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for every combination of slot kinds up to a small arity, checking
    // which whole-tuple traits each combination has. This makes it much less likely that a missing
    // or overly general impl goes un-caught.
    println!("cargo:rerun-if-changed=build.rs");

    // Open a file to write to it in the output directory for the build
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("slot_kinds.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "use crate::element::*;")?;
    writeln!(f, "use crate::list::*;")?;
    writeln!(f, "use crate::tuple::Tuple;")?;
    writeln!(f, "use static_assertions::{{assert_impl_all, assert_not_impl_any}};")?;
    writeln!(f)?;

    // Write out the test
    writeln!(f, "#[test]")?;
    writeln!(f, "fn all_slot_kinds() {{")?;
    for slots in Slots::enumerate(3) {
        let copyable = slots.all(&[Kind::Val, Kind::Const, Kind::Ref]);
        let defaultable = slots.all(&[Kind::Val, Kind::Const]);
        let writable = slots.all(&[Kind::Val, Kind::Mut, Kind::Move]);
        let references = slots.all(&[Kind::Mut, Kind::Move]);

        writeln!(f, "    assert_impl_all!(Tuple<{}>: PartialEq);", slots)?;
        writeln!(f, "    assert_impl_all!({}: Flat, OwnedList, DebugList);", slots)?;
        check(&mut f, copyable, &format!("Tuple<{}>", slots), "Clone, Copy")?;
        check(&mut f, defaultable, &format!("Tuple<{}>", slots), "Default")?;
        check(
            &mut f,
            writable,
            &slots.to_string(),
            &format!("SwapList, CopyAssignList<{}>, MoveAssignList<{}>", slots, slots),
        )?;
        check(&mut f, references, &slots.to_string(), "SwapThroughList")?;
    }
    writeln!(f, "}}")?;
    Ok(())
}

/// Assert that `ty` implements all of `traits` if `expected`, or none of them otherwise.
fn check(f: &mut File, expected: bool, ty: &str, traits: &str) -> Result<(), Box<dyn Error>> {
    if expected {
        writeln!(f, "    assert_impl_all!({}: {});", ty, traits)?;
    } else {
        writeln!(f, "    assert_not_impl_any!({}: {});", ty, traits)?;
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Val,
    Const,
    Mut,
    Ref,
    Move,
}

impl Kind {
    const ALL: [Kind; 5] = [Kind::Val, Kind::Const, Kind::Mut, Kind::Ref, Kind::Move];

    fn next(self) -> Option<Kind> {
        let i = Kind::ALL.iter().position(|k| *k == self)?;
        Kind::ALL.get(i + 1).copied()
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        use Kind::*;
        match self {
            Val => write!(f, "Val<u8>"),
            Const => write!(f, "Const<u8>"),
            Mut => write!(f, "Mut<'static, u8>"),
            Ref => write!(f, "Ref<'static, u8>"),
            Move => write!(f, "Move<'static, u8>"),
        }
    }
}

/// A flat tuple of slots, written as Rust source.
#[derive(Clone, Debug)]
pub struct Slots(Vec<Kind>);

impl Slots {
    pub fn enumerate(max_arity: usize) -> SlotsIter {
        SlotsIter {
            max_arity,
            slots: Some(Slots(Vec::new())),
        }
    }

    fn all(&self, kinds: &[Kind]) -> bool {
        self.0.iter().all(|k| kinds.contains(k))
    }

    /// Step to the next combination of the same arity, or return `false` if this is the last.
    fn step(&mut self) -> bool {
        for kind in self.0.iter_mut() {
            match kind.next() {
                Some(next) => {
                    *kind = next;
                    return true;
                }
                None => *kind = Kind::Val,
            }
        }
        false
    }
}

impl Display for Slots {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let count = self.0.len();
        write!(f, "(")?;
        for (i, kind) in self.0.iter().enumerate() {
            write!(f, "{}", kind)?;
            if i + 1 < count {
                write!(f, ", ")?;
            }
        }
        if count == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

#[derive(Clone, Debug)]
pub struct SlotsIter {
    max_arity: usize,
    slots: Option<Slots>,
}

impl Iterator for SlotsIter {
    type Item = Slots;

    fn next(&mut self) -> Option<Slots> {
        match self.slots {
            None => None,
            Some(ref mut slots) => {
                let result = slots.clone();
                if !slots.step() {
                    if slots.0.len() < self.max_arity {
                        *slots = Slots(vec![Kind::Val; slots.0.len() + 1]);
                    } else {
                        self.slots = None;
                    }
                }
                Some(result)
            }
        }
    }
}

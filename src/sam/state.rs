use std::fmt::{self, Display};

use super::stack::{StackKind, StackRef};
use super::word::Word;


/// The memory of a machine: a root data stack, a root code stack, and
/// the current program counter stack. Created empty and populated by the
/// assembler; execution happens elsewhere.
#[derive(Debug, Clone)]
pub struct State {
	pub data: StackRef,
	pub code: StackRef,
	pub pc: StackRef,
}


impl State {
	pub fn new() -> Self {
		let data = StackRef::new(StackKind::Data);
		let code = StackRef::new(StackKind::Data);
		let pc = code.clone();

		Self { data, code, pc }
	}
}


impl Default for State {
	fn default() -> Self {
		Self::new()
	}
}


// Nested stacks may be cyclic, so the dump is cut off at a fixed depth.
const MAX_DEPTH: usize = 16;


fn dump(stack: &StackRef, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
	let indent = "\t".repeat(depth);

	for (index, word) in stack.items().iter().enumerate() {
		match word {
			Word::Int(value) => writeln!(f, "{}{}: int {}", indent, index, value)?,

			Word::Float(value) => writeln!(f, "{}{}: float {}", indent, index, value)?,

			Word::Atom { kind, value } => {
				writeln!(f, "{}{}: atom {:?} {}", indent, index, kind, value)?
			}

			Word::Trap(id) => writeln!(f, "{}{}: trap {}", indent, index, id)?,

			Word::Insts(bits) => writeln!(f, "{}{}: insts {:#018x}", indent, index, bits)?,

			Word::Stack(child) => {
				writeln!(f, "{}{}: stack", indent, index)?;

				if depth < MAX_DEPTH {
					dump(child, f, depth + 1)?;
				} else {
					writeln!(f, "{}\t...", indent)?;
				}
			}
		}
	}

	Ok(())
}


impl Display for State {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "code:")?;
		dump(&self.code, f, 1)?;
		writeln!(f, "data:")?;
		dump(&self.data, f, 1)
	}
}

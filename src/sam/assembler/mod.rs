mod error;
#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use super::inst::{self, Encoding, Opcode};
use super::stack::{StackKind, StackRef};
use super::state::State;
use super::word::{self, Tag, INSTS_PER_WORD, INST_BITS, TAG_BITS};
pub use error::Error;


/// The address of a label: the stack containing it, and the item index
/// where it was recorded.
#[derive(Debug, Clone)]
pub struct Address {
	pub stack: StackRef,
	pub index: usize,
}


/// The label table. Repopulated per top-level assembly and threaded
/// through the assembler context explicitly.
pub type Labels = HashMap<String, Address>;


/// Assemble a program into a fresh state. The program stack is pushed
/// onto the state's root code stack.
pub fn assemble(source: &[u8], base_dir: &Path) -> Result<State, Error> {
	let prog = read_prog(source)?;

	let mut labels = Labels::new();
	let state = State::new();

	let mut assembler = Assembler::new(&mut labels, base_dir);
	assembler.assemble_sequence(&prog)?;
	assembler.flush();

	state.code.push_ref(assembler.stack);

	Ok(state)
}


/// Decode the single YAML document holding the program.
fn read_prog(source: &[u8]) -> Result<Value, Error> {
	let mut documents = serde_yaml::Deserializer::from_slice(source);

	let document = documents
		.next()
		.ok_or(Error::EmptyInput)?;

	let prog = Value::deserialize(document)?;

	if documents.next().is_some() {
		return Err(Error::MultipleDocuments);
	}

	if prog.is_null() {
		return Err(Error::EmptyInput);
	}

	Ok(prog)
}


/// The tree walker. Each nested sequence gets its own assembler, with an
/// independent packing register but the shared label table.
struct Assembler<'a> {
	stack: StackRef,
	labels: &'a mut Labels,
	base_dir: &'a Path,
	/// The packed-instruction register, tag bits preset.
	insts: u64,
	n_insts: u32,
}


impl<'a> Assembler<'a> {
	fn new(labels: &'a mut Labels, base_dir: &'a Path) -> Self {
		Self {
			stack: StackRef::new(StackKind::Data),
			labels,
			base_dir,
			insts: Tag::Insts as u64,
			n_insts: 0,
		}
	}


	/// A child assembler for a nested sequence.
	fn child(&mut self) -> Assembler<'_> {
		Assembler::new(&mut *self.labels, self.base_dir)
	}


	fn assemble_sequence(&mut self, node: &Value) -> Result<(), Error> {
		let items = node
			.as_sequence()
			.ok_or(Error::NotASequence)?;

		for item in items {
			self.assemble_node(item)?;
		}

		Ok(())
	}


	fn assemble_node(&mut self, node: &Value) -> Result<(), Error> {
		match node {
			// A nested code block: assembled into a fresh stack, pushed
			// as a stack word.
			Value::Sequence(_) => {
				self.flush();

				let mut child = self.child();
				child.assemble_sequence(node)?;
				child.flush();
				let stack = child.stack;

				self.stack.push_ref(stack);
				Ok(())
			}

			// One instruction line.
			Value::String(line) => {
				let tokens: Vec<&str> = line.split_whitespace().collect();

				if tokens.is_empty() {
					return Err(Error::EmptyInstruction);
				}

				self.assemble_instruction(&tokens)
			}

			// YAML parses bare true/false as booleans; they are the
			// instruction aliases.
			Value::Bool(value) => {
				let name = if *value { "true" } else { "false" };
				self.assemble_instruction(&[name])
			}

			// A label: a mapping with exactly one entry and a string key.
			Value::Mapping(mapping) => {
				let mut entries = mapping.iter();

				let (key, value) = match (entries.next(), entries.next()) {
					(Some(entry), None) => entry,
					_ => return Err(Error::BadLabel),
				};

				let label = key
					.as_str()
					.ok_or(Error::BadLabel)?;

				self.flush();
				self.labels.insert(
					label.to_owned(),
					Address {
						stack: self.stack.clone(),
						index: self.stack.sp(),
					}
				);

				self.assemble_node(value)
			}

			Value::Tagged(tagged) => {
				self.flush();

				if tagged.tag == "include" {
					let path = tagged.value
						.as_str()
						.ok_or_else(|| Error::invalid_directive("include"))?;

					let source = fs::read(self.base_dir.join(path))?;
					let prog = read_prog(&source)?;

					// The included file is assembled as a nested stack.
					let mut child = self.child();
					child.assemble_sequence(&prog)?;
					child.flush();
					let stack = child.stack;

					self.stack.push_ref(stack);
					Ok(())
				} else if tagged.tag == "istack" {
					let label = tagged.value
						.as_str()
						.ok_or_else(|| Error::invalid_directive("istack"))?;

					let address = self.labels
						.get(label)
						.ok_or_else(|| Error::unresolved_label(label))?;

					// An address pair: item index, then the stack itself.
					self.stack.push_int(address.index as i64);
					self.stack.push_ref(address.stack.clone());
					Ok(())
				} else {
					Err(Error::InvalidDirective(tagged.tag.to_string()))
				}
			}

			_ => Err(Error::InvalidNode),
		}
	}


	fn assemble_instruction(&mut self, tokens: &[&str]) -> Result<(), Error> {
		let name = tokens[0];
		let inst = inst::lookup(name)
			.ok_or_else(|| Error::unknown_instruction(name))?;

		match inst.encoding {
			Encoding::Packed(op) => {
				if tokens.len() > 1 {
					return Err(Error::unexpected_operand(name));
				}

				self.pack(op, inst.terminal);
				Ok(())
			}

			encoding => {
				let operand = match tokens {
					[_, operand] => *operand,
					[_] => return Err(Error::needs_operand(name)),
					_ => return Err(Error::unexpected_operand(name)),
				};

				self.flush();
				self.assemble_operand(encoding, operand)
			}
		}
	}


	fn assemble_operand(&mut self, encoding: Encoding, operand: &str) -> Result<(), Error> {
		match encoding {
			Encoding::Int => {
				let value = self.parse_literal(operand)?;
				self.stack.push_int(value);
				Ok(())
			}

			Encoding::Float => {
				let value: f32 = operand
					.parse()
					.map_err(|_| Error::bad_float(operand))?;

				self.stack.push_float(value);
				Ok(())
			}

			Encoding::Stack => {
				let address = self.labels
					.get(operand)
					.ok_or_else(|| Error::unresolved_label(operand))?;

				let stack = address.stack.clone();
				self.stack.push_ref(stack);
				Ok(())
			}

			Encoding::Trap => {
				let trap = inst::lookup_trap(operand)
					.ok_or_else(|| Error::unknown_trap(operand))?;

				self.stack.push_trap(trap.id);
				Ok(())
			}

			Encoding::Quote => {
				let quoted = inst::lookup(operand)
					.ok_or_else(|| Error::bad_literal(operand))?;

				let op = match quoted.encoding {
					Encoding::Packed(op) => op,
					_ => return Err(Error::bad_literal(operand)),
				};

				self.stack.push_insts(single_inst(op));
				Ok(())
			}

			Encoding::Packed(_) => unreachable!("packed mnemonics have no operand"),
		}
	}


	/// Resolve an `int` operand: a decimal integer, or a trap name.
	fn parse_literal(&self, operand: &str) -> Result<i64, Error> {
		if let Ok(value) = operand.parse::<i64>() {
			if !word::int_fits(value) {
				return Err(Error::bad_literal(operand));
			}

			return Ok(value);
		}

		if let Some(trap) = inst::lookup_trap(operand) {
			return Ok(trap.id as i64);
		}

		Err(Error::bad_literal(operand))
	}


	/// Pack one opcode into the register, flushing around it as needed.
	fn pack(&mut self, op: Opcode, terminal: bool) {
		if self.n_insts == INSTS_PER_WORD {
			self.flush();
		}

		self.insts |= (op as u64) << (TAG_BITS + self.n_insts * INST_BITS);
		self.n_insts += 1;

		// Terminal instructions close their packed word.
		if terminal {
			self.flush();
		}
	}


	fn flush(&mut self) {
		if self.n_insts > 0 {
			self.stack.push_insts(self.insts);
			self.insts = Tag::Insts as u64;
			self.n_insts = 0;
		}
	}
}


/// A packed word holding a single opcode, as pushed by `quote`.
pub fn single_inst(op: Opcode) -> u64 {
	Tag::Insts as u64 | ((op as u64) << TAG_BITS)
}

use serde_yaml::{Mapping, Value};


/// One emitted item: an instruction line, a nested code block, or a
/// labelled item.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
	Inst(String),
	Block(Code),
	Labeled(String, Box<Item>),
}


/// The compiler's output: an ordered, heterogeneous list of mnemonic
/// strings and nested blocks, in the tree shape the assembler consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Code(pub Vec<Item>);


impl Item {
	fn to_value(&self) -> Value {
		match self {
			Self::Inst(inst) => Value::String(inst.clone()),

			Self::Block(code) => code.to_value(),

			Self::Labeled(label, item) => {
				let mut mapping = Mapping::new();
				mapping.insert(Value::String(label.clone()), item.to_value());
				Value::Mapping(mapping)
			}
		}
	}
}


impl Code {
	pub fn push(&mut self, item: Item) {
		self.0.push(item)
	}


	pub fn to_value(&self) -> Value {
		Value::Sequence(
			self.0
				.iter()
				.map(Item::to_value)
				.collect()
		)
	}
}


#[cfg(test)]
impl Code {
	/// All instruction lines in emission order, nested blocks included.
	pub fn flatten(&self) -> Vec<String> {
		let mut insts = Vec::new();
		self.flatten_into(&mut insts);
		insts
	}


	fn flatten_into(&self, insts: &mut Vec<String>) {
		for item in &self.0 {
			item.flatten_into(insts);
		}
	}
}


#[cfg(test)]
impl Item {
	fn flatten_into(&self, insts: &mut Vec<String>) {
		match self {
			Self::Inst(inst) => insts.push(inst.clone()),
			Self::Block(code) => code.flatten_into(insts),
			Self::Labeled(_, item) => item.flatten_into(insts),
		}
	}
}

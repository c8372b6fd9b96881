//! The instruction catalogue: every SAM mnemonic, its encoding, its
//! terminal flag, and its net stack effect. The opcode values and the
//! packing layout are a binding contract with the VM's decoder.


/// Opcodes packed into Insts words. `Nop` must be zero, as unused slots
/// in a packed word decode as `nop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
	Nop = 0,
	I2f,
	F2i,
	Pop,
	Get,
	Set,
	Extract,
	Insert,
	Iget,
	Iset,
	Ipop,
	Ipush,
	Append,
	Not,
	And,
	Or,
	Xor,
	Eq,
	Lt,
	Neg,
	Add,
	Mul,
	Div,
	Rem,
	Pow,
	Zero,
	One,
	NegOne,
	Two,
	NegTwo,
	Do,
	Call,
	Go,
	If,
	While,
	Halt,
}


/// How a mnemonic is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
	/// Packed into the current Insts word.
	Packed(Opcode),
	/// `int <literal>`: a tagged Int word.
	Int,
	/// `float <literal>`: a tagged Float word.
	Float,
	/// `stack <label>`: a reference to a labelled stack.
	Stack,
	/// `trap <name>`: a tagged Trap word.
	Trap,
	/// `quote <mnemonic>`: a single opcode pushed as a data word.
	Quote,
}


/// One catalogue entry.
#[derive(Debug, Clone, Copy)]
pub struct Inst {
	pub name: &'static str,
	pub encoding: Encoding,
	/// Terminal instructions must close their packed word.
	pub terminal: bool,
	/// Net stack delta when control falls through.
	pub delta: i64,
}


const fn packed(name: &'static str, op: Opcode, delta: i64) -> Inst {
	Inst { name, encoding: Encoding::Packed(op), terminal: false, delta }
}


const fn terminal(name: &'static str, op: Opcode, delta: i64) -> Inst {
	Inst { name, encoding: Encoding::Packed(op), terminal: true, delta }
}


const fn operand(name: &'static str, encoding: Encoding) -> Inst {
	Inst { name, encoding, terminal: true, delta: 1 }
}


pub static INSTRUCTIONS: &[Inst] = &[
	// Operand-bearing mnemonics, one tagged word each.
	operand("int", Encoding::Int),
	operand("float", Encoding::Float),
	operand("stack", Encoding::Stack),
	operand("trap", Encoding::Trap),
	operand("quote", Encoding::Quote),

	// Packed opcodes.
	packed("nop", Opcode::Nop, 0),
	packed("i2f", Opcode::I2f, 0),
	packed("f2i", Opcode::F2i, 0),
	packed("pop", Opcode::Pop, -1),
	packed("get", Opcode::Get, 0),
	packed("set", Opcode::Set, -2),
	packed("extract", Opcode::Extract, -1),
	packed("insert", Opcode::Insert, -1),
	packed("iget", Opcode::Iget, -1),
	packed("iset", Opcode::Iset, -3),
	packed("ipop", Opcode::Ipop, -1),
	packed("ipush", Opcode::Ipush, -2),
	packed("append", Opcode::Append, -2),
	packed("not", Opcode::Not, 0),
	packed("and", Opcode::And, -1),
	packed("or", Opcode::Or, -1),
	packed("xor", Opcode::Xor, -1),
	packed("eq", Opcode::Eq, -1),
	packed("lt", Opcode::Lt, -1),
	packed("neg", Opcode::Neg, 0),
	packed("add", Opcode::Add, -1),
	packed("mul", Opcode::Mul, -1),
	packed("div", Opcode::Div, -1),
	packed("rem", Opcode::Rem, -1),
	packed("pow", Opcode::Pow, -1),
	packed("zero", Opcode::Zero, 1),
	packed("false", Opcode::Zero, 1),
	packed("one", Opcode::One, 1),
	packed("_one", Opcode::NegOne, 1),
	packed("true", Opcode::NegOne, 1),
	packed("two", Opcode::Two, 1),
	packed("_two", Opcode::NegTwo, 1),

	// Control flow. All terminal except `while`.
	terminal("do", Opcode::Do, -1),
	terminal("call", Opcode::Call, -2),
	terminal("go", Opcode::Go, -1),
	terminal("if", Opcode::If, -3),
	packed("while", Opcode::While, -1),
	terminal("halt", Opcode::Halt, 0),
];


/// Look up a mnemonic. Names are matched case-insensitively.
pub fn lookup(name: &str) -> Option<&'static Inst> {
	let name = name.to_ascii_lowercase();

	INSTRUCTIONS
		.iter()
		.find(|inst| inst.name == name)
}


/// The stack effect of a trap: how many values it consumes and produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapEffect {
	pub input: u32,
	pub output: u32,
}


/// One trap entry.
#[derive(Debug, Clone, Copy)]
pub struct Trap {
	pub name: &'static str,
	pub id: u32,
	pub effect: TrapEffect,
}


const fn trap(name: &'static str, id: u32, input: u32, output: u32) -> Trap {
	Trap { name, id, effect: TrapEffect { input, output } }
}


pub static TRAPS: &[Trap] = &[
	// Machine primitives.
	trap("RET", 0, 0, 0),
	trap("S0", 1, 0, 1),
	trap("NEW", 2, 0, 1),
	trap("PREPEND", 3, 2, 1),
	trap("LEN", 4, 1, 1),
	trap("LSH", 5, 2, 1),
	trap("RSH", 6, 2, 1),
	trap("ARSH", 7, 2, 1),

	// Graphics.
	trap("BLACK", 8, 0, 1),
	trap("WHITE", 9, 0, 1),
	trap("DISPLAY_WIDTH", 10, 0, 1),
	trap("DISPLAY_HEIGHT", 11, 0, 1),
	trap("CLEARSCREEN", 12, 1, 0),
	trap("SETDOT", 13, 3, 0),
	trap("DRAWLINE", 14, 5, 0),
	trap("DRAWRECT", 15, 5, 0),
	trap("DRAWROUNDRECT", 16, 6, 0),
	trap("FILLRECT", 17, 5, 0),
	trap("INVERTRECT", 18, 4, 0),
	trap("DRAWCIRCLE", 19, 4, 0),
	trap("FILLCIRCLE", 20, 4, 0),
	trap("DRAWBITMAP", 21, 4, 0),
];


/// Look up a trap. Names are matched case-insensitively.
pub fn lookup_trap(name: &str) -> Option<&'static Trap> {
	let name = name.to_ascii_uppercase();

	TRAPS
		.iter()
		.find(|trap| trap.name == name)
}

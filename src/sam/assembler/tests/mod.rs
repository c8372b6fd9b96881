use std::path::PathBuf;

use assert_matches::assert_matches;

use super::*;
use super::super::word::Word;


fn data_dir() -> PathBuf {
	let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	dir.push("src/sam/assembler/tests/data");
	dir
}


fn assemble_str(source: &str) -> Result<State, Error> {
	assemble(source.as_bytes(), &data_dir())
}


/// The program stack: the single item pushed onto the root code stack.
fn program(state: &State) -> StackRef {
	assert_eq!(state.code.sp(), 1);

	match state.code.peek(0) {
		Ok(Word::Stack(ref stack)) => stack.clone(),
		other => panic!("program is not a stack: {:?}", other),
	}
}


fn packed(ops: &[Opcode]) -> u64 {
	let mut bits = Tag::Insts as u64;

	for (slot, op) in ops.iter().enumerate() {
		bits |= (*op as u64) << (TAG_BITS + slot as u32 * INST_BITS);
	}

	bits
}


#[test]
fn test_simple_program() {
	let state = assemble_str("[int 1, int 2, add, halt]").unwrap();
	let prog = program(&state);

	assert_eq!(prog.sp(), 3);
	assert_matches!(prog.peek(0), Ok(Word::Int(1)));
	assert_matches!(prog.peek(1), Ok(Word::Int(2)));
	// add is non-terminal, so halt packs into the same word.
	assert_matches!(
		prog.peek(2),
		Ok(Word::Insts(bits)) if bits == packed(&[Opcode::Add, Opcode::Halt])
	);
}


#[test]
fn test_packing_boundary() {
	// Exactly one word's worth of non-terminal opcodes packs into a
	// single word; one more starts a fresh word.
	let full = vec!["add"; INSTS_PER_WORD as usize].join(", ");

	let state = assemble_str(&format!("[{}]", full)).unwrap();
	assert_eq!(program(&state).sp(), 1);

	let state = assemble_str(&format!("[{}, add]", full)).unwrap();
	let prog = program(&state);
	assert_eq!(prog.sp(), 2);
	assert_matches!(
		prog.peek(1),
		Ok(Word::Insts(bits)) if bits == packed(&[Opcode::Add])
	);
}


#[test]
fn test_terminal_flushes_full_buffer() {
	// A terminal opcode arriving when the buffer is full must not be
	// lost: it lands alone in the next word.
	let full = vec!["add"; INSTS_PER_WORD as usize].join(", ");

	let state = assemble_str(&format!("[{}, halt]", full)).unwrap();
	let prog = program(&state);

	assert_eq!(prog.sp(), 2);
	assert_matches!(
		prog.peek(1),
		Ok(Word::Insts(bits)) if bits == packed(&[Opcode::Halt])
	);
}


#[test]
fn test_operand_instruction_flushes() {
	let state = assemble_str("[add, int 7, mul, halt]").unwrap();
	let prog = program(&state);

	assert_eq!(prog.sp(), 3);
	assert_matches!(
		prog.peek(0),
		Ok(Word::Insts(bits)) if bits == packed(&[Opcode::Add])
	);
	assert_matches!(prog.peek(1), Ok(Word::Int(7)));
	assert_matches!(
		prog.peek(2),
		Ok(Word::Insts(bits)) if bits == packed(&[Opcode::Mul, Opcode::Halt])
	);
}


#[test]
fn test_nested_sequence() {
	let state = assemble_str("[int 0, [one, two, add], do, halt]").unwrap();
	let prog = program(&state);

	// do is terminal, so halt starts a fresh packed word.
	assert_eq!(prog.sp(), 4);
	assert_matches!(prog.peek(0), Ok(Word::Int(0)));
	assert_matches!(
		prog.peek(2),
		Ok(Word::Insts(bits)) if bits == packed(&[Opcode::Do])
	);
	assert_matches!(
		prog.peek(3),
		Ok(Word::Insts(bits)) if bits == packed(&[Opcode::Halt])
	);

	let child = match prog.peek(1) {
		Ok(Word::Stack(ref stack)) => stack.clone(),
		other => panic!("expected nested stack, got {:?}", other),
	};

	// The child has its own packing register.
	assert_eq!(child.sp(), 1);
	assert_matches!(
		child.peek(0),
		Ok(Word::Insts(bits))
			if bits == packed(&[Opcode::One, Opcode::Two, Opcode::Add])
	);
}


#[test]
fn test_float_and_trap_operands() {
	let state = assemble_str("['float 1.5', trap CLEARSCREEN, halt]").unwrap();
	let prog = program(&state);

	assert_matches!(prog.peek(0), Ok(Word::Float(value)) if value == 1.5);
	assert_matches!(
		prog.peek(1),
		Ok(Word::Trap(id)) if id == inst::lookup_trap("CLEARSCREEN").unwrap().id
	);
}


#[test]
fn test_int_operand_accepts_trap_name() {
	let state = assemble_str("[int CLEARSCREEN, halt]").unwrap();
	let prog = program(&state);

	let id = inst::lookup_trap("CLEARSCREEN").unwrap().id as i64;
	assert_matches!(prog.peek(0), Ok(Word::Int(value)) if value == id);
}


#[test]
fn test_label_and_back_edge() {
	// The loop shape emitted by the compiler: the label wraps the first
	// item of the block, and the back-edge pushes the labelled stack.
	let source = "[int 0, [{top: zero}, pop, 'stack top', go], do, halt]";
	let state = assemble_str(source).unwrap();
	let prog = program(&state);

	let child = match prog.peek(1) {
		Ok(Word::Stack(ref stack)) => stack.clone(),
		other => panic!("expected nested stack, got {:?}", other),
	};

	// zero and pop pack together, flushed by the stack operand; then the
	// back-edge reference and go.
	assert_eq!(child.sp(), 3);
	assert_matches!(
		child.peek(0),
		Ok(Word::Insts(bits)) if bits == packed(&[Opcode::Zero, Opcode::Pop])
	);

	let back_edge = match child.peek(1) {
		Ok(Word::Stack(ref stack)) => stack.clone(),
		other => panic!("expected back-edge reference, got {:?}", other),
	};

	assert!(back_edge.ptr_eq(&child));
}


#[test]
fn test_istack_directive() {
	let source = "[{entry: [one, halt]}, int 0, !istack entry, halt]";
	let state = assemble_str(source).unwrap();
	let prog = program(&state);

	// Sequence: labelled stack, int 0, then the address pair.
	assert_matches!(prog.peek(1), Ok(Word::Int(0)));
	assert_matches!(prog.peek(2), Ok(Word::Int(0)));

	let target = match prog.peek(3) {
		Ok(Word::Stack(ref stack)) => stack.clone(),
		other => panic!("expected labelled stack, got {:?}", other),
	};

	let labelled = match prog.peek(0) {
		Ok(Word::Stack(ref stack)) => stack.clone(),
		other => panic!("expected nested stack, got {:?}", other),
	};

	assert!(target.ptr_eq(&prog));
	let _ = labelled;
}


#[test]
fn test_include_directive() {
	let state = assemble_str("[{file: !include 'lib.yaml'}, halt]").unwrap();
	let prog = program(&state);

	let lib = match prog.peek(0) {
		Ok(Word::Stack(ref stack)) => stack.clone(),
		other => panic!("expected included stack, got {:?}", other),
	};

	// lib.yaml holds `one, two, add, halt`.
	assert_eq!(lib.sp(), 1);
	assert_matches!(
		lib.peek(0),
		Ok(Word::Insts(bits))
			if bits == packed(&[Opcode::One, Opcode::Two, Opcode::Add, Opcode::Halt])
	);
}


#[test]
fn test_determinism() {
	let source = "[int 1, 'float 2.5', [one, two, add], do, halt]";

	let first = assemble_str(source).unwrap();
	let second = assemble_str(source).unwrap();

	assert_eq!(first.to_string(), second.to_string());
}


#[test]
fn test_errors() {
	assert_matches!(assemble_str(""), Err(Error::EmptyInput));
	assert_matches!(
		assemble_str("---\n[halt]\n---\n[halt]\n"),
		Err(Error::MultipleDocuments)
	);
	assert_matches!(assemble_str("halt"), Err(Error::NotASequence));

	assert_matches!(
		assemble_str("[frobnicate]"),
		Err(Error::UnknownInstruction(name)) if name == "frobnicate"
	);
	assert_matches!(
		assemble_str("[int]"),
		Err(Error::NeedsOperand(name)) if name == "int"
	);
	assert_matches!(
		assemble_str("[int 1 2]"),
		Err(Error::UnexpectedOperand(name)) if name == "int"
	);
	assert_matches!(
		assemble_str("[add 1]"),
		Err(Error::UnexpectedOperand(name)) if name == "add"
	);
	assert_matches!(
		assemble_str("[int wibble]"),
		Err(Error::BadLiteral(operand)) if operand == "wibble"
	);
	assert_matches!(
		assemble_str("['float x.y']"),
		Err(Error::BadFloat(operand)) if operand == "x.y"
	);
	assert_matches!(
		assemble_str("[trap NO_SUCH]"),
		Err(Error::UnknownTrap(name)) if name == "NO_SUCH"
	);
	assert_matches!(
		assemble_str("[{a: halt, b: halt}]"),
		Err(Error::BadLabel)
	);
	assert_matches!(
		assemble_str("['stack nowhere']"),
		Err(Error::UnresolvedLabel(label)) if label == "nowhere"
	);
	assert_matches!(
		assemble_str("[!frobnicate x]"),
		Err(Error::InvalidDirective(_))
	);
	assert_matches!(
		assemble_str("[!istack nowhere]"),
		Err(Error::UnresolvedLabel(label)) if label == "nowhere"
	);
	assert_matches!(
		assemble_str("[!include 'no-such-file.yaml']"),
		Err(Error::Io(_))
	);
	assert_matches!(assemble_str("[17]"), Err(Error::InvalidNode));
}

use assert_matches::assert_matches;

use crate::symbol::Interner;
use crate::syntax::{self, Source};
use super::*;


fn compile_source(input: &str, interner: &mut Interner) -> Result<Code, Error> {
	let source = Source {
		path: interner.get_or_intern("<test>"),
		contents: input.as_bytes().into(),
	};

	let body = syntax::analyze(&source, interner)
		.expect("syntax error in compiler test");

	compile_to_code(&body, interner)
}


fn flatten(input: &str) -> Vec<String> {
	let mut interner = Interner::new();

	compile_source(input, &mut interner)
		.expect("compile error")
		.flatten()
}


/// Check that `haystack` contains `needle` as a contiguous run.
fn assert_emits(haystack: &[String], needle: &[&str]) {
	let found = haystack
		.windows(needle.len())
		.any(|window| window.iter().zip(needle).all(|(a, b)| a == b));

	assert!(
		found,
		"expected {:?} in emitted code:\n{:#?}",
		needle,
		haystack
	);
}


#[test]
fn test_arithmetic() {
	let insts = flatten("let x = 1 + 2 * 3;\n");

	// Operands in source order, the multiplication applied first.
	assert_emits(&insts, &["int 1", "int 2", "int 3", "mul", "add"]);
	// The program is wrapped as a block run by the top level.
	assert_eq!(insts.first().map(String::as_str), Some("int 0"));
	assert_eq!(insts.last().map(String::as_str), Some("halt"));
}


#[test]
fn test_subtraction_and_comparison_lowering() {
	assert_emits(&flatten("let x = 5 - 2;\n"), &["int 5", "int 2", "neg", "add"]);
	assert_emits(&flatten("let x = 1 == 2;\n"), &["eq", "neg"]);
	assert_emits(&flatten("let x = 1 != 2;\n"), &["eq", "not", "neg"]);
	assert_emits(&flatten("let x = 1 < 2;\n"), &["lt", "neg"]);
	assert_emits(
		&flatten("let x = 1 <= 2;\n"),
		&["_two", "extract", "lt", "not", "neg"]
	);
	assert_emits(&flatten("let x = 1 > 2;\n"), &["_two", "extract", "lt", "neg"]);
	assert_emits(&flatten("let x = 1 >= 2;\n"), &["lt", "not", "neg"]);
}


#[test]
fn test_if_expression() {
	let insts = flatten("let x = if 1 { 10 } else { 20 };\n");

	// Result slot, both arms as child blocks storing into it, then the
	// condition and the dispatch.
	assert_emits(&insts, &["int 10", "int -4", "set"]);
	assert_emits(&insts, &["int 20", "int -4", "set"]);
	assert_emits(&insts, &["int 1", "if"]);
}


#[test]
fn test_if_without_else_emits_empty_block() {
	let mut interner = Interner::new();
	let code = compile_source("let x = if 1 { 10 };\n", &mut interner).unwrap();

	// The top level holds the program block; inside it, the if emits
	// two child blocks, the second empty.
	let program = match &code.0[1] {
		Item::Block(block) => block,
		other => panic!("expected program block, got {:?}", other),
	};

	let blocks: Vec<&Code> = program.0
		.iter()
		.filter_map(
			|item| match item {
				Item::Block(block) => Some(block),
				_ => None,
			}
		)
		.collect();

	assert_eq!(blocks.len(), 2);
	assert!(!blocks[0].0.is_empty());
	assert!(blocks[1].0.is_empty());
}


#[test]
fn test_loop_with_break() {
	let insts = flatten(
		"let i = 0;\nlet n = loop { i := i + 1; if i == 5 { break i; } };\n"
	);

	// The break stores the loop value, unwinds, and fails the loop
	// condition.
	assert_emits(&insts, &["zero", "while"]);
	// The back-edge re-enters the loop body.
	assert_emits(&insts, &["stack $1", "go"]);
}


#[test]
fn test_loop_label_wraps_first_instruction() {
	let mut interner = Interner::new();
	let code = compile_source("let x = loop { break 1; };\n", &mut interner).unwrap();

	fn find_labeled(code: &Code) -> Option<&Item> {
		for item in &code.0 {
			match item {
				Item::Labeled(..) => return Some(item),
				Item::Block(block) => {
					if let Some(found) = find_labeled(block) {
						return Some(found);
					}
				}
				Item::Inst(_) => (),
			}
		}

		None
	}

	assert_matches!(
		find_labeled(&code),
		Some(Item::Labeled(label, _)) if label == "$1"
	);
}


#[test]
fn test_continue() {
	let insts = flatten("let x = loop { continue; };\n");

	assert_emits(&insts, &["stack $1", "go"]);
}


#[test]
fn test_closure_shape() {
	let insts = flatten("let mk = fn (a) { fn (b) { a + b } };\n");

	// Two allocations: the closure stack and its captures array.
	assert_emits(&insts, &["trap NEW", "trap NEW"]);
	// The inner function captures `a` from the enclosing frame: the
	// pair is the slot address and the current stack.
	assert_emits(&insts, &["int 0", "int -2", "get", "append", "trap S0"]);
	// Every closure ends with the quoted go appended.
	assert_emits(&insts, &["quote go", "int -2", "get", "append"]);
}


#[test]
fn test_capture_read_goes_through_the_pair() {
	let insts = flatten("let mk = fn (a) { fn (b) { a + b } };\n");

	// Reading `a` inside the inner function walks the captured frame
	// reference at the captured offset.
	assert_emits(&insts, &["int 1", "iget"]);
	assert_emits(&insts, &["int 0", "iget"]);
}


#[test]
fn test_call_convention() {
	let insts = flatten("let f = fn (a, b) { a };\nf(1, 2);\n");

	// Arguments, then the function value, then the count and the call.
	assert_emits(&insts, &["int 1", "int 2"]);
	assert_emits(&insts, &["int 2", "call"]);
}


#[test]
fn test_empty_argument_list_leaves_result_slot() {
	let insts = flatten("let f = fn () { 1 };\nf();\n");

	assert_emits(&insts, &["zero"]);
	assert_emits(&insts, &["int 0", "call"]);
}


#[test]
fn test_return_path() {
	let insts = flatten("let f = fn (a) { return a; };\n");

	// pc0, pc and the count are loaded, the return value extracted
	// over them, and the return trap invoked.
	assert_emits(&insts, &["int -4", "extract", "trap RET"]);
}


#[test]
fn test_list_literal_and_append() {
	let insts = flatten("let l = [1, 2];\nl << 3;\n#l;\n");

	// Allocation, then each element appended through a reloaded list
	// reference.
	assert_emits(&insts, &["trap NEW", "int 1", "int -2", "get", "append"]);
	assert_emits(&insts, &["int 2", "int -2", "get", "append"]);
	// The push operator reuses the append shape.
	assert_emits(&insts, &["int 3", "int -2", "get", "append"]);
	// The size operator.
	assert_emits(&insts, &["trap LEN"]);
}


#[test]
fn test_index_read_and_write() {
	let insts = flatten("let l = [1];\nl[0];\nl[0] := 2;\n");

	assert_emits(&insts, &["int 0", "iget"]);
	assert_emits(&insts, &["iset"]);
}


#[test]
fn test_trap_statement() {
	let insts = flatten("trap CLEARSCREEN, 0;\n");

	// The argument, the trap, and the placeholder result.
	assert_emits(&insts, &["int 0", "trap CLEARSCREEN", "int 0"]);
}


#[test]
fn test_short_circuit_lowering() {
	let insts = flatten("let x = 1 && 2;\n");
	// The right operand runs in a child block; the false arm produces
	// zero.
	assert_emits(&insts, &["int 2", "int -4", "set"]);
	assert_emits(&insts, &["int 1", "if"]);

	let insts = flatten("let x = 1 || 2;\n");
	assert_emits(&insts, &["_one", "int -4", "set"]);
	assert_emits(&insts, &["int 2", "int -4", "set"]);
}


#[test]
fn test_assignment_keeps_value() {
	let insts = flatten("let x = 1;\nx := 2;\n");

	// The assigned value is duplicated as the statement's value.
	assert_emits(&insts, &["int 2", "_one", "get"]);
}


#[test]
fn test_shifts_go_through_traps() {
	assert_emits(&flatten("let x = 1 <<< 2;\n"), &["trap LSH"]);
	assert_emits(&flatten("let x = 1 >>> 2;\n"), &["trap RSH"]);
}


#[test]
fn test_unary_operators() {
	assert_emits(&flatten("let x = -1;\n"), &["int 1", "neg"]);
	assert_emits(&flatten("let x = ~1;\n"), &["int 1", "not"]);
	assert_emits(&flatten("let x = !1;\n"), &["int 1", "neg", "not", "neg"]);
}


#[test]
fn test_compile_errors() {
	let mut interner = Interner::new();

	assert_matches!(
		compile_source("y;\n", &mut interner),
		Err(Error::NoSuchVariable { name, .. }) if name == "y"
	);

	assert_matches!(
		compile_source("1 := 2;\n", &mut interner),
		Err(Error::InvalidLvalue { .. })
	);

	assert_matches!(
		compile_source("trap NOPE, 1;\n", &mut interner),
		Err(Error::UnknownTrap { name, .. }) if name == "NOPE"
	);

	assert_matches!(
		compile_source("trap CLEARSCREEN;\n", &mut interner),
		Err(Error::TrapArity { expected: 1, supplied: 0, .. })
	);

	assert_matches!(
		compile_source("break 1;\n", &mut interner),
		Err(Error::BreakOutsideLoop { .. })
	);

	assert_matches!(
		compile_source("continue;\n", &mut interner),
		Err(Error::ContinueOutsideLoop { .. })
	);
}


#[test]
fn test_emitted_yaml_assembles() {
	let mut interner = Interner::new();

	let source = Source {
		path: interner.get_or_intern("<test>"),
		contents: b"let x = 1 + 2 * 3;\n".as_slice().into(),
	};

	let body = syntax::analyze(&source, &mut interner).unwrap();
	let yaml = compile(&body, &interner).unwrap();

	let state = crate::sam::assembler::assemble(
		yaml.as_bytes(),
		std::path::Path::new(".")
	);

	assert!(state.is_ok(), "emitted YAML failed to assemble: {:?}", state.err());
}

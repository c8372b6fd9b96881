//! The SAL compiler: a single-pass lowering from the syntax tree to SAM
//! mnemonics. No intermediate representation; the abstract stack pointer
//! is tracked through every synthesized instruction, and a mismatch with
//! the catalogue's deltas is a compiler bug.

mod code;
mod error;
mod frame;
#[cfg(test)]
mod tests;

use crate::sam::inst::{self, Trap};
use crate::symbol::{Interner, Symbol};
use crate::syntax::{ast, SourcePos};
pub use code::{Code, Item};
pub use error::Error;
use frame::{Frame, FrameKind, Local};


/// Compile a program body into the assembler's tree format, serialised
/// as YAML.
pub fn compile(body: &ast::Body, interner: &Interner) -> Result<String, Error> {
	let code = compile_to_code(body, interner)?;

	serde_yaml::to_string(&code.to_value()).map_err(Error::Emit)
}


/// Compile a program body into the emitted tree.
pub fn compile_to_code(body: &ast::Body, interner: &Interner) -> Result<Code, Error> {
	let mut compiler = Compiler::new(interner);

	// Reserve the value of the top level, then run the program as a
	// block.
	compiler.emit(&["int 0"]);
	let block = compiler.compile_block(body)?;
	compiler.emit_block(block);
	compiler.emit(&["do", "halt"]);

	let frame = compiler.frames
		.pop()
		.expect("top-level frame vanished");

	Ok(frame.asm)
}


/// How a resolved variable is reached.
#[derive(Debug, Clone, Copy)]
enum Access {
	/// A local slot, at an absolute address within the frame's stack.
	Local(i64),
	/// An entry in the enclosing function's captures array.
	Capture(usize),
}


#[derive(Debug)]
struct Compiler<'a> {
	frames: Vec<Frame>,
	interner: &'a Interner,
	next_label: usize,
}


impl<'a> Compiler<'a> {
	fn new(interner: &'a Interner) -> Self {
		let top = Frame {
			kind: FrameKind::TopLevel,
			label: None,
			locals: Vec::new(),
			captures: Vec::new(),
			asm: Code::default(),
			base_sp: 0,
			sp: 0,
			nargs: 0,
			loop_frame: None,
		};

		Self {
			frames: vec![top],
			interner,
			next_label: 0,
		}
	}


	fn frame(&mut self) -> &mut Frame {
		self.frames
			.last_mut()
			.expect("no active frame")
	}


	fn frame_ref(&self) -> &Frame {
		self.frames
			.last()
			.expect("no active frame")
	}


	fn new_label(&mut self) -> String {
		self.next_label += 1;
		format!("${}", self.next_label)
	}


	// Emission ///////////////////////////////////////////////////////////

	/// Emit instruction lines, adjusting the abstract stack pointer by
	/// the catalogue's deltas. Traps go through emit_trap, which knows
	/// their stack effects.
	fn emit(&mut self, insts: &[&str]) {
		for inst in insts {
			let name = inst
				.split_whitespace()
				.next()
				.expect("empty instruction emitted");
			assert!(name != "trap", "traps must be emitted with emit_trap");

			let entry = inst::lookup(name)
				.unwrap_or_else(|| panic!("invalid instruction {}", name));

			let frame = self.frame();
			frame.sp += entry.delta;
			frame.asm.push(Item::Inst((*inst).to_owned()));
		}
	}


	fn emit_trap(&mut self, trap: &Trap) {
		let frame = self.frame();
		frame.sp += trap.effect.output as i64 - trap.effect.input as i64;
		frame.asm.push(Item::Inst(format!("trap {}", trap.name)));
	}


	/// Emit a nested code block, which assembles to a stack pushed onto
	/// the current one.
	fn emit_block(&mut self, code: Code) {
		let frame = self.frame();
		frame.sp += 1;
		frame.asm.push(Item::Block(code));
	}


	fn adjust_sp(&mut self, delta: i64) {
		self.frame().sp += delta;
	}


	// Frames /////////////////////////////////////////////////////////////

	/// Open a child block frame. The block runs on the enclosing stack,
	/// above the pc pair pushed by `do`.
	fn push_block_frame(&mut self, is_loop: bool) {
		let parent = self.frame_ref();
		let base_sp = parent.sp + 2;
		let nargs = parent.nargs;
		let parent_loop = parent.loop_frame;
		let index = self.frames.len();

		let label = if is_loop { Some(self.new_label()) } else { None };
		let loop_frame = if is_loop { Some(index) } else { parent_loop };

		self.frames.push(Frame {
			kind: FrameKind::Block,
			label,
			locals: Vec::new(),
			captures: Vec::new(),
			asm: Code::default(),
			base_sp,
			sp: base_sp,
			nargs,
			loop_frame,
		});
	}


	fn pop_frame(&mut self) -> Frame {
		self.frames
			.pop()
			.expect("no frame to pop")
	}


	/// Compile a body as a child block. Unless the body ends in a
	/// terminator, the teardown stores its value in the reserved result
	/// slot and pops the block's leftovers.
	fn compile_block(&mut self, body: &ast::Body) -> Result<Code, Error> {
		self.push_block_frame(false);
		self.compile_body(body)?;

		if body.terminator.is_none() {
			self.tear_down_block();
		}

		Ok(self.pop_frame().asm)
	}


	/// Compile a single-expression child block, used for short-circuit
	/// lowering.
	fn compile_expr_block<F>(&mut self, build: F) -> Result<Code, Error>
	where
		F: FnOnce(&mut Self) -> Result<(), Error>,
	{
		self.push_block_frame(false);
		build(self)?;
		self.tear_down_block();

		Ok(self.pop_frame().asm)
	}


	/// Compile a loop body. The block pops its leftovers and re-enters
	/// itself through the labelled back-edge; `break` is the only exit.
	fn compile_loop_block(&mut self, body: &ast::Body) -> Result<Code, Error> {
		self.push_block_frame(true);
		self.compile_body(body)?;

		let (extra, label) = {
			let frame = self.frame_ref();
			let label = frame.label
				.clone()
				.expect("loop frame has a label");
			(frame.sp - frame.base_sp, label)
		};

		for _ in 0 .. extra {
			self.emit(&["pop"]);
		}

		self.emit(&[&format!("stack {}", label), "go"]);

		// The back-edge needs a target: wrap the first emitted item in
		// the label mapping.
		let frame = self.frame();
		let first = frame.asm.0.remove(0);
		frame.asm.0.insert(0, Item::Labeled(label, first.into()));

		Ok(self.pop_frame().asm)
	}


	/// Store the block's value in the reserved result slot, below the
	/// pc pair and the slot itself, then pop the leftovers.
	fn tear_down_block(&mut self) {
		if self.frame_ref().sp == self.frame_ref().base_sp {
			// The block produced no value.
			self.emit(&["zero"]);
		}

		let frame = self.frame_ref();
		let offset = frame.base_sp - frame.sp - 3;
		self.emit(&[&format!("int {}", offset), "set"]);

		let extra = self.frame_ref().sp - self.frame_ref().base_sp;
		for _ in 0 .. extra {
			self.emit(&["pop"]);
		}
	}


	/// The return path: load the saved pc0, pc and argument count,
	/// extract the return value over them, and let the return trap
	/// unwind the frame.
	fn tear_down_frame(&mut self) {
		if self.frame_ref().sp == self.frame_ref().base_sp {
			// The function produced no value.
			self.emit(&["zero"]);
		}

		let nargs = self.frame_ref().nargs as i64;

		let sp = self.frame_ref().sp;
		self.emit(&[&format!("int {}", (nargs + 1) - sp), "get"]); // pc0
		let sp = self.frame_ref().sp;
		self.emit(&[&format!("int {}", (nargs + 2) - sp), "get"]); // pc
		let sp = self.frame_ref().sp;
		self.emit(&[&format!("int {}", nargs - sp), "get"]); // argument count

		// The return value sits under the three loaded words.
		self.emit(&["int -4", "extract"]);

		self.emit_trap(ret_trap());
	}


	// Variables //////////////////////////////////////////////////////////

	/// Resolve a name lexically. Blocks delegate to the enclosing frame;
	/// functions record a capture when the name resolves upward.
	fn resolve(&mut self, frame: usize, name: Symbol) -> Option<Access> {
		let local = self.frames[frame]
			.locals
			.iter()
			.rev()
			.find(|local| local.name == name);

		if let Some(local) = local {
			return Some(Access::Local(local.addr));
		}

		match self.frames[frame].kind {
			FrameKind::TopLevel => None,

			FrameKind::Block => self.resolve(frame - 1, name),

			FrameKind::Function => {
				let position = self.frames[frame]
					.captures
					.iter()
					.position(|capture| *capture == name);

				if let Some(index) = position {
					return Some(Access::Capture(index));
				}

				// Ask the lexical parent. When it resolves the name,
				// the closure construction site appends the slot pair
				// to this function's captures array.
				self.resolve(frame - 1, name)?;

				let captures = &mut self.frames[frame].captures;
				captures.push(name);
				Some(Access::Capture(captures.len() - 1))
			}
		}
	}


	fn resolve_here(&mut self, name: Symbol, pos: SourcePos) -> Result<Access, Error> {
		let top = self.frames.len() - 1;

		self.resolve(top, name).ok_or_else(
			|| {
				let name = self.interner
					.resolve(name)
					.unwrap_or("<unknown>");
				Error::no_such_variable(name, pos)
			}
		)
	}


	/// Push the captured slot's stack reference and offset, by reading
	/// both entries of the capture pair from the captures array.
	fn emit_capture_target(&mut self, index: usize) {
		let captures_addr = self.frame_ref().captures_addr();

		// The frame reference entry.
		let sp = self.frame_ref().sp;
		self.emit(&[&format!("int {}", captures_addr - sp), "get"]);
		self.emit(&[&format!("int {}", 2 * index + 1), "iget"]);

		// The offset entry.
		let sp = self.frame_ref().sp;
		self.emit(&[&format!("int {}", captures_addr - sp), "get"]);
		self.emit(&[&format!("int {}", 2 * index), "iget"]);
	}


	fn compile_var_read(&mut self, name: Symbol, pos: SourcePos) -> Result<(), Error> {
		match self.resolve_here(name, pos)? {
			Access::Local(addr) => {
				let sp = self.frame_ref().sp;
				self.emit(&[&format!("int {}", addr - sp), "get"]);
			}

			Access::Capture(index) => {
				self.emit_capture_target(index);
				self.emit(&["iget"]);
			}
		}

		Ok(())
	}


	/// Store the value on top of the stack into the named variable.
	fn compile_var_write(&mut self, name: Symbol, pos: SourcePos) -> Result<(), Error> {
		match self.resolve_here(name, pos)? {
			Access::Local(addr) => {
				let sp = self.frame_ref().sp;
				self.emit(&[&format!("int {}", addr - sp), "set"]);
			}

			Access::Capture(index) => {
				self.emit_capture_target(index);
				self.emit(&["iset"]);
			}
		}

		Ok(())
	}


	// Expressions ////////////////////////////////////////////////////////

	/// Compile an expression. Every expression nets exactly one value.
	fn compile_expr(&mut self, expr: &ast::Expr) -> Result<(), Error> {
		let before = self.frame_ref().sp;

		self.compile_expr_inner(expr)?;

		debug_assert_eq!(
			self.frame_ref().sp,
			before + 1,
			"expression must net exactly one value"
		);

		Ok(())
	}


	fn compile_expr_inner(&mut self, expr: &ast::Expr) -> Result<(), Error> {
		match expr {
			ast::Expr::Literal { literal, .. } => {
				match literal {
					ast::Literal::Int(value) => self.emit(&[&format!("int {}", value)]),
					ast::Literal::Float(value) => self.emit(&[&format!("float {}", value)]),
				}

				Ok(())
			}

			ast::Expr::Identifier { identifier, pos } => {
				self.compile_var_read(*identifier, *pos)
			}

			ast::Expr::List { items, .. } => {
				self.emit_trap(new_trap());

				for item in items.iter() {
					self.compile_expr(item)?;
					// Reload the list from under the element.
					self.emit(&["int -2", "get", "append"]);
				}

				Ok(())
			}

			ast::Expr::Block { body, .. } => {
				self.emit(&["int 0"]); // value of the block
				let block = self.compile_block(body)?;
				self.emit_block(block);
				self.emit(&["do"]);
				Ok(())
			}

			ast::Expr::Function { params, body, .. } => {
				self.compile_function(params, body)
			}

			ast::Expr::If { condition, then, otherwise, .. } => {
				self.emit(&["int 0"]); // value of the conditional

				let then_block = self.compile_block(then)?;
				let else_block = match otherwise {
					Some(body) => self.compile_block(body)?,
					None => Code::default(),
				};

				self.emit_block(then_block);
				self.emit_block(else_block);
				self.compile_expr(condition)?;
				self.emit(&["if"]);
				Ok(())
			}

			ast::Expr::Loop { body, .. } => {
				self.emit(&["int 0"]); // value of the loop
				let block = self.compile_loop_block(body)?;
				self.emit_block(block);
				self.emit(&["do"]);
				Ok(())
			}

			ast::Expr::UnaryOp { op, operand, .. } => {
				match op {
					ast::UnaryOp::Not => {
						self.compile_expr(operand)?;
						self.emit(&["neg", "not", "neg"]);
					}

					ast::UnaryOp::Minus => {
						self.compile_expr(operand)?;
						self.emit(&["neg"]);
					}

					ast::UnaryOp::BitNot => {
						self.compile_expr(operand)?;
						self.emit(&["not"]);
					}

					ast::UnaryOp::Len => {
						self.compile_expr(operand)?;
						self.emit_trap(len_trap());
					}

					// Indirect push: push a fresh zero onto the
					// referenced stack, yielding the reference.
					ast::UnaryOp::Ipush => {
						self.compile_expr(operand)?;
						self.emit(&["zero", "int -2", "get", "ipush"]);
					}
				}

				Ok(())
			}

			ast::Expr::BinaryOp { left, op, right, .. } => {
				self.compile_binary(left, *op, right)
			}

			ast::Expr::Call { function, applications, .. } => {
				self.compile_call(function, applications)
			}

			ast::Expr::Index { object, index, .. } => {
				self.compile_expr(object)?;
				self.compile_expr(index)?;
				self.emit(&["iget"]);
				Ok(())
			}
		}
	}


	fn compile_binary(
		&mut self,
		left: &ast::Expr,
		op: ast::BinaryOp,
		right: &ast::Expr,
	) -> Result<(), Error> {
		// Short-circuit operators reuse the conditional machinery: the
		// right operand only runs when the left selects it.
		match op {
			ast::BinaryOp::And => {
				self.emit(&["int 0"]);
				let then_block = self.compile_expr_block(|this| this.compile_expr(right))?;
				let else_block = self.compile_expr_block(
					|this| {
						this.emit(&["zero"]); // false
						Ok(())
					}
				)?;
				self.emit_block(then_block);
				self.emit_block(else_block);
				self.compile_expr(left)?;
				self.emit(&["if"]);
				return Ok(());
			}

			ast::BinaryOp::Or => {
				self.emit(&["int 0"]);
				let then_block = self.compile_expr_block(
					|this| {
						this.emit(&["_one"]); // true
						Ok(())
					}
				)?;
				let else_block = self.compile_expr_block(|this| this.compile_expr(right))?;
				self.emit_block(then_block);
				self.emit_block(else_block);
				self.compile_expr(left)?;
				self.emit(&["if"]);
				return Ok(());
			}

			_ => (),
		}

		self.compile_expr(left)?;
		self.compile_expr(right)?;

		match op {
			ast::BinaryOp::And | ast::BinaryOp::Or => unreachable!("handled above"),

			// The list ends up under the element; reload it for append.
			ast::BinaryOp::Append => self.emit(&["int -2", "get", "append"]),
			ast::BinaryOp::Prepend => self.emit_trap(prepend_trap()),

			ast::BinaryOp::BitAnd => self.emit(&["and"]),
			ast::BinaryOp::BitXor => self.emit(&["xor"]),
			ast::BinaryOp::BitOr => self.emit(&["or"]),
			ast::BinaryOp::ShiftLeft => self.emit_trap(lsh_trap()),
			ast::BinaryOp::ShiftRight => self.emit_trap(rsh_trap()),

			// The machine's comparisons produce 1 for true, but the
			// language expects -1.
			ast::BinaryOp::Equals => self.emit(&["eq", "neg"]),
			ast::BinaryOp::NotEquals => self.emit(&["eq", "not", "neg"]),
			ast::BinaryOp::Lower => self.emit(&["lt", "neg"]),
			ast::BinaryOp::LowerEquals => self.emit(&["_two", "extract", "lt", "not", "neg"]),
			ast::BinaryOp::Greater => self.emit(&["_two", "extract", "lt", "neg"]),
			ast::BinaryOp::GreaterEquals => self.emit(&["lt", "not", "neg"]),

			ast::BinaryOp::Plus => self.emit(&["add"]),
			ast::BinaryOp::Minus => self.emit(&["neg", "add"]),
			ast::BinaryOp::Times => self.emit(&["mul"]),
			ast::BinaryOp::Div => self.emit(&["div"]),
			ast::BinaryOp::Mod => self.emit(&["rem"]),
			ast::BinaryOp::Pow => self.emit(&["pow"]),
		}

		Ok(())
	}


	/// Compile a call chain. Argument lists are evaluated in reverse
	/// order, so the innermost application finds its arguments on top;
	/// each application pushes its argument count and nets one value.
	fn compile_call(
		&mut self,
		function: &ast::Expr,
		applications: &[Box<[ast::Expr]>],
	) -> Result<(), Error> {
		for application in applications.iter().rev() {
			for arg in application.iter() {
				self.compile_expr(arg)?;
			}

			// An empty argument list still leaves a slot for the
			// return value.
			if application.is_empty() {
				self.emit(&["zero"]);
			}
		}

		self.compile_expr(function)?;

		for application in applications.iter() {
			let nargs = application.len();
			let effective = nargs.max(1) as i64;

			self.emit(&[&format!("int {}", nargs), "call"]);
			self.adjust_sp(-(effective - 1));
		}

		Ok(())
	}


	/// Compile a function literal. The value is a closure: a
	/// three-element stack of captures array, code array, and a quoted
	/// go for the machine to dispatch through.
	fn compile_function(&mut self, params: &[Symbol], body: &ast::Body) -> Result<(), Error> {
		let nargs = params.len();
		// The frame holds args, count, pc0, pc and the captures array
		// below the locals.
		let base_sp = nargs as i64 + 4;

		let locals = params
			.iter()
			.enumerate()
			.map(|(index, param)| Local { name: *param, addr: index as i64 })
			.collect();

		self.frames.push(Frame {
			kind: FrameKind::Function,
			label: None,
			locals,
			captures: Vec::new(),
			asm: Code::default(),
			base_sp,
			sp: base_sp,
			nargs,
			loop_frame: None,
		});

		self.compile_body(body)?;

		if body.terminator.is_none() {
			self.tear_down_frame();
		}

		let frame = self.pop_frame();
		let code = frame.asm;
		let captures = frame.captures;

		// Build the closure.
		self.emit_trap(new_trap()); // the closure stack
		self.emit_trap(new_trap()); // the captures array

		for name in captures {
			self.compile_capture_pair(name)?;
		}

		// Append the captures array into the closure.
		self.emit(&["int -2", "get", "append"]);

		// Append the code array.
		self.emit_block(code);
		self.emit(&["int -2", "get", "append"]);

		// Append the quoted go.
		self.emit(&["quote go"]);
		self.emit(&["int -2", "get", "append"]);

		Ok(())
	}


	/// Append one capture pair (offset, frame reference) to the
	/// captures array under construction on top of the stack.
	fn compile_capture_pair(&mut self, name: Symbol) -> Result<(), Error> {
		let top = self.frames.len() - 1;
		let access = self.resolve(top, name)
			.expect("capture was resolved while compiling the body");

		match access {
			// The variable lives in this very frame: the pair is its
			// absolute slot address and the current stack.
			Access::Local(addr) => {
				self.emit(&[&format!("int {}", addr)]);
				self.emit(&["int -2", "get", "append"]);

				self.emit_trap(s0_trap());
				self.emit(&["int -2", "get", "append"]);
			}

			// The variable is itself captured here: propagate both
			// entries of our own pair.
			Access::Capture(index) => {
				let captures_addr = self.frame_ref().captures_addr();

				let sp = self.frame_ref().sp;
				self.emit(&[&format!("int {}", captures_addr - sp), "get"]);
				self.emit(&[&format!("int {}", 2 * index), "iget"]);
				self.emit(&["int -2", "get", "append"]);

				let sp = self.frame_ref().sp;
				self.emit(&[&format!("int {}", captures_addr - sp), "get"]);
				self.emit(&[&format!("int {}", 2 * index + 1), "iget"]);
				self.emit(&["int -2", "get", "append"]);
			}
		}

		Ok(())
	}


	// Statements /////////////////////////////////////////////////////////

	fn compile_body(&mut self, body: &ast::Body) -> Result<(), Error> {
		for declaration in body.declarations.iter() {
			// Record the slot first, so the initialiser can refer to
			// itself.
			let addr = self.frame_ref().sp;
			self.frame().locals.push(Local { name: declaration.identifier, addr });
			self.compile_expr(&declaration.value)?;
		}

		let count = body.statements.len();

		for (index, statement) in body.statements.iter().enumerate() {
			self.compile_statement(statement)?;

			// Every statement nets one value; all but a trailing one
			// (which becomes the block's value) are dropped.
			if index < count - 1 || body.terminator.is_some() {
				self.emit(&["pop"]);
			}
		}

		if let Some(terminator) = &body.terminator {
			self.compile_terminator(terminator)?;
		}

		Ok(())
	}


	fn compile_statement(&mut self, statement: &ast::Statement) -> Result<(), Error> {
		match statement {
			ast::Statement::Expr(expr) => self.compile_expr(expr),

			ast::Statement::Assign { left, right, pos } => {
				// The target is restricted to a variable or an indexed
				// access.
				match left {
					ast::Expr::Identifier { identifier, pos } => {
						self.compile_expr(right)?;
						// Keep a copy as the statement's value.
						self.emit(&["_one", "get"]);
						self.compile_var_write(*identifier, *pos)
					}

					ast::Expr::Index { object, index, .. } => {
						self.compile_expr(right)?;
						self.emit(&["_one", "get"]);
						self.compile_expr(object)?;
						self.compile_expr(index)?;
						self.emit(&["iset"]);
						Ok(())
					}

					_ => Err(Error::invalid_lvalue(*pos)),
				}
			}

			ast::Statement::Trap { name, args, pos } => {
				let name = self.interner
					.resolve(*name)
					.unwrap_or("<unknown>")
					.to_owned();

				let trap = inst::lookup_trap(&name)
					.ok_or_else(|| Error::unknown_trap(&name, *pos))?;

				if trap.effect.input as usize != args.len() {
					return Err(
						Error::trap_arity(&name, trap.effect.input, args.len(), *pos)
					);
				}

				if trap.effect.output > 1 {
					return Err(Error::unsupported_trap_arity(&name, *pos));
				}

				for arg in args.iter() {
					self.compile_expr(arg)?;
				}

				self.emit_trap(trap);

				// Statements leave one value; traps with no results
				// get a placeholder.
				if trap.effect.output == 0 {
					self.emit(&["int 0"]);
				}

				Ok(())
			}
		}
	}


	fn compile_terminator(&mut self, terminator: &ast::Terminator) -> Result<(), Error> {
		match terminator {
			ast::Terminator::Return { expr, .. } => {
				self.compile_expr(expr)?;
				self.tear_down_frame();
				Ok(())
			}

			ast::Terminator::Break { expr, pos } => {
				let loop_frame = self.frame_ref()
					.loop_frame
					.ok_or_else(|| Error::break_outside_loop(*pos))?;

				// The loop's result.
				match expr {
					Some(expr) => self.compile_expr(expr)?,
					None => self.emit(&["zero"]),
				}

				let loop_base = self.frames[loop_frame].base_sp;

				// Store it in the loop's reserved slot.
				let sp = self.frame_ref().sp;
				self.emit(&[&format!("int {}", (loop_base - 3) - sp), "set"]);

				// Pop items down to the loop start, then fail the loop
				// condition.
				let extra = self.frame_ref().sp - loop_base;
				for _ in 0 .. extra {
					self.emit(&["pop"]);
				}

				self.emit(&["zero", "while"]);
				Ok(())
			}

			ast::Terminator::Continue { pos } => {
				let loop_frame = self.frame_ref()
					.loop_frame
					.ok_or_else(|| Error::continue_outside_loop(*pos))?;

				let loop_base = self.frames[loop_frame].base_sp;
				let label = self.frames[loop_frame]
					.label
					.clone()
					.expect("loop frame has a label");

				// Pop items down to the loop start, then re-enter.
				let extra = self.frame_ref().sp - loop_base;
				for _ in 0 .. extra {
					self.emit(&["pop"]);
				}

				self.emit(&[&format!("stack {}", label), "go"]);
				Ok(())
			}
		}
	}
}


// Catalogue traps the compiler emits directly.

fn catalogue_trap(name: &str) -> &'static Trap {
	inst::lookup_trap(name)
		.unwrap_or_else(|| panic!("trap {} missing from the catalogue", name))
}


fn ret_trap() -> &'static Trap {
	catalogue_trap("RET")
}


fn s0_trap() -> &'static Trap {
	catalogue_trap("S0")
}


fn new_trap() -> &'static Trap {
	catalogue_trap("NEW")
}


fn prepend_trap() -> &'static Trap {
	catalogue_trap("PREPEND")
}


fn len_trap() -> &'static Trap {
	catalogue_trap("LEN")
}


fn lsh_trap() -> &'static Trap {
	catalogue_trap("LSH")
}


fn rsh_trap() -> &'static Trap {
	catalogue_trap("RSH")
}

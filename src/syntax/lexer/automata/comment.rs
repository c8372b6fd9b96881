use super::{Cursor, Root, State, Transition};


/// The state for comments, which run to the end of the line. The newline
/// itself is left for the root state, as it may end a statement.
#[derive(Debug)]
pub(super) struct Comment;


impl Comment {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			Some(b'\n') | None => Transition::hold(Root),
			Some(_) => Transition::advance(self),
		}
	}
}


impl From<Comment> for State {
	fn from(state: Comment) -> State {
		State::Comment(state)
	}
}

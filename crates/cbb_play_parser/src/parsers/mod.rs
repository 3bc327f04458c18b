pub mod caps;
pub mod notation;
pub mod play_row;
pub mod semicolon;

pub use notation::*;
pub use play_row::*;

use crate::schema::play::Action;

/// Who a cell attributes its event to, before roster lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
	/// A player as written in the cell.
	Named(String),
	Team,
	Floor,
}

impl Actor {
	/// "Team"/"TEAM" and blank tokens are the team itself.
	#[must_use]
	pub fn from_token(token: &str) -> Self {
		match token.trim() {
			"" | "Team" | "TEAM" | "team" => Self::Team,
			name => Self::Named(name.to_string()),
		}
	}
}

/// The event one text cell describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCell {
	pub actor: Actor,
	pub action: Action,
}

impl ParsedCell {
	pub const fn new(actor: Actor, action: Action) -> Self {
		Self { actor, action }
	}
}

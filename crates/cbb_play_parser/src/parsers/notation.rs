use crate::error::NotationError;
use crate::identity::title_case;
use crate::parsers::Actor;
use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_LOWER_OR_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]").expect("pattern is valid"));

/// Texts whose first lowercase letter or digit sits further in than this are
/// written in the all-caps dialect.
const CAPS_NAME_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
	/// "HOWELL,CHRIS made Layup"
	Caps,
	/// "Chris Howell, 2pt layup made"
	Semicolon,
}

/// A cell split into its dialect, who did it, and the text describing what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
	pub dialect: Dialect,
	pub actor: Actor,
	pub remainder: String,
}

impl Classified {
	fn new(dialect: Dialect, actor: Actor, remainder: impl Into<String>) -> Self {
		Self {
			dialect,
			actor,
			remainder: remainder.into(),
		}
	}
}

fn collapse_spaces(text: &str) -> String {
	let mut collapsed = text.to_string();
	while collapsed.contains("  ") {
		collapsed = collapsed.replace("  ", " ");
	}
	collapsed
}

fn starts_with_code(text: &str) -> bool {
	let mut chars = text.chars();
	matches!((chars.next(), chars.next()), (Some(a), Some(b)) if a.is_ascii_digit() && b.is_ascii_digit())
}

/// Caps names are written "LAST,FIRST"; anything before `name_end` is the name.
fn caps_player(text: &str, name_end: usize) -> String {
	let name = &text[..name_end];
	match name.find(',') {
		Some(comma) => title_case(&format!("{} {}", name[comma + 1..].trim(), name[..comma].trim())),
		None => title_case(name.trim()),
	}
}

/// Works out which dialect `text` is written in and splits off its subject.
pub fn classify(text: &str) -> Result<Classified, NotationError> {
	let play = text.replace("UNKNOWN", "");
	if play.trim().is_empty() {
		return Err(NotationError::Empty);
	}

	let first_lower = FIRST_LOWER_OR_DIGIT.find(&play).map_or(play.len(), |m| m.start());

	if first_lower > CAPS_NAME_WIDTH {
		let name_end = play[..first_lower].rfind(' ').map_or(0, |space| space + 1);
		let actor = Actor::from_token(&caps_player(&play, name_end));
		return Ok(Classified::new(Dialect::Caps, actor, play[name_end..].to_lowercase()));
	}

	match play.as_str() {
		s if s.starts_with("TEAM") || s.starts_with("null") || s.starts_with("team") => {
			let play = collapse_spaces(s);
			let name_end = play.find("Team").map_or(5, |index| index + 5);
			let remainder = play.get(name_end..).unwrap_or_default().to_lowercase();
			Ok(Classified::new(Dialect::Caps, Actor::Team, remainder))
		}
		s if s.starts_with("TM ") || starts_with_code(s) => {
			let play = collapse_spaces(s);
			let remainder = play.get(3..).unwrap_or_default().to_lowercase();
			Ok(Classified::new(Dialect::Caps, Actor::Team, remainder))
		}
		s if s.contains(", ") => {
			let comma = s.find(", ").unwrap_or_default();
			Ok(Classified::new(Dialect::Semicolon, Actor::from_token(&s[..comma]), &s[comma..]))
		}
		s if !s.contains(',') => Ok(Classified::new(Dialect::Semicolon, Actor::Team, s.trim())),
		s => Err(NotationError::unrecognized_style(s)),
	}
}

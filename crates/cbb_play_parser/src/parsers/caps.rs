use crate::error::PlayParseError;
use crate::parsers::semicolon::parse_semicolon;
use crate::parsers::{Actor, ParsedCell};
use crate::schema::play::{Action, FoulKind, FreeThrow, Rebound, Shot, ShotLength, ShotTechnique, Timeout, TimeoutCaller, TimeoutLength, TurnoverKind};

fn parse_rebound(rest: &str) -> Result<Rebound, PlayParseError> {
	match rest {
		s if s.contains("offensive") => Ok(Rebound { offensive: Some(true), dead_ball: false }),
		s if s.contains("defensive") => Ok(Rebound { offensive: Some(false), dead_ball: false }),
		s if s.contains("deadball") => Ok(Rebound { offensive: None, dead_ball: true }),
		s => Err(PlayParseError::unknown_subtype("rebound", s)),
	}
}

fn parse_timeout(rest: &str) -> Result<(Actor, Timeout), PlayParseError> {
	let team = |length| Ok((Actor::Team, Timeout { caller: TimeoutCaller::Team, length }));

	match rest.trim() {
		s if s.contains("media") => Ok((
			Actor::Floor,
			Timeout {
				caller: TimeoutCaller::Floor,
				length: TimeoutLength::Media,
			},
		)),
		s if s.contains("20") => team(TimeoutLength::Short),
		s if s.contains("30") => team(TimeoutLength::Full),
		s if s.contains("short") => team(TimeoutLength::Short),
		s if s.contains("full") => team(TimeoutLength::Full),
		"timeout" | "team timeout" => team(TimeoutLength::Unknown),
		s => Err(PlayParseError::unknown_subtype("timeout", s)),
	}
}

fn parse_shot(rest: &str) -> Result<Shot, PlayParseError> {
	let length = match rest {
		s if s.contains(" three point") => ShotLength::Three,
		s if s.contains(" jumper") => ShotLength::LongTwo,
		_ => ShotLength::ShortTwo,
	};

	let (technique, second_chance) = match rest {
		s if s.contains(" layup") => (ShotTechnique::Layup, None),
		s if s.contains(" jumper") => (ShotTechnique::JumpShot, None),
		s if s.contains(" tip in") => (ShotTechnique::Layup, Some(true)),
		s if s.contains(" dunk") => (ShotTechnique::Dunk, None),
		s => return Err(PlayParseError::unknown_subtype("shot", s)),
	};

	Ok(Shot {
		made: rest.starts_with("made ") || rest.contains(" made "),
		length,
		technique,
		second_chance,
		fast_break: None,
		blocked: None,
	})
}

/// Parses the lower-cased remainder of an all-caps cell. Text this dialect does
/// not know is handed to the semicolon cascade before giving up.
pub fn parse_caps(actor: Actor, rest: &str) -> Result<Option<ParsedCell>, PlayParseError> {
	let action = match rest {
		s if s.contains("blocked shot") => Action::Block,
		s if s.contains(" rebound") => Action::Rebound(parse_rebound(s)?),
		s if s.contains("turnover") => Action::Turnover(TurnoverKind::Unknown),
		s if s.contains("steal") => Action::Steal,
		s if s.contains("timeout") => {
			let (caller, timeout) = parse_timeout(s)?;
			return Ok(Some(ParsedCell::new(caller, Action::Timeout(timeout))));
		}
		s if s.contains("assist") => Action::Assist,
		s if s.contains("commits foul") => Action::FoulCommitted(FoulKind::Unknown),
		s if s.contains(" game") => Action::Substitution { entering: s.contains("enters") },
		s if s.contains("free throw") => Action::FreeThrow(FreeThrow {
			made: s.contains("made"),
			attempt: None,
			of: None,
		}),
		s if s.contains("missed ") || s.contains("made ") => Action::Shot(parse_shot(s)?),
		s => return parse_semicolon(actor, s),
	};

	Ok(Some(ParsedCell::new(actor, action)))
}

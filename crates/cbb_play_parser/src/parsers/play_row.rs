use crate::error::PlayParseError;
use crate::parsers::caps::parse_caps;
use crate::parsers::notation::{classify, Dialect};
use crate::parsers::semicolon::parse_semicolon;
use crate::parsers::{Actor, ParsedCell};
use crate::schema::game_clock::{ClockTime, GameClock};
use crate::schema::play::{Action, Score};
use crate::schema::teams::Side;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One play-by-play table row as scraped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlayRow {
	pub period: u8,
	pub clock: String,
	pub away: String,
	pub score: String,
	pub home: String,
}

impl RawPlayRow {
	pub fn new(period: u8, clock: &str, away: &str, score: &str, home: &str) -> Self {
		Self {
			period,
			clock: clock.to_string(),
			away: away.to_string(),
			score: score.to_string(),
			home: home.to_string(),
		}
	}
}

/// A row reduced to its event, before player lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
	pub period: u8,
	pub time_remaining: ClockTime,
	pub side: Side,
	pub actor: Actor,
	pub action: Action,
	/// `None` when the row did not carry a readable score.
	pub score: Option<Score>,
}

/// Parses an "away-home" score cell.
#[must_use]
pub fn parse_score(cell: &str) -> Option<Score> {
	let (away, home) = cell.trim().split_once('-')?;
	Some(Score::new(away.trim().parse().ok()?, home.trim().parse().ok()?))
}

/// Parses one event cell in whichever dialect it is written.
pub fn parse_cell(text: &str) -> Result<Option<ParsedCell>, PlayParseError> {
	let classified = classify(text)?;
	match classified.dialect {
		Dialect::Caps => parse_caps(classified.actor, &classified.remainder),
		Dialect::Semicolon => parse_semicolon(classified.actor, &classified.remainder),
	}
}

/// Parses a play-by-play row.
///
/// Header rows, rows with no event cell and boundary markers are `Ok(None)`.
/// The populated team cell decides the side, away first. When that cell cannot
/// be parsed the other team's cell is tried before the row is given up.
pub fn parse_play_row(row: &RawPlayRow) -> Result<Option<ParsedRow>, PlayParseError> {
	if row.score.trim() == "Score" {
		return Ok(None);
	}

	let (first, fallback) = match (row.away.trim(), row.home.trim()) {
		("", "") => return Ok(None),
		("", _) => ((Side::Home, row.home.as_str()), None),
		(_, "") => ((Side::Away, row.away.as_str()), None),
		_ => ((Side::Away, row.away.as_str()), Some((Side::Home, row.home.as_str()))),
	};

	let (side, parsed) = match (parse_cell(first.1), fallback) {
		(Ok(parsed), _) => (first.0, parsed),
		(Err(error), Some((side, cell))) => (side, parse_cell(cell).map_err(|_| error)?),
		(Err(error), None) => return Err(error),
	};
	let Some(parsed) = parsed else {
		return Ok(None);
	};
	let time_remaining = GameClock::from_str(&row.clock)?.time_remaining();

	Ok(Some(ParsedRow {
		period: row.period,
		time_remaining,
		side,
		actor: parsed.actor,
		action: parsed.action,
		score: parse_score(&row.score),
	}))
}

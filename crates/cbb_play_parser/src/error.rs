use crate::schema::game_clock::ClockTime;
use crate::schema::roster::PlayerIdentity;
use crate::schema::teams::Side;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
	#[error("Empty play text")]
	Empty,

	#[error("Unrecognized notation style: {text}")]
	UnrecognizedStyle { text: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlayParseError {
	#[error("Unable to determine play type from: {input}")]
	UnknownPlayType { input: String },

	#[error("Unrecognized {category} type: {input}")]
	UnknownSubtype { category: &'static str, input: String },

	#[error("Notation error: {0}")]
	Notation(#[from] NotationError),

	#[error("Game clock error: {0}")]
	GameClock(#[from] GameClockError),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameClockError {
	#[error("Invalid time format: {time}")]
	InvalidTimeFormat { time: String },

	#[error("Invalid seconds: {seconds}, must be between 0 and 59")]
	InvalidSeconds { seconds: u32 },

	#[error("Parse error occurred for number: {source}")]
	ParseError {
		#[from]
		source: ParseIntError,
	},
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoxScoreError {
	#[error("Unrecognized home/away flag \"{flag}\" for {name}")]
	UnknownSide { flag: String, name: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReconcileError {
	#[error("No {side} player left in the minutes ledger to fill the lineup in period {period} at {time_remaining}")]
	LedgerExhausted { side: Side, period: u8, time_remaining: ClockTime },

	#[error("{listed} {side} players listed in period {period} at {time_remaining}, but none can be removed from the ledger")]
	NoRemovableMinutes {
		side: Side,
		period: u8,
		time_remaining: ClockTime,
		listed: usize,
	},

	#[error("{player} is listed for {side} in period {period} at {time_remaining} but has no box-score minutes")]
	MissingLedgerEntry {
		side: Side,
		period: u8,
		time_remaining: ClockTime,
		player: PlayerIdentity,
	},
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
	#[error("Box score error: {0}")]
	BoxScore(#[from] BoxScoreError),

	#[error("Minutes reconciliation failed for game {game_id}: {source}")]
	Reconcile { game_id: String, source: ReconcileError },
}

impl NotationError {
	pub fn unrecognized_style(text: &str) -> Self {
		Self::UnrecognizedStyle { text: text.to_string() }
	}
}

impl PlayParseError {
	pub fn unknown_play_type(input: &str) -> Self {
		Self::UnknownPlayType { input: input.to_string() }
	}

	pub fn unknown_subtype(category: &'static str, input: &str) -> Self {
		Self::UnknownSubtype {
			category,
			input: input.to_string(),
		}
	}
}

impl GameClockError {
	pub fn invalid_time_format_error(time: &str) -> Self {
		Self::InvalidTimeFormat { time: time.to_string() }
	}

	pub const fn invalid_seconds_error(seconds: u32) -> Self {
		Self::InvalidSeconds { seconds }
	}
}

impl BoxScoreError {
	pub fn unknown_side(flag: &str, name: &str) -> Self {
		Self::UnknownSide {
			flag: flag.to_string(),
			name: name.to_string(),
		}
	}
}

impl ReconcileError {
	pub const fn ledger_exhausted(side: Side, period: u8, time_remaining: ClockTime) -> Self {
		Self::LedgerExhausted { side, period, time_remaining }
	}

	pub const fn no_removable_minutes(side: Side, period: u8, time_remaining: ClockTime, listed: usize) -> Self {
		Self::NoRemovableMinutes {
			side,
			period,
			time_remaining,
			listed,
		}
	}

	pub fn missing_ledger_entry(side: Side, period: u8, time_remaining: ClockTime, player: &PlayerIdentity) -> Self {
		Self::MissingLedgerEntry {
			side,
			period,
			time_remaining,
			player: player.clone(),
		}
	}
}

impl GameError {
	pub fn reconcile(game_id: &str, source: ReconcileError) -> Self {
		Self::Reconcile {
			game_id: game_id.to_string(),
			source,
		}
	}
}

use crate::error::BoxScoreError;
use crate::identity::clean_name;
use crate::schema::roster::{PlayerId, PlayerIdentity};
use crate::schema::teams::Side;
use enum_label_derive::EnumLabel;
use serde::{Deserialize, Serialize};

pub const STAT_COLUMNS: usize = 15;

/// One box-score line exactly as scraped, every cell still text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBoxLine {
	pub player_id: String,
	pub side: String,
	pub name: String,
	pub position: String,
	pub starter: String,
	pub minutes: String,
	pub stats: [String; STAT_COLUMNS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumLabel)]
pub enum Position {
	#[label = "G"]
	Guard,
	#[label = "F"]
	Forward,
	#[label = "C"]
	Center,
}

/// Counting stats in box-score column order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingStats {
	pub field_goals_made: u16,
	pub field_goals_attempted: u16,
	pub threes_made: u16,
	pub threes_attempted: u16,
	pub free_throws_made: u16,
	pub free_throws_attempted: u16,
	pub points: u16,
	pub offensive_rebounds: u16,
	pub defensive_rebounds: u16,
	pub total_rebounds: u16,
	pub assists: u16,
	pub turnovers: u16,
	pub steals: u16,
	pub blocks: u16,
	pub fouls: u16,
}

impl<S: AsRef<str>> From<&[S; STAT_COLUMNS]> for CountingStats {
	fn from(value: &[S; STAT_COLUMNS]) -> Self {
		let stat = |i: usize| clean_stat(value[i].as_ref());
		Self {
			field_goals_made: stat(0),
			field_goals_attempted: stat(1),
			threes_made: stat(2),
			threes_attempted: stat(3),
			free_throws_made: stat(4),
			free_throws_attempted: stat(5),
			points: stat(6),
			offensive_rebounds: stat(7),
			defensive_rebounds: stat(8),
			total_rebounds: stat(9),
			assists: stat(10),
			turnovers: stat(11),
			steals: stat(12),
			blocks: stat(13),
			fouls: stat(14),
		}
	}
}

impl CountingStats {
	#[must_use]
	pub const fn as_array(&self) -> [u16; STAT_COLUMNS] {
		[
			self.field_goals_made,
			self.field_goals_attempted,
			self.threes_made,
			self.threes_attempted,
			self.free_throws_made,
			self.free_throws_attempted,
			self.points,
			self.offensive_rebounds,
			self.defensive_rebounds,
			self.total_rebounds,
			self.assists,
			self.turnovers,
			self.steals,
			self.blocks,
			self.fouls,
		]
	}
}

/// A cleaned box-score line. Team total lines keep their stats but carry
/// `team_total` and never enter the minutes ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxLine {
	pub player: PlayerIdentity,
	pub side: Side,
	pub seconds: u32,
	pub position: Option<Position>,
	pub starter: bool,
	pub team_total: bool,
	pub stats: CountingStats,
}

impl TryFrom<&RawBoxLine> for BoxLine {
	type Error = BoxScoreError;

	fn try_from(raw: &RawBoxLine) -> Result<Self, Self::Error> {
		let side = clean_side(&raw.side).ok_or_else(|| BoxScoreError::unknown_side(&raw.side, &raw.name))?;
		let name = clean_name(&raw.name);
		let team_total = is_team_total(&name);
		let player = match raw.player_id.trim().parse::<u32>() {
			Ok(id) if !team_total => PlayerIdentity::rostered(PlayerId(id), name),
			_ => PlayerIdentity::placeholder(if team_total { "Team".to_string() } else { name }),
		};

		Ok(Self {
			player,
			side,
			seconds: clean_minutes(&raw.minutes),
			position: clean_position(&raw.position),
			starter: matches!(raw.starter.trim(), "1" | "*" | "true" | "True"),
			team_total,
			stats: CountingStats::from(&raw.stats),
		})
	}
}

fn is_team_total(name: &str) -> bool {
	matches!(name, "" | "Team" | "TEAM" | "Totals" | "TOTALS")
}

fn clean_side(flag: &str) -> Option<Side> {
	match flag.trim().to_lowercase().as_str() {
		"away" | "0" | "false" => Some(Side::Away),
		"home" | "1" | "true" => Some(Side::Home),
		_ => None,
	}
}

/// First letter of a guard/forward/center position, any case. Anything else,
/// including the starter asterisk, is no position.
#[must_use]
pub fn clean_position(raw: &str) -> Option<Position> {
	match raw.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
		Some('G') => Some(Position::Guard),
		Some('F') => Some(Position::Forward),
		Some('C') => Some(Position::Center),
		_ => None,
	}
}

/// "MM:SS" minutes played to seconds. Blank or malformed text is zero.
#[must_use]
pub fn clean_minutes(raw: &str) -> u32 {
	raw.trim()
		.split_once(':')
		.and_then(|(minutes, seconds)| Some(minutes.trim().parse::<u32>().ok()? * 60 + seconds.trim().parse::<u32>().ok()?))
		.unwrap_or(0)
}

/// A counting stat cell. Blank or malformed text is zero.
#[must_use]
pub fn clean_stat(raw: &str) -> u16 {
	raw.trim().parse().unwrap_or(0)
}

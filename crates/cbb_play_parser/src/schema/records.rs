use crate::schema::box_score::BoxLine;
use crate::schema::play::{Action, Play};
use crate::schema::roster::PlayerIdentity;
use serde::Serialize;

/// Flat, positional form of a [`Play`]. Field order is the storage column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayRecord {
	pub sequence: u32,
	pub period: u8,
	pub time: u32,
	pub shot_clock: u32,
	pub score_away: u16,
	pub score_home: u16,
	pub is_home: bool,
	pub action: &'static str,
	/// Subtype: shot technique, foul or turnover kind, timeout length, ...
	pub flag_1: String,
	/// Shot length.
	pub flag_2: &'static str,
	/// Made, won, offensive or entering, depending on the action.
	pub flag_3: bool,
	pub flag_4: bool,
	pub flag_5: bool,
	pub flag_6: bool,
	pub player: String,
	pub player_id: Option<u32>,
	pub away_1: String,
	pub away_2: String,
	pub away_3: String,
	pub away_4: String,
	pub away_5: String,
	pub home_1: String,
	pub home_2: String,
	pub home_3: String,
	pub home_4: String,
	pub home_5: String,
}

#[derive(Debug, Default)]
struct Flags {
	subtype: String,
	length: &'static str,
	primary: bool,
	second_chance: bool,
	fast_break: bool,
	blocked: bool,
}

fn flags(action: &Action) -> Flags {
	match action {
		Action::Shot(shot) => Flags {
			subtype: shot.technique.label().to_string(),
			length: shot.length.label(),
			primary: shot.made,
			second_chance: shot.second_chance == Some(true),
			fast_break: shot.fast_break == Some(true),
			blocked: shot.blocked == Some(true),
		},
		Action::FreeThrow(free_throw) => Flags {
			subtype: match (free_throw.attempt, free_throw.of) {
				(Some(attempt), Some(of)) => format!("{attempt} of {of}"),
				_ => String::new(),
			},
			primary: free_throw.made,
			..Flags::default()
		},
		Action::Rebound(rebound) => Flags {
			subtype: if rebound.dead_ball { "dead ball" } else { "live" }.to_string(),
			primary: rebound.offensive == Some(true),
			..Flags::default()
		},
		Action::Turnover(kind) => Flags {
			subtype: kind.label().to_string(),
			..Flags::default()
		},
		Action::FoulCommitted(kind) => Flags {
			subtype: kind.label().to_string(),
			..Flags::default()
		},
		Action::Timeout(timeout) => Flags {
			subtype: timeout.length.label().to_string(),
			..Flags::default()
		},
		Action::PossessionArrow(kind) => Flags {
			subtype: kind.label().to_string(),
			..Flags::default()
		},
		Action::Substitution { entering } => Flags {
			primary: *entering,
			..Flags::default()
		},
		Action::JumpBall { won } => Flags {
			primary: *won,
			..Flags::default()
		},
		Action::FoulReceived | Action::Block | Action::Assist | Action::Steal => Flags::default(),
	}
}

fn slot(players: &[PlayerIdentity], index: usize) -> String {
	players.get(index).map(|player| player.name().to_string()).unwrap_or_default()
}

impl Play {
	/// Flattens this play into its storage row. Missing on-court slots are empty.
	#[must_use]
	pub fn to_record(&self, sequence: u32) -> PlayRecord {
		let flags = flags(&self.action);
		let away = &self.on_court.away;
		let home = &self.on_court.home;

		PlayRecord {
			sequence,
			period: self.period,
			time: self.time_remaining.whole_seconds(),
			shot_clock: self.shot_clock.map_or(0, |clock| clock.whole_seconds()),
			score_away: self.score.away,
			score_home: self.score.home,
			is_home: self.side.is_home(),
			action: self.kind().label(),
			flag_1: flags.subtype,
			flag_2: flags.length,
			flag_3: flags.primary,
			flag_4: flags.second_chance,
			flag_5: flags.fast_break,
			flag_6: flags.blocked,
			player: self.subject.name().to_string(),
			player_id: self.player().and_then(PlayerIdentity::id).map(|id| id.0),
			away_1: slot(away, 0),
			away_2: slot(away, 1),
			away_3: slot(away, 2),
			away_4: slot(away, 3),
			away_5: slot(away, 4),
			home_1: slot(home, 0),
			home_2: slot(home, 1),
			home_3: slot(home, 2),
			home_4: slot(home, 3),
			home_5: slot(home, 4),
		}
	}
}

/// Flat, positional form of a [`BoxLine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxRecord {
	pub sequence: u32,
	pub player_id: Option<u32>,
	pub player: String,
	pub is_home: bool,
	pub starter: bool,
	pub position: Option<&'static str>,
	pub seconds: u32,
	pub fgm: u16,
	pub fga: u16,
	pub three_fgm: u16,
	pub three_fga: u16,
	pub ftm: u16,
	pub fta: u16,
	pub pts: u16,
	pub oreb: u16,
	pub dreb: u16,
	pub treb: u16,
	pub ast: u16,
	pub to: u16,
	pub stl: u16,
	pub blk: u16,
	pub fouls: u16,
}

impl BoxLine {
	#[must_use]
	pub fn to_record(&self, sequence: u32) -> BoxRecord {
		let stats = &self.stats;
		BoxRecord {
			sequence,
			player_id: self.player.id().map(|id| id.0),
			player: self.player.name().to_string(),
			is_home: self.side.is_home(),
			starter: self.starter,
			position: self.position.map(|position| position.label()),
			seconds: self.seconds,
			fgm: stats.field_goals_made,
			fga: stats.field_goals_attempted,
			three_fgm: stats.threes_made,
			three_fga: stats.threes_attempted,
			ftm: stats.free_throws_made,
			fta: stats.free_throws_attempted,
			pts: stats.points,
			oreb: stats.offensive_rebounds,
			dreb: stats.defensive_rebounds,
			treb: stats.total_rebounds,
			ast: stats.assists,
			to: stats.turnovers,
			stl: stats.steals,
			blk: stats.blocks,
			fouls: stats.fouls,
		}
	}
}

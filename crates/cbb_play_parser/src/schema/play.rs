use crate::schema::game_clock::ClockTime;
use crate::schema::roster::PlayerIdentity;
use crate::schema::teams::{Side, Subject};
use enum_label_derive::EnumLabel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumLabel)]
pub enum ShotLength {
	#[label = "short 2"]
	ShortTwo,
	#[label = "long 2"]
	LongTwo,
	#[label = "3"]
	Three,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumLabel)]
pub enum ShotTechnique {
	#[label = "layup"]
	Layup,
	#[label = "jump shot"]
	JumpShot,
	#[label = "dunk"]
	Dunk,
	#[label = "hook shot"]
	Hook,
	#[label = "pull-up jump shot"]
	PullUp,
	#[label = "step-back jump shot"]
	StepBack,
	#[label = "turn-around jump shot"]
	Turnaround,
	#[label = "driving layup"]
	DrivingLayup,
	#[label = "alley-oop"]
	AlleyOop,
	#[label = "unknown"]
	Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumLabel)]
pub enum TurnoverKind {
	#[label = "travel"]
	Travel,
	#[label = "bad pass"]
	BadPass,
	#[label = "lost ball"]
	LostBall,
	#[label = "offensive foul"]
	OffensiveFoul,
	#[label = "3-second violation"]
	ThreeSeconds,
	#[label = "shot clock violation"]
	ShotClock,
	#[label = "double dribble"]
	DoubleDribble,
	#[label = "5-second violation"]
	FiveSeconds,
	#[label = "10-second violation"]
	TenSeconds,
	#[label = "lane violation"]
	LaneViolation,
	#[label = "other"]
	Other,
	#[label = "unknown"]
	Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumLabel)]
pub enum FoulKind {
	#[label = "personal"]
	Personal,
	#[label = "offensive"]
	Offensive,
	#[label = "technical, class A"]
	TechnicalClassA,
	#[label = "technical, flagrant 2"]
	TechnicalFlagrant2,
	#[label = "double technical"]
	DoubleTechnical,
	#[label = "deadball contact technical"]
	DeadballContactTechnical,
	#[label = "bench technical, class A"]
	BenchTechnicalClassA,
	#[label = "coach technical, class A"]
	CoachTechnicalClassA,
	#[label = "double coach technical"]
	DoubleCoachTechnical,
	#[label = "admin technical, class B"]
	AdminTechnicalClassB,
	#[label = "coach admin technical, class B"]
	CoachAdminTechnicalClassB,
	#[label = "bench admin technical, class B"]
	BenchAdminTechnicalClassB,
	#[label = "administrative admin technical"]
	AdministrativeTechnical,
	#[label = "unknown"]
	Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumLabel)]
pub enum TimeoutCaller {
	#[label = "team"]
	Team,
	#[label = "floor"]
	Floor,
	#[label = "unknown"]
	Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumLabel)]
pub enum TimeoutLength {
	#[label = "short"]
	Short,
	#[label = "full"]
	Full,
	#[label = "media"]
	Media,
	#[label = "unknown"]
	Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumLabel)]
pub enum ArrowKind {
	#[label = "held ball"]
	HeldBall,
	#[label = "block tie-up"]
	BlockTieUp,
	#[label = "lodged ball"]
	LodgedBall,
	#[label = "out of bounds"]
	OutOfBounds,
	#[label = "unknown"]
	Unknown,
}

/// Field goal attempt. `None` flags mean the notation did not say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shot {
	pub made: bool,
	pub length: ShotLength,
	pub technique: ShotTechnique,
	pub second_chance: Option<bool>,
	pub fast_break: Option<bool>,
	pub blocked: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FreeThrow {
	pub made: bool,
	pub attempt: Option<u8>,
	pub of: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rebound {
	pub offensive: Option<bool>,
	pub dead_ball: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timeout {
	pub caller: TimeoutCaller,
	pub length: TimeoutLength,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
	Shot(Shot),
	FreeThrow(FreeThrow),
	Rebound(Rebound),
	Turnover(TurnoverKind),
	FoulCommitted(FoulKind),
	FoulReceived,
	Block,
	Assist,
	Steal,
	Substitution { entering: bool },
	Timeout(Timeout),
	JumpBall { won: bool },
	PossessionArrow(ArrowKind),
}

/// Payload-free view of [`Action`], used for labels and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumLabel)]
pub enum ActionKind {
	#[label = "shot"]
	Shot,
	#[label = "free throw"]
	FreeThrow,
	#[label = "rebound"]
	Rebound,
	#[label = "turnover"]
	Turnover,
	#[label = "foul committed"]
	FoulCommitted,
	#[label = "foul received"]
	FoulReceived,
	#[label = "block"]
	Block,
	#[label = "assist"]
	Assist,
	#[label = "steal"]
	Steal,
	#[label = "substitution"]
	Substitution,
	#[label = "timeout"]
	Timeout,
	#[label = "jump ball"]
	JumpBall,
	#[label = "possession arrow"]
	PossessionArrow,
}

impl Action {
	#[must_use]
	pub const fn kind(&self) -> ActionKind {
		match self {
			Self::Shot(_) => ActionKind::Shot,
			Self::FreeThrow(_) => ActionKind::FreeThrow,
			Self::Rebound(_) => ActionKind::Rebound,
			Self::Turnover(_) => ActionKind::Turnover,
			Self::FoulCommitted(_) => ActionKind::FoulCommitted,
			Self::FoulReceived => ActionKind::FoulReceived,
			Self::Block => ActionKind::Block,
			Self::Assist => ActionKind::Assist,
			Self::Steal => ActionKind::Steal,
			Self::Substitution { .. } => ActionKind::Substitution,
			Self::Timeout(_) => ActionKind::Timeout,
			Self::JumpBall { .. } => ActionKind::JumpBall,
			Self::PossessionArrow(_) => ActionKind::PossessionArrow,
		}
	}

	#[must_use]
	pub const fn is_substitution_in(&self) -> bool {
		matches!(self, Self::Substitution { entering: true })
	}

	#[must_use]
	pub const fn is_substitution_out(&self) -> bool {
		matches!(self, Self::Substitution { entering: false })
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
	pub away: u16,
	pub home: u16,
}

impl Score {
	#[must_use]
	pub const fn new(away: u16, home: u16) -> Self {
		Self { away, home }
	}
}

/// On-court players per team. Tracking may list more or fewer than five;
/// reconciliation leaves exactly five.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnCourt {
	pub away: Vec<PlayerIdentity>,
	pub home: Vec<PlayerIdentity>,
}

impl OnCourt {
	#[must_use]
	pub fn side(&self, side: Side) -> &[PlayerIdentity] {
		match side {
			Side::Away => &self.away,
			Side::Home => &self.home,
		}
	}

	pub fn side_mut(&mut self, side: Side) -> &mut Vec<PlayerIdentity> {
		match side {
			Side::Away => &mut self.away,
			Side::Home => &mut self.home,
		}
	}

	/// Adds `player` to `side` unless already listed.
	pub fn insert(&mut self, side: Side, player: &PlayerIdentity) -> bool {
		let listed = self.side_mut(side);
		if listed.contains(player) {
			false
		} else {
			listed.push(player.clone());
			true
		}
	}
}

/// One reconstructed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
	pub period: u8,
	pub time_remaining: ClockTime,
	pub side: Side,
	pub subject: Subject,
	pub action: Action,
	pub score: Score,
	/// Filled in by the shot clock tracker.
	pub shot_clock: Option<ClockTime>,
	/// Filled in by lineup tracking, then repaired by minutes reconciliation.
	pub on_court: OnCourt,
}

impl Play {
	#[must_use]
	pub fn new(period: u8, time_remaining: ClockTime, side: Side, subject: Subject, action: Action) -> Self {
		Self {
			period,
			time_remaining,
			side,
			subject,
			action,
			score: Score::default(),
			shot_clock: None,
			on_court: OnCourt::default(),
		}
	}

	#[must_use]
	pub const fn with_score(mut self, score: Score) -> Self {
		self.score = score;
		self
	}

	#[must_use]
	pub const fn kind(&self) -> ActionKind {
		self.action.kind()
	}

	/// The player whose presence this play proves, if any.
	#[must_use]
	pub const fn player(&self) -> Option<&PlayerIdentity> {
		self.subject.player()
	}
}

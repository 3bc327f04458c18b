use crate::schema::roster::PlayerIdentity;
use enum_label_derive::EnumLabel;
use serde::{Deserialize, Serialize};

/// Which team's column an event was recorded in. The away team is listed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumLabel)]
pub enum Side {
	#[label = "away"]
	Away,
	#[label = "home"]
	Home,
}

impl Side {
	pub const BOTH: [Self; 2] = [Self::Away, Self::Home];

	#[must_use]
	pub const fn opposite(self) -> Self {
		match self {
			Self::Away => Self::Home,
			Self::Home => Self::Away,
		}
	}

	#[must_use]
	pub const fn is_home(self) -> bool {
		matches!(self, Self::Home)
	}
}

/// Who an event is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
	Player(PlayerIdentity),
	/// The team as a whole, e.g. a team rebound or a called timeout.
	Team,
	/// Nobody in particular, e.g. a media timeout.
	Floor,
}

impl Subject {
	#[must_use]
	pub const fn player(&self) -> Option<&PlayerIdentity> {
		match self {
			Self::Player(identity) => Some(identity),
			Self::Team | Self::Floor => None,
		}
	}

	#[must_use]
	pub fn name(&self) -> &str {
		match self {
			Self::Player(identity) => identity.name(),
			Self::Team => "Team",
			Self::Floor => "Floor",
		}
	}
}

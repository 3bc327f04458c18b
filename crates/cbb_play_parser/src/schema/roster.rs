use crate::identity::clean_name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable player id as assigned by the stats site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A player as far as the engine can tell. Placeholders carry the text they were
/// written as and no id; they take part in lineups like anyone else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
	id: Option<PlayerId>,
	name: String,
}

impl PlayerIdentity {
	pub fn rostered(id: PlayerId, name: impl Into<String>) -> Self {
		Self { id: Some(id), name: name.into() }
	}

	pub fn placeholder(name: impl Into<String>) -> Self {
		Self { id: None, name: name.into() }
	}

	#[must_use]
	pub const fn id(&self) -> Option<PlayerId> {
		self.id
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub const fn is_placeholder(&self) -> bool {
		self.id.is_none()
	}
}

impl fmt::Display for PlayerIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.id {
			Some(id) => write!(f, "{} ({id})", self.name),
			None => write!(f, "{} (unlisted)", self.name),
		}
	}
}

/// One roster row as supplied upstream. Names may be written "Last, First".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
	pub id: PlayerId,
	pub name: String,
}

impl RosterEntry {
	pub fn new(id: u32, name: impl Into<String>) -> Self {
		Self {
			id: PlayerId(id),
			name: name.into(),
		}
	}
}

/// Ordered candidate list for one team. Order matters: it breaks ties in both
/// name resolution and minutes reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
	players: Vec<PlayerIdentity>,
}

impl Roster {
	#[must_use]
	pub fn from_entries(entries: &[RosterEntry]) -> Self {
		let players = entries.iter().map(|entry| PlayerIdentity::rostered(entry.id, clean_name(&entry.name))).collect();
		Self { players }
	}

	pub fn iter(&self) -> impl Iterator<Item = &PlayerIdentity> {
		self.players.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.players.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.players.is_empty()
	}

	#[must_use]
	pub fn contains(&self, identity: &PlayerIdentity) -> bool {
		self.players.contains(identity)
	}

	#[must_use]
	pub fn by_id(&self, id: PlayerId) -> Option<&PlayerIdentity> {
		self.players.iter().find(|player| player.id == Some(id))
	}

	/// Appends a player discovered after the roster was supplied (box-score only
	/// players, placeholders). Already-known identities are not duplicated.
	pub fn register(&mut self, identity: PlayerIdentity) {
		if !self.contains(&identity) {
			self.players.push(identity);
		}
	}
}

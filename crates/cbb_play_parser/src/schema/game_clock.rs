use crate::error::GameClockError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static CLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{1,2})(?:[:.](\d{1,3}))?$").expect("clock pattern is valid"));

/// Time remaining in a period, kept in hundredths of a second so that plays
/// sharing a clock stoppage compare exactly equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockTime(u32);

impl ClockTime {
	pub const ZERO: Self = Self(0);

	#[must_use]
	pub const fn from_seconds(seconds: u32) -> Self {
		Self(seconds * 100)
	}

	#[must_use]
	pub const fn from_centis(centis: u32) -> Self {
		Self(centis)
	}

	#[must_use]
	pub const fn centis(self) -> u32 {
		self.0
	}

	/// Whole seconds, truncated.
	#[must_use]
	pub const fn whole_seconds(self) -> u32 {
		self.0 / 100
	}

	#[must_use]
	pub fn as_seconds(self) -> f64 {
		f64::from(self.0) / 100.0
	}

	#[must_use]
	pub const fn saturating_sub(self, other: Self) -> Self {
		Self(self.0.saturating_sub(other.0))
	}
}

impl fmt::Display for ClockTime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let seconds = self.whole_seconds();
		write!(f, "{:02}:{:02}", seconds / 60, seconds % 60)?;
		if self.0 % 100 != 0 {
			write!(f, ":{:02}", self.0 % 100)?;
		}
		Ok(())
	}
}

/// A scoreboard clock reading as written in the feed: `MM:SS`, or `MM:SS:cc`
/// in the final minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
	minutes: u32,
	seconds: u32,
	centis: u32,
}

impl GameClock {
	#[must_use]
	pub const fn time_remaining(&self) -> ClockTime {
		ClockTime::from_centis((self.minutes * 60 + self.seconds) * 100 + self.centis)
	}
}

impl FromStr for GameClock {
	type Err = GameClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let captures = CLOCK_PATTERN.captures(s.trim()).ok_or_else(|| GameClockError::invalid_time_format_error(s))?;

		let minutes = captures[1].parse::<u32>()?;
		let seconds = captures[2].parse::<u32>()?;
		if seconds >= 60 {
			return Err(GameClockError::invalid_seconds_error(seconds));
		}
		let centis = captures.get(3).map_or(Ok(0), |m| m.as_str().parse::<u32>())?;

		Ok(Self { minutes, seconds, centis })
	}
}

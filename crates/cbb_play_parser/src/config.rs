use crate::schema::game_clock::ClockTime;
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Rule constants that change between seasons. Shared read-only by every game
/// processed with it.
#[derive(Parser, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct SeasonConfig {
	#[arg(long, env = "SHOT_CLOCK_SECONDS", default_value = "30", help = "Full shot clock length in seconds")]
	pub shot_clock_seconds: u32,

	#[arg(long, env = "OFFENSIVE_REBOUND_SECONDS", default_value = "20", help = "Shot clock reset after an offensive rebound")]
	pub offensive_rebound_seconds: u32,

	#[arg(
		long,
		env = "OFFENSIVE_REBOUND_RESET",
		default_value = "true",
		action = clap::ArgAction::Set,
		help = "Whether offensive rebounds reset to the shorter clock"
	)]
	pub offensive_rebound_reset: bool,

	#[arg(long, env = "PERIOD_SECONDS", default_value = "1200", help = "Length of a regulation period in seconds")]
	pub period_seconds: u32,

	#[arg(long, env = "OVERTIME_SECONDS", default_value = "300", help = "Length of an overtime period in seconds")]
	pub overtime_seconds: u32,

	#[arg(long, env = "REGULATION_PERIODS", default_value = "2", help = "Number of regulation periods")]
	pub regulation_periods: u8,
}

impl SeasonConfig {
	#[must_use]
	pub fn new() -> Self {
		Self::parse()
	}

	/// Rules in force for the season ending in `end_year`: the 35 second shot
	/// clock until 2014-15 and the 20 second offensive rebound reset from 2019-20.
	#[must_use]
	pub fn for_season(end_year: u16) -> Self {
		Self {
			shot_clock_seconds: if end_year < 2016 { 35 } else { 30 },
			offensive_rebound_reset: end_year >= 2020,
			..Self::default()
		}
	}

	#[must_use]
	pub const fn full_reset(&self) -> ClockTime {
		ClockTime::from_seconds(self.shot_clock_seconds)
	}

	/// Shot clock reset for a rebound.
	#[must_use]
	pub const fn rebound_reset(&self, offensive: bool) -> ClockTime {
		if offensive && self.offensive_rebound_reset {
			ClockTime::from_seconds(self.offensive_rebound_seconds)
		} else {
			self.full_reset()
		}
	}

	/// Game clock at the start of `period` (zero-based).
	#[must_use]
	pub const fn period_start(&self, period: u8) -> ClockTime {
		if period < self.regulation_periods {
			ClockTime::from_seconds(self.period_seconds)
		} else {
			ClockTime::from_seconds(self.overtime_seconds)
		}
	}

	#[cfg(test)]
	pub const fn test() -> Self {
		Self {
			shot_clock_seconds: 30,
			offensive_rebound_seconds: 20,
			offensive_rebound_reset: false,
			period_seconds: 1200,
			overtime_seconds: 300,
			regulation_periods: 2,
		}
	}
}

impl Default for SeasonConfig {
	fn default() -> Self {
		Self {
			shot_clock_seconds: 30,
			offensive_rebound_seconds: 20,
			offensive_rebound_reset: true,
			period_seconds: 1200,
			overtime_seconds: 300,
			regulation_periods: 2,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = SeasonConfig::default();
		assert_eq!(config.shot_clock_seconds, 30);
		assert_eq!(config.offensive_rebound_seconds, 20);
		assert!(config.offensive_rebound_reset);
		assert_eq!(config.period_start(0), ClockTime::from_seconds(1200));
		assert_eq!(config.period_start(1), ClockTime::from_seconds(1200));
		assert_eq!(config.period_start(2), ClockTime::from_seconds(300));
		assert_eq!(config.period_start(4), ClockTime::from_seconds(300));
	}

	#[test]
	fn test_for_season() {
		let test_cases = vec![(2015, 35, false), (2016, 30, false), (2019, 30, false), (2020, 30, true), (2024, 30, true)];

		for (end_year, shot_clock, reset) in test_cases {
			let config = SeasonConfig::for_season(end_year);
			assert_eq!(config.shot_clock_seconds, shot_clock, "Failed for season: {end_year}");
			assert_eq!(config.offensive_rebound_reset, reset, "Failed for season: {end_year}");
		}
	}

	#[test]
	fn test_rebound_reset() {
		let config = SeasonConfig::for_season(2020);
		assert_eq!(config.rebound_reset(true), ClockTime::from_seconds(20));
		assert_eq!(config.rebound_reset(false), ClockTime::from_seconds(30));
		assert_eq!(SeasonConfig::test().rebound_reset(true), ClockTime::from_seconds(30));
	}

	#[test]
	fn test_config_parser() {
		let args = vec![
			"program",
			"--shot-clock-seconds",
			"35",
			"--offensive-rebound-reset",
			"false",
			"--overtime-seconds",
			"240",
		];

		let config = SeasonConfig::try_parse_from(args).expect("valid arguments");
		assert_eq!(config.shot_clock_seconds, 35);
		assert!(!config.offensive_rebound_reset);
		assert_eq!(config.overtime_seconds, 240);
		assert_eq!(config.period_seconds, 1200);
	}
}

use crate::config::SeasonConfig;
use crate::schema::game_clock::ClockTime;
use crate::schema::play::{Action, Play};

/// Derives the shot clock shown at each play from the game clock alone.
///
/// The shot clock expires at `shot_clock_end` on the game clock; events that
/// reset it move that point. Plays sharing a game clock reading share a shot
/// clock reading.
#[derive(Debug)]
pub struct ShotClockTracker<'a> {
	config: &'a SeasonConfig,
	period: Option<u8>,
	shot_clock_end: ClockTime,
	last_time: ClockTime,
	displayed: ClockTime,
}

impl<'a> ShotClockTracker<'a> {
	#[must_use]
	pub const fn new(config: &'a SeasonConfig) -> Self {
		Self {
			config,
			period: None,
			shot_clock_end: ClockTime::ZERO,
			last_time: ClockTime::ZERO,
			displayed: ClockTime::ZERO,
		}
	}

	fn start_period(&mut self, period: u8) {
		let start = self.config.period_start(period);
		self.period = Some(period);
		self.last_time = start;
		self.displayed = self.config.full_reset();
		self.shot_clock_end = start.saturating_sub(self.config.full_reset());
	}

	fn reset_for(&self, action: &Action) -> Option<ClockTime> {
		match action {
			Action::JumpBall { .. }
			| Action::PossessionArrow(_)
			| Action::Shot(_)
			| Action::Turnover(_)
			| Action::Steal
			| Action::FoulCommitted(_)
			| Action::FreeThrow(_) => Some(self.config.full_reset()),
			Action::Rebound(rebound) => Some(self.config.rebound_reset(rebound.offensive == Some(true))),
			Action::FoulReceived | Action::Block | Action::Assist | Action::Substitution { .. } | Action::Timeout(_) => None,
		}
	}

	pub fn observe(&mut self, play: &mut Play) {
		if self.period != Some(play.period) {
			self.start_period(play.period);
		}

		if play.time_remaining != self.last_time {
			self.displayed = play.time_remaining.saturating_sub(self.shot_clock_end);
		}
		play.shot_clock = Some(self.displayed);
		self.last_time = play.time_remaining;

		if let Some(reset) = self.reset_for(&play.action) {
			self.shot_clock_end = play.time_remaining.saturating_sub(reset);
		}
	}
}

/// Fills in `shot_clock` for every play, in order.
pub fn track_shot_clock(plays: &mut [Play], config: &SeasonConfig) {
	let mut tracker = ShotClockTracker::new(config);
	for play in plays {
		tracker.observe(play);
	}
}

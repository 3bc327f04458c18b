use crate::config::SeasonConfig;
use crate::schema::game_clock::ClockTime;
use crate::schema::play::Play;
use crate::schema::roster::PlayerIdentity;
use crate::schema::teams::Side;
use tracing::debug;

#[derive(Debug, Default)]
struct TeamLineup {
	/// Everyone believed to be on the court right now.
	current: Vec<PlayerIdentity>,
	/// `current` as of the last clock change; what plays get stamped with.
	confirmed: Vec<PlayerIdentity>,
	/// Players already pushed back through this period's earlier plays, or who
	/// entered by substitution and so need no pushing back.
	backfilled: Vec<PlayerIdentity>,
}

fn push_unique(players: &mut Vec<PlayerIdentity>, player: &PlayerIdentity) {
	if !players.contains(player) {
		players.push(player.clone());
	}
}

/// Works out who was on the court for each play.
///
/// Substitutions do not take effect until the game clock moves. A player seen
/// for the first time in a period without having subbed in must have been on
/// the court since the period began, so they are written into every earlier
/// play of the period as well.
#[derive(Debug)]
pub struct LineupTracker<'a> {
	config: &'a SeasonConfig,
	period: Option<u8>,
	period_first: usize,
	last_time: ClockTime,
	away: TeamLineup,
	home: TeamLineup,
}

impl<'a> LineupTracker<'a> {
	#[must_use]
	pub fn new(config: &'a SeasonConfig) -> Self {
		Self {
			config,
			period: None,
			period_first: 0,
			last_time: ClockTime::ZERO,
			away: TeamLineup::default(),
			home: TeamLineup::default(),
		}
	}

	fn team_mut(&mut self, side: Side) -> &mut TeamLineup {
		match side {
			Side::Away => &mut self.away,
			Side::Home => &mut self.home,
		}
	}

	fn confirm(&mut self) {
		self.away.confirmed.clone_from(&self.away.current);
		self.home.confirmed.clone_from(&self.home.current);
	}

	/// Processes `plays[index]`. Every play before it must already have been
	/// observed.
	pub fn observe(&mut self, plays: &mut [Play], index: usize) {
		let (period, time) = (plays[index].period, plays[index].time_remaining);

		if self.period != Some(period) {
			self.away = TeamLineup::default();
			self.home = TeamLineup::default();
			self.period = Some(period);
			self.period_first = index;
			self.last_time = self.config.period_start(period);
		}

		if time != self.last_time {
			self.last_time = time;
			self.confirm();
		}

		plays[index].on_court.away.clone_from(&self.away.confirmed);
		plays[index].on_court.home.clone_from(&self.home.confirmed);

		let Some(player) = plays[index].player().cloned() else {
			return;
		};
		let side = plays[index].side;
		let subbed_in = plays[index].action.is_substitution_in();
		let subbed_out = plays[index].action.is_substitution_out();

		let team = self.team_mut(side);
		if (!team.confirmed.contains(&player) || subbed_in) && !team.current.contains(&player) {
			team.current.push(player.clone());
		}
		if subbed_in {
			plays[index].on_court.insert(side, &player);
		}

		let team = self.team_mut(side);
		let needs_backfill = !subbed_in && !team.backfilled.contains(&player);
		push_unique(&mut team.backfilled, &player);

		if needs_backfill {
			let mut touched = 0_usize;
			for earlier in &mut plays[self.period_first..=index] {
				if earlier.period == period && earlier.time_remaining >= time && earlier.on_court.insert(side, &player) {
					touched += 1;
				}
			}
			if touched > 1 {
				debug!(player = %player, %side, period, time = %time, touched, "Backfilled player into earlier plays");
			}
			self.confirm();
		}

		let team = self.team_mut(side);
		if subbed_out {
			team.current.retain(|listed| listed != &player);
		}
	}
}

/// Fills in `on_court` for every play, in order.
pub fn track_lineups(plays: &mut [Play], config: &SeasonConfig) {
	let mut tracker = LineupTracker::new(config);
	for index in 0..plays.len() {
		tracker.observe(plays, index);
	}
}

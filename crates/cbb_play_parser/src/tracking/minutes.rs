use crate::config::SeasonConfig;
use crate::error::ReconcileError;
use crate::schema::box_score::BoxLine;
use crate::schema::game_clock::ClockTime;
use crate::schema::play::Play;
use crate::schema::roster::PlayerIdentity;
use crate::schema::teams::Side;
use tracing::debug;

pub const PLAYERS_ON_COURT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
struct LedgerEntry {
	player: PlayerIdentity,
	/// Box-score playing time not yet accounted for by the play-by-play, in
	/// hundredths of a second. Negative once a player is over-credited.
	balance: i64,
}

/// Unaccounted playing time per player for one team, in box-score order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
	entries: Vec<LedgerEntry>,
}

impl Ledger {
	/// Seeds a ledger from `side`'s box-score lines. Team total lines are left out.
	#[must_use]
	pub fn from_box_lines(lines: &[BoxLine], side: Side) -> Self {
		let entries = lines
			.iter()
			.filter(|line| line.side == side && !line.team_total)
			.map(|line| LedgerEntry {
				player: line.player.clone(),
				balance: i64::from(line.seconds) * 100,
			})
			.collect();
		Self { entries }
	}

	/// Builds a ledger from explicit (player, seconds) balances.
	pub fn from_seconds(balances: impl IntoIterator<Item = (PlayerIdentity, i64)>) -> Self {
		let entries = balances.into_iter().map(|(player, seconds)| LedgerEntry { player, balance: seconds * 100 }).collect();
		Self { entries }
	}

	/// Remaining balance in hundredths of a second, if `player` is in the ledger.
	#[must_use]
	pub fn balance(&self, player: &PlayerIdentity) -> Option<i64> {
		self.entries.iter().find(|entry| &entry.player == player).map(|entry| entry.balance)
	}

	fn entry_mut(&mut self, player: &PlayerIdentity) -> Option<&mut LedgerEntry> {
		self.entries.iter_mut().find(|entry| &entry.player == player)
	}

	/// Gives every placeholder listed for `side` a zero balance, in order of
	/// first appearance. Placeholders never have box-score minutes, so they are
	/// the first to go when a lineup is crowded.
	pub fn seed_placeholders(&mut self, plays: &[Play], side: Side) {
		for play in plays {
			for player in play.on_court.side(side) {
				if player.is_placeholder() && self.balance(player).is_none() {
					debug!(player = %player, %side, "Seeding placeholder with no box-score minutes");
					self.entries.push(LedgerEntry {
						player: player.clone(),
						balance: 0,
					});
				}
			}
		}
	}

	/// Charges `elapsed` to every listed player. A listed player missing from
	/// the ledger means the box score and play-by-play disagree.
	pub fn debit(&mut self, listed: &[PlayerIdentity], elapsed: ClockTime, side: Side, period: u8, time_remaining: ClockTime) -> Result<(), ReconcileError> {
		for player in listed {
			let entry = self
				.entry_mut(player)
				.ok_or_else(|| ReconcileError::missing_ledger_entry(side, period, time_remaining, player))?;
			entry.balance -= i64::from(elapsed.centis());
		}
		Ok(())
	}

	/// Unlisted player with the most unaccounted time. Earlier entries win ties.
	fn best_addition(&self, listed: &[PlayerIdentity]) -> Option<usize> {
		let mut best: Option<usize> = None;
		for (index, entry) in self.entries.iter().enumerate() {
			if !listed.contains(&entry.player) && best.map_or(true, |best| entry.balance > self.entries[best].balance) {
				best = Some(index);
			}
		}
		best
	}

	/// Listed player with the least unaccounted time. Earlier entries win ties.
	fn best_removal(&self, listed: &[PlayerIdentity]) -> Option<usize> {
		let mut best: Option<usize> = None;
		for (index, entry) in self.entries.iter().enumerate() {
			if listed.contains(&entry.player) && best.map_or(true, |best| entry.balance < self.entries[best].balance) {
				best = Some(index);
			}
		}
		best
	}

	/// Adds or removes players until exactly five are listed, moving `elapsed`
	/// between the ledger and each player touched. Returns the number of moves.
	pub fn balance_lineup(&mut self, listed: &mut Vec<PlayerIdentity>, elapsed: ClockTime, side: Side, period: u8, time_remaining: ClockTime) -> Result<usize, ReconcileError> {
		let elapsed = i64::from(elapsed.centis());
		let mut moves = 0;

		while listed.len() < PLAYERS_ON_COURT {
			let index = self.best_addition(listed).ok_or_else(|| ReconcileError::ledger_exhausted(side, period, time_remaining))?;
			let entry = &mut self.entries[index];
			listed.push(entry.player.clone());
			entry.balance -= elapsed;
			moves += 1;
		}

		while listed.len() > PLAYERS_ON_COURT {
			let index = self.best_removal(listed).ok_or_else(|| ReconcileError::no_removable_minutes(side, period, time_remaining, listed.len()))?;
			let entry = &mut self.entries[index];
			listed.retain(|player| player != &entry.player);
			entry.balance += elapsed;
			moves += 1;
		}

		Ok(moves)
	}
}

/// Game clock time that ran off before each play: the drop from the previous
/// play, or from the period start for a period's first play.
#[must_use]
pub fn elapsed_before(plays: &[Play], config: &SeasonConfig) -> Vec<ClockTime> {
	let mut previous: Option<(u8, ClockTime)> = None;
	plays
		.iter()
		.map(|play| {
			let from = match previous {
				Some((period, time)) if period == play.period => time,
				_ => config.period_start(play.period),
			};
			previous = Some((play.period, play.time_remaining));
			from.saturating_sub(play.time_remaining)
		})
		.collect()
}

/// Forces exactly five players per team onto every play, using box-score
/// minutes to decide who to add or drop.
///
/// Placeholders join the ledger with no minutes. Any other listed player
/// without box-score minutes fails the game.
///
/// The first pass charges every tracked player for the time they were listed.
/// The second pass walks the game again, filling short lineups with the players
/// owed the most time and trimming long ones of the players owed the least.
pub fn reconcile_minutes(plays: &mut [Play], box_lines: &[BoxLine], config: &SeasonConfig) -> Result<usize, ReconcileError> {
	let elapsed = elapsed_before(plays, config);
	let mut away = Ledger::from_box_lines(box_lines, Side::Away);
	let mut home = Ledger::from_box_lines(box_lines, Side::Home);
	away.seed_placeholders(plays, Side::Away);
	home.seed_placeholders(plays, Side::Home);

	for (play, &elapsed) in plays.iter().zip(&elapsed) {
		let (period, time) = (play.period, play.time_remaining);
		away.debit(&play.on_court.away, elapsed, Side::Away, period, time)?;
		home.debit(&play.on_court.home, elapsed, Side::Home, period, time)?;
	}

	let mut moves = 0;
	for (play, &elapsed) in plays.iter_mut().zip(&elapsed) {
		let (period, time) = (play.period, play.time_remaining);
		moves += away.balance_lineup(&mut play.on_court.away, elapsed, Side::Away, period, time)?;
		moves += home.balance_lineup(&mut play.on_court.home, elapsed, Side::Home, period, time)?;
	}

	Ok(moves)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::box_score::CountingStats;
	use crate::schema::play::Action;
	use crate::schema::roster::PlayerId;
	use crate::schema::teams::Subject;
	use pretty_assertions::assert_eq;

	fn player(name: &str) -> PlayerIdentity {
		PlayerIdentity::placeholder(name)
	}

	fn lineup(names: &[&str]) -> Vec<PlayerIdentity> {
		names.iter().map(|name| player(name)).collect()
	}

	fn box_line(id: u32, name: &str, side: Side, seconds: u32) -> BoxLine {
		BoxLine {
			player: PlayerIdentity::rostered(PlayerId(id), name),
			side,
			seconds,
			position: None,
			starter: false,
			team_total: false,
			stats: CountingStats::default(),
		}
	}

	#[test]
	fn test_removes_least_owed_player_first_in_ledger_order() {
		let mut ledger = Ledger::from_seconds([
			(player("A"), 40),
			(player("B"), 10),
			(player("C"), 0),
			(player("D"), 0),
			(player("E"), 0),
			(player("F"), 0),
		]);
		let mut listed = lineup(&["A", "B", "C", "D", "E", "F"]);

		let moves = ledger
			.balance_lineup(&mut listed, ClockTime::from_seconds(5), Side::Home, 0, ClockTime::from_seconds(600))
			.expect("balanced");

		assert_eq!(moves, 1);
		assert_eq!(listed, lineup(&["A", "B", "D", "E", "F"]));
		assert_eq!(ledger.balance(&player("C")), Some(500));
	}

	#[test]
	fn test_adds_most_owed_players() {
		let mut ledger = Ledger::from_seconds([(player("A"), 100), (player("B"), 300), (player("C"), 300), (player("D"), 50), (player("E"), 0)]);
		let mut listed = lineup(&["A", "Walk On"]);

		let moves = ledger
			.balance_lineup(&mut listed, ClockTime::from_seconds(10), Side::Away, 1, ClockTime::from_seconds(300))
			.expect("balanced");

		assert_eq!(moves, 3);
		assert_eq!(listed, lineup(&["A", "Walk On", "B", "C", "D"]));
		assert_eq!(ledger.balance(&player("B")), Some(29_000));
		assert_eq!(ledger.balance(&player("E")), Some(0));
	}

	#[test]
	fn test_unfixable_lineups_fail() {
		let mut ledger = Ledger::from_seconds([(player("A"), 100)]);
		let mut short = lineup(&["A"]);
		assert_eq!(
			ledger.balance_lineup(&mut short, ClockTime::ZERO, Side::Home, 0, ClockTime::from_seconds(1000)),
			Err(ReconcileError::ledger_exhausted(Side::Home, 0, ClockTime::from_seconds(1000)))
		);

		let mut crowded = lineup(&["P1", "P2", "P3", "P4", "P5", "P6"]);
		assert_eq!(
			Ledger::default().balance_lineup(&mut crowded, ClockTime::ZERO, Side::Away, 2, ClockTime::from_seconds(60)),
			Err(ReconcileError::no_removable_minutes(Side::Away, 2, ClockTime::from_seconds(60), 6))
		);
	}

	#[test]
	fn test_elapsed_before() {
		let plays: Vec<Play> = [(0, 1200), (0, 1180), (0, 1180), (1, 1190), (2, 290)]
			.into_iter()
			.map(|(period, seconds)| Play::new(period, ClockTime::from_seconds(seconds), Side::Home, Subject::Team, Action::Block))
			.collect();

		let elapsed: Vec<u32> = elapsed_before(&plays, &SeasonConfig::test()).into_iter().map(ClockTime::whole_seconds).collect();
		assert_eq!(elapsed, vec![0, 20, 0, 10, 10]);
	}

	fn reconciled_game() -> (Vec<Play>, Vec<BoxLine>) {
		let away: Vec<BoxLine> = (1..=7).map(|id| box_line(id, &format!("Away {id}"), Side::Away, 1200 - (id - 1) * 150)).collect();
		let home: Vec<BoxLine> = (11..=16).map(|id| box_line(id, &format!("Home {id}"), Side::Home, 1200 - (id - 11) * 200)).collect();
		let box_lines: Vec<BoxLine> = away.into_iter().chain(home).collect();

		let mut plays: Vec<Play> = (0..6_u32)
			.map(|i| Play::new(0, ClockTime::from_seconds(1200 - i * 200), Side::Away, Subject::Team, Action::Block))
			.collect();
		plays[2].on_court.away = box_lines[..7].iter().map(|line| line.player.clone()).collect();
		plays[3].on_court.home = box_lines[7..12].iter().map(|line| line.player.clone()).collect();
		plays[3].on_court.home.push(PlayerIdentity::placeholder("Walk On"));

		(plays, box_lines)
	}

	#[test]
	fn test_reconcile_leaves_five_per_team_and_is_idempotent() {
		let (mut plays, box_lines) = reconciled_game();
		let config = SeasonConfig::test();

		let moves = reconcile_minutes(&mut plays, &box_lines, &config).expect("reconciled");
		assert!(moves > 0);
		for play in &plays {
			assert_eq!(play.on_court.away.len(), PLAYERS_ON_COURT);
			assert_eq!(play.on_court.home.len(), PLAYERS_ON_COURT);
		}
		let home_starters: Vec<PlayerIdentity> = box_lines[7..12].iter().map(|line| line.player.clone()).collect();
		assert_eq!(plays[3].on_court.home, home_starters);

		let settled = plays.clone();
		assert_eq!(reconcile_minutes(&mut plays, &box_lines, &config), Ok(0));
		assert_eq!(plays, settled);
	}

	#[test]
	fn test_placeholder_leaves_crowded_lineup_first() {
		let mut box_lines: Vec<BoxLine> = (1..=5).map(|id| box_line(id, &format!("P{id}"), Side::Home, 1200)).collect();
		box_lines.extend((11..=15).map(|id| box_line(id, &format!("A{id}"), Side::Away, 1200)));
		let regulars: Vec<PlayerIdentity> = box_lines[..5].iter().map(|line| line.player.clone()).collect();

		let mut plays = vec![Play::new(0, ClockTime::from_seconds(1190), Side::Home, Subject::Team, Action::Block)];
		plays[0].on_court.home.clone_from(&regulars);
		plays[0].on_court.home.push(player("Walk On"));

		assert_eq!(reconcile_minutes(&mut plays, &box_lines, &SeasonConfig::test()), Ok(6));
		assert_eq!(plays[0].on_court.home, regulars);
		assert_eq!(plays[0].on_court.away.len(), PLAYERS_ON_COURT);
	}

	#[test]
	fn test_listed_player_without_minutes_fails() {
		let box_lines: Vec<BoxLine> = (1..=5)
			.map(|id| box_line(id, &format!("P{id}"), Side::Home, 1200))
			.chain((11..=15).map(|id| box_line(id, &format!("A{id}"), Side::Away, 1200)))
			.collect();
		let benchwarmer = PlayerIdentity::rostered(PlayerId(9), "Not In Box");

		let mut plays = vec![Play::new(1, ClockTime::from_seconds(800), Side::Away, Subject::Team, Action::Block)];
		plays[0].on_court.away = vec![benchwarmer.clone()];

		assert_eq!(
			reconcile_minutes(&mut plays, &box_lines, &SeasonConfig::test()),
			Err(ReconcileError::missing_ledger_entry(Side::Away, 1, ClockTime::from_seconds(800), &benchwarmer))
		);
	}
}

use crate::config::SeasonConfig;
use crate::error::{GameError, PlayParseError};
use crate::identity::resolve;
use crate::parsers::{parse_play_row, Actor, RawPlayRow};
use crate::schema::box_score::{BoxLine, RawBoxLine};
use crate::schema::play::{Play, Score};
use crate::schema::records::{BoxRecord, PlayRecord};
use crate::schema::roster::{Roster, RosterEntry};
use crate::schema::teams::{Side, Subject};
use crate::tracking::{reconcile_minutes, track_lineups, track_shot_clock};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Everything scraped for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInput {
	pub game_id: String,
	pub rows: Vec<RawPlayRow>,
	pub box_lines: Vec<RawBoxLine>,
	pub away_roster: Vec<RosterEntry>,
	pub home_roster: Vec<RosterEntry>,
}

/// A play-by-play row that could not be turned into a play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
	/// Position of the row in [`GameInput::rows`].
	pub index: usize,
	pub row: RawPlayRow,
	pub error: PlayParseError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
	pub game_id: String,
	pub plays: Vec<Play>,
	pub box_lines: Vec<BoxLine>,
	pub skipped: Vec<SkippedRow>,
}

impl GameReport {
	/// Storage rows for the plays, numbered from 1.
	#[must_use]
	pub fn play_records(&self) -> Vec<PlayRecord> {
		(1..).zip(&self.plays).map(|(sequence, play)| play.to_record(sequence)).collect()
	}

	/// Storage rows for the box score, numbered from 1.
	#[must_use]
	pub fn box_records(&self) -> Vec<BoxRecord> {
		(1..).zip(&self.box_lines).map(|(sequence, line)| line.to_record(sequence)).collect()
	}
}

/// Per-game working rosters. Players found only in the box score or only in the
/// play-by-play are added as they turn up.
struct Rosters {
	away: Roster,
	home: Roster,
}

impl Rosters {
	fn new(input: &GameInput) -> Self {
		Self {
			away: Roster::from_entries(&input.away_roster),
			home: Roster::from_entries(&input.home_roster),
		}
	}

	fn side_mut(&mut self, side: Side) -> &mut Roster {
		match side {
			Side::Away => &mut self.away,
			Side::Home => &mut self.home,
		}
	}

	fn subject(&mut self, actor: Actor, side: Side) -> Subject {
		match actor {
			Actor::Named(name) => Subject::Player(resolve(&name, None, self.side_mut(side))),
			Actor::Team => Subject::Team,
			Actor::Floor => Subject::Floor,
		}
	}
}

fn clean_box_score(input: &GameInput, rosters: &mut Rosters) -> Result<Vec<BoxLine>, GameError> {
	let mut lines = input.box_lines.iter().map(BoxLine::try_from).collect::<Result<Vec<_>, _>>()?;
	for line in lines.iter_mut().filter(|line| !line.team_total) {
		line.player = resolve(line.player.name(), line.player.id(), rosters.side_mut(line.side));
	}
	Ok(lines)
}

/// Rebuilds one game: parses every row, then derives shot clocks and lineups
/// and reconciles the lineups against box-score minutes.
///
/// Rows that cannot be parsed are skipped and reported. A game whose lineups
/// cannot be reconciled fails as a whole.
#[tracing::instrument(skip_all, fields(game_id = %input.game_id))]
pub fn reconstruct(input: &GameInput, config: &SeasonConfig) -> Result<GameReport, GameError> {
	let mut rosters = Rosters::new(input);
	let box_lines = clean_box_score(input, &mut rosters)?;

	let mut plays = Vec::with_capacity(input.rows.len());
	let mut skipped = Vec::new();
	let mut score = Score::default();

	for (index, row) in input.rows.iter().enumerate() {
		match parse_play_row(row) {
			Ok(Some(parsed)) => {
				score = parsed.score.unwrap_or(score);
				let subject = rosters.subject(parsed.actor, parsed.side);
				plays.push(Play::new(parsed.period, parsed.time_remaining, parsed.side, subject, parsed.action).with_score(score));
			}
			Ok(None) => {}
			Err(error) => {
				warn!(row = index, %error, "Skipping unparseable row");
				skipped.push(SkippedRow {
					index,
					row: row.clone(),
					error,
				});
			}
		}
	}

	track_shot_clock(&mut plays, config);
	track_lineups(&mut plays, config);
	let moves = reconcile_minutes(&mut plays, &box_lines, config).map_err(|source| GameError::reconcile(&input.game_id, source))?;

	info!(plays = plays.len(), skipped = skipped.len(), lineup_moves = moves, "Reconstructed game");

	Ok(GameReport {
		game_id: input.game_id.clone(),
		plays,
		box_lines,
		skipped,
	})
}

/// Rebuilds many games in parallel. Results come back in input order.
#[must_use]
pub fn reconstruct_season(games: &[GameInput], config: &SeasonConfig) -> Vec<Result<GameReport, GameError>> {
	games.par_iter().map(|game| reconstruct(game, config)).collect()
}

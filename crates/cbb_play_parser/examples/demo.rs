use cbb_play_parser::parsers::RawPlayRow;
use cbb_play_parser::schema::{RawBoxLine, RosterEntry};
use cbb_play_parser::{reconstruct, GameInput, SeasonConfig};
use tracing_subscriber::EnvFilter;

fn box_line(id: u32, side: &str, name: &str, minutes: &str) -> RawBoxLine {
	RawBoxLine {
		player_id: id.to_string(),
		side: side.to_string(),
		name: name.to_string(),
		minutes: minutes.to_string(),
		..RawBoxLine::default()
	}
}

fn sample_game() -> GameInput {
	let away_roster: Vec<RosterEntry> = ["Smith, John", "Jones, Mark", "Brown, Alex", "Davis, Chris", "Moore, Sam"]
		.iter()
		.zip(1..)
		.map(|(name, id)| RosterEntry::new(id, *name))
		.collect();
	let home_roster: Vec<RosterEntry> = ["Howell, Chris", "Cruz, Jesus", "Carlyle, Christian", "Baylor, Noah", "Reed, Paul", "Hill, Dan"]
		.iter()
		.zip(11..)
		.map(|(name, id)| RosterEntry::new(id, *name))
		.collect();

	let box_lines = away_roster
		.iter()
		.map(|entry| box_line(entry.id.0, "away", &entry.name, "40:00"))
		.chain(home_roster.iter().map(|entry| box_line(entry.id.0, "home", &entry.name, "33:20")))
		.collect();

	GameInput {
		game_id: "demo".to_string(),
		rows: vec![
			RawPlayRow::new(0, "20:00", "John Smith, jumpball won", "0-0", ""),
			RawPlayRow::new(0, "19:41", "John Smith, 2pt layup pointsinthepaint made", "2-0", ""),
			RawPlayRow::new(0, "19:41", "Mark Jones, assist", "2-0", ""),
			RawPlayRow::new(0, "19:20", "", "2-0", "CRUZ,JESUS missed Three Point Jumper"),
			RawPlayRow::new(0, "19:18", "Alex Brown, rebound defensive", "2-0", ""),
			RawPlayRow::new(0, "19:02", "", "2-0", "TEAM Auburn Timeout 30Sec"),
			RawPlayRow::new(0, "19:02", "", "2-0", "Noah Baylor, substitution in"),
			RawPlayRow::new(0, "19:02", "", "2-0", "Chris Howell, substitution out"),
			RawPlayRow::new(0, "18:40", "J. Smith, 3pt jumpshot made", "5-0", ""),
		],
		box_lines,
		away_roster,
		home_roster,
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_target(false).init();

	let config = SeasonConfig::new();
	let report = reconstruct(&sample_game(), &config)?;

	println!("\nReconstructed {} plays ({} skipped)\n", report.plays.len(), report.skipped.len());
	for record in report.play_records() {
		println!("{}", serde_json::to_string(&record)?);
	}

	Ok(())
}

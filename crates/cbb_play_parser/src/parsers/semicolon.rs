use crate::error::PlayParseError;
use crate::parsers::{Actor, ParsedCell};
use crate::schema::play::{
	Action, ArrowKind, FoulKind, FreeThrow, Rebound, Shot, ShotLength, ShotTechnique, Timeout, TimeoutCaller, TimeoutLength, TurnoverKind,
};

/// Offsets of the "N of M" digits after ", freethrow", as in ", freethrow 1of2".
const FREE_THROW_ATTEMPT_OFFSET: usize = 12;
const FREE_THROW_OF_OFFSET: usize = 15;

fn parse_arrow(text: &str) -> Result<ArrowKind, PlayParseError> {
	match text {
		s if s.contains(" heldball") => Ok(ArrowKind::HeldBall),
		s if s.contains(" blocktieup") => Ok(ArrowKind::BlockTieUp),
		s if s.contains(" lodgedball") => Ok(ArrowKind::LodgedBall),
		s if s.contains(" outofbounds") => Ok(ArrowKind::OutOfBounds),
		s => Err(PlayParseError::unknown_subtype("jump ball", s)),
	}
}

fn parse_timeout(text: &str) -> Result<(Actor, Timeout), PlayParseError> {
	let (actor, caller, length) = match text {
		s if s.contains(" commercial") => (Actor::Floor, TimeoutCaller::Floor, TimeoutLength::Media),
		s if s.contains(" full") => (Actor::Team, TimeoutCaller::Team, TimeoutLength::Full),
		s if s.contains(" short") => (Actor::Team, TimeoutCaller::Team, TimeoutLength::Short),
		s => return Err(PlayParseError::unknown_subtype("timeout", s)),
	};
	Ok((actor, Timeout { caller, length }))
}

fn parse_foul(text: &str) -> Result<FoulKind, PlayParseError> {
	// Compound kinds come before the plain "technical ..." kinds they contain.
	match text {
		s if s.contains(" personal") => Ok(FoulKind::Personal),
		s if s.contains(" offensive") => Ok(FoulKind::Offensive),
		s if s.contains("benchtechnical classa") => Ok(FoulKind::BenchTechnicalClassA),
		s if s.contains("coachtechnical classa") => Ok(FoulKind::CoachTechnicalClassA),
		s if s.contains("coachtechnical double") => Ok(FoulKind::DoubleCoachTechnical),
		s if s.contains("admintechnical classb") => Ok(FoulKind::AdminTechnicalClassB),
		s if s.contains("admintechnical coachclassb") => Ok(FoulKind::CoachAdminTechnicalClassB),
		s if s.contains("admintechnical benchclassb") => Ok(FoulKind::BenchAdminTechnicalClassB),
		s if s.contains("admintechnical administrative") => Ok(FoulKind::AdministrativeTechnical),
		s if s.contains("technical classa") => Ok(FoulKind::TechnicalClassA),
		s if s.contains("technical flagrant2") => Ok(FoulKind::TechnicalFlagrant2),
		s if s.contains("technical double") => Ok(FoulKind::DoubleTechnical),
		s if s.contains("technical contactdeadball") => Ok(FoulKind::DeadballContactTechnical),
		s => Err(PlayParseError::unknown_subtype("foul", s)),
	}
}

fn parse_turnover(text: &str) -> Result<TurnoverKind, PlayParseError> {
	match text {
		s if s.contains(" travel") => Ok(TurnoverKind::Travel),
		s if s.contains(" badpass") => Ok(TurnoverKind::BadPass),
		s if s.contains(" lostball") => Ok(TurnoverKind::LostBall),
		s if s.contains(" offensive") => Ok(TurnoverKind::OffensiveFoul),
		s if s.contains(" 3sec") => Ok(TurnoverKind::ThreeSeconds),
		s if s.contains(" shotclock") => Ok(TurnoverKind::ShotClock),
		s if s.contains(" dribbling") => Ok(TurnoverKind::DoubleDribble),
		s if s.contains(" 5sec") => Ok(TurnoverKind::FiveSeconds),
		s if s.contains(" 10sec") => Ok(TurnoverKind::TenSeconds),
		s if s.contains(" laneviolation") => Ok(TurnoverKind::LaneViolation),
		s if s.contains(" other") => Ok(TurnoverKind::Other),
		s => Err(PlayParseError::unknown_subtype("turnover", s)),
	}
}

fn parse_rebound(text: &str) -> Result<Rebound, PlayParseError> {
	let offensive = match text {
		s if s.contains(" offensive") => true,
		s if s.contains(" defensive") => false,
		s => return Err(PlayParseError::unknown_subtype("rebound", s)),
	};
	Ok(Rebound {
		offensive: Some(offensive),
		dead_ball: text.contains("deadball"),
	})
}

fn two_point_technique(text: &str) -> Result<ShotTechnique, PlayParseError> {
	match text {
		s if s.contains(" jumpshot ") => Ok(ShotTechnique::JumpShot),
		s if s.contains(" pullupjumpshot ") => Ok(ShotTechnique::PullUp),
		s if s.contains(" stepbackjumpshot ") => Ok(ShotTechnique::StepBack),
		s if s.contains(" turnaroundjumpshot ") => Ok(ShotTechnique::Turnaround),
		s if s.contains(" hookshot ") => Ok(ShotTechnique::Hook),
		s if s.contains(" layup ") => Ok(ShotTechnique::Layup),
		s if s.contains(" dunk ") => Ok(ShotTechnique::Dunk),
		s if s.contains(" drivinglayup ") => Ok(ShotTechnique::DrivingLayup),
		s if s.contains(" alleyoop ") => Ok(ShotTechnique::AlleyOop),
		s => Err(PlayParseError::unknown_subtype("shot", s)),
	}
}

fn three_point_technique(text: &str) -> Result<ShotTechnique, PlayParseError> {
	match text {
		s if s.contains(" jumpshot ") => Ok(ShotTechnique::JumpShot),
		s if s.contains(" pullupjumpshot ") => Ok(ShotTechnique::PullUp),
		s if s.contains(" turnaroundjumpshot ") => Ok(ShotTechnique::Turnaround),
		s if s.contains(" stepbackjumpshot ") => Ok(ShotTechnique::StepBack),
		s => Err(PlayParseError::unknown_subtype("shot", s)),
	}
}

fn shot(text: &str, length: ShotLength, technique: ShotTechnique) -> Shot {
	Shot {
		made: text.contains(" made"),
		length,
		technique,
		second_chance: Some(text.contains("2ndchance")),
		fast_break: Some(text.contains("fastbreak")),
		blocked: Some(text.contains("blocked")),
	}
}

fn digit_at(text: &str, index: usize) -> Option<u8> {
	text.as_bytes().get(index).filter(|byte| byte.is_ascii_digit()).map(|byte| byte - b'0')
}

fn parse_free_throw(text: &str) -> FreeThrow {
	let keyword = text.find(", freethrow").unwrap_or_default();
	FreeThrow {
		made: text.contains(" made"),
		attempt: digit_at(text, keyword + FREE_THROW_ATTEMPT_OFFSET),
		of: digit_at(text, keyword + FREE_THROW_OF_OFFSET),
	}
}

/// Parses a semicolon-dialect remainder such as ", 2pt layup made".
///
/// Period and game boundary markers yield `Ok(None)`.
pub fn parse_semicolon(actor: Actor, remainder: &str) -> Result<Option<ParsedCell>, PlayParseError> {
	let text = remainder.to_lowercase();

	let action = match text.as_str() {
		s if s.contains("period start") || s.contains("game start") => return Ok(None),
		s if s.contains("jumpball startperiod") => return Ok(None),
		s if s.contains("period end") || s.contains("game end") => return Ok(None),
		s if s.contains(", jumpball") && (s.contains(" won") || s.contains(" lost")) => Action::JumpBall { won: s.contains(" won") },
		s if s.contains(", substitution") => Action::Substitution { entering: s.contains(" in") },
		s if actor == Actor::Team && s.contains("jumpball") => Action::PossessionArrow(parse_arrow(s)?),
		s if s.contains("timeout ") => {
			let (caller, timeout) = parse_timeout(s)?;
			return Ok(Some(ParsedCell::new(caller, Action::Timeout(timeout))));
		}
		s if s.contains(", foulon") => Action::FoulReceived,
		s if s.contains(", foul") => Action::FoulCommitted(parse_foul(s)?),
		s if s.contains(", block") => Action::Block,
		s if s.contains(", assist") => Action::Assist,
		s if s.contains(", steal") => Action::Steal,
		s if s.contains(", turnover") => Action::Turnover(parse_turnover(s)?),
		s if s.contains(" rebound") => Action::Rebound(parse_rebound(s)?),
		s if s.contains(", 2pt") => {
			let length = if s.contains("pointsinthepaint") { ShotLength::ShortTwo } else { ShotLength::LongTwo };
			Action::Shot(shot(s, length, two_point_technique(s)?))
		}
		s if s.contains(", 3pt") => Action::Shot(shot(s, ShotLength::Three, three_point_technique(s)?)),
		s if s.contains(", freethrow") => Action::FreeThrow(parse_free_throw(s)),
		_ => return Err(PlayParseError::unknown_play_type(remainder)),
	};

	Ok(Some(ParsedCell::new(actor, action)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parsers::notation::classify;

	fn parse(text: &str) -> Result<Option<ParsedCell>, PlayParseError> {
		let classified = classify(text)?;
		parse_semicolon(classified.actor, &classified.remainder)
	}

	fn action(text: &str) -> Action {
		parse(text).expect("parseable").expect("not dropped").action
	}

	#[test]
	fn test_three_point_jumpshot() {
		let parsed = parse("J. Smith, 3pt jumpshot made").expect("parseable").expect("not dropped");
		assert_eq!(parsed.actor, Actor::Named("J. Smith".to_string()));
		assert_eq!(
			parsed.action,
			Action::Shot(Shot {
				made: true,
				length: ShotLength::Three,
				technique: ShotTechnique::JumpShot,
				second_chance: Some(false),
				fast_break: Some(false),
				blocked: Some(false),
			})
		);
	}

	#[test]
	fn test_two_point_shots() {
		let test_cases = vec![
			("Chris Howell, 2pt layup pointsinthepaint made", ShotLength::ShortTwo, ShotTechnique::Layup, true),
			("Chris Howell, 2pt jumpshot missed", ShotLength::LongTwo, ShotTechnique::JumpShot, false),
			("Chris Howell, 2pt drivinglayup pointsinthepaint made", ShotLength::ShortTwo, ShotTechnique::DrivingLayup, true),
			("Chris Howell, 2pt alleyoop pointsinthepaint made", ShotLength::ShortTwo, ShotTechnique::AlleyOop, true),
			("Chris Howell, 2pt turnaroundjumpshot missed", ShotLength::LongTwo, ShotTechnique::Turnaround, false),
		];

		for (input, length, technique, made) in test_cases {
			match action(input) {
				Action::Shot(shot) => {
					assert_eq!(shot.length, length, "Failed for input: {input}");
					assert_eq!(shot.technique, technique, "Failed for input: {input}");
					assert_eq!(shot.made, made, "Failed for input: {input}");
				}
				other => panic!("Expected shot for {input}, got {other:?}"),
			}
		}
	}

	#[test]
	fn test_shot_context_flags() {
		match action("Chris Howell, 2pt dunk 2ndchance fastbreak pointsinthepaint made") {
			Action::Shot(shot) => {
				assert_eq!(shot.second_chance, Some(true));
				assert_eq!(shot.fast_break, Some(true));
				assert_eq!(shot.blocked, Some(false));
			}
			other => panic!("Expected shot, got {other:?}"),
		}
	}

	#[test]
	fn test_semicolon_actions() {
		let test_cases = vec![
			("Chris Howell, jumpball won", Action::JumpBall { won: true }),
			("Chris Howell, jumpball lost", Action::JumpBall { won: false }),
			("Chris Howell, substitution in", Action::Substitution { entering: true }),
			("Chris Howell, substitution out", Action::Substitution { entering: false }),
			("Team, jumpball heldball", Action::PossessionArrow(ArrowKind::HeldBall)),
			("Team, jumpball outofbounds", Action::PossessionArrow(ArrowKind::OutOfBounds)),
			("Chris Howell, foulon", Action::FoulReceived),
			("Chris Howell, foul personal 2freethrow", Action::FoulCommitted(FoulKind::Personal)),
			("Chris Howell, foul coachTechnical classa", Action::FoulCommitted(FoulKind::CoachTechnicalClassA)),
			("Chris Howell, foul benchTechnical classa", Action::FoulCommitted(FoulKind::BenchTechnicalClassA)),
			("Chris Howell, foul technical classa", Action::FoulCommitted(FoulKind::TechnicalClassA)),
			("Chris Howell, foul coachTechnical double", Action::FoulCommitted(FoulKind::DoubleCoachTechnical)),
			("Chris Howell, foul adminTechnical coachclassb", Action::FoulCommitted(FoulKind::CoachAdminTechnicalClassB)),
			("Chris Howell, block", Action::Block),
			("Chris Howell, assist", Action::Assist),
			("Chris Howell, steal", Action::Steal),
			("Chris Howell, turnover badpass", Action::Turnover(TurnoverKind::BadPass)),
			("Chris Howell, turnover shotclock", Action::Turnover(TurnoverKind::ShotClock)),
			("Chris Howell, rebound defensive", Action::Rebound(Rebound { offensive: Some(false), dead_ball: false })),
			("Team, rebound offensive deadball", Action::Rebound(Rebound { offensive: Some(true), dead_ball: true })),
			(
				"Chris Howell, freethrow 2of2 fastbreak made",
				Action::FreeThrow(FreeThrow {
					made: true,
					attempt: Some(2),
					of: Some(2),
				}),
			),
		];

		for (input, expected) in test_cases {
			assert_eq!(action(input), expected, "Failed for input: {input}");
		}
	}

	#[test]
	fn test_semicolon_timeouts() {
		let test_cases = vec![
			("Team, timeout full", Actor::Team, TimeoutLength::Full),
			("Team, timeout short", Actor::Team, TimeoutLength::Short),
			("Team, timeout commercial", Actor::Floor, TimeoutLength::Media),
		];

		for (input, actor, length) in test_cases {
			let parsed = parse(input).expect("parseable").expect("not dropped");
			let caller = if actor == Actor::Floor { TimeoutCaller::Floor } else { TimeoutCaller::Team };
			assert_eq!(parsed.actor, actor, "Failed for input: {input}");
			assert_eq!(parsed.action, Action::Timeout(Timeout { caller, length }), "Failed for input: {input}");
		}
	}

	#[test]
	fn test_boundary_markers_are_dropped() {
		let dropped_cases = vec!["period start", "game start", "Team, jumpball startperiod", "period end", "game end"];

		for input in dropped_cases {
			assert_eq!(parse(input), Ok(None), "Expected drop for input: {input}");
		}
	}

	#[test]
	fn test_semicolon_errors() {
		let error_cases = vec![
			"Chris Howell, foul mystery",
			"Chris Howell, turnover juggling",
			"Chris Howell, rebound",
			"Chris Howell, 3pt layup made",
			"Team, jumpball wobbly",
			"Chris Howell, celebrates",
		];

		for input in error_cases {
			assert!(parse(input).is_err(), "Expected error for input: {input}");
		}
	}
}

pub mod config;
pub mod error;
pub mod game;
pub mod identity;
pub mod parsers;
pub mod schema;
pub mod tracking;

pub use config::SeasonConfig;
pub use error::{BoxScoreError, GameClockError, GameError, NotationError, PlayParseError, ReconcileError};
pub use game::{reconstruct, reconstruct_season, GameInput, GameReport, SkippedRow};

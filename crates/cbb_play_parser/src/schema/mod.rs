pub mod box_score;
pub mod game_clock;
pub mod play;
pub mod records;
pub mod roster;
pub mod teams;

pub use box_score::*;
pub use game_clock::*;
pub use play::*;
pub use records::*;
pub use roster::*;
pub use teams::*;

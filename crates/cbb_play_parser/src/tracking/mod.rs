pub mod lineup;
pub mod minutes;
pub mod shot_clock;

pub use lineup::*;
pub use minutes::*;
pub use shot_clock::*;

//! Per-game streak records.

mod record;
mod status;

pub use record::{GameStreak, StreakCounts};
pub use status::{ActivityWindow, StreakStatus};

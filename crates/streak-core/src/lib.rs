pub mod config;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod score;
pub mod share;
pub mod storage;
pub mod streak;

pub use config::Config;
pub use error::{Error, GameValidationError, Result, StreakValidationError};
pub use game::{Game, GameCatalog};
pub use leaderboard::{FriendResult, Leaderboard, LeaderboardRow};
pub use score::{DailyGameScore, ScoringModel, metric_label, points};
pub use share::{ParsedShare, parse_share};
pub use storage::StreakStore;
pub use streak::{ActivityWindow, GameStreak, StreakCounts, StreakStatus};

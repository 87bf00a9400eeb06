mod ranking;

pub use ranking::{FriendResult, Leaderboard, LeaderboardRow};

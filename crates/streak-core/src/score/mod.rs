//! Leaderboard scoring: raw daily results normalized into comparable points.

mod daily;
mod label;
mod model;
mod points;

pub use daily::DailyGameScore;
pub use label::metric_label;
pub use model::ScoringModel;
pub use points::points;

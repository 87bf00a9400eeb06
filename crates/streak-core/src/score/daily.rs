use serde::{Deserialize, Serialize};

use crate::score::{ScoringModel, points};

/// One player's result for one game on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawDailyGameScore")]
pub struct DailyGameScore {
    pub completed: bool,
    /// Attempts, hints, points or seconds, depending on the scoring model
    pub score: Option<i32>,
    pub max_attempts: u32,
}

impl DailyGameScore {
    /// `max_attempts` is raised to 1 if given as 0.
    pub fn new(completed: bool, score: Option<i32>, max_attempts: u32) -> Self {
        Self {
            completed,
            score,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn success(score: i32, max_attempts: u32) -> Self {
        Self::new(true, Some(score), max_attempts)
    }

    pub fn failed(max_attempts: u32) -> Self {
        Self::new(false, None, max_attempts)
    }

    pub fn points(&self, model: Option<ScoringModel>) -> u32 {
        points(self, model)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDailyGameScore {
    completed: bool,
    #[serde(default)]
    score: Option<i32>,
    #[serde(default)]
    max_attempts: u32,
}

impl From<RawDailyGameScore> for DailyGameScore {
    fn from(raw: RawDailyGameScore) -> Self {
        DailyGameScore::new(raw.completed, raw.score, raw.max_attempts)
    }
}

use tracing::debug;

use crate::config::limits::{LAST_TIME_BUCKET, MAX_POINTS, TIME_BUCKET_SECONDS};
use crate::score::{DailyGameScore, ScoringModel};

/// Normalize a daily result into a points value for ranking.
///
/// Higher points is better within the same game. Values sit roughly in a
/// `0..=7` band but carry no meaning across games. Never fails: missing or
/// malformed data degrades to a defined value, and the result never goes
/// below zero.
///
/// - Failed results always score 0.
/// - With no scoring model, attempts-based scoring is used, and a missing
///   raw score gives 0.
/// - Otherwise a missing raw score is read as 0.
pub fn points(score: &DailyGameScore, model: Option<ScoringModel>) -> u32 {
    if !score.completed {
        return 0;
    }

    let Some(model) = model else {
        debug!("Scoring model unavailable, falling back to attempts-based scoring");
        return match score.score {
            Some(raw) => clamp_to_u32(ceiling_points(i64::from(raw), score.max_attempts)),
            None => 0,
        };
    };

    let raw = i64::from(score.score.unwrap_or(0));
    let value = match model {
        ScoringModel::LowerAttempts | ScoringModel::LowerGuesses | ScoringModel::LowerHints => {
            ceiling_points(raw, score.max_attempts)
        }
        ScoringModel::HigherIsBetter => raw.clamp(0, MAX_POINTS),
        ScoringModel::LowerTimeSeconds => MAX_POINTS - time_bucket(raw),
    };

    clamp_to_u32(value)
}

/// `max_attempts - raw + 1`: one attempt against a 7-max game is 7 points.
fn ceiling_points(raw: i64, max_attempts: u32) -> i64 {
    i64::from(max_attempts) - raw + 1
}

/// 30-second bins: bin 0 is `[0, 30)`, bin 6 is `[180, inf)`.
fn time_bucket(seconds: i64) -> i64 {
    seconds
        .div_euclid(TIME_BUCKET_SECONDS)
        .clamp(0, LAST_TIME_BUCKET)
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

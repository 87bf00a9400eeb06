//! Configuration and scoring constants.
//!
//! This module contains:
//! - `Config` - user configuration loaded from a TOML file
//! - Constants shared by the scoring normalizer and label formatter

mod settings;

pub use settings::*;

/// Bounds of the normalized points band.
pub mod limits {
    /// Ceiling for points in the comparable band.
    ///
    /// Point-total games are capped here and time-based games start here.
    pub const MAX_POINTS: i64 = 7;

    /// Width (in seconds) of one elapsed-time bucket.
    pub const TIME_BUCKET_SECONDS: i64 = 30;

    /// Index of the last time bucket; anything slower collapses into it.
    pub const LAST_TIME_BUCKET: i64 = 6;

    /// Display labels for each time bucket, fastest first.
    pub const TIME_BUCKET_LABELS: [&str; 7] =
        ["<30s", "<1m", "<1m30", "<2m", "<2m30", "<3m", ">=3m"];
}

/// Defaults applied when the config file omits a value.
pub mod defaults {
    /// Days after the last play during which a streak still counts as active.
    pub const ACTIVE_WINDOW_DAYS: u32 = 1;

    /// Attempt ceiling used when a result does not state one.
    pub const MAX_ATTEMPTS: u32 = 6;

    /// File the streak store is persisted to.
    pub const DATA_FILE: &str = "streaks.json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_bucket_labels_cover_every_bucket() {
        assert_eq!(
            limits::TIME_BUCKET_LABELS.len() as i64,
            limits::LAST_TIME_BUCKET + 1
        );
        assert_eq!(limits::TIME_BUCKET_LABELS[0], "<30s");
        assert_eq!(limits::TIME_BUCKET_LABELS[6], ">=3m");
    }

    #[test]
    fn test_slowest_bucket_starts_at_three_minutes() {
        assert_eq!(limits::LAST_TIME_BUCKET * limits::TIME_BUCKET_SECONDS, 180);
    }
}

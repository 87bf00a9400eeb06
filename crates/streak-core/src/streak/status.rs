use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::config::defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "camelCase")]
pub enum StreakStatus {
    #[strum(serialize = "ACTIVE")]
    Active,
    #[strum(serialize = "INACTIVE")]
    Inactive,
    #[strum(serialize = "BROKEN")]
    Broken,
}

impl StreakStatus {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for StreakStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Days after the last play during which a streak still counts as active.
///
/// A window of 1 means "played today or yesterday".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityWindow {
    days: u32,
}

impl ActivityWindow {
    pub const fn days(days: u32) -> Self {
        Self { days }
    }

    pub fn len_days(&self) -> u32 {
        self.days
    }

    /// Plays dated after `today` count as inside the window.
    pub fn contains(&self, last_played: NaiveDate, today: NaiveDate) -> bool {
        (today - last_played).num_days() <= i64::from(self.days)
    }
}

impl Default for ActivityWindow {
    fn default() -> Self {
        Self::days(defaults::ACTIVE_WINDOW_DAYS)
    }
}

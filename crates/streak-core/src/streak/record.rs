use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::StreakValidationError;
use crate::game::Game;
use crate::score::DailyGameScore;
use crate::streak::{ActivityWindow, StreakStatus};

/// Counter fields of a [`GameStreak`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakCounts {
    pub current_streak: u32,
    pub max_streak: u32,
    pub total_games_played: u32,
    pub total_games_completed: u32,
}

/// Streak record for one game.
///
/// Immutable once built: updates produce a new record that replaces the old
/// one wholesale. Construction validates that completed games never exceed
/// games played and that the game name is not empty, and raises
/// `max_streak` to `current_streak` when it is lower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGameStreak")]
pub struct GameStreak {
    id: Uuid,
    game_id: Uuid,
    game_name: String,
    current_streak: u32,
    max_streak: u32,
    total_games_played: u32,
    total_games_completed: u32,
    last_played_date: Option<NaiveDate>,
    streak_start_date: Option<NaiveDate>,
}

impl GameStreak {
    pub fn new(
        id: Uuid,
        game_id: Uuid,
        game_name: impl Into<String>,
        counts: StreakCounts,
        last_played_date: Option<NaiveDate>,
        streak_start_date: Option<NaiveDate>,
    ) -> Result<Self, StreakValidationError> {
        let game_name = game_name.into();
        if game_name.trim().is_empty() {
            return Err(StreakValidationError::EmptyGameName);
        }
        if counts.total_games_completed > counts.total_games_played {
            return Err(StreakValidationError::CompletedExceedsPlayed {
                completed: counts.total_games_completed,
                played: counts.total_games_played,
            });
        }

        Ok(Self {
            id,
            game_id,
            game_name,
            current_streak: counts.current_streak,
            max_streak: counts.max_streak.max(counts.current_streak),
            total_games_played: counts.total_games_played,
            total_games_completed: counts.total_games_completed,
            last_played_date,
            streak_start_date,
        })
    }

    /// Fresh record for a game: zero counters and no dates.
    pub fn empty_for(game: &Game) -> Self {
        Self {
            id: Uuid::new_v4(),
            game_id: game.id(),
            game_name: game.name().to_string(),
            current_streak: 0,
            max_streak: 0,
            total_games_played: 0,
            total_games_completed: 0,
            last_played_date: None,
            streak_start_date: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    pub fn total_games_played(&self) -> u32 {
        self.total_games_played
    }

    pub fn total_games_completed(&self) -> u32 {
        self.total_games_completed
    }

    pub fn last_played_date(&self) -> Option<NaiveDate> {
        self.last_played_date
    }

    pub fn streak_start_date(&self) -> Option<NaiveDate> {
        self.streak_start_date
    }

    pub fn counts(&self) -> StreakCounts {
        StreakCounts {
            current_streak: self.current_streak,
            max_streak: self.max_streak,
            total_games_played: self.total_games_played,
            total_games_completed: self.total_games_completed,
        }
    }

    /// Completed / played, or 0 when nothing has been played.
    pub fn completion_rate(&self) -> f64 {
        if self.total_games_played == 0 {
            return 0.0;
        }
        f64::from(self.total_games_completed) / f64::from(self.total_games_played)
    }

    pub fn is_active_on(&self, today: NaiveDate, window: ActivityWindow) -> bool {
        self.last_played_date
            .is_some_and(|last| window.contains(last, today))
    }

    pub fn streak_status_on(&self, today: NaiveDate, window: ActivityWindow) -> StreakStatus {
        if self.current_streak == 0 {
            StreakStatus::Broken
        } else if self.is_active_on(today, window) {
            StreakStatus::Active
        } else {
            StreakStatus::Inactive
        }
    }

    /// Activity against the local date and the default window.
    pub fn is_active(&self) -> bool {
        self.is_active_on(Local::now().date_naive(), ActivityWindow::default())
    }

    pub fn streak_status(&self) -> StreakStatus {
        self.streak_status_on(Local::now().date_naive(), ActivityWindow::default())
    }

    /// Apply one day's result, returning the replacement record.
    ///
    /// A completed result on the day after the last play extends the streak.
    /// A repeat on the same day leaves a running streak alone. Any other
    /// completed result starts a new streak at 1, and a failure breaks it.
    /// Results dated before the last play only update the totals.
    pub fn record(&self, result: &DailyGameScore, played_on: NaiveDate) -> GameStreak {
        let mut next = self.clone();
        next.total_games_played = next.total_games_played.saturating_add(1);
        if result.completed {
            next.total_games_completed = next.total_games_completed.saturating_add(1);
        }

        if let Some(last) = self.last_played_date
            && played_on < last
        {
            debug!(
                "{}: result for {} is older than last play {}, updating totals only",
                self.game_name, played_on, last
            );
            return next;
        }

        if result.completed {
            let running = self.current_streak > 0;
            let same_day = self.last_played_date == Some(played_on);
            let next_day = self.last_played_date.and_then(|d| d.succ_opt()) == Some(played_on);

            if running && next_day {
                next.current_streak = self.current_streak.saturating_add(1);
            } else if !(running && same_day) {
                next.current_streak = 1;
                next.streak_start_date = Some(played_on);
            }
        } else {
            next.current_streak = 0;
            next.streak_start_date = None;
        }

        next.last_played_date = Some(played_on);
        next.max_streak = next.max_streak.max(next.current_streak);
        next
    }
}

/// Unvalidated wire form; deserialization routes through [`GameStreak::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGameStreak {
    id: Uuid,
    game_id: Uuid,
    game_name: String,
    #[serde(default)]
    current_streak: u32,
    #[serde(default)]
    max_streak: u32,
    #[serde(default)]
    total_games_played: u32,
    #[serde(default)]
    total_games_completed: u32,
    #[serde(default)]
    last_played_date: Option<NaiveDate>,
    #[serde(default)]
    streak_start_date: Option<NaiveDate>,
}

impl TryFrom<RawGameStreak> for GameStreak {
    type Error = StreakValidationError;

    fn try_from(raw: RawGameStreak) -> Result<Self, Self::Error> {
        GameStreak::new(
            raw.id,
            raw.game_id,
            raw.game_name,
            StreakCounts {
                current_streak: raw.current_streak,
                max_streak: raw.max_streak,
                total_games_played: raw.total_games_played,
                total_games_completed: raw.total_games_completed,
            },
            raw.last_played_date,
            raw.streak_start_date,
        )
    }
}

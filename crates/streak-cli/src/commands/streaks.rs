//! Streaks command implementation.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use serde::Serialize;
use streak_core::{ActivityWindow, GameStreak, StreakStatus, StreakStore};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StreakSummary<'a> {
    #[serde(flatten)]
    streak: &'a GameStreak,
    status: StreakStatus,
    completion_rate: f64,
}

pub fn run(data_file: &Path, window: ActivityWindow, json: bool) -> Result<()> {
    let store = StreakStore::load_or_default(data_file)?;
    let today = Local::now().date_naive();

    let mut streaks: Vec<&GameStreak> = store.iter().map(|(_, streak)| streak).collect();
    streaks.sort_by(|a, b| a.game_name().cmp(b.game_name()));

    if json {
        let summaries: Vec<StreakSummary<'_>> = streaks
            .iter()
            .map(|&streak| StreakSummary {
                streak,
                status: streak.streak_status_on(today, window),
                completion_rate: streak.completion_rate(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if streaks.is_empty() {
        println!("No streaks recorded yet");
        return Ok(());
    }

    for streak in streaks {
        let status = streak.streak_status_on(today, window);
        let status_text = format!("{:<8}", status.short_name());
        let status_text = match status {
            StreakStatus::Active => status_text.green().to_string(),
            StreakStatus::Inactive => status_text.yellow().to_string(),
            StreakStatus::Broken => status_text.red().to_string(),
        };

        let last_played = streak
            .last_played_date()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {} current {:>3}  best {:>3}  played {:>4}  solved {:>5.1}%  last {}",
            streak.game_name(),
            status_text,
            streak.current_streak(),
            streak.max_streak(),
            streak.total_games_played(),
            streak.completion_rate() * 100.0,
            last_played
        );
    }

    Ok(())
}

//! Parse command implementation.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use streak_core::{GameCatalog, StreakStore, metric_label, parse_share};

/// Parse a shared result, optionally recording it into `record_into`.
pub fn run(
    text: Option<String>,
    record_into: Option<&Path>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read share text from stdin")?;
            buf
        }
    };
    if text.trim().is_empty() {
        bail!("No share text given");
    }

    let catalog = GameCatalog::builtin();
    let share = parse_share(&text, &catalog)?;
    let model = share.game.scoring_model();
    let value = share.score.points(Some(model));

    match share.puzzle_number {
        Some(number) => println!("Game:   {} #{}", share.game.name(), number),
        None => println!("Game:   {}", share.game.name()),
    }
    if share.score.completed {
        println!("Result: solved ({})", metric_label(model, value));
    } else {
        println!("Result: not solved");
    }
    println!("Points: {}", value);

    if let Some(path) = record_into {
        let played_on = date.unwrap_or_else(|| Local::now().date_naive());
        let mut store = StreakStore::load_or_default(path)
            .with_context(|| format!("Failed to load streaks from {}", path.display()))?;
        let streak = store.record(&share.game, &share.score, played_on).clone();
        store.save(path)?;

        println!(
            "Streak: {} (best {}) as of {}",
            streak.current_streak(),
            streak.max_streak(),
            played_on
        );
    }

    Ok(())
}

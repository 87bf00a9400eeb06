//! Points and label commands.

use anyhow::Result;
use streak_core::{DailyGameScore, ScoringModel, metric_label, points};

pub fn run(
    model: Option<ScoringModel>,
    score: Option<i32>,
    max_attempts: u32,
    failed: bool,
) -> Result<()> {
    let result = DailyGameScore::new(!failed, score, max_attempts);
    let value = points(&result, model);
    let label = metric_label(model.unwrap_or(ScoringModel::LowerAttempts), value);

    match model {
        Some(model) => println!("{} points ({}, {})", value, label, model.describe()),
        None => println!("{} points ({}, attempts fallback)", value, label),
    }
    Ok(())
}

pub fn run_label(model: ScoringModel, points: u32) -> Result<()> {
    println!("{}", metric_label(model, points));
    Ok(())
}

//! Leaderboard command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use owo_colors::OwoColorize;
use streak_core::{FriendResult, GameCatalog, Leaderboard, ScoringModel};
use tracing::warn;

pub fn run(
    input: &Path,
    model: Option<ScoringModel>,
    game: Option<&str>,
    json: bool,
) -> Result<()> {
    let model = match game {
        Some(name) => {
            let catalog = GameCatalog::builtin();
            let game = catalog
                .find(name)
                .ok_or_else(|| anyhow!("Unknown game: {}", name))?;
            Some(game.scoring_model())
        }
        None => model,
    };
    if model.is_none() {
        warn!("No scoring model given, ranking by attempts");
    }

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let entries: Vec<FriendResult> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid leaderboard input in {}", input.display()))?;

    let board = Leaderboard::rank(model, &entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    if board.is_empty() {
        println!("No results to rank");
        return Ok(());
    }

    let width = board
        .rows
        .iter()
        .map(|row| row.player.chars().count())
        .max()
        .unwrap_or(0);
    for row in &board.rows {
        let line = format!(
            "{:>3}  {:<width$}  {:>3} pts  {}",
            row.rank,
            row.player,
            row.points,
            row.label,
            width = width
        );
        if row.rank == 1 {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}

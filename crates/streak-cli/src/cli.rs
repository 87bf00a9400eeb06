//! CLI argument definitions for streak.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use streak_core::ScoringModel;

#[derive(Parser)]
#[command(name = "streak")]
#[command(about = "Daily puzzle streak tracker", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "streak.toml", env = "STREAK_CONFIG")]
    pub config: PathBuf,

    /// Path to streak data file (overrides the config)
    #[arg(short, long, value_name = "FILE", env = "STREAK_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute leaderboard points for a raw score
    Points {
        /// Scoring model (attempts-based fallback when omitted)
        #[arg(short, long)]
        model: Option<ScoringModel>,
        /// Raw score: attempts, hints, points or seconds
        #[arg(short, long, allow_hyphen_values = true)]
        score: Option<i32>,
        /// Attempt ceiling (default from config)
        #[arg(long)]
        max_attempts: Option<u32>,
        /// The attempt was not completed
        #[arg(long)]
        failed: bool,
    },
    /// Render points as a display label
    Label {
        /// Scoring model
        #[arg(short, long)]
        model: ScoringModel,
        /// Points value
        #[arg(short, long)]
        points: u32,
    },
    /// Parse shared result text (reads stdin when TEXT is omitted)
    Parse {
        /// Shared result text
        text: Option<String>,
        /// Record the result into the streak data file
        #[arg(long)]
        record: bool,
        /// Day the result belongs to (default: today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    /// Rank friends' results for one game
    Leaderboard {
        /// JSON file with an array of {"player", "score"} entries
        #[arg(short, long)]
        input: PathBuf,
        /// Scoring model
        #[arg(short, long, conflicts_with = "game")]
        model: Option<ScoringModel>,
        /// Take the scoring model from a known game
        #[arg(short, long)]
        game: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show stored streaks
    Streaks {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export streak data to a file
    Export {
        /// Output file path (JSON)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Import streak data, keeping whichever record is newer
    Import {
        /// Input file path (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}

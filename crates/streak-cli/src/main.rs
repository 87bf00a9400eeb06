mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("streak=warn,streak_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = commands::load_config(&args.config);
    let data_file = args
        .data
        .unwrap_or_else(|| config.storage.data_file.clone());

    match args.command {
        Command::Points {
            model,
            score,
            max_attempts,
            failed,
        } => commands::points::run(
            model,
            score,
            max_attempts.unwrap_or_else(|| config.default_max_attempts()),
            failed,
        ),
        Command::Label { model, points } => commands::points::run_label(model, points),
        Command::Parse { text, record, date } => {
            commands::parse::run(text, record.then_some(data_file.as_path()), date)
        }
        Command::Leaderboard {
            input,
            model,
            game,
            json,
        } => commands::leaderboard::run(&input, model, game.as_deref(), json),
        Command::Streaks { json } => {
            commands::streaks::run(&data_file, config.activity_window(), json)
        }
        Command::Export { output } => commands::transfer::export(&data_file, &output),
        Command::Import { input } => commands::transfer::import(&data_file, &input),
    }
}

//! Export and import commands.

use std::path::Path;

use anyhow::{Context, Result};
use streak_core::StreakStore;

pub fn export(data_file: &Path, output: &Path) -> Result<()> {
    let store = StreakStore::load_or_default(data_file)
        .with_context(|| format!("Failed to load streaks from {}", data_file.display()))?;
    store.save(output)?;
    println!("Exported {} streaks to {}", store.len(), output.display());
    Ok(())
}

pub fn import(data_file: &Path, input: &Path) -> Result<()> {
    let incoming = StreakStore::load(input)
        .with_context(|| format!("Failed to read import file {}", input.display()))?;
    let total = incoming.len();

    let mut store = StreakStore::load_or_default(data_file)?;
    let taken = store.merge(incoming);
    store.save(data_file)?;

    println!(
        "Imported {} of {} streaks into {}",
        taken,
        total,
        data_file.display()
    );
    Ok(())
}

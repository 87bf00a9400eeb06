pub mod leaderboard;
pub mod parse;
pub mod points;
pub mod streaks;
pub mod transfer;

use std::path::Path;

use streak_core::Config;
use tracing::{debug, info, warn};

/// Load the config file, falling back to defaults.
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        debug!("No config at {:?}, using defaults", path);
        return Config::default();
    }

    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}

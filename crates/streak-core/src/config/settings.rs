use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::error::Result;
use crate::streak::ActivityWindow;

/// User configuration, read from a TOML file.
///
/// Every section and field is optional; missing values take the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub activity: ActivityConfig,
    pub scoring: ScoringConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    pub window_days: u32,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::ACTIVE_WINDOW_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub default_max_attempts: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_max_attempts: defaults::MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(defaults::DATA_FILE),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn activity_window(&self) -> ActivityWindow {
        ActivityWindow::days(self.activity.window_days)
    }

    /// Attempt ceiling, never below 1 even if the file says 0.
    pub fn default_max_attempts(&self) -> u32 {
        self.scoring.default_max_attempts.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.activity.window_days, 1);
        assert_eq!(config.scoring.default_max_attempts, 6);
        assert_eq!(config.storage.data_file, PathBuf::from("streaks.json"));
    }

    #[test]
    fn test_parse_partial_sections() {
        let config = Config::parse(
            r#"
[activity]
window_days = 3

[storage]
data_file = "/tmp/my-streaks.json"
"#,
        )
        .unwrap();

        assert_eq!(config.activity.window_days, 3);
        assert_eq!(config.scoring.default_max_attempts, 6);
        assert_eq!(
            config.storage.data_file,
            PathBuf::from("/tmp/my-streaks.json")
        );
    }

    #[test]
    fn test_zero_max_attempts_is_raised_to_one() {
        let config = Config::parse("[scoring]\ndefault_max_attempts = 0\n").unwrap();
        assert_eq!(config.default_max_attempts(), 1);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = Config::parse("[activity\nwindow_days = ").unwrap_err();
        assert!(matches!(err, Error::ConfigParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("streak.toml");
        fs::write(&path, "[activity]\nwindow_days = 2\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.activity_window(), ActivityWindow::days(2));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

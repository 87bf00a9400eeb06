use thiserror::Error;

/// Reasons a streak record is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreakValidationError {
    #[error("completed games ({completed}) exceed games played ({played})")]
    CompletedExceedsPlayed { completed: u32, played: u32 },

    #[error("game name must not be empty")]
    EmptyGameName,
}

/// Reasons a game definition is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameValidationError {
    #[error("game name must not be empty")]
    EmptyName,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid streak record: {0}")]
    InvalidStreak(#[from] StreakValidationError),

    #[error("Invalid game: {0}")]
    InvalidGame(#[from] GameValidationError),

    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("Failed to parse shared result: {0}")]
    ShareParse(String),

    #[error("Unsupported store version: expected {expected}, got {actual}")]
    UnsupportedStoreVersion { expected: u32, actual: u32 },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}

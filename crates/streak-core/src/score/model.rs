use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// How a game's raw score maps to "better".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ScoringModel {
    LowerAttempts,
    /// Same scoring as `LowerAttempts`; kept apart for game-type labelling.
    LowerGuesses,
    LowerHints,
    HigherIsBetter,
    LowerTimeSeconds,
}

impl ScoringModel {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Human-readable description of what wins.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::LowerAttempts => "Fewest attempts",
            Self::LowerGuesses => "Fewest guesses",
            Self::LowerHints => "Fewest hints",
            Self::HigherIsBetter => "Highest score",
            Self::LowerTimeSeconds => "Fastest time",
        }
    }

    /// True for models scored as `max_attempts - score + 1`.
    pub fn counts_down_from_ceiling(&self) -> bool {
        matches!(
            self,
            Self::LowerAttempts | Self::LowerGuesses | Self::LowerHints
        )
    }
}

impl std::fmt::Display for ScoringModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

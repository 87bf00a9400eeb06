use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GameValidationError;
use crate::score::ScoringModel;

/// A puzzle game that results and streaks refer to.
///
/// The name is never blank and `max_attempts` is at least 1, whichever way
/// the game was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGame")]
pub struct Game {
    id: Uuid,
    name: String,
    scoring_model: ScoringModel,
    max_attempts: u32,
}

impl Game {
    /// Create a game whose id is derived from its name.
    ///
    /// The same name always yields the same id, so stored streaks keep
    /// pointing at the right game between runs.
    pub fn new(
        name: impl Into<String>,
        scoring_model: ScoringModel,
        max_attempts: u32,
    ) -> Result<Self, GameValidationError> {
        let name = name.into();
        let id = Self::id_for_name(&name);
        Self::with_id(id, name, scoring_model, max_attempts)
    }

    fn with_id(
        id: Uuid,
        name: String,
        scoring_model: ScoringModel,
        max_attempts: u32,
    ) -> Result<Self, GameValidationError> {
        if name.trim().is_empty() {
            return Err(GameValidationError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            scoring_model,
            max_attempts: max_attempts.max(1),
        })
    }

    pub fn id_for_name(name: &str) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, name.trim().to_lowercase().as_bytes())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scoring_model(&self) -> ScoringModel {
        self.scoring_model
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGame {
    id: Option<Uuid>,
    name: String,
    scoring_model: ScoringModel,
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,
}

fn default_max_attempts() -> u32 {
    1
}

impl TryFrom<RawGame> for Game {
    type Error = GameValidationError;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        let id = raw.id.unwrap_or_else(|| Game::id_for_name(&raw.name));
        Game::with_id(id, raw.name, raw.scoring_model, raw.max_attempts)
    }
}

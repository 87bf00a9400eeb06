use crate::game::Game;
use crate::score::ScoringModel;

/// Known games, looked up by name or id.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    games: Vec<Game>,
}

impl GameCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the supported daily puzzles.
    pub fn builtin() -> Self {
        const BUILTIN: [(&str, ScoringModel, u32); 6] = [
            ("Wordle", ScoringModel::LowerGuesses, 6),
            ("Nerdle", ScoringModel::LowerGuesses, 6),
            ("Worldle", ScoringModel::LowerAttempts, 6),
            ("Strands", ScoringModel::LowerHints, 7),
            ("Mini", ScoringModel::LowerTimeSeconds, 1),
            ("Quiz", ScoringModel::HigherIsBetter, 1),
        ];

        let mut catalog = Self::new();
        for game in BUILTIN
            .into_iter()
            .filter_map(|(name, model, max_attempts)| Game::new(name, model, max_attempts).ok())
        {
            catalog.insert(game);
        }
        catalog
    }

    /// Add a game, replacing any existing game with the same id.
    pub fn insert(&mut self, game: Game) {
        match self.games.iter_mut().find(|g| g.id() == game.id()) {
            Some(existing) => *existing = game,
            None => self.games.push(game),
        }
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Game> {
        let name = name.trim();
        self.games.iter().find(|g| g.name().eq_ignore_ascii_case(name))
    }

    pub fn get(&self, id: &uuid::Uuid) -> Option<&Game> {
        self.games.iter().find(|g| g.id() == *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = GameCatalog::builtin();
        let wordle = catalog.find("WORDLE").unwrap();
        assert_eq!(wordle.scoring_model(), ScoringModel::LowerGuesses);
        assert_eq!(wordle.max_attempts(), 6);
        assert_eq!(catalog.get(&wordle.id()).unwrap().name(), "Wordle");
        assert!(catalog.find("Crossword").is_none());
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut catalog = GameCatalog::builtin();
        let before = catalog.len();
        catalog.insert(Game::new("wordle", ScoringModel::LowerGuesses, 5).unwrap());
        assert_eq!(catalog.len(), before);
        assert_eq!(catalog.find("Wordle").unwrap().max_attempts(), 5);
    }
}

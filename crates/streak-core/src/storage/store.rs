use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::game::Game;
use crate::score::DailyGameScore;
use crate::streak::GameStreak;

pub const STORE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    streaks: Vec<GameStreak>,
}

/// Streak records keyed by game id.
#[derive(Debug, Clone, Default)]
pub struct StreakStore {
    db: HashMap<Uuid, GameStreak>,
}

impl StreakStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let file: StoreFile = serde_json::from_str(&content)?;
        if file.version != STORE_VERSION {
            return Err(Error::UnsupportedStoreVersion {
                expected: STORE_VERSION,
                actual: file.version,
            });
        }

        let mut store = Self::new();
        for streak in file.streaks {
            if let Some(previous) = store.db.insert(streak.game_id(), streak) {
                warn!(
                    "Duplicate streak for {} in {:?}, keeping the later entry",
                    previous.game_name(),
                    path.as_ref()
                );
            }
        }

        info!("Loaded {} streaks from {:?}", store.len(), path.as_ref());
        Ok(store)
    }

    /// Load, treating a missing file as an empty store.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            info!("No streak file at {:?}, starting empty", path.as_ref());
            return Ok(Self::new());
        }
        Self::load(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut streaks: Vec<GameStreak> = self.db.values().cloned().collect();
        streaks.sort_by(|a, b| a.game_name().cmp(b.game_name()));

        let file = StoreFile {
            version: STORE_VERSION,
            streaks,
        };
        let content = serde_json::to_string_pretty(&file)?;

        // Write beside the target and rename over it, so a failed write
        // never truncates the existing file.
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;

        info!("Saved {} streaks to {:?}", self.len(), path);
        Ok(())
    }

    pub fn get(&self, game_id: &Uuid) -> Option<&GameStreak> {
        self.db.get(game_id)
    }

    /// Stored record for the game, or a fresh empty one.
    pub fn get_or_empty(&self, game: &Game) -> GameStreak {
        self.db
            .get(&game.id())
            .cloned()
            .unwrap_or_else(|| GameStreak::empty_for(game))
    }

    /// Replace the record for its game wholesale.
    pub fn replace(&mut self, streak: GameStreak) -> Option<GameStreak> {
        self.db.insert(streak.game_id(), streak)
    }

    /// Apply a result to the game's record and return the new record.
    pub fn record(
        &mut self,
        game: &Game,
        result: &DailyGameScore,
        played_on: NaiveDate,
    ) -> &GameStreak {
        let updated = self.get_or_empty(game).record(result, played_on);
        self.db.entry(game.id()).insert_entry(updated).into_mut()
    }

    pub fn remove(&mut self, game_id: &Uuid) -> Option<GameStreak> {
        self.db.remove(game_id)
    }

    /// Import records from another store.
    ///
    /// An incoming record replaces the existing one only when it was played
    /// more recently, or on the same day with more games played. Returns the
    /// number of records taken.
    pub fn merge(&mut self, other: StreakStore) -> usize {
        let mut taken = 0;
        for (game_id, incoming) in other.db {
            let newer = match self.db.get(&game_id) {
                Some(existing) => is_newer(&incoming, existing),
                None => true,
            };
            if newer {
                self.db.insert(game_id, incoming);
                taken += 1;
            } else {
                warn!("Skipping older import for {}", incoming.game_name());
            }
        }
        taken
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Uuid, &GameStreak)> {
        self.db.iter()
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

fn is_newer(incoming: &GameStreak, existing: &GameStreak) -> bool {
    (incoming.last_played_date(), incoming.total_games_played())
        > (existing.last_played_date(), existing.total_games_played())
}

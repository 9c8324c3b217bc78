//! File-backed persistence: the player registry, the single current
//! tournament, and the archived-tournament history.
//!
//! Loads tolerate a missing or corrupt file by returning empty data and
//! logging; saves report success as a bool and never panic. The core logic
//! never touches this module; callers pass plain data in and out. Every save
//! writes the whole value, so concurrent readers only ever observe complete
//! snapshots.

use crate::models::{Player, TournamentData, TournamentId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const PLAYERS_FILE: &str = "players.json";
const CURRENT_TOURNAMENT_FILE: &str = "current_tournament.json";
const HISTORY_FILE: &str = "history.json";

/// JSON store rooted at a data directory.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Data directory from env: DATA_DIR, defaulting to ./data.
    pub fn from_env() -> Self {
        let dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self::new(dir)
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.dir.join(file);
        if !path.exists() {
            return None;
        }
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Error reading {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&data) {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("Error parsing {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> bool {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            log::error!("Error creating data dir {}: {}", self.dir.display(), e);
            return false;
        }
        let path = self.dir.join(file);
        let data = match serde_json::to_string_pretty(value) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Error serializing {}: {}", path.display(), e);
                return false;
            }
        };
        match fs::write(&path, data) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error writing {}: {}", path.display(), e);
                false
            }
        }
    }

    pub fn load_players(&self) -> Vec<Player> {
        self.read(PLAYERS_FILE).unwrap_or_default()
    }

    pub fn save_players(&self, players: &[Player]) -> bool {
        self.write(PLAYERS_FILE, &players)
    }

    pub fn load_current(&self) -> Option<TournamentData> {
        self.read(CURRENT_TOURNAMENT_FILE)
    }

    /// Persist the current tournament; `None` clears it (removes the file).
    pub fn save_current(&self, tournament: Option<&TournamentData>) -> bool {
        match tournament {
            Some(t) => self.write(CURRENT_TOURNAMENT_FILE, t),
            None => {
                let path = self.dir.join(CURRENT_TOURNAMENT_FILE);
                if !path.exists() {
                    return true;
                }
                match fs::remove_file(&path) {
                    Ok(()) => true,
                    Err(e) => {
                        log::error!("Error removing {}: {}", path.display(), e);
                        false
                    }
                }
            }
        }
    }

    pub fn load_history(&self) -> Vec<TournamentData> {
        self.read(HISTORY_FILE).unwrap_or_default()
    }

    pub fn save_history(&self, history: &[TournamentData]) -> bool {
        self.write(HISTORY_FILE, &history)
    }

    /// Archive a tournament: stamp it finished, append it to the history and
    /// clear the current slot. On a failed history write the in-memory list
    /// is rolled back and the current slot is left in place.
    pub fn archive_tournament(
        &self,
        mut tournament: TournamentData,
        history: &mut Vec<TournamentData>,
    ) -> bool {
        tournament.finish();
        history.push(tournament);
        if !self.save_history(history) {
            history.pop();
            return false;
        }
        self.save_current(None)
    }

    /// Replace a history entry by id and persist the list.
    pub fn update_history_entry(
        &self,
        history: &mut Vec<TournamentData>,
        updated: TournamentData,
    ) -> bool {
        let Some(idx) = history.iter().position(|t| t.id == updated.id) else {
            return false;
        };
        let previous = std::mem::replace(&mut history[idx], updated);
        if !self.save_history(history) {
            history[idx] = previous;
            return false;
        }
        true
    }

    /// Delete a history entry by id and persist the list.
    pub fn delete_history_entry(
        &self,
        history: &mut Vec<TournamentData>,
        id: TournamentId,
    ) -> bool {
        let Some(idx) = history.iter().position(|t| t.id == id) else {
            return false;
        };
        let removed = history.remove(idx);
        if !self.save_history(history) {
            history.insert(idx, removed);
            return false;
        }
        true
    }
}

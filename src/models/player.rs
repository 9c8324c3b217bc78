//! Player registry entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in rosters, events and lookups).
pub type PlayerId = Uuid;

/// Fixed field position a player is registered with.
///
/// Goalkeeper matters beyond display: the goalkeeper ranking and the
/// positional leaderboards filter on it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// A registered player. Lives in the global registry, outside any tournament;
/// rosters and match events reference it by id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
        }
    }
}

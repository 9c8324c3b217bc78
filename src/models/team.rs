//! Team rosters inside a tournament.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team. Teams exist only inside a tournament.
pub type TeamId = Uuid;

/// Hard roster cap per team.
pub const MAX_ROSTER_SIZE: usize = 6;

/// A team: a name and an unordered set of player references.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub player_ids: Vec<PlayerId>,
}

impl Team {
    /// Create an empty team with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            player_ids: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.player_ids.len() >= MAX_ROSTER_SIZE
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.player_ids.contains(&player_id)
    }
}

//! Match, MatchEvent and the phase/event enums.

use crate::models::player::PlayerId;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Unique identifier for a match event.
pub type EventId = Uuid;

/// Kind of a recorded match event.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    Assist,
    Yellow,
    Red,
}

/// Phase of the tournament a match belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Group,
    Semi,
    Final,
}

/// One entry in a match's event ledger. Immutable once created; removable
/// only by id, never edited in place.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub id: EventId,
    pub kind: EventKind,
    pub team_id: TeamId,
    pub player_id: PlayerId,
}

impl MatchEvent {
    pub fn new(kind: EventKind, team_id: TeamId, player_id: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            team_id,
            player_id,
        }
    }
}

/// A single match between two teams.
///
/// `home_score`/`away_score` are a projection of the event ledger (count of
/// goal events per side) and are recomputed after every ledger mutation;
/// they are never set directly during play.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub round: u32,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub finished: bool,
    pub events: Vec<MatchEvent>,
    pub phase: Phase,
    #[serde(default)]
    pub is_playoff: bool,
    pub penalty_home: Option<u32>,
    pub penalty_away: Option<u32>,
    pub home_goalkeeper_id: Option<PlayerId>,
    pub away_goalkeeper_id: Option<PlayerId>,
}

impl GameMatch {
    /// A fresh group-stage fixture: zero scores, empty ledger, not finished.
    pub fn group(round: u32, home_team_id: TeamId, away_team_id: TeamId) -> Self {
        Self::fixture(round, home_team_id, away_team_id, Phase::Group, false)
    }

    /// A fresh playoff fixture (semi or final). Penalties start unset; a tied
    /// final cannot be closed until they are supplied.
    pub fn playoff(round: u32, home_team_id: TeamId, away_team_id: TeamId, phase: Phase) -> Self {
        Self::fixture(round, home_team_id, away_team_id, phase, true)
    }

    fn fixture(
        round: u32,
        home_team_id: TeamId,
        away_team_id: TeamId,
        phase: Phase,
        is_playoff: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            home_team_id,
            away_team_id,
            home_score: 0,
            away_score: 0,
            finished: false,
            events: Vec::new(),
            phase,
            is_playoff,
            penalty_home: None,
            penalty_away: None,
            home_goalkeeper_id: None,
            away_goalkeeper_id: None,
        }
    }

    /// Whether the given team plays in this match.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

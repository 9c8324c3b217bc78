//! TournamentData, Status and TournamentError.

use crate::models::game::{GameMatch, MatchId};
use crate::models::player::PlayerId;
use crate::models::team::{Team, TeamId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Only 4 or 5 teams are supported.
    InvalidTeamCount(u8),
    /// The team already has the maximum of 6 players.
    TeamFull(TeamId),
    /// The player is already on a team in this tournament.
    PlayerAlreadyAssigned(PlayerId),
    /// No team with this id in the tournament.
    TeamNotFound(TeamId),
    /// No match with this id in the tournament.
    MatchNotFound(MatchId),
    /// The event's team is neither side of the match.
    TeamNotInMatch,
    /// Every team needs at least one player before the tournament can start.
    EmptyTeam(TeamId),
    /// A tied final needs both penalty scores before it can be finished.
    PenaltiesRequired,
    /// A penalty shootout cannot end level.
    PenaltyShootoutTied,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::InvalidTeamCount(n) => {
                write!(f, "Unsupported team count {} (must be 4 or 5)", n)
            }
            TournamentError::TeamFull(_) => write!(f, "Team already has 6 players"),
            TournamentError::PlayerAlreadyAssigned(_) => {
                write!(f, "Player is already on a team in this tournament")
            }
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::TeamNotInMatch => write!(f, "Team does not play in this match"),
            TournamentError::EmptyTeam(_) => {
                write!(f, "Every team needs at least one player to start")
            }
            TournamentError::PenaltiesRequired => {
                write!(f, "A tied final requires penalty scores before closing")
            }
            TournamentError::PenaltyShootoutTied => {
                write!(f, "Penalty shootout cannot end level")
            }
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Lifecycle of a tournament: draft (teams being assembled), active (schedule
/// generated, matches being played), finished (archived, immutable).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Draft,
    Active,
    Finished,
}

/// Full state of one tournament: teams, matches, lifecycle and timestamps.
/// Timestamps are epoch milliseconds (UTC).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentData {
    pub id: TournamentId,
    pub name: String,
    pub status: Status,
    pub team_count: u8,
    pub teams: Vec<Team>,
    pub matches: Vec<GameMatch>,
    pub created_at: i64,
    pub finished_at: Option<i64>,
}

impl TournamentData {
    /// Create a new draft with `team_count` empty teams named "Team 1".."Team N".
    pub fn new_draft(name: impl Into<String>, team_count: u8) -> Result<Self, TournamentError> {
        if team_count != 4 && team_count != 5 {
            return Err(TournamentError::InvalidTeamCount(team_count));
        }
        let teams = (1..=team_count)
            .map(|i| Team::new(format!("Team {}", i)))
            .collect();
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: Status::Draft,
            team_count,
            teams,
            matches: Vec::new(),
            created_at: Utc::now().timestamp_millis(),
            finished_at: None,
        })
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn game_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn game_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Put a player on a team. Draft only; rejects a full roster and a player
    /// already assigned to any team of this tournament. State is untouched on
    /// rejection.
    pub fn assign_player(
        &mut self,
        team_id: TeamId,
        player_id: PlayerId,
    ) -> Result<(), TournamentError> {
        if self.status != Status::Draft {
            return Err(TournamentError::InvalidState);
        }
        if self.teams.iter().any(|t| t.has_player(player_id)) {
            return Err(TournamentError::PlayerAlreadyAssigned(player_id));
        }
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        if team.is_full() {
            return Err(TournamentError::TeamFull(team_id));
        }
        team.player_ids.push(player_id);
        Ok(())
    }

    /// Take a player off a team. Draft only.
    pub fn unassign_player(
        &mut self,
        team_id: TeamId,
        player_id: PlayerId,
    ) -> Result<(), TournamentError> {
        if self.status != Status::Draft {
            return Err(TournamentError::InvalidState);
        }
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        team.player_ids.retain(|&pid| pid != player_id);
        Ok(())
    }

    /// Remove a deleted player from every roster, but only while the
    /// tournament is still a draft. Active and finished tournaments keep the
    /// dangling reference; aggregation skips it and display shows a
    /// placeholder. Returns whether any roster changed.
    pub fn purge_player(&mut self, player_id: PlayerId) -> bool {
        if self.status != Status::Draft {
            return false;
        }
        let mut changed = false;
        for team in &mut self.teams {
            let before = team.player_ids.len();
            team.player_ids.retain(|&pid| pid != player_id);
            changed |= team.player_ids.len() != before;
        }
        changed
    }

    /// Stamp the tournament finished, for archiving.
    pub fn finish(&mut self) {
        self.status = Status::Finished;
        self.finished_at = Some(Utc::now().timestamp_millis());
    }
}

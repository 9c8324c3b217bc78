//! Group stage schedule: fixed pairing tables and tournament start.

use crate::models::{GameMatch, Status, TeamId, TournamentData, TournamentError};

/// Pairing table for 4 teams, by index into the ordered team list. Each team
/// plays every other exactly once (3 matches each). The order balances home
/// and away appearances across rounds, so the table is hardcoded rather than
/// computed from a generic round-robin.
pub const PAIRINGS_FOUR: [(usize, usize); 6] = [(0, 1), (3, 2), (2, 0), (1, 3), (0, 3), (1, 2)];

/// Pairing table for 5 teams. 10 matches, 4 per team, one team sits out each
/// round. Hardcoded for the same reason as [`PAIRINGS_FOUR`].
pub const PAIRINGS_FIVE: [(usize, usize); 10] = [
    (0, 1),
    (3, 2),
    (4, 0),
    (1, 3),
    (2, 4),
    (3, 0),
    (2, 1),
    (4, 3),
    (0, 2),
    (1, 4),
];

/// Build the full group schedule for an ordered list of 4 or 5 team ids.
/// Round numbers are 1-based table positions. Every fixture starts 0-0,
/// unfinished, with an empty event ledger.
pub fn generate_group_matches(team_ids: &[TeamId]) -> Result<Vec<GameMatch>, TournamentError> {
    let pairings: &[(usize, usize)] = match team_ids.len() {
        4 => &PAIRINGS_FOUR,
        5 => &PAIRINGS_FIVE,
        n => return Err(TournamentError::InvalidTeamCount(n as u8)),
    };
    Ok(pairings
        .iter()
        .enumerate()
        .map(|(idx, &(home, away))| {
            GameMatch::group(idx as u32 + 1, team_ids[home], team_ids[away])
        })
        .collect())
}

/// Start the tournament: generate the group schedule and flip Draft to Active.
/// Every team must have at least one player.
pub fn start_tournament(tournament: &mut TournamentData) -> Result<(), TournamentError> {
    if tournament.status != Status::Draft {
        return Err(TournamentError::InvalidState);
    }
    if let Some(empty) = tournament.teams.iter().find(|t| t.player_ids.is_empty()) {
        return Err(TournamentError::EmptyTeam(empty.id));
    }
    let team_ids: Vec<TeamId> = tournament.teams.iter().map(|t| t.id).collect();
    tournament.matches = generate_group_matches(&team_ids)?;
    tournament.status = Status::Active;
    Ok(())
}

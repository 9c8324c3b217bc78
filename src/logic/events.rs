//! Match event ledger: append/remove events and keep scores derived.

use crate::models::{
    EventId, EventKind, GameMatch, MatchEvent, MatchId, Phase, PlayerId, TeamId, TournamentData,
    TournamentError,
};

/// Recompute both scores from the ledger. Scores are a pure function of the
/// goal events and must never drift from them.
fn recompute_score(m: &mut GameMatch) {
    m.home_score = m
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Goal && e.team_id == m.home_team_id)
        .count() as u32;
    m.away_score = m
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Goal && e.team_id == m.away_team_id)
        .count() as u32;
}

/// Append an event to a match's ledger and refresh the derived scores.
/// The team must be one of the match's two sides. Returns the new event's id.
pub fn add_event(
    tournament: &mut TournamentData,
    match_id: MatchId,
    kind: EventKind,
    team_id: TeamId,
    player_id: PlayerId,
) -> Result<EventId, TournamentError> {
    let m = tournament
        .game_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if !m.involves(team_id) {
        return Err(TournamentError::TeamNotInMatch);
    }
    let event = MatchEvent::new(kind, team_id, player_id);
    let event_id = event.id;
    m.events.push(event);
    recompute_score(m);
    Ok(event_id)
}

/// Remove an event by id and refresh the derived scores. Removing an id that
/// is not in the ledger is a no-op.
pub fn remove_event(
    tournament: &mut TournamentData,
    match_id: MatchId,
    event_id: EventId,
) -> Result<(), TournamentError> {
    let m = tournament
        .game_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.events.retain(|e| e.id != event_id);
    recompute_score(m);
    Ok(())
}

/// Assign the goalkeepers for a match. Either side may be cleared with
/// `None`. The keeper need not be on the team's roster; guest keepers from
/// other teams are credited through the assignment-based ranking.
pub fn set_goalkeepers(
    tournament: &mut TournamentData,
    match_id: MatchId,
    home_goalkeeper_id: Option<PlayerId>,
    away_goalkeeper_id: Option<PlayerId>,
) -> Result<(), TournamentError> {
    let m = tournament
        .game_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.home_goalkeeper_id = home_goalkeeper_id;
    m.away_goalkeeper_id = away_goalkeeper_id;
    Ok(())
}

/// Record the penalty shootout result on a final. Not a computation: the
/// shootout happens off the event ledger and is entered directly.
pub fn set_penalties(
    tournament: &mut TournamentData,
    match_id: MatchId,
    penalty_home: u32,
    penalty_away: u32,
) -> Result<(), TournamentError> {
    let m = tournament
        .game_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.phase != Phase::Final {
        return Err(TournamentError::InvalidState);
    }
    m.penalty_home = Some(penalty_home);
    m.penalty_away = Some(penalty_away);
    Ok(())
}

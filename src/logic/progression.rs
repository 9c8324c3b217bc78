//! Phase progression: marking matches finished and generating playoff
//! fixtures once their prerequisites complete.

use crate::logic::standings::group_standings;
use crate::models::{GameMatch, MatchId, Phase, TeamId, TournamentData, TournamentError};

/// Round marker for semifinals, distinguishing them from group rounds.
pub const SEMI_ROUND: u32 = 100;
/// Round marker for the final.
pub const FINAL_ROUND: u32 = 200;

/// Mark a match finished and advance the tournament phase if that completed
/// a stage.
///
/// A final with a level score cannot be closed until both penalty scores are
/// recorded and unequal; the match stays unfinished and state is unchanged.
pub fn finish_match(
    tournament: &mut TournamentData,
    match_id: MatchId,
) -> Result<(), TournamentError> {
    let m = tournament
        .game_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.phase == Phase::Final && m.home_score == m.away_score {
        match (m.penalty_home, m.penalty_away) {
            (Some(h), Some(a)) if h != a => {}
            (Some(_), Some(_)) => return Err(TournamentError::PenaltyShootoutTied),
            _ => return Err(TournamentError::PenaltiesRequired),
        }
    }
    m.finished = true;
    advance_phase(tournament);
    Ok(())
}

/// Inspect the match list and emit the next phase's fixtures when due.
///
/// Idempotent: each transition is guarded by phase existence, so invoking
/// this any number of times after a stage completes creates the fixtures
/// exactly once.
pub fn advance_phase(tournament: &mut TournamentData) {
    let group_done = tournament
        .matches
        .iter()
        .filter(|m| m.phase == Phase::Group)
        .all(|m| m.finished);
    let has_group = tournament.matches.iter().any(|m| m.phase == Phase::Group);
    let has_semis = tournament.matches.iter().any(|m| m.phase == Phase::Semi);

    if has_group && group_done && !has_semis {
        generate_semis(tournament);
        return;
    }

    if has_semis {
        let semis: Vec<&GameMatch> = tournament
            .matches
            .iter()
            .filter(|m| m.phase == Phase::Semi)
            .collect();
        let all_finished = semis.iter().all(|m| m.finished);
        let has_final = tournament.matches.iter().any(|m| m.phase == Phase::Final);
        if all_finished && !has_final {
            generate_final(tournament);
        }
    }
}

/// Seed the semifinals from the group table: 1st (home) vs 4th, 2nd (home)
/// vs 3rd. The home side carries the draw advantage.
fn generate_semis(tournament: &mut TournamentData) {
    let standings = group_standings(tournament);
    if standings.len() < 4 {
        return;
    }
    let semi1 = GameMatch::playoff(
        SEMI_ROUND,
        standings[0].team_id,
        standings[3].team_id,
        Phase::Semi,
    );
    let semi2 = GameMatch::playoff(
        SEMI_ROUND,
        standings[1].team_id,
        standings[2].team_id,
        Phase::Semi,
    );
    tournament.matches.push(semi1);
    tournament.matches.push(semi2);
}

/// Pair the two semifinal winners. Home slot goes to the winner of the
/// 1st-vs-4th semi, away to the winner of 2nd-vs-3rd.
fn generate_final(tournament: &mut TournamentData) {
    let semis: Vec<&GameMatch> = tournament
        .matches
        .iter()
        .filter(|m| m.phase == Phase::Semi)
        .collect();
    if semis.len() < 2 {
        return;
    }
    let winner1 = semi_winner(semis[0]);
    let winner2 = semi_winner(semis[1]);
    let final_match = GameMatch::playoff(FINAL_ROUND, winner1, winner2, Phase::Final);
    tournament.matches.push(final_match);
}

/// Semifinals have no shootout: on a level score the home side (the higher
/// seed) advances.
fn semi_winner(m: &GameMatch) -> TeamId {
    if m.away_score > m.home_score {
        m.away_team_id
    } else {
        m.home_team_id
    }
}

/// Resolve the winner of a finished match, if it has one.
///
/// Group draws have no winner. A level semifinal goes to the home side. A
/// level final is decided by penalties; with penalties missing or level the
/// match is unresolved and yields `None`.
pub fn match_winner(m: &GameMatch) -> Option<TeamId> {
    if !m.finished {
        return None;
    }
    if m.home_score > m.away_score {
        return Some(m.home_team_id);
    }
    if m.away_score > m.home_score {
        return Some(m.away_team_id);
    }
    match m.phase {
        Phase::Semi => Some(m.home_team_id),
        Phase::Final => match (m.penalty_home, m.penalty_away) {
            (Some(h), Some(a)) if h > a => Some(m.home_team_id),
            (Some(h), Some(a)) if a > h => Some(m.away_team_id),
            _ => None,
        },
        Phase::Group => None,
    }
}

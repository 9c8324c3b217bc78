//! Group stage standings: the single source of ranking truth for seeding.

use crate::models::{Phase, TeamId, TournamentData};
use serde::Serialize;

/// One row of the group table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub name: String,
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i32,
}

impl TeamStanding {
    fn new(team_id: TeamId, name: String) -> Self {
        Self {
            team_id,
            name,
            points: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
        }
    }
}

/// Reduce the finished group-phase matches into a sorted points table.
/// Win 3/0, draw 1/1. Sort: points, wins, goal difference, goals for, all
/// descending; full ties keep team creation order (stable sort).
///
/// This exact chain seeds the playoff bracket, so it must not diverge from
/// the displayed table. Matches referencing an unknown team id are skipped.
pub fn group_standings(tournament: &TournamentData) -> Vec<TeamStanding> {
    let mut rows: Vec<TeamStanding> = tournament
        .teams
        .iter()
        .map(|t| TeamStanding::new(t.id, t.name.clone()))
        .collect();

    for m in &tournament.matches {
        if m.phase != Phase::Group || !m.finished {
            continue;
        }
        let home_idx = rows.iter().position(|r| r.team_id == m.home_team_id);
        let away_idx = rows.iter().position(|r| r.team_id == m.away_team_id);
        let (Some(hi), Some(ai)) = (home_idx, away_idx) else {
            continue;
        };

        rows[hi].goals_for += m.home_score;
        rows[hi].goals_against += m.away_score;
        rows[ai].goals_for += m.away_score;
        rows[ai].goals_against += m.home_score;

        if m.home_score > m.away_score {
            rows[hi].points += 3;
            rows[hi].wins += 1;
            rows[ai].losses += 1;
        } else if m.away_score > m.home_score {
            rows[ai].points += 3;
            rows[ai].wins += 1;
            rows[hi].losses += 1;
        } else {
            rows[hi].points += 1;
            rows[hi].draws += 1;
            rows[ai].points += 1;
            rows[ai].draws += 1;
        }
    }

    for row in &mut rows {
        row.goal_diff = row.goals_for as i32 - row.goals_against as i32;
    }

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(b.goal_diff.cmp(&a.goal_diff))
            .then(b.goals_for.cmp(&a.goals_for))
    });
    rows
}

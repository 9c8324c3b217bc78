//! Cross-tournament statistics: general and goalkeeper rankings, scorer and
//! assist leaderboards, champion tallies, and calendar-month bucketing.
//!
//! Every aggregation takes a tournament set (current only, or history plus
//! current) and returns empty rows for an empty set. Players with no
//! contribution simply do not appear.

use crate::logic::progression::match_winner;
use crate::models::{
    EventKind, GameMatch, Phase, Player, PlayerId, Position, Status, TournamentData,
};
use chrono::{TimeZone, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Accumulated match outcomes for one player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerTotals {
    pub player_id: PlayerId,
    pub points: u32,
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i32,
}

impl PlayerTotals {
    fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            points: 0,
            matches: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
        }
    }
}

/// Points and W/D/L for one side of a finished match.
struct Outcome {
    points: u32,
    win: u32,
    draw: u32,
    loss: u32,
}

/// Win 3/0, draw 1/1, from the home side's perspective plus the away side's.
fn outcomes(m: &GameMatch) -> (Outcome, Outcome) {
    if m.home_score > m.away_score {
        (
            Outcome { points: 3, win: 1, draw: 0, loss: 0 },
            Outcome { points: 0, win: 0, draw: 0, loss: 1 },
        )
    } else if m.away_score > m.home_score {
        (
            Outcome { points: 0, win: 0, draw: 0, loss: 1 },
            Outcome { points: 3, win: 1, draw: 0, loss: 0 },
        )
    } else {
        (
            Outcome { points: 1, win: 0, draw: 1, loss: 0 },
            Outcome { points: 1, win: 0, draw: 1, loss: 0 },
        )
    }
}

fn credit(
    stats: &mut HashMap<PlayerId, PlayerTotals>,
    player_id: PlayerId,
    outcome: &Outcome,
    goals_for: u32,
    goals_against: u32,
) {
    let s = stats
        .entry(player_id)
        .or_insert_with(|| PlayerTotals::new(player_id));
    s.points += outcome.points;
    s.matches += 1;
    s.wins += outcome.win;
    s.draws += outcome.draw;
    s.losses += outcome.loss;
    s.goals_for += goals_for;
    s.goals_against += goals_against;
}

/// Points desc, wins desc, goal difference desc, then fewer matches first
/// (rewarding efficiency); player id as the deterministic tail.
fn into_sorted_rows(stats: HashMap<PlayerId, PlayerTotals>) -> Vec<PlayerTotals> {
    let mut rows: Vec<PlayerTotals> = stats
        .into_values()
        .map(|mut s| {
            s.goal_diff = s.goals_for as i32 - s.goals_against as i32;
            s
        })
        .collect();
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(b.goal_diff.cmp(&a.goal_diff))
            .then(a.matches.cmp(&b.matches))
            .then(a.player_id.cmp(&b.player_id))
    });
    rows
}

/// General ranking, roster attribution: every player listed on a side's
/// roster receives that side's outcome for every finished match, once per
/// match, whether or not they actually played. Rows are restricted to
/// players still present in the registry; deleted players keep their
/// historical match records but drop out of the table.
pub fn general_ranking(tournaments: &[&TournamentData], registry: &[Player]) -> Vec<PlayerTotals> {
    let mut stats: HashMap<PlayerId, PlayerTotals> = HashMap::new();

    for t in tournaments {
        for m in &t.matches {
            if !m.finished {
                continue;
            }
            let (home, away) = outcomes(m);
            if let Some(team) = t.team(m.home_team_id) {
                for &pid in &team.player_ids {
                    credit(&mut stats, pid, &home, m.home_score, m.away_score);
                }
            }
            if let Some(team) = t.team(m.away_team_id) {
                for &pid in &team.player_ids {
                    credit(&mut stats, pid, &away, m.away_score, m.home_score);
                }
            }
        }
    }

    stats.retain(|pid, _| registry.iter().any(|p| p.id == *pid));
    into_sorted_rows(stats)
}

/// Goalkeeper ranking, assignment attribution: only the player assigned as a
/// side's goalkeeper is credited, independent of roster membership, so a
/// guest keeper from another team earns their own outcomes. Same points math
/// and sort as the general ranking. Not registry-filtered here; callers
/// narrow by registered position via [`filter_by_position`].
pub fn goalkeeper_ranking(tournaments: &[&TournamentData]) -> Vec<PlayerTotals> {
    let mut stats: HashMap<PlayerId, PlayerTotals> = HashMap::new();

    for t in tournaments {
        for m in &t.matches {
            if !m.finished {
                continue;
            }
            let (home, away) = outcomes(m);
            if let Some(pid) = m.home_goalkeeper_id {
                credit(&mut stats, pid, &home, m.home_score, m.away_score);
            }
            if let Some(pid) = m.away_goalkeeper_id {
                credit(&mut stats, pid, &away, m.away_score, m.home_score);
            }
        }
    }

    into_sorted_rows(stats)
}

/// Keep only rows whose player is registered with the given position.
/// Used for the monthly positional leaderboards and the top-goalkeepers list.
pub fn filter_by_position(
    rows: Vec<PlayerTotals>,
    registry: &[Player],
    position: Position,
) -> Vec<PlayerTotals> {
    rows.into_iter()
        .filter(|row| {
            registry
                .iter()
                .any(|p| p.id == row.player_id && p.position == position)
        })
        .collect()
}

/// One leaderboard row: an event count plus its share of the leader's count,
/// for proportional display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventLeader {
    pub player_id: PlayerId,
    pub count: u32,
    pub relative: f64,
}

fn event_leaders(tournaments: &[&TournamentData], kind: EventKind) -> Vec<EventLeader> {
    let mut counts: HashMap<PlayerId, u32> = HashMap::new();
    for t in tournaments {
        for m in &t.matches {
            for e in &m.events {
                if e.kind == kind {
                    *counts.entry(e.player_id).or_default() += 1;
                }
            }
        }
    }
    let max = counts.values().copied().max().unwrap_or(0).max(1);
    let mut rows: Vec<EventLeader> = counts
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(player_id, count)| EventLeader {
            player_id,
            count,
            relative: f64::from(count) / f64::from(max),
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then(a.player_id.cmp(&b.player_id)));
    rows
}

/// Goal counts per player across the tournament set, descending.
pub fn top_scorers(tournaments: &[&TournamentData]) -> Vec<EventLeader> {
    event_leaders(tournaments, EventKind::Goal)
}

/// Assist counts per player across the tournament set, descending.
pub fn top_assists(tournaments: &[&TournamentData]) -> Vec<EventLeader> {
    event_leaders(tournaments, EventKind::Assist)
}

/// Titles won by a player across the archive.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ChampionRow {
    pub player_id: PlayerId,
    pub titles: u32,
}

/// Count titles over archived tournaments: find the finished final, resolve
/// its winner (score, or penalties on a tie) and credit one title to every
/// player on the winning roster at archive time. A final that cannot be
/// resolved contributes nothing. Zero-title players are excluded.
pub fn champion_tally(history: &[TournamentData]) -> Vec<ChampionRow> {
    let mut titles: HashMap<PlayerId, u32> = HashMap::new();

    for t in history {
        if t.status != Status::Finished {
            continue;
        }
        let Some(final_match) = t
            .matches
            .iter()
            .find(|m| m.phase == Phase::Final && m.finished)
        else {
            continue;
        };
        let Some(winner_id) = match_winner(final_match) else {
            continue;
        };
        if let Some(team) = t.team(winner_id) {
            for &pid in &team.player_ids {
                *titles.entry(pid).or_default() += 1;
            }
        }
    }

    let mut rows: Vec<ChampionRow> = titles
        .into_iter()
        .map(|(player_id, titles)| ChampionRow { player_id, titles })
        .collect();
    rows.sort_by(|a, b| b.titles.cmp(&a.titles).then(a.player_id.cmp(&b.player_id)));
    rows
}

/// Per-player event counts within a single tournament, for the archive
/// summary view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerEventTotals {
    pub player_id: PlayerId,
    pub goals: u32,
    pub assists: u32,
    pub yellow: u32,
    pub red: u32,
}

/// Flat event counts for one tournament: goals, assists and cards per player.
pub fn tournament_event_totals(tournament: &TournamentData) -> Vec<PlayerEventTotals> {
    let mut stats: HashMap<PlayerId, PlayerEventTotals> = HashMap::new();
    for m in &tournament.matches {
        for e in &m.events {
            let s = stats.entry(e.player_id).or_insert(PlayerEventTotals {
                player_id: e.player_id,
                goals: 0,
                assists: 0,
                yellow: 0,
                red: 0,
            });
            match e.kind {
                EventKind::Goal => s.goals += 1,
                EventKind::Assist => s.assists += 1,
                EventKind::Yellow => s.yellow += 1,
                EventKind::Red => s.red += 1,
            }
        }
    }
    let mut rows: Vec<PlayerEventTotals> = stats.into_values().collect();
    rows.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then(b.assists.cmp(&a.assists))
            .then(a.player_id.cmp(&b.player_id))
    });
    rows
}

fn format_month(epoch_ms: i64) -> String {
    match Utc.timestamp_millis_opt(epoch_ms) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m").to_string(),
        _ => String::from("unknown"),
    }
}

/// Calendar-month bucket of a tournament: the month it finished, falling
/// back to the month it was created for tournaments never archived.
pub fn month_key(tournament: &TournamentData) -> String {
    format_month(tournament.finished_at.unwrap_or(tournament.created_at))
}

/// The current calendar month, `YYYY-MM`.
pub fn current_month_key() -> String {
    Utc::now().format("%Y-%m").to_string()
}

/// Narrow a tournament set to one calendar month.
pub fn filter_by_month<'a>(
    tournaments: &[&'a TournamentData],
    month: &str,
) -> Vec<&'a TournamentData> {
    tournaments
        .iter()
        .copied()
        .filter(|t| month_key(t) == month)
        .collect()
}

/// Months selectable in the leaderboards: the current month plus every month
/// present in the archive, newest first.
pub fn available_months(history: &[TournamentData]) -> Vec<String> {
    let mut months: Vec<String> = history.iter().map(month_key).collect();
    months.push(current_month_key());
    months.sort();
    months.dedup();
    months.reverse();
    months
}

//! Integration tests for the cross-tournament statistics: general and
//! goalkeeper rankings, leaderboards, champions and month buckets.

use chrono::{TimeZone, Utc};
use racha_league_web::{
    add_event, available_months, champion_tally, filter_by_month, filter_by_position,
    finish_match, general_ranking, goalkeeper_ranking, month_key, set_goalkeepers,
    set_penalties, start_tournament, top_assists, top_scorers, EventKind, GameMatch, MatchId,
    Phase, Player, PlayerId, Position, TeamId, TournamentData, FINAL_ROUND,
};

/// A started 4-team tournament with `star` on Team 1 and one filler player
/// per team. Fillers are appended to `registry`.
fn make_tournament(registry: &mut Vec<Player>, star: &Player) -> TournamentData {
    let mut t = TournamentData::new_draft("Test Cup", 4).unwrap();
    let team_ids: Vec<TeamId> = t.teams.iter().map(|tm| tm.id).collect();
    t.assign_player(team_ids[0], star.id).unwrap();
    for (i, &tid) in team_ids.iter().enumerate() {
        let p = Player::new(format!("Filler {}", i + 1), Position::Defender);
        t.assign_player(tid, p.id).unwrap();
        registry.push(p);
    }
    start_tournament(&mut t).unwrap();
    t
}

fn play(t: &mut TournamentData, match_id: MatchId, home_goals: u32, away_goals: u32) {
    let m = t.game_match(match_id).unwrap();
    let (home_team, away_team) = (m.home_team_id, m.away_team_id);
    let home_scorer = t.team(home_team).unwrap().player_ids[0];
    let away_scorer = t.team(away_team).unwrap().player_ids[0];
    for _ in 0..home_goals {
        add_event(t, match_id, EventKind::Goal, home_team, home_scorer).unwrap();
    }
    for _ in 0..away_goals {
        add_event(t, match_id, EventKind::Goal, away_team, away_scorer).unwrap();
    }
    finish_match(t, match_id).unwrap();
}

fn row<'a>(
    rows: &'a [racha_league_web::PlayerTotals],
    id: PlayerId,
) -> &'a racha_league_web::PlayerTotals {
    rows.iter().find(|r| r.player_id == id).unwrap()
}

#[test]
fn general_ranking_accumulates_across_tournaments() {
    let star = Player::new("Star", Position::Forward);
    let mut registry = vec![star.clone()];

    // Star's team wins one match 2-0, draws one 1-1 and loses one 0-2,
    // spread over two archived tournaments and the current one.
    let mut t1 = make_tournament(&mut registry, &star);
    let first = t1.matches[0].id;
    play(&mut t1, first, 2, 0);
    t1.finish();

    let mut t2 = make_tournament(&mut registry, &star);
    let first = t2.matches[0].id;
    play(&mut t2, first, 1, 1);
    t2.finish();

    let mut t3 = make_tournament(&mut registry, &star);
    let first = t3.matches[0].id;
    play(&mut t3, first, 0, 2);

    let rows = general_ranking(&[&t1, &t2, &t3], &registry);
    let s = row(&rows, star.id);
    assert_eq!(s.points, 4);
    assert_eq!(s.matches, 3);
    assert_eq!((s.wins, s.draws, s.losses), (1, 1, 1));
    assert_eq!(s.goal_diff, 0);
}

#[test]
fn roster_attribution_credits_every_listed_player_once() {
    let star = Player::new("Star", Position::Forward);
    let mut registry = vec![star.clone()];
    let mut t = make_tournament(&mut registry, &star);
    let first = t.matches[0].id;
    play(&mut t, first, 3, 1);

    // The teammate never touched the ball but shares the outcome; the star
    // scored all three goals and gets no extra match credit for it.
    let teammate = t.teams[0].player_ids[1];
    let rows = general_ranking(&[&t], &registry);
    assert_eq!(row(&rows, star.id), row(&rows, teammate));
    assert_eq!(row(&rows, star.id).matches, 1);
}

#[test]
fn deleted_players_drop_from_the_table_but_not_from_the_record() {
    let star = Player::new("Star", Position::Forward);
    let mut registry = vec![star.clone()];
    let mut t = make_tournament(&mut registry, &star);
    let first = t.matches[0].id;
    play(&mut t, first, 1, 0);

    // Deleting the player from the registry hides the row.
    registry.retain(|p| p.id != star.id);
    let rows = general_ranking(&[&t], &registry);
    assert!(rows.iter().all(|r| r.player_id != star.id));

    // The match record still references them.
    let m = t.game_match(first).unwrap();
    assert!(m.events.iter().any(|e| e.player_id == star.id));
}

#[test]
fn goalkeeper_ranking_follows_match_assignments() {
    let star = Player::new("Star", Position::Forward);
    let keeper1 = Player::new("K1", Position::Goalkeeper);
    let keeper2 = Player::new("K2", Position::Defender);
    let mut registry = vec![star.clone(), keeper1.clone(), keeper2.clone()];
    let mut t = make_tournament(&mut registry, &star);
    let ids: Vec<MatchId> = t.matches.iter().map(|m| m.id).collect();

    // Neither keeper is on any roster: attribution is purely by assignment.
    set_goalkeepers(&mut t, ids[0], Some(keeper1.id), Some(keeper2.id)).unwrap();
    set_goalkeepers(&mut t, ids[1], None, Some(keeper1.id)).unwrap();
    set_goalkeepers(&mut t, ids[2], Some(keeper2.id), None).unwrap();
    set_goalkeepers(&mut t, ids[3], None, Some(keeper2.id)).unwrap();
    play(&mut t, ids[0], 1, 0);
    play(&mut t, ids[1], 1, 0);
    play(&mut t, ids[2], 2, 0);
    play(&mut t, ids[3], 1, 0);

    let rows = goalkeeper_ranking(&[&t]);
    assert_eq!(rows.len(), 2);

    // Both end on 3 points, one win, goal difference 0; K1 ranks first on
    // fewer matches played.
    let k1 = row(&rows, keeper1.id);
    let k2 = row(&rows, keeper2.id);
    assert_eq!((k1.points, k1.wins, k1.goal_diff, k1.matches), (3, 1, 0, 2));
    assert_eq!((k2.points, k2.wins, k2.goal_diff, k2.matches), (3, 1, 0, 3));
    assert_eq!(rows[0].player_id, keeper1.id);

    // The registered-position filter keeps only actual goalkeepers.
    let gks = filter_by_position(rows, &registry, Position::Goalkeeper);
    assert_eq!(gks.len(), 1);
    assert_eq!(gks[0].player_id, keeper1.id);
}

#[test]
fn scorer_and_assist_leaderboards_count_events() {
    let star = Player::new("Star", Position::Forward);
    let mut registry = vec![star.clone()];
    let mut t = make_tournament(&mut registry, &star);
    let m = t.matches[0].clone();
    let helper = t.team(m.home_team_id).unwrap().player_ids[1];
    let opponent = t.team(m.away_team_id).unwrap().player_ids[0];

    for _ in 0..3 {
        add_event(&mut t, m.id, EventKind::Goal, m.home_team_id, star.id).unwrap();
        add_event(&mut t, m.id, EventKind::Assist, m.home_team_id, helper).unwrap();
    }
    add_event(&mut t, m.id, EventKind::Goal, m.away_team_id, opponent).unwrap();

    let scorers = top_scorers(&[&t]);
    assert_eq!(scorers.len(), 2);
    assert_eq!((scorers[0].player_id, scorers[0].count), (star.id, 3));
    assert_eq!((scorers[1].player_id, scorers[1].count), (opponent, 1));
    assert!((scorers[0].relative - 1.0).abs() < f64::EPSILON);
    assert!((scorers[1].relative - 1.0 / 3.0).abs() < f64::EPSILON);

    let assists = top_assists(&[&t]);
    assert_eq!(assists.len(), 1);
    assert_eq!((assists[0].player_id, assists[0].count), (helper, 3));
}

#[test]
fn champion_tally_credits_the_winning_roster() {
    let star = Player::new("Star", Position::Forward);
    let mut registry = vec![star.clone()];

    // Final decided on score.
    let mut t1 = make_tournament(&mut registry, &star);
    let (winner, loser) = (t1.teams[0].id, t1.teams[1].id);
    t1.matches.push(GameMatch::playoff(FINAL_ROUND, winner, loser, Phase::Final));
    let final_id = t1.matches.last().unwrap().id;
    add_event(&mut t1, final_id, EventKind::Goal, winner, star.id).unwrap();
    finish_match(&mut t1, final_id).unwrap();
    t1.finish();

    // Final decided on penalties after a 0-0.
    let mut t2 = make_tournament(&mut registry, &star);
    let (home, away) = (t2.teams[0].id, t2.teams[2].id);
    t2.matches.push(GameMatch::playoff(FINAL_ROUND, home, away, Phase::Final));
    let final_id = t2.matches.last().unwrap().id;
    set_penalties(&mut t2, final_id, 4, 3).unwrap();
    finish_match(&mut t2, final_id).unwrap();
    t2.finish();

    // Never archived: contributes nothing even though a final exists.
    let mut t3 = make_tournament(&mut registry, &star);
    let (home, away) = (t3.teams[0].id, t3.teams[1].id);
    t3.matches.push(GameMatch::playoff(FINAL_ROUND, home, away, Phase::Final));
    let final_id = t3.matches.last().unwrap().id;
    add_event(&mut t3, final_id, EventKind::Goal, home, star.id).unwrap();
    finish_match(&mut t3, final_id).unwrap();

    let history = vec![t1.clone(), t2.clone(), t3];
    let tally = champion_tally(&history);

    // Star and the Team 1 fillers of both archived tournaments hold titles;
    // star won both.
    let star_row = tally.iter().find(|r| r.player_id == star.id).unwrap();
    assert_eq!(star_row.titles, 2);
    assert_eq!(tally[0].player_id, star.id);

    // Losing rosters are absent entirely.
    let loser_roster = &t1.team(loser).unwrap().player_ids;
    assert!(tally.iter().all(|r| !loser_roster.contains(&r.player_id)));
}

#[test]
fn month_buckets_prefer_the_archive_date() {
    let star = Player::new("Star", Position::Forward);
    let mut registry = vec![star.clone()];
    let mut t = make_tournament(&mut registry, &star);

    t.created_at = Utc
        .with_ymd_and_hms(2026, 3, 15, 18, 0, 0)
        .unwrap()
        .timestamp_millis();
    assert_eq!(month_key(&t), "2026-03");

    t.finished_at = Some(
        Utc.with_ymd_and_hms(2026, 4, 2, 12, 0, 0)
            .unwrap()
            .timestamp_millis(),
    );
    assert_eq!(month_key(&t), "2026-04");

    let set = [&t];
    assert_eq!(filter_by_month(&set, "2026-04").len(), 1);
    assert!(filter_by_month(&set, "2026-03").is_empty());

    let months = available_months(std::slice::from_ref(&t));
    assert!(months.contains(&"2026-04".to_string()));
    // Newest first, no duplicates.
    let mut sorted = months.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(months, sorted);
}

#[test]
fn empty_tournament_sets_yield_empty_rows() {
    let registry = vec![Player::new("Star", Position::Forward)];
    assert!(general_ranking(&[], &registry).is_empty());
    assert!(goalkeeper_ranking(&[]).is_empty());
    assert!(top_scorers(&[]).is_empty());
    assert!(top_assists(&[]).is_empty());
    assert!(champion_tally(&[]).is_empty());
}

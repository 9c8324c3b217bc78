//! Integration tests for phase progression: semifinal seeding, final
//! generation, idempotence and tie resolution.

use racha_league_web::{
    add_event, advance_phase, finish_match, match_winner, set_penalties, EventKind, MatchId,
    Phase, Player, Position, TeamId, TournamentData, TournamentError, FINAL_ROUND, SEMI_ROUND,
};

fn active_tournament() -> TournamentData {
    let mut t = TournamentData::new_draft("Test Cup", 4).unwrap();
    let team_ids: Vec<TeamId> = t.teams.iter().map(|tm| tm.id).collect();
    for (i, &tid) in team_ids.iter().enumerate() {
        let p = Player::new(format!("P{}", i + 1), Position::Midfielder);
        t.assign_player(tid, p.id).unwrap();
    }
    racha_league_web::start_tournament(&mut t).unwrap();
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

/// Play the group so that Team 1 finishes 1st, Team 3 2nd, Team 2 3rd and
/// Team 4 4th.
fn play_group(t: &mut TournamentData) {
    let ids: Vec<MatchId> = t.matches.iter().map(|m| m.id).collect();
    play(t, ids[0], 3, 0); // A 3-0 B
    play(t, ids[1], 0, 1); // D 0-1 C
    play(t, ids[2], 0, 1); // C 0-1 A
    play(t, ids[3], 1, 0); // B 1-0 D
    play(t, ids[4], 2, 0); // A 2-0 D
    play(t, ids[5], 0, 2); // B 0-2 C
}

fn semi_ids(t: &TournamentData) -> Vec<MatchId> {
    t.matches
        .iter()
        .filter(|m| m.phase == Phase::Semi)
        .map(|m| m.id)
        .collect()
}

#[test]
fn group_completion_seeds_semifinals() {
    let mut t = active_tournament();
    let team = |name: &str| t.teams.iter().find(|tm| tm.name == name).unwrap().id;
    let (a, b, c, d) = (team("Team 1"), team("Team 2"), team("Team 3"), team("Team 4"));

    play_group(&mut t);

    // A 9 pts, C 6, B 3, D 0. Semis: 1st (home) vs 4th, 2nd (home) vs 3rd.
    let semis: Vec<_> = t.matches.iter().filter(|m| m.phase == Phase::Semi).collect();
    assert_eq!(semis.len(), 2);
    assert_eq!((semis[0].home_team_id, semis[0].away_team_id), (a, d));
    assert_eq!((semis[1].home_team_id, semis[1].away_team_id), (c, b));
    for semi in &semis {
        assert_eq!(semi.round, SEMI_ROUND);
        assert!(semi.is_playoff);
        assert!(!semi.finished);
    }
}

#[test]
fn progression_is_idempotent() {
    let mut t = active_tournament();
    play_group(&mut t);
    assert_eq!(semi_ids(&t).len(), 2);

    // Re-running the controller must not duplicate fixtures.
    advance_phase(&mut t);
    advance_phase(&mut t);
    assert_eq!(semi_ids(&t).len(), 2);

    // Re-finishing an already finished group match is equally safe.
    let group_id = t.matches[0].id;
    finish_match(&mut t, group_id).unwrap();
    assert_eq!(semi_ids(&t).len(), 2);
    assert_eq!(t.matches.len(), 8);
}

#[test]
fn semifinal_winners_meet_in_the_final() {
    let mut t = active_tournament();
    play_group(&mut t);
    let semis = semi_ids(&t);

    play(&mut t, semis[0], 1, 0); // seed 1 wins
    play(&mut t, semis[1], 0, 2); // seed 3 beats seed 2

    let semi1_home = t.game_match(semis[0]).unwrap().home_team_id;
    let semi2_away = t.game_match(semis[1]).unwrap().away_team_id;

    let finals: Vec<_> = t.matches.iter().filter(|m| m.phase == Phase::Final).collect();
    assert_eq!(finals.len(), 1);
    assert_eq!(finals[0].home_team_id, semi1_home);
    assert_eq!(finals[0].away_team_id, semi2_away);
    assert_eq!(finals[0].round, FINAL_ROUND);
    assert!(finals[0].is_playoff);
    assert_eq!(finals[0].penalty_home, None);
    assert_eq!(finals[0].penalty_away, None);
}

#[test]
fn tied_semifinal_goes_to_the_home_side() {
    let mut t = active_tournament();
    play_group(&mut t);
    let semis = semi_ids(&t);

    // 2-2: no shootout, the higher seed (home) advances.
    play(&mut t, semis[0], 2, 2);
    play(&mut t, semis[1], 1, 0);

    let semi1 = t.game_match(semis[0]).unwrap().clone();
    assert_eq!(match_winner(&semi1), Some(semi1.home_team_id));
    assert_eq!(semi1.penalty_home, None);

    let final_match = t.matches.iter().find(|m| m.phase == Phase::Final).unwrap();
    assert_eq!(final_match.home_team_id, semi1.home_team_id);
}

#[test]
fn tied_final_requires_a_decisive_shootout() {
    let mut t = active_tournament();
    play_group(&mut t);
    let semis = semi_ids(&t);
    play(&mut t, semis[0], 1, 0);
    play(&mut t, semis[1], 1, 0);

    let final_match = t.matches.iter().find(|m| m.phase == Phase::Final).unwrap();
    let (final_id, home, away) = (final_match.id, final_match.home_team_id, final_match.away_team_id);
    let home_scorer = t.team(home).unwrap().player_ids[0];
    let away_scorer = t.team(away).unwrap().player_ids[0];
    add_event(&mut t, final_id, EventKind::Goal, home, home_scorer).unwrap();
    add_event(&mut t, final_id, EventKind::Goal, away, away_scorer).unwrap();

    // 1-1 with no shootout recorded: cannot close.
    assert_eq!(
        finish_match(&mut t, final_id),
        Err(TournamentError::PenaltiesRequired)
    );
    assert!(!t.game_match(final_id).unwrap().finished);

    // A level shootout is not a resolution either.
    set_penalties(&mut t, final_id, 5, 5).unwrap();
    assert_eq!(
        finish_match(&mut t, final_id),
        Err(TournamentError::PenaltyShootoutTied)
    );

    set_penalties(&mut t, final_id, 4, 2).unwrap();
    finish_match(&mut t, final_id).unwrap();

    let final_match = t.game_match(final_id).unwrap();
    assert!(final_match.finished);
    assert_eq!(match_winner(final_match), Some(home));

    // The final is terminal: no further fixtures appear.
    let count = t.matches.len();
    advance_phase(&mut t);
    assert_eq!(t.matches.len(), count);
}

#[test]
fn penalties_only_apply_to_finals() {
    let mut t = active_tournament();
    play_group(&mut t);
    let semis = semi_ids(&t);
    assert_eq!(
        set_penalties(&mut t, semis[0], 3, 1),
        Err(TournamentError::InvalidState)
    );

    let group_id = t.matches[0].id;
    assert_eq!(
        set_penalties(&mut t, group_id, 3, 1),
        Err(TournamentError::InvalidState)
    );
}

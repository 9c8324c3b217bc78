//! Tournament business logic: schedule, standings, progression, events, rankings.

mod events;
mod progression;
mod rankings;
mod schedule;
mod standings;

pub use events::{add_event, remove_event, set_goalkeepers, set_penalties};
pub use progression::{advance_phase, finish_match, match_winner, FINAL_ROUND, SEMI_ROUND};
pub use rankings::{
    available_months, champion_tally, current_month_key, filter_by_month, filter_by_position,
    general_ranking, goalkeeper_ranking, month_key, top_assists, top_scorers,
    tournament_event_totals, ChampionRow, EventLeader, PlayerEventTotals, PlayerTotals,
};
pub use schedule::{
    generate_group_matches, start_tournament, PAIRINGS_FIVE, PAIRINGS_FOUR,
};
pub use standings::{group_standings, TeamStanding};

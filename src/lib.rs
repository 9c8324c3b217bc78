//! Amateur league tracker: library with models, tournament logic and storage.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    add_event, advance_phase, available_months, champion_tally, current_month_key,
    filter_by_month, filter_by_position, finish_match, general_ranking, generate_group_matches,
    goalkeeper_ranking, group_standings, match_winner, month_key, remove_event, set_goalkeepers,
    set_penalties, start_tournament, top_assists, top_scorers, tournament_event_totals,
    ChampionRow, EventLeader, PlayerEventTotals, PlayerTotals, TeamStanding, FINAL_ROUND,
    PAIRINGS_FIVE, PAIRINGS_FOUR, SEMI_ROUND,
};
pub use models::{
    EventId, EventKind, GameMatch, MatchEvent, MatchId, Phase, Player, PlayerId, Position, Status,
    Team, TeamId, TournamentData, TournamentError, TournamentId, MAX_ROSTER_SIZE,
};
pub use storage::Store;

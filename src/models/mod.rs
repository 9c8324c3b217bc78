//! Data structures for the league tracker: players, teams, matches, tournaments.

mod game;
mod player;
mod team;
mod tournament;

pub use game::{EventId, EventKind, GameMatch, MatchEvent, MatchId, Phase};
pub use player::{Player, PlayerId, Position};
pub use team::{Team, TeamId, MAX_ROSTER_SIZE};
pub use tournament::{Status, TournamentData, TournamentError, TournamentId};

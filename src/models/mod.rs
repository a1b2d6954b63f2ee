//! Data structures for the Swiss tournament: players, matches, pairings, tournament state.

mod game;
mod pairing;
mod player;
mod tournament;

pub use game::{GameMatch, MatchHistory, MatchId, MatchResult, Opponent};
pub use pairing::{IntegrityWarning, Pairing, RoundPairings, Seat};
pub use player::{Player, PlayerId};
pub use tournament::{Round, Tournament, TournamentError, TournamentId, TournamentState};

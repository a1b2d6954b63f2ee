//! Swiss tournament web app: library with models, the standings/pairing core and round flow.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    assign_bye, compute_standings, generate_pairings, player_standings, recommended_rounds,
    set_pairing_winner, standings_csv, start_round, submit_round, swiss_pairings,
    update_opponent_wins,
};
pub use models::{
    GameMatch, IntegrityWarning, MatchHistory, MatchId, MatchResult, Opponent, Pairing, Player,
    PlayerId, Round, RoundPairings, Seat, Tournament, TournamentError, TournamentId,
    TournamentState,
};
pub use store::{StoreError, TournamentStore};

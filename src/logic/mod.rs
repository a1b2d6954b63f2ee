//! Tournament business logic: standings, pairing, byes and the round flow.

mod bye;
mod export;
mod pairing;
mod round;
mod standings;
mod swiss;

pub use bye::assign_bye;
pub use export::standings_csv;
pub use pairing::generate_pairings;
pub use round::{recommended_rounds, set_pairing_winner, start_round, submit_round};
pub use standings::{compute_standings, update_opponent_wins};
pub use swiss::{player_standings, swiss_pairings};

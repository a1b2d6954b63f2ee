//! Store-backed entry points: read one snapshot, refresh standings, pair.

use crate::logic::pairing::generate_pairings;
use crate::logic::standings::compute_standings;
use crate::models::{MatchHistory, Player, RoundPairings, TournamentError};
use crate::store::TournamentStore;

/// Current standings, best first, with `opponent_wins` refreshed.
pub fn player_standings<S: TournamentStore + ?Sized>(store: &S) -> Result<Vec<Player>, TournamentError> {
    let players = store.list_players()?;
    let matches = store.list_decisive_matches()?;
    Ok(compute_standings(players, &matches))
}

/// Pairings for the next round. Standings are always recomputed first.
pub fn swiss_pairings<S: TournamentStore + ?Sized>(store: &S) -> Result<RoundPairings, TournamentError> {
    let players = store.list_players()?;
    let matches = store.list_decisive_matches()?;
    let ranked = compute_standings(players, &matches);
    let history = MatchHistory::from_pairs(matches);
    generate_pairings(&ranked, &history)
}

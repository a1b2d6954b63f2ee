//! Narrow data-access contract between the pairing core and whatever holds players and matches.

use crate::models::{Opponent, Player, PlayerId, Tournament};

/// Failure reported by a store. The core does not look inside.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    ReadFailed(String),
    WriteFailed(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::ReadFailed(msg) => write!(f, "read failed: {}", msg),
            StoreError::WriteFailed(msg) => write!(f, "write failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Source of player and match snapshots.
///
/// Reads used for one pairing call must come from the same point in time;
/// writers must not run while a round is being paired.
pub trait TournamentStore {
    /// Players in registration order. `opponent_wins` may be stale.
    fn list_players(&self) -> Result<Vec<Player>, StoreError>;

    /// Decisive matches as (player_1, player_2), byes excluded.
    fn list_decisive_matches(&self) -> Result<Vec<(PlayerId, PlayerId)>, StoreError>;

    /// Record a result. Called by the round driver after pairing, never by the pairing core.
    fn record_match(&mut self, winner: PlayerId, loser: Opponent) -> Result<(), StoreError>;
}

impl TournamentStore for Tournament {
    fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.players.clone())
    }

    fn list_decisive_matches(&self) -> Result<Vec<(PlayerId, PlayerId)>, StoreError> {
        Ok(self.decisive_pairs())
    }

    fn record_match(&mut self, winner: PlayerId, loser: Opponent) -> Result<(), StoreError> {
        self.report_match(winner, loser)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}

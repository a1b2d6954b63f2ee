//! Player data structure and its running record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// A registered player and their running record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Decisive match wins. Byes are counted separately.
    pub wins: u32,
    /// Rounds credited without an opponent.
    pub byes: u32,
    /// Sum of the current wins of every opponent met in a decisive match.
    /// Derived; only trustworthy right after a standings refresh.
    pub opponent_wins: u32,
    /// Decisive matches played (byes excluded).
    pub matches_played: u32,
}

impl Player {
    /// Create a new player with the given name. Counters start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            wins: 0,
            byes: 0,
            opponent_wins: 0,
            matches_played: 0,
        }
    }

    /// Record a decisive win.
    pub fn add_win(&mut self) {
        self.wins += 1;
        self.matches_played += 1;
    }

    /// Record a decisive loss.
    pub fn add_loss(&mut self) {
        self.matches_played += 1;
    }

    /// Record a bye. Does not count as a match played.
    pub fn add_bye(&mut self) {
        self.byes += 1;
    }

    /// Zero every counter, keeping identity and name.
    pub fn reset_record(&mut self) {
        self.wins = 0;
        self.byes = 0;
        self.opponent_wins = 0;
        self.matches_played = 0;
    }

    /// Sort key for standings: wins, then opponent wins, then byes, then matches played.
    pub fn standing_key(&self) -> (u32, u32, u32, u32) {
        (self.wins, self.opponent_wins, self.byes, self.matches_played)
    }
}

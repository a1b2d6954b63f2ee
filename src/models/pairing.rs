//! Pairings for one round and the warnings raised while building them.

use crate::models::game::Opponent;
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// A player's slot in a pairing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
}

impl From<&Player> for Seat {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
        }
    }
}

/// One entry of the next round: two players, or one player with a bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Pairing {
    Match { player_1: Seat, player_2: Seat },
    Bye { player: Seat },
}

impl Pairing {
    pub fn first(&self) -> &Seat {
        match self {
            Pairing::Match { player_1, .. } => player_1,
            Pairing::Bye { player } => player,
        }
    }

    pub fn opponent(&self) -> Opponent {
        match self {
            Pairing::Match { player_2, .. } => Opponent::Player(player_2.id),
            Pairing::Bye { .. } => Opponent::Bye,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Pairing::Bye { .. })
    }

    /// Ids of every player seated in this pairing.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        match self {
            Pairing::Match { player_1, player_2 } => vec![player_1.id, player_2.id],
            Pairing::Bye { player } => vec![player.id],
        }
    }

    pub fn involves(&self, id: PlayerId) -> bool {
        self.player_ids().contains(&id)
    }
}

/// Non-fatal problems found while pairing a round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IntegrityWarning {
    /// Every remaining candidate had already played `player`, so a rematch was forced.
    ForcedRematch { player: PlayerId, opponent: PlayerId },
}

impl std::fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityWarning::ForcedRematch { player, opponent } => {
                write!(f, "Forced rematch between {} and {}", player, opponent)
            }
        }
    }
}

/// Output of the pairing engine: pairings in rank order, plus any warnings.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundPairings {
    pub pairings: Vec<Pairing>,
    pub warnings: Vec<IntegrityWarning>,
}

impl RoundPairings {
    /// The pairing holding the bye, if the field was odd.
    pub fn bye(&self) -> Option<&Pairing> {
        self.pairings.iter().find(|p| p.is_bye())
    }

    pub fn has_forced_rematch(&self) -> bool {
        !self.warnings.is_empty()
    }
}

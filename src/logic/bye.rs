//! Bye allocation for the odd player out.

use crate::logic::pairing::{pair_greedily, Draft};
use crate::models::{MatchHistory, Pairing, Player, Seat};

/// Give `player` the bye for this round.
///
/// When reported, a bye adds to the player's `byes` only: no win, no match played.
pub fn assign_bye(player: &Player) -> Pairing {
    log::debug!("Bye for {} ({})", player.name, player.id);
    Pairing::Bye {
        player: Seat::from(player),
    }
}

/// Move a repeat bye onto someone who has had fewer.
///
/// Returns `None` when the natural `leftover` already has the fewest byes. Otherwise tries
/// the players with the fewest byes from the bottom of the standings up, and keeps the first
/// draft that pairs everyone else without a rematch.
pub(crate) fn reserve_fresh_bye(ranked: &[Player], history: &MatchHistory, leftover: usize) -> Option<Draft> {
    let fewest = ranked.iter().map(|p| p.byes).min()?;
    if ranked.get(leftover)?.byes == fewest {
        return None;
    }
    let draft = (0..ranked.len())
        .rev()
        .filter(|&i| ranked[i].byes == fewest)
        .map(|i| pair_greedily(ranked, history, Some(i)))
        .find(|d| d.warnings.is_empty());
    if let Some(d) = &draft {
        if let Some(idx) = d.leftover {
            log::debug!(
                "{} already had a bye; giving it to {} instead",
                ranked[leftover].name,
                ranked[idx].name
            );
        }
    }
    draft
}

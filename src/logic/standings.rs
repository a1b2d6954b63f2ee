//! Standings: opponent-wins aggregate and the ranking order.

use crate::models::{Player, PlayerId};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Recompute `opponent_wins` for every player from the decisive matches.
///
/// Each match adds the current wins of each side to the other side's total.
/// Ids that are not in `players` are skipped.
pub fn update_opponent_wins(players: &mut [Player], matches: &[(PlayerId, PlayerId)]) {
    let wins: HashMap<PlayerId, u32> = players.iter().map(|p| (p.id, p.wins)).collect();
    let mut totals: HashMap<PlayerId, u32> = HashMap::with_capacity(players.len());

    for &(a, b) in matches {
        match (wins.get(&a), wins.get(&b)) {
            (Some(&wins_a), Some(&wins_b)) => {
                *totals.entry(a).or_insert(0) += wins_b;
                *totals.entry(b).or_insert(0) += wins_a;
            }
            _ => log::warn!("Skipping match {} vs {}: unknown player", a, b),
        }
    }

    for p in players.iter_mut() {
        p.opponent_wins = totals.get(&p.id).copied().unwrap_or(0);
    }
}

/// Order players by wins, opponent wins, byes and matches played, all descending.
///
/// The sort is stable, so full ties keep the order players were given in (registration order).
pub fn compute_standings(mut players: Vec<Player>, matches: &[(PlayerId, PlayerId)]) -> Vec<Player> {
    update_opponent_wins(&mut players, matches);
    players.sort_by_key(|p| Reverse(p.standing_key()));
    players
}

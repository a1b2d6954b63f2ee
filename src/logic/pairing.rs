//! Pairing engine: greedy matching down the ranked list, avoiding rematches.

use crate::logic::bye::{assign_bye, reserve_fresh_bye};
use crate::models::{IntegrityWarning, MatchHistory, Pairing, Player, RoundPairings, Seat, TournamentError};

/// Pairs built by one greedy pass, before the bye is handed out.
pub(crate) struct Draft {
    pub pairings: Vec<Pairing>,
    pub warnings: Vec<IntegrityWarning>,
    /// Index into the ranked list of the unpaired player, if any.
    pub leftover: Option<usize>,
}

/// Pair the ranked players for the next round.
///
/// 1. The highest-ranked unpaired player takes the first player below them they have not met.
/// 2. If they have met everyone left, they take the next player anyway and a
///    [`IntegrityWarning::ForcedRematch`] is returned with the pairings.
/// 3. A single leftover player gets the bye, unless they already had more byes than
///    someone else and reserving that player's bye still pairs the rest without a rematch.
///
/// `ranked` must be a fresh standings order (see `compute_standings`).
pub fn generate_pairings(
    ranked: &[Player],
    history: &MatchHistory,
) -> Result<RoundPairings, TournamentError> {
    if ranked.is_empty() {
        return Err(TournamentError::NoPlayersRegistered);
    }

    let mut draft = pair_greedily(ranked, history, None);
    if let Some(leftover) = draft.leftover {
        if let Some(better) = reserve_fresh_bye(ranked, history, leftover) {
            draft = better;
        }
    }

    for warning in &draft.warnings {
        log::warn!("{}: every remaining candidate was already played", warning);
    }

    let mut pairings = draft.pairings;
    if let Some(idx) = draft.leftover {
        pairings.push(assign_bye(&ranked[idx]));
    }
    Ok(RoundPairings {
        pairings,
        warnings: draft.warnings,
    })
}

/// One greedy pass over `ranked`. A `reserved` player is left out of the pairing and
/// comes back as the leftover.
pub(crate) fn pair_greedily(ranked: &[Player], history: &MatchHistory, reserved: Option<usize>) -> Draft {
    let mut paired = vec![false; ranked.len()];
    let mut remaining = ranked.len();
    if let Some(idx) = reserved {
        paired[idx] = true;
        remaining -= 1;
    }
    let mut draft = Draft {
        pairings: Vec::with_capacity(ranked.len() / 2),
        warnings: Vec::new(),
        leftover: None,
    };

    while remaining > 1 {
        let Some(head) = next_unpaired(&paired, 0) else {
            break;
        };
        // remaining > 1, so another unpaired player exists below head
        let Some(next) = next_unpaired(&paired, head + 1) else {
            break;
        };
        let p = &ranked[head];

        let fresh = (next..ranked.len())
            .filter(|&i| !paired[i])
            .find(|&i| !history.have_met(p.id, ranked[i].id));
        let partner = fresh.unwrap_or_else(|| {
            draft.warnings.push(IntegrityWarning::ForcedRematch {
                player: p.id,
                opponent: ranked[next].id,
            });
            next
        });

        paired[head] = true;
        paired[partner] = true;
        remaining -= 2;
        let q = &ranked[partner];
        log::debug!("Paired {} with {}", p.name, q.name);
        draft.pairings.push(Pairing::Match {
            player_1: Seat::from(p),
            player_2: Seat::from(q),
        });
    }

    draft.leftover = reserved.or_else(|| next_unpaired(&paired, 0));
    draft
}

fn next_unpaired(paired: &[bool], from: usize) -> Option<usize> {
    (from..paired.len()).find(|&i| !paired[i])
}

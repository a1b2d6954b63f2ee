//! Round flow for the in-memory tournament: pair, collect winners, submit.

use crate::logic::swiss::swiss_pairings;
use crate::models::{Opponent, Pairing, PlayerId, Round, Tournament, TournamentError, TournamentState};

/// Default round budget: enough rounds to separate a single undefeated player, ceil(log2 n), at least 1.
pub fn recommended_rounds(player_count: usize) -> u32 {
    let mut rounds = 0u32;
    while rounds < usize::BITS - 1 && (1usize << rounds) < player_count {
        rounds += 1;
    }
    rounds.max(1)
}

/// Start the next round (Setup or BetweenRounds -> Reporting).
///
/// Standings are recomputed from the recorded matches before pairing. Forced rematches
/// are kept on the round as warnings.
pub fn start_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    use TournamentState::*;
    if !matches!(tournament.state, Setup | BetweenRounds) {
        return Err(TournamentError::InvalidState);
    }
    if let Some(max) = tournament.max_rounds {
        if tournament.round >= max {
            return Err(TournamentError::InvalidState);
        }
    }

    let round = swiss_pairings(&*tournament)?;

    if tournament.max_rounds.is_none() {
        tournament.max_rounds = Some(recommended_rounds(tournament.players.len()));
    }
    tournament.round += 1;
    log::info!(
        "Round {} of tournament {}: {} pairing(s), {} forced rematch(es)",
        tournament.round,
        tournament.id,
        round.pairings.len(),
        round.warnings.len()
    );
    tournament.current_round = Some(Round {
        number: tournament.round,
        pairings: round.pairings,
        warnings: round.warnings,
        results: Default::default(),
    });
    tournament.state = Reporting;
    Ok(())
}

/// Select the winner of one decisive pairing in the current round.
pub fn set_pairing_winner(
    tournament: &mut Tournament,
    index: usize,
    winner: PlayerId,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Reporting {
        return Err(TournamentError::InvalidState);
    }
    let round = tournament
        .current_round
        .as_mut()
        .ok_or(TournamentError::InvalidState)?;
    let pairing = round
        .pairings
        .get(index)
        .ok_or(TournamentError::PairingNotFound(index))?;
    match pairing {
        Pairing::Bye { .. } => Err(TournamentError::InvalidState),
        Pairing::Match { .. } if !pairing.involves(winner) => Err(TournamentError::NotInPairing(winner)),
        Pairing::Match { .. } => {
            round.results.insert(index, winner);
            Ok(())
        }
    }
}

/// Record every result of the current round (Reporting -> BetweenRounds, or Completed after the last round).
///
/// All decisive pairings must have a winner. Byes are recorded automatically.
pub fn submit_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Reporting {
        return Err(TournamentError::InvalidState);
    }
    let round = tournament
        .current_round
        .as_ref()
        .ok_or(TournamentError::InvalidState)?;

    let mut outcomes: Vec<(PlayerId, Opponent)> = Vec::with_capacity(round.pairings.len());
    for (idx, pairing) in round.pairings.iter().enumerate() {
        match pairing {
            Pairing::Match { player_1, player_2 } => {
                let winner = *round
                    .results
                    .get(&idx)
                    .ok_or(TournamentError::IncompleteResults)?;
                let loser = if winner == player_1.id { player_2.id } else { player_1.id };
                outcomes.push((winner, Opponent::Player(loser)));
            }
            Pairing::Bye { player } => outcomes.push((player.id, Opponent::Bye)),
        }
    }

    for (winner, loser) in outcomes {
        tournament.report_match(winner, loser)?;
    }
    tournament.current_round = None;

    let done = tournament.max_rounds.map_or(false, |max| tournament.round >= max);
    tournament.state = if done {
        log::info!("Tournament {} completed after {} round(s)", tournament.id, tournament.round);
        TournamentState::Completed
    } else {
        TournamentState::BetweenRounds
    };
    Ok(())
}

//! Run a whole Swiss tournament with random results and print the final standings.
//! Run with: cargo run --bin simulate
//! Env: PLAYERS (default 32), ROUNDS (default ceil(log2 PLAYERS)), SEED (optional, for repeatable runs).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swiss_tournament_web::{
    player_standings, recommended_rounds, swiss_pairings, Opponent, Pairing, Tournament,
    TournamentError, TournamentStore,
};

fn env_or<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Pair one round and report a random winner for every pairing. Returns the number of forced rematches.
fn play_round<S: TournamentStore>(store: &mut S, rng: &mut StdRng) -> Result<usize, TournamentError> {
    let round = swiss_pairings(&*store)?;
    for warning in &round.warnings {
        log::warn!("{}", warning);
    }
    for pairing in &round.pairings {
        match pairing {
            Pairing::Match { player_1, player_2 } => {
                let (winner, loser) = if rng.gen_bool(0.5) {
                    (player_1, player_2)
                } else {
                    (player_2, player_1)
                };
                log::debug!("{} beats {}", winner.name, loser.name);
                store.record_match(winner.id, Opponent::Player(loser.id))?;
            }
            Pairing::Bye { player } => {
                log::debug!("{} has a bye", player.name);
                store.record_match(player.id, Opponent::Bye)?;
            }
        }
    }
    Ok(round.warnings.len())
}

fn main() -> Result<(), TournamentError> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let players: usize = env_or("PLAYERS").unwrap_or(32);
    let rounds: u32 = env_or("ROUNDS").unwrap_or_else(|| recommended_rounds(players));
    let mut rng = match env_or::<u64>("SEED") {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut tournament = Tournament::new(Some(rounds));
    for i in 1..=players {
        tournament.register_player(format!("Player{}", i))?;
    }
    log::info!("Simulating {} rounds with {} players", rounds, players);

    let mut forced = 0;
    for round in 1..=rounds {
        tournament.round = round;
        forced += play_round(&mut tournament, &mut rng)?;
    }
    if forced > 0 {
        log::warn!("{} forced rematch(es) during the tournament", forced);
    }

    println!("{:>4}  {:<12} {:>4} {:>4} {:>4} {:>4}", "#", "name", "W", "OW", "B", "M");
    for (idx, p) in player_standings(&tournament)?.iter().enumerate() {
        println!(
            "{:>4}  {:<12} {:>4} {:>4} {:>4} {:>4}",
            idx + 1,
            p.name,
            p.wins,
            p.opponent_wins,
            p.byes,
            p.matches_played
        );
    }
    Ok(())
}

//! Tournament (the in-memory player/match store) and TournamentState.

use crate::models::game::{GameMatch, Opponent};
use crate::models::pairing::{IntegrityWarning, Pairing};
use crate::models::player::{Player, PlayerId};
use crate::store::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Pairings were requested with no players registered.
    NoPlayersRegistered,
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Player not found in the tournament.
    PlayerNotFound(PlayerId),
    /// Player names must not be blank.
    EmptyPlayerName,
    /// A match was reported with the same player on both sides.
    SelfMatch(PlayerId),
    /// Not every decisive pairing of the round has a winner.
    IncompleteResults,
    /// No pairing at this index in the current round.
    PairingNotFound(usize),
    /// The chosen winner does not play in that pairing.
    NotInPairing(PlayerId),
    /// The backing store failed.
    Store(StoreError),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NoPlayersRegistered => write!(f, "No players registered"),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            TournamentError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::SelfMatch(_) => write!(f, "A player cannot play against themselves"),
            TournamentError::IncompleteResults => write!(f, "Not all pairings have a result"),
            TournamentError::PairingNotFound(idx) => write!(f, "No pairing #{} in this round", idx),
            TournamentError::NotInPairing(_) => write!(f, "Winner is not part of that pairing"),
            TournamentError::Store(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<StoreError> for TournamentError {
    fn from(e: StoreError) -> Self {
        TournamentError::Store(e)
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Registering players; no round played yet.
    #[default]
    Setup,
    /// Pairings issued for the current round; waiting for results.
    Reporting,
    /// Results of the last round recorded; standings are current.
    BetweenRounds,
    /// Round budget exhausted.
    Completed,
}

/// Pairings of the round in progress and the winners selected so far.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub pairings: Vec<Pairing>,
    pub warnings: Vec<IntegrityWarning>,
    /// Pairing index -> winner id (decisive pairings only).
    pub results: HashMap<usize, PlayerId>,
}

/// Full tournament state: players in registration order, match history and round progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Registered players, in registration order.
    pub players: Vec<Player>,
    /// Every reported match, byes included.
    pub matches: Vec<GameMatch>,
    pub state: TournamentState,
    /// Rounds started so far.
    pub round: u32,
    /// Round budget. Filled in when the first round starts if not set.
    pub max_rounds: Option<u32>,
    /// Budget asked for at creation; `max_rounds` goes back to it on reset.
    #[serde(default)]
    pub configured_max_rounds: Option<u32>,
    pub current_round: Option<Round>,
    pub created_at: DateTime<Utc>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Tournament {
    /// Create a new tournament in Setup state with no players.
    pub fn new(max_rounds: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            players: Vec::new(),
            matches: Vec::new(),
            state: TournamentState::Setup,
            round: 0,
            max_rounds,
            configured_max_rounds: max_rounds,
            current_round: None,
            created_at: Utc::now(),
        }
    }

    /// Create a tournament with initial players. Still in Setup until the first round starts.
    pub fn with_players(players: Vec<Player>, max_rounds: Option<u32>) -> Self {
        Self {
            players,
            ..Self::new(max_rounds)
        }
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    /// Register a player (only valid in Setup). Names need not be unique. Returns the new id.
    pub fn register_player(&mut self, name: impl Into<String>) -> Result<PlayerId, TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let player = Player::new(name_trimmed);
        let id = player.id;
        self.players.push(player);
        log::debug!("Registered player {} ({})", name_trimmed, id);
        Ok(id)
    }

    /// Remove a player by id (only valid in Setup).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Record one outcome and update the players' counters.
    ///
    /// Decisive: winner gets a win and a match played, loser a match played.
    /// Bye: winner gets a bye only.
    pub fn report_match(&mut self, winner: PlayerId, loser: Opponent) -> Result<(), TournamentError> {
        if self.get_player(winner).is_none() {
            return Err(TournamentError::PlayerNotFound(winner));
        }
        let round = self.round;
        let record = match loser {
            Opponent::Player(loser_id) => {
                if loser_id == winner {
                    return Err(TournamentError::SelfMatch(winner));
                }
                self.get_player_mut(loser_id)
                    .ok_or(TournamentError::PlayerNotFound(loser_id))?
                    .add_loss();
                self.get_player_mut(winner)
                    .ok_or(TournamentError::PlayerNotFound(winner))?
                    .add_win();
                GameMatch::decisive(winner, loser_id, round)
            }
            Opponent::Bye => {
                self.get_player_mut(winner)
                    .ok_or(TournamentError::PlayerNotFound(winner))?
                    .add_bye();
                GameMatch::bye(winner, round)
            }
        };
        self.matches.push(record);
        Ok(())
    }

    /// Decisive matches as (player_1, player_2) pairs, byes excluded.
    pub fn decisive_pairs(&self) -> Vec<(PlayerId, PlayerId)> {
        self.matches.iter().filter_map(GameMatch::decisive_pair).collect()
    }

    /// Delete every match and zero all player records. Back to Setup with the same players
    /// and the round budget the tournament was created with.
    pub fn delete_matches(&mut self) {
        self.matches.clear();
        for p in &mut self.players {
            p.reset_record();
        }
        self.round = 0;
        self.max_rounds = self.configured_max_rounds;
        self.current_round = None;
        self.state = TournamentState::Setup;
    }

    /// Delete every match and every player.
    pub fn delete_players(&mut self) {
        self.delete_matches();
        self.players.clear();
    }
}

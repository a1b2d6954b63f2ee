//! Recorded matches, the bye-aware opponent slot, and the decisive match history index.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// The second slot of a match or pairing: a real opponent, or nobody.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum Opponent {
    Player(PlayerId),
    Bye,
}

impl Opponent {
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            Opponent::Player(id) => Some(*id),
            Opponent::Bye => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Opponent::Bye)
    }
}

/// Outcome from `player_1`'s point of view. Matches are always recorded from the
/// winner's side, so `player_1` either won or had the bye.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Win,
    Bye,
}

/// A reported match. Never mutated once recorded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub player_1: PlayerId,
    pub player_2: Opponent,
    pub result: MatchResult,
    /// Round the match was played in (1-based, 0 when reported outside a round).
    pub round: u32,
    pub recorded_at: DateTime<Utc>,
}

impl GameMatch {
    /// A decisive match, recorded from the winner's side.
    pub fn decisive(winner: PlayerId, loser: PlayerId, round: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_1: winner,
            player_2: Opponent::Player(loser),
            result: MatchResult::Win,
            round,
            recorded_at: Utc::now(),
        }
    }

    pub fn bye(player: PlayerId, round: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_1: player,
            player_2: Opponent::Bye,
            result: MatchResult::Bye,
            round,
            recorded_at: Utc::now(),
        }
    }

    /// Both players of a decisive match, `None` for a bye.
    pub fn decisive_pair(&self) -> Option<(PlayerId, PlayerId)> {
        self.player_2.player_id().map(|other| (self.player_1, other))
    }

    /// Winner of the match. A bye is credited to `player_1`.
    pub fn winner(&self) -> PlayerId {
        self.player_1
    }

    /// Loser of a decisive match, `None` for a bye.
    pub fn loser(&self) -> Option<PlayerId> {
        self.player_2.player_id()
    }
}

/// Lookup of who has already met whom in a decisive match. Order of the two ids does not matter.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MatchHistory {
    meetings: HashMap<(PlayerId, PlayerId), u32>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (PlayerId, PlayerId)>,
    {
        let mut history = Self::new();
        for (a, b) in pairs {
            history.record(a, b);
        }
        history
    }

    pub fn record(&mut self, a: PlayerId, b: PlayerId) {
        *self.meetings.entry(key(a, b)).or_insert(0) += 1;
    }

    pub fn have_met(&self, a: PlayerId, b: PlayerId) -> bool {
        self.times_met(a, b) > 0
    }

    pub fn times_met(&self, a: PlayerId, b: PlayerId) -> u32 {
        self.meetings.get(&key(a, b)).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

fn key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

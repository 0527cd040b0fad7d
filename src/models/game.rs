//! A reported match result: exactly one winner and one loser.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A single recorded match. Append-only: never edited once stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub recorded_at: DateTime<Utc>,
}

impl GameMatch {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            winner,
            loser,
            recorded_at: Utc::now(),
        }
    }

    /// Whether `player` took part in this match.
    pub fn involves(&self, player: PlayerId) -> bool {
        self.winner == player || self.loser == player
    }
}

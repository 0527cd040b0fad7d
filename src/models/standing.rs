//! Derived views: standings rows and next-round pairings. Never stored.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// One row of the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

impl StandingEntry {
    /// A fresh row with no matches played.
    pub fn from_player(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            wins: 0,
            matches: 0,
        }
    }
}

/// Two players facing each other in the next round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub first: StandingEntry,
    pub second: StandingEntry,
    /// Set when no unplayed opponent could be found and the pair has met before.
    pub rematch: bool,
}

impl Pairing {
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.first.id, self.second.id)
    }
}

/// Full set of pairings for one round.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundPairings {
    pub pairs: Vec<Pairing>,
    /// Player sitting out with an automatic advancement (odd player counts only).
    pub bye: Option<StandingEntry>,
}

impl RoundPairings {
    /// Every player scheduled this round, pairs first, then the bye.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self
            .pairs
            .iter()
            .flat_map(|p| [p.first.id, p.second.id])
            .collect();
        ids.extend(self.bye.as_ref().map(|b| b.id));
        ids
    }
}

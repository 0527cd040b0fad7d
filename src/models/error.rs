//! Errors surfaced by the store and the ranking/pairing engine.

use crate::models::game::MatchId;
use crate::models::player::PlayerId;

/// Errors that can occur during tournament operations. None of them are retried.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A referenced player id is not registered.
    UnknownPlayer(PlayerId),
    /// Winner and loser are the same player.
    SelfMatch(PlayerId),
    /// Pairing needs at least 2 registered players.
    InsufficientPlayers { registered: usize },
    /// Odd player count while byes are disabled.
    OddPlayerCountUnhandled { registered: usize },
    /// Match history references a player that no longer exists.
    ReferentialIntegrity { match_id: MatchId, player: PlayerId },
    /// Player name is empty after trimming.
    InvalidPlayerName,
    /// CSV input or output failed.
    Csv(String),
    /// The store's lock was poisoned by a panicking writer.
    StoreUnavailable,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::UnknownPlayer(id) => write!(f, "Unknown player {}", id),
            TournamentError::SelfMatch(id) => {
                write!(f, "Player {} cannot be both winner and loser", id)
            }
            TournamentError::InsufficientPlayers { registered } => write!(
                f,
                "Need at least 2 players to generate pairings ({} registered)",
                registered
            ),
            TournamentError::OddPlayerCountUnhandled { registered } => write!(
                f,
                "Odd number of players ({}) and byes are disabled",
                registered
            ),
            TournamentError::ReferentialIntegrity { match_id, player } => write!(
                f,
                "Match {} references unregistered player {}",
                match_id, player
            ),
            TournamentError::InvalidPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::Csv(msg) => write!(f, "CSV error: {}", msg),
            TournamentError::StoreUnavailable => write!(f, "Store unavailable"),
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<csv::Error> for TournamentError {
    fn from(e: csv::Error) -> Self {
        TournamentError::Csv(e.to_string())
    }
}

impl From<std::io::Error> for TournamentError {
    fn from(e: std::io::Error) -> Self {
        TournamentError::Csv(e.to_string())
    }
}

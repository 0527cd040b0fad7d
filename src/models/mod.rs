//! Data structures for the Swiss tournament: players, matches, standings, pairings.

mod error;
mod game;
mod player;
mod standing;

pub use error::TournamentError;
pub use game::{GameMatch, MatchId};
pub use player::{Player, PlayerId};
pub use standing::{Pairing, RoundPairings, StandingEntry};

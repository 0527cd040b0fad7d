//! Player/Match store: durable record of registered players and reported results.
//!
//! The engine only ever reads through [`TournamentStore::snapshot`], so an implementation
//! must return players and matches from one consistent point in time.

mod memory;

pub use memory::InMemoryStore;

use crate::models::{GameMatch, Player, PlayerId, TournamentError};

/// Players and matches read together.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub matches: Vec<GameMatch>,
}

pub trait TournamentStore: Send + Sync {
    /// Register a player; the store assigns the id.
    fn add_player(&self, name: &str) -> Result<Player, TournamentError>;

    /// Register several players. `InMemoryStore` adds them under a single write.
    fn add_players(&self, names: &[String]) -> Result<Vec<Player>, TournamentError> {
        names.iter().map(|n| self.add_player(n)).collect()
    }

    fn get_player(&self, id: PlayerId) -> Result<Option<Player>, TournamentError>;

    /// All players in registration order.
    fn list_players(&self) -> Result<Vec<Player>, TournamentError>;

    fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.list_players()?.len())
    }

    /// Append a match. Fails with `UnknownPlayer` (and stores nothing) if either id is not registered.
    fn record_match(&self, winner: PlayerId, loser: PlayerId)
        -> Result<GameMatch, TournamentError>;

    /// All matches in recording order.
    fn list_matches(&self) -> Result<Vec<GameMatch>, TournamentError>;

    fn list_matches_for_player(&self, id: PlayerId) -> Result<Vec<GameMatch>, TournamentError> {
        Ok(self
            .list_matches()?
            .into_iter()
            .filter(|m| m.involves(id))
            .collect())
    }

    fn snapshot(&self) -> Result<Snapshot, TournamentError>;

    fn clear_matches(&self) -> Result<(), TournamentError>;

    /// Remove every player. Matches reference players, so they are removed too.
    fn clear_players(&self) -> Result<(), TournamentError>;
}

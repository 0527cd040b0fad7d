//! In-process store behind a single `RwLock`.

use crate::models::{GameMatch, Player, PlayerId, TournamentError};
use crate::store::{Snapshot, TournamentStore};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct State {
    players: Vec<Player>,
    matches: Vec<GameMatch>,
    /// Next id to hand out. Never reset, so ids are not reused after a clear.
    next_player_id: PlayerId,
}

impl Default for State {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            next_player_id: 1,
        }
    }
}

impl State {
    fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    fn push_player(&mut self, name: &str) -> Player {
        let player = Player::new(self.next_player_id, name);
        self.next_player_id += 1;
        self.players.push(player.clone());
        player
    }
}

/// Every write and every snapshot holds the lock for its whole duration, so readers never
/// observe a half-applied update.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, TournamentError> {
        self.state.read().map_err(|_| TournamentError::StoreUnavailable)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, TournamentError> {
        self.state.write().map_err(|_| TournamentError::StoreUnavailable)
    }
}

impl TournamentStore for InMemoryStore {
    fn add_player(&self, name: &str) -> Result<Player, TournamentError> {
        Ok(self.write()?.push_player(name))
    }

    fn add_players(&self, names: &[String]) -> Result<Vec<Player>, TournamentError> {
        let mut g = self.write()?;
        Ok(names.iter().map(|n| g.push_player(n)).collect())
    }

    fn get_player(&self, id: PlayerId) -> Result<Option<Player>, TournamentError> {
        Ok(self.read()?.players.iter().find(|p| p.id == id).cloned())
    }

    fn list_players(&self) -> Result<Vec<Player>, TournamentError> {
        Ok(self.read()?.players.clone())
    }

    fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.read()?.players.len())
    }

    fn record_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<GameMatch, TournamentError> {
        let mut g = self.write()?;
        for id in [winner, loser] {
            if !g.has_player(id) {
                return Err(TournamentError::UnknownPlayer(id));
            }
        }
        let m = GameMatch::new(winner, loser);
        g.matches.push(m.clone());
        Ok(m)
    }

    fn list_matches(&self) -> Result<Vec<GameMatch>, TournamentError> {
        Ok(self.read()?.matches.clone())
    }

    fn list_matches_for_player(&self, id: PlayerId) -> Result<Vec<GameMatch>, TournamentError> {
        Ok(self
            .read()?
            .matches
            .iter()
            .filter(|m| m.involves(id))
            .cloned()
            .collect())
    }

    fn snapshot(&self) -> Result<Snapshot, TournamentError> {
        let g = self.read()?;
        Ok(Snapshot {
            players: g.players.clone(),
            matches: g.matches.clone(),
        })
    }

    fn clear_matches(&self) -> Result<(), TournamentError> {
        self.write()?.matches.clear();
        Ok(())
    }

    fn clear_players(&self) -> Result<(), TournamentError> {
        let mut g = self.write()?;
        g.matches.clear();
        g.players.clear();
        Ok(())
    }
}

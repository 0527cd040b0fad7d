//! Standings: a pure fold over match history.

use crate::config::{IntegrityPolicy, PairingConfig};
use crate::models::{GameMatch, Player, PlayerId, StandingEntry, TournamentError};
use crate::store::TournamentStore;
use std::collections::HashMap;

/// Rank `players` by wins (descending), ties broken by ascending player id.
///
/// A match naming a player not in `players` either fails the whole computation
/// (`IntegrityPolicy::Strict`) or is left out of every count (`IntegrityPolicy::Skip`).
pub fn compute_standings(
    players: &[Player],
    matches: &[GameMatch],
    integrity: IntegrityPolicy,
) -> Result<Vec<StandingEntry>, TournamentError> {
    let mut rows: Vec<StandingEntry> = players.iter().map(StandingEntry::from_player).collect();
    let index: HashMap<PlayerId, usize> =
        rows.iter().enumerate().map(|(i, r)| (r.id, i)).collect();

    for m in matches {
        let (w, l) = match (index.get(&m.winner), index.get(&m.loser)) {
            (Some(&w), Some(&l)) => (w, l),
            (w, _) => {
                let missing = if w.is_none() { m.winner } else { m.loser };
                match integrity {
                    IntegrityPolicy::Strict => {
                        return Err(TournamentError::ReferentialIntegrity {
                            match_id: m.id,
                            player: missing,
                        })
                    }
                    IntegrityPolicy::Skip => {
                        log::warn!(
                            "Skipping match {}: player {} is not registered",
                            m.id,
                            missing
                        );
                        continue;
                    }
                }
            }
        };
        rows[w].wins += 1;
        rows[w].matches += 1;
        if l != w {
            rows[l].matches += 1;
        }
    }

    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
    Ok(rows)
}

/// Current standings, read from one consistent snapshot of the store.
pub fn player_standings<S>(
    store: &S,
    config: &PairingConfig,
) -> Result<Vec<StandingEntry>, TournamentError>
where
    S: TournamentStore + ?Sized,
{
    let snap = store.snapshot()?;
    compute_standings(&snap.players, &snap.matches, config.integrity)
}

//! Match reporting.

use crate::models::{GameMatch, PlayerId, TournamentError};
use crate::store::TournamentStore;

/// Record the outcome of a single match.
///
/// Rejects `winner == loser` before touching the store; the store itself rejects ids that
/// are not registered. Either the match is appended or nothing changes.
pub fn report_match<S>(
    store: &S,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<GameMatch, TournamentError>
where
    S: TournamentStore + ?Sized,
{
    if winner == loser {
        return Err(TournamentError::SelfMatch(winner));
    }
    let m = store.record_match(winner, loser)?;
    log::info!("Recorded match {}: {} beat {}", m.id, m.winner, m.loser);
    Ok(m)
}

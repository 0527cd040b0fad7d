//! Next-round pairings: adjacent ranks play each other, with an optional bye and
//! optional rematch avoidance.

use crate::config::PairingConfig;
use crate::logic::standings::compute_standings;
use crate::models::{GameMatch, Pairing, PlayerId, RoundPairings, StandingEntry, TournamentError};
use crate::store::TournamentStore;
use std::collections::HashSet;

fn pair_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Index of the player who sits out: the lowest-ranked among those with the most matches
/// played. Anyone who already had a bye has played fewer matches and is passed over.
fn bye_index(pool: &[&StandingEntry]) -> usize {
    let most_played = pool.iter().map(|e| e.matches).max().unwrap_or(0);
    pool.iter()
        .rposition(|e| e.matches == most_played)
        .unwrap_or(pool.len() - 1)
}

/// Search nodes explored before settling for the best assignment found so far.
const SEARCH_BUDGET: usize = 100_000;

/// Depth-first search over window-bounded pairings, in rank order.
///
/// The top remaining player tries each of the next `window` players in turn and the rest
/// of the pool is paired recursively. The first complete assignment without rematches
/// wins; otherwise the first one found with the fewest rematches.
struct RematchSearch<'a> {
    pool: &'a [&'a StandingEntry],
    played: &'a HashSet<(PlayerId, PlayerId)>,
    window: usize,
    visited: usize,
    current: Vec<(usize, usize, bool)>,
    best: Option<(usize, Vec<(usize, usize, bool)>)>,
}

impl<'a> RematchSearch<'a> {
    fn new(
        pool: &'a [&'a StandingEntry],
        played: &'a HashSet<(PlayerId, PlayerId)>,
        window: usize,
    ) -> Self {
        Self {
            pool,
            played,
            window,
            visited: 0,
            current: Vec::with_capacity(pool.len() / 2),
            best: None,
        }
    }

    /// Returns true once the search should stop.
    fn descend(&mut self, remaining: &mut Vec<usize>, rematches: usize) -> bool {
        if let Some((fewest, _)) = &self.best {
            if rematches >= *fewest {
                return false;
            }
        }
        if remaining.is_empty() {
            self.best = Some((rematches, self.current.clone()));
            return rematches == 0;
        }
        self.visited += 1;
        if self.visited > SEARCH_BUDGET && self.best.is_some() {
            return true;
        }

        let first = remaining.remove(0);
        let limit = self.window.min(remaining.len());
        let mut stop = false;
        for k in 0..limit {
            let second = remaining.remove(k);
            let rematch = self
                .played
                .contains(&pair_key(self.pool[first].id, self.pool[second].id));
            self.current.push((first, second, rematch));
            stop = self.descend(remaining, rematches + usize::from(rematch));
            self.current.pop();
            remaining.insert(k, second);
            if stop {
                break;
            }
        }
        remaining.insert(0, first);
        stop
    }
}

/// Pair players for the next round from `standings` (already in rank order).
///
/// 1. Fewer than 2 players: `InsufficientPlayers`.
/// 2. Odd count: one player gets a bye, or `OddPlayerCountUnhandled` when byes are off.
/// 3. With rematch avoidance on, each player may be paired with any of the next
///    `rematch_window` players; the assignment with the fewest rematches is chosen, earlier
///    ranks taking nearer opponents on ties. With it off, rank 2i plays rank 2i+1.
pub fn swiss_pairings_for(
    standings: &[StandingEntry],
    matches: &[GameMatch],
    config: &PairingConfig,
) -> Result<RoundPairings, TournamentError> {
    let registered = standings.len();
    if registered < 2 {
        return Err(TournamentError::InsufficientPlayers { registered });
    }

    let mut pool: Vec<&StandingEntry> = standings.iter().collect();
    let bye = if registered % 2 == 1 {
        if !config.allow_byes {
            return Err(TournamentError::OddPlayerCountUnhandled { registered });
        }
        let idx = bye_index(&pool);
        Some(pool.remove(idx).clone())
    } else {
        None
    };

    let played: HashSet<(PlayerId, PlayerId)> =
        matches.iter().map(|m| pair_key(m.winner, m.loser)).collect();
    let window = if config.avoid_rematches {
        config.rematch_window.max(1)
    } else {
        1
    };

    let mut search = RematchSearch::new(&pool, &played, window);
    let mut remaining: Vec<usize> = (0..pool.len()).collect();
    search.descend(&mut remaining, 0);
    let (rematches, chosen) = search.best.unwrap_or_default();
    log::debug!(
        "Pairing search visited {} node(s), {} rematch(es)",
        search.visited,
        rematches
    );

    let pairs = chosen
        .into_iter()
        .map(|(first, second, rematch)| {
            if rematch && config.avoid_rematches {
                log::warn!(
                    "No rematch-free pairing within {} rank(s); {} plays {} again",
                    window,
                    pool[first].id,
                    pool[second].id
                );
            }
            Pairing {
                first: pool[first].clone(),
                second: pool[second].clone(),
                rematch,
            }
        })
        .collect();

    Ok(RoundPairings { pairs, bye })
}

/// Pairings for the next round, computed from one consistent snapshot of the store.
pub fn swiss_pairings<S>(store: &S, config: &PairingConfig) -> Result<RoundPairings, TournamentError>
where
    S: TournamentStore + ?Sized,
{
    let snap = store.snapshot()?;
    let standings = compute_standings(&snap.players, &snap.matches, config.integrity)?;
    let round = swiss_pairings_for(&standings, &snap.matches, config)?;
    log::info!(
        "Generated {} pairing(s) for {} player(s){}",
        round.pairs.len(),
        standings.len(),
        match &round.bye {
            Some(b) => format!(", bye for {}", b.id),
            None => String::new(),
        }
    );
    Ok(round)
}

//! CSV export of standings and pairings.

use crate::models::{PlayerId, RoundPairings, StandingEntry, TournamentError};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct StandingRow<'a> {
    rank: usize,
    id: PlayerId,
    name: &'a str,
    wins: u32,
    matches: u32,
}

#[derive(Serialize)]
struct PairingRow<'a> {
    table: usize,
    id1: PlayerId,
    name1: &'a str,
    id2: Option<PlayerId>,
    name2: Option<&'a str>,
}

/// Write standings as `rank,id,name,wins,matches`, rank starting at 1.
pub fn write_standings_csv<W: Write>(
    standings: &[StandingEntry],
    writer: W,
) -> Result<(), TournamentError> {
    let mut wtr = csv::Writer::from_writer(writer);
    if standings.is_empty() {
        wtr.write_record(["rank", "id", "name", "wins", "matches"])?;
    }
    for (i, e) in standings.iter().enumerate() {
        wtr.serialize(StandingRow {
            rank: i + 1,
            id: e.id,
            name: &e.name,
            wins: e.wins,
            matches: e.matches,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a round as `table,id1,name1,id2,name2`. The bye, if any, is the last row with
/// empty opponent columns.
pub fn write_pairings_csv<W: Write>(round: &RoundPairings, writer: W) -> Result<(), TournamentError> {
    let mut wtr = csv::Writer::from_writer(writer);
    if round.pairs.is_empty() && round.bye.is_none() {
        wtr.write_record(["table", "id1", "name1", "id2", "name2"])?;
    }
    for (i, p) in round.pairs.iter().enumerate() {
        wtr.serialize(PairingRow {
            table: i + 1,
            id1: p.first.id,
            name1: &p.first.name,
            id2: Some(p.second.id),
            name2: Some(&p.second.name),
        })?;
    }
    if let Some(b) = &round.bye {
        wtr.serialize(PairingRow {
            table: round.pairs.len() + 1,
            id1: b.id,
            name1: &b.name,
            id2: None,
            name2: None,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

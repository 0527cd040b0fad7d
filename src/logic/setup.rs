//! Registration: add players one at a time or in bulk from a CSV roster.

use crate::models::{Player, TournamentError};
use crate::store::TournamentStore;
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
struct RosterRow {
    name: String,
}

fn validated_name(name: &str) -> Result<String, TournamentError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TournamentError::InvalidPlayerName);
    }
    Ok(trimmed.to_string())
}

/// Register a player under a trimmed, non-empty name. Duplicate names are allowed.
pub fn register_player<S>(store: &S, name: &str) -> Result<Player, TournamentError>
where
    S: TournamentStore + ?Sized,
{
    let name = validated_name(name)?;
    let player = store.add_player(&name)?;
    log::info!("Registered player {} ({})", player.id, player.name);
    Ok(player)
}

/// Register every row of a CSV roster with a `name` column.
///
/// The whole roster is parsed and validated before anything is stored, so a bad row
/// registers nobody.
pub fn register_players_from_csv<S, R>(store: &S, reader: R) -> Result<Vec<Player>, TournamentError>
where
    S: TournamentStore + ?Sized,
    R: Read,
{
    let mut rdr = csv::Reader::from_reader(reader);
    let mut names = Vec::new();
    for row in rdr.deserialize() {
        let row: RosterRow = row?;
        names.push(validated_name(&row.name)?);
    }
    let players = store.add_players(&names)?;
    log::info!("Registered {} players from roster", players.len());
    Ok(players)
}

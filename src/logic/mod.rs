//! Ranking and pairing engine: registration, match reporting, standings, pairings.

mod export;
mod pairing;
mod results;
mod setup;
mod standings;

pub use export::{write_pairings_csv, write_standings_csv};
pub use pairing::{swiss_pairings, swiss_pairings_for};
pub use results::report_match;
pub use setup::{register_player, register_players_from_csv};
pub use standings::{compute_standings, player_standings};

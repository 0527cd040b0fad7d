//! Swiss-system tournament tracker: player/match store plus the standings and pairing engine.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::{IntegrityPolicy, PairingConfig, ServerConfig};
pub use logic::{
    compute_standings, player_standings, register_player, register_players_from_csv,
    report_match, swiss_pairings, swiss_pairings_for, write_pairings_csv, write_standings_csv,
};
pub use models::{
    GameMatch, MatchId, Pairing, Player, PlayerId, RoundPairings, StandingEntry, TournamentError,
};
pub use store::{InMemoryStore, Snapshot, TournamentStore};

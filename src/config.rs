//! Pairing policy and server settings, read from environment variables.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

const ALLOW_BYES_VAR: &str = "SWISS_ALLOW_BYES";
const AVOID_REMATCHES_VAR: &str = "SWISS_AVOID_REMATCHES";
const REMATCH_WINDOW_VAR: &str = "SWISS_REMATCH_WINDOW";
const INTEGRITY_VAR: &str = "SWISS_INTEGRITY";
const HOST_VAR: &str = "HOST";
const PORT_VAR: &str = "PORT";

/// How standings treat a match whose winner or loser is not registered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityPolicy {
    /// Fail with `TournamentError::ReferentialIntegrity`.
    #[default]
    Strict,
    /// Ignore the match and log a warning.
    Skip,
}

impl FromStr for IntegrityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(IntegrityPolicy::Strict),
            "skip" => Ok(IntegrityPolicy::Skip),
            other => Err(format!("unknown integrity policy {:?}", other)),
        }
    }
}

/// Knobs for standings and pairing generation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PairingConfig {
    /// Give one player a bye on odd counts instead of failing.
    pub allow_byes: bool,
    /// Swap opponents to avoid pairing players who already met.
    pub avoid_rematches: bool,
    /// How many ranks below a player to search for an unplayed opponent.
    pub rematch_window: usize,
    pub integrity: IntegrityPolicy,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            allow_byes: true,
            avoid_rematches: true,
            rematch_window: 3,
            integrity: IntegrityPolicy::Strict,
        }
    }
}

impl PairingConfig {
    /// Plain adjacent-rank pairing: rank 2i plays rank 2i+1, no swaps.
    pub fn strict_adjacent() -> Self {
        Self {
            avoid_rematches: false,
            ..Self::default()
        }
    }

    /// Defaults overridden by any parsable `SWISS_*` variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            allow_byes: env_or(ALLOW_BYES_VAR, defaults.allow_byes),
            avoid_rematches: env_or(AVOID_REMATCHES_VAR, defaults.avoid_rematches),
            rematch_window: env_or(REMATCH_WINDOW_VAR, defaults.rematch_window),
            integrity: env_or(INTEGRITY_VAR, defaults.integrity),
        }
    }
}

/// Where the web adapter listens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var(HOST_VAR).unwrap_or(defaults.host),
            port: env_or(PORT_VAR, defaults.port),
        }
    }
}

fn env_or<T: FromStr>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("Ignoring unparsable {}={:?}", var, raw);
                default
            }
        },
        Err(_) => default,
    }
}

//! Simulate a full Swiss event with random results and print final standings as CSV.
//! Run with: cargo run --bin simulate -- [players] [rounds]
//! Defaults: 8 players, rounds = ceil(log2(players)).

use rand::Rng;
use std::error::Error;
use swiss_tournament::{
    player_standings, register_player, report_match, swiss_pairings, write_pairings_csv,
    write_standings_csv, InMemoryStore, PairingConfig,
};

fn default_rounds(players: usize) -> usize {
    let mut rounds = 0;
    while (1usize << rounds) < players {
        rounds += 1;
    }
    rounds.max(1)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let players: usize = match args.next() {
        Some(a) => a.parse()?,
        None => 8,
    };
    let rounds: usize = match args.next() {
        Some(a) => a.parse()?,
        None => default_rounds(players),
    };
    if args.next().is_some() {
        return Err("Usage: simulate [players] [rounds]".into());
    }

    let config = PairingConfig::from_env();
    let store = InMemoryStore::new();
    for i in 1..=players {
        register_player(&store, &format!("Player {i}"))?;
    }

    let mut rng = rand::thread_rng();
    for round in 1..=rounds {
        let pairings = swiss_pairings(&store, &config)?;
        eprintln!("Round {round}");
        write_pairings_csv(&pairings, std::io::stderr())?;
        for p in &pairings.pairs {
            let (a, b) = p.ids();
            if rng.gen_bool(0.5) {
                report_match(&store, a, b)?;
            } else {
                report_match(&store, b, a)?;
            }
        }
    }

    let standings = player_standings(&store, &config)?;
    write_standings_csv(&standings, std::io::stdout())?;
    Ok(())
}

//! Integration tests for next-round pairings: adjacency, byes, rematch avoidance.

use std::collections::HashSet;
use swiss_tournament::{
    register_player, report_match, swiss_pairings, swiss_pairings_for, write_pairings_csv,
    GameMatch, InMemoryStore, PairingConfig, PlayerId, RoundPairings, StandingEntry,
    TournamentError,
};

fn store_with_players(n: usize) -> (InMemoryStore, Vec<PlayerId>) {
    let store = InMemoryStore::new();
    let ids = (0..n)
        .map(|i| register_player(&store, &format!("P{i}")).unwrap().id)
        .collect();
    (store, ids)
}

fn entry(id: PlayerId, name: &str, wins: u32, matches: u32) -> StandingEntry {
    StandingEntry {
        id,
        name: name.to_string(),
        wins,
        matches,
    }
}

fn assert_covers_everyone(scheduled: Vec<PlayerId>, ids: &[PlayerId]) {
    let unique: HashSet<_> = scheduled.iter().copied().collect();
    assert_eq!(unique.len(), scheduled.len(), "player scheduled twice");
    assert_eq!(unique, ids.iter().copied().collect::<HashSet<_>>());
}

#[test]
fn pairing_requires_two_players() {
    let (store, _) = store_with_players(0);
    assert_eq!(
        swiss_pairings(&store, &PairingConfig::default()),
        Err(TournamentError::InsufficientPlayers { registered: 0 })
    );
    register_player(&store, "Solo").unwrap();
    assert_eq!(
        swiss_pairings(&store, &PairingConfig::default()),
        Err(TournamentError::InsufficientPlayers { registered: 1 })
    );
}

#[test]
fn even_count_pairs_everyone_once() {
    let (store, ids) = store_with_players(8);
    let round = swiss_pairings(&store, &PairingConfig::default()).unwrap();
    assert_eq!(round.pairs.len(), 4);
    assert!(round.bye.is_none());
    assert_covers_everyone(round.player_ids(), &ids);
}

#[test]
fn odd_count_gives_exactly_one_bye() {
    let (store, ids) = store_with_players(7);
    let round = swiss_pairings(&store, &PairingConfig::default()).unwrap();
    assert_eq!(round.pairs.len(), 3);
    assert!(round.bye.is_some());
    assert_covers_everyone(round.player_ids(), &ids);
}

#[test]
fn odd_count_fails_when_byes_are_disabled() {
    let (store, _) = store_with_players(5);
    let config = PairingConfig {
        allow_byes: false,
        ..PairingConfig::default()
    };
    assert_eq!(
        swiss_pairings(&store, &config),
        Err(TournamentError::OddPlayerCountUnhandled { registered: 5 })
    );
}

#[test]
fn adjacent_ranks_are_paired() {
    let standings = vec![
        entry(1, "A", 2, 2),
        entry(2, "B", 2, 2),
        entry(3, "C", 1, 2),
        entry(4, "D", 0, 2),
    ];
    let round = swiss_pairings_for(&standings, &[], &PairingConfig::default()).unwrap();
    let pairs: Vec<_> = round.pairs.iter().map(|p| p.ids()).collect();
    assert_eq!(pairs, vec![(1, 2), (3, 4)]);
    assert!(round.pairs.iter().all(|p| !p.rematch));
}

#[test]
fn first_round_pairs_in_registration_order() {
    let (store, ids) = store_with_players(4);
    let round = swiss_pairings(&store, &PairingConfig::default()).unwrap();
    let pairs: Vec<_> = round.pairs.iter().map(|p| p.ids()).collect();
    assert_eq!(pairs, vec![(ids[0], ids[1]), (ids[2], ids[3])]);
}

#[test]
fn winners_meet_winners_in_round_two() {
    let (store, ids) = store_with_players(4);
    report_match(&store, ids[0], ids[1]).unwrap();
    report_match(&store, ids[2], ids[3]).unwrap();
    let round = swiss_pairings(&store, &PairingConfig::default()).unwrap();
    let pairs: Vec<_> = round.pairs.iter().map(|p| p.ids()).collect();
    assert_eq!(pairs, vec![(ids[0], ids[2]), (ids[1], ids[3])]);
}

#[test]
fn rematch_is_swapped_with_next_rank() {
    // After two rounds: 1 has beaten 2 and 3; 2 beat 4; 3 beat 4.
    // Adjacent pairing would give (1,2) again; the swap gives (1,4) and (2,3).
    let (store, ids) = store_with_players(4);
    report_match(&store, ids[0], ids[1]).unwrap();
    report_match(&store, ids[2], ids[3]).unwrap();
    report_match(&store, ids[0], ids[2]).unwrap();
    report_match(&store, ids[1], ids[3]).unwrap();

    let round = swiss_pairings(&store, &PairingConfig::default()).unwrap();
    let pairs: Vec<_> = round.pairs.iter().map(|p| p.ids()).collect();
    assert_eq!(pairs, vec![(ids[0], ids[3]), (ids[1], ids[2])]);
    assert!(round.pairs.iter().all(|p| !p.rematch));
}

#[test]
fn strict_adjacent_repeats_the_pairing() {
    let (store, ids) = store_with_players(4);
    report_match(&store, ids[0], ids[1]).unwrap();
    report_match(&store, ids[2], ids[3]).unwrap();
    report_match(&store, ids[0], ids[2]).unwrap();
    report_match(&store, ids[1], ids[3]).unwrap();

    let round = swiss_pairings(&store, &PairingConfig::strict_adjacent()).unwrap();
    assert_eq!(round.pairs[0].ids(), (ids[0], ids[1]));
    assert!(round.pairs[0].rematch);
}

#[test]
fn unavoidable_rematch_falls_back_to_adjacent() {
    let (store, ids) = store_with_players(2);
    report_match(&store, ids[0], ids[1]).unwrap();
    let round = swiss_pairings(&store, &PairingConfig::default()).unwrap();
    assert_eq!(round.pairs.len(), 1);
    assert_eq!(round.pairs[0].ids(), (ids[0], ids[1]));
    assert!(round.pairs[0].rematch);
}

#[test]
fn no_rematches_over_a_full_event() {
    let (store, ids) = store_with_players(8);
    let config = PairingConfig::default();
    let mut met = HashSet::new();
    for _ in 0..3 {
        let round = swiss_pairings(&store, &config).unwrap();
        assert_covers_everyone(round.player_ids(), &ids);
        for p in &round.pairs {
            let (a, b) = p.ids();
            assert!(met.insert((a.min(b), a.max(b))), "rematch {a} vs {b}");
            assert!(!p.rematch);
            // Lower id always wins so results are reproducible.
            report_match(&store, a.min(b), a.max(b)).unwrap();
        }
    }
}

#[test]
fn byes_rotate_between_rounds() {
    let (store, ids) = store_with_players(5);
    let config = PairingConfig::default();
    let mut byes = Vec::new();
    for _ in 0..3 {
        let round = swiss_pairings(&store, &config).unwrap();
        assert_covers_everyone(round.player_ids(), &ids);
        byes.push(round.bye.clone().unwrap().id);
        for p in &round.pairs {
            report_match(&store, p.first.id, p.second.id).unwrap();
        }
    }
    let unique: HashSet<_> = byes.iter().collect();
    assert_eq!(unique.len(), byes.len(), "same player got two byes: {byes:?}");
    // Round one: everyone at 0-0, so the last-registered player sits out.
    assert_eq!(byes[0], ids[4]);
}

#[test]
fn pairing_is_deterministic() {
    let (store, ids) = store_with_players(6);
    report_match(&store, ids[5], ids[0]).unwrap();
    report_match(&store, ids[3], ids[1]).unwrap();
    report_match(&store, ids[2], ids[4]).unwrap();
    let config = PairingConfig::default();
    assert_eq!(
        swiss_pairings(&store, &config).unwrap(),
        swiss_pairings(&store, &config).unwrap()
    );
}

#[test]
fn history_with_unknown_players_does_not_block_pairing() {
    let standings = vec![entry(1, "A", 0, 0), entry(2, "B", 0, 0)];
    let history = vec![GameMatch::new(1, 99)];
    let round = swiss_pairings_for(&standings, &history, &PairingConfig::default()).unwrap();
    assert_eq!(round.pairs[0].ids(), (1, 2));
    assert!(!round.pairs[0].rematch);
}

#[test]
fn pairings_csv_lists_bye_last() {
    let (store, ids) = store_with_players(3);
    let round = swiss_pairings(&store, &PairingConfig::default()).unwrap();
    let mut out = Vec::new();
    write_pairings_csv(&round, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "table,id1,name1,id2,name2");
    assert_eq!(lines[1], format!("1,{},P0,{},P1", ids[0], ids[1]));
    assert_eq!(lines[2], format!("2,{},P2,,", ids[2]));
}

#[test]
fn later_rematch_is_avoided_by_reconsidering_earlier_choice() {
    let standings = vec![
        entry(1, "A", 1, 1),
        entry(2, "B", 1, 2),
        entry(3, "C", 0, 0),
        entry(4, "D", 0, 1),
    ];
    let history = vec![GameMatch::new(1, 2), GameMatch::new(2, 4)];
    let round = swiss_pairings_for(&standings, &history, &PairingConfig::default()).unwrap();
    let pairs: Vec<_> = round.pairs.iter().map(|p| (p.ids(), p.rematch)).collect();
    assert_eq!(pairs, vec![((1, 4), false), ((2, 3), false)]);
}

#[test]
fn search_backtracks_past_the_top_pair() {
    // Keeping (1,2) leaves 6 facing 3, 4 or 5, all of whom it has met.
    let standings: Vec<_> = (1..=6).map(|id| entry(id, "P", 0, 0)).collect();
    let history = vec![
        GameMatch::new(5, 6),
        GameMatch::new(3, 6),
        GameMatch::new(4, 6),
    ];
    let round = swiss_pairings_for(&standings, &history, &PairingConfig::default()).unwrap();
    let pairs: Vec<_> = round.pairs.iter().map(|p| p.ids()).collect();
    assert_eq!(pairs, vec![(1, 3), (2, 6), (4, 5)]);
    assert!(round.pairs.iter().all(|p| !p.rematch));
}

#[test]
fn fewest_rematches_wins_when_none_is_clean() {
    // 1 has met everyone in its window; 2, 3 and 4 are otherwise fresh.
    let standings: Vec<_> = (1..=4).map(|id| entry(id, "P", 0, 0)).collect();
    let history = vec![
        GameMatch::new(1, 2),
        GameMatch::new(1, 3),
        GameMatch::new(1, 4),
    ];
    let round = swiss_pairings_for(&standings, &history, &PairingConfig::default()).unwrap();
    let pairs: Vec<_> = round.pairs.iter().map(|p| (p.ids(), p.rematch)).collect();
    assert_eq!(pairs, vec![((1, 2), true), ((3, 4), false)]);
}

#[test]
fn strict_adjacent_ignores_better_swaps() {
    let standings: Vec<_> = (1..=4).map(|id| entry(id, "P", 0, 0)).collect();
    let history = vec![GameMatch::new(1, 2), GameMatch::new(2, 4)];
    let round =
        swiss_pairings_for(&standings, &history, &PairingConfig::strict_adjacent()).unwrap();
    let pairs: Vec<_> = round.pairs.iter().map(|p| (p.ids(), p.rematch)).collect();
    assert_eq!(pairs, vec![((1, 2), true), ((3, 4), false)]);
}

#[test]
fn empty_round_csv_is_header_only() {
    let mut out = Vec::new();
    write_pairings_csv(&RoundPairings::default(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "table,id1,name1,id2,name2\n");
}

use std::collections::HashMap;

use tempfile::TempDir;

use swiss_pairings::config::AppConfig;
use swiss_pairings::errors::TournamentError;
use swiss_pairings::services::TournamentService;
use swiss_pairings::swiss::{Outcome, Player};

fn open_service() -> (TempDir, TournamentService) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("swiss.db");
    let config = AppConfig::new().with_database_path(path.to_string_lossy());
    (dir, TournamentService::open(config).unwrap())
}

fn register(service: &TournamentService, names: &[&str]) -> Vec<Player> {
    names.iter().map(|name| service.register_player(name).unwrap()).collect()
}

fn standing_names(service: &TournamentService) -> Vec<String> {
    service
        .compute_standings(None)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect()
}

#[test]
fn fresh_players_pair_in_registration_order() {
    let (_dir, service) = open_service();
    register(&service, &["A", "B", "C", "D"]);

    let standings = service.compute_standings(None).unwrap();
    assert_eq!(standing_names(&service), vec!["A", "B", "C", "D"]);
    assert!(standings.iter().all(|e| e.score == 0 && e.matches == 0));

    let pairings = service.compute_next_round_pairings().unwrap();
    let names: Vec<_> = pairings
        .iter()
        .map(|p| (p.player1_name.as_str(), p.player2_name.as_str()))
        .collect();
    assert_eq!(names, vec![("A", "B"), ("C", "D")]);
}

#[test]
fn win_and_tie_reorder_the_next_round() {
    let (_dir, service) = open_service();
    let players = register(&service, &["A", "B", "C", "D"]);
    let (a, b, c, d) = (&players[0], &players[1], &players[2], &players[3]);

    service.report_match(None, a.id, b.id, Outcome::Player1Wins).unwrap();
    service.report_match(None, c.id, d.id, Outcome::Tie).unwrap();

    let standings = service.compute_standings(None).unwrap();
    let summary: Vec<_> = standings.iter().map(|e| (e.name.as_str(), e.score)).collect();
    assert_eq!(summary, vec![("A", 3), ("C", 1), ("D", 1), ("B", 0)]);

    let pairings = service.compute_next_round_pairings().unwrap();
    let ids: Vec<_> = pairings.iter().map(|p| (p.player1_id, p.player2_id)).collect();
    assert_eq!(ids, vec![(a.id, c.id), (d.id, b.id)]);
}

#[test]
fn tie_increments_only_tie_counters() {
    let (_dir, service) = open_service();
    let players = register(&service, &["A", "B"]);

    service.report_match(None, players[0].id, players[1].id, Outcome::Player1Wins).unwrap();
    let before: HashMap<_, _> = service
        .compute_standings(None)
        .unwrap()
        .into_iter()
        .map(|e| (e.player_id, e))
        .collect();

    service.report_match(None, players[0].id, players[1].id, Outcome::Tie).unwrap();
    let after = service.compute_standings(None).unwrap();

    for entry in after {
        let old = &before[&entry.player_id];
        assert_eq!(entry.ties, old.ties + 1);
        assert_eq!(entry.wins, old.wins);
        assert_eq!(entry.losses, old.losses);
        assert_eq!(entry.matches, old.matches + 1);
    }
}

#[test]
fn odd_roster_cannot_be_paired() {
    let (_dir, service) = open_service();
    register(&service, &["A", "B", "C"]);

    match service.compute_next_round_pairings() {
        Err(TournamentError::UnevenPlayerCount(count)) => assert_eq!(count, 3),
        other => panic!("expected UnevenPlayerCount, got {other:?}"),
    }
}

#[test]
fn full_rounds_keep_every_player_paired_once() {
    let (_dir, service) = open_service();
    let players = register(&service, &["A", "B", "C", "D", "E", "F", "G", "H"]);

    for round in 0..3 {
        let pairings = service.compute_next_round_pairings().unwrap();
        assert_eq!(pairings.len(), players.len() / 2);

        let mut seen: Vec<_> = pairings
            .iter()
            .flat_map(|p| [p.player1_id, p.player2_id])
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<_> = players.iter().map(|p| p.id).collect();
        expected.sort_unstable();
        assert_eq!(seen, expected);

        for (table, pairing) in pairings.iter().enumerate() {
            let outcome = if (round + table) % 3 == 0 { Outcome::Tie } else { Outcome::Player1Wins };
            service
                .report_match(None, pairing.player1_id, pairing.player2_id, outcome)
                .unwrap();
        }
    }

    let standings = service.compute_standings(None).unwrap();
    assert_eq!(standings.len(), players.len());
    for entry in &standings {
        assert_eq!(entry.matches, 3);
        assert_eq!(entry.matches, entry.wins + entry.losses + entry.ties);
        assert_eq!(entry.score, entry.wins * 3 + entry.ties);
    }
    for pair in standings.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn clearing_matches_resets_standings_but_keeps_players() {
    let (_dir, service) = open_service();
    let players = register(&service, &["A", "B"]);
    service.report_match(None, players[0].id, players[1].id, Outcome::Player2Wins).unwrap();

    assert_eq!(service.delete_matches().unwrap(), 1);
    assert_eq!(service.count_players().unwrap(), 2);
    assert_eq!(standing_names(&service), vec!["A", "B"]);
    assert!(service.player_history(players[0].id).unwrap().matches.is_empty());
}

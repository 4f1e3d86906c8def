use log::info;

use super::types::{Pairing, StandingsEntry};
use crate::errors::{TournamentError, TournamentResult};

/// Pairs ranked standings two by two: (1st, 2nd), (3rd, 4th), ...
///
/// Pairing is memoryless: players who already met can be paired again.
pub fn swiss_pairings(standings: &[StandingsEntry]) -> TournamentResult<Vec<Pairing>> {
    ensure_even(standings.len())?;

    let pairings: Vec<Pairing> = standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect();

    info!("Generated {} pairings for {} players", pairings.len(), standings.len());
    Ok(pairings)
}

fn ensure_even(count: usize) -> TournamentResult<()> {
    if count % 2 != 0 {
        return Err(TournamentError::UnevenPlayerCount(count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entry(id: i64, name: &str, score: u32) -> StandingsEntry {
        StandingsEntry {
            player_id: id,
            name: name.to_string(),
            wins: 0,
            losses: 0,
            ties: 0,
            matches: 0,
            score,
        }
    }

    #[test]
    fn test_pairs_adjacent_entries_in_rank_order() {
        let standings = vec![entry(1, "A", 3), entry(3, "C", 1), entry(4, "D", 1), entry(2, "B", 0)];
        let pairings = swiss_pairings(&standings).unwrap();

        let ids: Vec<_> = pairings.iter().map(|p| (p.player1_id, p.player2_id)).collect();
        assert_eq!(ids, vec![(1, 3), (4, 2)]);
        assert_eq!(pairings[0].player1_name, "A");
        assert_eq!(pairings[0].player2_name, "C");
        assert_eq!(pairings[1].player1_name, "D");
        assert_eq!(pairings[1].player2_name, "B");
    }

    #[test]
    fn test_every_player_appears_exactly_once() {
        let standings: Vec<_> = (1..=8).map(|id| entry(id, &format!("P{id}"), 0)).collect();
        let pairings = swiss_pairings(&standings).unwrap();

        assert_eq!(pairings.len(), standings.len() / 2);
        let mut seen = HashSet::new();
        for pairing in &pairings {
            assert!(seen.insert(pairing.player1_id));
            assert!(seen.insert(pairing.player2_id));
        }
        assert_eq!(seen.len(), standings.len());
    }

    #[test]
    fn test_odd_count_is_rejected() {
        let standings = vec![entry(1, "A", 0), entry(2, "B", 0), entry(3, "C", 0)];
        match swiss_pairings(&standings) {
            Err(TournamentError::UnevenPlayerCount(count)) => assert_eq!(count, 3),
            other => panic!("expected UnevenPlayerCount, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_standings_yield_no_pairings() {
        assert!(swiss_pairings(&[]).unwrap().is_empty());
    }
}

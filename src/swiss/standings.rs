use std::collections::HashMap;
use log::{debug, info};

use super::types::{MatchResult, Player, PlayerId, StandingsEntry};
use crate::config::settings::ScoringSettings;
use crate::errors::{TournamentError, TournamentResult};

/// Aggregates the full match history into one entry per registered player,
/// best first. Players are expected in registration order; equal scores keep
/// that order.
pub fn compute_standings(
    players: &[Player],
    matches: &[MatchResult],
    scoring: &ScoringSettings,
) -> TournamentResult<Vec<StandingsEntry>> {
    info!("Computing standings for {} players over {} matches", players.len(), matches.len());

    let mut entries: Vec<StandingsEntry> = players.iter().map(StandingsEntry::new).collect();
    let player_to_idx = index_players(players);

    tally_matches(&mut entries, &player_to_idx, matches)?;
    apply_scores(&mut entries, scoring);
    rank_entries(&mut entries);

    Ok(entries)
}

fn index_players(players: &[Player]) -> HashMap<PlayerId, usize> {
    players
        .iter()
        .enumerate()
        .map(|(idx, player)| (player.id, idx))
        .collect()
}

fn tally_matches(
    entries: &mut [StandingsEntry],
    player_to_idx: &HashMap<PlayerId, usize>,
    matches: &[MatchResult],
) -> TournamentResult<()> {
    for result in matches {
        let first = lookup(player_to_idx, result, result.player1_id)?;
        let second = lookup(player_to_idx, result, result.player2_id)?;
        let (first_result, second_result) = result.outcome.seat_results();

        entries[first].record(first_result);
        entries[second].record(second_result);
    }
    Ok(())
}

fn lookup(
    player_to_idx: &HashMap<PlayerId, usize>,
    result: &MatchResult,
    player_id: PlayerId,
) -> TournamentResult<usize> {
    player_to_idx
        .get(&player_id)
        .copied()
        .ok_or(TournamentError::DanglingReference {
            match_id: result.id,
            player_id,
        })
}

fn apply_scores(entries: &mut [StandingsEntry], scoring: &ScoringSettings) {
    for entry in entries.iter_mut() {
        entry.score = scoring.score(entry.wins, entry.losses, entry.ties);
        debug!(
            "  {} ({}): {}W {}L {}T -> {}",
            entry.name, entry.player_id, entry.wins, entry.losses, entry.ties, entry.score
        );
    }
}

// sort_by is stable, so registration order breaks ties
fn rank_entries(entries: &mut [StandingsEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

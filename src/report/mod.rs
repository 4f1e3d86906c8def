//! Terminal rendering for standings, pairings and player histories.

use colored::Colorize;

use crate::services::tournament::{PlayerHistory, TournamentInfo};
use crate::swiss::{Pairing, SeatResult, StandingsEntry};

pub fn render_standings(standings: &[StandingsEntry]) -> String {
    let mut out = format!(
        "{:>4}  {:<24} {:>4} {:>4} {:>4} {:>4} {:>6}\n",
        "#", "Player", "W", "L", "T", "MP", "Score"
    );

    for (idx, entry) in standings.iter().enumerate() {
        let line = format!(
            "{:>4}  {:<24} {:>4} {:>4} {:>4} {:>4} {:>6}",
            idx + 1,
            truncate(&entry.name, 24),
            entry.wins,
            entry.losses,
            entry.ties,
            entry.matches,
            entry.score
        );
        out.push_str(&highlight_standing(line, idx, entry));
        out.push('\n');
    }
    out
}

fn highlight_standing(line: String, idx: usize, entry: &StandingsEntry) -> String {
    if entry.matches == 0 {
        line.dimmed().to_string()
    } else if idx == 0 {
        line.bold().green().to_string()
    } else {
        line
    }
}

pub fn render_pairings(pairings: &[Pairing]) -> String {
    pairings
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            format!(
                "Table {:>2}: {} ({}) vs {} ({})\n",
                idx + 1,
                p.player1_name.bold(),
                p.player1_id,
                p.player2_name.bold(),
                p.player2_id
            )
        })
        .collect()
}

pub fn render_history(history: &PlayerHistory) -> String {
    let mut out = format!(
        "{} ({}): {}W {}L {}T\n",
        history.player.name.bold(),
        history.player.id,
        history.won,
        history.lost,
        history.tied
    );

    for line in &history.matches {
        let result = match line.result {
            SeatResult::Won => "won ".green(),
            SeatResult::Lost => "lost".red(),
            SeatResult::Tied => "tied".yellow(),
        };
        let tournament = line.tournament.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "  #{:<5} {} vs {} ({})  [{}]\n",
            line.match_id, result, line.opponent_name, line.opponent_id, tournament
        ));
    }
    out
}

pub fn render_tournaments(tournaments: &[TournamentInfo]) -> String {
    tournaments
        .iter()
        .map(|t| format!("{:>4}  {}\n", t.id, t.name))
        .collect()
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let mut short: String = name.chars().take(width - 1).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, name: &str, wins: u32, score: u32) -> StandingsEntry {
        StandingsEntry {
            player_id: id,
            name: name.to_string(),
            wins,
            losses: 0,
            ties: 0,
            matches: wins,
            score,
        }
    }

    #[test]
    fn test_standings_table_lists_players_in_order() {
        colored::control::set_override(false);
        let out = render_standings(&[entry(1, "Ada", 1, 3), entry(2, "Alan", 0, 0)]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Ada"));
        assert!(lines[1].trim_end().ends_with('3'));
        assert!(lines[2].contains("Alan"));
    }

    #[test]
    fn test_pairings_are_numbered_by_table() {
        colored::control::set_override(false);
        let pairings = vec![Pairing {
            player1_id: 1,
            player1_name: "Ada".to_string(),
            player2_id: 2,
            player2_name: "Alan".to_string(),
        }];
        assert_eq!(render_pairings(&pairings), "Table  1: Ada (1) vs Alan (2)\n");
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("Bartholomew", 6), "Barth…");
        assert_eq!(truncate("Ada", 6), "Ada");
    }
}

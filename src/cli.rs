use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::swiss::Outcome;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament standings and pairings")]
pub struct Cli {
    /// Path to the SQLite database (defaults to $DATABASE_PATH or tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Drop and recreate every table
    Init,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Print the number of registered players
    Count,
    /// Record the outcome of a played match
    Report {
        /// Id of the first player
        player1: i64,
        /// Id of the second player
        player2: i64,
        /// Who won: player1, player2 or tie
        #[arg(short, long, value_parser = parse_outcome)]
        outcome: Outcome,
        /// Tournament the match belongs to
        #[arg(short, long)]
        tournament: Option<i64>,
    },
    /// Print current standings, best first
    Standings {
        /// Only count matches from this tournament
        #[arg(short, long)]
        tournament: Option<i64>,
        #[arg(long)]
        json: bool,
    },
    /// Print pairings for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// Print every recorded result for one player
    History {
        player: i64,
        #[arg(long)]
        json: bool,
    },
    /// Manage tournaments
    Tournament {
        #[clap(subcommand)]
        action: TournamentAction,
    },
    /// Delete all match records
    ClearMatches,
    /// Delete all players (and their matches)
    ClearPlayers,
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum TournamentAction {
    /// Create a tournament
    Create { name: String },
    /// List tournaments
    List,
}

fn parse_outcome(raw: &str) -> Result<Outcome, String> {
    raw.parse().map_err(|e: crate::errors::TournamentError| e.to_string())
}

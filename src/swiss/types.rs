use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TournamentError;

pub type PlayerId = i64;
pub type MatchId = i64;
pub type TournamentId = i64;
pub type Score = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// How a single match ended, from the point of view of its two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "player1")]
    Player1Wins,
    #[serde(rename = "player2")]
    Player2Wins,
    #[serde(rename = "tie")]
    Tie,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Player1Wins => "player1",
            Outcome::Player2Wins => "player2",
            Outcome::Tie => "tie",
        }
    }

    /// Result rows written for (player1, player2).
    pub fn seat_results(&self) -> (SeatResult, SeatResult) {
        match self {
            Outcome::Player1Wins => (SeatResult::Won, SeatResult::Lost),
            Outcome::Player2Wins => (SeatResult::Lost, SeatResult::Won),
            Outcome::Tie => (SeatResult::Tied, SeatResult::Tied),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "player1" => Ok(Outcome::Player1Wins),
            "player2" => Ok(Outcome::Player2Wins),
            "tie" => Ok(Outcome::Tie),
            _ => Err(TournamentError::InvalidOutcome(s.to_string())),
        }
    }
}

/// One player's side of a recorded match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatResult {
    Won,
    Lost,
    Tied,
}

impl SeatResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatResult::Won => "won",
            SeatResult::Lost => "lost",
            SeatResult::Tied => "tied",
        }
    }
}

impl FromStr for SeatResult {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "won" => Ok(SeatResult::Won),
            "lost" => Ok(SeatResult::Lost),
            "tied" => Ok(SeatResult::Tied),
            _ => Err(TournamentError::InvalidOutcome(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: MatchId,
    pub tournament_id: Option<TournamentId>,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub matches: u32,
    pub score: Score,
}

impl StandingsEntry {
    pub fn new(player: &Player) -> Self {
        Self {
            player_id: player.id,
            name: player.name.clone(),
            wins: 0,
            losses: 0,
            ties: 0,
            matches: 0,
            score: 0,
        }
    }

    pub fn record(&mut self, result: SeatResult) {
        match result {
            SeatResult::Won => self.wins += 1,
            SeatResult::Lost => self.losses += 1,
            SeatResult::Tied => self.ties += 1,
        }
        self.matches += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
}

impl Pairing {
    pub fn between(first: &StandingsEntry, second: &StandingsEntry) -> Self {
        Self {
            player1_id: first.player_id,
            player1_name: first.name.clone(),
            player2_id: second.player_id,
            player2_name: second.name.clone(),
        }
    }
}

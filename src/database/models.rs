use chrono::NaiveDateTime;

use crate::errors::TournamentError;
use crate::swiss::types::{self, MatchResult, Outcome, SeatResult};

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<Player> for types::Player {
    fn from(row: Player) -> Self {
        Self { id: row.id, name: row.name }
    }
}

#[derive(Debug, Clone)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct MatchRow {
    pub id: i64,
    pub tournament_id: Option<i64>,
    pub player1_id: i64,
    pub player2_id: i64,
    pub outcome: String,
    pub created_at: Option<NaiveDateTime>,
}

impl TryFrom<MatchRow> for MatchResult {
    type Error = TournamentError;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            tournament_id: row.tournament_id,
            player1_id: row.player1_id,
            player2_id: row.player2_id,
            outcome: row.outcome.parse::<Outcome>()?,
        })
    }
}

// DTOs for joined queries
#[derive(Debug, Clone)]
pub struct PlayerResultRow {
    pub match_id: i64,
    pub tournament_name: Option<String>,
    pub opponent_id: i64,
    pub opponent_name: String,
    pub result: String,
    pub played_at: Option<NaiveDateTime>,
}

impl PlayerResultRow {
    pub fn seat_result(&self) -> Result<SeatResult, TournamentError> {
        self.result.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerRecord {
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
}

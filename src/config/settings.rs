use crate::swiss::types::{SeatResult, Score};

pub const DEFAULT_DATABASE_PATH: &str = "tournament.db";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        }
    }
}

/// Points awarded per match result. Standard Swiss scoring: 3 / 1 / 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringSettings {
    pub win_points: Score,
    pub tie_points: Score,
    pub loss_points: Score,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            win_points: 3,
            tie_points: 1,
            loss_points: 0,
        }
    }
}

impl ScoringSettings {
    pub fn points_for(&self, result: SeatResult) -> Score {
        match result {
            SeatResult::Won => self.win_points,
            SeatResult::Tied => self.tie_points,
            SeatResult::Lost => self.loss_points,
        }
    }

    pub fn score(&self, wins: u32, losses: u32, ties: u32) -> Score {
        [(SeatResult::Won, wins), (SeatResult::Lost, losses), (SeatResult::Tied, ties)]
            .into_iter()
            .map(|(result, count)| count * self.points_for(result))
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub scoring: ScoringSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
            scoring: ScoringSettings::default(),
        }
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database.path = path.into();
        self
    }
}

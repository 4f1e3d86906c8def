use chrono::NaiveDateTime;
use log::{info, warn};
use serde::Serialize;

use crate::config::settings::AppConfig;
use crate::database::{self, DbConn, DbPool};
use crate::errors::{TournamentError, TournamentResult};
use crate::swiss::{self, MatchResult, Outcome, Pairing, Player, PlayerId, SeatResult, StandingsEntry};
use crate::swiss::types::TournamentId;

/// Entry point for every tournament operation.
///
/// Each method takes its own connection from the pool and hands it back when
/// the method returns, on success and on error alike.
pub struct TournamentService {
    pool: DbPool,
    config: AppConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct TournamentInfo {
    pub id: TournamentId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryLine {
    pub match_id: i64,
    pub tournament: Option<String>,
    pub opponent_id: PlayerId,
    pub opponent_name: String,
    pub result: SeatResult,
    pub played_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerHistory {
    pub player: Player,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub matches: Vec<HistoryLine>,
}

impl TournamentService {
    pub fn open(config: AppConfig) -> TournamentResult<Self> {
        let pool = database::create_pool(&config.database.path)?;
        let service = Self { pool, config };

        let mut conn = service.connection()?;
        database::setup::ensure_schema(&mut conn)?;

        info!("Opened tournament database {}", service.config.database.path);
        Ok(service)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn connection(&self) -> TournamentResult<DbConn> {
        Ok(database::get_connection(&self.pool)?)
    }

    pub fn reset_schema(&self) -> TournamentResult<()> {
        let mut conn = self.connection()?;
        database::setup::reset_database(&mut conn)?;
        Ok(())
    }

    pub fn register_player(&self, name: &str) -> TournamentResult<Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }

        let mut conn = self.connection()?;
        let player: Player = database::players::insert_player(&mut conn, name)?.into();
        info!("Registered player {} ({})", player.name, player.id);
        Ok(player)
    }

    pub fn count_players(&self) -> TournamentResult<usize> {
        let mut conn = self.connection()?;
        Ok(database::players::count(&mut conn)?)
    }

    pub fn list_players(&self) -> TournamentResult<Vec<Player>> {
        let mut conn = self.connection()?;
        load_players(&mut conn)
    }

    pub fn delete_players(&self) -> TournamentResult<usize> {
        let mut conn = self.connection()?;
        let removed = database::players::delete_all(&mut conn)?;
        warn!("Deleted {} players and their match history", removed);
        Ok(removed)
    }

    pub fn delete_matches(&self) -> TournamentResult<usize> {
        let mut conn = self.connection()?;
        let removed = database::matches::delete_all(&mut conn)?;
        warn!("Deleted {} matches", removed);
        Ok(removed)
    }

    pub fn create_tournament(&self, name: &str) -> TournamentResult<TournamentInfo> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }

        let mut conn = self.connection()?;
        let row = database::tournaments::insert_tournament(&mut conn, name)?;
        info!("Created tournament {} ({})", row.name, row.id);
        Ok(tournament_info(row))
    }

    pub fn list_tournaments(&self) -> TournamentResult<Vec<TournamentInfo>> {
        let mut conn = self.connection()?;
        let rows = database::tournaments::list_all(&mut conn)?;
        Ok(rows.into_iter().map(tournament_info).collect())
    }

    /// Records one played match. The match row and both result rows are
    /// committed together.
    pub fn report_match(
        &self,
        tournament_id: Option<TournamentId>,
        player1_id: PlayerId,
        player2_id: PlayerId,
        outcome: Outcome,
    ) -> TournamentResult<MatchResult> {
        if player1_id == player2_id {
            return Err(TournamentError::SelfMatch(player1_id));
        }

        let mut conn = self.connection()?;
        ensure_player(&mut conn, player1_id)?;
        ensure_player(&mut conn, player2_id)?;
        if let Some(id) = tournament_id {
            ensure_tournament(&mut conn, id)?;
        }

        let row = database::matches::record_match(
            &mut conn,
            tournament_id,
            player1_id,
            player2_id,
            outcome,
        )?;
        info!("Recorded match {}: {} vs {} -> {}", row.id, player1_id, player2_id, outcome);
        MatchResult::try_from(row)
    }

    pub fn list_match_results(
        &self,
        tournament_id: Option<TournamentId>,
    ) -> TournamentResult<Vec<MatchResult>> {
        let mut conn = self.connection()?;
        load_matches(&mut conn, tournament_id)
    }

    /// Standings over every recorded match, or over one tournament's matches.
    pub fn compute_standings(
        &self,
        tournament_id: Option<TournamentId>,
    ) -> TournamentResult<Vec<StandingsEntry>> {
        let (players, matches) = {
            let mut conn = self.connection()?;
            (load_players(&mut conn)?, load_matches(&mut conn, tournament_id)?)
        };
        swiss::compute_standings(&players, &matches, &self.config.scoring)
    }

    pub fn compute_next_round_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.compute_standings(None)?;
        swiss::swiss_pairings(&standings)
    }

    pub fn player_history(&self, player_id: PlayerId) -> TournamentResult<PlayerHistory> {
        let mut conn = self.connection()?;
        let player: Player = database::players::find_by_id(&mut conn, player_id)?
            .ok_or(TournamentError::UnknownPlayer(player_id))?
            .into();
        let record = database::players::get_record(&mut conn, player_id)?
            .ok_or(TournamentError::UnknownPlayer(player_id))?;

        let matches = database::players::list_results(&mut conn, player_id)?
            .into_iter()
            .map(history_line)
            .collect::<TournamentResult<Vec<_>>>()?;

        Ok(PlayerHistory {
            player,
            won: record.won,
            lost: record.lost,
            tied: record.tied,
            matches,
        })
    }
}

fn load_players(conn: &mut DbConn) -> TournamentResult<Vec<Player>> {
    let rows = database::players::list_all(conn)?;
    Ok(rows.into_iter().map(Player::from).collect())
}

fn load_matches(
    conn: &mut DbConn,
    tournament_id: Option<TournamentId>,
) -> TournamentResult<Vec<MatchResult>> {
    let rows = match tournament_id {
        Some(id) => {
            ensure_tournament(conn, id)?;
            database::matches::list_by_tournament(conn, id)?
        }
        None => database::matches::list_all(conn)?,
    };
    rows.into_iter().map(MatchResult::try_from).collect()
}

fn ensure_player(conn: &mut DbConn, player_id: PlayerId) -> TournamentResult<()> {
    match database::players::find_by_id(conn, player_id)? {
        Some(_) => Ok(()),
        None => Err(TournamentError::UnknownPlayer(player_id)),
    }
}

fn ensure_tournament(conn: &mut DbConn, tournament_id: TournamentId) -> TournamentResult<()> {
    match database::tournaments::find_by_id(conn, tournament_id)? {
        Some(_) => Ok(()),
        None => Err(TournamentError::UnknownTournament(tournament_id)),
    }
}

fn tournament_info(row: database::Tournament) -> TournamentInfo {
    TournamentInfo {
        id: row.id,
        name: row.name,
        created_at: row.created_at,
    }
}

fn history_line(row: database::PlayerResultRow) -> TournamentResult<HistoryLine> {
    Ok(HistoryLine {
        result: row.seat_result()?,
        match_id: row.match_id,
        tournament: row.tournament_name,
        opponent_id: row.opponent_id,
        opponent_name: row.opponent_name,
        played_at: row.played_at,
    })
}

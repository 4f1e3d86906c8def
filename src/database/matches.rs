use anyhow::{Context, Result};
use rusqlite::{params, Transaction};

use super::connection::DbConn;
use super::models::MatchRow;
use crate::swiss::types::{Outcome, SeatResult};

/// Writes the match row and both per-player result rows in one transaction.
/// Nothing is committed if any insert fails.
pub fn record_match(
    conn: &mut DbConn,
    tournament_id: Option<i64>,
    player1_id: i64,
    player2_id: i64,
    outcome: Outcome,
) -> Result<MatchRow> {
    let tx = conn.transaction().context("Failed to start match transaction")?;

    let row = insert_match(&tx, tournament_id, player1_id, player2_id, outcome)?;
    let (first, second) = outcome.seat_results();
    insert_result(&tx, row.id, player1_id, first)?;
    insert_result(&tx, row.id, player2_id, second)?;

    tx.commit().context("Failed to commit match")?;
    Ok(row)
}

fn insert_match(
    tx: &Transaction,
    tournament_id: Option<i64>,
    player1_id: i64,
    player2_id: i64,
    outcome: Outcome,
) -> Result<MatchRow> {
    let sql = "INSERT INTO matches (tournament_id, player1_id, player2_id, outcome) VALUES (?1, ?2, ?3, ?4) RETURNING id, tournament_id, player1_id, player2_id, outcome, created_at";

    tx.query_row(
        sql,
        params![tournament_id, player1_id, player2_id, outcome.as_str()],
        parse_match_row,
    )
    .context("Failed to insert match")
}

fn insert_result(tx: &Transaction, match_id: i64, player_id: i64, result: SeatResult) -> Result<()> {
    let sql = "INSERT INTO match_results (match_id, player_id, result) VALUES (?1, ?2, ?3)";

    tx.execute(sql, params![match_id, player_id, result.as_str()])
        .with_context(|| format!("Failed to insert result for player {player_id}"))
        .map(|_| ())
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRow> {
    Ok(MatchRow {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        player1_id: row.get(2)?,
        player2_id: row.get(3)?,
        outcome: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<MatchRow>> {
    let sql = "SELECT id, tournament_id, player1_id, player2_id, outcome, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_by_tournament(
    conn: &mut DbConn,
    tournament_id: i64,
) -> Result<Vec<MatchRow>> {
    let sql = "SELECT id, tournament_id, player1_id, player2_id, outcome, created_at FROM matches WHERE tournament_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

// match_results rows go with their match via ON DELETE CASCADE
pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
}

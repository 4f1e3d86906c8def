use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{Player, PlayerRecord, PlayerResultRow};

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Player>> {
    let sql = "SELECT id, name, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

/// All players in registration order.
pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count(conn: &mut DbConn) -> Result<usize> {
    let sql = "SELECT COUNT(id) FROM players";
    let total: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .context("Failed to count players")?;
    Ok(total as usize)
}

pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to delete players")
}

pub fn get_record(conn: &mut DbConn, player_id: i64) -> Result<Option<PlayerRecord>> {
    let sql = "SELECT won, lost, tied FROM player_records WHERE player_id = ?1";

    conn.query_row(sql, params![player_id], |row| {
        Ok(PlayerRecord {
            won: row.get(0)?,
            lost: row.get(1)?,
            tied: row.get(2)?,
        })
    })
    .optional()
    .context("Failed to query player record")
}

pub fn list_results(conn: &mut DbConn, player_id: i64) -> Result<Vec<PlayerResultRow>> {
    let sql = "
        SELECT
            m.id,
            t.name AS tournament_name,
            opp.id AS opponent_id,
            opp.name AS opponent_name,
            r.result,
            m.created_at
        FROM match_results r
        JOIN matches m ON m.id = r.match_id
        JOIN players opp
            ON opp.id = CASE WHEN m.player1_id = r.player_id THEN m.player2_id ELSE m.player1_id END
        LEFT JOIN tournaments t ON t.id = m.tournament_id
        WHERE r.player_id = ?1
        ORDER BY m.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![player_id], |row| {
        Ok(PlayerResultRow {
            match_id: row.get(0)?,
            tournament_name: row.get(1)?,
            opponent_id: row.get(2)?,
            opponent_name: row.get(3)?,
            result: row.get(4)?,
            played_at: row.get(5)?,
        })
    })?.collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

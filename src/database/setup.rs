use anyhow::{Context, Result};

use super::connection::DbConn;

pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    let tx = conn.transaction().context("Failed to start schema transaction")?;
    for (idx, statement) in statements.iter().enumerate() {
        tx.execute(statement, [])
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }
    tx.commit().context("Failed to commit schema")?;

    log::info!("Database schema reset successfully");
    Ok(())
}

/// Creates the schema on a fresh database file; leaves existing data alone.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    if schema_exists(conn)? {
        return Ok(());
    }
    log::info!("No tournament schema found, creating it");
    reset_database(conn)
}

fn schema_exists(conn: &mut DbConn) -> Result<bool> {
    let sql = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'players'";
    let count: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .context("Failed to inspect database schema")?;
    Ok(count > 0)
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sql_statements_drops_blank_segments() {
        let statements = split_sql_statements("CREATE TABLE a (x);\n\n  ;DROP TABLE b;  ");
        assert_eq!(statements, vec!["CREATE TABLE a (x)", "DROP TABLE b"]);
    }

    #[test]
    fn test_bundled_schema_has_every_table() {
        let statements = split_sql_statements(include_str!("schema.sql"));
        for table in ["players", "tournaments", "matches", "match_results"] {
            let create = format!("CREATE TABLE {table} (");
            assert!(statements.iter().any(|s| s.starts_with(&create)), "missing {table}");
        }
    }
}

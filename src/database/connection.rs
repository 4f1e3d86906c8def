use std::time::Duration;

use anyhow::{Context, Result};
use r2d2::ManageConnection;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const CHECKOUT_TIMEOUT: Duration = Duration::from_millis(500);

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(database_path);
    check_reachable(&manager)
        .and_then(|_| build_pool(manager))
        .with_context(|| format!("Failed to open tournament database at {database_path}"))
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    SqliteConnectionManager::file(path)
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

// One direct attempt; r2d2 would keep retrying until its checkout timeout
fn check_reachable(manager: &SqliteConnectionManager) -> Result<()> {
    manager
        .connect()
        .map(drop)
        .context("Failed to connect to database")
}

// Single caller, so a single connection is handed out per operation
fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(1)
        .min_idle(Some(0))
        .connection_timeout(CHECKOUT_TIMEOUT)
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}

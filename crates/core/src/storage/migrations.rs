//! Database migration system
//!
//! Tracks schema versions and applies migrations in order, each inside its
//! own transaction.

use rusqlite::Connection;
use tracing::{info, instrument};

use crate::error::Result;

/// A database migration
pub struct Migration {
    /// Version number (must be sequential starting from 1)
    pub version: u32,
    pub description: &'static str,
    pub sql: &'static str,
}

/// All migrations in order
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "Client state key-value table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS client_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
        "#,
    },
];

fn init_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            applied_at TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

/// Current schema version, 0 for a fresh database
pub fn current_version(conn: &Connection) -> Result<u32> {
    let version: Option<u32> =
        conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get(0)
        })?;
    Ok(version.unwrap_or(0))
}

/// Run all pending migrations, returning how many were applied
#[instrument(skip(conn))]
pub fn run_migrations(conn: &mut Connection) -> Result<usize> {
    init_migrations_table(conn)?;

    let from = current_version(conn)?;
    let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > from).collect();

    for migration in &pending {
        info!(
            version = migration.version,
            description = migration.description,
            "Applying migration"
        );

        let tx = conn.transaction()?;
        tx.execute_batch(migration.sql)?;
        tx.execute(
            "INSERT INTO schema_migrations (version, description, applied_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                migration.version,
                migration.description,
                chrono::Utc::now().to_rfc3339()
            ],
        )?;
        tx.commit()?;
    }

    if !pending.is_empty() {
        info!(from, to = current_version(conn)?, "Database schema updated");
    }

    Ok(pending.len())
}

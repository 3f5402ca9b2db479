//! Client state persistence
//!
//! Key-value pairs that outlive a single run, like the session flag.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use tracing::instrument;

use super::parse::{parse_timestamp, OptionalExt};
use crate::error::Result;

/// A stored key-value pair
#[derive(Debug, Clone)]
pub struct ClientStateEntry {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Client state store
pub struct ClientStateStore<'a> {
    conn: &'a Connection,
}

impl<'a> ClientStateStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Set a value, last write wins
    #[instrument(skip(self, value))]
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO client_state (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Get a value
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM client_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Get a value with its last update time
    pub fn entry(&self, key: &str) -> Result<Option<ClientStateEntry>> {
        let entry = self
            .conn
            .query_row(
                "SELECT key, value, updated_at FROM client_state WHERE key = ?1",
                params![key],
                |row| {
                    Ok(ClientStateEntry {
                        key: row.get(0)?,
                        value: row.get(1)?,
                        updated_at: parse_timestamp(&row.get::<_, String>(2)?)?,
                    })
                },
            )
            .optional()?;
        Ok(entry)
    }

    /// Remove a value; returns whether anything was removed
    #[instrument(skip(self))]
    pub fn remove(&self, key: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM client_state WHERE key = ?1", params![key])?;
        Ok(removed > 0)
    }
}

//! Client-side storage for EtumLabs
//!
//! The persisted surface is a single SQLite key-value table standing in for
//! browser local storage.

mod client_state;
mod memory;
mod migrations;
mod parse;
mod traits;

use rusqlite::Connection;
use std::path::Path;
use tracing::instrument;

use crate::error::Result;

pub use client_state::{ClientStateEntry, ClientStateStore};
pub use memory::MemoryStore;
pub use traits::SessionStore;

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(mut conn: Connection) -> Result<Self> {
        migrations::run_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        migrations::current_version(&self.conn).unwrap_or(0)
    }

    /// Get the client state store
    pub fn client_state(&self) -> ClientStateStore<'_> {
        ClientStateStore::new(&self.conn)
    }
}

impl SessionStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.client_state().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.client_state().set(key, value)
    }

    fn clear(&self, key: &str) -> Result<()> {
        self.client_state().remove(key).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.schema_version(), 1);
    }

    #[test]
    fn test_values_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.db");

        {
            let db = Database::open(&path).unwrap();
            SessionStore::set(&db, "isAuthenticated", "true").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(
            SessionStore::get(&db, "isAuthenticated").unwrap().as_deref(),
            Some("true")
        );
    }
}

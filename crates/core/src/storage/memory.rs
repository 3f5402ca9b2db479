//! In-memory session store for tests and ephemeral sessions

use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::SessionStore;
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| Error::LockPoisoned("memory store"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .map_err(|_| Error::LockPoisoned("memory store"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        self.values
            .lock()
            .map_err(|_| Error::LockPoisoned("memory store"))?
            .remove(key);
        Ok(())
    }
}

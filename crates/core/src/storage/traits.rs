//! Storage traits
//!
//! The client-side key-value store behind the session flag. Implementations
//! exist for SQLite and for memory; shared handles forward to their inner
//! store so a single store can back several views.

use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};

/// Persistent client-side key-value storage
pub trait SessionStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn clear(&self, key: &str) -> Result<()>;
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn clear(&self, key: &str) -> Result<()> {
        (**self).clear(key)
    }
}

impl<T: SessionStore> SessionStore for Mutex<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.lock()
            .map_err(|_| Error::LockPoisoned("session store"))?
            .get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()
            .map_err(|_| Error::LockPoisoned("session store"))?
            .set(key, value)
    }

    fn clear(&self, key: &str) -> Result<()> {
        self.lock()
            .map_err(|_| Error::LockPoisoned("session store"))?
            .clear(key)
    }
}

//! Site configuration
//!
//! Loaded from an optional TOML file. A missing file or an empty table
//! yields a working site:
//!
//! ```toml
//! [auth]
//! username = "etumlabadmin"
//! password_hash = "$argon2id$v=19$..."
//!
//! [delays]
//! login_ms = 1000
//! register_ms = 2000
//! profile_save_ms = 1000
//!
//! [presentation.event_type]
//! tournament = "crimson"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::presentation::{PresentationOverrides, PresentationTags};

/// File name looked up in the config directory
pub const CONFIG_FILE_NAME: &str = "etumlabs.toml";

/// The single accepted account
///
/// The built-in password only applies when the whole `[auth]` table is
/// missing; a table that names no secret is rejected at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_username")]
    pub username: String,
    /// Plaintext secret, hashed at startup
    #[serde(default)]
    pub password: Option<String>,
    /// Pre-hashed argon2 PHC string; takes precedence over `password`
    #[serde(default)]
    pub password_hash: Option<String>,
}

fn default_username() -> String {
    "etumlabadmin".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: Some("california".to_string()),
            password_hash: None,
        }
    }
}

/// Artificial latency of the simulated backend calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    pub login_ms: u64,
    pub register_ms: u64,
    pub profile_save_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            login_ms: 1000,
            register_ms: 2000,
            profile_save_ms: 1000,
        }
    }
}

impl DelayConfig {
    /// No waiting at all; used by tests
    pub fn none() -> Self {
        Self {
            login_ms: 0,
            register_ms: 0,
            profile_save_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn register(&self) -> Duration {
        Duration::from_millis(self.register_ms)
    }

    pub fn profile_save(&self) -> Duration {
        Duration::from_millis(self.profile_save_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub auth: AuthConfig,
    pub delays: DelayConfig,
    pub presentation: PresentationOverrides,
}

impl SiteConfig {
    /// Parse configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn presentation_tags(&self) -> PresentationTags {
        PresentationTags::with_overrides(&self.presentation)
    }
}

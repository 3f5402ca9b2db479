//! Application state management

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use etumlabs_core::{
    config::CONFIG_FILE_NAME, Authenticator, Catalog, Database, Error, FixedCredential,
    PresentationTags, Result, SessionGate, SessionStore, SiteConfig,
};
use tracing::info;

pub type SharedStore = Arc<dyn SessionStore + Send + Sync>;
pub type SharedAuthenticator = Arc<dyn Authenticator + Send + Sync>;
pub type SiteGate = SessionGate<SharedStore, SharedAuthenticator>;

/// Main application state
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: SiteConfig,
    pub tags: PresentationTags,
    pub gate: Arc<SiteGate>,
}

impl AppState {
    /// Open the on-disk client state and load config from `config_path`,
    /// or from the platform config directory when none is given
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let dirs = Self::project_dirs()?;
        let data_dir = dirs.data_dir().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let config_path = config_path.unwrap_or_else(|| dirs.config_dir().join(CONFIG_FILE_NAME));
        let config = SiteConfig::load(&config_path)?;

        let db_path = data_dir.join("etumlabs.db");
        let db = Database::open(&db_path)?;
        info!(path = %db_path.display(), "Opened client state");
        let store: SharedStore = Arc::new(Mutex::new(db));

        Self::with_store(config, store)
    }

    /// Assemble state around an already opened session store
    pub fn with_store(config: SiteConfig, store: SharedStore) -> Result<Self> {
        let credential: SharedAuthenticator = Arc::new(FixedCredential::from_config(&config.auth)?);
        let catalog = Catalog::sample()?;
        let tags = config.presentation_tags();

        info!(events = catalog.events.len(), "Application state ready");

        Ok(Self {
            catalog: Arc::new(catalog),
            config,
            tags,
            gate: Arc::new(SessionGate::new(store, credential)),
        })
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("dev", "etumlabs", "etumlabs").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use etumlabs_core::{DelayConfig, MemoryStore};

    /// Zero-delay state over an in-memory session store
    pub fn memory_state() -> AppState {
        let mut config = SiteConfig::default();
        config.delays = DelayConfig::none();
        let store: SharedStore = Arc::new(MemoryStore::new());
        AppState::with_store(config, store).unwrap()
    }
}

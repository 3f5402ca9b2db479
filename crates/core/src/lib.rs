//! EtumLabs Core Library
//!
//! Models, calendar layout, event/media filters, the session gate and its
//! client-side storage for the EtumLabs community events site.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod credential;
pub mod error;
pub mod filter;
pub mod invariants;
pub mod models;
pub mod presentation;
pub mod session;
pub mod storage;
pub mod validation;

pub use calendar::{date_key, CalendarGrid, CalendarMonth, Cell};
pub use catalog::{AdminData, Catalog};
pub use config::{AuthConfig, DelayConfig, SiteConfig};
pub use credential::{Authenticator, FixedCredential};
pub use error::{Error, Result, ValidationError};
pub use models::*;
pub use presentation::{PresentationTags, TagFamily};
pub use session::{GateState, SessionGate, AUTHENTICATED_MARKER, SESSION_KEY};
pub use storage::{Database, MemoryStore, SessionStore};
pub use validation::{ProfileEditForm, RegistrationForm};

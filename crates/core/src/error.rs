//! Error types for EtumLabs Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid credentials. Access denied.")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("A submission is already pending")]
    SubmissionPending,

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(&'static str),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Form validation failures. The display text is shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,

    #[error("You must agree to the Terms of Service and Privacy Policy.")]
    TermsNotAccepted,

    #[error("Username must be at least 3 characters long.")]
    UsernameTooShort,

    #[error("Minecraft username must be at least 3 characters long.")]
    MinecraftUsernameTooShort,

    #[error("New passwords do not match.")]
    NewPasswordMismatch,

    #[error("New password must be at least 6 characters long.")]
    NewPasswordTooShort,
}

pub type Result<T> = std::result::Result<T, Error>;

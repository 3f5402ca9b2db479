//! Credential verification
//!
//! The site accepts exactly one configured account. The password is kept as
//! an argon2 PHC hash, never as plaintext, and verification sits behind the
//! [`Authenticator`] trait so a remote verifier can replace it.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::Arc;

use tracing::instrument;

use crate::config::AuthConfig;
use crate::error::{Error, Result};

/// Checks a username/password pair
pub trait Authenticator {
    fn verify(&self, username: &str, password: &str) -> bool;
}

impl<T: Authenticator + ?Sized> Authenticator for Arc<T> {
    fn verify(&self, username: &str, password: &str) -> bool {
        (**self).verify(username, password)
    }
}

/// The single accepted account
#[derive(Debug, Clone)]
pub struct FixedCredential {
    username: String,
    password_hash: String,
}

impl FixedCredential {
    /// Hash `password` with a fresh salt
    pub fn from_plaintext(username: impl Into<String>, password: &str) -> Result<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::PasswordHash(e.to_string()))?
            .to_string();
        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }

    /// Use an existing PHC string
    pub fn from_hash(username: impl Into<String>, password_hash: impl Into<String>) -> Result<Self> {
        let password_hash = password_hash.into();
        PasswordHash::new(&password_hash).map_err(|e| Error::PasswordHash(e.to_string()))?;
        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }

    /// Build from the `[auth]` config table; a stored hash wins over plaintext
    #[instrument(skip(config), fields(username = %config.username))]
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        match (&config.password_hash, &config.password) {
            (Some(hash), _) => Self::from_hash(config.username.clone(), hash.clone()),
            (None, Some(password)) => Self::from_plaintext(config.username.clone(), password),
            (None, None) => Err(Error::PasswordHash(
                "auth config needs password or password_hash".to_string(),
            )),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl Authenticator for FixedCredential {
    fn verify(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }
        let parsed = match PasswordHash::new(&self.password_hash) {
            Ok(h) => h,
            Err(_) => return false,
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_plaintext_credential() {
        let credential = FixedCredential::from_plaintext("etumlabadmin", "california").unwrap();
        assert!(credential.verify("etumlabadmin", "california"));
        assert!(!credential.verify("etumlabadmin", "wrong"));
        assert!(!credential.verify("someone", "california"));
        assert!(!credential.password_hash().contains("california"));
    }

    #[test]
    fn test_each_hash_gets_fresh_salt() {
        let a = FixedCredential::from_plaintext("admin", "secret123").unwrap();
        let b = FixedCredential::from_plaintext("admin", "secret123").unwrap();
        assert_ne!(a.password_hash(), b.password_hash());
        assert!(b.verify("admin", "secret123"));
    }

    #[test]
    fn test_from_hash_round_trip() {
        let original = FixedCredential::from_plaintext("admin", "secret123").unwrap();
        let restored = FixedCredential::from_hash("admin", original.password_hash()).unwrap();
        assert!(restored.verify("admin", "secret123"));
    }

    #[test]
    fn test_from_hash_rejects_garbage() {
        assert!(matches!(
            FixedCredential::from_hash("admin", "not-a-phc-string"),
            Err(Error::PasswordHash(_))
        ));
    }

    #[test]
    fn test_from_config_requires_secret() {
        let config = AuthConfig {
            username: "admin".to_string(),
            password: None,
            password_hash: None,
        };
        assert!(FixedCredential::from_config(&config).is_err());
    }
}

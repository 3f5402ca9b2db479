//! Form validation for registration and profile edits
//!
//! Checks run in a fixed order and stop at the first failure, so a form
//! only ever reports one message. Lengths count characters, not bytes.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_USERNAME_LEN: usize = 3;

/// Sign-up form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub minecraft_username: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
    pub subscribe_newsletter: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if char_len(&self.password) < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if !self.agree_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        if char_len(&self.username) < MIN_USERNAME_LEN {
            return Err(ValidationError::UsernameTooShort);
        }
        if char_len(&self.minecraft_username) < MIN_USERNAME_LEN {
            return Err(ValidationError::MinecraftUsernameTooShort);
        }
        Ok(())
    }
}

/// Profile edit form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEditForm {
    pub email: String,
    pub minecraft_username: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ProfileEditForm {
    /// Password rules only apply when a new password was typed
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.new_password.is_empty() {
            return Ok(());
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::NewPasswordMismatch);
        }
        if char_len(&self.new_password) < MIN_PASSWORD_LEN {
            return Err(ValidationError::NewPasswordTooShort);
        }
        Ok(())
    }

    /// Blank out every password field
    pub fn clear_passwords(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            username: "Builder".to_string(),
            email: "builder@example.com".to_string(),
            minecraft_username: "BuilderMC".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            agree_to_terms: true,
            subscribe_newsletter: false,
        }
    }

    #[test]
    fn test_valid_registration() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_short_password() {
        let mut form = valid_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Password must be at least 6 characters long."
        );
    }

    #[test]
    fn test_mismatch_reported_before_length() {
        let mut form = valid_form();
        form.password = "abc".to_string();
        form.confirm_password = "abd".to_string();
        form.agree_to_terms = false;
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_terms_checked_before_usernames() {
        let mut form = valid_form();
        form.agree_to_terms = false;
        form.username = "ab".to_string();
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_short_usernames() {
        let mut form = valid_form();
        form.username = "ab".to_string();
        assert_eq!(form.validate(), Err(ValidationError::UsernameTooShort));

        let mut form = valid_form();
        form.minecraft_username = "x".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MinecraftUsernameTooShort));
    }

    #[test]
    fn test_lengths_count_characters() {
        let mut form = valid_form();
        // Two characters, four bytes
        form.username = "äö".to_string();
        assert_eq!(form.validate(), Err(ValidationError::UsernameTooShort));
    }

    #[test]
    fn test_profile_without_new_password() {
        let form = ProfileEditForm {
            email: "new@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_profile_new_password_rules() {
        let mut form = ProfileEditForm {
            new_password: "abcdef".to_string(),
            confirm_password: "abcdeg".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::NewPasswordMismatch));

        form.new_password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        assert_eq!(form.validate(), Err(ValidationError::NewPasswordTooShort));

        form.clear_passwords();
        assert!(form.new_password.is_empty() && form.confirm_password.is_empty());
    }
}

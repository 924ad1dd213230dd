//! Validation for the login form.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Validation errors that can occur on the login form.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be blank
/// - Email must look like `local@domain.tld`
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    let well_formed = EMAIL_PATTERN
        .as_ref()
        .map_or_else(|| trimmed.contains('@'), |pattern| pattern.is_match(trimmed));
    if !well_formed {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates a password.
///
/// # Validation rules
/// - Password must not be empty
/// - Password must be at least [`MIN_PASSWORD_LEN`] characters long
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Both fields, email first.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    validate_password(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("admin@omniadly.io").is_ok());
        assert!(validate_email("  first.last+tag@mail.example.com ").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("   "), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("admin"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("admin@host"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a b@x.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_password() {
        assert_eq!(validate_password(""), Err(ValidationError::PasswordRequired));
        assert_eq!(validate_password("12345"), Err(ValidationError::PasswordTooShort));
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_validate_credentials_reports_email_first() {
        assert_eq!(
            validate_credentials("", ""),
            Err(ValidationError::EmailRequired)
        );
        assert_eq!(
            validate_credentials("a@x.com", "123"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_credentials("a@x.com", "secret1").is_ok());
    }
}

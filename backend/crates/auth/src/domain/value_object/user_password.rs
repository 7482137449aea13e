//! User Password Value Object
//!
//! Domain value object for user passwords.
//! Delegates to `platform::password` for cryptographic operations.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with domain-specific error handling.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Validation Rules (NIST SP 800-63B)
    /// - 8 to 128 characters, counted after NFKC normalization
    /// - No control characters
    /// - Not empty/whitespace only
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw)
            .map_err(|e| AppError::bad_request(e.to_string()))?;
        Ok(Self(clear_text))
    }

    /// Access the inner ClearTextPassword
    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Stored Hash)
// ============================================================================

/// Stored Argon2id hash of a user's password
#[derive(Debug, Clone)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword) -> AppResult<Self> {
        raw.inner()
            .hash()
            .map(Self)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Load from a database PHC string
    pub fn from_db(hash: String) -> AppResult<Self> {
        HashedPassword::from_phc(hash)
            .map(Self)
            .map_err(|e| AppError::internal(format!("Stored password hash is invalid: {e}")))
    }

    /// Get the PHC string for database storage
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Verify a raw password against this hash (constant-time)
    pub fn verify(&self, raw: &RawPassword) -> AppResult<bool> {
        self.0
            .verify(raw.inner())
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_and_verify() {
        let raw = RawPassword::new("correct horse battery staple".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw).unwrap();

        assert!(stored.verify(&raw).unwrap());

        let wrong = RawPassword::new("incorrect horse battery staple".to_string()).unwrap();
        assert!(!stored.verify(&wrong).unwrap());
    }

    #[test]
    fn test_raw_password_policy() {
        assert!(RawPassword::new("short".to_string()).is_err());
        assert!(RawPassword::new("long enough password".to_string()).is_ok());
    }

    #[test]
    fn test_debug_is_redacted() {
        let raw = RawPassword::new("correct horse battery staple".to_string()).unwrap();
        assert!(!format!("{raw:?}").contains("horse"));
    }
}

//! User Password Value Object
//!
//! Domain value object for user passwords.
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{UserPassword, RawPassword};
//!
//! let raw = RawPassword::new("secret1".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};
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
    /// Create a new raw password, applying the registration policy
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text =
            ClearTextPassword::new(raw).map_err(|e| AppError::bad_request(e.to_string()))?;

        Ok(Self(clear_text))
    }

    /// Wrap a password presented at login (no policy applied)
    pub fn for_verification(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }

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
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
///
/// Stores password in Argon2id PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Create from raw password by hashing
    ///
    /// CPU and memory heavy; callers on the async runtime should run it on
    /// the blocking pool.
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw.inner().hash(pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AppError::internal("Unexpected error during password hashing")
            }
        })?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AppError::internal("Invalid password hash in database"))?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }

    /// Spend the same work as [`verify`](Self::verify) when there is no
    /// account to check against; always `false`
    pub fn verify_absent(raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        HashedPassword::verify_dummy(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("secret1".to_string()).is_ok());

        let err = RawPassword::new("abc".to_string()).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.message(),
            "Please enter a password with 6 or more characters"
        );

        assert!(RawPassword::new("".to_string()).is_err());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();

        assert!(hashed.verify(&raw, None));

        let wrong = RawPassword::for_verification("secret2".to_string());
        assert!(!hashed.verify(&wrong, None));
        assert!(!UserPassword::verify_absent(&raw, None));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, Some(b"pepper")).unwrap();

        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, Some(b"pepper")));
        assert!(UserPassword::from_phc_string("plaintext").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword123!".to_string()).unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));
    }
}

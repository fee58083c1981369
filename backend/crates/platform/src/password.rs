//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Zeroization of sensitive data
//! - Constant-time comparison
//! - A fixed dummy hash so that lookups for unknown accounts cost the same
//!   as real verifications

use std::fmt;
use std::sync::OnceLock;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length (bounds Argon2 input)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Please enter a password with {min} or more characters")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password, enforcing the registration policy
    ///
    /// Unicode is normalized using NFKC before validation.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized = Self::normalize(raw);

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Count Unicode code points (not bytes)
        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        // Control characters other than space/tab/newline
        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized.to_string()))
    }

    /// Wrap a password supplied at login
    ///
    /// No policy is applied: a login attempt with a password that would be
    /// rejected at registration simply fails verification.
    pub fn for_verification(raw: String) -> Self {
        Self(Self::normalize(raw).to_string())
    }

    fn normalize(raw: String) -> Zeroizing<String> {
        let raw = Zeroizing::new(raw);
        Zeroizing::new(raw.nfkc().collect())
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = self.as_bytes().to_vec();
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        Zeroizing::new(bytes)
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret for additional security
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);

        // Generate random salt (128 bits = 16 bytes)
        let salt = SaltString::generate(OsRng);

        // OWASP recommended Argon2id parameters:
        // m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// This type stores the Argon2id hash in PHC format, which includes
/// algorithm, version, parameters, salt and hash.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

static DUMMY_HASH: OnceLock<Option<HashedPassword>> = OnceLock::new();

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Uses constant-time comparison to prevent timing attacks.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = password.peppered(pepper);

        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }

    /// Run a full verification against a fixed throwaway hash
    ///
    /// Always returns `false`. Called when no account matches, so the
    /// response time does not reveal whether an email is registered.
    pub fn verify_dummy(password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let dummy = DUMMY_HASH.get_or_init(|| {
            ClearTextPassword::for_verification("dummy-password-for-timing".to_string())
                .hash(None)
                .ok()
        });

        if let Some(dummy) = dummy {
            let _ = dummy.verify(password, pepper);
        }
        false
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
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
    fn test_password_too_short() {
        let result = ClearTextPassword::new("short".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::TooShort { min: 6, actual: 5 })
        ));
    }

    #[test]
    fn test_six_characters_is_enough() {
        assert!(ClearTextPassword::new("secret".to_string()).is_ok());
        assert!(ClearTextPassword::new("secret1".to_string()).is_ok());
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = ClearTextPassword::new("        ".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}defg".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_unicode_password() {
        // Counted in code points, not bytes
        assert!(ClearTextPassword::new("パスワード安全".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::for_verification("secret1".to_string());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong_password = ClearTextPassword::for_verification("secret2".to_string());
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_verification_wrapper_skips_policy() {
        // Too short for registration, still comparable at login
        let short = ClearTextPassword::for_verification("abc".to_string());
        let hashed = ClearTextPassword::new("secret1".to_string())
            .unwrap()
            .hash(None)
            .unwrap();
        assert!(!hashed.verify(&short, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::for_verification("TestPassword123!".to_string());
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::for_verification("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_dummy_never_matches() {
        let password = ClearTextPassword::for_verification("dummy-password-for-timing".to_string());
        assert!(!HashedPassword::verify_dummy(&password, None));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::for_verification("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}

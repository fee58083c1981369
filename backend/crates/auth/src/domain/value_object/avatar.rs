//! Avatar URL derived from the account email (Gravatar)

use platform::crypto::{sha256, to_hex};

use super::email::Email;

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// Gravatar URL for `email`: 200px, PG-rated, "mystery person" fallback
pub fn gravatar_url(email: &Email) -> String {
    let digest = sha256(email.avatar_key().as_bytes());
    format!("{}/{}?s=200&r=pg&d=mm", GRAVATAR_BASE, to_hex(&digest))
}

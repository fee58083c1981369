//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - A JSON body extractor that rejects with the common error shape
//! - Typed identifiers shared by accounts, profiles and posts
//! - The owner-scoped purge contract used by account deletion
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod field;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
pub mod owner;

//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, base64url)
//! - Password hashing (Argon2id)
//! - Signed, time-limited tokens
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
pub mod token;

//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the `Identity` extractor.

pub mod dto;
pub mod gate;
pub mod handlers;
pub mod router;

pub use handlers::AccountsAppState;
pub use router::accounts_router;

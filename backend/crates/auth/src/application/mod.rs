//! Application Layer
//!
//! Use cases and application services.

pub mod account_info;
pub mod config;
pub mod delete_account;
pub mod login;
pub mod logout;
pub mod register;
pub mod session_gate;
pub mod session_token;

// Re-exports
pub use account_info::AccountInfoUseCase;
pub use config::{AuthConfig, ConfigError};
pub use delete_account::{DeleteAccountOutput, DeleteAccountUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use session_gate::{Identity, SessionGate};

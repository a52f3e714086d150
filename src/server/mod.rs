//! HTTP service exposing the validator.
//!
//! Wire format follows the public contract of the service: requests carry
//! `{ "senha": ... }` and responses use the `valida` / `erros` /
//! `confirmacao` field names.

pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;

pub use config::{ConfigError, Environment, ServerConfig};
pub use error::AppError;
pub use router::build_app_router;
pub use state::AppState;

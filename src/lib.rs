//! Password policy validation library
//!
//! This library checks a candidate password against an ordered set of
//! independent rules and reports every violated rule, not just the first.
//!
//! # Features
//!
//! - `server` (default): HTTP service exposing `POST /validar-senha`
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables (server)
//!
//! - `HOST`: bind address (default: `0.0.0.0`)
//! - `PORT`: listening port (default: `3001`)
//! - `APP_ENV`: `production` hides error details in fault responses
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{RuleSet, Validator};
//! use secrecy::SecretString;
//!
//! let validator = Validator::new(RuleSet::standard());
//!
//! let password = SecretString::new("MyP@ssw0rd".to_string().into());
//! let verdict = validator.evaluate(&password);
//! assert!(verdict.valid);
//!
//! let password = SecretString::new("password1".to_string().into());
//! let verdict = validator.evaluate(&password);
//! assert_eq!(verdict.errors.len(), 2);
//! ```

mod rules;
mod validator;

#[cfg(feature = "server")]
pub mod server;

// Public API
pub use rules::{
    Check, MIN_LENGTH, MIN_LENGTH_RULE, NUMBER, Rule, RuleSet, RuleSetError, SPECIAL,
    SPECIAL_CHARS, UPPERCASE,
};
pub use validator::{InputError, Validator, Verdict, check_field, validate_password};

//! Password validator - runs every rule and aggregates the violations.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use thiserror::Error;

use crate::rules::RuleSet;

/// Reasons a submitted field cannot be evaluated at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("password field is required")]
    Missing,
    #[error("password field must be a string")]
    NotAString,
}

/// Outcome of validating one password.
///
/// `errors` holds one message per failed rule, in rule set order, and is
/// empty iff `valid` is `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Verdict {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Verdict for a field that failed the precondition gate.
    pub fn rejected(err: InputError) -> Self {
        Self {
            valid: false,
            errors: vec![err.to_string()],
        }
    }
}

/// Checks that a submitted field is present and is a non-empty string.
///
/// `null` and `""` count as missing. Any other JSON type is rejected as
/// not being a string.
pub fn check_field(field: Option<&Value>) -> Result<&str, InputError> {
    match field {
        None | Some(Value::Null) => Err(InputError::Missing),
        Some(Value::String(s)) if s.is_empty() => Err(InputError::Missing),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(InputError::NotAString),
    }
}

/// Evaluates passwords against an injected, immutable [`RuleSet`].
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: RuleSet,
}

impl Validator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluates a password against every rule.
    ///
    /// All rules run on every call, and failed rules are reported in rule
    /// set order.
    pub fn evaluate(&self, password: &SecretString) -> Verdict {
        let pwd = password.expose_secret();

        let errors: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| !rule.is_satisfied_by(pwd))
            .map(|rule| rule.message.to_string())
            .collect();

        let verdict = Verdict::from_errors(errors);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            valid = verdict.valid,
            violations = verdict.errors.len(),
            "password evaluated"
        );

        verdict
    }

    /// Runs the precondition gate on a raw JSON field, then evaluates it.
    ///
    /// # Errors
    ///
    /// Returns the [`InputError`] if the gate rejects the field; no rule is
    /// run in that case. [`Verdict::rejected`] turns it into a verdict.
    pub fn evaluate_field(&self, field: Option<&Value>) -> Result<Verdict, InputError> {
        let raw = match check_field(field) {
            Ok(raw) => raw,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(reason = %err, "password field rejected");
                return Err(err);
            }
        };

        // The caller still owns the plaintext in `field`; the secret copy
        // only keeps it out of Debug output from here on.
        let password = SecretString::new(raw.to_string().into());
        Ok(self.evaluate(&password))
    }
}

/// Validates a password against the standard rule set.
pub fn validate_password(password: &SecretString) -> Verdict {
    Validator::default().evaluate(password)
}

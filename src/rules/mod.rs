//! Password policy rules
//!
//! Each rule checks one property of the candidate password and carries the
//! message reported when that property is missing.

mod charset;
mod length;

pub use charset::{NUMBER, SPECIAL, SPECIAL_CHARS, UPPERCASE};
pub use length::{MIN_LENGTH, MIN_LENGTH_RULE};

use std::collections::HashSet;
use thiserror::Error;

/// Predicate over the candidate password. `true` means the rule is satisfied.
pub type Check = fn(&str) -> bool;

/// A named predicate paired with its violation message.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(name: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            name,
            check,
            message,
        }
    }

    /// Returns `true` if `password` satisfies this rule.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Duplicate rule name: {0}")]
    DuplicateName(&'static str),
}

/// Ordered, immutable collection of rules.
///
/// The order of the rules is the order in which violation messages are
/// reported. Once built, a rule set cannot be changed.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Builds a rule set, rejecting duplicate rule names.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError::DuplicateName`] for the first name that
    /// appears twice.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleSetError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !seen.insert(rule.name) {
                return Err(RuleSetError::DuplicateName(rule.name));
            }
        }
        Ok(Self { rules })
    }

    /// The canonical policy: minLength, uppercase, number, special.
    pub fn standard() -> Self {
        Self {
            rules: vec![MIN_LENGTH_RULE, UPPERCASE, NUMBER, SPECIAL],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

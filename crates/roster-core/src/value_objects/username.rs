//! Username - validated, canonical account name
//!
//! Rules:
//! - 3 to 50 characters
//! - letters, digits, hyphens, and underscores only
//! - at least one letter or digit
//! - stored lowercase; uniqueness applies to the canonical form

use serde::Serialize;
use std::fmt;

use crate::error::DomainError;

/// A username that has passed validation and been lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Minimum length in characters
    pub const MIN_LENGTH: usize = 3;
    /// Maximum length in characters
    pub const MAX_LENGTH: usize = 50;

    /// Validate a candidate username and produce its canonical form.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let length = input.chars().count();
        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            return Err(DomainError::InvalidUsername(format!(
                "must be {}-{} characters",
                Self::MIN_LENGTH,
                Self::MAX_LENGTH
            )));
        }

        // Hyphens and underscores are allowed as separators but cannot
        // make up the entire name.
        let stripped: String = input.chars().filter(|c| *c != '-' && *c != '_').collect();
        if stripped.is_empty() || !stripped.chars().all(char::is_alphanumeric) {
            return Err(DomainError::InvalidUsername(
                "can only contain letters, numbers, hyphens, and underscores".to_string(),
            ));
        }

        Ok(Self(input.to_lowercase()))
    }

    /// Get the canonical (lowercased) form
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the canonical string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

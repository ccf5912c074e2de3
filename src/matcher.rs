//! Target pattern validation and address matching.

use std::fmt;

use crate::config::ValidationError;

/// A validated address suffix to search for.
///
/// Only Latin letters, digits, dashes and underscores are allowed — the
/// character set of a url-safe base64 address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPattern {
    pattern: String,
}

impl TargetPattern {
    /// Validates and compiles a target suffix.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ValidationError> {
        let pattern = pattern.into();

        if pattern.is_empty() {
            return Err(ValidationError::InvalidPattern(
                "target ending cannot be empty".into(),
            ));
        }

        if !pattern
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidPattern(
                "only Latin letters, numbers, dashes, and underscores are allowed".into(),
            ));
        }

        Ok(Self { pattern })
    }

    /// Returns the pattern string.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Tests whether `address` ends with this pattern.
    ///
    /// Exact byte comparison, case-sensitive, no normalization.
    #[inline]
    pub fn matches(&self, address: &str) -> bool {
        address.ends_with(&self.pattern)
    }
}

impl fmt::Display for TargetPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

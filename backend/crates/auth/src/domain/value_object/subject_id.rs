//! Subject Identifier Value Object
//!
//! The stable unique id a provider assigns to a user. Opaque to the
//! gateway: the only guarantees are non-emptiness and a sane length.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum subject id length (providers use short opaque strings)
const SUBJECT_ID_MAX_LENGTH: usize = 128;

/// Provider-assigned subject identifier (uid)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    /// Create a new subject id with validation
    pub fn new(uid: impl Into<String>) -> AppResult<Self> {
        let uid = uid.into();

        if uid.is_empty() {
            return Err(AppError::bad_request("Subject id cannot be empty"));
        }

        if uid.len() > SUBJECT_ID_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Subject id must be at most {} characters",
                SUBJECT_ID_MAX_LENGTH
            )));
        }

        if uid.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AppError::bad_request(
                "Subject id cannot contain whitespace or control characters",
            ));
        }

        Ok(Self(uid))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for SubjectId {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        SubjectId::new(s)
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SubjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_id_valid() {
        assert!(SubjectId::new("u1").is_ok());
        assert!(SubjectId::new("abc123XYZ").is_ok());
        assert!(SubjectId::new("a".repeat(128)).is_ok());
    }

    #[test]
    fn test_subject_id_invalid() {
        assert!(SubjectId::new("").is_err());
        assert!(SubjectId::new("a".repeat(129)).is_err());
        assert!(SubjectId::new("has space").is_err());
        assert!(SubjectId::new("has\ttab").is_err());
    }

    #[test]
    fn test_subject_id_display() {
        let uid = SubjectId::new("u42").unwrap();
        assert_eq!(uid.to_string(), "u42");
        assert_eq!(uid.as_str(), "u42");
    }
}

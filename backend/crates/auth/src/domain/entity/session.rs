//! Session Credential and Claims
//!
//! A session credential is an opaque, signed, server-issued token.
//! Callers only store and transport it; its internal shape belongs to
//! the credential verifier.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::subject_id::SubjectId;

/// Opaque signed session credential
///
/// Invariant: only ever minted from a provider-verified identity token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCredential(String);

impl SessionCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the opaque cookie value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the opaque cookie value
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Verified claims extracted from a session credential
///
/// Only produced by a successful verification; holding a value of this
/// type means the signature, expiry and (when requested) revocation
/// checks all passed.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    /// Session id (UUID v4), for logging and correlation
    pub sid: Uuid,
    /// Verified subject identifier
    pub sub: SubjectId,
    /// Display name claim, if the provider supplied one
    pub name: Option<String>,
    /// Email claim, if the provider supplied one
    pub email: Option<String>,
    /// When the session was established
    pub issued_at: DateTime<Utc>,
}

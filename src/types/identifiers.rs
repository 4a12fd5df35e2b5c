use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier must not be empty")]
    Empty,
    #[error("Identifier must not contain whitespace: {0:?}")]
    EmbeddedWhitespace(String),
}

/// Opaque key of a persisted candidate profile record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Create a ProfileId from the storage layer's record key.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdentifierError> {
        Ok(ProfileId(normalize_key(raw.into())?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque key of a persisted job posting record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Create a JobId from the storage layer's record key.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdentifierError> {
        Ok(JobId(normalize_key(raw.into())?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Key rules shared by both record kinds: surrounding whitespace is noise
/// from form entry, embedded whitespace means the caller passed display text
/// instead of a key.
fn normalize_key(raw: String) -> Result<String, IdentifierError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(IdentifierError::EmbeddedWhitespace(raw));
    }

    Ok(trimmed.to_string())
}

/// Content hash fingerprint of the source record a derived value was
/// computed from. Collaborators compare fingerprints to detect stale
/// derived values after a record edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordVersion(String);

impl RecordVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        RecordVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

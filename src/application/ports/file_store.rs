//! Remote file store port interface

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Remote file store errors
#[derive(Debug, Clone, Error)]
pub enum FileStoreError {
    #[error("File not found in repository")]
    NotFound,

    #[error("No access token configured. Writes require a token; run 'gitcms config set token <pat>'")]
    MissingCredential,

    #[error("Store rejected the request (HTTP {status}): {body}")]
    Remote { status: u16, body: String },

    #[error("Network request failed: {0}")]
    Transport(String),

    #[error("Failed to decode store response: {0}")]
    InvalidResponse(String),
}

/// Opaque marker identifying a file's current version in the remote store.
/// Required to safely overwrite an existing file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    pub fn new(marker: impl Into<String>) -> Self {
        Self(marker.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A file read from or written to the remote store
#[derive(Debug, Clone)]
pub struct RemoteFile {
    /// Repository-relative path
    pub path: String,
    /// Version marker of this file content
    pub revision: Revision,
    /// Decoded file bytes
    pub bytes: Vec<u8>,
}

/// Port for the remote file store
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Fetch a file at a repository-relative path.
    ///
    /// # Returns
    /// The decoded file with its revision marker. Fails with
    /// [`FileStoreError::NotFound`] when the store reports absence, so
    /// callers can choose create-default over abort.
    async fn fetch_file(&self, path: &str) -> Result<RemoteFile, FileStoreError>;

    /// Write a file at a repository-relative path.
    ///
    /// # Arguments
    /// * `revision` - marker of the version being overwritten. Omit to
    ///   create a new file; an existing file cannot be overwritten without
    ///   its current marker.
    ///
    /// Refuses locally with [`FileStoreError::MissingCredential`] before any
    /// network call when no credential is configured.
    async fn write_file(
        &self,
        path: &str,
        bytes: &[u8],
        message: &str,
        revision: Option<&Revision>,
    ) -> Result<RemoteFile, FileStoreError>;

    /// Whether a credential is configured (writes are possible)
    fn can_write(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_round_trips() {
        let revision = Revision::new("95b966ae1c166bd92f8ae7d1c313e738c731dfc3");
        assert_eq!(revision.as_str(), "95b966ae1c166bd92f8ae7d1c313e738c731dfc3");
        assert_eq!(revision.to_string(), revision.as_str());
    }

    #[test]
    fn revisions_compare_by_marker() {
        assert_eq!(Revision::new("abc"), Revision::new("abc"));
        assert_ne!(Revision::new("abc"), Revision::new("def"));
    }

    #[test]
    fn missing_credential_message_names_the_fix() {
        let message = FileStoreError::MissingCredential.to_string();
        assert!(message.contains("config set token"));
    }
}

//! Content document synchronization use case

use thiserror::Error;

use crate::domain::content::SiteContent;

use super::ports::{FileStore, FileStoreError, Revision};

/// Commit message used when the content document is created on first run
pub const CREATE_CONTENT_MESSAGE: &str = "Create initial content.json";

/// Errors from the synchronizer
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{0}")]
    Store(#[from] FileStoreError),

    #[error("Content document is not valid JSON: {0}")]
    Parse(String),

    #[error("Remote content changed since load: expected revision {expected}, found {actual}")]
    RevisionConflict { expected: Revision, actual: Revision },
}

/// Read-modify-write synchronizer for the content document.
///
/// Owns the load/save protocol against the remote file store: `load` fetches,
/// decodes, and parses the document (creating the starter document on first
/// run), and `save` re-fetches the revision marker, writes conditioned on it,
/// then reloads to return the authoritative post-write state.
///
/// Re-fetching the marker narrows but does not close the lost-update window:
/// two clients saving concurrently race on the marker, and the loser either
/// gets a conflict from the store or silently overwrites the winner if its
/// marker fetch ran after the winner's write. Last writer wins; there is no
/// merge. Callers wanting a fail-fast check instead use [`load_tracked`]
/// followed by [`save_guarded`].
///
/// [`load_tracked`]: Synchronizer::load_tracked
/// [`save_guarded`]: Synchronizer::save_guarded
pub struct Synchronizer<'a, S: FileStore> {
    store: &'a S,
    content_path: String,
}

impl<'a, S: FileStore> Synchronizer<'a, S> {
    /// Create a synchronizer for the document at `content_path`
    pub fn new(store: &'a S, content_path: impl Into<String>) -> Self {
        Self {
            store,
            content_path: content_path.into(),
        }
    }

    /// Repository path of the content document
    pub fn content_path(&self) -> &str {
        &self.content_path
    }

    /// Load the content document.
    ///
    /// When the store has no document yet, the built-in starter document is
    /// persisted with exactly one write and returned. Any other failure
    /// propagates without mutating anything.
    pub async fn load(&self) -> Result<SiteContent, SyncError> {
        self.load_or_create().await.map(|(doc, _)| doc)
    }

    /// Load the content document, reporting whether this call created it
    pub async fn load_or_create(&self) -> Result<(SiteContent, bool), SyncError> {
        match self.fetch_remote().await {
            Ok((doc, _)) => Ok((doc, false)),
            Err(SyncError::Store(FileStoreError::NotFound)) => {
                let starter = SiteContent::starter();
                let (doc, _) = self
                    .save_and_reload(&starter, CREATE_CONTENT_MESSAGE)
                    .await?;
                Ok((doc, true))
            }
            Err(e) => Err(e),
        }
    }

    /// Load the content document together with its revision marker, for a
    /// later [`save_guarded`](Synchronizer::save_guarded).
    pub async fn load_tracked(&self) -> Result<(SiteContent, Revision), SyncError> {
        match self.fetch_remote().await {
            Ok(pair) => Ok(pair),
            Err(SyncError::Store(FileStoreError::NotFound)) => {
                let starter = SiteContent::starter();
                self.save_and_reload(&starter, CREATE_CONTENT_MESSAGE).await
            }
            Err(e) => Err(e),
        }
    }

    /// Persist the document: re-fetch the revision marker (tolerating a
    /// missing file as "create"), write conditioned on it, then reload and
    /// return the authoritative post-write state.
    pub async fn save(&self, doc: &SiteContent, message: &str) -> Result<SiteContent, SyncError> {
        self.save_and_reload(doc, message).await.map(|(doc, _)| doc)
    }

    /// Persist the document only if the remote marker still equals
    /// `expected`; fails with [`SyncError::RevisionConflict`] before writing
    /// anything when another client saved in between.
    pub async fn save_guarded(
        &self,
        doc: &SiteContent,
        message: &str,
        expected: &Revision,
    ) -> Result<SiteContent, SyncError> {
        let current = self.store.fetch_file(&self.content_path).await?;
        if current.revision != *expected {
            return Err(SyncError::RevisionConflict {
                expected: expected.clone(),
                actual: current.revision,
            });
        }

        self.write(doc, message, Some(&current.revision)).await?;
        self.fetch_remote().await.map(|(doc, _)| doc)
    }

    /// Fetch + decode + parse, surfacing the revision marker
    async fn fetch_remote(&self) -> Result<(SiteContent, Revision), SyncError> {
        let file = self.store.fetch_file(&self.content_path).await?;
        let doc = SiteContent::from_json_bytes(&file.bytes)
            .map_err(|e| SyncError::Parse(e.to_string()))?;
        Ok((doc, file.revision))
    }

    /// Fetch-marker, write, reload: always in that order
    async fn save_and_reload(
        &self,
        doc: &SiteContent,
        message: &str,
    ) -> Result<(SiteContent, Revision), SyncError> {
        let marker = match self.store.fetch_file(&self.content_path).await {
            Ok(file) => Some(file.revision),
            Err(FileStoreError::NotFound) => None,
            Err(e) => return Err(e.into()),
        };

        self.write(doc, message, marker.as_ref()).await?;
        self.fetch_remote().await
    }

    async fn write(
        &self,
        doc: &SiteContent,
        message: &str,
        revision: Option<&Revision>,
    ) -> Result<(), SyncError> {
        let json = doc
            .to_pretty_json()
            .map_err(|e| SyncError::Parse(e.to_string()))?;
        self.store
            .write_file(&self.content_path, json.as_bytes(), message, revision)
            .await?;
        Ok(())
    }
}

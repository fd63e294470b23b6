//! Asset upload use case

use std::path::Path;

use thiserror::Error;
use tokio::fs;

use crate::domain::asset::{now_millis, timestamped_path, SiteRepo, UploadedAsset};

use super::ports::{FileStore, FileStoreError};

/// Errors from the asset uploader
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{0}")]
    Store(#[from] FileStoreError),

    #[error("Failed to read local file: {0}")]
    Io(String),
}

/// Append-only asset uploader.
///
/// Every upload goes to a fresh timestamped path under its destination
/// folder, so existing assets are never overwritten or deleted; replacing a
/// slot points the document at the new asset and leaves the old file in the
/// repository. A failed upload leaves the document untouched, and a save
/// failure after a successful upload orphans a harmless remote file.
pub struct Uploader<'a, S: FileStore> {
    store: &'a S,
    repo: SiteRepo,
}

impl<'a, S: FileStore> Uploader<'a, S> {
    pub fn new(store: &'a S, repo: SiteRepo) -> Self {
        Self { store, repo }
    }

    /// Repository coordinates the public asset URLs resolve through
    pub fn repo(&self) -> &SiteRepo {
        &self.repo
    }

    /// Upload raw bytes to `{folder}/{millis}_{sanitized name}` and return
    /// the new path with its public raw URL.
    ///
    /// Requires a credential; fails with
    /// [`FileStoreError::MissingCredential`] before any network call when
    /// none is configured.
    pub async fn upload(
        &self,
        bytes: &[u8],
        original_name: &str,
        folder: &str,
        message: &str,
    ) -> Result<UploadedAsset, UploadError> {
        if !self.store.can_write() {
            return Err(FileStoreError::MissingCredential.into());
        }

        let path = timestamped_path(folder, now_millis(), original_name);
        self.store.write_file(&path, bytes, message, None).await?;

        let url = self.repo.raw_url(&path);
        Ok(UploadedAsset { path, url })
    }

    /// Read a local file fully into memory and upload it under its own name
    pub async fn upload_local(
        &self,
        local: &Path,
        folder: &str,
        message: &str,
    ) -> Result<UploadedAsset, UploadError> {
        let name = local_file_name(local)?;
        let bytes = fs::read(local)
            .await
            .map_err(|e| UploadError::Io(format!("{}: {}", local.display(), e)))?;
        self.upload(&bytes, &name, folder, message).await
    }
}

/// File name component of a local path, as the upload's original name
pub fn local_file_name(path: &Path) -> Result<String, UploadError> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| UploadError::Io(format!("{}: path has no file name", path.display())))
}

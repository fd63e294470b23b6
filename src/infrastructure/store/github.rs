//! GitHub contents API file store adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileStore, FileStoreError, RemoteFile, Revision};
use crate::domain::asset::SiteRepo;

/// GitHub REST API base URL
const API_BASE_URL: &str = "https://api.github.com";

/// Contents API media type
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("gitcms/", env!("CARGO_PKG_VERSION"));

// Request and response types for the contents endpoint

#[derive(Debug, Deserialize)]
struct FetchResponse {
    /// Base64 payload; GitHub wraps it with embedded newlines
    content: String,
    sha: String,
}

#[derive(Debug, Serialize)]
struct WriteRequest<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct WriteResponse {
    content: WrittenFile,
}

#[derive(Debug, Deserialize)]
struct WrittenFile {
    sha: String,
}

/// File store backed by the GitHub contents API.
///
/// Reads work anonymously (rate-limited); writes require a personal access
/// token and are refused locally before any network call when none is
/// configured.
pub struct GithubFileStore {
    repo: SiteRepo,
    token: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl GithubFileStore {
    /// Create a store for the given repository, authenticating with `token`
    /// when present
    pub fn new(repo: SiteRepo, token: Option<String>) -> Self {
        Self::with_base_url(repo, token, API_BASE_URL)
    }

    /// Create a store against a custom API base URL
    pub fn with_base_url(
        repo: SiteRepo,
        token: Option<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            token: token.filter(|t| !t.is_empty()),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Contents endpoint URL for a repository-relative path
    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url,
            self.repo.owner(),
            self.repo.repo(),
            path.trim_start_matches('/')
        )
    }

    /// Apply the headers every contents API call carries
    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder
            .header("Accept", ACCEPT_HEADER)
            .header("User-Agent", USER_AGENT);
        match &self.token {
            Some(token) => builder.header("Authorization", format!("token {}", token)),
            None => builder,
        }
    }

    /// Decode a base64 payload from the contents API, stripping the
    /// newline wrapping GitHub inserts
    fn decode_content(content: &str) -> Result<Vec<u8>, FileStoreError> {
        use base64::Engine;
        let compact: String = content.split_whitespace().collect();
        base64::engine::general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| FileStoreError::InvalidResponse(format!("invalid base64 content: {}", e)))
    }

    fn encode_content(bytes: &[u8]) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }
}

#[async_trait]
impl FileStore for GithubFileStore {
    async fn fetch_file(&self, path: &str) -> Result<RemoteFile, FileStoreError> {
        let url = self.contents_url(path);

        let response = self
            .request(self.client.get(&url))
            .query(&[("ref", self.repo.branch())])
            .send()
            .await
            .map_err(|e| FileStoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FileStoreError::NotFound);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FileStoreError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let file: FetchResponse = response
            .json()
            .await
            .map_err(|e| FileStoreError::InvalidResponse(e.to_string()))?;

        Ok(RemoteFile {
            path: path.to_string(),
            revision: Revision::new(file.sha),
            bytes: Self::decode_content(&file.content)?,
        })
    }

    async fn write_file(
        &self,
        path: &str,
        bytes: &[u8],
        message: &str,
        revision: Option<&Revision>,
    ) -> Result<RemoteFile, FileStoreError> {
        if !self.can_write() {
            return Err(FileStoreError::MissingCredential);
        }

        let url = self.contents_url(path);
        let body = WriteRequest {
            message,
            content: Self::encode_content(bytes),
            branch: self.repo.branch(),
            sha: revision.map(Revision::as_str),
        };

        let response = self
            .request(self.client.put(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| FileStoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FileStoreError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let written: WriteResponse = response
            .json()
            .await
            .map_err(|e| FileStoreError::InvalidResponse(e.to_string()))?;

        Ok(RemoteFile {
            path: path.to_string(),
            revision: Revision::new(written.content.sha),
            bytes: bytes.to_vec(),
        })
    }

    fn can_write(&self) -> bool {
        self.token.is_some()
    }
}

//! Repository coordinates and public asset URL conventions

/// Host serving raw file contents for GitHub repositories
const RAW_CONTENT_HOST: &str = "https://raw.githubusercontent.com";

/// Coordinates of the repository hosting the site.
///
/// Owns the mapping between repository-relative asset paths and the public
/// raw URLs the live site resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRepo {
    owner: String,
    repo: String,
    branch: String,
}

impl SiteRepo {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Public URL for a repository-relative path. The exact template the
    /// live site resolves assets through.
    pub fn raw_url(&self, path: &str) -> String {
        format!("{}/{}", self.raw_prefix(), path.trim_start_matches('/'))
    }

    /// Raw URL prefix for this repository and branch (no trailing slash)
    pub fn raw_prefix(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            RAW_CONTENT_HOST, self.owner, self.repo, self.branch
        )
    }

    /// Map a public raw URL back to its repository-relative path.
    ///
    /// Already-relative paths, site-absolute paths (leading `/`), and foreign
    /// URLs pass through unchanged. Idempotent.
    pub fn normalize_url(&self, url: &str) -> String {
        let prefix = format!("{}/", self.raw_prefix());
        match url.strip_prefix(&prefix) {
            Some(rest) => rest.trim_start_matches('/').to_string(),
            None => url.to_string(),
        }
    }
}

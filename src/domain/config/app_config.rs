//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::asset::SiteRepo;

/// Default repository owner
pub const DEFAULT_OWNER: &str = "solast-art";

/// Default repository name
pub const DEFAULT_REPO: &str = "Solast_art";

/// Default branch
pub const DEFAULT_BRANCH: &str = "main";

/// Default repository path of the content document
pub const DEFAULT_CONTENT_PATH: &str = "content.json";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub token: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub content_path: Option<String>,
}

impl AppConfig {
    /// Create config with default values (token is never defaulted)
    pub fn defaults() -> Self {
        Self {
            token: None,
            owner: Some(DEFAULT_OWNER.to_string()),
            repo: Some(DEFAULT_REPO.to_string()),
            branch: Some(DEFAULT_BRANCH.to_string()),
            content_path: Some(DEFAULT_CONTENT_PATH.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            token: other.token.or(self.token),
            owner: other.owner.or(self.owner),
            repo: other.repo.or(self.repo),
            branch: other.branch.or(self.branch),
            content_path: other.content_path.or(self.content_path),
        }
    }

    pub fn owner_or_default(&self) -> &str {
        self.owner.as_deref().unwrap_or(DEFAULT_OWNER)
    }

    pub fn repo_or_default(&self) -> &str {
        self.repo.as_deref().unwrap_or(DEFAULT_REPO)
    }

    pub fn branch_or_default(&self) -> &str {
        self.branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }

    pub fn content_path_or_default(&self) -> &str {
        self.content_path.as_deref().unwrap_or(DEFAULT_CONTENT_PATH)
    }

    /// Repository coordinates from the configured (or default) values
    pub fn site_repo(&self) -> SiteRepo {
        SiteRepo::new(
            self.owner_or_default(),
            self.repo_or_default(),
            self.branch_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_site_repo() {
        let config = AppConfig::defaults();
        assert!(config.token.is_none());
        assert_eq!(config.owner, Some("solast-art".to_string()));
        assert_eq!(config.repo, Some("Solast_art".to_string()));
        assert_eq!(config.branch, Some("main".to_string()));
        assert_eq!(config.content_path, Some("content.json".to_string()));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.token.is_none());
        assert!(config.owner.is_none());
        assert!(config.content_path.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            token: Some("base_token".to_string()),
            owner: Some("base-owner".to_string()),
            branch: Some("main".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            token: Some("other_token".to_string()),
            owner: None, // Should not override
            branch: Some("staging".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.token, Some("other_token".to_string()));
        assert_eq!(merged.owner, Some("base-owner".to_string()));
        assert_eq!(merged.branch, Some("staging".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            repo: Some("Solast_art".to_string()),
            content_path: Some("data/content.json".to_string()),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.repo, Some("Solast_art".to_string()));
        assert_eq!(merged.content_path, Some("data/content.json".to_string()));
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.owner_or_default(), DEFAULT_OWNER);
        assert_eq!(config.repo_or_default(), DEFAULT_REPO);
        assert_eq!(config.branch_or_default(), DEFAULT_BRANCH);
        assert_eq!(config.content_path_or_default(), DEFAULT_CONTENT_PATH);
    }

    #[test]
    fn site_repo_uses_configured_values() {
        let config = AppConfig {
            owner: Some("acme".to_string()),
            repo: Some("site".to_string()),
            branch: Some("prod".to_string()),
            ..Default::default()
        };
        let repo = config.site_repo();
        assert_eq!(repo.owner(), "acme");
        assert_eq!(repo.repo(), "site");
        assert_eq!(repo.branch(), "prod");
    }
}

//! XDG config store adapter

use std::env;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Environment variable overriding the config file location
const CONFIG_PATH_ENV: &str = "GITCMS_CONFIG";

/// XDG-compliant config store
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a config store at the default path, honouring the
    /// `GITCMS_CONFIG` override
    pub fn new() -> Self {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Self { path: path.into() };
            }
        }

        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("gitcms");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into AppConfig
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Serialize AppConfig to TOML
    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        let defaults = AppConfig::defaults();
        self.save(&defaults).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_flat_format() {
        let content = r#"
token = "ghp_testtoken"
owner = "solast-art"
repo = "Solast_art"
branch = "main"
content_path = "content.json"
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.token, Some("ghp_testtoken".to_string()));
        assert_eq!(config.owner, Some("solast-art".to_string()));
        assert_eq!(config.repo, Some("Solast_art".to_string()));
        assert_eq!(config.branch, Some("main".to_string()));
        assert_eq!(config.content_path, Some("content.json".to_string()));
    }

    #[test]
    fn parse_toml_partial() {
        let config = XdgConfigStore::parse_toml("branch = \"staging\"\n").unwrap();
        assert_eq!(config.branch, Some("staging".to_string()));
        assert!(config.token.is_none());
        assert!(config.owner.is_none());
    }

    #[test]
    fn to_toml_round_trip() {
        let config = AppConfig {
            token: Some("ghp_testtoken".to_string()),
            owner: Some("acme".to_string()),
            repo: Some("site".to_string()),
            branch: Some("main".to_string()),
            content_path: Some("data/content.json".to_string()),
        };

        let toml = XdgConfigStore::to_toml(&config).unwrap();
        let parsed = XdgConfigStore::parse_toml(&toml).unwrap();

        assert_eq!(config.token, parsed.token);
        assert_eq!(config.owner, parsed.owner);
        assert_eq!(config.repo, parsed.repo);
        assert_eq!(config.branch, parsed.branch);
        assert_eq!(config.content_path, parsed.content_path);
    }

    #[tokio::test]
    async fn load_save_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        assert!(!store.exists());
        let empty = store.load().await.unwrap();
        assert!(empty.token.is_none());

        let config = AppConfig {
            owner: Some("acme".to_string()),
            ..Default::default()
        };
        store.save(&config).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.owner, Some("acme".to_string()));
    }

    #[tokio::test]
    async fn init_refuses_to_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        store.init().await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.owner, Some("solast-art".to_string()));
        assert!(loaded.token.is_none());

        let err = store.init().await.unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }
}

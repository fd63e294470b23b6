//! Main app runner: config assembly and command dispatch

use std::env;
use std::process::ExitCode;

use thiserror::Error;

use crate::application::ports::ConfigStore;
use crate::application::{SyncError, Synchronizer, UploadError, Uploader};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::{GithubFileStore, XdgConfigStore};

use super::args::Commands;
use super::content_cmd;
use super::gallery_cmd;
use super::presenter::Presenter;
use super::videos_cmd;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Errors surfaced by command handlers
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Sync(#[from] SyncError),

    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    FileWrite { path: String, message: String },

    #[error("{0}")]
    InvalidArgument(String),
}

/// Run a repository command against the configured store
pub async fn run_command(command: Commands, config: &AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let repo = config.site_repo();
    let store = GithubFileStore::new(repo.clone(), config.token.clone());
    let sync = Synchronizer::new(&store, config.content_path_or_default());
    let uploader = Uploader::new(&store, repo);

    let result = match command {
        Commands::Show => content_cmd::handle_show(&sync, &mut presenter).await,
        Commands::Init => content_cmd::handle_init(&sync, &mut presenter).await,
        Commands::Texts { action } => {
            content_cmd::handle_texts_command(action, &sync, &mut presenter).await
        }
        Commands::About { action } => {
            content_cmd::handle_about_command(action, &sync, &mut presenter).await
        }
        Commands::Social { action } => {
            content_cmd::handle_social_command(action, &sync, &mut presenter).await
        }
        Commands::Gallery { action } => {
            gallery_cmd::handle_gallery_command(action, &sync, &uploader, &mut presenter).await
        }
        Commands::Videos { action } => {
            videos_cmd::handle_videos_command(action, &sync, &uploader, &mut presenter).await
        }
        Commands::Export { output } => {
            content_cmd::handle_export(&output, &sync, &mut presenter).await
        }
        // Config commands never reach the repository runner (handled in main)
        Commands::Config { .. } => {
            presenter.error("Config commands do not use the repository");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            let code = match e {
                CommandError::InvalidArgument(_) => EXIT_USAGE_ERROR,
                _ => EXIT_ERROR,
            };
            ExitCode::from(code)
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        token: env::var("GITHUB_TOKEN").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

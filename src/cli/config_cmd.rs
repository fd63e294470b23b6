//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "token" => config.token = Some(value.to_string()),
        "owner" => config.owner = Some(value.to_string()),
        "repo" => config.repo = Some(value.to_string()),
        "branch" => config.branch = Some(value.to_string()),
        "content_path" => config.content_path = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    if key == "token" {
        presenter.success(&format!("{} = {}", key, mask_token(value)));
    } else {
        presenter.success(&format!("{} = {}", key, value));
    }

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "token" => config.token.map(|t| mask_token(&t)),
        "owner" => config.owner,
        "repo" => config.repo,
        "branch" => config.branch,
        "content_path" => config.content_path,
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "token",
        &config
            .token
            .map(|t| mask_token(&t))
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("owner", config.owner.as_deref().unwrap_or("(not set)"));
    presenter.key_value("repo", config.repo.as_deref().unwrap_or("(not set)"));
    presenter.key_value("branch", config.branch.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "content_path",
        config.content_path.as_deref().unwrap_or("(not set)"),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "owner" | "repo" => {
            if value.is_empty() || value.contains('/') {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a plain name without '/'".to_string(),
                });
            }
        }
        "branch" | "content_path" => {
            if value.is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must not be empty".to_string(),
                });
            }
        }
        _ => {} // token accepts any string
    }
    Ok(())
}

/// Mask a token for display (show first 4 and last 4 chars)
fn mask_token(token: &str) -> String {
    // Split on char counts, not bytes: tokens are not guaranteed ASCII
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

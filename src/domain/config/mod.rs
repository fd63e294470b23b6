//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_BRANCH, DEFAULT_CONTENT_PATH, DEFAULT_OWNER, DEFAULT_REPO,
};

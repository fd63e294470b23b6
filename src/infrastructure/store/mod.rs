//! Remote file store infrastructure module

mod github;

pub use github::GithubFileStore;

//! gitcms - Git-backed content manager for static sites
//!
//! This crate edits a site's `content.json` document and media assets stored
//! in a GitHub repository, using the GitHub contents API as the only backend.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Content document, gallery/video editing rules, asset paths
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (GitHub contents API, XDG config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

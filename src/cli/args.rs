//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gitcms - edit a site's content.json and media assets in a GitHub repository
#[derive(Parser, Debug)]
#[command(name = "gitcms")]
#[command(version = "0.1.0")]
#[command(about = "Git-backed content manager for static sites using the GitHub contents API")]
#[command(long_about = None)]
pub struct Cli {
    /// Repository owner (overrides config)
    #[arg(long, value_name = "OWNER", global = true)]
    pub owner: Option<String>,

    /// Repository name (overrides config)
    #[arg(long, value_name = "REPO", global = true)]
    pub repo: Option<String>,

    /// Branch to read and write (overrides config)
    #[arg(long, value_name = "BRANCH", global = true)]
    pub branch: Option<String>,

    /// Repository path of the content document (overrides config)
    #[arg(long, value_name = "PATH", global = true)]
    pub content_path: Option<String>,

    /// Personal access token (overrides config and GITHUB_TOKEN)
    #[arg(long, value_name = "PAT", global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a summary of the site content
    Show,
    /// Create the content document with starter content if it is missing
    Init,
    /// Edit brand texts and the services list
    Texts {
        #[command(subcommand)]
        action: TextsAction,
    },
    /// Edit the about section text and style
    About {
        #[command(subcommand)]
        action: AboutAction,
    },
    /// Edit social links and SEO metadata
    Social {
        #[command(subcommand)]
        action: SocialAction,
    },
    /// Manage the 18-slot image gallery
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },
    /// Manage the video list
    Videos {
        #[command(subcommand)]
        action: VideosAction,
    },
    /// Write the content document to a local JSON file
    Export {
        /// Output path ('-' for stdout)
        #[arg(short, long, value_name = "PATH", default_value = "content.json")]
        output: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Texts subcommands
#[derive(Subcommand, Debug)]
pub enum TextsAction {
    /// Update brand name, slogan, and services
    Set {
        /// New brand name
        #[arg(long, value_name = "NAME")]
        brand: Option<String>,

        /// New slogan
        #[arg(long, value_name = "TEXT")]
        slogan: Option<String>,

        /// Services, one per line (or @file to read from a file)
        #[arg(long, value_name = "LINES")]
        services: Option<String>,
    },
}

/// About subcommands
#[derive(Subcommand, Debug)]
pub enum AboutAction {
    /// Update the about text and its style
    Set {
        /// New about text (or @file to read from a file)
        #[arg(long, value_name = "TEXT")]
        text: Option<String>,

        /// Font family
        #[arg(long, value_name = "FAMILY")]
        font: Option<String>,

        /// Font size in pixels
        #[arg(long, value_name = "PX")]
        size: Option<u32>,

        /// Text color (hex, e.g. #123840)
        #[arg(long, value_name = "COLOR")]
        color: Option<String>,

        /// Render the about text bold
        #[arg(long, conflicts_with = "no_bold")]
        bold: bool,

        /// Render the about text regular weight
        #[arg(long)]
        no_bold: bool,

        /// Render the about text italic
        #[arg(long, conflicts_with = "no_italic")]
        italic: bool,

        /// Render the about text upright
        #[arg(long)]
        no_italic: bool,
    },
}

/// Social subcommands
#[derive(Subcommand, Debug)]
pub enum SocialAction {
    /// Update social links and SEO metadata
    Set {
        /// Instagram profile URL
        #[arg(long, value_name = "URL")]
        instagram: Option<String>,

        /// WhatsApp contact URL
        #[arg(long, value_name = "URL")]
        whatsapp: Option<String>,

        /// SEO page title
        #[arg(long, value_name = "TITLE")]
        seo_title: Option<String>,

        /// SEO description
        #[arg(long, value_name = "TEXT")]
        seo_description: Option<String>,
    },
}

/// Gallery subcommands
#[derive(Subcommand, Debug)]
pub enum GalleryAction {
    /// List the 18 gallery slots
    Show,
    /// Upload an image and point a slot at it
    Replace {
        /// Slot number (1-18)
        #[arg(value_name = "SLOT")]
        slot: usize,

        /// Image file to upload
        #[arg(value_name = "FILE")]
        image: PathBuf,
    },
    /// Rewrite the slot order from a file with one URL per line
    Reorder {
        /// File with one entry per line (18 lines)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Videos subcommands
#[derive(Subcommand, Debug)]
pub enum VideosAction {
    /// List the videos in order
    Show,
    /// Upload a video file and append it to the list
    Add {
        /// Video file to upload
        #[arg(value_name = "FILE")]
        video: PathBuf,
    },
    /// Move a video one position up
    MoveUp {
        /// Position (1-based)
        #[arg(value_name = "N")]
        position: usize,
    },
    /// Move a video one position down
    MoveDown {
        /// Position (1-based)
        #[arg(value_name = "N")]
        position: usize,
    },
    /// Remove a video from the list (the uploaded file stays in the repository)
    Remove {
        /// Position (1-based)
        #[arg(value_name = "N")]
        position: usize,
    },
    /// Upload a replacement video for a position
    Replace {
        /// Position (1-based)
        #[arg(value_name = "N")]
        position: usize,

        /// Video file to upload
        #[arg(value_name = "FILE")]
        video: PathBuf,
    },
    /// Rewrite the whole list from a file with one URL per line
    Set {
        /// File with one URL per line
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["token", "owner", "repo", "branch", "content_path"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

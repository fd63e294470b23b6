//! Site content document value object

use serde::{Deserialize, Serialize};

use super::gallery::Gallery;
use super::videos::VideoList;

/// Inline style for the about section.
/// Absent fields fall back to the values the public site renders with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutStyle {
    pub font_family: String,
    pub font_size: u32,
    pub color: String,
    pub bold: bool,
    pub italic: bool,
}

impl Default for AboutStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            font_size: 16,
            color: "#123840".to_string(),
            bold: false,
            italic: false,
        }
    }
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: String,
    pub whatsapp: String,
}

/// Search engine metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
}

/// Footer credits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterMeta {
    pub developer: String,
    pub copyright: String,
}

/// The site content document persisted as `content.json`.
///
/// Keys are camelCase on disk so the file stays byte-compatible with what the
/// public site reads. Every field tolerates absence on parse; the document is
/// mutated in memory and durable only after an explicit save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub hero_title: String,
    pub brand_name: String,
    pub slogan: String,
    pub about_text: String,
    pub about_style: AboutStyle,
    pub services: Vec<String>,
    pub gallery: Gallery,
    pub videos: VideoList,
    pub social: SocialLinks,
    pub seo: SeoMeta,
    pub footer: FooterMeta,
}

impl SiteContent {
    /// Built-in starter document, persisted on first run when the repository
    /// has no content file yet.
    pub fn starter() -> Self {
        Self {
            hero_title: "Crafting Memories with Elegance".to_string(),
            brand_name: "Solast_art".to_string(),
            slogan: "Crafting Memories with Elegance".to_string(),
            about_text: "Solast Art is a creative studio based in Thaliparamba, Kannur."
                .to_string(),
            about_style: AboutStyle::default(),
            services: vec![
                "Customised Frame".to_string(),
                "Invitation card".to_string(),
                "Birthday Video".to_string(),
                "Calligraphy".to_string(),
            ],
            gallery: Gallery::default(),
            videos: VideoList::default(),
            social: SocialLinks {
                instagram: "https://instagram.com/__solast_art".to_string(),
                whatsapp: "https://wa.me/9778739301".to_string(),
            },
            seo: SeoMeta {
                title: "Solast Art | Custom Frames, Gift Hampers & Handmade Creations"
                    .to_string(),
                description: String::new(),
            },
            footer: FooterMeta {
                developer: "@m_safeerr".to_string(),
                copyright: "© 2025 Solast_art".to_string(),
            },
        }
    }

    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parse a document from raw JSON bytes
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serialize the document as pretty-printed JSON (2-space indent),
    /// human-diffable under version control.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace the services list from newline-delimited editor text
    pub fn set_services_from_text(&mut self, text: &str) {
        self.services = lines_to_entries(text);
    }
}

/// Split newline-delimited editor text into trimmed, non-empty entries
pub fn lines_to_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

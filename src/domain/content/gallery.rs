//! Gallery slot model

use serde::{Deserialize, Serialize};

/// Number of gallery slots the site renders
pub const GALLERY_SLOTS: usize = 18;

/// Image shown for slots that have no upload yet
pub const PLACEHOLDER_URL: &str = "/assets/placeholder.png";

/// Fixed-slot image gallery.
///
/// The stored sequence may be any length; the site renders exactly
/// [`GALLERY_SLOTS`] positions, so [`Gallery::slots`] truncates or pads with
/// the placeholder. Replacing a slot pads the stored sequence out to the full
/// slot count first, matching what a replace leaves on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallery(Vec<String>);

impl Gallery {
    /// Create a gallery from raw stored entries
    pub fn new(entries: Vec<String>) -> Self {
        Self(entries)
    }

    /// The render view: exactly [`GALLERY_SLOTS`] entries, truncated or
    /// padded with [`PLACEHOLDER_URL`].
    pub fn slots(&self) -> Vec<String> {
        let mut slots: Vec<String> = self.0.iter().take(GALLERY_SLOTS).cloned().collect();
        while slots.len() < GALLERY_SLOTS {
            slots.push(PLACEHOLDER_URL.to_string());
        }
        slots
    }

    /// Point one slot at a new URL. Returns false (unchanged) when the index
    /// is outside the slot range.
    pub fn set_slot(&mut self, index: usize, url: impl Into<String>) -> bool {
        if index >= GALLERY_SLOTS {
            return false;
        }
        while self.0.len() < GALLERY_SLOTS {
            self.0.push(PLACEHOLDER_URL.to_string());
        }
        self.0[index] = url.into();
        true
    }

    /// Full rewrite of the slot sequence: the stored entries become exactly
    /// the first [`GALLERY_SLOTS`] of `entries`, placeholder-padded if short.
    pub fn replace_all(&mut self, entries: Vec<String>) {
        self.0 = entries;
        self.0.truncate(GALLERY_SLOTS);
        while self.0.len() < GALLERY_SLOTS {
            self.0.push(PLACEHOLDER_URL.to_string());
        }
    }

    /// Raw stored entries (may be shorter or longer than the slot count)
    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// Number of slots pointing at something other than the placeholder
    pub fn customized_count(&self) -> usize {
        self.slots().iter().filter(|u| *u != PLACEHOLDER_URL).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

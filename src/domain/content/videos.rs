//! Ordered video list

use serde::{Deserialize, Serialize};

use super::document::lines_to_entries;

/// Variable-length ordered list of video URLs.
///
/// Supports append, pairwise adjacent swaps (no-ops at the boundaries),
/// delete-by-index, and full bulk replace from edited text. Every operation
/// leaves the list consistent; persistence is the caller's save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoList(Vec<String>);

impl VideoList {
    pub fn new(urls: Vec<String>) -> Self {
        Self(urls)
    }

    /// Append a video URL at the end
    pub fn push(&mut self, url: impl Into<String>) {
        self.0.push(url.into());
    }

    /// Swap two entries. Returns false (unchanged) when either index is out
    /// of range or they are equal.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.0.len() || b >= self.0.len() {
            return false;
        }
        self.0.swap(a, b);
        true
    }

    /// Move an entry one position towards the front; no-op at index 0
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 {
            return false;
        }
        self.swap(index, index - 1)
    }

    /// Move an entry one position towards the back; no-op at the last index
    pub fn move_down(&mut self, index: usize) -> bool {
        self.swap(index, index + 1)
    }

    /// Remove the entry at `index`, returning it; out of range is a no-op
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.0.len() {
            return None;
        }
        Some(self.0.remove(index))
    }

    /// Point the entry at `index` at a new URL. Returns false when the index
    /// is out of range.
    pub fn set(&mut self, index: usize, url: impl Into<String>) -> bool {
        match self.0.get_mut(index) {
            Some(entry) => {
                *entry = url.into();
                true
            }
            None => false,
        }
    }

    /// Full bulk replace from newline-delimited editor text (entries trimmed,
    /// blanks dropped)
    pub fn replace_from_text(&mut self, text: &str) {
        self.0 = lines_to_entries(text);
    }

    pub fn urls(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

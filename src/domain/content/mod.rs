//! Content document domain module

mod document;
mod gallery;
mod videos;

pub use document::{lines_to_entries, AboutStyle, FooterMeta, SeoMeta, SiteContent, SocialLinks};
pub use gallery::{Gallery, GALLERY_SLOTS, PLACEHOLDER_URL};
pub use videos::VideoList;

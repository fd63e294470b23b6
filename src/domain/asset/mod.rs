//! Asset upload and URL conventions domain module

mod path;
mod site_repo;

pub use path::{
    now_millis, sanitize_file_name, timestamped_path, UploadedAsset, GALLERY_FOLDER, VIDEO_FOLDER,
};
pub use site_repo::SiteRepo;

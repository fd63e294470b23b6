//! Gallery command handlers

use crate::application::ports::FileStore;
use crate::application::{local_file_name, Synchronizer, Uploader};
use crate::domain::asset::GALLERY_FOLDER;
use crate::domain::content::{lines_to_entries, GALLERY_SLOTS};

use super::app::CommandError;
use super::args::GalleryAction;
use super::presenter::{with_spinner, Presenter};

/// Handle gallery subcommand
pub async fn handle_gallery_command<S: FileStore>(
    action: GalleryAction,
    sync: &Synchronizer<'_, S>,
    uploader: &Uploader<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    match action {
        GalleryAction::Show => handle_show(sync, presenter).await,
        GalleryAction::Replace { slot, image } => {
            handle_replace(slot, &image, sync, uploader, presenter).await
        }
        GalleryAction::Reorder { file } => handle_reorder(&file, sync, uploader, presenter).await,
    }
}

async fn handle_show<S: FileStore>(
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let doc = with_spinner(presenter, "Loading content...", sync.load()).await?;

    for (i, url) in doc.gallery.slots().iter().enumerate() {
        presenter.output(&format!("{:2}  {}", i + 1, url));
    }

    Ok(())
}

async fn handle_replace<S: FileStore>(
    slot: usize,
    image: &std::path::Path,
    sync: &Synchronizer<'_, S>,
    uploader: &Uploader<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    // Validate the slot number before touching the network
    if slot < 1 || slot > GALLERY_SLOTS {
        return Err(CommandError::InvalidArgument(format!(
            "Slot must be between 1 and {}, got {}",
            GALLERY_SLOTS, slot
        )));
    }

    let name = local_file_name(image)?;

    let asset = with_spinner(
        presenter,
        &format!("Uploading {}...", name),
        uploader.upload_local(
            image,
            GALLERY_FOLDER,
            &format!("Upload gallery slot {} - {}", slot, name),
        ),
    )
    .await?;

    let mut doc = with_spinner(presenter, "Loading content...", sync.load()).await?;
    doc.gallery.set_slot(slot - 1, asset.url.clone());

    with_spinner(
        presenter,
        "Saving content...",
        sync.save(&doc, &format!("Replace gallery slot {}", slot)),
    )
    .await?;
    presenter.success(&format!("Slot {} now points at {}", slot, asset.url));

    Ok(())
}

async fn handle_reorder<S: FileStore>(
    file: &std::path::Path,
    sync: &Synchronizer<'_, S>,
    uploader: &Uploader<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let text = tokio::fs::read_to_string(file)
        .await
        .map_err(|e| CommandError::FileRead {
            path: file.display().to_string(),
            message: e.to_string(),
        })?;

    // Normalize raw.githubusercontent URLs for this repo back to paths
    let repo = uploader.repo();
    let entries: Vec<String> = lines_to_entries(&text)
        .into_iter()
        .map(|line| repo.normalize_url(&line))
        .collect();

    if entries.len() != GALLERY_SLOTS {
        presenter.warn(&format!(
            "File has {} entries; the gallery keeps exactly {} (missing slots get the placeholder)",
            entries.len(),
            GALLERY_SLOTS
        ));
    }

    let mut doc = with_spinner(presenter, "Loading content...", sync.load()).await?;
    doc.gallery.replace_all(entries);

    with_spinner(
        presenter,
        "Saving content...",
        sync.save(&doc, "Update gallery order"),
    )
    .await?;
    presenter.success("Gallery order updated");

    Ok(())
}

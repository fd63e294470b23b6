//! Videos command handlers

use std::path::Path;

use crate::application::ports::FileStore;
use crate::application::{local_file_name, Synchronizer, Uploader};
use crate::domain::asset::VIDEO_FOLDER;

use super::app::CommandError;
use super::args::VideosAction;
use super::presenter::{with_spinner, Presenter};

/// Handle videos subcommand
pub async fn handle_videos_command<S: FileStore>(
    action: VideosAction,
    sync: &Synchronizer<'_, S>,
    uploader: &Uploader<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    match action {
        VideosAction::Show => handle_show(sync, presenter).await,
        VideosAction::Add { video } => handle_add(&video, sync, uploader, presenter).await,
        VideosAction::MoveUp { position } => {
            handle_move(position, Direction::Up, sync, presenter).await
        }
        VideosAction::MoveDown { position } => {
            handle_move(position, Direction::Down, sync, presenter).await
        }
        VideosAction::Remove { position } => handle_remove(position, sync, presenter).await,
        VideosAction::Replace { position, video } => {
            handle_replace(position, &video, sync, uploader, presenter).await
        }
        VideosAction::Set { file } => handle_set(&file, sync, presenter).await,
    }
}

enum Direction {
    Up,
    Down,
}

async fn handle_show<S: FileStore>(
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let doc = with_spinner(presenter, "Loading content...", sync.load()).await?;

    if doc.videos.is_empty() {
        presenter.info("No videos");
        return Ok(());
    }

    for (i, url) in doc.videos.urls().iter().enumerate() {
        presenter.output(&format!("{:2}  {}", i + 1, url));
    }

    Ok(())
}

async fn handle_add<S: FileStore>(
    video: &Path,
    sync: &Synchronizer<'_, S>,
    uploader: &Uploader<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let name = local_file_name(video)?;

    let asset = with_spinner(
        presenter,
        &format!("Uploading {}...", name),
        uploader.upload_local(video, VIDEO_FOLDER, &format!("Upload video {}", name)),
    )
    .await?;

    let mut doc = with_spinner(presenter, "Loading content...", sync.load()).await?;
    doc.videos.push(asset.url.clone());

    with_spinner(
        presenter,
        "Saving content...",
        sync.save(&doc, &format!("Add video {}", name)),
    )
    .await?;
    presenter.success(&format!(
        "Added video {} at position {}",
        asset.url,
        doc.videos.len()
    ));

    Ok(())
}

async fn handle_move<S: FileStore>(
    position: usize,
    direction: Direction,
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let index = to_index(position)?;
    let mut doc = with_spinner(presenter, "Loading content...", sync.load()).await?;
    check_position(position, doc.videos.len())?;

    let moved = match direction {
        Direction::Up => doc.videos.move_up(index),
        Direction::Down => doc.videos.move_down(index),
    };

    if !moved {
        // Boundary moves change nothing, so there is nothing to save
        match direction {
            Direction::Up => presenter.info(&format!("Video {} is already first", position)),
            Direction::Down => presenter.info(&format!("Video {} is already last", position)),
        }
        return Ok(());
    }

    with_spinner(presenter, "Saving content...", sync.save(&doc, "Reorder videos")).await?;
    presenter.success("Videos reordered");

    Ok(())
}

async fn handle_remove<S: FileStore>(
    position: usize,
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let index = to_index(position)?;
    let mut doc = with_spinner(presenter, "Loading content...", sync.load()).await?;
    check_position(position, doc.videos.len())?;

    let removed = doc.videos.remove(index);

    with_spinner(presenter, "Saving content...", sync.save(&doc, "Remove video")).await?;
    match removed {
        Some(url) => presenter.success(&format!("Removed {} (the file stays in the repository)", url)),
        None => presenter.success("Removed video"),
    }

    Ok(())
}

async fn handle_replace<S: FileStore>(
    position: usize,
    video: &Path,
    sync: &Synchronizer<'_, S>,
    uploader: &Uploader<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let index = to_index(position)?;
    let name = local_file_name(video)?;

    // Read the file before any network call; the position check needs the
    // loaded list, so the upload happens only once both are known good
    let bytes = tokio::fs::read(video)
        .await
        .map_err(|e| CommandError::FileRead {
            path: video.display().to_string(),
            message: e.to_string(),
        })?;

    let mut doc = with_spinner(presenter, "Loading content...", sync.load()).await?;
    check_position(position, doc.videos.len())?;

    let asset = with_spinner(
        presenter,
        &format!("Uploading {}...", name),
        uploader.upload(
            &bytes,
            &name,
            VIDEO_FOLDER,
            &format!("Replace video slot {}", position),
        ),
    )
    .await?;

    doc.videos.set(index, asset.url.clone());

    with_spinner(
        presenter,
        "Saving content...",
        sync.save(&doc, &format!("Replace video {}", position)),
    )
    .await?;
    presenter.success(&format!("Video {} now points at {}", position, asset.url));

    Ok(())
}

async fn handle_set<S: FileStore>(
    file: &Path,
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let text = tokio::fs::read_to_string(file)
        .await
        .map_err(|e| CommandError::FileRead {
            path: file.display().to_string(),
            message: e.to_string(),
        })?;

    let mut doc = with_spinner(presenter, "Loading content...", sync.load()).await?;
    doc.videos.replace_from_text(&text);
    let count = doc.videos.len();

    with_spinner(
        presenter,
        "Saving content...",
        sync.save(&doc, "Update video URLs"),
    )
    .await?;
    presenter.success(&format!("Video list updated ({} entries)", count));

    Ok(())
}

/// Convert a 1-based CLI position to a 0-based index
fn to_index(position: usize) -> Result<usize, CommandError> {
    if position == 0 {
        return Err(CommandError::InvalidArgument(
            "Positions are 1-based".to_string(),
        ));
    }
    Ok(position - 1)
}

/// Reject positions beyond the end of the list
fn check_position(position: usize, len: usize) -> Result<(), CommandError> {
    if position > len {
        return Err(CommandError::InvalidArgument(format!(
            "Position {} is out of range: the list has {} video(s)",
            position, len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_index_rejects_zero() {
        assert!(to_index(0).is_err());
        assert_eq!(to_index(1).unwrap(), 0);
        assert_eq!(to_index(5).unwrap(), 4);
    }

    #[test]
    fn check_position_bounds() {
        assert!(check_position(1, 3).is_ok());
        assert!(check_position(3, 3).is_ok());
        assert!(check_position(4, 3).is_err());
        assert!(check_position(1, 0).is_err());
    }
}

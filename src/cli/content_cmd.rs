//! Content command handlers: show, init, texts, about, social, export

use crate::application::ports::FileStore;
use crate::application::Synchronizer;

use super::app::CommandError;
use super::args::{AboutAction, SocialAction, TextsAction};
use super::presenter::{with_spinner, Presenter};

/// Handle `show`: load the document and print a summary
pub async fn handle_show<S: FileStore>(
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let doc = with_spinner(presenter, "Loading content...", sync.load()).await?;

    presenter.key_value("brand", &doc.brand_name);
    presenter.key_value("slogan", &doc.slogan);
    presenter.key_value("services", &doc.services.join(", "));
    presenter.key_value(
        "gallery",
        &format!(
            "{} slots, {} customized",
            crate::domain::content::GALLERY_SLOTS,
            doc.gallery.customized_count()
        ),
    );
    presenter.key_value("videos", &doc.videos.len().to_string());
    presenter.key_value("instagram", &doc.social.instagram);
    presenter.key_value("whatsapp", &doc.social.whatsapp);
    presenter.key_value("seo title", &doc.seo.title);
    presenter.key_value("seo description", &doc.seo.description);

    Ok(())
}

/// Handle `init`: make sure the content document exists, creating it with
/// starter content when missing
pub async fn handle_init<S: FileStore>(
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let (_, created) = with_spinner(presenter, "Checking content...", sync.load_or_create()).await?;

    if created {
        presenter.success(&format!(
            "Created {} with starter content",
            sync.content_path()
        ));
    } else {
        presenter.info(&format!("{} already exists", sync.content_path()));
    }

    Ok(())
}

/// Handle `texts set`: update brand name, slogan, and the services list
pub async fn handle_texts_command<S: FileStore>(
    action: TextsAction,
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let TextsAction::Set {
        brand,
        slogan,
        services,
    } = action;

    if brand.is_none() && slogan.is_none() && services.is_none() {
        return Err(CommandError::InvalidArgument(
            "Nothing to update: pass at least one of --brand, --slogan, --services".to_string(),
        ));
    }

    let services_text = match services {
        Some(arg) => Some(read_text_arg(&arg).await?),
        None => None,
    };

    let mut doc = with_spinner(presenter, "Loading content...", sync.load()).await?;

    if let Some(brand) = brand {
        doc.brand_name = brand.trim().to_string();
    }
    if let Some(slogan) = slogan {
        doc.slogan = slogan.trim().to_string();
    }
    if let Some(text) = services_text {
        doc.set_services_from_text(&text);
    }

    with_spinner(
        presenter,
        "Saving content...",
        sync.save(&doc, "Update texts & services"),
    )
    .await?;
    presenter.success("Texts updated");

    Ok(())
}

/// Handle `about set`: update the about text and its style
pub async fn handle_about_command<S: FileStore>(
    action: AboutAction,
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let AboutAction::Set {
        text,
        font,
        size,
        color,
        bold,
        no_bold,
        italic,
        no_italic,
    } = action;

    let no_style_flags = font.is_none() && size.is_none() && color.is_none();
    if text.is_none() && no_style_flags && !bold && !no_bold && !italic && !no_italic {
        return Err(CommandError::InvalidArgument(
            "Nothing to update: pass --text or at least one style flag".to_string(),
        ));
    }

    let about_text = match text {
        Some(arg) => Some(read_text_arg(&arg).await?),
        None => None,
    };

    let mut doc = with_spinner(presenter, "Loading content...", sync.load()).await?;

    if let Some(text) = about_text {
        doc.about_text = text.trim().to_string();
    }
    if let Some(font) = font {
        doc.about_style.font_family = font;
    }
    if let Some(size) = size {
        doc.about_style.font_size = size;
    }
    if let Some(color) = color {
        doc.about_style.color = color;
    }
    if bold {
        doc.about_style.bold = true;
    }
    if no_bold {
        doc.about_style.bold = false;
    }
    if italic {
        doc.about_style.italic = true;
    }
    if no_italic {
        doc.about_style.italic = false;
    }

    with_spinner(
        presenter,
        "Saving content...",
        sync.save(&doc, "Update about text & style"),
    )
    .await?;
    presenter.success("About section updated");

    Ok(())
}

/// Handle `social set`: update social links and SEO metadata
pub async fn handle_social_command<S: FileStore>(
    action: SocialAction,
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let SocialAction::Set {
        instagram,
        whatsapp,
        seo_title,
        seo_description,
    } = action;

    if instagram.is_none() && whatsapp.is_none() && seo_title.is_none() && seo_description.is_none()
    {
        return Err(CommandError::InvalidArgument(
            "Nothing to update: pass at least one of --instagram, --whatsapp, --seo-title, --seo-description".to_string(),
        ));
    }

    let mut doc = with_spinner(presenter, "Loading content...", sync.load()).await?;

    if let Some(url) = instagram {
        doc.social.instagram = url.trim().to_string();
    }
    if let Some(url) = whatsapp {
        doc.social.whatsapp = url.trim().to_string();
    }
    if let Some(title) = seo_title {
        doc.seo.title = title.trim().to_string();
    }
    if let Some(description) = seo_description {
        doc.seo.description = description.trim().to_string();
    }

    with_spinner(
        presenter,
        "Saving content...",
        sync.save(&doc, "Update social & SEO"),
    )
    .await?;
    presenter.success("Social & SEO updated");

    Ok(())
}

/// Handle `export`: load the document and write it to a local file
/// ('-' writes to stdout)
pub async fn handle_export<S: FileStore>(
    output: &str,
    sync: &Synchronizer<'_, S>,
    presenter: &mut Presenter,
) -> Result<(), CommandError> {
    let doc = with_spinner(presenter, "Loading content...", sync.load()).await?;

    let json = doc.to_pretty_json().map_err(|e| CommandError::FileWrite {
        path: output.to_string(),
        message: e.to_string(),
    })?;

    if output == "-" {
        presenter.output(&json);
    } else {
        tokio::fs::write(output, &json)
            .await
            .map_err(|e| CommandError::FileWrite {
                path: output.to_string(),
                message: e.to_string(),
            })?;
        presenter.success(&format!("Exported to {}", output));
    }

    Ok(())
}

/// Resolve a text argument: a leading '@' means "read the rest as a file
/// path", anything else is taken literally
pub async fn read_text_arg(arg: &str) -> Result<String, CommandError> {
    match arg.strip_prefix('@') {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CommandError::FileRead {
                path: path.to_string(),
                message: e.to_string(),
            }),
        None => Ok(arg.to_string()),
    }
}

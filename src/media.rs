//! Image attachment handling for Discord messages.

use log::debug;
use mime::Mime;
use poise::serenity_prelude::Attachment;
use reqwest::get;

use crate::error::{BotError, Result};

/// Determine the image MIME type of an attachment, if it is an image.
///
/// Discord usually supplies a content type; when it doesn't, the filename
/// extension is used as a fallback. Non-image attachments yield `None`.
#[must_use]
pub fn image_mime_type(attachment: &Attachment) -> Option<Mime> {
    classify(attachment.content_type.as_deref(), &attachment.filename)
}

fn classify(content_type: Option<&str>, filename: &str) -> Option<Mime> {
    let mime = content_type
        .and_then(|ct| ct.parse::<Mime>().ok())
        .or_else(|| mime_guess::from_path(filename).first())?;

    (mime.type_() == mime::IMAGE).then_some(mime)
}

/// Fetch the raw bytes of a hosted image over plain HTTP GET.
pub async fn fetch_image(url: &str) -> Result<Vec<u8>> {
    debug!("Fetching image from {}", url);
    let response = get(url).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(BotError::ImageFetch { status });
    }

    let bytes = response.bytes().await?;
    debug!("Fetched image ({} bytes)", bytes.len());
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_identifies_image() {
        let mime = classify(Some("image/png"), "whatever.bin").expect("expected image");
        assert_eq!(mime.essence_str(), "image/png");
    }

    #[test]
    fn filename_is_a_fallback_when_content_type_missing() {
        let mime = classify(None, "photo.jpg").expect("expected image");
        assert_eq!(mime.essence_str(), "image/jpeg");
    }

    #[test]
    fn content_type_wins_over_filename() {
        assert!(classify(Some("text/plain"), "cat.png").is_none());
    }

    #[test]
    fn non_image_attachments_are_rejected() {
        assert!(classify(Some("application/pdf"), "doc.pdf").is_none());
        assert!(classify(None, "notes.txt").is_none());
        assert!(classify(None, "mystery").is_none());
    }
}

//! `!vision` - describe an image attachment via the vision model, then
//! reformat the raw description with the text model.

use log::{debug, info, warn};
use poise::serenity_prelude::{Context, Message as SerenityMessage};

use crate::bot::Data;
use crate::config::NoticePolicy;
use crate::error::Result;
use crate::media;
use crate::prompts;

/// Run the two-stage vision pipeline on the message's first attachment.
///
/// The branches that cannot proceed (no attachment, non-image attachment,
/// failed download) make no model call; whether the user hears about them is
/// decided by the configured [`NoticePolicy`].
pub async fn handle_vision(ctx: &Context, message: &SerenityMessage, data: &Data) -> Result<()> {
    let Some(attachment) = message.attachments.first() else {
        debug!(
            "Vision command without attachment from {}",
            message.author.tag()
        );
        return skip(ctx, message, data, "Attach an image and I'll describe it.").await;
    };

    let Some(mime) = media::image_mime_type(attachment) else {
        warn!(
            "Vision attachment {} is not a readable image",
            attachment.filename
        );
        return skip(
            ctx,
            message,
            data,
            "That attachment doesn't look like an image I can read.",
        )
        .await;
    };

    let image = match media::fetch_image(&attachment.url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(
                "Failed to fetch attachment {}: {}",
                attachment.filename, e
            );
            return skip(
                ctx,
                message,
                data,
                "I couldn't download that image. Please re-upload it and try again.",
            )
            .await;
        }
    };

    let description = data.gemini().describe_image(&image, mime.essence_str()).await?;
    debug!(
        "Vision model returned {} characters for {}",
        description.len(),
        attachment.filename
    );

    let prompt = prompts::image_summary(&description);
    let summary = data.gemini().generate_text(&prompt).await?;
    message.channel_id.say(&ctx.http, &summary).await?;

    info!(
        "Sent image summary to {} in channel {}",
        message.author.tag(),
        message.channel_id
    );
    Ok(())
}

/// Bail out of the pipeline, notifying the channel when the policy says so.
async fn skip(
    ctx: &Context,
    message: &SerenityMessage,
    data: &Data,
    notice: &str,
) -> Result<()> {
    match data.notice_policy() {
        NoticePolicy::Notify => {
            message.channel_id.say(&ctx.http, notice).await?;
        }
        NoticePolicy::Silent => {}
    }
    Ok(())
}

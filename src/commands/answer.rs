//! `!answer` - relay the message text to the text model.

use log::info;
use poise::serenity_prelude::{Context, Message as SerenityMessage};

use crate::bot::Data;
use crate::error::Result;

/// Forward the full message text (prefix included) as the model prompt and
/// send the generated text back to the originating channel.
pub async fn handle_answer(
    ctx: &Context,
    message: &SerenityMessage,
    prompt: &str,
    data: &Data,
) -> Result<()> {
    let reply = data.gemini().generate_text(prompt).await?;
    message.channel_id.say(&ctx.http, &reply).await?;

    info!(
        "Answered {} in channel {}",
        message.author.tag(),
        message.channel_id
    );
    Ok(())
}

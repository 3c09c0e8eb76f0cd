//! `!analyse` - website analysis via the text model.

use log::{debug, info};
use poise::serenity_prelude::{Context, Message as SerenityMessage};

use crate::bot::Data;
use crate::error::Result;
use crate::prompts;

const USAGE: &str = "Usage: `!analyse <url or topic>`";

/// Embed the command's arguments into the website analysis prompt and relay
/// the model's answer. The bot does not fetch the website itself.
pub async fn handle_analyse(
    ctx: &Context,
    message: &SerenityMessage,
    args: &str,
    data: &Data,
) -> Result<()> {
    if args.is_empty() {
        debug!(
            "Analyse command without arguments from {}",
            message.author.tag()
        );
        message.channel_id.say(&ctx.http, USAGE).await?;
        return Ok(());
    }

    let prompt = prompts::website_analysis(args);
    let reply = data.gemini().generate_text(&prompt).await?;
    message.channel_id.say(&ctx.http, &reply).await?;

    info!(
        "Sent website analysis for `{}` to {} in channel {}",
        args,
        message.author.tag(),
        message.channel_id
    );
    Ok(())
}

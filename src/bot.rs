//! Discord bot core logic and event handling.

use std::error::Error as StdError;

use log::{debug, error, info};
use poise::{
    Framework, FrameworkOptions, builtins,
    serenity_prelude::{ClientBuilder, Context, FullEvent, GatewayIntents},
};

use crate::commands::{Command, handle_analyse, handle_answer, handle_vision};
use crate::config::{Config, NoticePolicy};
use crate::error::Result;
use crate::gemini::GeminiClient;

type EventResult = std::result::Result<(), Box<dyn StdError + Send + Sync>>;

pub struct Data {
    gemini: GeminiClient,
    notice_policy: NoticePolicy,
}

impl Data {
    pub fn gemini(&self) -> &GeminiClient {
        &self.gemini
    }

    pub fn notice_policy(&self) -> NoticePolicy {
        self.notice_policy
    }
}

/// Run the Discord bot.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    debug!("Initializing Gemini client");
    let gemini = GeminiClient::new(
        config.gemini_api_key,
        config.text_model,
        config.vision_model,
    );
    let notice_policy = config.notice_policy;

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                info!("Bot is ready and connected to Discord");
                builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(Data {
                    gemini,
                    notice_policy,
                })
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

async fn event_handler(ctx: &Context, event: &FullEvent, data: &Data) -> EventResult {
    if let FullEvent::Message { new_message } = event {
        // Never react to our own messages, that way lies a feedback loop.
        if new_message.author.id == ctx.cache.current_user().id {
            return Ok(());
        }

        debug!(
            "Message from {} in channel {}: {}",
            new_message.author.tag(),
            new_message.channel_id,
            new_message.content
        );

        let Some(command) = Command::parse(&new_message.content) else {
            return Ok(());
        };

        info!(
            "Received command from {} in channel {}: {}",
            new_message.author.tag(),
            new_message.channel_id,
            new_message.content
        );

        // Show typing indicator while processing
        if let Err(e) = new_message.channel_id.broadcast_typing(&ctx.http).await {
            debug!("Failed to broadcast typing indicator: {}", e);
        }

        let result = match command {
            Command::Analyse { args } => handle_analyse(ctx, new_message, &args, data).await,
            Command::Vision => handle_vision(ctx, new_message, data).await,
            Command::Answer { prompt } => handle_answer(ctx, new_message, &prompt, data).await,
        };

        if let Err(e) = result {
            error!(
                "Error processing command from {}: {}",
                new_message.author.tag(),
                e
            );
            new_message
                .channel_id
                .say(&ctx.http, e.user_message())
                .await?;
        }
    }
    Ok(())
}

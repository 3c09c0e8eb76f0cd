use std::env;

use log::{debug, error, info};

use crate::error::{BotError, Result};

const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-pro-latest";
const DEFAULT_VISION_MODEL: &str = "gemini-pro-vision";

/// What to do when a command cannot proceed (no attachment, bad image, failed
/// download): tell the user, or only log for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticePolicy {
    #[default]
    Notify,
    Silent,
}

impl NoticePolicy {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "notify" => Some(NoticePolicy::Notify),
            "silent" => Some(NoticePolicy::Silent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub gemini_api_key: String,
    pub text_model: String,
    pub vision_model: String,
    pub notice_policy: NoticePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN").map_err(|e| {
            error!("Failed to load DISCORD_TOKEN from environment: {}", e);
            e
        })?;

        let gemini_api_key = env::var("GEMINI_API_KEY").map_err(|e| {
            error!("Failed to load GEMINI_API_KEY from environment: {}", e);
            e
        })?;

        let text_model =
            env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());
        let vision_model =
            env::var("GEMINI_VISION_MODEL").unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string());

        let notice_policy = match env::var("FAILURE_NOTICE") {
            Ok(value) => NoticePolicy::from_env_value(&value).ok_or_else(|| {
                error!("Invalid FAILURE_NOTICE value: {}", value);
                BotError::Config(format!(
                    "FAILURE_NOTICE must be `notify` or `silent`, got `{value}`"
                ))
            })?,
            Err(_) => NoticePolicy::default(),
        };

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!(
            "Gemini API key length: {} characters",
            gemini_api_key.len()
        );
        debug!("Text model: {}", text_model);
        debug!("Vision model: {}", vision_model);
        debug!("Failure notice policy: {:?}", notice_policy);

        Ok(Self {
            discord_token,
            gemini_api_key,
            text_model,
            vision_model,
            notice_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_parses_known_values() {
        assert_eq!(
            NoticePolicy::from_env_value("notify"),
            Some(NoticePolicy::Notify)
        );
        assert_eq!(
            NoticePolicy::from_env_value("silent"),
            Some(NoticePolicy::Silent)
        );
    }

    #[test]
    fn policy_is_case_and_whitespace_insensitive() {
        assert_eq!(
            NoticePolicy::from_env_value(" Silent "),
            Some(NoticePolicy::Silent)
        );
    }

    #[test]
    fn policy_rejects_unknown_values() {
        assert!(NoticePolicy::from_env_value("loud").is_none());
        assert!(NoticePolicy::from_env_value("").is_none());
    }

    #[test]
    fn policy_defaults_to_notify() {
        assert_eq!(NoticePolicy::default(), NoticePolicy::Notify);
    }
}

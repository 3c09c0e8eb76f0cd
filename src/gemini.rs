use base64::{Engine, engine::general_purpose::STANDARD};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Discord's message limit is 2000 characters (standard users)
// Roughly 1 token ≈ 4 characters, so 2000 chars ≈ 500 tokens
// Using 512 tokens to be safe
const MAX_OUTPUT_TOKENS: u32 = 512;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: Blob },
}

/// Raw media payload, base64-encoded as the API expects.
#[derive(Debug, Serialize)]
struct Blob {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn extract_text(response: &GenerateContentResponse) -> Result<String> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| BotError::GeminiResponse("No candidates in response".to_string()))?;

    let parts = candidate
        .content
        .as_ref()
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    let text = parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect::<Vec<_>>()
        .join("\n");

    if text.is_empty() {
        return Err(BotError::GeminiResponse(
            "No text in response candidate".to_string(),
        ));
    }

    Ok(text)
}

/// Handle to the Gemini generateContent endpoint, bound to one text model and
/// one vision model. Created once at startup and shared read-only afterwards.
pub struct GeminiClient {
    api_key: String,
    client: reqwest::Client,
    text_model: String,
    vision_model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, text_model: String, vision_model: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            text_model,
            vision_model,
        }
    }

    /// Generate text from a plain prompt using the text model.
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::from_parts(vec![Part::Text {
            text: prompt.to_string(),
        }]);

        self.generate(&self.text_model, &request).await
    }

    /// Describe an image using the vision model. The image is sent as-is; the
    /// model receives no accompanying text prompt.
    pub async fn describe_image(&self, image: &[u8], mime_type: &str) -> Result<String> {
        let request = GenerateContentRequest::from_parts(vec![Part::InlineData {
            inline_data: Blob {
                mime_type: mime_type.to_string(),
                data: STANDARD.encode(image),
            },
        }]);

        self.generate(&self.vision_model, &request).await
    }

    async fn generate(&self, model: &str, request: &GenerateContentRequest) -> Result<String> {
        debug!("Sending generateContent request to model {}", model);

        let url = format!("{GEMINI_API_BASE}/{model}:generateContent?key={}", self.api_key);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));
            return Err(BotError::GeminiApi { status, message });
        }

        let api_response: GenerateContentResponse = response.json().await?;
        let text = extract_text(&api_response)?;

        debug!("Received response from Gemini API");
        Ok(text)
    }
}

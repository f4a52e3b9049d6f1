use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use xtrema_common::models::InlineImage;

use crate::models::GeminiConfig;

/// A generative model that accepts an inline image plus an instruction and
/// answers with JSON text matching `schema`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(
        &self,
        image: &InlineImage,
        instruction: &str,
        schema: &Value,
    ) -> anyhow::Result<String>;
}

/// Google Gemini provider implementation
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider sharing the given HTTP client
    pub fn new(config: GeminiConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

/// Request body for `generateContent`: image part first, then the instruction,
/// with the response constrained to JSON matching `schema`.
pub fn build_request_body(image: &InlineImage, instruction: &str, schema: &Value) -> Value {
    json!({
        "contents": [{
            "parts": [
                {
                    "inlineData": {
                        "mimeType": image.mime_type,
                        "data": image.data,
                    }
                },
                { "text": instruction }
            ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema,
        }
    })
}

/// Pulls the generated text out of a `generateContent` response.
pub fn extract_response_text(data: &Value) -> anyhow::Result<String> {
    if let Some(error) = data.get("error") {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error");
        return Err(anyhow::anyhow!("API error: {}", message));
    }

    let candidate = data
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .ok_or_else(|| anyhow::anyhow!("Response missing 'candidates'"))?;

    let parts = candidate
        .pointer("/content/parts")
        .and_then(|p| p.as_array())
        .ok_or_else(|| {
            let reason = candidate
                .get("finishReason")
                .and_then(|r| r.as_str())
                .unwrap_or("unknown");
            anyhow::anyhow!("Candidate has no content parts (finishReason={})", reason)
        })?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        return Err(anyhow::anyhow!("Response contained no text"));
    }
    Ok(text)
}

#[async_trait]
impl VisionProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        image: &InlineImage,
        instruction: &str,
        schema: &Value,
    ) -> anyhow::Result<String> {
        let endpoint = self.config.endpoint();
        let body = build_request_body(image, instruction, schema);

        tracing::info!(
            "Making API call to {} ({} image, {} base64 chars)",
            endpoint,
            image.mime_type,
            image.data.len()
        );

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        tracing::debug!("Raw API response ({}): {}", status, response_text);

        let data = match serde_json::from_str::<Value>(&response_text) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to parse API response as JSON: {:?}", e);
                return Err(anyhow::anyhow!("API returned non-JSON response: {}", e));
            }
        };

        if !status.is_success() && data.get("error").is_none() {
            return Err(anyhow::anyhow!("API returned HTTP {}", status));
        }

        extract_response_text(&data)
    }
}

/// Provider used when the network is switched off. Every call fails, so the
/// gateway always answers with its fallback.
#[derive(Debug, Default, Clone)]
pub struct OfflineProvider;

#[async_trait]
impl VisionProvider for OfflineProvider {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn generate(
        &self,
        _image: &InlineImage,
        _instruction: &str,
        _schema: &Value,
    ) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("offline mode: analysis service disabled"))
    }
}

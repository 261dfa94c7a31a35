//! Gemini vision client.
//!
//! Calls `generateContent` with the instruction prompt and the image bytes
//! inlined base64 at their original MIME type.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use leafscan_core::VisionModel;
use tracing::info;

const GENERATE_CONTENT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Gemini `generateContent` API.
///
/// Constructed once per process from configuration and injected wherever a
/// [`VisionModel`] is needed.
pub struct GeminiVision {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiVision {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl VisionModel for GeminiVision {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn describe_image(&self, prompt: &str, image: &[u8], mime: &str) -> Result<String> {
        info!(model = %self.model, bytes = image.len(), mime, "describing image via Gemini");
        let url = format!(
            "{}/{}:generateContent?key={}",
            GENERATE_CONTENT_BASE, self.model, self.api_key
        );
        let body = build_request_body(prompt, mime, &STANDARD.encode(image));

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;
        if !resp.status().is_success() {
            bail!(
                "Gemini vision error ({}): {}",
                resp.status(),
                resp.text().await.unwrap_or_default()
            );
        }
        let json: serde_json::Value = resp.json().await.context("Gemini reply was not JSON")?;
        match extract_reply_text(&json) {
            Some(text) => Ok(text),
            None => bail!("Gemini reply contained no text candidate"),
        }
    }
}

/// Build the `generateContent` body: prompt text plus one inlined image.
fn build_request_body(prompt: &str, mime: &str, b64: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{ "parts": [
            { "text": prompt },
            { "inlineData": { "mimeType": mime, "data": b64 } }
        ]}]
    })
}

/// Pull the reply text out of a `generateContent` response.
///
/// An empty text node counts as no reply; the caller treats that as an
/// upstream failure rather than parsing it into fallbacks.
fn extract_reply_text(json: &serde_json::Value) -> Option<String> {
    let text = json["candidates"][0]["content"]["parts"][0]["text"].as_str()?;
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

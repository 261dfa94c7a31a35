use anyhow::Result;
use async_trait::async_trait;

/// Trait for hosted vision-language models.
///
/// The gateway holds one implementation per process and injects it into the
/// identification endpoint; tests substitute scripted fakes.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a text instruction plus one inlined image and return the model's
    /// raw text reply.
    async fn describe_image(&self, prompt: &str, image: &[u8], mime: &str) -> Result<String>;
}

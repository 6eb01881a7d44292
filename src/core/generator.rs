//! Image generation backends.
//!
//! The session only depends on [`ImageGenerator`], so the simulated
//! placeholder backend and a real model-backed one satisfy the same contract.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use super::image::{DEFAULT_IMAGE_SERVICE, GeneratedImage, ImageId, ImageSize, placeholder_url};
use crate::config::GenerationConfig;

/// Failure reported by a generation backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The backend could not produce an image.
    #[error("generation backend failed: {0}")]
    Backend(String),
}

/// Trait for image generation backends.
///
/// Implement this trait to plug in a new backend.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Produce an image for `prompt`.
    ///
    /// The returned image must carry `prompt` verbatim and a freshly issued id.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError>;
}

/// Simulated backend: waits a fixed delay, then returns a seeded placeholder URL.
#[derive(Debug, Clone)]
pub struct PlaceholderGenerator {
    delay: Duration,
    image_service: String,
    size: ImageSize,
}

impl Default for PlaceholderGenerator {
    fn default() -> Self {
        Self::new(Duration::from_millis(GenerationConfig::DEFAULT_DELAY_MS))
    }
}

impl PlaceholderGenerator {
    /// Create a placeholder backend with the reference image service and size.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            image_service: DEFAULT_IMAGE_SERVICE.to_string(),
            size: ImageSize::RESULT,
        }
    }

    #[must_use]
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            delay: config.delay(),
            image_service: config.image_service.clone(),
            size: config.size(),
        }
    }
}

#[async_trait]
impl ImageGenerator for PlaceholderGenerator {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError> {
        tracing::debug!(delay_ms = self.delay.as_millis(), "simulating generation");
        tokio::time::sleep(self.delay).await;

        let id = ImageId::generate();
        let url = placeholder_url(&self.image_service, id.as_str(), self.size);
        Ok(GeneratedImage::new(id, prompt, url, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn placeholder_waits_configured_delay() {
        let generator = PlaceholderGenerator::new(Duration::from_millis(2000));
        let start = tokio::time::Instant::now();

        let image = generator.generate("a red fox").await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(image.prompt(), "a red fox");
    }

    #[tokio::test(start_paused = true)]
    async fn placeholder_url_is_keyed_by_id() {
        let generator = PlaceholderGenerator::default();
        let image = generator.generate("sunset").await.unwrap();

        let expected = format!("https://picsum.photos/seed/{}/800/800", image.id());
        assert_eq!(image.url(), expected);
    }

    #[tokio::test]
    async fn from_config_uses_configured_service_and_size() {
        let config = GenerationConfig {
            delay_ms: 0,
            image_service: "http://localhost:9000".to_string(),
            width: 512,
            height: 256,
            ..GenerationConfig::default()
        };
        let generator = PlaceholderGenerator::from_config(&config);
        let image = generator.generate("x").await.unwrap();

        assert!(image.url().starts_with("http://localhost:9000/seed/"));
        assert!(image.url().ends_with("/512/256"));
    }
}

//! Generated image records and the placeholder image URL convention.

use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Default seed-parameterized image service.
pub const DEFAULT_IMAGE_SERVICE: &str = "https://picsum.photos";

/// Opaque unique token identifying a generated image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    /// Generate a fresh token.
    #[must_use]
    pub fn generate() -> Self {
        Self(ulid::Ulid::new().to_string().to_lowercase())
    }

    /// Wrap an existing token (e.g. one issued by a remote backend).
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pixel dimensions of a placeholder image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    /// Size of a full generation result.
    pub const RESULT: Self = Self::square(800);

    /// Size of the static example tiles on the home view.
    pub const EXAMPLE_TILE: Self = Self::square(400);

    #[must_use]
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Build a seed-parameterized image URL: `{base}/seed/{token}/{width}/{height}`.
#[must_use]
pub fn placeholder_url(base: &str, token: &str, size: ImageSize) -> String {
    format!(
        "{}/seed/{token}/{}/{}",
        base.trim_end_matches('/'),
        size.width,
        size.height
    )
}

/// One produced image. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    id: ImageId,
    prompt: String,
    url: String,
    timestamp: DateTime<Utc>,
}

impl GeneratedImage {
    #[must_use]
    pub fn new(
        id: ImageId,
        prompt: impl Into<String>,
        url: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            url: url.into(),
            timestamp,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ImageId {
        &self.id
    }

    /// The exact text that was submitted.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Creation time formatted in the local timezone for display.
    #[must_use]
    pub fn display_time(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

/// A static example shown on the home view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleTile {
    pub seed: u32,
    pub caption: String,
    pub url: String,
}

/// The six example tiles of the home view (seeds 1 through 6).
#[must_use]
pub fn example_tiles(base: &str) -> Vec<ExampleTile> {
    (1..=6)
        .map(|seed| ExampleTile {
            seed,
            caption: format!("Example prompt for image #{seed}"),
            url: placeholder_url(base, &seed.to_string(), ImageSize::EXAMPLE_TILE),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_url_has_seed_shape() {
        let url = placeholder_url(DEFAULT_IMAGE_SERVICE, "abc", ImageSize::RESULT);
        assert_eq!(url, "https://picsum.photos/seed/abc/800/800");
    }

    #[test]
    fn placeholder_url_trims_trailing_slash() {
        let url = placeholder_url("http://localhost:9000/", "t", ImageSize::square(256));
        assert_eq!(url, "http://localhost:9000/seed/t/256/256");
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = ImageId::generate();
        let b = ImageId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn example_tiles_use_small_size() {
        let tiles = example_tiles(DEFAULT_IMAGE_SERVICE);
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0].url, "https://picsum.photos/seed/1/400/400");
        assert_eq!(tiles[5].seed, 6);
    }

    #[test]
    fn image_serializes_with_plain_id() {
        let image = GeneratedImage::new(
            ImageId::from_token("tok"),
            "a red fox",
            "https://picsum.photos/seed/tok/800/800",
            Utc::now(),
        );
        let json = serde_json::to_string(&image).unwrap();
        assert!(json.contains(r#""id":"tok""#));
        assert!(json.contains(r#""prompt":"a red fox""#));
    }
}

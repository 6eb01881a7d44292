//! Registry of generated images, newest first.

use serde::Serialize;

use super::image::GeneratedImage;

/// Ordered collection of generated images.
///
/// The only mutation is [`History::prepend`]; entries are never edited,
/// reordered, or dropped.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct History {
    images: Vec<GeneratedImage>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an image at the front; it becomes `history[0]`.
    pub fn prepend(&mut self, image: GeneratedImage) {
        self.images.insert(0, image);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Most recently generated image.
    #[must_use]
    pub fn latest(&self) -> Option<&GeneratedImage> {
        self.images.first()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GeneratedImage> {
        self.images.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedImage> {
        self.images.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GeneratedImage;
    type IntoIter = std::slice::Iter<'a, GeneratedImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image::ImageId;

    fn image(prompt: &str) -> GeneratedImage {
        GeneratedImage::new(
            ImageId::generate(),
            prompt,
            format!("https://example.test/{prompt}"),
            chrono::Utc::now(),
        )
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn prepend_puts_newest_first() {
        let mut history = History::new();
        history.prepend(image("first"));
        history.prepend(image("second"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().prompt(), "second");
        assert_eq!(history.get(1).unwrap().prompt(), "first");
    }

    #[test]
    fn iteration_follows_display_order() {
        let mut history = History::new();
        for prompt in ["a", "b", "c"] {
            history.prepend(image(prompt));
        }
        let prompts: Vec<&str> = history.iter().map(GeneratedImage::prompt).collect();
        assert_eq!(prompts, ["c", "b", "a"]);
    }
}

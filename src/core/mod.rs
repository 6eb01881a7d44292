//! Core generation logic shared across the CLI and TUI.

mod error;
pub mod generator;
pub mod history;
pub mod image;
pub mod notify;
pub mod session;
pub mod share;

pub use error::{Error, Result};
pub use generator::{GenerationError, ImageGenerator, PlaceholderGenerator};
pub use history::History;
pub use image::{GeneratedImage, ImageId, ImageSize};
pub use notify::{Notification, NotificationKind, Notifier};
pub use session::{GenerationController, GenerationSession, PendingGeneration};
pub use share::{ShareOutcome, SharingAdapter};

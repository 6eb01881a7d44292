//! ImageAI - terminal studio for text-to-image generation.
//!
//! This library provides:
//! - A generation session with single-flight submission and a pluggable backend
//! - Sharing with clipboard fallback
//! - A terminal user interface (TUI) and a headless CLI
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  ┌─────────────┐
//! │     CLI     │  │     TUI     │
//! └──────┬──────┘  └──────┬──────┘
//!        │                │
//!        └───────┬────────┘
//!                │
//!         ┌──────┴──────┐
//!         │    Core     │
//!         └─────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod tui;

pub use config::Config;
pub use core::{
    GeneratedImage, GenerationController, ImageGenerator, Notification, Notifier,
    PlaceholderGenerator, SharingAdapter,
};

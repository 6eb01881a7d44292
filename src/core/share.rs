//! Sharing generated images.
//!
//! A platform share is attempted first; when it is missing or fails, the image
//! link is copied to the clipboard instead. Sharing never returns an error to
//! the caller, every path ends in a notification.

use std::process::{Command, Stdio};

#[cfg(feature = "clipboard")]
use parking_lot::Mutex;
use serde::Serialize;

use super::image::GeneratedImage;
use super::notify::{Notification, Notifier};
use super::{Error, Result};

/// Title attached to every share.
pub const SHARE_TITLE: &str = "AI Generated Image";

/// What is handed to a platform share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    #[must_use]
    pub fn for_image(image: &GeneratedImage) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: image.prompt().to_string(),
            url: image.url().to_string(),
        }
    }
}

/// Platform-native share capability.
pub trait ShareTarget: Send + Sync {
    fn share(&self, payload: &SharePayload) -> Result<()>;
}

/// Clipboard capability.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Shares by running an external program with `title`, `text` and `url`
/// appended to its arguments.
#[derive(Debug, Clone)]
pub struct CommandShareTarget {
    program: String,
    args: Vec<String>,
}

impl CommandShareTarget {
    /// Build from a command line split into words. Returns `None` if empty.
    #[must_use]
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl ShareTarget for CommandShareTarget {
    fn share(&self, payload: &SharePayload) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .args([&payload.title, &payload.text, &payload.url])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::Share(format!(
                "{} exited with {}",
                self.program,
                status.code().unwrap_or(-1)
            )))
        }
    }
}

/// System clipboard.
///
/// The handle is opened on first write and kept, since on X11 and Wayland
/// the copied text is only served while a handle is alive.
#[cfg(feature = "clipboard")]
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    /// Whether a clipboard handle is currently held.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.handle.lock().is_some()
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut handle = self.handle.lock();
        if handle.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            *handle = Some(clipboard);
        }

        let Some(clipboard) = handle.as_mut() else {
            return Err(Error::Clipboard("clipboard unavailable".to_string()));
        };
        if let Err(e) = clipboard.set_text(text) {
            // Reopen on the next write.
            *handle = None;
            return Err(Error::Clipboard(e.to_string()));
        }
        Ok(())
    }
}

/// Stand-in used when the crate is built without clipboard support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> Result<()> {
        Err(Error::Clipboard("clipboard support not compiled in".to_string()))
    }
}

/// The default clipboard for this build.
#[must_use]
pub fn default_clipboard() -> Box<dyn Clipboard> {
    #[cfg(feature = "clipboard")]
    {
        Box::new(SystemClipboard::default())
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Box::new(UnavailableClipboard)
    }
}

/// How a share request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Platform share succeeded.
    Shared,
    /// Link was copied to the clipboard.
    Copied,
    /// Clipboard fallback failed too.
    Failed,
}

/// Share with clipboard fallback.
pub struct SharingAdapter {
    target: Option<Box<dyn ShareTarget>>,
    clipboard: Box<dyn Clipboard>,
    notifier: Notifier,
}

impl SharingAdapter {
    #[must_use]
    pub fn new(
        target: Option<Box<dyn ShareTarget>>,
        clipboard: Box<dyn Clipboard>,
        notifier: Notifier,
    ) -> Self {
        Self {
            target,
            clipboard,
            notifier,
        }
    }

    /// Share `image`, falling back to copying its link.
    pub fn share(&self, image: &GeneratedImage) -> ShareOutcome {
        if let Some(ref target) = self.target {
            match target.share(&SharePayload::for_image(image)) {
                Ok(()) => {
                    self.notifier.emit(Notification::shared());
                    return ShareOutcome::Shared;
                }
                Err(e) => {
                    tracing::debug!("platform share failed, copying link instead: {e}");
                }
            }
        }

        self.copy_link(image)
    }

    /// Copy the image link to the clipboard.
    pub fn copy_link(&self, image: &GeneratedImage) -> ShareOutcome {
        match self.clipboard.write_text(image.url()) {
            Ok(()) => {
                self.notifier.emit(Notification::link_copied());
                ShareOutcome::Copied
            }
            Err(e) => {
                tracing::debug!("clipboard write failed: {e}");
                self.notifier.emit(Notification::copy_failed(image.url()));
                ShareOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::core::image::ImageId;
    use crate::core::notify::NotificationKind;

    #[derive(Default, Clone)]
    struct RecordingClipboard(Arc<Mutex<Vec<String>>>);

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            self.0.lock().push(text.to_string());
            Ok(())
        }
    }

    struct Rejecting;

    impl ShareTarget for Rejecting {
        fn share(&self, _payload: &SharePayload) -> Result<()> {
            Err(Error::Share("cancelled".to_string()))
        }
    }

    #[derive(Default, Clone)]
    struct Accepting(Arc<Mutex<Vec<SharePayload>>>);

    impl ShareTarget for Accepting {
        fn share(&self, payload: &SharePayload) -> Result<()> {
            self.0.lock().push(payload.clone());
            Ok(())
        }
    }

    fn image() -> GeneratedImage {
        GeneratedImage::new(
            ImageId::from_token("tok"),
            "a red fox",
            "https://picsum.photos/seed/tok/800/800",
            chrono::Utc::now(),
        )
    }

    #[test]
    fn platform_share_receives_payload() {
        let target = Accepting::default();
        let clipboard = RecordingClipboard::default();
        let (notifier, mut rx) = Notifier::channel();
        let adapter = SharingAdapter::new(
            Some(Box::new(target.clone())),
            Box::new(clipboard.clone()),
            notifier,
        );

        assert_eq!(adapter.share(&image()), ShareOutcome::Shared);

        let shared = target.0.lock();
        assert_eq!(shared[0].title, SHARE_TITLE);
        assert_eq!(shared[0].text, "a red fox");
        assert!(clipboard.0.lock().is_empty());
        assert_eq!(rx.try_recv().unwrap(), Notification::shared());
    }

    #[test]
    fn missing_platform_share_copies_link() {
        let clipboard = RecordingClipboard::default();
        let (notifier, mut rx) = Notifier::channel();
        let adapter = SharingAdapter::new(None, Box::new(clipboard.clone()), notifier);

        assert_eq!(adapter.share(&image()), ShareOutcome::Copied);
        assert_eq!(
            clipboard.0.lock()[0],
            "https://picsum.photos/seed/tok/800/800"
        );
        assert_eq!(rx.try_recv().unwrap(), Notification::link_copied());
    }

    #[test]
    fn rejected_platform_share_falls_back() {
        let clipboard = RecordingClipboard::default();
        let adapter = SharingAdapter::new(
            Some(Box::new(Rejecting)),
            Box::new(clipboard.clone()),
            Notifier::detached(),
        );

        assert_eq!(adapter.share(&image()), ShareOutcome::Copied);
        assert_eq!(clipboard.0.lock().len(), 1);
    }

    #[test]
    fn failed_fallback_still_notifies() {
        let (notifier, mut rx) = Notifier::channel();
        let adapter = SharingAdapter::new(
            Some(Box::new(Rejecting)),
            Box::new(UnavailableClipboard),
            notifier,
        );

        assert_eq!(adapter.share(&image()), ShareOutcome::Failed);
        let event = rx.try_recv().unwrap();
        assert_eq!(event.kind, NotificationKind::Error);
        assert!(event.description.contains("/seed/tok/"));
    }

    #[test]
    fn command_target_requires_program() {
        assert!(CommandShareTarget::from_argv(&[]).is_none());
        assert!(CommandShareTarget::from_argv(&["true".to_string()]).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn command_target_reports_exit_status() {
        let ok = CommandShareTarget::from_argv(&["true".to_string()]).unwrap();
        assert!(ok.share(&SharePayload::for_image(&image())).is_ok());

        let failing = CommandShareTarget::from_argv(&["false".to_string()]).unwrap();
        assert!(matches!(
            failing.share(&SharePayload::for_image(&image())),
            Err(Error::Share(_))
        ));
    }

    #[cfg(feature = "clipboard")]
    #[test]
    fn system_clipboard_holds_handle_only_after_successful_write() {
        let clipboard = SystemClipboard::default();
        assert!(!clipboard.is_open());

        // Headless machines have no clipboard; either way the handle state
        // must match the outcome.
        match clipboard.write_text("https://picsum.photos/seed/t/800/800") {
            Ok(()) => assert!(clipboard.is_open()),
            Err(e) => {
                assert!(matches!(e, Error::Clipboard(_)));
                assert!(!clipboard.is_open());
            }
        }
    }
}

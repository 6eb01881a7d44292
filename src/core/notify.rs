//! User-facing notification events.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A toast-style event for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    #[must_use]
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Prompt was empty or whitespace-only.
    #[must_use]
    pub fn empty_prompt() -> Self {
        Self::new(
            NotificationKind::Error,
            "Error",
            "Enter a description to generate",
        )
    }

    #[must_use]
    pub fn generated() -> Self {
        Self::new(NotificationKind::Success, "Success!", "Image generated")
    }

    #[must_use]
    pub fn generation_failed() -> Self {
        Self::new(
            NotificationKind::Error,
            "Error",
            "Could not generate the image",
        )
    }

    #[must_use]
    pub fn shared() -> Self {
        Self::new(NotificationKind::Success, "Shared!", "Image shared")
    }

    #[must_use]
    pub fn link_copied() -> Self {
        Self::new(
            NotificationKind::Success,
            "Copied!",
            "Link copied to clipboard",
        )
    }

    /// Clipboard fallback failed; the URL is included so it can be copied by hand.
    #[must_use]
    pub fn copy_failed(url: &str) -> Self {
        Self::new(
            NotificationKind::Error,
            "Copy failed",
            format!("Could not copy the link: {url}"),
        )
    }
}

/// Cloneable handle for emitting notifications.
///
/// Every event is logged; if a channel is attached it is also delivered there.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    tx: Option<mpsc::UnboundedSender<Notification>>,
}

impl Notifier {
    /// Create a notifier and the receiving end of its channel.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// A notifier that only logs.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn emit(&self, notification: Notification) {
        // User-facing events; the channel is where they are surfaced.
        match notification.kind {
            NotificationKind::Error => {
                tracing::info!(title = %notification.title, "{}", notification.description);
            }
            NotificationKind::Success | NotificationKind::Info => {
                tracing::debug!(title = %notification.title, "{}", notification.description);
            }
        }

        if let Some(ref tx) = self.tx {
            // Receiver gone means the UI shut down; nothing left to tell.
            let _ = tx.send(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_delivers_events_in_order() {
        let (notifier, mut rx) = Notifier::channel();
        notifier.emit(Notification::generated());
        notifier.emit(Notification::link_copied());

        assert_eq!(rx.try_recv().unwrap().title, "Success!");
        assert_eq!(rx.try_recv().unwrap().title, "Copied!");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn detached_notifier_does_not_panic() {
        Notifier::detached().emit(Notification::empty_prompt());
    }

    #[test]
    fn emit_after_receiver_dropped_is_ignored() {
        let (notifier, rx) = Notifier::channel();
        drop(rx);
        notifier.emit(Notification::generation_failed());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&Notification::empty_prompt()).unwrap();
        assert!(json.contains(r#""kind":"error""#));
    }
}

//! TUI application state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::seq::IndexedRandom;
use tokio::sync::mpsc;

use super::components::{PromptInput, SettingsState, Toast};
use super::state::{Router, View};
use crate::config::Config;
use crate::core::share::default_clipboard;
use crate::core::{
    Error, GeneratedImage, GenerationController, Notification, Notifier, PlaceholderGenerator,
    ShareOutcome, SharingAdapter,
};

/// Brand name shown in the navigation bar and footer.
pub const BRAND: &str = "ImageAI";

/// Placeholder prompts for the empty editor.
pub const PLACEHOLDERS: &[&str] = &[
    "a spaceship against a nebula, realistic style, 4k...",
    "a red fox in a snowy birch forest at dawn...",
    "a lighthouse on a cliff during a storm, oil painting...",
    "a cozy reading nook with warm lamplight, anime style...",
];

/// Spinner frames shown while generating.
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Application state for the TUI.
pub struct App {
    /// Active view.
    pub router: Router,

    /// Generation session shared with the background generation task.
    pub controller: GenerationController,

    /// Share with clipboard fallback.
    pub sharing: SharingAdapter,

    /// Loaded configuration.
    pub config: Config,

    /// Prompt editor mirrored into the session draft.
    pub input: PromptInput,

    /// Placeholder for the empty editor.
    pub placeholder: &'static str,

    /// Selected result on the generate view.
    pub selected_result: usize,

    /// Selected tile on the history view.
    pub selected_history: usize,

    /// Settings view state.
    pub settings: SettingsState,

    /// Most recent notification, until it expires.
    pub toast: Option<Toast>,

    /// Receiver for notifications from the core.
    pub notifications: mpsc::UnboundedReceiver<Notification>,

    /// Signals that a background generation settled.
    pub generation_done_rx: mpsc::UnboundedReceiver<()>,
    generation_done_tx: mpsc::UnboundedSender<()>,

    spinner_frame: usize,
}

impl App {
    /// Build the app with the placeholder backend and the configured share target.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let (notifier, notifications) = Notifier::channel();
        let generator = Arc::new(PlaceholderGenerator::from_config(&config.generation));
        let controller = GenerationController::new(generator, notifier.clone());
        let sharing = SharingAdapter::new(config.share.target(), default_clipboard(), notifier);
        Self::with_parts(config, controller, sharing, notifications)
    }

    /// Build the app from pre-wired core components.
    #[must_use]
    pub fn with_parts(
        config: Config,
        controller: GenerationController,
        sharing: SharingAdapter,
        notifications: mpsc::UnboundedReceiver<Notification>,
    ) -> Self {
        let (generation_done_tx, generation_done_rx) = mpsc::unbounded_channel();
        let placeholder = PLACEHOLDERS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or("describe an image...");
        let settings = SettingsState::from_config(&config);
        let input = PromptInput::with_text(controller.prompt_draft());

        Self {
            router: Router::new(),
            controller,
            sharing,
            config,
            input,
            placeholder,
            selected_result: 0,
            selected_history: 0,
            settings,
            toast: None,
            notifications,
            generation_done_rx,
            generation_done_tx,
            spinner_frame: 0,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.router.active()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.controller.is_generating()
    }

    /// Current spinner glyph.
    #[must_use]
    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }

    /// Apply an edit to the prompt and mirror it into the session draft.
    ///
    /// The editor is read-only while a generation is outstanding.
    pub fn edit_prompt(&mut self, edit: impl FnOnce(&mut PromptInput)) {
        if self.is_generating() {
            return;
        }
        edit(&mut self.input);
        self.controller.set_prompt_draft(self.input.text());
    }

    /// Submit the current draft.
    ///
    /// Validation and the in-flight check run here on the UI task; only the
    /// backend call is spawned.
    pub fn submit(&mut self) {
        self.controller.set_prompt_draft(self.input.text());
        let pending = match self.controller.begin_draft() {
            Ok(pending) => pending,
            Err(Error::GenerationInFlight | Error::EmptyPrompt) => return,
            Err(e) => {
                tracing::warn!("submit failed: {e}");
                return;
            }
        };

        let controller = self.controller.clone();
        let done = self.generation_done_tx.clone();
        tokio::spawn(async move {
            // Outcome is already recorded in the session and notified.
            let _ = controller.run(pending).await;
            let _ = done.send(());
        });
    }

    /// Refresh view state after a background generation settled.
    pub fn on_generation_finished(&mut self) {
        self.input.set_text(self.controller.prompt_draft());
        self.selected_result = 0;
        self.selected_history = 0;
    }

    /// Image under the cursor on the active view.
    #[must_use]
    pub fn selected_image(&self) -> Option<GeneratedImage> {
        let index = match self.view() {
            View::Generate => self.selected_result,
            View::History => self.selected_history,
            View::Home | View::Profile | View::Settings => return None,
        };
        self.controller
            .with_session(|session| session.history().get(index).cloned())
    }

    pub fn select_next_image(&mut self) {
        let len = self.controller.history_len();
        let selected = self.selection_mut();
        if len > 0 {
            *selected = (*selected + 1).min(len - 1);
        }
    }

    pub fn select_previous_image(&mut self) {
        let selected = self.selection_mut();
        *selected = selected.saturating_sub(1);
    }

    fn selection_mut(&mut self) -> &mut usize {
        if self.view() == View::History {
            &mut self.selected_history
        } else {
            &mut self.selected_result
        }
    }

    /// Load the selected image's prompt back into the editor.
    pub fn reuse_selected(&mut self) {
        if let Some(image) = self.selected_image() {
            self.controller.reuse(&image);
            self.input.set_text(image.prompt());
        }
    }

    pub fn share_selected(&self) -> Option<ShareOutcome> {
        self.selected_image().map(|image| self.sharing.share(&image))
    }

    pub fn copy_selected_link(&self) -> Option<ShareOutcome> {
        self.selected_image()
            .map(|image| self.sharing.copy_link(&image))
    }

    /// Show a notification, replacing the current one.
    pub fn show(&mut self, notification: Notification) {
        self.toast = Some(Toast::new(notification));
    }

    /// Drain pending notifications, keeping the newest on screen.
    pub fn drain_notifications(&mut self) {
        while let Ok(notification) = self.notifications.try_recv() {
            self.show(notification);
        }
    }

    /// Advance animation and expire the toast.
    pub fn tick(&mut self, now: Instant) {
        if self.is_generating() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        let ttl = Duration::from_millis(self.config.tui.toast_ms);
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now, ttl)) {
            self.toast = None;
        }
    }
}

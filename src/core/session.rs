//! Generation session state and its controller.
//!
//! [`GenerationSession`] is the single-user, in-memory state tree: the prompt
//! draft, the in-flight flag, and the image history. Submission is split into
//! a synchronous [`GenerationSession::begin`] (validation and the single-flight
//! check) and [`GenerationSession::finish`], so the only suspension point is
//! the backend call in between. [`GenerationController`] glues the two halves
//! around an [`ImageGenerator`].

use std::sync::Arc;

use parking_lot::Mutex;

use super::generator::{GenerationError, ImageGenerator};
use super::history::History;
use super::image::GeneratedImage;
use super::notify::{Notification, Notifier};
use super::{Error, Result};

/// Ticket for the one outstanding generation.
///
/// Holds the prompt as it was when submitted, so later draft edits cannot leak
/// into the result.
#[derive(Debug)]
#[must_use = "an unfinished generation keeps the session busy"]
pub struct PendingGeneration {
    prompt: String,
}

impl PendingGeneration {
    /// The submitted prompt.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// In-memory state of one user's generation session.
#[derive(Debug, Default)]
pub struct GenerationSession {
    prompt_draft: String,
    is_generating: bool,
    history: History,
    notifier: Notifier,
}

impl GenerationSession {
    #[must_use]
    pub fn new(notifier: Notifier) -> Self {
        Self {
            notifier,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn prompt_draft(&self) -> &str {
        &self.prompt_draft
    }

    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.is_generating
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Overwrite the draft.
    pub fn set_prompt_draft(&mut self, text: impl Into<String>) {
        self.prompt_draft = text.into();
    }

    /// Load an earlier prompt back into the draft.
    pub fn reuse(&mut self, image: &GeneratedImage) {
        self.prompt_draft = image.prompt().to_string();
    }

    /// Validate `prompt` and mark the session busy.
    ///
    /// Fails without touching any state if the prompt is blank or another
    /// generation is outstanding.
    pub fn begin(&mut self, prompt: &str) -> Result<PendingGeneration> {
        if prompt.trim().is_empty() {
            self.notifier.emit(Notification::empty_prompt());
            return Err(Error::EmptyPrompt);
        }

        if self.is_generating {
            tracing::debug!("rejecting submit while a generation is outstanding");
            return Err(Error::GenerationInFlight);
        }

        self.is_generating = true;
        tracing::info!(prompt = %prompt, "generation started");

        Ok(PendingGeneration {
            prompt: prompt.to_string(),
        })
    }

    /// [`Self::begin`] with the current draft.
    pub fn begin_draft(&mut self) -> Result<PendingGeneration> {
        let draft = self.prompt_draft.clone();
        self.begin(&draft)
    }

    /// Settle the outstanding generation.
    ///
    /// On success the image is prepended and the draft cleared; on failure
    /// only the in-flight flag is reset.
    pub fn finish(
        &mut self,
        pending: PendingGeneration,
        outcome: std::result::Result<GeneratedImage, GenerationError>,
    ) -> Result<GeneratedImage> {
        self.is_generating = false;

        match outcome {
            Ok(mut image) => {
                if image.prompt() != pending.prompt {
                    tracing::debug!(
                        submitted = %pending.prompt,
                        returned = %image.prompt(),
                        "backend returned a different prompt, keeping the submitted one"
                    );
                    image = GeneratedImage::new(
                        image.id().clone(),
                        pending.prompt,
                        image.url(),
                        image.timestamp(),
                    );
                }
                tracing::info!(id = %image.id(), url = %image.url(), "generation finished");
                self.history.prepend(image.clone());
                self.prompt_draft.clear();
                self.notifier.emit(Notification::generated());
                Ok(image)
            }
            Err(e) => {
                tracing::warn!(prompt = %pending.prompt, "generation failed: {e}");
                self.notifier.emit(Notification::generation_failed());
                Err(e.into())
            }
        }
    }

    /// Release the session when a generation is dropped before it settles.
    fn abandon(&mut self) {
        tracing::debug!("generation abandoned");
        self.is_generating = false;
    }
}

/// Cloneable handle that runs submissions against a shared session.
///
/// The mutex is never held across the backend await; the in-flight flag is
/// what keeps submissions single-flight.
#[derive(Clone)]
pub struct GenerationController {
    session: Arc<Mutex<GenerationSession>>,
    generator: Arc<dyn ImageGenerator>,
}

impl GenerationController {
    #[must_use]
    pub fn new(generator: Arc<dyn ImageGenerator>, notifier: Notifier) -> Self {
        Self {
            session: Arc::new(Mutex::new(GenerationSession::new(notifier))),
            generator,
        }
    }

    /// Read the session without cloning it.
    pub fn with_session<R>(&self, f: impl FnOnce(&GenerationSession) -> R) -> R {
        f(&self.session.lock())
    }

    #[must_use]
    pub fn prompt_draft(&self) -> String {
        self.session.lock().prompt_draft().to_string()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.session.lock().is_generating()
    }

    /// Snapshot of the history.
    #[must_use]
    pub fn history(&self) -> History {
        self.session.lock().history().clone()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.session.lock().history().len()
    }

    pub fn set_prompt_draft(&self, text: impl Into<String>) {
        self.session.lock().set_prompt_draft(text);
    }

    pub fn reuse(&self, image: &GeneratedImage) {
        self.session.lock().reuse(image);
    }

    /// Synchronous half of a submission. See [`GenerationSession::begin`].
    pub fn begin(&self, prompt: &str) -> Result<PendingGeneration> {
        self.session.lock().begin(prompt)
    }

    /// [`Self::begin`] with the current draft.
    pub fn begin_draft(&self) -> Result<PendingGeneration> {
        self.session.lock().begin_draft()
    }

    /// Run the backend for a started generation and settle the session.
    ///
    /// If the returned future is dropped early, the session is released
    /// without touching the draft or history.
    pub async fn run(&self, pending: PendingGeneration) -> Result<GeneratedImage> {
        let mut guard = InFlightGuard {
            session: &self.session,
            armed: true,
        };

        tracing::debug!(backend = self.generator.name(), "awaiting backend");
        let outcome = self.generator.generate(pending.prompt()).await;

        guard.armed = false;
        self.session.lock().finish(pending, outcome)
    }

    /// Validate, generate, and record an image for `prompt`.
    ///
    /// Validation and the single-flight check happen before the first
    /// suspension, so a concurrent second call is rejected immediately.
    pub async fn submit(&self, prompt: &str) -> Result<GeneratedImage> {
        let pending = self.begin(prompt)?;
        self.run(pending).await
    }
}

/// Resets the in-flight flag if a generation future is dropped mid-await.
struct InFlightGuard<'a> {
    session: &'a Mutex<GenerationSession>,
    armed: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.session.lock().abandon();
        }
    }
}

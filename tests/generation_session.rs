//! Integration tests for the generation session controller.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use imageai_cli::core::{
    Error, GeneratedImage, GenerationController, GenerationError, ImageGenerator, Notification,
    NotificationKind, Notifier, PlaceholderGenerator,
};

const DELAY: Duration = Duration::from_millis(2000);

fn controller() -> (
    GenerationController,
    tokio::sync::mpsc::UnboundedReceiver<Notification>,
) {
    let (notifier, rx) = Notifier::channel();
    let generator = Arc::new(PlaceholderGenerator::new(DELAY));
    (GenerationController::new(generator, notifier), rx)
}

struct FailingGenerator;

#[async_trait]
impl ImageGenerator for FailingGenerator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, GenerationError> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        Err(GenerationError::Backend("model unavailable".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn fresh_session_generates_one_image() {
    let (controller, mut rx) = controller();
    controller.set_prompt_draft("a red fox");

    let start = Instant::now();
    let image = controller.submit("a red fox").await.unwrap();

    assert!(start.elapsed() >= DELAY);
    let history = controller.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history.latest().unwrap().prompt(), "a red fox");
    assert_eq!(history.latest().unwrap(), &image);
    assert_eq!(controller.prompt_draft(), "");
    assert!(!controller.is_generating());
    assert_eq!(rx.try_recv().unwrap(), Notification::generated());
}

#[tokio::test(start_paused = true)]
async fn empty_prompt_is_rejected_synchronously() {
    let (controller, mut rx) = controller();
    let start = Instant::now();

    let result = controller.submit("").await;

    assert!(matches!(result, Err(Error::EmptyPrompt)));
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(controller.history_len(), 0);
    assert!(!controller.is_generating());

    let event = rx.try_recv().unwrap();
    assert_eq!(event.kind, NotificationKind::Error);
    assert_eq!(event, Notification::empty_prompt());
}

#[tokio::test(start_paused = true)]
async fn whitespace_prompt_is_rejected() {
    let (controller, _rx) = controller();
    let result = controller.submit("  \t\n").await;
    assert!(matches!(result, Err(Error::EmptyPrompt)));
    assert_eq!(controller.history_len(), 0);
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_outstanding_is_rejected() {
    let (controller, _rx) = controller();

    let (first, second) = tokio::join!(controller.submit("x"), async {
        let start = Instant::now();
        let result = controller.submit("y").await;
        (result, start.elapsed())
    });

    let (second_result, second_elapsed) = second;
    assert!(matches!(second_result, Err(Error::GenerationInFlight)));
    assert_eq!(second_elapsed, Duration::ZERO);

    assert_eq!(first.unwrap().prompt(), "x");
    let history = controller.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history.latest().unwrap().prompt(), "x");
}

#[tokio::test(start_paused = true)]
async fn flag_is_set_for_the_whole_generation() {
    let (controller, _rx) = controller();
    assert!(!controller.is_generating());

    let pending = controller.begin("lighthouse").unwrap();
    assert!(controller.is_generating());

    let runner = controller.clone();
    let handle = tokio::spawn(async move { runner.run(pending).await });

    tokio::time::advance(DELAY - Duration::from_millis(1)).await;
    assert!(controller.is_generating());
    assert_eq!(controller.history_len(), 0);

    handle.await.unwrap().unwrap();
    assert!(!controller.is_generating());
    assert_eq!(controller.history_len(), 1);
}

#[tokio::test(start_paused = true)]
async fn submitted_prompt_is_captured_before_suspension() {
    let (controller, _rx) = controller();
    controller.set_prompt_draft("castle at dusk");

    let pending = controller.begin_draft().unwrap();
    let runner = controller.clone();
    let handle = tokio::spawn(async move { runner.run(pending).await });

    // Draft edits while generating do not reach the result.
    controller.set_prompt_draft("something typed later");

    let image = handle.await.unwrap().unwrap();
    assert_eq!(image.prompt(), "castle at dusk");
    assert_eq!(controller.prompt_draft(), "");
}

#[tokio::test(start_paused = true)]
async fn backend_failure_resets_flag_and_keeps_state() {
    let (notifier, mut rx) = Notifier::channel();
    let controller = GenerationController::new(Arc::new(FailingGenerator), notifier);
    controller.set_prompt_draft("neon city");

    let result = controller.submit("neon city").await;

    assert!(matches!(result, Err(Error::Generation(_))));
    assert!(!controller.is_generating());
    assert_eq!(controller.prompt_draft(), "neon city");
    assert_eq!(controller.history_len(), 0);
    assert_eq!(rx.try_recv().unwrap(), Notification::generation_failed());

    // Session is usable again.
    assert!(controller.begin("neon city").is_ok());
}

#[tokio::test(start_paused = true)]
async fn history_is_newest_first_and_reuse_only_touches_draft() {
    let (controller, _rx) = controller();
    controller.submit("first").await.unwrap();
    controller.submit("second").await.unwrap();

    let history = controller.history();
    assert_eq!(history.get(0).unwrap().prompt(), "second");
    assert_eq!(history.get(1).unwrap().prompt(), "first");
    assert_ne!(history.get(0).unwrap().id(), history.get(1).unwrap().id());

    let oldest = history.get(1).unwrap().clone();
    for _ in 0..3 {
        controller.reuse(&oldest);
    }
    assert_eq!(controller.prompt_draft(), "first");
    assert_eq!(controller.history_len(), 2);
    assert!(!controller.is_generating());
}

#[tokio::test]
async fn set_prompt_draft_keeps_last_value() {
    let (controller, _rx) = controller();
    controller.set_prompt_draft("x");
    controller.set_prompt_draft("y");
    assert_eq!(controller.prompt_draft(), "y");
}

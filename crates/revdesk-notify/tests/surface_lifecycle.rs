//! Lifecycle tests for the notification surface.
//!
//! Timer-driven tests run on a paused clock: tokio advances time whenever
//! every task is idle, so lifetimes and exit delays elapse instantly and
//! deterministically.

use std::sync::Arc;
use std::time::Duration;

use revdesk_core::{NotificationState, Severity};
use revdesk_notify::testing::{RecordingRenderer, RenderEvent};
use revdesk_notify::{NotificationSurface, SurfaceConfig};
use tokio_test::{assert_elapsed, assert_ok};

fn recording_surface() -> (NotificationSurface, RecordingRenderer) {
    let renderer = RecordingRenderer::new();
    let surface = NotificationSurface::new(renderer.clone(), SurfaceConfig::new()).unwrap();
    (surface, renderer)
}

// ── Expiry ─────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn expired_notification_is_removed_after_exit_delay() {
    let (surface, renderer) = recording_surface();
    let handle = surface.show("saved", Severity::Info, Duration::from_millis(100));
    assert_eq!(surface.state(handle), Some(NotificationState::Live));

    // Past the lifetime, inside the exit transition
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(surface.state(handle), Some(NotificationState::Exiting));
    assert_eq!(surface.live_count(), 0);
    assert!(surface.has_container());

    // Past lifetime + exit delay
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(surface.state(handle), None);
    assert!(surface.is_empty());
    assert!(!surface.has_container());

    assert_eq!(
        renderer.events().last(),
        Some(&RenderEvent::Unmount),
        "container must be torn down after the last removal"
    );
}

#[tokio::test(start_paused = true)]
async fn default_lifetime_is_three_seconds() {
    let (surface, _) = recording_surface();
    let handle = surface.info("hello");

    tokio::time::sleep(Duration::from_millis(2900)).await;
    assert_eq!(surface.state(handle), Some(NotificationState::Live));

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(surface.state(handle), Some(NotificationState::Exiting));
}

#[tokio::test(start_paused = true)]
async fn container_is_recreated_on_next_show() {
    let (surface, renderer) = recording_surface();
    surface.show("first", Severity::Info, Duration::from_millis(100));
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(!surface.has_container());

    surface.success("second");
    assert!(surface.has_container());
    assert_eq!(renderer.count(|e| matches!(e, RenderEvent::Mount)), 2);
    assert_eq!(renderer.count(|e| matches!(e, RenderEvent::Unmount)), 1);
}

#[tokio::test(start_paused = true)]
async fn wait_idle_resolves_when_container_is_torn_down() {
    let (surface, _) = recording_surface();
    surface.show("a", Severity::Info, Duration::from_millis(100));
    surface.show("b", Severity::Info, Duration::from_millis(200));

    let start = tokio::time::Instant::now();
    assert_ok!(tokio::time::timeout(Duration::from_secs(5), surface.wait_idle()).await);

    // b expires at 200 ms and is removed 300 ms later
    assert_elapsed!(start, Duration::from_millis(500));
    assert!(!surface.has_container());
}

#[tokio::test(start_paused = true)]
async fn wait_idle_on_fresh_surface_returns_immediately() {
    let (surface, _) = recording_surface();
    assert_ok!(tokio::time::timeout(Duration::from_millis(1), surface.wait_idle()).await);
}

// ── Dismissal ──────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn dismiss_of_destroyed_handle_is_noop() {
    let (surface, renderer) = recording_surface();
    let gone = surface.show("gone", Severity::Info, Duration::from_millis(100));
    let other = surface.show("other", Severity::Warning, Duration::ZERO);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(surface.state(gone), None);

    let events_before = renderer.events().len();
    assert!(!surface.dismiss(gone));

    assert_eq!(renderer.events().len(), events_before);
    assert_eq!(surface.state(other), Some(NotificationState::Live));
    assert!(surface.has_container());
}

#[tokio::test(start_paused = true)]
async fn manual_dismiss_cancels_expiry() {
    let (surface, renderer) = recording_surface();
    let handle = surface.show("bye", Severity::Info, Duration::from_millis(1000));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(surface.dismiss(handle));

    // Removed after the exit delay, well before the original expiry
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(surface.state(handle), None);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(renderer.count(|e| matches!(e, RenderEvent::BeginExit(_))), 1);
    assert_eq!(renderer.count(|e| matches!(e, RenderEvent::Remove(_))), 1);
}

#[tokio::test(start_paused = true)]
async fn dismiss_all_exits_live_notifications_only() {
    let (surface, _) = recording_surface();
    let first = surface.info("one");
    surface.info("two");
    surface.show("three", Severity::Error, Duration::ZERO);
    assert!(surface.dismiss(first));

    assert_eq!(surface.dismiss_all(), 2);
    assert_eq!(surface.live_count(), 0);

    surface.wait_idle().await;
    assert!(surface.is_empty());
}

// ── Stacking ───────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn display_order_matches_call_order() {
    let (surface, renderer) = recording_surface();
    for message in ["a", "b", "c"] {
        surface.show(message, Severity::Info, Duration::ZERO);
    }

    let order: Vec<String> = surface.snapshot().into_iter().map(|v| v.message).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
    assert_eq!(renderer.rendered_messages(), vec!["a", "b", "c"]);
}

#[tokio::test(start_paused = true)]
async fn dismissing_first_keeps_second_timer_and_position() {
    let (surface, _) = recording_surface();
    let first = surface.show("first", Severity::Info, Duration::from_millis(3000));
    tokio::time::sleep(Duration::from_millis(1000)).await;
    let second = surface.show("second", Severity::Info, Duration::from_millis(3000));
    let third = surface.show("third", Severity::Info, Duration::ZERO);

    tokio::time::sleep(Duration::from_millis(500)).await;
    let before = surface.remaining(second).unwrap();
    assert!(surface.dismiss(first));
    assert_eq!(surface.remaining(second), Some(before));

    tokio::time::sleep(Duration::from_millis(400)).await;
    let order: Vec<_> = surface.snapshot().into_iter().map(|v| v.id).collect();
    assert_eq!(order, vec![second.id(), third.id()]);

    // Second still expires at its own deadline: 1000 + 3000 ms
    let remaining = surface.remaining(second).unwrap();
    assert!(
        remaining <= Duration::from_millis(2100) && remaining >= Duration::from_millis(2090),
        "unexpected remaining lifetime {remaining:?}"
    );
}

// ── Concurrency ────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_shows_and_dismisses_settle() {
    let config = SurfaceConfig::new().with_exit_delay(Duration::from_millis(10));
    let renderer = RecordingRenderer::new();
    let surface = Arc::new(NotificationSurface::new(renderer.clone(), config).unwrap());

    let mut tasks = Vec::new();
    for worker in 0..8 {
        let surface = Arc::clone(&surface);
        tasks.push(tokio::spawn(async move {
            for n in 0..25 {
                let handle = surface.show(
                    format!("worker {worker} message {n}"),
                    Severity::Info,
                    Duration::from_millis(20),
                );
                if n % 2 == 0 {
                    surface.dismiss(handle);
                }
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    tokio::time::timeout(Duration::from_secs(5), surface.wait_idle())
        .await
        .unwrap();

    assert!(surface.is_empty());
    assert!(!surface.has_container());
    assert_eq!(renderer.count(|e| matches!(e, RenderEvent::Render(_))), 200);
    assert_eq!(renderer.count(|e| matches!(e, RenderEvent::BeginExit(_))), 200);
    assert_eq!(renderer.count(|e| matches!(e, RenderEvent::Remove(_))), 200);
}

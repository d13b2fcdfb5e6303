use std::time::{Duration, Instant};

use homeplan::generator::{GenerationError, GenerationQueue, LayoutGenerator};
use homeplan::model::{Layout, Room, SourceKind};

/// Test backend: payload is `<delay_ms>:<room name>`; sleeps, then returns a
/// one-room layout carrying the name.
struct SlowEcho;

impl LayoutGenerator for SlowEcho {
    fn generate(&self, payload: &str, source: SourceKind) -> Result<Layout, GenerationError> {
        let (delay, name) = payload.split_once(':').expect("payload is delay:name");
        std::thread::sleep(Duration::from_millis(delay.parse().unwrap()));
        let rooms = vec![Room::new(name, 0.0, 0.0, 100.0, 100.0)];
        Ok(Layout::new(rooms, Vec::new(), source)?)
    }
}

struct AlwaysFails;

impl LayoutGenerator for AlwaysFails {
    fn generate(&self, _payload: &str, _source: SourceKind) -> Result<Layout, GenerationError> {
        Err(GenerationError::Service("backend unavailable".into()))
    }
}

fn poll_until(queue: &mut GenerationQueue, limit: Duration) -> Option<Result<Layout, GenerationError>> {
    let start = Instant::now();
    while start.elapsed() < limit {
        if let Some(result) = queue.poll() {
            return Some(result);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    None
}

#[test]
fn completed_request_delivers_its_layout() {
    let mut queue = GenerationQueue::new(std::sync::Arc::new(SlowEcho));
    queue.submit("10:Living Room".into(), SourceKind::Text);
    assert!(queue.is_pending());

    let layout = poll_until(&mut queue, Duration::from_secs(2))
        .expect("request should complete")
        .expect("generation should succeed");
    assert_eq!(layout.rooms()[0].name, "Living Room");
    assert!(!queue.is_pending());
}

#[test]
fn stale_results_are_discarded() {
    let mut queue = GenerationQueue::new(std::sync::Arc::new(SlowEcho));
    queue.submit("200:stale".into(), SourceKind::Text);
    queue.submit("10:fresh".into(), SourceKind::Text);

    let layout = poll_until(&mut queue, Duration::from_secs(2))
        .expect("latest request should complete")
        .expect("generation should succeed");
    assert_eq!(layout.rooms()[0].name, "fresh");

    // The replaced request finishes later; its result must never surface.
    assert!(poll_until(&mut queue, Duration::from_millis(400)).is_none());
}

#[test]
fn slow_request_times_out() {
    let mut queue =
        GenerationQueue::with_timeout(std::sync::Arc::new(SlowEcho), Duration::from_millis(50));
    queue.submit("500:too slow".into(), SourceKind::Text);

    let result = poll_until(&mut queue, Duration::from_secs(2)).expect("timeout should surface");
    assert!(matches!(result, Err(GenerationError::Timeout)));
    assert!(!queue.is_pending());

    // The late arrival after the timeout is dropped silently.
    assert!(poll_until(&mut queue, Duration::from_millis(700)).is_none());
}

#[test]
fn service_failure_is_reported() {
    let mut queue = GenerationQueue::new(std::sync::Arc::new(AlwaysFails));
    queue.submit("anything".into(), SourceKind::Voice);

    let result = poll_until(&mut queue, Duration::from_secs(2)).expect("failure should surface");
    assert!(matches!(result, Err(GenerationError::Service(_))));
}

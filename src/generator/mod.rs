use std::sync::Arc;
use std::time::Duration;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

use parking_lot::Mutex;
use thiserror::Error;

use crate::model::{InvalidLayout, Layout, SourceKind};

pub mod spec;
pub mod stub;

pub use stub::StubInference;

/// Bound on how long a generation request may stay in flight before the
/// queue surfaces a timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from deriving a layout out of raw user input.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid floor plan specification: {0}")]
    Parse(String),

    #[error("incomplete floor plan specification: {0}")]
    Schema(String),

    #[error("design service failed: {0}")]
    Service(String),

    #[error("design service timed out")]
    Timeout,

    #[error(transparent)]
    Layout(#[from] InvalidLayout),
}

/// A producer of layouts from opaque input payloads.
///
/// Implementations model the external inference stage: they either return a
/// complete layout or fail, never partial results. They must not mutate any
/// shared state.
pub trait LayoutGenerator: Send + Sync {
    fn generate(&self, payload: &str, source: SourceKind) -> Result<Layout, GenerationError>;
}

/// Default generator: structured `Code` payloads go through the strict spec
/// parser, everything else through the pluggable inference backend.
pub struct DesignService {
    inference: Arc<dyn LayoutGenerator>,
}

impl DesignService {
    pub fn new(inference: Arc<dyn LayoutGenerator>) -> Self {
        Self { inference }
    }
}

impl Default for DesignService {
    fn default() -> Self {
        Self::new(Arc::new(StubInference::default()))
    }
}

impl LayoutGenerator for DesignService {
    fn generate(&self, payload: &str, source: SourceKind) -> Result<Layout, GenerationError> {
        match source {
            SourceKind::Code => spec::parse(payload),
            _ => self.inference.generate(payload, source),
        }
    }
}

struct Completion {
    seq: u64,
    result: Result<Layout, GenerationError>,
}

struct Pending {
    seq: u64,
    #[cfg(not(target_arch = "wasm32"))]
    started: Instant,
}

impl Pending {
    fn new(seq: u64) -> Self {
        Self {
            seq,
            #[cfg(not(target_arch = "wasm32"))]
            started: Instant::now(),
        }
    }
}

/// Single-outstanding-request bookkeeping for layout generation.
///
/// Generation runs off the UI thread; completions land in a shared inbox
/// that the UI drains once per frame. Every request carries a monotonically
/// increasing sequence number and only the latest one submitted may land —
/// results from replaced or timed-out requests are discarded, so a stale
/// completion can never overwrite a newer layout.
pub struct GenerationQueue {
    generator: Arc<dyn LayoutGenerator>,
    inbox: Arc<Mutex<Vec<Completion>>>,
    pending: Option<Pending>,
    next_seq: u64,
    timeout: Duration,
}

impl GenerationQueue {
    pub fn new(generator: Arc<dyn LayoutGenerator>) -> Self {
        Self::with_timeout(generator, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(generator: Arc<dyn LayoutGenerator>, timeout: Duration) -> Self {
        Self {
            generator,
            inbox: Arc::new(Mutex::new(Vec::new())),
            pending: None,
            next_seq: 0,
            timeout,
        }
    }

    /// Starts a generation request, replacing any request still in flight.
    /// Returns the request's sequence number.
    pub fn submit(&mut self, payload: String, source: SourceKind) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        if self.pending.is_some() {
            log::debug!("replacing pending generation request with seq {seq}");
        }
        self.pending = Some(Pending::new(seq));

        let generator = Arc::clone(&self.generator);
        let inbox = Arc::clone(&self.inbox);
        let run = move || {
            let result = generator.generate(&payload, source);
            inbox.lock().push(Completion { seq, result });
        };

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(run);

        // No background threads in the browser; the stub skips its delay
        // there, so running inline keeps the frame responsive enough.
        #[cfg(target_arch = "wasm32")]
        run();

        seq
    }

    /// Drains the inbox. Returns the outcome of the latest request if it
    /// completed or timed out; anything stale is dropped.
    pub fn poll(&mut self) -> Option<Result<Layout, GenerationError>> {
        let completions: Vec<Completion> = std::mem::take(&mut *self.inbox.lock());
        let mut latest = None;
        for completion in completions {
            match &self.pending {
                Some(pending) if pending.seq == completion.seq => latest = Some(completion.result),
                _ => log::debug!("discarding stale generation result (seq {})", completion.seq),
            }
        }
        if let Some(result) = latest {
            self.pending = None;
            return Some(result);
        }

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(pending) = &self.pending {
            if pending.started.elapsed() >= self.timeout {
                log::warn!("generation request {} timed out", pending.seq);
                self.pending = None;
                return Some(Err(GenerationError::Timeout));
            }
        }

        None
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

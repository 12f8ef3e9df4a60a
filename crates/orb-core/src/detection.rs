//! Boundary between the asynchronous face detector and the frame loop.
//!
//! The detector posts into a [`DetectionMailbox`] from its own callback or
//! thread; the frame driver drains it once per frame. Samples are latest-wins,
//! status events are kept in order.

use crate::presence::DetectionSample;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Everything that can go wrong on the detector side. None of it is fatal to
/// rendering; presence just degrades to "no face".
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DetectorError {
    /// A required detector or camera capability is missing.
    #[error("{0} is not defined")]
    Unavailable(String),
    /// The camera could not be started (permission denied, no device, ...).
    #[error("camera start failed: {0}")]
    Acquisition(String),
    /// A single detection attempt failed.
    #[error("detection failed: {0}")]
    Sample(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetectorEvent {
    /// Camera acquisition has begun.
    Starting,
    /// Camera and detector were stopped.
    Stopped,
    Failed(DetectorError),
}

#[derive(Debug, Default)]
struct Inbox {
    latest: Option<DetectionSample>,
    events: VecDeque<DetectorEvent>,
}

/// What the frame driver takes out of the mailbox in one frame.
#[derive(Debug, Default, PartialEq)]
pub struct Drained {
    pub events: Vec<DetectorEvent>,
    pub sample: Option<DetectionSample>,
}

/// Shared, clonable inbox written by the detector and read by the frame loop.
#[derive(Clone, Debug, Default)]
pub struct DetectionMailbox {
    inner: Arc<Mutex<Inbox>>,
}

impl DetectionMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inbox> {
        // A panicking producer must not stop the render loop
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace any pending sample with `sample`.
    pub fn post_sample(&self, sample: DetectionSample) {
        self.lock().latest = Some(sample);
    }

    /// Queue a status event. `Starting` and `Stopped` discard any pending
    /// sample, which belongs to the previous camera run.
    pub fn post_event(&self, event: DetectorEvent) {
        let mut inbox = self.lock();
        if matches!(event, DetectorEvent::Starting | DetectorEvent::Stopped) {
            inbox.latest = None;
        }
        inbox.events.push_back(event);
    }

    /// Take all queued status events and at most one (the latest) sample.
    pub fn drain(&self) -> Drained {
        let mut inbox = self.lock();
        Drained {
            events: inbox.events.drain(..).collect(),
            sample: inbox.latest.take(),
        }
    }
}

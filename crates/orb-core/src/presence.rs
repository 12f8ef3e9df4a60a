//! Debounced face presence.
//!
//! Raw per-result detection flickers even with a still subject. Presence only
//! switches on after `on_frames` consecutive positives and only switches off
//! after `off_frames` consecutive negatives.

use crate::constants::{OFF_FRAMES, ON_FRAMES};

/// One result from the external face detector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetectionSample {
    pub faces_found: bool,
}

impl DetectionSample {
    pub fn new(faces_found: bool) -> Self {
        Self { faces_found }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceParams {
    pub on_frames: u32,
    pub off_frames: u32,
}

impl Default for DebounceParams {
    fn default() -> Self {
        Self {
            on_frames: ON_FRAMES,
            off_frames: OFF_FRAMES,
        }
    }
}

/// Hysteresis state machine over run-length counters.
///
/// At most one of the two counters is nonzero at any time.
#[derive(Clone, Debug, Default)]
pub struct PresenceDebouncer {
    pub params: DebounceParams,
    present_count: u32,
    absent_count: u32,
    presence: bool,
}

impl PresenceDebouncer {
    pub fn new(params: DebounceParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    /// Feed one detection result and return the stable presence flag.
    pub fn observe(&mut self, faces_found: bool) -> bool {
        if faces_found {
            self.present_count = self.present_count.saturating_add(1);
            self.absent_count = 0;
        } else {
            self.absent_count = self.absent_count.saturating_add(1);
            self.present_count = 0;
        }

        if !self.presence && self.present_count >= self.params.on_frames {
            self.presence = true;
            log::debug!("[presence] on after {} positives", self.present_count);
        } else if self.presence && self.absent_count >= self.params.off_frames {
            self.presence = false;
            log::debug!("[presence] off after {} negatives", self.absent_count);
        }
        self.presence
    }

    #[inline]
    pub fn presence(&self) -> bool {
        self.presence
    }

    #[inline]
    pub fn present_count(&self) -> u32 {
        self.present_count
    }

    #[inline]
    pub fn absent_count(&self) -> u32 {
        self.absent_count
    }

    /// Clear both run-length counters, keeping the current flag.
    pub fn reset_counters(&mut self) {
        self.present_count = 0;
        self.absent_count = 0;
    }

    /// Back to the initial state: no runs, presence off.
    pub fn reset(&mut self) {
        self.reset_counters();
        self.presence = false;
    }

    /// Drop presence immediately, used when no detector can report anymore.
    pub fn force_absent(&mut self) {
        self.reset();
    }
}

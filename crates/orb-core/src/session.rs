//! All mutable per-session state, owned by the frame driver.

use crate::clock::AnimationClock;
use crate::detection::{DetectorError, DetectorEvent, Drained};
use crate::energy::{EnergyParams, PresenceEnergy};
use crate::presence::{DebounceParams, DetectionSample, PresenceDebouncer};

pub const STATUS_INITIALIZING: &str = "Initializing…";
pub const STATUS_STARTING: &str = "Starting camera…";
pub const STATUS_RUNNING: &str = "Running";
pub const STATUS_STOPPED: &str = "Camera stopped.";
pub const STATUS_SAMPLE_ERROR: &str = "Face detector error. Try refreshing.";
pub const STATUS_CAMERA_BLOCKED: &str = "Camera blocked/unavailable. Allow camera + reload.";

/// Tunables for a session. `Default` uses the shared constants.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineConfig {
    pub debounce: DebounceParams,
    pub energy: EnergyParams,
    /// Treat this many consecutive frames without any detector result as
    /// "no face" observations. `None` keeps the last presence indefinitely.
    pub stale_after_frames: Option<u32>,
}

/// Detector health as shown in the diagnostic overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorStatus {
    pub camera_ready: bool,
    pub message: String,
    /// Last error seen; kept until the session is restarted.
    pub error: Option<DetectorError>,
}

impl Default for DetectorStatus {
    fn default() -> Self {
        Self {
            camera_ready: false,
            message: STATUS_INITIALIZING.to_string(),
            error: None,
        }
    }
}

impl DetectorStatus {
    /// Steady state: camera up, no error, nominal message.
    pub fn is_running(&self) -> bool {
        self.camera_ready && self.error.is_none() && self.message == STATUS_RUNNING
    }
}

fn unavailable_message(what: &str) -> String {
    match what {
        "Camera" => "Camera utils not loaded (check index.html scripts).".to_string(),
        other => format!("{other} not loaded (check index.html scripts)."),
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub debouncer: PresenceDebouncer,
    pub energy: PresenceEnergy,
    pub clock: AnimationClock,
    pub detector: DetectorStatus,
    stale_after_frames: Option<u32>,
    frames_since_sample: u32,
    /// Set by `Stopped`; results are dropped until the next `Starting`.
    stopped: bool,
}

impl SessionState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            debouncer: PresenceDebouncer::new(config.debounce),
            energy: PresenceEnergy::new(config.energy),
            stale_after_frames: config.stale_after_frames,
            ..Default::default()
        }
    }

    #[inline]
    pub fn presence(&self) -> bool {
        self.debouncer.presence()
    }

    #[inline]
    pub fn pct(&self) -> f32 {
        self.energy.pct()
    }

    /// Apply one detector result.
    ///
    /// Late results from a stopped detector are ignored.
    pub fn observe(&mut self, sample: DetectionSample) -> bool {
        if self.stopped {
            log::debug!("[detector] dropping result after stop");
            return self.presence();
        }
        self.frames_since_sample = 0;
        self.detector.camera_ready = true;
        self.detector.message = STATUS_RUNNING.to_string();
        self.debouncer.observe(sample.faces_found)
    }

    pub fn apply_event(&mut self, event: DetectorEvent) {
        match event {
            DetectorEvent::Starting => {
                log::info!("[detector] starting camera");
                self.debouncer.reset();
                self.frames_since_sample = 0;
                self.stopped = false;
                self.detector.camera_ready = false;
                self.detector.message = STATUS_STARTING.to_string();
            }
            DetectorEvent::Stopped => {
                log::info!("[detector] stopped");
                self.debouncer.reset_counters();
                self.stopped = true;
                self.detector.camera_ready = false;
                self.detector.message = STATUS_STOPPED.to_string();
            }
            DetectorEvent::Failed(err) => {
                match &err {
                    DetectorError::Unavailable(what) => {
                        log::error!("[detector] unavailable: {err}");
                        self.debouncer.force_absent();
                        self.detector.message = unavailable_message(what);
                    }
                    DetectorError::Acquisition(_) => {
                        log::error!("[detector] {err}");
                        self.debouncer.force_absent();
                        self.detector.message = STATUS_CAMERA_BLOCKED.to_string();
                    }
                    DetectorError::Sample(_) => {
                        log::warn!("[detector] {err}");
                        self.detector.message = STATUS_SAMPLE_ERROR.to_string();
                    }
                }
                self.detector.error = Some(err);
            }
        }
    }

    /// Detector side of a frame: status events first, then the latest sample.
    pub fn apply_drained(&mut self, drained: Drained) {
        for event in drained.events {
            self.apply_event(event);
        }
        match drained.sample {
            Some(sample) => {
                self.observe(sample);
            }
            None => self.note_missing_sample(),
        }
    }

    fn note_missing_sample(&mut self) {
        self.frames_since_sample = self.frames_since_sample.saturating_add(1);
        let Some(limit) = self.stale_after_frames else {
            return;
        };
        if self.detector.camera_ready && self.frames_since_sample >= limit {
            if self.frames_since_sample == limit {
                log::warn!("[detector] no result for {limit} frames; treating as absent");
            }
            self.debouncer.observe(false);
        }
    }
}

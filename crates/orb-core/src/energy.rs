//! Presence energy: a slow-attack, fast-release accumulator over presence.

use crate::constants::{FALL_RATE, MAX_PRESENCE, RISE_RATE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyParams {
    pub max_presence: f32,
    pub rise_rate: f32,
    pub fall_rate: f32,
}

impl Default for EnergyParams {
    fn default() -> Self {
        Self {
            max_presence: MAX_PRESENCE,
            rise_rate: RISE_RATE,
            fall_rate: FALL_RATE,
        }
    }
}

/// One integration step. Result stays within \[0, max_presence].
#[inline]
pub fn integrate(presence: bool, previous: f32, params: &EnergyParams) -> f32 {
    if presence {
        (previous + params.rise_rate).min(params.max_presence)
    } else {
        (previous - params.fall_rate).max(0.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PresenceEnergy {
    pub params: EnergyParams,
    value: f32,
}

impl PresenceEnergy {
    pub fn new(params: EnergyParams) -> Self {
        Self { params, value: 0.0 }
    }

    /// Advance by one render frame and return the new raw value.
    pub fn tick(&mut self, presence: bool) -> f32 {
        self.value = integrate(presence, self.value, &self.params);
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Normalized energy in \[0, 1].
    #[inline]
    pub fn pct(&self) -> f32 {
        if self.params.max_presence <= 0.0 {
            return 0.0;
        }
        (self.value / self.params.max_presence).clamp(0.0, 1.0)
    }
}

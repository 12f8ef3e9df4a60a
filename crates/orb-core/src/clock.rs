use crate::color::wrap_hue;
use crate::constants::*;

/// Global animation time and hue phase. Advances every frame regardless of
/// presence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    pub t: f32,
    pub hue_shift: f32,
}

impl AnimationClock {
    pub fn advance(&mut self, hue_speed: f32) {
        self.hue_shift = wrap_hue(self.hue_shift + hue_speed);
        self.t += TIME_STEP;
    }
}

/// Per-frame visual parameters derived from normalized presence energy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    pub pct: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub hue_speed: f32,
    pub radius: f32,
}

impl VisualParams {
    /// `min_dim` is the smaller canvas dimension.
    pub fn from_pct(pct: f32, min_dim: f32) -> Self {
        let pct = pct.clamp(0.0, 1.0);
        Self {
            pct,
            saturation: SATURATION_BASE + pct * SATURATION_SPAN,
            brightness: BRIGHTNESS_BASE + pct * BRIGHTNESS_SPAN,
            hue_speed: HUE_SPEED_BASE + pct * HUE_SPEED_SPAN,
            radius: min_dim * RADIUS_BASE_FRAC + pct * min_dim * RADIUS_EXTRA_FRAC,
        }
    }
}

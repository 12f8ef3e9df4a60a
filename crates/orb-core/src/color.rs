//! HSB colors in the (360, 100, 100, 100) ranges used throughout the visuals.

use glam::Vec4;

/// Hue/saturation/brightness/alpha color.
///
/// `h` is in degrees \[0, 360), the other channels are percentages \[0, 100].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsba {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl Hsba {
    pub const BLACK: Hsba = Hsba::new(0.0, 0.0, 0.0, 100.0);

    pub const fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self { h, s, b, a }
    }

    /// Convert to linear RGBA with every channel in \[0, 1].
    pub fn to_rgba(self) -> Vec4 {
        let h = wrap_hue(self.h) / 60.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.b / 100.0).clamp(0.0, 1.0);
        let a = (self.a / 100.0).clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Vec4::new(r, g, b, a)
    }

    /// CSS `rgba(...)` string, 8-bit color channels.
    pub fn to_css(self) -> String {
        let c = self.to_rgba();
        format!(
            "rgba({},{},{},{:.4})",
            (c.x * 255.0).round() as u8,
            (c.y * 255.0).round() as u8,
            (c.z * 255.0).round() as u8,
            c.w
        )
    }
}

/// Map any angle in degrees into \[0, 360).
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    let w = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

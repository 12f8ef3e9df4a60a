//! Layered, noise-perturbed orb.
//!
//! The orb is `ORB_LAYERS` concentric closed curves. Inner layers are small
//! and nearly opaque, outer layers large and faint; hue sweeps a full circle
//! from the center outwards and shimmers over time.

use crate::color::{wrap_hue, Hsba};
use crate::constants::*;
use crate::noise::NoiseField;
use crate::surface::Surface;
use glam::Vec2;
use std::f32::consts::TAU;

/// Inputs for one orb frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbParams {
    pub center: Vec2,
    pub base_radius: f32,
    pub hue_base: f32,
    pub time: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub pct: f32,
}

/// One generated curve, consumed by the renderer in the same frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrbLayer {
    pub color: Hsba,
    pub vertices: Vec<Vec2>,
}

/// Number of perimeter vertices: every `k * ANGLE_STEP` below `TAU + ANGLE_STEP`,
/// so the curve wraps past its start and closes without a visible seam.
pub fn perimeter_vertex_count() -> usize {
    ((TAU + ANGLE_STEP) / ANGLE_STEP).ceil() as usize
}

/// Alpha of layer `layer_pct` in \[0, 1] at presence `pct`.
#[inline]
pub fn layer_alpha(layer_pct: f32, pct: f32) -> f32 {
    LAYER_ALPHA_MAX * (1.0 - layer_pct).max(0.0).powf(LAYER_ALPHA_EXPONENT) * pct
}

/// Hue of layer `layer_pct`, wrapped into \[0, 360).
#[inline]
pub fn layer_hue(hue_base: f32, layer_pct: f32, time: f32) -> f32 {
    wrap_hue(hue_base + layer_pct * 360.0 + (time + layer_pct * LAYER_HUE_PHASE).sin() * LAYER_HUE_WOBBLE)
}

/// Map a noise sample in \[0, 1] onto a radius offset in \[-max, max].
#[inline]
pub fn noise_offset(n: f32) -> f32 {
    -NOISE_OFFSET_MAX + n * (2.0 * NOISE_OFFSET_MAX)
}

/// Write the perimeter of one blob of `radius` around `center` into `out`.
pub fn blob_vertices<N: NoiseField + ?Sized>(
    center: Vec2,
    radius: f32,
    time: f32,
    noise: &N,
    out: &mut Vec<Vec2>,
) {
    out.clear();
    for k in 0..perimeter_vertex_count() {
        let a = k as f32 * ANGLE_STEP;
        let (sin_a, cos_a) = a.sin_cos();
        let n = noise.sample(cos_a * NOISE_RADIUS + time, sin_a * NOISE_RADIUS + time);
        let r = radius + noise_offset(n);
        out.push(center + Vec2::new(cos_a, sin_a) * r);
    }
}

/// Generates orb layers into reusable buffers.
#[derive(Clone, Debug)]
pub struct OrbGenerator {
    layers: Vec<OrbLayer>,
}

impl Default for OrbGenerator {
    fn default() -> Self {
        Self::new(ORB_LAYERS)
    }
}

impl OrbGenerator {
    pub fn new(layer_count: usize) -> Self {
        let per_layer = perimeter_vertex_count();
        let layers = (0..layer_count)
            .map(|_| OrbLayer {
                color: Hsba::default(),
                vertices: Vec::with_capacity(per_layer),
            })
            .collect();
        Self { layers }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Compute every layer for `params`, innermost first.
    ///
    /// Pure in its inputs: the same params and noise field always produce the
    /// same vertices and colors.
    pub fn generate<N: NoiseField + ?Sized>(&mut self, params: &OrbParams, noise: &N) -> &[OrbLayer] {
        let count = self.layers.len();
        for (idx, layer) in self.layers.iter_mut().enumerate() {
            let i = idx + 1;
            let layer_pct = i as f32 / count as f32;
            let r = params.base_radius * layer_pct;
            layer.color = Hsba::new(
                layer_hue(params.hue_base, layer_pct, params.time),
                params.saturation,
                params.brightness,
                layer_alpha(layer_pct, params.pct),
            );
            let layer_time = params.time + i as f32 * LAYER_TIME_OFFSET;
            blob_vertices(params.center, r, layer_time, noise, &mut layer.vertices);
        }
        &self.layers
    }

    /// Clear `target` and draw the orb into it.
    pub fn render<S: Surface, N: NoiseField + ?Sized>(&mut self, target: &mut S, params: &OrbParams, noise: &N) {
        target.clear(None);
        for layer in self.generate(params, noise) {
            if layer.color.a <= 0.0 {
                continue;
            }
            target.fill_closed_curve(&layer.vertices, layer.color);
        }
    }
}

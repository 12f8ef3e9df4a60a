//! Drawing boundary implemented by each frontend.

use crate::color::Hsba;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Source-over alpha blending.
    #[default]
    Normal,
    /// Colors are summed, so overlaps brighten.
    Additive,
}

/// Minimal immediate-mode 2-D canvas needed by the orb and particles.
///
/// Implementations are either the visible screen or an off-screen buffer of
/// the same type, which is why compositing takes `&Self`.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole surface, or make it fully transparent with `None`.
    fn clear(&mut self, color: Option<Hsba>);
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Fill a closed curve passing smoothly through `vertices`.
    ///
    /// The first and last vertex only steer the curve, the same as
    /// Catmull-Rom curve vertices; see [`catmull_rom_segments`].
    fn fill_closed_curve(&mut self, vertices: &[Vec2], color: Hsba);
    fn fill_disc(&mut self, center: Vec2, diameter: f32, color: Hsba);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Hsba);
    /// Multi-line text, top-left anchored at `origin`.
    fn draw_text(&mut self, text: &str, origin: Vec2, size_px: f32, color: Hsba);
    /// Draw `src` at the origin using the current blend mode.
    fn draw_surface(&mut self, src: &Self);

    #[inline]
    fn min_dim(&self) -> f32 {
        self.width().min(self.height()) as f32
    }

    #[inline]
    fn center(&self) -> Vec2 {
        Vec2::new(self.width() as f32 * 0.5, self.height() as f32 * 0.5)
    }
}

/// Cubic Bézier segments `[start, ctrl1, ctrl2, end]` for a Catmull-Rom
/// spline through `points` (uniform, zero tension).
///
/// A curve over `n` points yields `n - 3` segments running from `points[1]`
/// to `points[n - 2]`. Fewer than four points yield nothing.
pub fn catmull_rom_segments(points: &[Vec2]) -> impl Iterator<Item = [Vec2; 4]> + '_ {
    points.windows(4).map(|w| {
        let (p0, p1, p2, p3) = (w[0], w[1], w[2], w[3]);
        [p1, p1 + (p2 - p0) / 6.0, p2 - (p3 - p1) / 6.0, p2]
    })
}

/// Point on a cubic Bézier segment at parameter `t` in \[0, 1].
#[inline]
pub fn bezier_point(seg: &[Vec2; 4], t: f32) -> Vec2 {
    let u = 1.0 - t;
    seg[0] * (u * u * u) + seg[1] * (3.0 * u * u * t) + seg[2] * (3.0 * u * t * t) + seg[3] * (t * t * t)
}

/// Polyline approximation of the closed curve through `vertices`, with
/// `steps` samples per segment. Used by rasterizers without native curves.
pub fn flatten_closed_curve(vertices: &[Vec2], steps: usize, out: &mut Vec<Vec2>) {
    out.clear();
    let steps = steps.max(1);
    for seg in catmull_rom_segments(vertices) {
        if out.is_empty() {
            out.push(seg[0]);
        }
        for s in 1..=steps {
            out.push(bezier_point(&seg, s as f32 / steps as f32));
        }
    }
}

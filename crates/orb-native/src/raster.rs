// CPU `Surface`: premultiplied RGBA float pixels with scanline fills.

use glam::{Vec2, Vec4};
use orb_core::{flatten_closed_curve, BlendMode, Hsba, Surface};

/// Bézier flattening resolution for curve fills.
pub const CURVE_STEPS: usize = 4;
/// Sub-samples per axis when covering small discs.
pub const DISC_SUPERSAMPLE: usize = 4;

pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<Vec4>,
    blend: BlendMode,
    scratch: Vec<Vec2>,
    last_text: Option<String>,
}

#[inline]
fn premultiplied(color: Hsba) -> Vec4 {
    let c = color.to_rgba();
    Vec4::new(c.x * c.w, c.y * c.w, c.z * c.w, c.w)
}

#[inline]
fn blend(dst: Vec4, src: Vec4, mode: BlendMode) -> Vec4 {
    match mode {
        BlendMode::Normal => src + dst * (1.0 - src.w),
        BlendMode::Additive => (src + dst).min(Vec4::ONE),
    }
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            width,
            height,
            pixels: vec![Vec4::ZERO; (width * height) as usize],
            blend: BlendMode::Normal,
            scratch: Vec::new(),
            last_text: None,
        }
    }

    /// Premultiplied pixel at `(x, y)`, if inside.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec4> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Straight-alpha RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            let rgb = if p.w > 0.0 { p.truncate() / p.w } else { p.truncate() };
            for c in [rgb.x, rgb.y, rgb.z, p.w] {
                out.push((c.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
        out
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, src: Vec4) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixels[idx] = blend(self.pixels[idx], src, self.blend);
    }

    /// Even-odd scanline fill of a closed polygon, sampling pixel centers.
    fn fill_polygon(&mut self, poly: &[Vec2], src: Vec4) {
        if poly.len() < 3 {
            return;
        }
        let (min_y, max_y) = poly
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let y0 = min_y.floor().max(0.0) as i64;
        let y1 = (max_y.ceil() as i64).min(self.height as i64 - 1);
        let mut xs: Vec<f32> = Vec::with_capacity(16);
        for y in y0..=y1 {
            let sy = y as f32 + 0.5;
            xs.clear();
            for i in 0..poly.len() {
                let a = poly[i];
                let b = poly[(i + 1) % poly.len()];
                if (a.y <= sy && b.y > sy) || (b.y <= sy && a.y > sy) {
                    xs.push(a.x + (sy - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            xs.sort_by(|l, r| l.total_cmp(r));
            for pair in xs.chunks_exact(2) {
                let start = (pair[0] - 0.5).ceil().max(0.0) as i64;
                let end = ((pair[1] - 0.5).floor() as i64).min(self.width as i64 - 1);
                for x in start..=end {
                    self.put(x, y, src);
                }
            }
        }
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Option<Hsba>) {
        let fill = color.map(premultiplied).unwrap_or(Vec4::ZERO);
        self.pixels.fill(fill);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn fill_closed_curve(&mut self, vertices: &[Vec2], color: Hsba) {
        let mut poly = std::mem::take(&mut self.scratch);
        flatten_closed_curve(vertices, CURVE_STEPS, &mut poly);
        self.fill_polygon(&poly, premultiplied(color));
        self.scratch = poly;
    }

    fn fill_disc(&mut self, center: Vec2, diameter: f32, color: Hsba) {
        let src = premultiplied(color);
        let r = diameter * 0.5;
        let n = DISC_SUPERSAMPLE;
        let x0 = (center.x - r).floor() as i64;
        let x1 = (center.x + r).ceil() as i64;
        let y0 = (center.y - r).floor() as i64;
        let y1 = (center.y + r).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let mut hits = 0;
                for sy in 0..n {
                    for sx in 0..n {
                        let p = Vec2::new(
                            x as f32 + (sx as f32 + 0.5) / n as f32,
                            y as f32 + (sy as f32 + 0.5) / n as f32,
                        );
                        if p.distance_squared(center) <= r * r {
                            hits += 1;
                        }
                    }
                }
                if hits > 0 {
                    let coverage = hits as f32 / (n * n) as f32;
                    self.put(x, y, src * coverage);
                }
            }
        }
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Hsba) {
        let src = premultiplied(color);
        let x0 = (origin.x - 0.5).ceil() as i64;
        let y0 = (origin.y - 0.5).ceil() as i64;
        let x1 = (origin.x + size.x - 0.5).floor() as i64;
        let y1 = (origin.y + size.y - 0.5).floor() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put(x, y, src);
            }
        }
    }

    fn draw_text(&mut self, text: &str, _origin: Vec2, _size_px: f32, _color: Hsba) {
        // No font rasterizer here; report overlay text changes in the log.
        if self.last_text.as_deref() != Some(text) {
            log::info!("[overlay] {}", text.replace('\n', " | "));
            self.last_text = Some(text.to_string());
        }
    }

    fn draw_surface(&mut self, src: &Self) {
        let w = self.width.min(src.width);
        let h = self.height.min(src.height);
        for y in 0..h {
            for x in 0..w {
                let s = src.pixels[(y * src.width + x) as usize];
                if s.w <= 0.0 {
                    continue;
                }
                let idx = (y * self.width + x) as usize;
                self.pixels[idx] = blend(self.pixels[idx], s, self.blend);
            }
        }
    }
}

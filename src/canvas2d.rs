//! `Surface` over a Canvas 2D context.

use crate::constants::{FONT_FAMILY, TEXT_LEADING};
use glam::Vec2;
use orb_core::{catmull_rom_segments, BlendMode, Hsba, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    blend: BlendMode,
}

fn composite_op(mode: BlendMode) -> &'static str {
    match mode {
        BlendMode::Normal => "source-over",
        BlendMode::Additive => "lighter",
    }
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            blend: BlendMode::Normal,
        })
    }

    /// Detached canvas of the given size, used as the orb buffer.
    pub fn offscreen(document: &web::Document, width: u32, height: u32) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas error: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("not a canvas: {:?}", e))?;
        canvas.set_width(width.max(1));
        canvas.set_height(height.max(1));
        Self::new(canvas)
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn set_fill(&self, color: Hsba) {
        self.ctx.set_fill_style_str(&color.to_css());
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn clear(&mut self, color: Option<Hsba>) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        match color {
            None => self.ctx.clear_rect(0.0, 0.0, w, h),
            Some(c) => {
                _ = self.ctx.set_global_composite_operation("source-over");
                self.set_fill(c);
                self.ctx.fill_rect(0.0, 0.0, w, h);
                _ = self.ctx.set_global_composite_operation(composite_op(self.blend));
            }
        }
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
        _ = self.ctx.set_global_composite_operation(composite_op(mode));
    }

    fn fill_closed_curve(&mut self, vertices: &[Vec2], color: Hsba) {
        let mut segments = catmull_rom_segments(vertices).peekable();
        let Some(first) = segments.peek() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first[0].x as f64, first[0].y as f64);
        for [_, c1, c2, end] in segments {
            self.ctx.bezier_curve_to(
                c1.x as f64,
                c1.y as f64,
                c2.x as f64,
                c2.y as f64,
                end.x as f64,
                end.y as f64,
            );
        }
        self.ctx.close_path();
        self.set_fill(color);
        self.ctx.fill();
    }

    fn fill_disc(&mut self, center: Vec2, diameter: f32, color: Hsba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, (diameter * 0.5) as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.set_fill(color);
        self.ctx.fill();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Hsba) {
        self.set_fill(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn draw_text(&mut self, text: &str, origin: Vec2, size_px: f32, color: Hsba) {
        let size = size_px as f64;
        self.ctx.set_font(&format!("{size}px {FONT_FAMILY}"));
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("top");
        self.set_fill(color);
        for (i, line) in text.lines().enumerate() {
            let y = origin.y as f64 + i as f64 * size * TEXT_LEADING;
            _ = self.ctx.fill_text(line, origin.x as f64, y);
        }
    }

    fn draw_surface(&mut self, src: &Self) {
        _ = self
            .ctx
            .draw_image_with_html_canvas_element(&src.canvas, 0.0, 0.0);
    }
}

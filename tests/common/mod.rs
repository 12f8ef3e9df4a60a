// Shared test doubles for host-side tests.

#![allow(dead_code)]
use glam::Vec2;
use orb_core::{BlendMode, Hsba, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Option<Hsba>),
    Blend(BlendMode),
    Curve { vertices: usize, color: Hsba },
    Disc { center: Vec2, diameter: f32, color: Hsba, blend: BlendMode },
    Rect { origin: Vec2, size: Vec2, color: Hsba },
    Text(String),
    Composite,
}

/// Surface that records every call instead of drawing.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub blend: BlendMode,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            blend: BlendMode::Normal,
            calls: Vec::new(),
        }
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn clear(&mut self, color: Option<Hsba>) {
        self.calls.push(DrawCall::Clear(color));
    }
    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
        self.calls.push(DrawCall::Blend(mode));
    }
    fn fill_closed_curve(&mut self, vertices: &[Vec2], color: Hsba) {
        self.calls.push(DrawCall::Curve {
            vertices: vertices.len(),
            color,
        });
    }
    fn fill_disc(&mut self, center: Vec2, diameter: f32, color: Hsba) {
        self.calls.push(DrawCall::Disc {
            center,
            diameter,
            color,
            blend: self.blend,
        });
    }
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Hsba) {
        self.calls.push(DrawCall::Rect { origin, size, color });
    }
    fn draw_text(&mut self, text: &str, _origin: Vec2, _size_px: f32, _color: Hsba) {
        self.calls.push(DrawCall::Text(text.to_string()));
    }
    fn draw_surface(&mut self, _src: &Self) {
        self.calls.push(DrawCall::Composite);
    }
}

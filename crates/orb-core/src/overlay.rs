//! Diagnostic status overlay. Display-only, carries no state.

use crate::color::Hsba;
use crate::constants::*;
use crate::session::DetectorStatus;
use crate::surface::Surface;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

pub type OverlayLines = SmallVec<[String; 3]>;

/// The overlay is hidden only in the steady running state.
#[inline]
pub fn overlay_visible(status: &DetectorStatus) -> bool {
    !status.is_running()
}

/// `presence`, `status` and, when present, a truncated `error` line.
pub fn overlay_lines(presence: bool, status: &DetectorStatus) -> OverlayLines {
    let mut lines: OverlayLines = smallvec![
        format!("presence: {presence}"),
        format!("status: {}", status.message),
    ];
    if let Some(err) = &status.error {
        let line = format!("error: {err}");
        lines.push(line.chars().take(OVERLAY_ERROR_MAX_CHARS).collect());
    }
    lines
}

pub fn draw_overlay<S: Surface>(target: &mut S, lines: &[String]) {
    target.fill_rect(
        Vec2::ZERO,
        Vec2::new(target.width() as f32, OVERLAY_BAND_HEIGHT),
        Hsba::new(0.0, 0.0, 0.0, OVERLAY_BAND_ALPHA),
    );
    target.draw_text(
        &lines.join("\n"),
        Vec2::from(OVERLAY_TEXT_ORIGIN),
        OVERLAY_TEXT_SIZE,
        Hsba::new(0.0, 0.0, 100.0, OVERLAY_TEXT_ALPHA),
    );
}

// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use orb_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn presence_hysteresis_is_asymmetric() {
    assert!(ON_FRAMES > 0);
    assert!(OFF_FRAMES > ON_FRAMES);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn energy_falls_faster_than_it_rises() {
    assert!(FALL_RATE > RISE_RATE);
    assert!(MAX_PRESENCE > 0.0);
    // a little over a minute of presence at 60 fps to reach full energy
    let seconds = MAX_PRESENCE / RISE_RATE / TARGET_FPS as f32;
    assert!((60.0..90.0).contains(&seconds));
    assert!(MAX_PRESENCE / FALL_RATE / (TARGET_FPS as f32) < 5.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_ranges_stay_in_hsb_scale() {
    assert!(SATURATION_BASE + SATURATION_SPAN <= 100.0);
    assert!(BRIGHTNESS_BASE + BRIGHTNESS_SPAN <= 100.0);
    assert!(PARTICLE_BRIGHTNESS_BASE + PARTICLE_BRIGHTNESS_SPAN <= 100.0);
    assert!(PARTICLE_ALPHA_BASE + PARTICLE_ALPHA_SPAN <= 100.0);
    assert!(LAYER_ALPHA_MAX <= 100.0);
    assert!(RADIUS_BASE_FRAC + RADIUS_EXTRA_FRAC < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_ordered() {
    assert!(PARTICLE_SPEED_MIN < PARTICLE_SPEED_MAX);
    assert!(PARTICLE_SIZE_MIN < PARTICLE_SIZE_MAX);
    assert!(PARTICLE_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_frame_pacing_matches_target_fps() {
    assert!((FRAME_INTERVAL_MS - 1000.0 / 60.0).abs() < 1e-9);
    assert!(FRAME_EARLY_TOLERANCE > 0.0 && FRAME_EARLY_TOLERANCE < 1.0);
    assert!(FRAME_STALL_MS > FRAME_INTERVAL_MS);
    assert!(MIN_DETECTION_CONFIDENCE > 0.0 && MIN_DETECTION_CONFIDENCE < 1.0);
    assert!(CAMERA_WIDTH > 0 && CAMERA_HEIGHT > 0);
    assert!(!CANVAS_ID.is_empty());
}

// Shared tuning constants used by both web and native frontends.

// Presence debouncing (consecutive detector results)
pub const ON_FRAMES: u32 = 6; // positives needed to switch presence on
pub const OFF_FRAMES: u32 = 12; // negatives needed to switch presence off

// Presence energy (per render frame)
pub const MAX_PRESENCE: f32 = 350.0;
pub const RISE_RATE: f32 = 0.08;
pub const FALL_RATE: f32 = 1.5;

// Frame timing
pub const TARGET_FPS: u32 = 60;
pub const TIME_STEP: f32 = 0.01; // animation clock advance per frame

// Global visual mapping, value = base + span * pct
pub const SATURATION_BASE: f32 = 80.0;
pub const SATURATION_SPAN: f32 = 20.0;
pub const BRIGHTNESS_BASE: f32 = 70.0;
pub const BRIGHTNESS_SPAN: f32 = 30.0;
pub const HUE_SPEED_BASE: f32 = 0.4;
pub const HUE_SPEED_SPAN: f32 = 1.5;
pub const RADIUS_BASE_FRAC: f32 = 0.25; // of min(width, height)
pub const RADIUS_EXTRA_FRAC: f32 = 0.35;

// Orb layering
pub const ORB_LAYERS: usize = 80;
pub const LAYER_ALPHA_MAX: f32 = 80.0;
pub const LAYER_ALPHA_EXPONENT: f32 = 1.2;
pub const LAYER_HUE_WOBBLE: f32 = 60.0; // degrees of sin() hue oscillation
pub const LAYER_HUE_PHASE: f32 = 2.0;
pub const LAYER_TIME_OFFSET: f32 = 0.015; // per-layer shift into the noise field

// Orb perimeter
pub const ANGLE_STEP: f32 = 0.1; // radians between curve vertices
pub const NOISE_RADIUS: f32 = 0.8; // circle radius walked through the noise field
pub const NOISE_OFFSET_MAX: f32 = 15.0; // canvas units, offset in [-max, max]

// Particles
pub const PARTICLE_COUNT: usize = 150;
pub const PARTICLE_SPEED_MIN: f32 = 0.2;
pub const PARTICLE_SPEED_MAX: f32 = 0.6;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 2.0;
pub const PARTICLE_SATURATION: f32 = 30.0;
pub const PARTICLE_ALPHA_BASE: f32 = 5.0;
pub const PARTICLE_ALPHA_SPAN: f32 = 30.0;
pub const PARTICLE_BRIGHTNESS_BASE: f32 = 80.0;
pub const PARTICLE_BRIGHTNESS_SPAN: f32 = 20.0;

// Diagnostic overlay
pub const OVERLAY_BAND_HEIGHT: f32 = 90.0;
pub const OVERLAY_BAND_ALPHA: f32 = 65.0;
pub const OVERLAY_TEXT_SIZE: f32 = 14.0;
pub const OVERLAY_TEXT_ALPHA: f32 = 90.0;
pub const OVERLAY_TEXT_ORIGIN: [f32; 2] = [12.0, 10.0];
pub const OVERLAY_ERROR_MAX_CHARS: usize = 120;

// Browser frontend constants.

// DOM
pub const CANVAS_ID: &str = "orb-canvas";
pub const FONT_FAMILY: &str = "sans-serif";
pub const TEXT_LEADING: f64 = 1.25; // line height as a multiple of text size

// Frame pacing (requestAnimationFrame can run faster than the target)
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / orb_core::TARGET_FPS as f64;
pub const FRAME_EARLY_TOLERANCE: f64 = 0.9; // accept frames arriving slightly early
pub const FRAME_STALL_MS: f64 = 1000.0; // gaps longer than this are logged

// MediaPipe face detection
pub const FACE_DETECTION_GLOBAL: &str = "FaceDetection";
pub const CAMERA_GLOBAL: &str = "Camera";
pub const FACE_DETECTION_CDN: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/face_detection@0.4";
pub const FACE_MODEL: &str = "short";
pub const MIN_DETECTION_CONFIDENCE: f64 = 0.5;
pub const CAMERA_WIDTH: u32 = 640;
pub const CAMERA_HEIGHT: u32 = 480;

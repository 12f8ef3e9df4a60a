pub mod keyboard;
pub mod keys;
pub mod window;

pub use keyboard::wire_global_keydown;
pub use window::{wire_first_interaction_fullscreen, wire_pagehide, wire_resize};

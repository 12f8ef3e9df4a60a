//! Platform-free core of presence-orb.
//!
//! A noisy per-result face signal is debounced into a stable presence flag,
//! integrated into a slow-rise/fast-fall energy, and that single scalar drives
//! a layered noise orb and an ambient particle field. Frontends supply a
//! [`Surface`] to draw on and post detector output into a
//! [`DetectionMailbox`].

pub mod clock;
pub mod color;
pub mod constants;
pub mod detection;
pub mod energy;
pub mod frame;
pub mod noise;
pub mod orb;
pub mod overlay;
pub mod particles;
pub mod presence;
pub mod session;
pub mod surface;

pub use clock::*;
pub use color::*;
pub use constants::*;
pub use detection::*;
pub use energy::*;
pub use frame::*;
pub use noise::*;
pub use orb::*;
pub use overlay::*;
pub use particles::*;
pub use presence::*;
pub use session::*;
pub use surface::*;

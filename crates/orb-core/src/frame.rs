//! Per-frame orchestration shared by every frontend.

use crate::clock::VisualParams;
use crate::color::Hsba;
use crate::detection::DetectionMailbox;
use crate::noise::{NoiseField, PerlinNoise};
use crate::orb::{OrbGenerator, OrbParams};
use crate::overlay;
use crate::particles::ParticleField;
use crate::session::{EngineConfig, SessionState};
use crate::surface::{BlendMode, Surface};

/// What a frame ended up showing, for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSummary {
    pub presence: bool,
    pub pct: f32,
    pub radius: f32,
    pub overlay_visible: bool,
}

pub struct FrameDriver<S: Surface, N: NoiseField = PerlinNoise> {
    pub session: SessionState,
    orb: OrbGenerator,
    particles: ParticleField,
    noise: N,
    buffer: S,
    mailbox: DetectionMailbox,
    particle_seed: u64,
    resizes: u64,
}

impl<S: Surface> FrameDriver<S, PerlinNoise> {
    /// Driver with sketch-style noise and particles derived from `seed`.
    pub fn with_seed(config: EngineConfig, buffer: S, mailbox: DetectionMailbox, seed: u64) -> Self {
        Self::new(config, buffer, PerlinNoise::new(seed), mailbox, seed)
    }
}

impl<S: Surface, N: NoiseField> FrameDriver<S, N> {
    /// `buffer` is the off-screen orb target and must match the screen size.
    pub fn new(config: EngineConfig, buffer: S, noise: N, mailbox: DetectionMailbox, seed: u64) -> Self {
        let particle_seed = seed ^ 0x9E37_79B9_7F4A_7C15;
        let particles = ParticleField::new(buffer.width(), buffer.height(), particle_seed);
        Self {
            session: SessionState::new(config),
            orb: OrbGenerator::default(),
            particles,
            noise,
            buffer,
            mailbox,
            particle_seed,
            resizes: 0,
        }
    }

    pub fn mailbox(&self) -> &DetectionMailbox {
        &self.mailbox
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn buffer(&self) -> &S {
        &self.buffer
    }

    /// Swap in an off-screen buffer of the new canvas size and re-roll the
    /// particle pool. Presence and energy are left alone.
    pub fn resize(&mut self, buffer: S) {
        let (w, h) = (buffer.width(), buffer.height());
        log::info!("[frame] resize to {w}x{h}");
        self.buffer = buffer;
        self.resizes += 1;
        // fresh random state for the new pool, still reproducible per seed
        self.particles = ParticleField::new(w, h, self.particle_seed.wrapping_add(self.resizes));
    }

    /// Run one display frame onto `screen`.
    pub fn frame(&mut self, screen: &mut S) -> FrameSummary {
        self.session.apply_drained(self.mailbox.drain());

        let presence = self.session.presence();
        self.session.energy.tick(presence);
        let pct = self.session.pct();

        let vis = VisualParams::from_pct(pct, self.buffer.min_dim());
        self.session.clock.advance(vis.hue_speed);

        let params = OrbParams {
            center: self.buffer.center(),
            base_radius: vis.radius,
            hue_base: self.session.clock.hue_shift,
            time: self.session.clock.t,
            saturation: vis.saturation,
            brightness: vis.brightness,
            pct,
        };
        self.orb.render(&mut self.buffer, &params, &self.noise);

        screen.set_blend_mode(BlendMode::Normal);
        screen.clear(Some(Hsba::BLACK));
        screen.draw_surface(&self.buffer);

        self.particles.update();
        self.particles.display(pct, screen);

        let overlay_visible = overlay::overlay_visible(&self.session.detector);
        if overlay_visible {
            let lines = overlay::overlay_lines(presence, &self.session.detector);
            overlay::draw_overlay(screen, &lines);
        }

        log::trace!("[frame] presence={presence} pct={pct:.3} r={:.1}", vis.radius);
        FrameSummary {
            presence,
            pct,
            radius: vis.radius,
            overlay_visible,
        }
    }
}

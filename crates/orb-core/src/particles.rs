//! Ambient particle field: a fixed pool of drifting points.
//!
//! Particles are plain values in a pool whose length never changes. A
//! particle leaving the canvas is re-rolled in place rather than removed.

use crate::color::Hsba;
use crate::constants::*;
use crate::surface::{BlendMode, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub speed: f32,
    pub size: f32,
    pub hue: f32,
}

/// Canvas rectangle `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Give `p` a fresh random position, heading, speed, size and hue.
pub fn reset_particle<R: Rng + ?Sized>(p: &mut Particle, bounds: Bounds, rng: &mut R) {
    p.x = uniform(rng, 0.0, bounds.width);
    p.y = uniform(rng, 0.0, bounds.height);
    p.angle = uniform(rng, 0.0, TAU);
    p.speed = uniform(rng, PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX);
    p.size = uniform(rng, PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX);
    p.hue = uniform(rng, 0.0, 360.0);
}

/// Move `p` one step along its heading. Returns true if it left the canvas
/// and was reset.
pub fn update_particle<R: Rng + ?Sized>(p: &mut Particle, bounds: Bounds, rng: &mut R) -> bool {
    let (sin_a, cos_a) = p.angle.sin_cos();
    p.x += cos_a * p.speed;
    p.y += sin_a * p.speed;
    if !bounds.contains(p.x, p.y) {
        reset_particle(p, bounds, rng);
        return true;
    }
    false
}

/// Color of a particle with `hue` at presence `pct`.
#[inline]
pub fn particle_color(hue: f32, pct: f32) -> Hsba {
    Hsba::new(
        hue,
        PARTICLE_SATURATION,
        PARTICLE_BRIGHTNESS_BASE + pct * PARTICLE_BRIGHTNESS_SPAN,
        PARTICLE_ALPHA_BASE + pct * PARTICLE_ALPHA_SPAN,
    )
}

pub fn display_particle<S: Surface>(p: &Particle, pct: f32, target: &mut S) {
    target.fill_disc(Vec2::new(p.x, p.y), p.size, particle_color(p.hue, pct));
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        Self::with_count(PARTICLE_COUNT, width, height, seed)
    }

    pub fn with_count(count: usize, width: u32, height: u32, seed: u64) -> Self {
        let mut field = Self {
            particles: vec![Particle::default(); count],
            bounds: Bounds::new(width as f32, height as f32),
            rng: StdRng::seed_from_u64(seed),
        };
        field.reset_all();
        field
    }

    fn reset_all(&mut self) {
        for p in self.particles.iter_mut() {
            reset_particle(p, self.bounds, &mut self.rng);
        }
    }

    /// Re-roll the whole pool for a new canvas size. Pool length is kept.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.bounds = Bounds::new(width as f32, height as f32);
        self.reset_all();
    }

    /// Step every particle; returns how many were reset this frame.
    pub fn update(&mut self) -> usize {
        let bounds = self.bounds;
        let mut resets = 0;
        for p in self.particles.iter_mut() {
            if update_particle(p, bounds, &mut self.rng) {
                resets += 1;
            }
        }
        resets
    }

    /// Draw all particles with additive blending, then restore normal blending.
    pub fn display<S: Surface>(&self, pct: f32, target: &mut S) {
        target.set_blend_mode(BlendMode::Additive);
        for p in &self.particles {
            display_particle(p, pct, target);
        }
        target.set_blend_mode(BlendMode::Normal);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

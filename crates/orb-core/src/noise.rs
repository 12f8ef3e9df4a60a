//! Coherent 2-D noise used to perturb orb radii.

use rand::prelude::*;
use std::f32::consts::PI;

/// A continuous scalar field sampled in \[0, 1].
///
/// Implemented for plain closures so callers can inject a deterministic fake.
pub trait NoiseField {
    fn sample(&self, x: f32, y: f32) -> f32;
}

impl<F> NoiseField for F
where
    F: Fn(f32, f32) -> f32,
{
    #[inline]
    fn sample(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}

const LATTICE_MASK: u32 = 4095;
const Y_WRAP_BITS: u32 = 4;
const Y_WRAP: u32 = 1 << Y_WRAP_BITS;

/// Octave-summed lattice noise with cosine interpolation.
///
/// The lattice is filled once from the seed, so two fields built from the
/// same seed return identical samples everywhere.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    lattice: Vec<f32>,
    octaves: u32,
    falloff: f32,
}

impl PerlinNoise {
    pub const DEFAULT_OCTAVES: u32 = 4;
    pub const DEFAULT_FALLOFF: f32 = 0.5;

    pub fn new(seed: u64) -> Self {
        Self::with_detail(seed, Self::DEFAULT_OCTAVES, Self::DEFAULT_FALLOFF)
    }

    pub fn with_detail(seed: u64, octaves: u32, falloff: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let lattice = (0..=LATTICE_MASK).map(|_| rng.gen::<f32>()).collect();
        Self {
            lattice,
            octaves: octaves.max(1),
            falloff: falloff.clamp(0.0, 1.0),
        }
    }

    #[inline]
    fn at(&self, offset: u32) -> f32 {
        self.lattice[(offset & LATTICE_MASK) as usize]
    }
}

#[inline]
fn scaled_cosine(i: f32) -> f32 {
    0.5 * (1.0 - (i * PI).cos())
}

impl NoiseField for PerlinNoise {
    fn sample(&self, x: f32, y: f32) -> f32 {
        let (x, y) = (x.abs(), y.abs());
        let mut xi = x.floor() as u32;
        let mut yi = y.floor() as u32;
        let mut xf = x - x.floor();
        let mut yf = y - y.floor();

        let mut r = 0.0;
        let mut amp = 0.5;
        for _ in 0..self.octaves {
            let of = xi.wrapping_add(yi.wrapping_shl(Y_WRAP_BITS));
            let rxf = scaled_cosine(xf);
            let ryf = scaled_cosine(yf);

            let mut n1 = self.at(of);
            n1 += rxf * (self.at(of.wrapping_add(1)) - n1);
            let mut n2 = self.at(of.wrapping_add(Y_WRAP));
            n2 += rxf * (self.at(of.wrapping_add(Y_WRAP + 1)) - n2);
            n1 += ryf * (n2 - n1);

            r += n1 * amp;
            amp *= self.falloff;

            xi = xi.wrapping_shl(1);
            xf *= 2.0;
            yi = yi.wrapping_shl(1);
            yf *= 2.0;
            if xf >= 1.0 {
                xi = xi.wrapping_add(1);
                xf -= 1.0;
            }
            if yf >= 1.0 {
                yi = yi.wrapping_add(1);
                yf -= 1.0;
            }
        }
        r.clamp(0.0, 1.0)
    }
}

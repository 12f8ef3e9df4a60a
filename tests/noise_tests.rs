// Host-side tests for the coherent noise field.

use orb_core::{NoiseField, PerlinNoise};

fn grid() -> impl Iterator<Item = (f32, f32)> {
    (0..40).flat_map(|i| (0..40).map(move |j| (i as f32 * 0.173 - 2.0, j as f32 * 0.219 + 100.0)))
}

#[test]
fn samples_stay_in_unit_range() {
    let n = PerlinNoise::new(42);
    for (x, y) in grid() {
        let v = n.sample(x, y);
        assert!((0.0..=1.0).contains(&v), "noise({x}, {y}) = {v}");
    }
}

#[test]
fn same_seed_same_field() {
    let a = PerlinNoise::new(9);
    let b = PerlinNoise::new(9);
    for (x, y) in grid() {
        assert_eq!(a.sample(x, y), b.sample(x, y));
    }
}

#[test]
fn different_seeds_differ() {
    let a = PerlinNoise::new(1);
    let b = PerlinNoise::new(2);
    assert!(grid().any(|(x, y)| a.sample(x, y) != b.sample(x, y)));
}

#[test]
fn field_is_continuous() {
    let n = PerlinNoise::new(5);
    for (x, y) in grid() {
        let d = (n.sample(x + 1e-3, y) - n.sample(x, y)).abs();
        assert!(d < 0.02, "jump {d} at ({x}, {y})");
    }
}

#[test]
fn field_varies() {
    let n = PerlinNoise::new(5);
    let values: Vec<f32> = grid().map(|(x, y)| n.sample(x, y)).collect();
    let min = values.iter().cloned().fold(f32::MAX, f32::min);
    let max = values.iter().cloned().fold(f32::MIN, f32::max);
    assert!(max - min > 0.2, "range {min}..{max}");
}

#[test]
fn negative_coordinates_mirror() {
    let n = PerlinNoise::new(5);
    assert_eq!(n.sample(-1.25, -3.5), n.sample(1.25, 3.5));
}

#[test]
fn closures_are_noise_fields() {
    let fake = |x: f32, y: f32| (x + y).fract().abs();
    assert_eq!(fake.sample(0.25, 0.5), 0.75);
}

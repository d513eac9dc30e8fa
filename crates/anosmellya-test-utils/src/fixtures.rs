//! Reusable smell field fixtures.
//!
//! - [`field_with`] — a field from explicit row-major values.
//! - [`spike`] — zero everywhere except one tile.
//! - [`ramp`] — values growing linearly along one axis.
//! - [`noise_field`] — seeded uniform noise, identical for identical seeds.

use anosmellya_grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a field from row-major `values`. Panics if the length is not
/// `width * height`.
pub fn field_with(width: u32, height: u32, values: &[f32]) -> Grid<f32> {
    let mut g = Grid::filled(width, height, 0.0f32).unwrap();
    assert_eq!(
        values.len(),
        g.len(),
        "field_with: {} values for a {width}x{height} field",
        values.len()
    );
    g.as_mut_slice().copy_from_slice(values);
    g
}

/// A zero field with `amount` at `(x, y)`.
pub fn spike(width: u32, height: u32, x: u32, y: u32, amount: f32) -> Grid<f32> {
    let mut g = Grid::filled(width, height, 0.0f32).unwrap();
    *g.at_mut(x, y) = amount;
    g
}

/// Axis selector for [`ramp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Values grow with `x`.
    Horizontal,
    /// Values grow with `y`.
    Vertical,
}

/// A field whose value at each tile is `step` times its coordinate along `axis`.
pub fn ramp(width: u32, height: u32, axis: Axis, step: f32) -> Grid<f32> {
    let mut g = Grid::filled(width, height, 0.0f32).unwrap();
    for y in 0..height {
        for x in 0..width {
            let along = match axis {
                Axis::Horizontal => x,
                Axis::Vertical => y,
            };
            *g.at_mut(x, y) = along as f32 * step;
        }
    }
    g
}

/// Uniform noise in `[0, max)` from a ChaCha8 stream seeded with `seed`.
pub fn noise_field(width: u32, height: u32, max: f32, seed: u64) -> Grid<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut g = Grid::filled(width, height, 0.0f32).unwrap();
    for v in g.as_mut_slice() {
        *v = rng.random_range(0.0..max);
    }
    g
}

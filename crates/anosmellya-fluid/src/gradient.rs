//! Finite-difference gradient of a smell field at one tile.

use anosmellya_core::Vec2;
use anosmellya_grid::Grid;

/// Gradient of `grid` at `(x, y)` as `(right - left, below - above)`.
///
/// Uses the four immediate toroidal neighbours. The difference is not
/// halved: only its direction and relative size matter to the sensing
/// model, which normalizes it.
pub fn smell_gradient(grid: &Grid<f32>, x: u32, y: u32) -> Vec2 {
    let right = *grid.at_small_translated(x, y, 1, 0);
    let left = *grid.at_small_translated(x, y, -1, 0);
    let below = *grid.at_small_translated(x, y, 0, 1);
    let above = *grid.at_small_translated(x, y, 0, -1);
    Vec2::new(right - left, below - above)
}

//! Forward-sweep dispersal and exponential evaporation.
//!
//! [`disperse`] visits tiles once, left to right and top to bottom. At each
//! tile it exchanges mass with the tile to the right and the tile below:
//!
//! ```text
//! flow_right = (right - here) * portion
//! flow_below = (below - here) * portion
//! here  += flow_right + flow_below
//! right -= flow_right
//! below -= flow_below
//! ```
//!
//! Later tiles see neighbours already updated earlier in the same sweep, so
//! the scheme is not symmetric in time. Long-run field dynamics depend on
//! this exact visiting order; keep it.

use anosmellya_grid::Grid;

/// Dispersal and evaporation portions for one smell field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FluidRates {
    /// Fraction of each neighbour difference that flows per tick.
    pub dispersal: f32,
    /// Fraction of each tile's value lost per tick.
    pub evap: f32,
}

impl FluidRates {
    /// Create rates from a dispersal and an evaporation portion.
    pub const fn new(dispersal: f32, evap: f32) -> Self {
        Self { dispersal, evap }
    }
}

/// One tick of a field: [`disperse`] then [`evaporate`].
pub fn update(grid: &mut Grid<f32>, rates: FluidRates) {
    disperse(grid, rates.dispersal);
    evaporate(grid, rates.evap);
}

/// Spread mass toward lower neighbours in a single forward sweep.
///
/// Each flow is added to one tile and subtracted from exactly one other,
/// so the field total is conserved up to rounding.
pub fn disperse(grid: &mut Grid<f32>, portion: f32) {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let tiles = grid.as_mut_slice();
    for y in 0..height {
        let row = y * width;
        let row_below = if y + 1 == height { 0 } else { row + width };
        for x in 0..width {
            let here = row + x;
            let right = if x + 1 == width { row } else { here + 1 };
            let below = row_below + x;
            let flow_right = (tiles[right] - tiles[here]) * portion;
            let flow_below = (tiles[below] - tiles[here]) * portion;
            tiles[here] += flow_right;
            tiles[right] -= flow_right;
            tiles[here] += flow_below;
            tiles[below] -= flow_below;
        }
    }
}

/// Scale every tile by `1 - portion`.
pub fn evaporate(grid: &mut Grid<f32>, portion: f32) {
    let keep = 1.0 - portion;
    for v in grid.as_mut_slice() {
        *v *= keep;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anosmellya_test_utils::{field_with, spike};

    #[test]
    fn uniform_field_stays_uniform() {
        let mut g = Grid::filled(6, 5, 10.0f32).unwrap();
        disperse(&mut g, 0.4);
        for &v in g.as_slice() {
            assert!((v - 10.0).abs() < 1e-6, "uniform field changed: {v}");
        }
    }

    #[test]
    fn spike_spreads_right_and_down() {
        let mut g = spike(5, 5, 2, 2, 100.0);
        disperse(&mut g, 0.1);
        assert!(*g.at(2, 2) < 100.0, "source should drain");
        assert!(*g.at(3, 2) > 0.0, "right neighbour should gain");
        assert!(*g.at(2, 3) > 0.0, "lower neighbour should gain");
    }

    #[test]
    fn sweep_order_is_forward() {
        // A single row of three tiles, hand-stepped.
        let mut g = field_with(3, 1, &[9.0, 0.0, 0.0]);
        disperse(&mut g, 0.5);
        // x = 0: right flow -4.5, below is self.
        // x = 1: here 4.5, right 0   -> flow -2.25
        // x = 2: here 2.25, right (wraps to x = 0) 4.5 -> flow 1.125
        let got = g.as_slice();
        assert!((got[0] - 3.375).abs() < 1e-6, "{got:?}");
        assert!((got[1] - 2.25).abs() < 1e-6, "{got:?}");
        assert!((got[2] - 3.375).abs() < 1e-6, "{got:?}");
    }

    #[test]
    fn single_tile_is_untouched() {
        let mut g = field_with(1, 1, &[5.0]);
        disperse(&mut g, 0.9);
        assert_eq!(g.as_slice(), &[5.0]);
    }

    #[test]
    fn evaporate_scales_every_tile() {
        let mut g = field_with(2, 2, &[1.0, 2.0, 4.0, 8.0]);
        evaporate(&mut g, 0.25);
        assert_eq!(g.as_slice(), &[0.75, 1.5, 3.0, 6.0]);
    }

    #[test]
    fn update_runs_disperse_then_evaporate() {
        let mut a = spike(4, 4, 1, 1, 50.0);
        let mut b = a.clone();
        update(&mut a, FluidRates::new(0.2, 0.1));
        disperse(&mut b, 0.2);
        evaporate(&mut b, 0.1);
        assert_eq!(a, b);
    }
}

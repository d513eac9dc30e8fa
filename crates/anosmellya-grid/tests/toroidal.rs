//! Property tests for toroidal addressing.

use anosmellya_grid::Grid;
use proptest::prelude::*;

fn numbered(width: u32, height: u32) -> Grid<u32> {
    let mut g = Grid::filled(width, height, 0u32).unwrap();
    for (i, tile) in g.as_mut_slice().iter_mut().enumerate() {
        *tile = i as u32;
    }
    g
}

proptest! {
    #[test]
    fn translate_matches_euclidean_modulo(
        width in 1u32..40,
        height in 1u32..40,
        x_seed in any::<u32>(),
        y_seed in any::<u32>(),
        ox in any::<i32>(),
        oy in any::<i32>(),
    ) {
        let g = numbered(width, height);
        let x = x_seed % width;
        let y = y_seed % height;

        let ex = (x as i64 + ox as i64).rem_euclid(width as i64) as u32;
        let ey = (y as i64 + oy as i64).rem_euclid(height as i64) as u32;

        prop_assert_eq!(g.translate(x, y, ox, oy), (ex, ey));
        prop_assert_eq!(*g.at_translated(x, y, ox, oy), *g.at(ex, ey));
    }

    #[test]
    fn small_translate_agrees_with_translate(
        width in 1u32..40,
        height in 1u32..40,
        x_seed in any::<u32>(),
        y_seed in any::<u32>(),
        ox_seed in any::<i32>(),
        oy_seed in any::<i32>(),
    ) {
        let g = numbered(width, height);
        let x = x_seed % width;
        let y = y_seed % height;
        let ox = ox_seed % width as i32;
        let oy = oy_seed % height as i32;

        prop_assert_eq!(g.small_translate(x, y, ox, oy), g.translate(x, y, ox, oy));
    }

    #[test]
    fn translate_round_trips(
        width in 1u32..40,
        height in 1u32..40,
        x_seed in any::<u32>(),
        y_seed in any::<u32>(),
        ox in -1000i32..1000,
        oy in -1000i32..1000,
    ) {
        let g = numbered(width, height);
        let x = x_seed % width;
        let y = y_seed % height;
        let (tx, ty) = g.translate(x, y, ox, oy);
        prop_assert_eq!(g.translate(tx, ty, -ox, -oy), (x, y));
    }
}

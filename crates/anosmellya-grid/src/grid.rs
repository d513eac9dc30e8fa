//! Dense row-major grid with wraparound addressing.

use crate::error::GridError;

/// A `width * height` array of `T`, stored row-major, addressed as a torus.
///
/// Tiles are addressed by `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`. [`translate`](Grid::translate) moves a coordinate by
/// any signed offset and always lands back inside the grid.
///
/// Backing storage is allocated once at construction. Allocation failure is
/// not recoverable: it is logged and the process aborts, since every caller
/// would otherwise be left with a grid it cannot index.
///
/// # Examples
///
/// ```
/// use anosmellya_grid::Grid;
///
/// let mut grid = Grid::filled(4, 3, 0.0f32).unwrap();
/// *grid.at_mut(0, 0) = 1.0;
///
/// // One step left of column 0 wraps to column 3.
/// assert_eq!(grid.translate(0, 0, -1, 0), (3, 0));
/// assert_eq!(*grid.at_translated(3, 2, 1, 1), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    tiles: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every tile set to `T::default()`.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::filled(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Largest accepted dimension: offsets are `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with every tile set to `value`.
    ///
    /// Returns [`GridError::EmptyGrid`] if either dimension is zero and
    /// [`GridError::DimensionTooLarge`] if either exceeds [`Self::MAX_DIM`].
    pub fn filled(width: u32, height: u32, value: T) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, dim) in [("width", width), ("height", height)] {
            if dim > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value: dim,
                    max: Self::MAX_DIM,
                });
            }
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::CellCountOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            tiles: allocate(len, value),
        })
    }

    /// Overwrite every tile with `value`.
    pub fn fill(&mut self, value: T) {
        self.tiles.fill(value);
    }
}

fn allocate<T: Clone>(len: usize, value: T) -> Vec<T> {
    let mut tiles = Vec::new();
    if let Err(err) = tiles.try_reserve_exact(len) {
        tracing::error!(tiles = len, %err, "out of memory allocating grid");
        std::process::abort();
    }
    tiles.resize(len, value);
    tiles
}

impl<T> Grid<T> {
    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of tiles (`width * height`).
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` only for the placeholder produced by [`Default`].
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Tile at `(x, y)`. The coordinate must be in range.
    pub fn at(&self, x: u32, y: u32) -> &T {
        &self.tiles[self.offset(x, y)]
    }

    /// Mutable tile at `(x, y)`. The coordinate must be in range.
    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut T {
        let i = self.offset(x, y);
        &mut self.tiles[i]
    }

    /// Offset `(x, y)` by `(ox, oy)` with wraparound.
    ///
    /// The offsets may be any value, including negative values and values
    /// larger than the grid: they are first reduced modulo the dimension.
    pub fn translate(&self, x: u32, y: u32, ox: i32, oy: i32) -> (u32, u32) {
        // MAX_DIM keeps both dimensions representable as i32.
        let ox = ox % self.width as i32;
        let oy = oy % self.height as i32;
        self.small_translate(x, y, ox, oy)
    }

    /// Offset `(x, y)` by `(ox, oy)` with wraparound, for offsets whose
    /// magnitudes are at most the width and height respectively.
    ///
    /// This is the form used for neighbour lookups, where offsets are ±1.
    pub fn small_translate(&self, x: u32, y: u32, ox: i32, oy: i32) -> (u32, u32) {
        (
            wrap_axis(x, ox, self.width),
            wrap_axis(y, oy, self.height),
        )
    }

    /// Tile at `(x, y)` offset by `(ox, oy)`, wrapping as [`translate`](Grid::translate).
    pub fn at_translated(&self, x: u32, y: u32, ox: i32, oy: i32) -> &T {
        let (tx, ty) = self.translate(x, y, ox, oy);
        self.at(tx, ty)
    }

    /// Mutable tile at `(x, y)` offset by `(ox, oy)`.
    pub fn at_translated_mut(&mut self, x: u32, y: u32, ox: i32, oy: i32) -> &mut T {
        let (tx, ty) = self.translate(x, y, ox, oy);
        self.at_mut(tx, ty)
    }

    /// Tile at `(x, y)` offset by a small `(ox, oy)`, wrapping as
    /// [`small_translate`](Grid::small_translate).
    pub fn at_small_translated(&self, x: u32, y: u32, ox: i32, oy: i32) -> &T {
        let (tx, ty) = self.small_translate(x, y, ox, oy);
        self.at(tx, ty)
    }

    /// Mutable tile at `(x, y)` offset by a small `(ox, oy)`.
    pub fn at_small_translated_mut(&mut self, x: u32, y: u32, ox: i32, oy: i32) -> &mut T {
        let (tx, ty) = self.small_translate(x, y, ox, oy);
        self.at_mut(tx, ty)
    }

    /// All tiles in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.tiles
    }

    /// All tiles in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.tiles
    }

    /// Iterate `(x, y, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &T)> + '_ {
        let width = self.width as usize;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| ((i % width) as u32, (i / width) as u32, t))
    }
}

impl Grid<f32> {
    /// Sum of every tile, accumulated in `f64`.
    pub fn total(&self) -> f64 {
        self.tiles.iter().map(|&v| v as f64).sum()
    }
}

/// An empty placeholder grid with zero dimensions.
///
/// Used to park a slot while its real grid is lent elsewhere. Indexing or
/// translating within the placeholder panics.
impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            tiles: Vec::new(),
        }
    }
}

fn wrap_axis(v: u32, offset: i32, len: u32) -> u32 {
    debug_assert!(offset.unsigned_abs() <= len, "offset {offset} not small for {len}");
    if offset < 0 {
        let back = offset.unsigned_abs();
        if v < back {
            len - (back - v)
        } else {
            v - back
        }
    } else {
        // v < len <= i32::MAX and offset <= len, so the sum cannot overflow.
        let moved = v + offset as u32;
        if moved >= len {
            moved - len
        } else {
            moved
        }
    }
}

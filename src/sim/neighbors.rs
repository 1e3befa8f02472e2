//! Moore-neighborhood counting with toroidal wraparound

use super::grid::Grid;
use crate::error::Result;

/// Offsets of the 8 surrounding cells, row by row
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Step one cell along an axis of length `len`, wrapping at both ends.
///
/// Only offsets of -1, 0 and 1 are valid.
#[inline]
fn wrap(coord: usize, delta: isize, len: usize) -> usize {
    match delta {
        -1 if coord == 0 => len - 1,
        -1 => coord - 1,
        1 if coord + 1 >= len => 0,
        1 => coord + 1,
        _ => coord,
    }
}

/// Count the live cells around `(x, y)`. Result is in `0..=8`.
#[inline]
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> Result<u8> {
    let (w, h) = (grid.width(), grid.height());
    let mut count = 0u8;
    for (dx, dy) in OFFSETS {
        let tx = wrap(x, dx, w);
        let ty = wrap(y, dy, h);
        count += grid.get(tx, ty)?.weight();
    }
    Ok(count)
}

//! Fixed-size toroidal cell field

use crate::error::{LifeError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// State of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// 0 or 1, for summing neighborhoods
    #[inline]
    pub fn weight(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Row-major W x H field of cells. Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::from_fn(width, height, |_, _| Cell::Dead)
    }

    /// Build a grid by evaluating every `(x, y)` in row-major order
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Cell,
    {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidConfig("grid dimensions must be non-zero"));
        }
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Ok(Self { width, height, cells })
    }

    /// Each cell is alive with probability `density`
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, density: f64, rng: &mut R) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidConfig("density must be between 0.0 and 1.0"));
        }
        Self::from_fn(width, height, |_, _| Cell::from(rng.gen_bool(density)))
    }

    /// Grid with exactly the listed coordinates alive
    pub fn with_live_cells<I>(width: usize, height: usize, coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(width, height)?;
        for (x, y) in coords {
            grid.set(x, y, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Parse a plaintext pattern anchored at the top-left corner.
    ///
    /// `O`, `#` and `*` are alive, `.` and space are dead. Lines starting
    /// with `!` are comments.
    pub fn from_pattern(width: usize, height: usize, text: &str) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        let rows = text.lines().enumerate().filter(|(_, l)| !l.starts_with('!'));

        for (y, (line_no, line)) in rows.enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            if y >= height {
                return Err(LifeError::Pattern {
                    line: line_no + 1,
                    message: format!("pattern is taller than the {} row grid", height),
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'O' | '#' | '*' => Cell::Alive,
                    '.' | ' ' => Cell::Dead,
                    other => {
                        return Err(LifeError::Pattern {
                            line: line_no + 1,
                            message: format!("unexpected character {:?}", other),
                        })
                    }
                };
                if x >= width {
                    return Err(LifeError::Pattern {
                        line: line_no + 1,
                        message: format!("row is wider than the {} column grid", width),
                    });
                }
                grid.set(x, y, cell)?;
            }
        }

        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        Ok(self.cells[self.index(x, y)?])
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        let ix = self.index(x, y)?;
        self.cells[ix] = cell;
        Ok(())
    }

    /// Number of alive cells
    pub fn count_live(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Cell-wise equality. Grids of different sizes cannot be compared.
    pub fn equals(&self, other: &Grid) -> Result<bool> {
        self.check_same_shape(other)?;
        Ok(self.cells == other.cells)
    }

    /// Overwrite this grid with the contents of `other` without reallocating
    pub fn copy_from(&mut self, other: &Grid) -> Result<()> {
        self.check_same_shape(other)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    pub(crate) fn check_same_shape(&self, other: &Grid) -> Result<()> {
        if self.width == other.width && self.height == other.height {
            Ok(())
        } else {
            Err(LifeError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width: other.width,
                actual_height: other.height,
            })
        }
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Coordinates of every alive cell in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(ix, _)| (ix % width, ix / width))
    }
}

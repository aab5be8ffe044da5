use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Which cells of the 3×3 block a neighbor count covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighborhood {
    /// The 8 surrounding cells.
    Moore,
    /// The full 3×3 block, center included.
    MooreWithCenter,
}

/// Fixed-size toroidal grid of small integer cell values.
///
/// Owns both the current buffer and the scratch buffer the next tick is
/// written into. Cells are stored row-major: index `y * width + x`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
    #[serde(skip)]
    next: Vec<u8>,
}

// The scratch buffer is not part of a grid's value.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Grid {
    /// Create a grid with every cell set to `fill`. Fails when either side is
    /// zero or the cell count does not fit in `usize`.
    pub fn new(width: usize, height: usize, fill: u8) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(SimError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
            next: vec![fill; len],
        })
    }

    /// Create a grid whose cells are produced by `f(x, y)`, visited row by row.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> u8,
    ) -> Result<Self> {
        let mut grid = Self::new(width, height, 0)?;
        for y in 0..height {
            for x in 0..width {
                grid.cells[y * width + x] = f(x, y);
            }
        }
        Ok(grid)
    }

    /// Create a grid with each cell drawn independently by `draw`.
    pub fn random(
        width: usize,
        height: usize,
        rng: &mut dyn RngCore,
        mut draw: impl FnMut(&mut dyn RngCore) -> u8,
    ) -> Result<Self> {
        Self::from_fn(width, height, |_, _| draw(&mut *rng))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Read a cell; coordinates wrap on both axes.
    pub fn get(&self, x: isize, y: isize) -> u8 {
        self.cells[self.wrapped_index(x, y)]
    }

    /// Overwrite a cell outside of a tick (seeding, tests).
    pub fn set(&mut self, x: isize, y: isize, value: u8) {
        let i = self.wrapped_index(x, y);
        self.cells[i] = value;
    }

    fn wrapped_index(&self, x: isize, y: isize) -> usize {
        let x = x.rem_euclid(self.width as isize) as usize;
        let y = y.rem_euclid(self.height as isize) as usize;
        y * self.width + x
    }

    /// Count cells equal to `value` around `(x, y)` with wraparound.
    pub fn neighbor_count(&self, x: usize, y: usize, value: u8, hood: Neighborhood) -> usize {
        let (cx, cy) = (x as isize, y as isize);
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 && hood == Neighborhood::Moore {
                    continue;
                }
                if self.get(cx + dx, cy + dy) == value {
                    count += 1;
                }
            }
        }
        count
    }

    /// Fraction of cells holding `value`.
    pub fn density(&self, value: u8) -> f64 {
        let matching = self.cells.iter().filter(|&&c| c == value).count();
        matching as f64 / self.cells.len() as f64
    }

    /// Run one synchronous pass.
    ///
    /// `f` sees only the pre-tick grid; its results land in the scratch
    /// buffer, which becomes current once every cell has been computed.
    pub fn step(&mut self, mut f: impl FnMut(&Grid, usize, usize) -> u8) {
        let mut next = std::mem::take(&mut self.next);
        next.resize(self.cells.len(), 0);
        for y in 0..self.height {
            for x in 0..self.width {
                next[y * self.width + x] = f(self, x, y);
            }
        }
        self.next = std::mem::replace(&mut self.cells, next);
    }
}

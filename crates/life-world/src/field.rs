//! 2D toroidal field of cells.

use life_core::{Coordinate, Error, Result, NEIGHBOR_OFFSETS};
use tracing::warn;

/// Largest number of cells a field may hold
pub const MAX_FIELD_CELLS: usize = 1 << 24;

/// A fixed-size toroidal grid of live/dead cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl Field {
    /// Create a field with every cell dead
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if !Self::fits(width, height) {
            return Err(Error::FieldTooLarge {
                width,
                height,
                max_cells: MAX_FIELD_CELLS,
            });
        }

        let size = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![false; size],
        })
    }

    /// Whether a positive `width x height` stays within `MAX_FIELD_CELLS`
    pub fn fits(width: i32, height: i32) -> bool {
        let (Ok(width), Ok(height)) = (usize::try_from(width), usize::try_from(height)) else {
            return false;
        };
        width
            .checked_mul(height)
            .is_some_and(|cells| cells <= MAX_FIELD_CELLS)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the coordinate lies inside `[0, width) x [0, height)`
    pub fn contains(&self, coord: Coordinate) -> bool {
        (0..self.width).contains(&coord.x) && (0..self.height).contains(&coord.y)
    }

    /// Set the state of a cell.
    ///
    /// Coordinates outside the field are not wrapped: they are reported and
    /// ignored. Returns whether the cell was written.
    pub fn set(&mut self, coord: Coordinate, alive: bool) -> bool {
        if !self.contains(coord) {
            warn!(
                width = self.width,
                height = self.height,
                "Out of bounds: {}",
                coord
            );
            return false;
        }

        let index = self.coord_to_index(coord);
        self.cells[index] = alive;
        true
    }

    /// Whether the cell at `(x, y)` is alive, wrapping toroidally
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        let wrapped = Coordinate::new(x, y).wrap(self.width, self.height);
        self.cells[self.coord_to_index(wrapped)]
    }

    /// Number of live cells among the eight toroidal neighbors
    pub fn live_neighbors(&self, x: i32, y: i32) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.is_alive(x + dx, y + dy))
            .count()
    }

    /// State of the cell at `(x, y)` in the next generation
    pub fn next_state(&self, x: i32, y: i32) -> bool {
        match self.live_neighbors(x, y) {
            3 => true,
            2 => self.is_alive(x, y),
            _ => false,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterator over the coordinates of all live cells, row by row
    pub fn live_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| self.index_to_coord(i))
    }

    fn coord_to_index(&self, coord: Coordinate) -> usize {
        coord.y as usize * self.width as usize + coord.x as usize
    }

    fn index_to_coord(&self, index: usize) -> Coordinate {
        let x = (index as i32) % self.width;
        let y = (index as i32) / self.width;
        Coordinate::new(x, y)
    }
}

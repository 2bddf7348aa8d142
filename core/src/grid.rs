use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::*;

/// Complete board state for one generation: one `CellState` per coordinate
/// in `[0, cols) x [0, rows)`, directly indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<CellState>,
}

impl Grid {
    /// An all-dead board of the given size.
    pub fn dead(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size),
        }
    }

    /// Builds a board with exactly the listed cells alive; mainly useful for
    /// placing known patterns.
    pub fn from_live_coords(size: Coord2, live: &[Coord2]) -> Result<Self> {
        let mut grid = Self::dead(size);

        for &coords in live {
            grid.validate_coords(coords)?;
            grid[coords] = CellState::Alive;
        }

        Ok(grid)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GridError::InvalidCoords)
        }
    }

    /// `(cols, rows)`.
    pub fn size(&self) -> Coord2 {
        self.cells.dim()
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// In-bounds coordinates always yield `Some`; out-of-bounds yield `None`.
    pub fn get(&self, coords: Coord2) -> Option<CellState> {
        self.cells.get(coords).copied()
    }

    /// Panics on out-of-bounds coordinates; callers are expected to stay in
    /// bounds by construction.
    pub fn is_alive(&self, coords: Coord2) -> bool {
        self[coords].is_alive()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    pub fn live_neighbor_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_alive())
            .count()
            .try_into()
            .unwrap()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Grid {
    type Output = CellState;

    fn index(&self, index: Coord2) -> &Self::Output {
        &self.cells[index]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, index: Coord2) -> &mut Self::Output {
        &mut self.cells[index]
    }
}

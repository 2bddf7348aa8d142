use ndarray::Array2;

/// Two-dimensional board coordinates `(x, y)`.
pub type Coord2 = (usize, usize);

// Define a displacement mapping for each direction
const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1), // Top-Left
    (0, -1),  // Top
    (1, -1),  // Top-Right
    (-1, 0),  // Left
    (1, 0),   // Right
    (-1, 1),  // Bottom-Left
    (0, 1),   // Bottom
    (1, 1),   // Bottom-Right
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates the Moore neighborhood of a coordinate, skipping positions that
/// fall outside the board. Edge and corner cells therefore see fewer than 8
/// neighbors; nothing wraps to the opposite side.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: usize,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.index >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, self.dim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        NeighborIter::new(center, bounds).collect()
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors = neighbors_of((2, 2), (5, 5));

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(2, 2)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let mut neighbors = neighbors_of((0, 0), (5, 5));
        neighbors.sort();

        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let neighbors = neighbors_of((2, 0), (5, 5));

        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.iter().all(|&(_, y)| y <= 1));
    }

    #[test]
    fn far_corner_does_not_wrap() {
        let mut neighbors = neighbors_of((4, 4), (5, 5));
        neighbors.sort();

        assert_eq!(neighbors, vec![(3, 3), (3, 4), (4, 3)]);
    }
}

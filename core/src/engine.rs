use std::mem;

use crate::*;

/// Outcome of advancing the board by one generation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// At least one cell changed state.
    Changed,
    /// The board is identical to the previous generation (a still life);
    /// no future step can change anything.
    Settled,
    /// No cell is alive anymore.
    Extinct,
}

impl StepOutcome {
    /// Whether further steps can still change the board.
    pub const fn is_terminal(self) -> bool {
        match self {
            Self::Changed => false,
            Self::Settled => true,
            Self::Extinct => true,
        }
    }
}

/// The B3/S23 transition rule: a live cell survives with 2 or 3 live
/// neighbors, a dead cell is born with exactly 3, everything else dies or
/// stays dead.
pub const fn next_state(current: CellState, alive_neighbors: u8) -> CellState {
    match (current, alive_neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Alive, _) => CellState::Dead,
        (CellState::Dead, 3) => CellState::Alive,
        (CellState::Dead, _) => CellState::Dead,
    }
}

/// Advances a board generation by generation. Each step computes every
/// cell's next state from a single consistent snapshot into a scratch
/// buffer, then swaps the buffers, so no cell ever observes a
/// partially-updated board.
#[derive(Clone, Debug)]
pub struct Simulation {
    current: Grid,
    scratch: Grid,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        let scratch = Grid::dead(grid.size());
        Self {
            current: grid,
            scratch,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_extinct(&self) -> bool {
        self.current.is_extinct()
    }

    /// Computes and commits the next generation.
    pub fn step(&mut self) -> StepOutcome {
        let (cols, rows) = self.current.size();

        for y in 0..rows {
            for x in 0..cols {
                let coords = (x, y);
                let alive_neighbors = self.current.live_neighbor_count(coords);
                self.scratch[coords] = next_state(self.current[coords], alive_neighbors);
            }
        }

        // commit: the scratch buffer becomes the live board, the old board
        // becomes next step's scratch space
        mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;

        let outcome = if self.current.is_extinct() {
            StepOutcome::Extinct
        } else if self.current == self.scratch {
            StepOutcome::Settled
        } else {
            StepOutcome::Changed
        };
        log::debug!(
            "generation {}: population {}, outcome {:?}",
            self.generation,
            self.current.population(),
            outcome
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, live: &[Coord2]) -> Grid {
        Grid::from_live_coords(size, live).unwrap()
    }

    #[test]
    fn rule_matches_the_survival_band() {
        for n in 0..=8 {
            let expected = if n == 2 || n == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(next_state(CellState::Alive, n), expected, "alive, n={n}");
        }
    }

    #[test]
    fn rule_births_on_exactly_three() {
        for n in 0..=8 {
            let expected = if n == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(next_state(CellState::Dead, n), expected, "dead, n={n}");
        }
    }

    #[test]
    fn lone_cell_dies_of_isolation() {
        let mut sim = Simulation::new(board((5, 5), &[(2, 2)]));

        let outcome = sim.step();

        // the lone cell dies; its 8 neighbors each saw only 1 live neighbor,
        // far from the 3 a birth requires
        assert_eq!(outcome, StepOutcome::Extinct);
        assert!(sim.is_extinct());
    }

    #[test]
    fn l_corner_is_born_and_completes_a_block() {
        let mut sim = Simulation::new(board((5, 5), &[(1, 1), (2, 1), (1, 2)]));

        assert_eq!(sim.step(), StepOutcome::Changed);
        assert!(sim.grid().is_alive((2, 2)));
        assert_eq!(
            *sim.grid(),
            board((5, 5), &[(1, 1), (2, 1), (1, 2), (2, 2)])
        );

        // the completed block is a still life
        assert_eq!(sim.step(), StepOutcome::Settled);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let row = board((5, 5), &[(1, 2), (2, 2), (3, 2)]);
        let column = board((5, 5), &[(2, 1), (2, 2), (2, 3)]);
        let mut sim = Simulation::new(row.clone());

        assert_eq!(sim.step(), StepOutcome::Changed);
        assert_eq!(*sim.grid(), column);

        assert_eq!(sim.step(), StepOutcome::Changed);
        assert_eq!(*sim.grid(), row);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn corner_cells_never_wrap() {
        // with a toroidal board the four corners would be mutual neighbors
        // and every corner would survive; on a closed board they all die
        let mut sim = Simulation::new(board((5, 5), &[(0, 0), (4, 0), (0, 4), (4, 4)]));

        assert_eq!(sim.step(), StepOutcome::Extinct);
    }

    #[test]
    fn overpopulated_cell_dies() {
        // the center of a plus sign has 4 live neighbors
        let mut sim = Simulation::new(board(
            (5, 5),
            &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)],
        ));

        sim.step();

        assert!(!sim.grid().is_alive((2, 2)));
    }

    #[test]
    fn empty_board_steps_to_extinct() {
        let mut sim = Simulation::new(Grid::dead((4, 4)));

        assert_eq!(sim.step(), StepOutcome::Extinct);
        assert!(StepOutcome::Extinct.is_terminal());
    }

    #[test]
    fn identical_boards_step_identically() {
        let start = board((7, 7), &[(1, 1), (2, 1), (3, 1), (3, 2), (2, 3)]);
        let mut a = Simulation::new(start.clone());
        let mut b = Simulation::new(start);

        for _ in 0..5 {
            a.step();
            b.step();
            assert_eq!(a.grid(), b.grid());
        }
    }
}

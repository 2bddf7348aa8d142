use super::*;

/// Seeds each cell independently: a uniform draw in `[0, 100)` strictly
/// below the configured life percentage makes the cell start alive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomGridSeeder {
    seed: u64,
}

impl RandomGridSeeder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridSeeder for RandomGridSeeder {
    fn generate(self, config: BoardConfig) -> Grid {
        use rand::prelude::*;

        let (cols, rows) = config.size;
        let mut grid = Grid::dead(config.size);

        if config.life_percent == 0 {
            log::warn!("life percentage is 0, the board starts extinct");
            return grid;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        // sweep rows then columns; the draw order is part of the
        // deterministic contract for a given seed
        for y in 0..rows {
            for x in 0..cols {
                if rng.random_range(0u8..100) < config.life_percent {
                    grid[(x, y)] = CellState::Alive;
                }
            }
        }
        grid
    }
}

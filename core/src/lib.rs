use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use render::*;
pub use seeder::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod grid;
mod render;
mod seeder;
mod types;

/// Board construction settings: dimensions and the percentage chance any
/// cell starts alive.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub life_percent: u8,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, life_percent: u8) -> Self {
        Self { size, life_percent }
    }

    pub fn new((size_x, size_y): Coord2, life_percent: u8) -> Self {
        let size_x = size_x.max(1);
        let size_y = size_y.max(1);
        if life_percent > 100 {
            log::warn!(
                "life percentage {} out of range, clamped to 100",
                life_percent
            );
        }
        let life_percent = life_percent.min(100);
        Self::new_unchecked((size_x, size_y), life_percent)
    }

    pub const fn total_cells(&self) -> usize {
        self.size.0 * self.size.1
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: (40, 30),
            life_percent: 2,
        }
    }
}

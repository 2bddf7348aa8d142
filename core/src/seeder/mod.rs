use crate::*;
pub use random::*;

mod random;

/// Strategy for producing the starting board.
pub trait GridSeeder {
    fn generate(self, config: BoardConfig) -> Grid;
}

use serde::{Deserialize, Serialize};

/// Life state of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Alive,
    Dead,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Dead
    }
}

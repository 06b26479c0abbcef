use serde::{Deserialize, Serialize};

/// What a cell hides, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    /// Number of mines among the up to eight neighbors.
    Hint(u8),
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Hint(0)
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Unexplored,
    Flagged,
    Revealed,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Unexplored
    }
}

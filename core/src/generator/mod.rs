use crate::*;
pub use random::*;

mod random;

/// Places mines for a game, keeping every coordinate of `excluded` free.
pub trait MineLayoutGenerator {
    fn generate(self, config: GameConfig, excluded: &[Coord2]) -> Result<MineLayout>;
}

/// Checks that `mines` fit on the board once `excluded_cells` are reserved.
pub fn check_capacity(mines: CellCount, excluded_cells: CellCount) -> Result<()> {
    let capacity = TOTAL_CELLS.saturating_sub(excluded_cells);
    if mines > capacity {
        log::warn!("Requested {mines} mines but only {capacity} cells are available");
        Err(GameError::UnsatisfiableConfiguration {
            requested: mines,
            capacity,
        })
    } else {
        Ok(())
    }
}

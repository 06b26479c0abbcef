use alloc::string::String;
use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot place {requested} mines, only {capacity} cells lie outside the safe zone")]
    UnsatisfiableConfiguration {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Mine mask does not match the board size")]
    InvalidBoardShape,
    #[error("Cannot flag a cell that is already revealed")]
    InvalidFlagTarget,
    #[error("Unknown command {0:?}, expected \"mine\" or \"free\"")]
    UnknownCommand(String),
    #[error("Game already ended, no new moves are accepted")]
    CommandAfterGameOver,
}

pub type Result<T> = core::result::Result<T, GameError>;

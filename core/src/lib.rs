#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use command::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod command;
mod error;
mod generator;
mod render;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(mines: CellCount) -> Self {
        Self { mines }
    }

    /// Accepts any mine count that still fits once a full safe zone is reserved.
    pub fn new(mines: CellCount) -> Result<Self> {
        check_capacity(mines, SAFE_ZONE_CELLS)?;
        Ok(Self::new_unchecked(mines))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_up_to_seventy_two_mines() {
        assert_eq!(GameConfig::new(0).map(|c| c.mines), Ok(0));
        assert_eq!(GameConfig::new(10).map(|c| c.mines), Ok(10));
        assert_eq!(GameConfig::new(72).map(|c| c.mines), Ok(72));
    }

    #[test]
    fn config_rejects_seventy_three_mines() {
        assert_eq!(
            GameConfig::new(73),
            Err(GameError::UnsatisfiableConfiguration {
                requested: 73,
                capacity: 72,
            })
        );
    }
}

use alloc::string::ToString;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    /// `mine`: set or unset a mine mark.
    ToggleFlag,
    /// `free`: claim a cell as free of mines.
    ClaimFree,
}

impl FromStr for CommandKind {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self> {
        if token.eq_ignore_ascii_case("mine") {
            Ok(Self::ToggleFlag)
        } else if token.eq_ignore_ascii_case("free") {
            Ok(Self::ClaimFree)
        } else {
            Err(GameError::UnknownCommand(token.to_string()))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub kind: CommandKind,
    pub coords: Coord2,
}

impl Command {
    pub const fn new(kind: CommandKind, coords: Coord2) -> Self {
        Self { kind, coords }
    }

    /// Builds a command from the 1-indexed row and column a player types.
    pub fn from_one_based(row: u32, column: u32, kind: CommandKind) -> Result<Self> {
        let to_axis = |value: u32| -> Result<Coord> {
            value
                .checked_sub(1)
                .and_then(|value| Coord::try_from(value).ok())
                .ok_or(GameError::OutOfBounds)
        };
        let coords = validate_coords((to_axis(row)?, to_axis(column)?))?;
        Ok(Self::new(kind, coords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tokens() {
        assert_eq!("mine".parse::<CommandKind>(), Ok(CommandKind::ToggleFlag));
        assert_eq!("free".parse::<CommandKind>(), Ok(CommandKind::ClaimFree));
        assert_eq!("FREE".parse::<CommandKind>(), Ok(CommandKind::ClaimFree));
    }

    #[test]
    fn unknown_token_is_reported() {
        assert_eq!(
            "dig".parse::<CommandKind>(),
            Err(GameError::UnknownCommand("dig".to_string()))
        );
    }

    #[test]
    fn one_based_coords_shift_to_zero_based() {
        assert_eq!(
            Command::from_one_based(1, 9, CommandKind::ClaimFree),
            Ok(Command::new(CommandKind::ClaimFree, (0, 8)))
        );
    }

    #[test]
    fn one_based_coords_outside_board_are_rejected() {
        for (row, column) in [(0, 1), (1, 0), (10, 1), (1, 10), (u32::MAX, 1)] {
            assert_eq!(
                Command::from_one_based(row, column, CommandKind::ToggleFlag),
                Err(GameError::OutOfBounds)
            );
        }
    }
}

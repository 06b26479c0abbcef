use core::ops::Index;

use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The set of mined coordinates, kept alongside a mask for constant-time lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mines: HashSet<Coord2>,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        if mine_mask.dim() != (usize::from(BOARD_SIZE.0), usize::from(BOARD_SIZE.1)) {
            return Err(GameError::InvalidBoardShape);
        }

        let mines = iter_board()
            .filter(|&coords| mine_mask[coords.to_nd_index()])
            .collect();
        Ok(Self { mine_mask, mines })
    }

    pub fn from_mine_coords(mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(BOARD_SIZE.to_nd_index());

        for &coords in mine_coords {
            let coords = validate_coords(coords)?;
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn mines(&self) -> &HashSet<Coord2> {
        &self.mines
    }

    pub fn mine_count(&self) -> CellCount {
        // bounded by the board size, which fits a CellCount
        self.mines.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        TOTAL_CELLS - self.mine_count()
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors
        iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Immutable cell contents derived from a [`MineLayout`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<CellContent>,
}

impl Board {
    /// Fills every non-mine cell with the number of mined neighbors.
    pub fn compute_hints(layout: &MineLayout) -> Self {
        let mut cells: Array2<CellContent> = Array2::default(BOARD_SIZE.to_nd_index());

        for coords in iter_board() {
            cells[coords.to_nd_index()] = if layout.contains_mine(coords) {
                CellContent::Mine
            } else {
                CellContent::Hint(layout.adjacent_mine_count(coords))
            };
        }

        Self { cells }
    }

    pub fn content_at(&self, coords: Coord2) -> CellContent {
        self.cells[coords.to_nd_index()]
    }

    /// Hint of a safe cell, `None` for a mine.
    pub fn hint_at(&self, coords: Coord2) -> Option<u8> {
        match self.content_at(coords) {
            CellContent::Mine => None,
            CellContent::Hint(count) => Some(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_count_mined_neighbors() {
        let layout = MineLayout::from_mine_coords(&[(0, 0), (0, 2), (2, 1)]).unwrap();
        let board = Board::compute_hints(&layout);

        assert_eq!(board.content_at((0, 0)), CellContent::Mine);
        assert_eq!(board.content_at((0, 1)), CellContent::Hint(2));
        assert_eq!(board.content_at((1, 1)), CellContent::Hint(3));
        assert_eq!(board.content_at((1, 0)), CellContent::Hint(2));
        assert_eq!(board.content_at((3, 1)), CellContent::Hint(1));
        assert_eq!(board.content_at((8, 8)), CellContent::Hint(0));
    }

    #[test]
    fn fully_surrounded_cell_has_hint_eight() {
        let ring: alloc::vec::Vec<_> = iter_neighbors((4, 4)).collect();
        let layout = MineLayout::from_mine_coords(&ring).unwrap();
        let board = Board::compute_hints(&layout);

        assert_eq!(board.hint_at((4, 4)), Some(8));
        assert_eq!(board.hint_at((3, 3)), None);
    }

    #[test]
    fn every_hint_matches_neighbor_mine_count() {
        let layout =
            MineLayout::from_mine_coords(&[(0, 8), (1, 7), (4, 4), (5, 5), (8, 0), (7, 3)])
                .unwrap();
        let board = Board::compute_hints(&layout);

        for coords in iter_board() {
            if layout.contains_mine(coords) {
                assert_eq!(board.content_at(coords), CellContent::Mine);
                continue;
            }
            let expected = iter_neighbors(coords)
                .filter(|pos| layout.mines().contains(pos))
                .count() as u8;
            assert_eq!(board.hint_at(coords), Some(expected), "at {coords:?}");
        }
    }

    #[test]
    fn duplicate_coords_collapse_into_one_mine() {
        let layout = MineLayout::from_mine_coords(&[(3, 3), (3, 3)]).unwrap();

        assert_eq!(layout.mine_count(), 1);
        assert_eq!(layout.safe_cell_count(), TOTAL_CELLS - 1);
    }

    #[test]
    fn mask_with_wrong_shape_is_rejected() {
        let mask: Array2<bool> = Array2::default((8, 9));

        assert_eq!(
            MineLayout::from_mine_mask(mask),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn out_of_bounds_mine_is_rejected() {
        assert_eq!(
            MineLayout::from_mine_coords(&[(9, 0)]),
            Err(GameError::OutOfBounds)
        );
    }
}

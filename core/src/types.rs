use core::ops::RangeInclusive;

use smallvec::SmallVec;

use crate::{GameError, Result};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`, zero-based.
pub type Coord2 = (Coord, Coord);

/// Fixed board geometry, `(rows, columns)`.
pub const BOARD_SIZE: Coord2 = (9, 9);

/// Number of cells on the board.
pub const TOTAL_CELLS: CellCount = BOARD_SIZE.0 as CellCount * BOARD_SIZE.1 as CellCount;

/// Upper bound on the cells reserved around the first revealed coordinate.
pub const SAFE_ZONE_CELLS: CellCount = 9;

/// The first revealed coordinate together with its in-bounds neighbors.
pub type SafeZone = SmallVec<[Coord2; 9]>;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Returns `coords` unchanged when it lies on the board.
pub fn validate_coords(coords: Coord2) -> Result<Coord2> {
    let (rows, columns) = BOARD_SIZE;
    if coords.0 < rows && coords.1 < columns {
        Ok(coords)
    } else {
        Err(GameError::OutOfBounds)
    }
}

/// Iterates every coordinate of the board in row-major order.
pub fn iter_board() -> impl Iterator<Item = Coord2> {
    let (rows, columns) = BOARD_SIZE;
    (0..rows).flat_map(move |row| (0..columns).map(move |column| (row, column)))
}

pub fn iter_neighbors(coords: Coord2) -> NeighborIter {
    NeighborIter::new(coords)
}

/// Cells that must stay mine-free when `coords` is the first reveal.
pub fn safe_zone(coords: Coord2) -> SafeZone {
    let mut zone = SafeZone::new();
    zone.push(coords);
    zone.extend(iter_neighbors(coords));
    zone
}

/// Walks the 3x3 window around a cell, clipped to the board, skipping the cell itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    rows: RangeInclusive<Coord>,
    columns: RangeInclusive<Coord>,
    row: Option<Coord>,
    column_cursor: RangeInclusive<Coord>,
}

impl NeighborIter {
    fn new(center: Coord2) -> Self {
        let window =
            |at: Coord, len: Coord| at.saturating_sub(1)..=at.saturating_add(1).min(len - 1);
        let mut rows = window(center.0, BOARD_SIZE.0);
        let columns = window(center.1, BOARD_SIZE.1);
        let row = rows.next();
        Self {
            center,
            rows,
            column_cursor: columns.clone(),
            columns,
            row,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = self.row?;
            match self.column_cursor.next() {
                Some(column) if (row, column) == self.center => continue,
                Some(column) => return Some((row, column)),
                None => {
                    self.row = self.rows.next();
                    self.column_cursor = self.columns.clone();
                }
            }
        }
    }
}

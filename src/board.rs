//! Playfield: fixed 20x10 grid of occupied/empty cells, lock and line clear.

use crate::pieces::Piece;
use std::collections::VecDeque;

/// Rows on the board.
pub const HEIGHT: usize = 20;
/// Columns on the board.
pub const WIDTH: usize = 10;

/// Single cell. Landed cells keep no colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
}

impl Cell {
    #[inline]
    pub fn is_occupied(self) -> bool {
        self == Self::Occupied
    }
}

type Row = [Cell; WIDTH];

const EMPTY_ROW: Row = [Cell::Empty; WIDTH];

/// Board of landed cells. `rows[0]` is the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: VecDeque<Row>,
}

impl Board {
    /// All cells empty.
    pub fn empty() -> Self {
        Self {
            rows: (0..HEIGHT).map(|_| EMPTY_ROW).collect(),
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn width(&self) -> usize {
        WIDTH
    }

    /// Cell at (row, col); `None` outside the grid.
    #[inline]
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    #[inline]
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.cell(row, col), Some(Cell::Occupied))
    }

    /// Overwrite one cell. Writes outside the grid are dropped.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) {
        if row < 0 || col < 0 || col as usize >= WIDTH {
            return;
        }
        if let Some(r) = self.rows.get_mut(row as usize) {
            r[col as usize] = cell;
        }
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|r| r.iter().all(|c| c.is_occupied()))
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Number of occupied cells on the whole board.
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_occupied()).count()
    }

    /// Merge `piece` at (row, col), then drop every full row and push the same number of
    /// empty rows on top. Returns the rebuilt board and the number of rows removed.
    ///
    /// The caller must have checked the placement with [`crate::collision::collides`];
    /// nothing is re-validated here and occupied cells are silently overwritten.
    pub fn lock_and_clear(&self, piece: &Piece, row: i32, col: i32) -> (Self, u32) {
        let mut merged = self.clone();
        for (i, j) in piece.shape().filled_cells() {
            merged.set(row + i as i32, col + j as i32, Cell::Occupied);
        }

        let before = merged.rows.len();
        merged.rows.retain(|r| r.iter().any(|c| !c.is_occupied()));
        let cleared = before - merged.rows.len();
        for _ in 0..cleared {
            merged.rows.push_front(EMPTY_ROW);
        }
        (merged, cleared as u32)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

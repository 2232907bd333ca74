//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a [`Block`].
//! Uses a flat array so that every coordinate of the grid always has a cell.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Block, Cell, Pos, BOARD_COLS, BOARD_HEIGHT, BOARD_ROWS, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// Contract violations reported by the board.
///
/// Gameplay never produces these; the engine checks `can_place` before it
/// writes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    OutOfBounds { x: i8, y: i8 },
    Occupied { x: i8, y: i8 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => write!(f, "cell ({}, {}) is outside the board", x, y),
            BoardError::Occupied { x, y } => write!(f, "cell ({}, {}) is already occupied", x, y),
        }
    }
}

impl std::error::Error for BoardError {}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index((x, y): Pos) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// True iff the position lies on the grid
    pub fn is_inside(&self, pos: Pos) -> bool {
        Self::index(pos).is_some()
    }

    /// Whether a block sits at `pos`
    pub fn is_occupied(&self, pos: Pos) -> Result<bool, BoardError> {
        match Self::index(pos) {
            Some(idx) => Ok(self.cells[idx].is_some()),
            None => Err(BoardError::OutOfBounds { x: pos.0, y: pos.1 }),
        }
    }

    /// Get cell at position, `None` if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Inside and empty
    #[inline]
    fn is_free(&self, pos: Pos) -> bool {
        matches!(Self::index(pos), Some(idx) if self.cells[idx].is_none())
    }

    /// True iff every cell is inside the grid and empty
    pub fn can_place(&self, cells: &[Pos]) -> bool {
        cells.iter().all(|&pos| self.is_free(pos))
    }

    /// Write `block` into every given cell.
    ///
    /// Validates all cells first; on error the board is left untouched.
    pub fn place(&mut self, cells: &[Pos], block: Block) -> Result<(), BoardError> {
        for &pos in cells {
            if self.is_occupied(pos)? {
                return Err(BoardError::Occupied { x: pos.0, y: pos.1 });
            }
        }

        for &pos in cells {
            if let Some(idx) = Self::index(pos) {
                self.cells[idx] = Some(block);
            }
        }

        Ok(())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        let start = y * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Indices of completely filled rows, ascending
    pub fn full_rows(&self) -> ArrayVec<usize, BOARD_ROWS> {
        (0..BOARD_ROWS).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the given rows and let everything above fall.
    ///
    /// Each surviving row moves down by the number of removed rows that were
    /// below it; empty rows fill the top. Rows may be given in any order and
    /// need not be contiguous. Indices outside the grid are ignored.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        let mut removed = [false; BOARD_ROWS];
        for &y in rows {
            if y < BOARD_ROWS {
                removed[y] = true;
            }
        }

        // Scan from bottom to top, compacting kept rows toward the floor
        let mut write_y = BOARD_ROWS;
        for read_y in (0..BOARD_ROWS).rev() {
            if removed[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * BOARD_COLS;
                self.cells
                    .copy_within(src..src + BOARD_COLS, write_y * BOARD_COLS);
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * BOARD_COLS].fill(None);
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_COLS)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Set a single cell directly (test setup only)
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeType;

    fn block() -> Block {
        Block::from(ShapeType::I)
    }

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set((x, y), Some(block()));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index((0, 0)), Some(0));
        assert_eq!(Board::index((9, 0)), Some(9));
        assert_eq!(Board::index((0, 1)), Some(10));
        assert_eq!(Board::index((9, 19)), Some(199));
        assert_eq!(Board::index((-1, 0)), None);
        assert_eq!(Board::index((10, 0)), None);
        assert_eq!(Board::index((0, 20)), None);
    }

    #[test]
    fn test_is_occupied_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            board.is_occupied((-1, 3)),
            Err(BoardError::OutOfBounds { x: -1, y: 3 })
        );
        assert_eq!(board.is_occupied((0, 0)), Ok(false));
    }

    #[test]
    fn test_place_rejects_without_writing() {
        let mut board = Board::new();
        board.set((5, 5), Some(block()));

        let cells = [(4, 5), (5, 5), (6, 5), (7, 5)];
        assert_eq!(
            board.place(&cells, block()),
            Err(BoardError::Occupied { x: 5, y: 5 })
        );
        assert_eq!(board.occupied_count(), 1);

        let outside = [(8, 0), (9, 0), (10, 0), (11, 0)];
        assert!(matches!(
            board.place(&outside, block()),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_clear_non_contiguous_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        fill_row(&mut board, 17);
        // markers on the rows that survive
        board.set((0, 18), Some(Block::from(ShapeType::T)));
        board.set((1, 16), Some(Block::from(ShapeType::S)));

        let full = board.full_rows();
        assert_eq!(full.as_slice(), &[17, 19]);

        board.clear_rows(&full);

        assert!(board.full_rows().is_empty());
        assert_eq!(board.get((0, 19)), Some(Some(Block::from(ShapeType::T))));
        assert_eq!(board.get((1, 18)), Some(Some(Block::from(ShapeType::S))));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_clear_rows_ignores_out_of_range() {
        let mut board = Board::new();
        board.set((3, 19), Some(block()));
        board.clear_rows(&[25]);
        assert_eq!(board.get((3, 19)), Some(Some(block())));
    }

    #[test]
    fn test_rows_iteration() {
        let board = Board::new();
        assert_eq!(board.rows().count(), BOARD_ROWS);
        assert!(board.rows().all(|r| r.len() == BOARD_COLS));
    }
}

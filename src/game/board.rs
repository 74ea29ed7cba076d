use std::fmt;

use super::player::Player;
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of contiguous pieces needed to win, and the length of every
/// scoring window.
pub const WINDOW: usize = 4;

/// Scan directions as (row step, column step): horizontal, vertical,
/// diagonal down-right (\), diagonal up-right (/).
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Engine,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'X',
            Cell::Engine => 'O',
        }
    }
}

/// A gravity-constrained grid. Row 0 is the top, row `rows - 1` the bottom.
///
/// Dimensions are fixed at construction. Cells only ever go from
/// [`Cell::Empty`] to occupied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 6x7 board
    pub fn new() -> Self {
        Board {
            rows: ROWS,
            cols: COLS,
            cells: vec![Cell::Empty; ROWS * COLS],
        }
    }

    /// Create an empty board of custom size. Both dimensions must fit a
    /// four-cell window.
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < WINDOW || cols < WINDOW {
            return Err(BoardError::TooSmall { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The middle column, rounding down on even widths.
    pub fn center_column(&self) -> usize {
        self.cols / 2
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Columns that still accept a piece, in ascending order. Empty when the
    /// board is full.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Lowest empty row in `col`, or `None` if the column is full or out of
    /// range.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Put `player`'s piece on a specific cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied. Use [`Board::drop_row`] or
    /// [`Board::drop_piece`] to find a legal target.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        let idx = self.index(row, col);
        assert_eq!(
            self.cells[idx],
            Cell::Empty,
            "cell ({row}, {col}) is already occupied"
        );
        self.cells[idx] = player.to_cell();
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }

        let row = self.drop_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.place(row, col, player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Every four-cell window on the board: all horizontal ones, then
    /// vertical, then both diagonals.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW]> + '_ {
        DIRECTIONS.iter().flat_map(move |&(dr, dc)| {
            (0..self.rows).flat_map(move |row| {
                (0..self.cols).filter_map(move |col| self.window_at(row, col, dr, dc))
            })
        })
    }

    fn window_at(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<[Cell; WINDOW]> {
        let span = WINDOW as isize - 1;
        let end_row = row as isize + dr * span;
        let end_col = col as isize + dc * span;
        if end_row < 0 || end_row >= self.rows as isize || end_col >= self.cols as isize {
            return None;
        }

        Some(std::array::from_fn(|i| {
            let r = (row as isize + dr * i as isize) as usize;
            let c = (col as isize + dc * i as isize) as usize;
            self.get(r, c)
        }))
    }

    /// Whether `player` owns four contiguous cells in any orientation.
    pub fn has_four_in_a_row(&self, player: Player) -> bool {
        let cell = player.to_cell();
        self.windows()
            .any(|window| window.iter().all(|&c| c == cell))
    }

    /// The player with four in a row, if any. Human is checked first; a legal
    /// game never has two winners.
    pub fn winner(&self) -> Option<Player> {
        [Player::Human, Player::Engine]
            .into_iter()
            .find(|&p| self.has_four_in_a_row(p))
    }

    /// A position is terminal once someone has won or no column is open.
    pub fn is_terminal(&self) -> bool {
        self.has_four_in_a_row(Player::Human)
            || self.has_four_in_a_row(Player::Engine)
            || self.legal_columns().is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = (1..=self.cols).map(|c| (c % 10).to_string()).collect();
        writeln!(f, "  {}", labels.join(" "))?;
        writeln!(f, "  {}", "-".repeat(self.cols * 2 - 1))?;
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| self.get(row, col).symbol().to_string())
                .collect();
            writeln!(f, "  {}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Board {
    /// A full standard board with no four in a row for either side. Columns
    /// alternate between `XXOOXX` and `OOXXOO` stacks.
    pub(crate) fn drawn() -> Board {
        let stack = [Player::Human, Player::Human, Player::Engine, Player::Engine];
        let mut board = Board::new();
        for col in 0..COLS {
            for i in 0..ROWS {
                let player = stack[i % stack.len()];
                let player = if col % 2 == 0 { player } else { player.other() };
                board.drop_piece(col, player).expect("column has room");
            }
        }
        board
    }
}

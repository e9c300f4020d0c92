//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the 9x9 board.
///
/// Rows and columns are both in the range 0-8; `row 0, col 0` is the top-left
/// cell. Positions index row-major into 81-element containers.
///
/// # Examples
///
/// ```
/// use gridlock_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.index(), 23);
/// assert_eq!(Position::ALL.len(), 81);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into an 81-element container.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_the_board_in_row_major_order() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn display_names_row_and_column() {
        assert_eq!(Position::new(3, 7).to_string(), "r3c7");
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn new_rejects_out_of_range_row() {
        let _ = Position::new(9, 0);
    }
}

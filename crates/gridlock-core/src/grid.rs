//! 9x9 grid containers and their 81-character string format.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9x9 grid where each cell may hold a digit.
///
/// The string format is 81 characters in row-major order: `'1'`-`'9'` for
/// filled cells and `'.'` for empty ones. This is the format puzzle data is
/// exchanged in at test and fixture boundaries.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(4, 4), Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// assert_eq!(grid.to_string().parse::<DigitGrid>().unwrap(), grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, if any.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the digit at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Number of cells holding a digit.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from parsing an 81-character grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input was not exactly 81 characters.
    #[display("expected 81 characters, found {len}")]
    BadLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character was neither a digit nor `'.'`.
    #[display("invalid character {ch:?} at index {index}")]
    BadChar {
        /// The offending character.
        ch: char,
        /// Its index in the input.
        index: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::BadLength { len });
        }
        let mut grid = Self::new();
        for (index, ch) in s.chars().enumerate() {
            let digit = match ch {
                '.' => None,
                _ => Some(Digit::from_ascii(ch).ok_or(ParseGridError::BadChar { ch, index })?),
            };
            grid.cells[index] = digit;
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// A fully-filled 9x9 grid: the answer key entries are validated against.
///
/// Every cell holds a digit by construction; lookups are infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionGrid {
    cells: [Digit; 81],
}

impl SolutionGrid {
    /// Creates a solution grid from 81 digits in row-major order.
    #[must_use]
    pub const fn from_cells(cells: [Digit; 81]) -> Self {
        Self { cells }
    }

    /// Returns the solution digit at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Digit {
        self.cells[pos.index()]
    }
}

impl TryFrom<&DigitGrid> for SolutionGrid {
    type Error = ParseSolutionError;

    fn try_from(grid: &DigitGrid) -> Result<Self, Self::Error> {
        let mut cells = [Digit::D1; 81];
        let mut empty = 0;
        for pos in Position::ALL {
            match grid.get(pos) {
                Some(digit) => cells[pos.index()] = digit,
                None => empty += 1,
            }
        }
        if empty > 0 {
            return Err(ParseSolutionError::Incomplete { empty });
        }
        Ok(Self { cells })
    }
}

/// Errors from parsing a solution-grid string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseSolutionError {
    /// The string was not a valid grid.
    #[display("{_0}")]
    Parse(ParseGridError),
    /// The grid parsed but had empty cells.
    #[display("solution grid has {empty} empty cells")]
    #[from(ignore)]
    Incomplete {
        /// Number of empty cells.
        empty: usize,
    },
}

impl FromStr for SolutionGrid {
    type Err = ParseSolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid: DigitGrid = s.parse()?;
        Self::try_from(&grid)
    }
}

impl Display for SolutionGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.cells {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const COMPLETE: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    #[test]
    fn parse_rejects_bad_length_and_bad_chars() {
        assert_eq!(
            "1.".parse::<DigitGrid>(),
            Err(ParseGridError::BadLength { len: 2 })
        );
        let bad = format!("x{}", ".".repeat(80));
        assert_eq!(
            bad.parse::<DigitGrid>(),
            Err(ParseGridError::BadChar { ch: 'x', index: 0 })
        );
        // '0' is not a puzzle digit even though it is a decimal digit.
        let zero = format!("0{}", ".".repeat(80));
        assert_eq!(
            zero.parse::<DigitGrid>(),
            Err(ParseGridError::BadChar { ch: '0', index: 0 })
        );
    }

    #[test]
    fn solution_grid_requires_every_cell() {
        let solution: SolutionGrid = COMPLETE.parse().unwrap();
        assert_eq!(solution.get(Position::new(0, 0)), Digit::D1);
        assert_eq!(solution.get(Position::new(8, 8)), Digit::D2);
        assert_eq!(solution.to_string(), COMPLETE);

        let partial = format!("{}.", &COMPLETE[..80]);
        assert_eq!(
            partial.parse::<SolutionGrid>(),
            Err(ParseSolutionError::Incomplete { empty: 1 })
        );
    }

    proptest! {
        #[test]
        fn grid_string_round_trips(s in "[.1-9]{81}") {
            let grid: DigitGrid = s.parse().unwrap();
            prop_assert_eq!(grid.to_string(), s);
        }

        #[test]
        fn solution_string_round_trips(s in "[1-9]{81}") {
            let solution: SolutionGrid = s.parse().unwrap();
            prop_assert_eq!(solution.to_string(), s);
        }
    }
}

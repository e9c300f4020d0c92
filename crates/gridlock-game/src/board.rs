use gridlock_core::{Digit, DigitGrid, Position, SolutionGrid};

use crate::CellState;

/// The in-memory puzzle: 81 cell states plus the immutable solution.
///
/// Loading replaces the board in full; given cells are locked from the start.
/// Puzzle well-formedness is not re-validated here. The data comes from a
/// trusted collaborator and malformed wire payloads are rejected before they
/// reach this type.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitGrid, Position, SolutionGrid};
/// use gridlock_game::{Board, CellState, SubmitOutcome};
///
/// let solution: SolutionGrid =
///     "185362947793148526246795183564239871931874265827516394318427659672951438459683712"
///         .parse()
///         .unwrap();
/// let givens: DigitGrid = format!("1{}", ".".repeat(80)).parse().unwrap();
/// let mut board = Board::new(&givens, solution);
///
/// assert_eq!(board.cell(Position::new(0, 0)), CellState::Given(Digit::D1));
/// assert_eq!(
///     board.submit(Position::new(0, 1), "8"),
///     SubmitOutcome::Accepted(Digit::D8)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; 81],
    solution: SolutionGrid,
}

/// Outcome of submitting raw input to a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SubmitOutcome {
    /// The entry matched the solution; the cell is now locked with the digit.
    Accepted(Digit),
    /// The entry was a digit but did not match; the cell stays open and a
    /// strike is due.
    Rejected,
    /// The raw input was not exactly one decimal digit character; the cell is
    /// cleared with no further state change.
    Discarded,
    /// The cell already holds a confirmed value; the input is ignored.
    CellLocked,
}

impl Board {
    /// Builds a board from the given clues and the full solution.
    ///
    /// Every cell present in `givens` becomes [`CellState::Given`]; all other
    /// cells start empty and unlocked.
    #[must_use]
    pub fn new(givens: &DigitGrid, solution: SolutionGrid) -> Self {
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = givens.get(pos) {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self { cells, solution }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the answer key for this puzzle.
    #[must_use]
    pub const fn solution(&self) -> &SolutionGrid {
        &self.solution
    }

    /// Validates raw keyboard input against the solution at `pos`.
    ///
    /// Input that is not exactly one decimal digit character (after trimming
    /// surrounding whitespace) is discarded without a strike. A matching
    /// digit locks the cell; anything else is rejected, including `'0'`,
    /// which is a decimal digit but can never match.
    ///
    /// Submissions to a settled cell are ignored regardless of input.
    pub fn submit(&mut self, pos: Position, raw: &str) -> SubmitOutcome {
        if self.cells[pos.index()].is_settled() {
            return SubmitOutcome::CellLocked;
        }

        let mut chars = raw.trim().chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return SubmitOutcome::Discarded;
        };
        if !ch.is_ascii_digit() {
            return SubmitOutcome::Discarded;
        }

        let expected = self.solution.get(pos);
        if Digit::from_ascii(ch) == Some(expected) {
            self.cells[pos.index()] = CellState::Locked(expected);
            SubmitOutcome::Accepted(expected)
        } else {
            SubmitOutcome::Rejected
        }
    }

    /// Whether every one of the 81 cells holds a confirmed value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_settled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn board_with_givens(givens: &str) -> Board {
        let solution: SolutionGrid = SOLUTION.parse().unwrap();
        let givens: DigitGrid = givens.parse().unwrap();
        Board::new(&givens, solution)
    }

    #[test]
    fn load_locks_given_cells_and_leaves_the_rest_open() {
        let board = board_with_givens(&format!("18{}", ".".repeat(79)));
        assert_eq!(board.cell(Position::new(0, 0)), CellState::Given(Digit::D1));
        assert_eq!(board.cell(Position::new(0, 1)), CellState::Given(Digit::D8));
        assert_eq!(board.cell(Position::new(0, 2)), CellState::Empty);
    }

    #[test]
    fn correct_entry_locks_the_cell() {
        let mut board = board_with_givens(&".".repeat(81));
        let pos = Position::new(0, 0);
        assert_eq!(board.submit(pos, "1"), SubmitOutcome::Accepted(Digit::D1));
        assert_eq!(board.cell(pos), CellState::Locked(Digit::D1));
    }

    #[test]
    fn wrong_digit_is_rejected_and_cell_stays_open() {
        let mut board = board_with_givens(&".".repeat(81));
        let pos = Position::new(0, 0);
        assert_eq!(board.submit(pos, "2"), SubmitOutcome::Rejected);
        assert_eq!(board.cell(pos), CellState::Empty);
    }

    #[test]
    fn non_digit_input_is_discarded_without_a_strike() {
        let mut board = board_with_givens(&".".repeat(81));
        let pos = Position::new(0, 0);
        assert_eq!(board.submit(pos, ""), SubmitOutcome::Discarded);
        assert_eq!(board.submit(pos, "x"), SubmitOutcome::Discarded);
        assert_eq!(board.submit(pos, "12"), SubmitOutcome::Discarded);
        assert_eq!(board.cell(pos), CellState::Empty);
    }

    #[test]
    fn zero_passes_the_filter_but_always_rejects() {
        // '0' is a decimal digit, so it reaches the comparison and loses.
        let mut board = board_with_givens(&".".repeat(81));
        assert_eq!(board.submit(Position::new(0, 0), "0"), SubmitOutcome::Rejected);
    }

    #[test]
    fn whitespace_is_trimmed_before_filtering() {
        let mut board = board_with_givens(&".".repeat(81));
        assert_eq!(
            board.submit(Position::new(0, 0), " 1 "),
            SubmitOutcome::Accepted(Digit::D1)
        );
    }

    #[test]
    fn locked_cells_ignore_all_further_input() {
        let mut board = board_with_givens(&format!("1{}", ".".repeat(80)));
        let given = Position::new(0, 0);
        assert_eq!(board.submit(given, "1"), SubmitOutcome::CellLocked);

        let pos = Position::new(0, 1);
        assert_eq!(board.submit(pos, "8"), SubmitOutcome::Accepted(Digit::D8));
        assert_eq!(board.submit(pos, "8"), SubmitOutcome::CellLocked);
        assert_eq!(board.submit(pos, "x"), SubmitOutcome::CellLocked);
        assert_eq!(board.cell(pos), CellState::Locked(Digit::D8));
    }

    #[test]
    fn completion_requires_all_81_cells_settled() {
        let mut board = board_with_givens(&format!("{}.", &SOLUTION[..80]));
        assert!(!board.is_complete());
        assert_eq!(
            board.submit(Position::new(8, 8), "2"),
            SubmitOutcome::Accepted(Digit::D2)
        );
        assert!(board.is_complete());
    }
}

use gridlock_core::{Digit, Position};

use crate::Board;

/// Per-digit count of cells currently showing that digit in a confirmed
/// state.
///
/// Counts only ever increase during a session and never exceed 9. A digit
/// whose count reaches 9 is *exhausted*: every occurrence on the board is
/// locked and its picker control becomes unselectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitTally {
    counts: [u8; 9],
}

impl DigitTally {
    /// Tallies the settled cells of a freshly loaded board.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut tally = Self::default();
        for pos in Position::ALL {
            if let Some(digit) = board.cell(pos).as_digit() {
                tally.record(digit);
            }
        }
        tally
    }

    /// Records one newly confirmed occurrence of `digit`.
    pub fn record(&mut self, digit: Digit) {
        debug_assert!(self.counts[digit.index()] < 9);
        self.counts[digit.index()] += 1;
    }

    /// Number of confirmed occurrences of `digit` (0-9).
    #[must_use]
    pub const fn count(&self, digit: Digit) -> u8 {
        self.counts[digit.index()]
    }

    /// Whether all nine occurrences of `digit` are confirmed on the board.
    #[must_use]
    pub const fn is_exhausted(&self, digit: Digit) -> bool {
        self.count(digit) == 9
    }
}

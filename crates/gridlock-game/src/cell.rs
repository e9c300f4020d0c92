use gridlock_core::Digit;

/// The state of a single board cell.
///
/// A cell is either open for entry (`Empty`) or carries a confirmed value:
/// `Given` for prefilled clues, `Locked` for player entries that matched the
/// solution. Once a cell holds a confirmed value it never changes for the
/// rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// No confirmed value yet; the cell accepts input.
    Empty,
    /// A prefilled clue, locked from load time.
    Given(Digit),
    /// A player entry confirmed against the solution.
    Locked(Digit),
}

impl CellState {
    /// Returns the displayed digit, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Empty => None,
            Self::Given(digit) | Self::Locked(digit) => Some(digit),
        }
    }

    /// Whether the cell holds a confirmed value and can no longer be edited.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_states_expose_their_digit() {
        assert_eq!(CellState::Empty.as_digit(), None);
        assert_eq!(CellState::Given(Digit::D4).as_digit(), Some(Digit::D4));
        assert_eq!(CellState::Locked(Digit::D9).as_digit(), Some(Digit::D9));

        assert!(!CellState::Empty.is_settled());
        assert!(CellState::Given(Digit::D4).is_settled());
        assert!(CellState::Locked(Digit::D9).is_settled());
    }
}

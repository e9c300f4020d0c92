use gridlock_core::{Digit, DigitGrid, Position, SolutionGrid};

use crate::{
    Board, CompletedRun, Difficulty, DigitTally, SessionClock, SubmitOutcome,
};

/// A single play-through of one puzzle.
///
/// The session owns every piece of per-game state: board, clock, strike
/// counter, per-digit tally, and the active digit selection. Starting a new
/// game constructs a fresh `Session` and replaces the old one wholesale, so
/// no field can survive a reset.
///
/// Highlighting is purely derived: [`highlighted_positions`] and
/// [`is_highlighted`] recompute from the board and the current selection on
/// every call, so a newly locked cell picks up its highlight without any
/// bookkeeping.
///
/// [`highlighted_positions`]: Session::highlighted_positions
/// [`is_highlighted`]: Session::is_highlighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    clock: SessionClock,
    tally: DigitTally,
    strikes: u32,
    selected: Option<Digit>,
    difficulty: Difficulty,
    finished: bool,
}

/// Result of routing one user entry through the session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum EntryResult {
    /// Correct digit; the cell is locked. Carries the finished run when this
    /// entry completed the puzzle.
    Accepted {
        /// `Some` exactly once per session, on the completing entry.
        completed: Option<CompletedRun>,
    },
    /// Wrong digit; the strike counter was incremented to the carried value.
    Rejected {
        /// Strike count after the increment.
        strikes: u32,
    },
    /// Input was not a single decimal digit; the cell was cleared with no
    /// state change and no strike.
    Discarded,
    /// The cell already holds a confirmed value; nothing changed.
    Ignored,
}

impl Session {
    /// Starts a fresh session from collaborator-supplied puzzle data.
    ///
    /// The board is loaded in full, strikes and selection are zeroed, the
    /// clock starts from `00:00`, and the tally is seeded from the given
    /// cells. Exhaustion is evaluated immediately and generically, even though
    /// a well-formed puzzle cannot ship an already-exhausted digit.
    #[must_use]
    pub fn new(difficulty: Difficulty, givens: &DigitGrid, solution: SolutionGrid) -> Self {
        let board = Board::new(givens, solution);
        let tally = DigitTally::from_board(&board);
        let mut clock = SessionClock::new();
        clock.start();
        let mut session = Self {
            board,
            clock,
            tally,
            strikes: 0,
            selected: None,
            difficulty,
            finished: false,
        };
        session.clear_exhausted_selection();
        session
    }

    /// Routes one keystroke at `pos` through the entry validator and applies
    /// every derived-state update.
    ///
    /// On an accepted entry, in order: the tally records the digit, the
    /// completion check runs (stopping the clock and producing the finished
    /// run exactly once), and last the exhaustion check may clear the
    /// selection. Highlights are derived on demand, so by the time the caller
    /// can observe them they already reflect both the newly locked cell and
    /// any selection clearing.
    pub fn submit(&mut self, pos: Position, raw: &str) -> EntryResult {
        match self.board.submit(pos, raw) {
            SubmitOutcome::CellLocked => EntryResult::Ignored,
            SubmitOutcome::Discarded => EntryResult::Discarded,
            SubmitOutcome::Rejected => {
                // Mistakes never end the game; no upper bound on strikes.
                self.strikes += 1;
                EntryResult::Rejected {
                    strikes: self.strikes,
                }
            }
            SubmitOutcome::Accepted(digit) => {
                self.tally.record(digit);
                let completed = self.check_completion();
                self.clear_exhausted_selection();
                EntryResult::Accepted { completed }
            }
        }
    }

    fn check_completion(&mut self) -> Option<CompletedRun> {
        if self.finished || !self.board.is_complete() {
            return None;
        }
        self.finished = true;
        self.clock.stop();
        Some(CompletedRun {
            difficulty: self.difficulty,
            time: self.clock.display(),
            strikes: self.strikes,
        })
    }

    fn clear_exhausted_selection(&mut self) {
        if let Some(digit) = self.selected
            && self.tally.is_exhausted(digit)
        {
            self.selected = None;
        }
    }

    /// Toggles the digit-picker selection.
    ///
    /// Selecting an exhausted digit is a no-op; selecting the current
    /// selection clears it.
    pub fn toggle_select(&mut self, digit: Digit) {
        if self.tally.is_exhausted(digit) {
            return;
        }
        self.selected = if self.selected == Some(digit) {
            None
        } else {
            Some(digit)
        };
    }

    /// The confirmed cells bearing the selected digit, recomputed in full.
    ///
    /// Empty when nothing is selected.
    #[must_use]
    pub fn highlighted_positions(&self) -> Vec<Position> {
        let Some(digit) = self.selected else {
            return Vec::new();
        };
        Position::ALL
            .into_iter()
            .filter(|&pos| self.board.cell(pos).as_digit() == Some(digit))
            .collect()
    }

    /// Whether the cell at `pos` is part of the current highlight set.
    #[must_use]
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.selected
            .is_some_and(|digit| self.board.cell(pos).as_digit() == Some(digit))
    }

    /// Advances the clock by one second; a no-op while paused or stopped.
    pub const fn tick(&mut self) {
        self.clock.tick();
    }

    /// Toggles between running and paused.
    pub const fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
    }

    /// The board and its cells.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The session clock.
    #[must_use]
    pub const fn clock(&self) -> &SessionClock {
        &self.clock
    }

    /// The per-digit confirmed-cell tally.
    #[must_use]
    pub const fn tally(&self) -> &DigitTally {
        &self.tally
    }

    /// Strikes accumulated so far; never resets within a session.
    #[must_use]
    pub const fn strikes(&self) -> u32 {
        self.strikes
    }

    /// The active digit selection, if any.
    #[must_use]
    pub const fn selected_digit(&self) -> Option<Digit> {
        self.selected
    }

    /// The difficulty this session was started at.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether the puzzle has been completed.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

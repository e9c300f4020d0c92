//! Game-session state machine for a solution-validated number-place game.
//!
//! A session is created from externally supplied puzzle data (the given cells
//! plus the complete solution) and owns every piece of per-game state: the
//! board, the strike counter, the pausable clock, the per-digit tally, and
//! the active digit selection. User entries are validated against the known
//! solution; a correct entry locks its cell permanently, a wrong one counts a
//! strike and leaves the cell open for retry.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{DigitGrid, Position, SolutionGrid};
//! use gridlock_game::{Difficulty, EntryResult, Session};
//!
//! let solution: SolutionGrid =
//!     "185362947793148526246795183564239871931874265827516394318427659672951438459683712"
//!         .parse()
//!         .unwrap();
//! let givens: DigitGrid = format!("1{}", ".".repeat(80)).parse().unwrap();
//! let mut session = Session::new(Difficulty::Medium, &givens, solution);
//!
//! // The solution digit at r0c1 is 8; anything else is a strike.
//! assert!(matches!(
//!     session.submit(Position::new(0, 1), "8"),
//!     EntryResult::Accepted { completed: None }
//! ));
//! assert_eq!(session.submit(Position::new(0, 2), "9"), EntryResult::Rejected { strikes: 1 });
//! ```

mod board;
mod cell;
mod clock;
mod difficulty;
mod leaderboard;
mod session;
mod tally;

pub use self::{
    board::{Board, SubmitOutcome},
    cell::CellState,
    clock::{ClockPhase, SessionClock, format_clock},
    difficulty::{Difficulty, ParseDifficultyError},
    leaderboard::{CompletedRun, Qualification, RankedScore, qualifies},
    session::{EntryResult, Session},
    tally::DigitTally,
};

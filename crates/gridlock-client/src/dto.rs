//! Wire types for the puzzle and leaderboard collaborators.
//!
//! Shapes mirror the collaborator JSON exactly; unknown fields are ignored.
//! Conversion into domain types is fallible and typed; a malformed payload
//! is rejected here so the game session never sees it.

use gridlock_core::{Digit, DigitGrid, Position, SolutionGrid};
use gridlock_game::{CompletedRun, Difficulty, RankedScore};
use serde::{Deserialize, Serialize};

/// One cell of the new-game payload.
///
/// Prefilled cells carry their digit in `value`; open cells ship
/// `prefilled: false` (the collaborator sends `value: 0` for them, which is
/// ignored).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CellDto {
    #[serde(default)]
    pub value: u8,
    pub prefilled: bool,
}

/// Response of the puzzle collaborator's new-game endpoint: a 9x9 board plus
/// the full 9x9 solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameDto {
    pub board: Vec<Vec<CellDto>>,
    pub solution: Vec<Vec<u8>>,
}

/// Errors converting a collaborator payload into domain grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DtoError {
    /// A grid did not have exactly 9 rows.
    #[display("expected 9 rows, found {rows}")]
    BadRowCount { rows: usize },
    /// A row did not have exactly 9 columns.
    #[display("row {row} has {cols} columns")]
    BadColCount { row: u8, cols: usize },
    /// A prefilled or solution value was outside 1-9.
    #[display("invalid digit {value} at r{row}c{col}")]
    BadDigit { row: u8, col: u8, value: u8 },
}

impl NewGameDto {
    /// Splits the payload into the given-cell grid and the solution.
    pub fn into_grids(self) -> Result<(DigitGrid, SolutionGrid), DtoError> {
        check_dimensions(&self.board)?;
        check_dimensions(&self.solution)?;

        let mut givens = DigitGrid::new();
        let mut solution = [Digit::D1; 81];
        for pos in Position::ALL {
            let (row, col) = (usize::from(pos.row()), usize::from(pos.col()));

            let cell = self.board[row][col];
            if cell.prefilled {
                let digit = Digit::new(cell.value).ok_or(DtoError::BadDigit {
                    row: pos.row(),
                    col: pos.col(),
                    value: cell.value,
                })?;
                givens.set(pos, Some(digit));
            }

            let value = self.solution[row][col];
            solution[pos.index()] = Digit::new(value).ok_or(DtoError::BadDigit {
                row: pos.row(),
                col: pos.col(),
                value,
            })?;
        }
        Ok((givens, SolutionGrid::from_cells(solution)))
    }
}

fn check_dimensions<T>(rows: &[Vec<T>]) -> Result<(), DtoError> {
    if rows.len() != 9 {
        return Err(DtoError::BadRowCount { rows: rows.len() });
    }
    for (row, cols) in (0u8..).zip(rows) {
        if cols.len() != 9 {
            return Err(DtoError::BadColCount {
                row,
                cols: cols.len(),
            });
        }
    }
    Ok(())
}

/// One leaderboard row as stored by the leaderboard collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntryDto {
    pub name: String,
    pub time: String,
    pub strikes: u32,
}

impl LeaderboardEntryDto {
    /// Projects the ranked score the qualifier compares against.
    #[must_use]
    pub fn score(&self) -> RankedScore {
        RankedScore {
            strikes: self.strikes,
            time: self.time.clone(),
        }
    }
}

/// Ranked top-5 entries per difficulty, ascending by strikes then time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsDto {
    #[serde(default)]
    pub easy: Vec<LeaderboardEntryDto>,
    #[serde(default)]
    pub medium: Vec<LeaderboardEntryDto>,
    #[serde(default)]
    pub hard: Vec<LeaderboardEntryDto>,
}

impl StandingsDto {
    /// The ranked entries for one difficulty.
    #[must_use]
    pub fn entries(&self, difficulty: Difficulty) -> &[LeaderboardEntryDto] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

/// Response of the leaderboard read endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponseDto {
    pub leaderboard: StandingsDto,
}

/// Payload for the leaderboard write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardUpdateDto {
    pub difficulty: String,
    pub name: String,
    pub time: String,
    pub strikes: u32,
}

impl LeaderboardUpdateDto {
    /// Placeholder used when the player submits a blank name.
    pub const DEFAULT_NAME: &'static str = "Anonymous";

    /// Builds the submission payload for a finished run.
    ///
    /// A blank (or all-whitespace) name falls back to [`Self::DEFAULT_NAME`].
    #[must_use]
    pub fn new(run: &CompletedRun, name: &str) -> Self {
        let name = name.trim();
        Self {
            difficulty: run.difficulty.to_string(),
            name: if name.is_empty() {
                Self::DEFAULT_NAME.to_owned()
            } else {
                name.to_owned()
            },
            time: run.time.clone(),
            strikes: run.strikes,
        }
    }
}

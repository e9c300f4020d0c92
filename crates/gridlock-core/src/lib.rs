//! Foundational types for the Gridlock game engine.
//!
//! This crate holds the small, dependency-free vocabulary shared by the game
//! session and the client controller:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: a (row, col) coordinate on the 9x9 board
//! - [`DigitGrid`]: a 9x9 grid of optional digits, parsed from and displayed
//!   as 81-character strings (`.` for empty cells)
//! - [`SolutionGrid`]: a fully-filled 9x9 grid, the immutable answer key a
//!   session validates entries against
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, DigitGrid, Position};
//!
//! let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
//! assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
//! assert_eq!(grid.get(Position::new(8, 8)), None);
//! ```

pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    grid::{DigitGrid, ParseGridError, ParseSolutionError, SolutionGrid},
    position::Position,
};

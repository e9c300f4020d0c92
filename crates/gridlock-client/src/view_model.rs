//! Pure projections from controller state to renderable view models.
//!
//! Builders here take references and allocate a fresh snapshot on every call;
//! nothing is cached, so the output can never drift from the session state it
//! was derived from.

use gridlock_core::{Digit, Position};
use gridlock_game::Session;

use crate::{controller::Prompt, dto::LeaderboardEntryDto};

/// Which pause control the shell should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseIndicator {
    /// The clock is running (or stopped); show "pause".
    CanPause,
    /// The clock is paused; show "resume" and mask the board.
    CanResume,
}

/// One rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// The digit to draw, if the cell is settled.
    pub digit: Option<Digit>,
    /// Part of the original puzzle; not editable.
    pub given: bool,
    /// Confirmed by the player; not editable.
    pub locked: bool,
    /// Bears the currently selected digit.
    pub highlighted: bool,
}

/// One digit-picker key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitKeyView {
    pub digit: Digit,
    /// Drawn as the active selection. Never true for an exhausted key.
    pub selected: bool,
    /// All nine cells of this digit are settled; the key is disabled.
    pub exhausted: bool,
}

/// Full per-frame snapshot of the play surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameViewModel {
    /// All 81 cells in row-major order.
    pub cells: Vec<CellView>,
    pub digit_keys: [DigitKeyView; 9],
    pub strikes_text: String,
    pub clock_text: String,
    pub pause: PauseIndicator,
}

/// Builds the play-surface snapshot for the current session state.
#[must_use]
pub fn build_game_view(session: &Session) -> GameViewModel {
    let cells = Position::ALL
        .into_iter()
        .map(|pos| {
            let state = session.board().cell(pos);
            CellView {
                digit: state.as_digit(),
                given: state.is_given(),
                locked: state.is_locked(),
                highlighted: session.is_highlighted(pos),
            }
        })
        .collect();
    let digit_keys = Digit::ALL.map(|digit| DigitKeyView {
        digit,
        selected: session.selected_digit() == Some(digit),
        exhausted: session.tally().is_exhausted(digit),
    });
    GameViewModel {
        cells,
        digit_keys,
        strikes_text: format!("Strikes: {}", session.strikes()),
        clock_text: session.clock().display(),
        pause: if session.clock().phase().is_paused() {
            PauseIndicator::CanResume
        } else {
            PauseIndicator::CanPause
        },
    }
}

/// Rendered content of the completion modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub message: String,
    pub details: String,
    /// Whether the modal carries the name-entry form and submit button.
    pub wants_name: bool,
}

/// Builds the modal content for an open prompt.
#[must_use]
pub fn build_modal_view(prompt: &Prompt) -> ModalView {
    match prompt {
        Prompt::WinSummary(run) => ModalView {
            message: format!("Congrats! You beat {} mode!", run.difficulty.label()),
            details: format!("Final Time: {} | Strikes: {}", run.time, run.strikes),
            wants_name: false,
        },
        Prompt::LeaderboardEntry(run) => ModalView {
            message: format!(
                "Congrats! You made the {} leaderboard!",
                run.difficulty.label()
            ),
            details: format!("Final Time: {} | Strikes: {}", run.time, run.strikes),
            wants_name: true,
        },
    }
}

/// Projects one difficulty's standings into displayable `[name, time, strikes]`
/// rows, in the ranking order the collaborator returned.
#[must_use]
pub fn build_standings_rows(entries: &[LeaderboardEntryDto]) -> Vec<[String; 3]> {
    entries
        .iter()
        .map(|entry| {
            [
                entry.name.clone(),
                entry.time.clone(),
                entry.strikes.to_string(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use gridlock_core::{DigitGrid, SolutionGrid};
    use gridlock_game::{CompletedRun, Difficulty};

    use super::*;

    const SOLUTION: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn session_with_givens(givens: &str) -> Session {
        let solution: SolutionGrid = SOLUTION.parse().unwrap();
        let givens: DigitGrid = givens.parse().unwrap();
        Session::new(Difficulty::Easy, &givens, solution)
    }

    #[test]
    fn game_view_reflects_cells_selection_and_clock() {
        let mut session = session_with_givens(&format!("18{}", ".".repeat(79)));
        session.toggle_select(Digit::D8);
        session.tick();

        let view = build_game_view(&session);
        assert_eq!(view.cells.len(), 81);

        let first = view.cells[0];
        assert_eq!(first.digit, Some(Digit::D1));
        assert!(first.given && !first.locked && !first.highlighted);

        let second = view.cells[1];
        assert_eq!(second.digit, Some(Digit::D8));
        assert!(second.highlighted);

        assert!(view.cells[2].digit.is_none());

        assert!(view.digit_keys[7].selected);
        assert!(!view.digit_keys[0].selected);
        assert_eq!(view.clock_text, "00:01");
        assert_eq!(view.strikes_text, "Strikes: 0");
        assert_eq!(view.pause, PauseIndicator::CanPause);
    }

    #[test]
    fn locked_cells_render_distinctly_from_givens() {
        let mut session = session_with_givens(&".".repeat(81));
        session.submit(Position::new(0, 0), "1");

        let view = build_game_view(&session);
        assert!(view.cells[0].locked);
        assert!(!view.cells[0].given);
        assert_eq!(view.cells[0].digit, Some(Digit::D1));
    }

    #[test]
    fn paused_session_offers_resume() {
        let mut session = session_with_givens(&".".repeat(81));
        session.toggle_pause();
        assert_eq!(build_game_view(&session).pause, PauseIndicator::CanResume);
    }

    #[test]
    fn exhausted_digit_keys_are_disabled() {
        // All nine 5-cells prefilled.
        let mut givens = vec![b'.'; 81];
        for (index, b) in SOLUTION.bytes().enumerate() {
            if b == b'5' {
                givens[index] = b'5';
            }
        }
        let session = session_with_givens(&String::from_utf8(givens).unwrap());

        let view = build_game_view(&session);
        assert!(view.digit_keys[4].exhausted);
        assert!(!view.digit_keys[4].selected);
        assert!(!view.digit_keys[0].exhausted);
    }

    #[test]
    fn modal_text_matches_the_prompt_kind() {
        let run = CompletedRun {
            difficulty: Difficulty::Hard,
            time: "07:42".to_owned(),
            strikes: 2,
        };

        let win = build_modal_view(&Prompt::WinSummary(run.clone()));
        assert_eq!(win.message, "Congrats! You beat Hard mode!");
        assert_eq!(win.details, "Final Time: 07:42 | Strikes: 2");
        assert!(!win.wants_name);

        let entry = build_modal_view(&Prompt::LeaderboardEntry(run));
        assert_eq!(entry.message, "Congrats! You made the Hard leaderboard!");
        assert!(entry.wants_name);
    }

    #[test]
    fn standings_rows_preserve_ranking_order() {
        let entries = vec![
            LeaderboardEntryDto {
                name: "ada".to_owned(),
                time: "01:10".to_owned(),
                strikes: 0,
            },
            LeaderboardEntryDto {
                name: "bob".to_owned(),
                time: "00:50".to_owned(),
                strikes: 2,
            },
        ];
        let rows = build_standings_rows(&entries);
        assert_eq!(rows[0], ["ada".to_owned(), "01:10".to_owned(), "0".to_owned()]);
        assert_eq!(rows[1][2], "2");
    }
}

//! Event-driven controller for the game session and its collaborators.
//!
//! All state transitions happen on discrete events (a keystroke, a clock
//! tick, a button press, or the arrival of a collaborator response), and each
//! event runs to completion before the next. Collaborator calls are
//! fire-and-forget: the controller emits an [`Effect`], the shell performs it
//! asynchronously, and the outcome comes back as another [`ClientEvent`]. A
//! response that never arrives simply leaves its region of the state stale.

use gridlock_core::{Digit, Position};
use gridlock_game::{
    CompletedRun, Difficulty, Qualification, Session, qualifies,
};

use crate::dto::{LeaderboardUpdateDto, NewGameDto, StandingsDto};

/// Where the client is deployed.
///
/// Local deployments have no leaderboard behind them; completion always
/// routes to the ordinary win summary and the qualification read is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DeploymentMode {
    Local,
    Hosted,
}

/// Why a standings read was issued, so the response routes correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingsPurpose {
    /// Refresh the displayed leaderboard tables.
    Display,
    /// Decide qualification for a just-finished run.
    Qualification,
}

/// Inputs to the controller: user interactions plus collaborator responses.
#[derive(Debug)]
pub enum ClientEvent {
    /// The start/restart control was pressed with a difficulty selected.
    StartGame(Difficulty),
    /// The puzzle collaborator answered a fetch.
    PuzzleReady {
        difficulty: Difficulty,
        payload: NewGameDto,
    },
    /// The puzzle fetch failed; the board stays as it was.
    PuzzleFailed { difficulty: Difficulty },
    /// Raw keyboard input arrived in the cell at `pos`.
    CellInput { pos: Position, raw: String },
    /// A digit-picker control was pressed.
    DigitPicked(Digit),
    /// The pause/resume control was pressed.
    PauseToggled,
    /// One second elapsed.
    ClockTick,
    /// The leaderboard read answered.
    StandingsReady {
        purpose: StandingsPurpose,
        standings: StandingsDto,
    },
    /// The leaderboard read failed.
    StandingsFailed { purpose: StandingsPurpose },
    /// The player submitted the leaderboard name-entry form.
    EntrySubmitted { name: String },
    /// The leaderboard write was acknowledged.
    EntryAcknowledged,
    /// The leaderboard write failed.
    EntryFailed,
    /// The win or leaderboard modal was dismissed.
    PromptDismissed,
}

/// Side effects the shell must perform on the controller's behalf.
///
/// Each async effect reports back via the matching [`ClientEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Request a new puzzle at the given difficulty.
    FetchPuzzle(Difficulty),
    /// Read the current standings for the given purpose.
    FetchStandings(StandingsPurpose),
    /// Write one leaderboard entry.
    SubmitEntry(LeaderboardUpdateDto),
}

/// The modal surface currently shown, if any.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Prompt {
    /// Ordinary completion summary.
    WinSummary(CompletedRun),
    /// Leaderboard qualification: name entry and submit.
    LeaderboardEntry(CompletedRun),
}

/// Client state: the live session plus everything around it.
#[derive(Debug)]
pub struct Controller {
    mode: DeploymentMode,
    session: Option<Session>,
    /// Difficulty of the in-flight puzzle fetch; responses for anything else
    /// are stale and dropped, so a restart atomically supersedes them.
    requested: Option<Difficulty>,
    standings: StandingsDto,
    prompt: Option<Prompt>,
    /// Run awaiting a qualification response.
    pending_run: Option<CompletedRun>,
}

impl Controller {
    /// Creates a controller with no session loaded.
    #[must_use]
    pub fn new(mode: DeploymentMode) -> Self {
        Self {
            mode,
            session: None,
            requested: None,
            standings: StandingsDto::default(),
            prompt: None,
            pending_run: None,
        }
    }

    /// Applies one event and returns the effects to perform.
    pub fn handle(&mut self, event: ClientEvent) -> Vec<Effect> {
        match event {
            ClientEvent::StartGame(difficulty) => self.start_game(difficulty),
            ClientEvent::PuzzleReady {
                difficulty,
                payload,
            } => self.apply_puzzle(difficulty, payload),
            ClientEvent::PuzzleFailed { difficulty } => {
                log::warn!("puzzle fetch failed for {difficulty}; board left unpopulated");
                if self.requested == Some(difficulty) {
                    self.requested = None;
                }
                Vec::new()
            }
            ClientEvent::CellInput { pos, raw } => self.cell_input(pos, &raw),
            ClientEvent::DigitPicked(digit) => {
                if let Some(session) = &mut self.session {
                    session.toggle_select(digit);
                }
                Vec::new()
            }
            ClientEvent::PauseToggled => {
                if let Some(session) = &mut self.session {
                    session.toggle_pause();
                }
                Vec::new()
            }
            ClientEvent::ClockTick => {
                if let Some(session) = &mut self.session {
                    session.tick();
                }
                Vec::new()
            }
            ClientEvent::StandingsReady { purpose, standings } => match purpose {
                StandingsPurpose::Display => {
                    self.standings = standings;
                    Vec::new()
                }
                StandingsPurpose::Qualification => self.judge_qualification(&standings),
            },
            ClientEvent::StandingsFailed { purpose } => {
                log::warn!("leaderboard read failed ({purpose:?}); display left stale");
                if matches!(purpose, StandingsPurpose::Qualification)
                    && let Some(run) = self.pending_run.take()
                {
                    // Qualification cannot be determined; fall back to the
                    // ordinary win summary.
                    self.prompt = Some(Prompt::WinSummary(run));
                }
                Vec::new()
            }
            ClientEvent::EntrySubmitted { name } => self.submit_entry(&name),
            ClientEvent::EntryAcknowledged => {
                self.prompt = None;
                // Re-query so the refreshed rankings include the new entry.
                vec![Effect::FetchStandings(StandingsPurpose::Display)]
            }
            ClientEvent::EntryFailed => {
                // The prompt stays open with the run intact so the player can
                // resubmit.
                log::warn!("leaderboard write failed; rankings left stale");
                Vec::new()
            }
            ClientEvent::PromptDismissed => {
                self.prompt = None;
                Vec::new()
            }
        }
    }

    fn start_game(&mut self, difficulty: Difficulty) -> Vec<Effect> {
        log::info!("starting new game at {difficulty}");
        self.prompt = None;
        self.pending_run = None;
        self.requested = Some(difficulty);
        vec![
            Effect::FetchPuzzle(difficulty),
            Effect::FetchStandings(StandingsPurpose::Display),
        ]
    }

    fn apply_puzzle(&mut self, difficulty: Difficulty, payload: NewGameDto) -> Vec<Effect> {
        if self.requested != Some(difficulty) {
            log::warn!("dropping stale puzzle response for {difficulty}");
            return Vec::new();
        }
        self.requested = None;
        match payload.into_grids() {
            Ok((givens, solution)) => {
                // Constructing the session wholesale supersedes every piece
                // of prior state at once: clock, strikes, selection, cells.
                self.session = Some(Session::new(difficulty, &givens, solution));
            }
            Err(err) => {
                log::warn!("puzzle payload rejected: {err}");
            }
        }
        Vec::new()
    }

    fn cell_input(&mut self, pos: Position, raw: &str) -> Vec<Effect> {
        let Some(session) = &mut self.session else {
            return Vec::new();
        };
        if let gridlock_game::EntryResult::Accepted {
            completed: Some(run),
        } = session.submit(pos, raw)
        {
            return self.finish_run(run);
        }
        Vec::new()
    }

    fn finish_run(&mut self, run: CompletedRun) -> Vec<Effect> {
        log::info!(
            "puzzle completed: difficulty={}, time={}, strikes={}",
            run.difficulty,
            run.time,
            run.strikes
        );
        if self.mode.is_local() {
            self.prompt = Some(Prompt::WinSummary(run));
            return Vec::new();
        }
        self.pending_run = Some(run);
        vec![Effect::FetchStandings(StandingsPurpose::Qualification)]
    }

    fn judge_qualification(&mut self, standings: &StandingsDto) -> Vec<Effect> {
        let Some(run) = self.pending_run.take() else {
            return Vec::new();
        };
        let scores: Vec<_> = standings
            .entries(run.difficulty)
            .iter()
            .map(crate::dto::LeaderboardEntryDto::score)
            .collect();
        self.prompt = Some(match qualifies(&run, &scores) {
            Qualification::QualifiesForBoard => Prompt::LeaderboardEntry(run),
            Qualification::OrdinaryWin => Prompt::WinSummary(run),
        });
        Vec::new()
    }

    fn submit_entry(&mut self, name: &str) -> Vec<Effect> {
        // The prompt is kept open until the write is acknowledged, so a
        // failed write can be resubmitted.
        let Some(Prompt::LeaderboardEntry(run)) = &self.prompt else {
            log::warn!("entry submitted with no leaderboard prompt open");
            return Vec::new();
        };
        vec![Effect::SubmitEntry(LeaderboardUpdateDto::new(run, name))]
    }

    /// The live session, if a puzzle has been loaded.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The cached standings used for the leaderboard tables.
    #[must_use]
    pub fn standings(&self) -> &StandingsDto {
        &self.standings
    }

    /// The open modal, if any.
    #[must_use]
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// The deployment mode this controller was created with.
    #[must_use]
    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }
}

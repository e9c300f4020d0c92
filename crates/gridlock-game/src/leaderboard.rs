use crate::Difficulty;

/// One ranked score on a difficulty's top-5 board, as supplied by the
/// leaderboard collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedScore {
    /// Strike count for the run.
    pub strikes: u32,
    /// Completion time as a zero-padded `mm:ss` string.
    pub time: String,
}

/// A finished run, frozen at the moment of completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedRun {
    /// Difficulty the run was played at.
    pub difficulty: Difficulty,
    /// Final clock display, frozen when the last cell locked.
    pub time: String,
    /// Final strike count.
    pub strikes: u32,
}

/// Whether a finished run earns a place on the top-5 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Qualification {
    /// The run displaces or extends the current top 5.
    QualifiesForBoard,
    /// A plain win; no leaderboard prompt.
    OrdinaryWin,
}

/// Decides leaderboard qualification against the current ranked top 5.
///
/// `standings` is trusted as supplied: ascending by strikes, ties broken by
/// `mm:ss` time under lexical comparison (which equals chronological order
/// because both fields are zero-padded to fixed width). A run qualifies iff
/// any of:
///
/// - fewer than 5 entries exist,
/// - its strike count is strictly below the 5th-place entry's, or
/// - exactly 5 entries exist, strikes tie with 5th place, and its time sorts
///   strictly before the 5th-place time.
///
/// Failing to qualify is a valid outcome, not an error.
#[must_use]
pub fn qualifies(run: &CompletedRun, standings: &[RankedScore]) -> Qualification {
    if standings.len() < 5 {
        return Qualification::QualifiesForBoard;
    }
    let fifth = &standings[4];
    if run.strikes < fifth.strikes {
        return Qualification::QualifiesForBoard;
    }
    if standings.len() == 5 && run.strikes == fifth.strikes && run.time.as_str() < fifth.time.as_str()
    {
        return Qualification::QualifiesForBoard;
    }
    Qualification::OrdinaryWin
}

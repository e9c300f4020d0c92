/// Phase of the session clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClockPhase {
    /// Not advancing; the initial state and the state after completion.
    Stopped,
    /// Advancing one second per tick.
    Running,
    /// Temporarily halted; resumable without losing elapsed time.
    Paused,
}

/// A pausable elapsed-seconds counter driven by once-per-second ticks.
///
/// The clock itself has no timer; the embedding shell calls [`tick`] once per
/// elapsed second, and ticks are no-ops unless the clock is running. Display
/// is zero-padded `mm:ss`; the minutes field widens past 99 minutes instead
/// of overflowing.
///
/// [`tick`]: SessionClock::tick
///
/// # Examples
///
/// ```
/// use gridlock_game::SessionClock;
///
/// let mut clock = SessionClock::new();
/// clock.start();
/// for _ in 0..125 {
///     clock.tick();
/// }
/// assert_eq!(clock.display(), "02:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    seconds: u32,
    phase: ClockPhase,
}

impl SessionClock {
    /// Creates a stopped clock reading `00:00`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seconds: 0,
            phase: ClockPhase::Stopped,
        }
    }

    /// Zeroes the elapsed time and starts running.
    pub const fn start(&mut self) {
        self.seconds = 0;
        self.phase = ClockPhase::Running;
    }

    /// Advances by one second; a no-op unless running.
    pub const fn tick(&mut self) {
        if self.phase.is_running() {
            self.seconds += 1;
        }
    }

    /// Toggles between running and paused; no effect while stopped.
    pub const fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            ClockPhase::Running => ClockPhase::Paused,
            ClockPhase::Paused => ClockPhase::Running,
            ClockPhase::Stopped => ClockPhase::Stopped,
        };
    }

    /// Halts the clock, freezing the displayed value.
    pub const fn stop(&mut self) {
        self.phase = ClockPhase::Stopped;
    }

    /// Stops and zeroes the display for a new game.
    pub const fn reset(&mut self) {
        self.phase = ClockPhase::Stopped;
        self.seconds = 0;
    }

    /// Elapsed seconds.
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> ClockPhase {
        self.phase
    }

    /// Formats the elapsed time as `mm:ss`.
    #[must_use]
    pub fn display(&self) -> String {
        format_clock(self.seconds)
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats elapsed seconds as `mm:ss`, both fields zero-padded to width 2.
///
/// Fixed-width zero padding is what makes lexical comparison of two clock
/// strings match chronological order, which the leaderboard tie-break relies
/// on. Minutes beyond 99 keep their full width.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{mins:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pads_both_fields() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(99 * 60 + 59), "99:59");
    }

    #[test]
    fn minutes_widen_past_two_digits() {
        assert_eq!(format_clock(100 * 60), "100:00");
    }

    #[test]
    fn display_sorts_lexically_in_chronological_order_below_100_minutes() {
        // The leaderboard tie-break compares these strings lexically.
        let mut prev = format_clock(0);
        for seconds in 1..6000 {
            let next = format_clock(seconds);
            assert!(prev.as_str() < next.as_str(), "{prev} !< {next}");
            prev = next;
        }
    }

    #[test]
    fn ticks_advance_only_while_running() {
        let mut clock = SessionClock::new();
        clock.tick();
        assert_eq!(clock.seconds(), 0);

        clock.start();
        clock.tick();
        clock.tick();
        assert_eq!(clock.seconds(), 2);

        clock.toggle_pause();
        assert!(clock.phase().is_paused());
        clock.tick();
        assert_eq!(clock.seconds(), 2);

        // Resuming preserves elapsed time across the pause interval.
        clock.toggle_pause();
        clock.tick();
        assert_eq!(clock.seconds(), 3);
    }

    #[test]
    fn stop_freezes_and_reset_zeroes() {
        let mut clock = SessionClock::new();
        clock.start();
        clock.tick();
        clock.stop();
        clock.tick();
        assert_eq!(clock.seconds(), 1);
        assert_eq!(clock.display(), "00:01");

        clock.reset();
        assert_eq!(clock.display(), "00:00");
        assert!(clock.phase().is_stopped());
    }

    #[test]
    fn toggle_pause_is_inert_while_stopped() {
        let mut clock = SessionClock::new();
        clock.toggle_pause();
        assert!(clock.phase().is_stopped());
    }

    #[test]
    fn start_zeroes_previous_elapsed_time() {
        let mut clock = SessionClock::new();
        clock.start();
        clock.tick();
        clock.start();
        assert_eq!(clock.seconds(), 0);
        assert!(clock.phase().is_running());
    }
}

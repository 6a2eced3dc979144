use crate::domain::Mode;
use crate::ticker::{IntervalTicker, TickSource};
use chrono::{DateTime, Local};
use tracing::{debug, info};

/// Emitted once when a countdown reaches zero on its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEvent {
    pub mode: Mode,
    pub finished_at: DateTime<Local>,
}

impl CompletionEvent {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            finished_at: Local::now(),
        }
    }
}

/// Countdown engine.
///
/// Holds the mutable timer state and the tick source that drives it. The
/// tick source is active exactly while the timer is running with time
/// left; every transition back to idle stops it.
#[derive(Debug)]
pub struct FocusTimer<T: TickSource = IntervalTicker> {
    mode: Mode,
    time_left_secs: u32,
    is_running: bool,
    ticker: T,
}

impl FocusTimer<IntervalTicker> {
    pub fn new(mode: Mode) -> Self {
        Self::with_ticker(mode, IntervalTicker::new())
    }
}

impl Default for FocusTimer<IntervalTicker> {
    fn default() -> Self {
        Self::new(Mode::Focus)
    }
}

impl<T: TickSource> FocusTimer<T> {
    /// Create an idle timer for `mode` driven by `ticker`
    pub fn with_ticker(mode: Mode, mut ticker: T) -> Self {
        ticker.stop();
        Self {
            mode,
            time_left_secs: mode.duration_secs(),
            is_running: false,
            ticker,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn time_left_secs(&self) -> u32 {
        self.time_left_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    #[cfg(test)]
    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    #[cfg(test)]
    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    /// Fraction of the current countdown already elapsed, in [0, 1]
    pub fn progress_fraction(&self) -> f64 {
        let duration = self.mode.duration_secs();
        f64::from(duration - self.time_left_secs) / f64::from(duration)
    }

    /// Remaining time as "MM:SS"
    pub fn formatted_time(&self) -> String {
        super::format_clock(self.time_left_secs)
    }

    /// Switch to `mode` and reload its full duration. Always stops the timer,
    /// even when `mode` is the current one.
    pub fn switch_mode(&mut self, mode: Mode) {
        debug!(from = %self.mode, to = %mode, "switch mode");
        self.mode = mode;
        self.time_left_secs = mode.duration_secs();
        self.halt();
    }

    /// Flip between running and paused.
    ///
    /// At zero the flag still flips but the tick source stays off, so nothing
    /// moves until a reset or mode switch reloads the time.
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running && self.time_left_secs > 0 {
            self.ticker.start();
        } else {
            self.ticker.stop();
        }
        debug!(
            mode = %self.mode,
            running = self.is_running,
            time_left = self.time_left_secs,
            "toggle running"
        );
    }

    /// Reload the current mode's full duration and stop
    pub fn reset(&mut self) {
        debug!(mode = %self.mode, "reset");
        self.time_left_secs = self.mode.duration_secs();
        self.halt();
    }

    /// Advance the countdown by one second.
    ///
    /// The step from 1 to 0 stops the timer and returns the completion
    /// event. Ticks while stopped or already at zero do nothing.
    pub fn tick(&mut self) -> Option<CompletionEvent> {
        if !self.is_running || self.time_left_secs == 0 {
            return None;
        }

        if self.time_left_secs > 1 {
            self.time_left_secs -= 1;
            return None;
        }

        self.time_left_secs = 0;
        self.halt();
        info!(mode = %self.mode, "countdown complete");
        Some(CompletionEvent::new(self.mode))
    }

    /// Apply every tick the tick source has accumulated since the last call
    pub fn advance(&mut self) -> Vec<CompletionEvent> {
        let ticks = self.ticker.take_ticks();
        let mut events = Vec::new();

        for _ in 0..ticks {
            if !self.is_running {
                break;
            }
            if let Some(event) = self.tick() {
                events.push(event);
            }
        }

        events
    }

    fn halt(&mut self) {
        self.is_running = false;
        self.ticker.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::ManualTicker;

    fn manual_timer(mode: Mode) -> FocusTimer<ManualTicker> {
        FocusTimer::with_ticker(mode, ManualTicker::new())
    }

    fn run_ticks(timer: &mut FocusTimer<ManualTicker>, n: u32) -> Vec<CompletionEvent> {
        (0..n).filter_map(|_| timer.tick()).collect()
    }

    #[test]
    fn test_initial_state() {
        let timer = FocusTimer::default();
        assert_eq!(timer.mode(), Mode::Focus);
        assert_eq!(timer.time_left_secs(), 1500);
        assert!(!timer.is_running());
        assert!(!timer.ticker().is_active());
        assert_eq!(timer.formatted_time(), "25:00");
    }

    #[test]
    fn test_switch_mode_loads_duration_and_stops() {
        for &mode in Mode::all() {
            let mut timer = manual_timer(Mode::Focus);
            timer.toggle_running();
            timer.switch_mode(mode);

            assert_eq!(timer.mode(), mode);
            assert_eq!(timer.time_left_secs(), mode.duration_secs());
            assert!(!timer.is_running());
            assert!(!timer.ticker().is_active());
        }
    }

    #[test]
    fn test_switch_to_same_mode_resets() {
        let mut timer = manual_timer(Mode::ShortBreak);
        timer.toggle_running();
        run_ticks(&mut timer, 42);
        timer.switch_mode(Mode::ShortBreak);

        assert_eq!(timer.time_left_secs(), 300);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_switch_mode_abandons_running_focus() {
        let mut timer = manual_timer(Mode::Focus);
        timer.toggle_running();
        let events = run_ticks(&mut timer, 700);
        assert!(events.is_empty());
        assert_eq!(timer.time_left_secs(), 800);

        timer.switch_mode(Mode::ShortBreak);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.time_left_secs(), 300);
        assert!(!timer.is_running());
        assert!(timer.tick().is_none());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut timer = manual_timer(Mode::Focus);
        timer.toggle_running();
        run_ticks(&mut timer, 10);

        let before = (timer.is_running(), timer.time_left_secs());
        timer.toggle_running();
        timer.toggle_running();
        assert_eq!((timer.is_running(), timer.time_left_secs()), before);
    }

    #[test]
    fn test_toggle_controls_ticker() {
        let mut timer = manual_timer(Mode::Focus);
        timer.toggle_running();
        assert!(timer.ticker().is_active());

        timer.toggle_running();
        assert!(!timer.ticker().is_active());
        assert_eq!(timer.ticker().starts, 1);
        assert_eq!(timer.ticker().stops, 1);
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut timer = manual_timer(Mode::Focus);
        assert!(timer.tick().is_none());
        assert_eq!(timer.time_left_secs(), 1500);
    }

    #[test]
    fn test_full_focus_countdown() {
        let mut timer = manual_timer(Mode::Focus);
        timer.toggle_running();
        let events = run_ticks(&mut timer, 1500);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].mode, Mode::Focus);
        assert_eq!(timer.time_left_secs(), 0);
        assert!(!timer.is_running());
        assert!(!timer.ticker().is_active());
        assert_eq!(timer.formatted_time(), "00:00");
        assert_eq!(timer.progress_fraction(), 1.0);
    }

    #[test]
    fn test_completion_fires_on_last_tick_not_after() {
        let mut timer = manual_timer(Mode::ShortBreak);
        timer.toggle_running();
        assert!(run_ticks(&mut timer, 299).is_empty());
        assert_eq!(timer.time_left_secs(), 1);

        let event = timer.tick().expect("completion on the 1 -> 0 step");
        assert_eq!(event.mode, Mode::ShortBreak);
    }

    #[test]
    fn test_extra_ticks_after_completion_do_nothing() {
        let mut timer = manual_timer(Mode::ShortBreak);
        timer.toggle_running();
        let events = run_ticks(&mut timer, 400);
        assert_eq!(events.len(), 1);
        assert_eq!(timer.time_left_secs(), 0);
    }

    #[test]
    fn test_toggle_at_zero_has_no_visible_effect() {
        let mut timer = manual_timer(Mode::ShortBreak);
        timer.toggle_running();
        run_ticks(&mut timer, 300);

        timer.toggle_running();
        assert!(timer.is_running());
        assert!(!timer.ticker().is_active());
        assert!(timer.tick().is_none());
        assert_eq!(timer.time_left_secs(), 0);

        timer.reset();
        assert_eq!(timer.time_left_secs(), 300);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_reset_while_running() {
        for t in [1u32, 200, 1499] {
            let mut timer = manual_timer(Mode::Focus);
            timer.toggle_running();
            run_ticks(&mut timer, 1500 - t);
            assert_eq!(timer.time_left_secs(), t);

            timer.reset();
            assert_eq!(timer.mode(), Mode::Focus);
            assert_eq!(timer.time_left_secs(), 1500);
            assert!(!timer.is_running());
            assert!(timer.tick().is_none());
        }
    }

    #[test]
    fn test_progress_fraction() {
        let mut timer = manual_timer(Mode::ShortBreak);
        assert_eq!(timer.progress_fraction(), 0.0);
        timer.toggle_running();
        run_ticks(&mut timer, 150);
        assert!((timer.progress_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_advance_drains_ticker() {
        let mut timer = manual_timer(Mode::Focus);
        timer.toggle_running();
        timer.ticker_mut().elapse(3);

        assert!(timer.advance().is_empty());
        assert_eq!(timer.time_left_secs(), 1497);
        assert!(timer.advance().is_empty());
        assert_eq!(timer.time_left_secs(), 1497);
    }

    #[test]
    fn test_advance_stops_at_completion() {
        let mut timer = manual_timer(Mode::ShortBreak);
        timer.toggle_running();
        timer.ticker_mut().elapse(1000);

        let events = timer.advance();
        assert_eq!(events.len(), 1);
        assert_eq!(timer.time_left_secs(), 0);
        assert!(!timer.ticker().is_active());
    }

    #[test]
    fn test_paused_time_does_not_count() {
        let mut timer = manual_timer(Mode::Focus);
        timer.toggle_running();
        timer.ticker_mut().elapse(10);
        timer.advance();
        timer.toggle_running();
        timer.ticker_mut().elapse(60);
        timer.advance();

        assert_eq!(timer.time_left_secs(), 1490);
    }

    /// xorshift, enough to drive random operation sequences deterministically
    fn next_rand(state: &mut u64) -> u64 {
        *state ^= *state << 13;
        *state ^= *state >> 7;
        *state ^= *state << 17;
        *state
    }

    #[test]
    fn test_invariants_hold_over_random_operations() {
        for seed in 1..=64u64 {
            let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            let mut timer = manual_timer(Mode::Focus);

            for _ in 0..2_000 {
                match next_rand(&mut state) % 10 {
                    0 => timer.switch_mode(Mode::all()[(next_rand(&mut state) % 3) as usize]),
                    1 => timer.reset(),
                    2 | 3 => timer.toggle_running(),
                    4 => {
                        timer.ticker_mut().elapse((next_rand(&mut state) % 400) as u32);
                        let events = timer.advance();
                        assert!(events.len() <= 1);
                        if !events.is_empty() {
                            assert_eq!(timer.time_left_secs(), 0);
                        }
                    }
                    _ => {
                        let before = timer.time_left_secs();
                        let was_running = timer.is_running();
                        if timer.tick().is_some() {
                            assert!(was_running);
                            assert_eq!(before, 1);
                        }
                    }
                }

                assert!(timer.time_left_secs() <= timer.mode().duration_secs());
                let fraction = timer.progress_fraction();
                assert!((0.0..=1.0).contains(&fraction));
                if !timer.is_running() {
                    assert!(!timer.ticker().is_active());
                }
                if timer.time_left_secs() == 0 {
                    assert!(!timer.ticker().is_active());
                }
            }
        }
    }
}

use std::time::{Duration, Instant};

/// Event-loop poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

/// Length of one countdown tick
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Get event-loop poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

/// A source of whole-second ticks with an explicit lifecycle.
///
/// A stopped source never yields ticks. Starting an already running source
/// and stopping an already stopped one are no-ops.
pub trait TickSource {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_active(&self) -> bool;
    /// Number of ticks that became due since the last call
    fn take_ticks(&mut self) -> u32;
}

/// Tick source backed by the monotonic clock.
///
/// The anchor only moves forward by whole intervals, so the fractional
/// remainder carries over between polls and the countdown does not drift
/// no matter how often the view is redrawn.
#[derive(Debug, Default)]
pub struct IntervalTicker {
    anchor: Option<Instant>,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self { anchor: None }
    }

    fn take_ticks_at(&mut self, now: Instant) -> u32 {
        let Some(anchor) = self.anchor else {
            return 0;
        };

        let elapsed = now.saturating_duration_since(anchor);
        let ticks = (elapsed.as_millis() / TICK_INTERVAL.as_millis()) as u32;
        if ticks > 0 {
            self.anchor = Some(anchor + TICK_INTERVAL * ticks);
        }
        ticks
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self) {
        if self.anchor.is_none() {
            self.anchor = Some(Instant::now());
        }
    }

    fn stop(&mut self) {
        self.anchor = None;
    }

    fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    fn take_ticks(&mut self) -> u32 {
        self.take_ticks_at(Instant::now())
    }
}

/// Hand-driven tick source for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualTicker {
    active: bool,
    pending: u32,
    pub starts: u32,
    pub stops: u32,
}

#[cfg(test)]
impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `secs` seconds of wall-clock time pass. Ignored while stopped.
    pub fn elapse(&mut self, secs: u32) {
        if self.active {
            self.pending += secs;
        }
    }
}

#[cfg(test)]
impl TickSource for ManualTicker {
    fn start(&mut self) {
        if !self.active {
            self.active = true;
            self.starts += 1;
        }
    }

    fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.stops += 1;
        }
        self.pending = 0;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn take_ticks(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_duration() {
        let duration = poll_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_stopped_ticker_yields_nothing() {
        let mut ticker = IntervalTicker::new();
        assert!(!ticker.is_active());
        assert_eq!(ticker.take_ticks_at(Instant::now() + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_ticker_counts_whole_seconds() {
        let mut ticker = IntervalTicker::new();
        ticker.start();
        let anchor = ticker.anchor.unwrap();

        assert_eq!(ticker.take_ticks_at(anchor + Duration::from_millis(999)), 0);
        assert_eq!(ticker.take_ticks_at(anchor + Duration::from_millis(3_200)), 3);
        assert_eq!(ticker.anchor, Some(anchor + Duration::from_secs(3)));
    }

    #[test]
    fn test_ticker_carries_remainder() {
        let mut ticker = IntervalTicker::new();
        ticker.start();
        let anchor = ticker.anchor.unwrap();

        // Polled every 700ms: the remainder must not be lost
        let mut total = 0;
        for step in 1..=10 {
            total += ticker.take_ticks_at(anchor + Duration::from_millis(700 * step));
        }
        assert_eq!(total, 7);
    }

    #[test]
    fn test_ticker_start_is_idempotent() {
        let mut ticker = IntervalTicker::new();
        ticker.start();
        let anchor = ticker.anchor;
        ticker.start();
        assert_eq!(ticker.anchor, anchor);
    }

    #[test]
    fn test_ticker_stop_discards_progress() {
        let mut ticker = IntervalTicker::new();
        ticker.start();
        let anchor = ticker.anchor.unwrap();
        ticker.stop();

        assert!(!ticker.is_active());
        assert_eq!(ticker.take_ticks_at(anchor + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_manual_ticker_ignores_time_while_stopped() {
        let mut ticker = ManualTicker::new();
        ticker.elapse(5);
        assert_eq!(ticker.take_ticks(), 0);

        ticker.start();
        ticker.elapse(2);
        ticker.elapse(1);
        assert_eq!(ticker.take_ticks(), 3);
        assert_eq!(ticker.take_ticks(), 0);
    }
}

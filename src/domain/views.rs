use crate::domain::{FocusTimer, Mode, SessionCounter};
use crate::ticker::TickSource;

/// Format seconds as "MM:SS", both parts zero-padded
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Everything the view needs to draw the timer
#[derive(Debug, Clone, PartialEq)]
pub struct TimerDisplay {
    pub formatted_time: String,
    pub mode: Mode,
    pub progress_fraction: f64,
    pub is_running: bool,
    pub completed_sessions: u64,
}

impl TimerDisplay {
    pub fn capture<T: TickSource>(timer: &FocusTimer<T>, sessions: &SessionCounter) -> Self {
        Self {
            formatted_time: timer.formatted_time(),
            mode: timer.mode(),
            progress_fraction: timer.progress_fraction(),
            is_running: timer.is_running(),
            completed_sessions: sessions.completed(),
        }
    }

    /// Progress as a whole percentage for gauges
    pub fn progress_percent(&self) -> u16 {
        (self.progress_fraction * 100.0).round().clamp(0.0, 100.0) as u16
    }

    /// Text for the start/pause control
    pub fn action_label(&self) -> &'static str {
        if self.is_running {
            "PAUSE"
        } else {
            "START"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::ManualTicker;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(300), "05:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn test_capture_initial_display() {
        let timer = FocusTimer::with_ticker(Mode::Focus, ManualTicker::new());
        let display = TimerDisplay::capture(&timer, &SessionCounter::default());

        assert_eq!(
            display,
            TimerDisplay {
                formatted_time: "25:00".to_string(),
                mode: Mode::Focus,
                progress_fraction: 0.0,
                is_running: false,
                completed_sessions: 0,
            }
        );
        assert_eq!(display.action_label(), "START");
        assert_eq!(display.progress_percent(), 0);
    }

    #[test]
    fn test_capture_running_display() {
        let mut timer = FocusTimer::with_ticker(Mode::LongBreak, ManualTicker::new());
        timer.toggle_running();
        for _ in 0..225 {
            timer.tick();
        }
        let display = TimerDisplay::capture(&timer, &SessionCounter::with_count(3));

        assert_eq!(display.formatted_time, "11:15");
        assert_eq!(display.progress_percent(), 25);
        assert!(display.is_running);
        assert_eq!(display.action_label(), "PAUSE");
        assert_eq!(display.completed_sessions, 3);
    }
}

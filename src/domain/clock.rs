use chrono::{DateTime, Local, NaiveTime, Timelike};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Coarse part of the day shown next to the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Night until 06:00, morning until noon, afternoon until 17:00,
    /// evening until 21:00, then night again
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => TimeOfDay::Night,
            6..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Night => "Night",
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}

/// Share of the day already elapsed, 0.0 at midnight
pub fn day_progress(time: NaiveTime) -> f64 {
    f64::from(time.num_seconds_from_midnight()) / SECONDS_PER_DAY
}

/// Wall clock snapshot for the clock pane
#[derive(Debug, Clone, PartialEq)]
pub struct ClockDisplay {
    pub time: String,
    pub date: String,
    pub time_of_day: TimeOfDay,
    pub day_progress: f64,
}

impl ClockDisplay {
    pub fn capture(now: DateTime<Local>) -> Self {
        Self::at(now.naive_local())
    }

    fn at(now: chrono::NaiveDateTime) -> Self {
        Self {
            time: now.format("%H:%M:%S").to_string(),
            date: now.format("%A, %B %-d, %Y").to_string(),
            time_of_day: TimeOfDay::from_hour(now.hour()),
            day_progress: day_progress(now.time()),
        }
    }

    pub fn progress_percent(&self) -> u16 {
        (self.day_progress * 100.0).floor().clamp(0.0, 100.0) as u16
    }
}

use serde::{Deserialize, Serialize};

/// Timer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

/// Static description of a mode: how long it runs and how it is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDescriptor {
    pub duration_secs: u32,
    pub label: &'static str,
    pub short_label: &'static str,
}

const FOCUS: ModeDescriptor = ModeDescriptor {
    duration_secs: 25 * 60,
    label: "Focus Time",
    short_label: "Focus",
};

const SHORT_BREAK: ModeDescriptor = ModeDescriptor {
    duration_secs: 5 * 60,
    label: "Short Break",
    short_label: "Short Break",
};

const LONG_BREAK: ModeDescriptor = ModeDescriptor {
    duration_secs: 15 * 60,
    label: "Long Break",
    short_label: "Long Break",
};

impl Mode {
    /// Look up the descriptor for this mode
    pub fn descriptor(&self) -> &'static ModeDescriptor {
        match self {
            Mode::Focus => &FOCUS,
            Mode::ShortBreak => &SHORT_BREAK,
            Mode::LongBreak => &LONG_BREAK,
        }
    }

    /// Full countdown length in seconds
    pub fn duration_secs(&self) -> u32 {
        self.descriptor().duration_secs
    }

    /// Label shown under the clock
    pub fn label(&self) -> &'static str {
        self.descriptor().label
    }

    /// Label shown on the mode tabs
    pub fn short_label(&self) -> &'static str {
        self.descriptor().short_label
    }

    /// Next mode in tab order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Mode::Focus => Mode::ShortBreak,
            Mode::ShortBreak => Mode::LongBreak,
            Mode::LongBreak => Mode::Focus,
        }
    }

    /// Parse a mode name as given on the command line
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "focus" => Some(Self::Focus),
            "short" | "short-break" | "shortbreak" => Some(Self::ShortBreak),
            "long" | "long-break" | "longbreak" => Some(Self::LongBreak),
            _ => None,
        }
    }

    /// Get all modes in tab order
    pub fn all() -> &'static [Mode] {
        &[Mode::Focus, Mode::ShortBreak, Mode::LongBreak]
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_label())
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_durations() {
        assert_eq!(Mode::Focus.duration_secs(), 1500);
        assert_eq!(Mode::ShortBreak.duration_secs(), 300);
        assert_eq!(Mode::LongBreak.duration_secs(), 900);
    }

    #[test]
    fn test_every_mode_has_a_positive_duration() {
        for mode in Mode::all() {
            assert!(mode.duration_secs() > 0);
            assert!(!mode.label().is_empty());
        }
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Focus.label(), "Focus Time");
        assert_eq!(Mode::ShortBreak.label(), "Short Break");
        assert_eq!(Mode::LongBreak.label(), "Long Break");
        assert_eq!(Mode::Focus.short_label(), "Focus");
    }

    #[test]
    fn test_mode_next_cycles() {
        assert_eq!(Mode::Focus.next(), Mode::ShortBreak);
        assert_eq!(Mode::ShortBreak.next(), Mode::LongBreak);
        assert_eq!(Mode::LongBreak.next(), Mode::Focus);
    }

    #[test]
    fn test_mode_from_key() {
        assert_eq!(Mode::from_key("focus"), Some(Mode::Focus));
        assert_eq!(Mode::from_key("FOCUS"), Some(Mode::Focus));
        assert_eq!(Mode::from_key("short"), Some(Mode::ShortBreak));
        assert_eq!(Mode::from_key("shortBreak"), Some(Mode::ShortBreak));
        assert_eq!(Mode::from_key("long-break"), Some(Mode::LongBreak));
        assert_eq!(Mode::from_key("nap"), None);
    }

    #[test]
    fn test_mode_serializes_camel_case() {
        let json = serde_json::to_string(&Mode::ShortBreak).unwrap();
        assert_eq!(json, "\"shortBreak\"");
    }
}

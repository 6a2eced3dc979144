use crate::domain::{CompletionEvent, Mode};

/// Tally of finished focus countdowns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounter {
    completed: u64,
}

impl SessionCounter {
    /// Resume from a previously stored tally
    pub fn with_count(completed: u64) -> Self {
        Self { completed }
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Count the event if it closed a focus countdown. Returns true when the
    /// tally changed.
    pub fn on_completion(&mut self, event: &CompletionEvent) -> bool {
        if event.mode != Mode::Focus {
            return false;
        }
        self.completed += 1;
        true
    }
}

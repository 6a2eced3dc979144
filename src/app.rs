use crate::domain::{CompletionEvent, FocusTimer, Mode, SessionCounter, TimerDisplay, UiMode};
use crate::notifications::NotificationHub;
use crate::persistence::{session_key, CounterStore};
use crate::ticker::{IntervalTicker, TickSource};
use anyhow::Result;
use chrono::NaiveDate;
use std::thread::JoinHandle;
use tracing::{info, warn};

/// Main application state
pub struct AppState<T: TickSource = IntervalTicker> {
    pub timer: FocusTimer<T>,
    pub sessions: SessionCounter,
    pub notifier: NotificationHub,
    pub ui_mode: UiMode,
    pub last_completion: Option<CompletionEvent>, // Shown as a banner until the next user action
    pub needs_save: bool,
    pub file_date: NaiveDate, // Day the session tally belongs to
    store: Box<dyn CounterStore>,
    deliveries: Vec<JoinHandle<usize>>, // Notification threads still running
}

impl<T: TickSource> AppState<T> {
    /// Build the app, restoring the session tally for `date` from `store`
    pub fn new(
        timer: FocusTimer<T>,
        notifier: NotificationHub,
        store: Box<dyn CounterStore>,
        date: NaiveDate,
    ) -> Result<Self> {
        let completed = store.load(&session_key(date))?.unwrap_or(0);
        info!(completed, %date, "restored session tally");

        Ok(Self {
            timer,
            sessions: SessionCounter::with_count(completed),
            notifier,
            ui_mode: UiMode::Normal,
            last_completion: None,
            needs_save: false,
            file_date: date,
            store,
            deliveries: Vec::new(),
        })
    }

    /// Start or pause the countdown
    pub fn toggle_running(&mut self) {
        self.last_completion = None;
        self.timer.toggle_running();
    }

    /// Restart the current mode from its full duration
    pub fn reset(&mut self) {
        self.last_completion = None;
        self.timer.reset();
    }

    /// Switch to another mode (abandons any countdown in progress)
    pub fn switch_mode(&mut self, mode: Mode) {
        self.last_completion = None;
        self.timer.switch_mode(mode);
    }

    /// Switch to the next mode in tab order
    pub fn cycle_mode(&mut self) {
        let next = self.timer.mode().next();
        self.switch_mode(next);
    }

    pub fn toggle_help(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::Help => UiMode::Normal,
            UiMode::Normal => UiMode::Help,
        };
    }

    /// Advance the countdown by the time elapsed since the last call and
    /// route any completion to its subscribers
    pub fn tick(&mut self) {
        for event in self.timer.advance() {
            self.handle_completion(event);
        }
        self.deliveries.retain(|handle| !handle.is_finished());
    }

    /// Route one completion to the tally, the notifiers and the banner
    fn handle_completion(&mut self, event: CompletionEvent) {
        if self.sessions.on_completion(&event) {
            info!(completed = self.sessions.completed(), "focus session counted");
            self.needs_save = self.store.is_durable();
        }

        if self.notifier.notifier_count() > 0 {
            self.deliveries.push(self.notifier.dispatch(&event));
        }

        self.last_completion = Some(event);
    }

    /// Move a stored tally to a new day once midnight has passed. An
    /// in-memory tally belongs to the whole run and keeps counting.
    pub fn check_day_change(&mut self, today: NaiveDate) -> Result<()> {
        if today == self.file_date {
            return Ok(());
        }

        if !self.store.is_durable() {
            self.file_date = today;
            return Ok(());
        }

        if self.needs_save {
            self.save()?;
        }

        let completed = self.store.load(&session_key(today))?.unwrap_or(0);
        info!(from = %self.file_date, to = %today, completed, "day changed");
        self.sessions = SessionCounter::with_count(completed);
        self.file_date = today;
        Ok(())
    }

    /// Write the session tally to the store
    pub fn save(&mut self) -> Result<()> {
        self.store
            .store(&session_key(self.file_date), self.sessions.completed())?;
        self.needs_save = false;
        Ok(())
    }

    /// Save if needed. A failed write is logged and retried on the next call
    /// so a storage problem never stops the timer. Returns true when nothing
    /// is left unsaved.
    pub fn autosave(&mut self) -> bool {
        if !self.needs_save {
            return true;
        }
        match self.save() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to save session tally, will retry");
                false
            }
        }
    }

    /// Wait for in-flight notification threads
    #[cfg(test)]
    pub fn wait_for_notifications(&mut self) -> usize {
        self.deliveries
            .drain(..)
            .map(|handle| handle.join().unwrap_or(0))
            .sum()
    }

    /// Snapshot for rendering
    pub fn display(&self) -> TimerDisplay {
        TimerDisplay::capture(&self.timer, &self.sessions)
    }
}

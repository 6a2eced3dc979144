//! Completion cues: terminal bell and desktop notifications.
//! Delivery runs on its own thread; failures never reach the timer, the hub
//! logs and drops them.

use crate::domain::{CompletionEvent, Mode};
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
#[cfg(any(target_os = "macos", target_os = "linux"))]
use std::process::Command;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{program} exited with {status}")]
    CommandFailed { program: &'static str, status: String },
    #[error("desktop notifications are not supported on this platform")]
    Unsupported,
}

/// Something that reacts to a finished countdown
pub trait Notifier: Send + Sync {
    fn name(&self) -> &'static str;
    fn notify(&self, event: &CompletionEvent) -> Result<(), NotifyError>;
}

/// Notification title for a finished mode
pub fn completion_title(mode: Mode) -> &'static str {
    match mode {
        Mode::Focus => "Focus Hub - Focus Complete",
        Mode::ShortBreak | Mode::LongBreak => "Focus Hub - Break Over",
    }
}

/// Notification body for a finished mode
pub fn completion_message(mode: Mode) -> &'static str {
    match mode {
        Mode::Focus => "Focus session complete. Time for a break!",
        Mode::ShortBreak | Mode::LongBreak => "Break is over. Ready to focus?",
    }
}

/// Audible cue: rings the terminal bell
pub struct TerminalBell;

impl Notifier for TerminalBell {
    fn name(&self) -> &'static str {
        "bell"
    }

    fn notify(&self, _event: &CompletionEvent) -> Result<(), NotifyError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Native desktop notification (macOS and Linux)
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn name(&self) -> &'static str {
        "desktop"
    }

    #[cfg(target_os = "macos")]
    fn notify(&self, event: &CompletionEvent) -> Result<(), NotifyError> {
        let script = format!(
            r#"display notification "{}" with title "{}""#,
            completion_message(event.mode),
            completion_title(event.mode)
        );

        let output = Command::new("osascript").arg("-e").arg(&script).output()?;
        if !output.status.success() {
            return Err(NotifyError::CommandFailed {
                program: "osascript",
                status: output.status.to_string(),
            });
        }
        Ok(())
    }

    #[cfg(target_os = "linux")]
    fn notify(&self, event: &CompletionEvent) -> Result<(), NotifyError> {
        let output = Command::new("notify-send")
            .arg(completion_title(event.mode))
            .arg(completion_message(event.mode))
            .output()?;
        if !output.status.success() {
            return Err(NotifyError::CommandFailed {
                program: "notify-send",
                status: output.status.to_string(),
            });
        }
        Ok(())
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    fn notify(&self, _event: &CompletionEvent) -> Result<(), NotifyError> {
        Err(NotifyError::Unsupported)
    }
}

/// Fans a completion event out to every registered notifier
#[derive(Default)]
pub struct NotificationHub {
    notifiers: Vec<Arc<dyn Notifier>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(Arc::from(notifier));
    }

    pub fn notifier_count(&self) -> usize {
        self.notifiers.len()
    }

    /// Deliver `event` to every notifier on a background thread and return
    /// at once. The handle yields how many notifiers succeeded; dropping it
    /// detaches the delivery.
    pub fn dispatch(&self, event: &CompletionEvent) -> JoinHandle<usize> {
        let notifiers = self.notifiers.clone();
        let event = event.clone();

        thread::spawn(move || deliver(&notifiers, &event))
    }
}

/// Run every notifier in turn. Errors and panics are logged and swallowed.
fn deliver(notifiers: &[Arc<dyn Notifier>], event: &CompletionEvent) -> usize {
    let mut delivered = 0;

    for notifier in notifiers {
        let result = panic::catch_unwind(AssertUnwindSafe(|| notifier.notify(event)));
        match result {
            Ok(Ok(())) => {
                debug!(notifier = notifier.name(), mode = %event.mode, "notification sent");
                delivered += 1;
            }
            Ok(Err(e)) => {
                warn!(notifier = notifier.name(), error = %e, "notification failed");
            }
            Err(_) => {
                warn!(notifier = notifier.name(), "notifier panicked");
            }
        }
    }

    delivered
}

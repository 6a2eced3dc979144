pub mod clock;
pub mod enums;
pub mod sessions;
pub mod timer;
pub mod views;

pub use clock::{ClockDisplay, TimeOfDay};
pub use enums::{Mode, UiMode};
pub use sessions::SessionCounter;
pub use timer::{CompletionEvent, FocusTimer};
pub use views::{format_clock, TimerDisplay};

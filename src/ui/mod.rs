pub mod clock_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod sessions_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::{ClockDisplay, UiMode};
use crate::ticker::TickSource;
use clock_pane::render_clock_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_completion_banner, render_help_modal};
use ratatui::Frame;
use sessions_pane::render_sessions_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render<T: TickSource>(f: &mut Frame, app: &AppState<T>) {
    let size = f.size();
    let layout = create_layout(size, app.last_completion.is_some());
    let display = app.display();

    render_keybindings(f, layout.keybindings_area);
    render_clock_pane(f, &ClockDisplay::capture(chrono::Local::now()), layout.clock_area);

    if let (Some(event), Some(banner_area)) = (&app.last_completion, layout.banner_area) {
        render_completion_banner(f, event, banner_area);
    }

    render_timer_pane(f, &display, layout.timer_area);
    render_sessions_pane(f, &display, layout.sessions_area);

    if app.ui_mode == UiMode::Help {
        render_help_modal(f, size);
    }
}

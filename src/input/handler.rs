use crate::app::AppState;
use crate::domain::{Mode, UiMode};
use crate::ticker::TickSource;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<T: TickSource>(app: &mut AppState<T>, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Help => handle_help_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<T: TickSource>(app: &mut AppState<T>, key: KeyEvent) -> bool {
    match key.code {
        // Start / pause
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_running();
            false
        }

        // Reset current countdown
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset();
            false
        }

        // Mode selection
        KeyCode::Char('1') | KeyCode::Char('f') | KeyCode::Char('F') => {
            app.switch_mode(Mode::Focus);
            false
        }
        KeyCode::Char('2') | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.switch_mode(Mode::ShortBreak);
            false
        }
        KeyCode::Char('3') | KeyCode::Char('l') | KeyCode::Char('L') => {
            app.switch_mode(Mode::LongBreak);
            false
        }
        KeyCode::Tab => {
            app.cycle_mode();
            false
        }

        KeyCode::Char('?') => {
            app.toggle_help();
            false
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,

        _ => false,
    }
}

/// Handle keys while the help overlay is open
fn handle_help_mode<T: TickSource>(app: &mut AppState<T>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc => {
            app.toggle_help();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

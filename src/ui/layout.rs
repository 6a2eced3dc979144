use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub clock_area: Rect,
    pub banner_area: Option<Rect>,
    pub timer_area: Rect,
    pub sessions_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Clock: wall time and day progress (3 rows)
/// - Banner: completion message (3 rows, only when showing)
/// - Main area: Timer pane above the sessions pane
pub fn create_layout(area: Rect, show_banner: bool) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                               // Keybindings bar
            Constraint::Length(3),                               // Clock
            Constraint::Length(if show_banner { 3 } else { 0 }), // Banner
            Constraint::Min(0),                                  // Timer pane
            Constraint::Length(3),                               // Sessions pane
        ])
        .split(area);

    MainLayout {
        keybindings_area: main_chunks[0],
        clock_area: main_chunks[1],
        banner_area: show_banner.then_some(main_chunks[2]),
        timer_area: main_chunks[3],
        sessions_area: main_chunks[4],
    }
}

/// Create centered modal area (for the help overlay)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(14),
            Constraint::Percentage(20),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

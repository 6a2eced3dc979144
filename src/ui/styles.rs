use crate::domain::{Mode, TimeOfDay};
use ratatui::style::{Color, Modifier, Style};

/// Ink color used for text on accent backgrounds
const INK: Color = Color::Rgb(0x2C, 0x2C, 0x2C);

/// Accent color for a mode
pub fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Focus => Color::Rgb(0xFF, 0xB3, 0xD9),
        Mode::ShortBreak => Color::Rgb(0xB3, 0xD9, 0xFF),
        Mode::LongBreak => Color::Rgb(0xFF, 0xF4, 0xB3),
    }
}

/// Tint for the part of the day
pub fn time_of_day_color(part: TimeOfDay) -> Color {
    match part {
        TimeOfDay::Night => Color::Rgb(0xE6, 0xD5, 0xF5),
        TimeOfDay::Morning => Color::Rgb(0xFF, 0xE1, 0xE9),
        TimeOfDay::Afternoon => Color::Rgb(0xFF, 0xF4, 0xB3),
        TimeOfDay::Evening => Color::Rgb(0xFF, 0xD4, 0xB2),
    }
}

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Active mode tab
pub fn active_tab_style(mode: Mode) -> Style {
    Style::default()
        .fg(INK)
        .bg(mode_color(mode))
        .add_modifier(Modifier::BOLD)
}

/// Big clock digits
pub fn clock_style(mode: Mode, running: bool) -> Style {
    let style = Style::default().fg(mode_color(mode));
    if running {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Running status badge style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Paused status badge style
pub fn paused_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Progress gauge for a mode
pub fn gauge_style(mode: Mode) -> Style {
    Style::default().fg(mode_color(mode)).bg(Color::DarkGray)
}

/// Completed sessions count
pub fn trophy_style() -> Style {
    Style::default()
        .fg(INK)
        .bg(mode_color(Mode::LongBreak))
        .add_modifier(Modifier::BOLD)
}

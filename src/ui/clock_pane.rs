use crate::domain::ClockDisplay;
use crate::ui::styles::{border_style, default_style, time_of_day_color, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the wall clock with the day's progress
pub fn render_clock_pane(f: &mut Frame, clock: &ClockDisplay, area: Rect) {
    let tint = time_of_day_color(clock.time_of_day);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Today ", title_style()));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(10)])
        .split(block.inner(area));

    f.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", clock.time),
            Style::default().fg(tint).add_modifier(Modifier::BOLD),
        ),
        Span::styled(clock.date.clone(), default_style()),
    ]);
    f.render_widget(Paragraph::new(line), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(tint).bg(Color::DarkGray))
        .percent(clock.progress_percent())
        .label(format!(
            "{} \u{00B7} {}% of the day",
            clock.time_of_day.label(),
            clock.progress_percent()
        ));
    f.render_widget(gauge, chunks[1]);
}

use crate::domain::{Mode, TimerDisplay};
use crate::ui::styles::{
    active_tab_style, border_style, clock_style, default_style, gauge_style, mode_color,
    paused_style, running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

/// Height of a big clock glyph
const GLYPH_ROWS: usize = 5;

/// 3x5 block glyph for a clock character
fn glyph(c: char) -> [&'static str; GLYPH_ROWS] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => ["  █", "  █", "  █", "  █", "  █"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        _ => ["   "; GLYPH_ROWS],
    }
}

/// Render "MM:SS" as rows of block glyphs
pub fn big_clock_lines(text: &str) -> Vec<String> {
    (0..GLYPH_ROWS)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn mode_tabs(active: Mode) -> Tabs<'static> {
    let titles: Vec<Line> = Mode::all()
        .iter()
        .enumerate()
        .map(|(idx, mode)| Line::from(format!(" {} {} ", idx + 1, mode.short_label())))
        .collect();
    let selected = Mode::all().iter().position(|m| *m == active).unwrap_or(0);

    Tabs::new(titles)
        .select(selected)
        .style(default_style())
        .highlight_style(active_tab_style(active))
        .divider("|")
}

/// Render the focus timer pane
pub fn render_timer_pane(f: &mut Frame, display: &TimerDisplay, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Focus Timer ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // Mode tabs
            Constraint::Min(1),                    // Spacer
            Constraint::Length(GLYPH_ROWS as u16), // Big clock
            Constraint::Length(1),                 // Spacer
            Constraint::Length(1),                 // Progress gauge
            Constraint::Length(1),                 // Mode label
            Constraint::Length(1),                 // Run status
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(mode_tabs(display.mode), chunks[0]);

    let clock: Vec<Line> = big_clock_lines(&display.formatted_time)
        .into_iter()
        .map(|row| Line::styled(row, clock_style(display.mode, display.is_running)))
        .collect();
    f.render_widget(Paragraph::new(clock).alignment(Alignment::Center), chunks[2]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style(display.mode))
        .percent(display.progress_percent())
        .label(format!("{}%", display.progress_percent()));
    f.render_widget(gauge, chunks[4]);

    let label = Paragraph::new(Line::styled(
        display.mode.label(),
        Style::default().fg(mode_color(display.mode)),
    ))
    .alignment(Alignment::Center);
    f.render_widget(label, chunks[5]);

    let (status, status_style) = if display.is_running {
        ("▶ RUNNING", running_style())
    } else {
        ("⏸ PAUSED", paused_style())
    };
    let status_line = Line::from(vec![
        Span::styled(status, status_style),
        Span::raw("   "),
        Span::styled(format!("[space] {}", display.action_label()), default_style()),
    ]);
    f.render_widget(
        Paragraph::new(status_line).alignment(Alignment::Center),
        chunks[6],
    );
}

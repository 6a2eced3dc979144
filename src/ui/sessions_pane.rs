use crate::domain::TimerDisplay;
use crate::ui::styles::{border_style, default_style, title_style, trophy_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the completed sessions pane
pub fn render_sessions_pane(f: &mut Frame, display: &TimerDisplay, area: Rect) {
    let line = Line::from(vec![
        Span::styled("\u{1F3C6} Completed sessions today: ", default_style()),
        Span::styled(format!(" {} ", display.completed_sessions), trophy_style()),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Sessions ", title_style())),
    );

    f.render_widget(paragraph, area);
}

use crate::domain::CompletionEvent;
use crate::notifications::completion_message;
use crate::ui::{
    layout::create_modal_area,
    styles::{active_tab_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the banner shown after a countdown finishes
pub fn render_completion_banner(f: &mut Frame, event: &CompletionEvent, area: Rect) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", event.mode.short_label()), active_tab_style(event.mode)),
        Span::raw("  "),
        Span::raw(completion_message(event.mode)),
        Span::raw(format!("  ({})", event.finished_at.format("%H:%M"))),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(modal_bg_style()));

    f.render_widget(paragraph, area);
}

/// Render the help overlay
pub fn render_help_modal(f: &mut Frame, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), modal_title_style()),
            Span::raw(what),
        ])
    };

    let lines = vec![
        Line::raw(""),
        key("space/enter", "Start or pause the countdown"),
        key("r", "Reset the current mode"),
        key("1 / f", "Focus (25 min)"),
        key("2 / s", "Short break (5 min)"),
        key("3 / l", "Long break (15 min)"),
        key("tab", "Next mode"),
        key("?", "Close this help"),
        key("q", "Quit"),
        Line::raw(""),
        Line::raw("  Switching modes or resetting abandons the current countdown."),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Help ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

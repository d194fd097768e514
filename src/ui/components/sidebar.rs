//! Contact channels, sources and the export hint.

use crate::report::SidebarView;
use crate::ui::styles;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_sidebar(frame: &mut Frame, area: Rect, view: &SidebarView<'_>) {
    let mut lines = vec![
        Line::from(Span::styled("CONTACT CHANNELS", styles::label())),
        Line::from(vec![Span::styled("Phone  ", styles::title()), Span::raw(view.phone)]),
        Line::from(vec![Span::styled("Email  ", styles::title()), Span::raw(view.email)]),
        Line::from(vec![Span::styled("Link   ", styles::title()), Span::raw(view.main_link)]),
        Line::from(""),
        Line::from(Span::styled("ANALYSIS SOURCES", styles::label())),
    ];
    lines.extend(view.sources.iter().map(|source| {
        Line::from(vec![
            Span::raw("• "),
            Span::raw(source.title.as_str()),
            Span::styled(format!(" <{}>", source.uri), Style::default().fg(styles::MUTED)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[Ctrl-P] Export report", styles::title())));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

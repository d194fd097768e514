//! Static panels: header, welcome, error and footer.

use crate::controller::State;
use crate::ui::styles;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_header(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(Span::styled("InstaBiz Analyst Pro", styles::title())),
        Line::from(Span::styled(
            "Turn an Instagram presence into a sales machine: a deep audit and a strategic action plan.",
            Style::default().fg(styles::MUTED),
        )),
    ]);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Shown before the first analysis
pub fn render_welcome(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from("Type the handle of a business account and press Enter."),
        Line::from(""),
        Line::from(Span::styled(
            "The report covers profile data, content mix, competitors, an improvement plan and a growth proposal.",
            Style::default().fg(styles::MUTED),
        )),
    ]);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Error panel with the retry hint. Nothing is drawn outside the error state.
pub fn render_error(frame: &mut Frame, area: Rect, state: &State) {
    let Some(message) = state.error_message() else {
        return;
    };

    let red = Style::default().fg(Color::Red);
    let text = Text::from(vec![
        Line::from(Span::styled(
            "Analysis failed",
            red.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "We found {}. Make sure the profile belongs to a business with a web presence.",
                message
            ),
            red,
        )),
        Line::from(""),
        Line::from(Span::styled("[Ctrl-R] Retry", styles::title())),
    ]);

    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(red),
        );
    frame.render_widget(panel, area);
}

/// Key hints, or the latest notice when there is one
pub fn render_footer(frame: &mut Frame, area: Rect, state: &State, notice: Option<&str>) {
    let line = match notice {
        Some(notice) => Line::from(Span::styled(notice, styles::title())),
        None => {
            let mut spans = vec![Span::raw("Enter analyse  Ctrl-U clear  ")];
            if state.shows_report() {
                spans.push(Span::raw("Tab/←/→ switch tab  F1-F5 jump  Ctrl-P export  "));
            }
            spans.push(Span::raw("Esc quit"));
            Line::from(spans).style(Style::default().fg(styles::MUTED))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

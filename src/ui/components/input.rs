//! Handle input box and progress gauge.

use crate::controller::State;
use crate::ui::styles;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the "@"-prefixed handle input.
///
/// The box is dimmed and the cursor hidden while a request is in flight.
pub fn render_input(frame: &mut Frame, area: Rect, state: &State) {
    let locked = state.status.is_in_flight();
    let text_style = if locked {
        Style::default().fg(styles::MUTED)
    } else {
        Style::default()
    };

    let hint_style = if state.can_submit() {
        styles::title()
    } else {
        Style::default().fg(styles::MUTED)
    };
    let hint = Line::from(Span::styled(
        format!(" [Enter] {} ", state.submit_label()),
        hint_style,
    ))
    .right_aligned();

    let line = Line::from(vec![
        Span::styled("@", styles::label()),
        Span::styled(state.handle_text.as_str(), text_style),
    ]);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Instagram business handle ")
            .title_bottom(hint),
    );
    frame.render_widget(input, area);

    if !locked && area.width > 2 && area.height > 2 {
        frame.set_cursor_position(Position::new(cursor_x(area, &state.handle_text), area.y + 1));
    }
}

/// Column just after the typed text, kept inside the box border
fn cursor_x(area: Rect, text: &str) -> u16 {
    let offset = u16::try_from(text.width()).unwrap_or(u16::MAX).saturating_add(1);
    let last = area.right().saturating_sub(2).max(area.x);
    area.x.saturating_add(1).saturating_add(offset).min(last)
}

/// Draw the progress gauge. Nothing is drawn when no request is in flight.
pub fn render_progress(frame: &mut Frame, area: Rect, state: &State) {
    let Some(progress) = state.progress() else {
        return;
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", progress.label)),
        )
        .gauge_style(Style::default().fg(styles::ACCENT).add_modifier(Modifier::BOLD))
        .percent(progress.percent)
        .label(format!("{}%", progress.percent));
    frame.render_widget(gauge, area);
}

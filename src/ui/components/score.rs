//! Score card and tab bar.

use crate::controller::Tab;
use crate::report::{format_score, ScoreCard};
use crate::ui::styles;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

/// Headline score with the executive summary and a ring-style gauge
pub fn render_score_card(frame: &mut Frame, area: Rect, card: &ScoreCard<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styles::ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [summary_area, ring_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(24)]).areas(inner);

    let text = Text::from(vec![
        Line::from(Span::styled(
            format!("Digital health score: {}/10", format_score(card.score)),
            styles::title(),
        )),
        Line::from(Span::styled(
            format!("\"{}\"", card.executive_summary),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ]);
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), summary_area);

    let ring = Gauge::default()
        .block(Block::default().title(" Overall performance "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(card.fill_ratio())
        .label(format_score(card.score));
    frame.render_widget(ring, ring_area);
}

pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("F{} {}", i + 1, tab.label())));

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(styles::MUTED))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(styles::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .select(active.index());
    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures;
    use crate::report;
    use crate::ui::components::test_support::render_to_string;

    #[test]
    fn score_card_shows_score_and_summary() {
        let doc = fixtures::sample();
        let card = report::score_card(&doc);
        let out = render_to_string(100, 5, |f| render_score_card(f, f.area(), &card));
        assert!(out.contains("Digital health score: 7/10"));
        assert!(out.contains("Strong product, weak conversion path"));
    }

    #[test]
    fn out_of_range_score_is_drawn_without_panicking() {
        let mut doc = fixtures::sample();
        doc.diagnosis.overall_score = 13.0;
        let card = report::score_card(&doc);
        let out = render_to_string(100, 5, |f| render_score_card(f, f.area(), &card));
        assert!(out.contains("13/10"));
    }

    #[test]
    fn tab_bar_lists_all_tabs() {
        let out = render_to_string(140, 3, |f| render_tab_bar(f, f.area(), Tab::Content));
        for tab in Tab::ALL {
            assert!(out.contains(tab.label()));
        }
    }
}

//! Competitor benchmark chart.

use crate::analysis::CompetitorMetrics;
use crate::report::{format_score, Benchmark};
use crate::ui::styles;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

const SHORT_LABELS: [&str; 4] = ["Pres", "Cons", "Prof", "Eng"];
const BAR_COLORS: [Color; 4] = [Color::Blue, Color::Cyan, Color::Magenta, Color::Green];

/// Bars are scaled by ten so one decimal of the 0-10 metric survives
fn bar_value(metric: f64) -> u64 {
    if metric.is_finite() && metric > 0.0 {
        (metric * 10.0).round() as u64
    } else {
        0
    }
}

fn bars(metrics: &CompetitorMetrics, highlight: bool) -> Vec<Bar<'static>> {
    metrics
        .values()
        .iter()
        .zip(SHORT_LABELS)
        .zip(BAR_COLORS)
        .map(|((value, label), color)| {
            let style = if highlight {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(color)
            };
            Bar::default()
                .value(bar_value(*value))
                .text_value(format_score(*value))
                .label(Line::from(label))
                .style(style)
        })
        .collect()
}

/// Grouped bar chart, one group per competitor.
///
/// A competitor whose name matches the reference business is highlighted.
pub fn render_benchmark(frame: &mut Frame, area: Rect, benchmark: &Benchmark<'_>) {
    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Benchmark: {} vs competitors ", benchmark.reference))
                .title_style(styles::title()),
        )
        .bar_width(4)
        .bar_gap(1)
        .group_gap(3)
        .max(100);

    for (name, metrics) in &benchmark.series {
        let highlight = name.eq_ignore_ascii_case(benchmark.reference);
        let group_bars = bars(metrics, highlight);
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(name.to_string()))
                .bars(&group_bars),
        );
    }

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures;
    use crate::controller::Tab;
    use crate::report::{tab_view, TabView};
    use crate::ui::components::test_support::render_to_string;

    #[test]
    fn bar_values_are_scaled() {
        assert_eq!(bar_value(7.5), 75);
        assert_eq!(bar_value(-1.0), 0);
        assert_eq!(bar_value(f64::INFINITY), 0);
    }

    #[test]
    fn chart_names_reference_and_competitor() {
        let doc = fixtures::sample();
        let TabView::Competitors(view) = tab_view(&doc, Tab::Competitors) else {
            panic!("expected competitors view");
        };
        let out = render_to_string(80, 14, |f| render_benchmark(f, f.area(), &view.benchmark));
        assert!(out.contains("Benchmark: Panadería Sol vs competitors"));
        assert!(out.contains("Horno Luna"));
    }
}

//! Tab bodies.

use crate::report::{
    bar_width, format_score, CompetitorsView, ContentView, DiagnosisView, Emphasis, InfoView,
    ProposalView, TabView,
};
use crate::ui::components::benchmark::render_benchmark;
use crate::ui::styles;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_tab(frame: &mut Frame, area: Rect, view: &TabView<'_>) {
    match view {
        TabView::Info(info) => render_info(frame, area, info),
        TabView::Content(content) => render_content(frame, area, content),
        TabView::Competitors(competitors) => render_competitors(frame, area, competitors),
        TabView::Diagnosis(diagnosis) => render_diagnosis(frame, area, diagnosis),
        TabView::Proposal(proposal) => render_proposal(frame, area, proposal),
    }
}

fn section(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", title), styles::title()))
}

fn field<'a>(label: &'a str, value: &'a str) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(label.to_uppercase(), styles::label())),
        Line::from(value),
        Line::from(""),
    ]
}

fn bullets<'a>(marker: &'a str, items: &'a [String]) -> Vec<Line<'a>> {
    items
        .iter()
        .map(|item| Line::from(vec![Span::styled(marker, styles::title()), Span::raw(item.as_str())]))
        .collect()
}

fn render_info(frame: &mut Frame, area: Rect, info: &InfoView<'_>) {
    let [profile_area, strategy_area] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let mut profile = Vec::new();
    profile.extend(field("Business name", info.business_name));
    profile.extend(field("Category", info.category));
    profile.extend(field("Analysed bio", info.bio));
    profile.extend(field("Location", info.location));
    profile.extend(field("Website", info.website));
    frame.render_widget(
        Paragraph::new(Text::from(profile))
            .wrap(Wrap { trim: true })
            .block(section("Business profile")),
        profile_area,
    );

    let mut strategy = Vec::new();
    strategy.extend(field("Target audience", info.target_audience));
    strategy.push(Line::from(Span::styled("VALUE PROPOSITION", styles::label())));
    strategy.push(Line::from(Span::styled(
        format!("\"{}\"", info.unique_value_prop),
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    strategy.push(Line::from(""));
    strategy.push(Line::from(Span::styled("IDENTIFIED SERVICES", styles::label())));
    strategy.push(Line::from(
        info.services
            .iter()
            .map(|s| Span::styled(format!("[{}] ", s), Style::default().fg(styles::ACCENT)))
            .collect::<Vec<_>>(),
    ));
    frame.render_widget(
        Paragraph::new(Text::from(strategy))
            .wrap(Wrap { trim: true })
            .block(section("Current strategy")),
        strategy_area,
    );
}

fn stat_card(frame: &mut Frame, area: Rect, title: &str, value: String, style: Style) {
    let text = Text::from(vec![
        Line::from(Span::styled(title.to_uppercase(), styles::label())).centered(),
        Line::from(Span::styled(value, style)).centered(),
    ]);
    frame.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_content(frame: &mut Frame, area: Rect, content: &ContentView<'_>) {
    let mix_height = content.content_types.len() as u16 + 2;
    let [cards_area, mix_area, themes_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(mix_height),
        Constraint::Min(4),
    ])
    .areas(area);

    let [engagement, frequency, consistency] =
        Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(cards_area);
    stat_card(
        frame,
        engagement,
        "Engagement",
        content.engagement_level.to_string(),
        styles::emphasis(content.engagement_emphasis),
    );
    stat_card(
        frame,
        frequency,
        "Frequency",
        content.post_frequency.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    );
    stat_card(
        frame,
        consistency,
        "Consistency",
        format!("{}/10", format_score(content.brand_consistency)),
        styles::title(),
    );

    let block = section("Content mix");
    let inner = block.inner(mix_area);
    // label column, bar, percentage
    let label_width = 16u16;
    let bar_space = inner.width.saturating_sub(label_width + 8);
    let lines: Vec<Line> = content
        .content_types
        .iter()
        .map(|ct| {
            let filled = bar_width(ct.percentage, bar_space);
            Line::from(vec![
                Span::raw(format!("{:<width$}", ct.kind, width = usize::from(label_width))),
                Span::styled("█".repeat(usize::from(filled)), Style::default().fg(styles::ACCENT)),
                Span::styled(
                    "░".repeat(usize::from(bar_space - filled)),
                    Style::default().fg(styles::MUTED),
                ),
                Span::styled(format!(" {}%", format_score(ct.percentage)), styles::title()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), mix_area);

    let mut themes = bullets("# ", content.themes);
    themes.push(Line::from(""));
    themes.push(Line::from(Span::styled("STYLE & TONE", styles::label())));
    themes.push(Line::from(vec![
        Span::styled("Visual: ", styles::title()),
        Span::raw(content.visual_style),
    ]));
    themes.push(Line::from(vec![
        Span::styled("Voice: ", styles::title()),
        Span::raw(content.tone),
    ]));
    themes.push(Line::from(vec![
        Span::styled("Quality: ", styles::title()),
        Span::raw(format!(
            "visual {}/10, copywriting {}/10",
            format_score(content.visual_quality),
            format_score(content.copywriting_quality)
        )),
    ]));
    frame.render_widget(
        Paragraph::new(themes)
            .wrap(Wrap { trim: true })
            .block(section("Recurring themes")),
        themes_area,
    );
}

fn render_competitors(frame: &mut Frame, area: Rect, view: &CompetitorsView<'_>) {
    let [chart_area, cards_area] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);
    render_benchmark(frame, chart_area, &view.benchmark);

    if view.cards.is_empty() {
        return;
    }
    let count = view.cards.len() as u32;
    let columns =
        Layout::horizontal(vec![Constraint::Ratio(1, count); view.cards.len()]).split(cards_area);
    for (card, column) in view.cards.iter().zip(columns.iter()) {
        let mut lines = vec![Line::from(Span::styled(
            "STRENGTHS",
            styles::emphasis(Emphasis::Strong),
        ))];
        lines.extend(bullets("• ", card.strengths));
        lines.push(Line::from(Span::styled("BEST PRACTICES", styles::label())));
        lines.extend(bullets("• ", card.practices));
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(section(card.name)),
            *column,
        );
    }
}

fn render_diagnosis(frame: &mut Frame, area: Rect, view: &DiagnosisView<'_>) {
    let gaps_height = view.gaps.len() as u16 + 2;
    let [opportunities_area, gaps_area] =
        Layout::vertical([Constraint::Min(4), Constraint::Length(gaps_height)]).areas(area);

    let mut lines = Vec::new();
    for opp in &view.opportunities {
        let style = styles::priority(opp.treatment);
        lines.push(Line::from(vec![
            Span::styled(opp.area, style.add_modifier(Modifier::BOLD)),
            Span::styled(format!("  [PRIORITY {}]", opp.priority.to_uppercase()), style),
        ]));
        lines.push(Line::from(Span::styled(opp.advice, style)));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(section("Priority opportunities")),
        opportunities_area,
    );

    frame.render_widget(
        Paragraph::new(bullets("✕ ", view.gaps))
            .wrap(Wrap { trim: true })
            .block(section("Gaps detected")),
        gaps_area,
    );
}

fn render_proposal(frame: &mut Frame, area: Rect, view: &ProposalView<'_>) {
    let [intro_area, grid_area, benefits_area] = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Percentage(45),
        Constraint::Percentage(25),
    ])
    .areas(area);

    let mut intro = vec![Line::from(view.introduction), Line::from("")];
    intro.extend(bullets("! ", view.pain_points));
    frame.render_widget(
        Paragraph::new(intro)
            .wrap(Wrap { trim: true })
            .block(section("Our growth strategy")),
        intro_area,
    );

    let [top, bottom] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(grid_area);
    let [a, b] = Layout::horizontal([Constraint::Percentage(50); 2]).areas(top);
    let [c, d] = Layout::horizontal([Constraint::Percentage(50); 2]).areas(bottom);
    for (item, cell) in view.solutions.iter().zip([a, b, c, d]) {
        frame.render_widget(
            Paragraph::new(item.body)
                .wrap(Wrap { trim: true })
                .block(section(item.title)),
            cell,
        );
    }

    let benefits: Vec<Line> = view
        .benefits
        .iter()
        .map(|(metric, improvement)| {
            Line::from(vec![
                Span::raw(format!("{}: ", metric)),
                Span::styled(format!("+{}", improvement), styles::title()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(benefits).block(section("Projected results (next 6 months)")),
        benefits_area,
    );
}

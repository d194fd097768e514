//! Printable report export.
//!
//! Writes every tab of a completed analysis into a single Markdown file.

use crate::analysis::{AnalysisDocument, CompetitorMetrics};
use crate::controller::Tab;
use crate::report::{self, format_score, PriorityTreatment, TabView};
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Write the report into `dir` and return the created file
pub fn write_report(document: &AnalysisDocument, dir: &Path) -> Result<PathBuf, ExportError> {
    let now = Local::now();
    std::fs::create_dir_all(dir)?;

    let path = dir.join(file_name(&document.basic_info.handle, &now));
    std::fs::write(&path, to_markdown(document, &now))?;
    info!(path = %path.display(), "Report exported");
    Ok(path)
}

fn file_name(handle: &str, at: &DateTime<Local>) -> String {
    let safe: String = handle
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '.' { c } else { '-' })
        .collect();
    let safe = if safe.is_empty() { "report".to_string() } else { safe };
    format!("{}-{}.md", safe, at.format("%Y%m%d-%H%M%S"))
}

/// Render the full report as Markdown
pub fn to_markdown(document: &AnalysisDocument, generated_at: &DateTime<Local>) -> String {
    let mut out = String::new();
    let view = report::render(document, Tab::Info);

    let _ = writeln!(out, "# @{}: {}", view.handle, document.basic_info.business_name);
    let _ = writeln!(out, "\n_Generated {}_\n", generated_at.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(
        out,
        "**Digital health score: {}/10**\n\n> {}\n",
        format_score(view.score_card.score),
        view.score_card.executive_summary
    );

    for tab in Tab::ALL {
        let _ = writeln!(out, "## {}\n", tab.label());
        write_tab(&mut out, &report::tab_view(document, tab));
    }

    let sidebar = view.sidebar;
    let _ = writeln!(out, "## Contact\n");
    let _ = writeln!(out, "- Phone: {}", sidebar.phone);
    let _ = writeln!(out, "- Email: {}", sidebar.email);
    let _ = writeln!(out, "- Link: {}\n", sidebar.main_link);

    if !sidebar.sources.is_empty() {
        let _ = writeln!(out, "## Sources\n");
        for source in sidebar.sources {
            let _ = writeln!(out, "- [{}]({})", source.title, source.uri);
        }
    }

    out
}

fn write_tab(out: &mut String, view: &TabView<'_>) {
    match view {
        TabView::Info(info) => {
            let _ = writeln!(out, "- Business: {}", info.business_name);
            let _ = writeln!(out, "- Category: {}", info.category);
            let _ = writeln!(out, "- Location: {}", info.location);
            let _ = writeln!(out, "- Website: {}", info.website);
            let _ = writeln!(out, "- Audience: {}", info.target_audience);
            let _ = writeln!(out, "- Value proposition: \"{}\"", info.unique_value_prop);
            let _ = writeln!(out, "- Services: {}\n", info.services.join(", "));
            let _ = writeln!(out, "{}\n", info.bio);
        }
        TabView::Content(content) => {
            let _ = writeln!(out, "- Engagement: {}", content.engagement_level);
            let _ = writeln!(out, "- Frequency: {}", content.post_frequency);
            let _ = writeln!(
                out,
                "- Consistency: {}/10",
                format_score(content.brand_consistency)
            );
            let _ = writeln!(
                out,
                "- Quality: visual {}, copywriting {}",
                format_score(content.visual_quality),
                format_score(content.copywriting_quality)
            );
            let _ = writeln!(out, "- Visual style: {}", content.visual_style);
            let _ = writeln!(out, "- Voice: {}\n", content.tone);
            let _ = writeln!(out, "| Content type | Share |\n|---|---|");
            for ct in content.content_types {
                let _ = writeln!(out, "| {} | {}% |", ct.kind, format_score(ct.percentage));
            }
            let _ = writeln!(out);
            for theme in content.themes {
                let _ = writeln!(out, "- #{}", theme);
            }
            let _ = writeln!(out);
        }
        TabView::Competitors(competitors) => {
            let _ = writeln!(
                out,
                "| Competitor | {} |\n|---|---|---|---|---|",
                CompetitorMetrics::LABELS.join(" | ")
            );
            for (name, metrics) in &competitors.benchmark.series {
                let values = metrics.values().map(format_score);
                let _ = writeln!(out, "| {} | {} |", name, values.join(" | "));
            }
            let _ = writeln!(out);
            for card in &competitors.cards {
                let _ = writeln!(out, "### {}\n", card.name);
                let _ = writeln!(out, "Strengths: {}", card.strengths.join("; "));
                let _ = writeln!(out, "Best practices: {}\n", card.practices.join("; "));
            }
        }
        TabView::Diagnosis(diagnosis) => {
            for opp in &diagnosis.opportunities {
                let marker = match opp.treatment {
                    PriorityTreatment::High => "🔴",
                    PriorityTreatment::Medium => "🟠",
                    PriorityTreatment::Low => "🟢",
                };
                let _ = writeln!(
                    out,
                    "- {} **{}** (priority {}): {}",
                    marker, opp.area, opp.priority, opp.advice
                );
            }
            let _ = writeln!(out, "\nGaps detected:\n");
            for gap in diagnosis.gaps {
                let _ = writeln!(out, "- ✕ {}", gap);
            }
            let _ = writeln!(out);
        }
        TabView::Proposal(proposal) => {
            let _ = writeln!(out, "{}\n", proposal.introduction);
            for pain in proposal.pain_points {
                let _ = writeln!(out, "- {}", pain);
            }
            let _ = writeln!(out);
            for item in &proposal.solutions {
                let _ = writeln!(out, "### {}\n\n{}\n", item.title, item.body);
            }
            let _ = writeln!(out, "Projected results (next 6 months):\n");
            for (metric, improvement) in &proposal.benefits {
                let _ = writeln!(out, "- {}: +{}", metric, improvement);
            }
            let _ = writeln!(out);
        }
    }
}

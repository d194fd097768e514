//! Report renderer: projects an [`AnalysisDocument`] into view models.
//!
//! Everything here is a pure function of (document, tab). Views borrow
//! from the document and never modify it.

use crate::analysis::{AnalysisDocument, CompetitorMetrics, ContentType, Source};
use crate::controller::Tab;

/// Circumference of the score ring
pub const RING_CIRCUMFERENCE: f64 = 364.0;

/// Shown for missing phone and email
pub const CONTACT_FALLBACK: &str = "Not detected";

/// Shown for a missing link-in-bio
pub const MAIN_LINK_FALLBACK: &str = "Instagram Linktree";

/// Number of list entries shown per competitor card
const COMPETITOR_PREVIEW: usize = 2;

/// Stroke offset of the score ring for a 0-10 score.
pub fn score_ring_offset(score: f64, circumference: f64) -> f64 {
    circumference - circumference * score / 10.0
}

/// Portion of the ring that is filled, clamped for drawing
pub fn ring_fill_ratio(offset: f64, circumference: f64) -> f64 {
    if circumference <= 0.0 {
        return 0.0;
    }
    ((circumference - offset) / circumference).clamp(0.0, 1.0)
}

/// Width in cells of a percentage bar inside `width` cells.
///
/// The drawn bar is clamped to the available width; the percentage itself
/// is displayed unmodified.
pub fn bar_width(percentage: f64, width: u16) -> u16 {
    if !percentage.is_finite() {
        return 0;
    }
    let cells = (f64::from(width) * percentage / 100.0).round();
    cells.clamp(0.0, f64::from(width)) as u16
}

/// Format a score without a trailing ".0" for whole numbers
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Display treatment for an opportunity priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTreatment {
    High,
    Medium,
    Low,
}

impl PriorityTreatment {
    /// Anything other than the high or medium tokens gets the low treatment
    pub fn classify(priority: &str) -> Self {
        match priority {
            "Alta" | "High" => PriorityTreatment::High,
            "Media" | "Medium" => PriorityTreatment::Medium,
            _ => PriorityTreatment::Low,
        }
    }
}

/// Emphasis of the engagement level card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Strong,
    Moderate,
}

impl Emphasis {
    pub fn for_engagement(level: &str) -> Self {
        match level {
            "Alto" | "High" => Emphasis::Strong,
            _ => Emphasis::Moderate,
        }
    }
}

/// Headline card shown above every tab
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard<'a> {
    pub score: f64,
    pub executive_summary: &'a str,
    pub ring_offset: f64,
}

impl ScoreCard<'_> {
    pub fn fill_ratio(&self) -> f64 {
        ring_fill_ratio(self.ring_offset, RING_CIRCUMFERENCE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoView<'a> {
    pub business_name: &'a str,
    pub category: &'a str,
    pub bio: &'a str,
    pub location: &'a str,
    pub website: &'a str,
    pub target_audience: &'a str,
    pub unique_value_prop: &'a str,
    pub services: &'a [String],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentView<'a> {
    pub engagement_level: &'a str,
    pub engagement_emphasis: Emphasis,
    pub post_frequency: &'a str,
    pub brand_consistency: f64,
    pub content_types: &'a [ContentType],
    pub themes: &'a [String],
    pub visual_style: &'a str,
    pub tone: &'a str,
    pub visual_quality: f64,
    pub copywriting_quality: f64,
}

/// Inputs of the benchmark chart
#[derive(Debug, Clone, PartialEq)]
pub struct Benchmark<'a> {
    /// Name of the analysed business
    pub reference: &'a str,
    pub series: Vec<(&'a str, CompetitorMetrics)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorCard<'a> {
    pub name: &'a str,
    pub strengths: &'a [String],
    pub practices: &'a [String],
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorsView<'a> {
    pub benchmark: Benchmark<'a>,
    pub cards: Vec<CompetitorCard<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityView<'a> {
    pub area: &'a str,
    pub priority: &'a str,
    pub treatment: PriorityTreatment,
    pub advice: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisView<'a> {
    pub opportunities: Vec<OpportunityView<'a>>,
    pub gaps: &'a [String],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolutionItem<'a> {
    pub title: &'static str,
    pub body: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProposalView<'a> {
    pub introduction: &'a str,
    pub pain_points: &'a [String],
    pub solutions: [SolutionItem<'a>; 4],
    pub benefits: Vec<(&'a str, &'a str)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabView<'a> {
    Info(InfoView<'a>),
    Content(ContentView<'a>),
    Competitors(CompetitorsView<'a>),
    Diagnosis(DiagnosisView<'a>),
    Proposal(ProposalView<'a>),
}

/// Contact channels and sources shown beside every tab
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarView<'a> {
    pub phone: &'a str,
    pub email: &'a str,
    pub main_link: &'a str,
    pub sources: &'a [Source],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView<'a> {
    pub handle: &'a str,
    pub score_card: ScoreCard<'a>,
    pub tab: TabView<'a>,
    pub sidebar: SidebarView<'a>,
}

/// Project the document for the active tab.
pub fn render(document: &AnalysisDocument, tab: Tab) -> ReportView<'_> {
    ReportView {
        handle: &document.basic_info.handle,
        score_card: score_card(document),
        tab: tab_view(document, tab),
        sidebar: sidebar(document),
    }
}

pub fn score_card(document: &AnalysisDocument) -> ScoreCard<'_> {
    let score = document.diagnosis.overall_score;
    ScoreCard {
        score,
        executive_summary: &document.diagnosis.executive_summary,
        ring_offset: score_ring_offset(score, RING_CIRCUMFERENCE),
    }
}

pub fn tab_view(document: &AnalysisDocument, tab: Tab) -> TabView<'_> {
    match tab {
        Tab::Info => TabView::Info(info_view(document)),
        Tab::Content => TabView::Content(content_view(document)),
        Tab::Competitors => TabView::Competitors(competitors_view(document)),
        Tab::Diagnosis => TabView::Diagnosis(diagnosis_view(document)),
        Tab::Proposal => TabView::Proposal(proposal_view(document)),
    }
}

fn info_view(document: &AnalysisDocument) -> InfoView<'_> {
    let info = &document.basic_info;
    InfoView {
        business_name: &info.business_name,
        category: &info.category,
        bio: &info.bio,
        location: &info.location,
        website: info.contact.website.as_deref().unwrap_or_default(),
        target_audience: &info.target_audience,
        unique_value_prop: &info.unique_value_prop,
        services: &info.services,
    }
}

fn content_view(document: &AnalysisDocument) -> ContentView<'_> {
    let metrics = &document.content_metrics;
    ContentView {
        engagement_level: &metrics.engagement_level,
        engagement_emphasis: Emphasis::for_engagement(&metrics.engagement_level),
        post_frequency: &metrics.post_frequency,
        brand_consistency: metrics.brand_consistency,
        content_types: &metrics.content_types,
        themes: &metrics.themes,
        visual_style: &metrics.visual_style,
        tone: &metrics.tone,
        visual_quality: metrics.quality_score.visual,
        copywriting_quality: metrics.quality_score.copywriting,
    }
}

fn competitors_view(document: &AnalysisDocument) -> CompetitorsView<'_> {
    let benchmark = Benchmark {
        reference: &document.basic_info.business_name,
        series: document
            .competitors
            .iter()
            .map(|c| (c.name.as_str(), c.metrics))
            .collect(),
    };
    let cards = document
        .competitors
        .iter()
        .map(|c| CompetitorCard {
            name: &c.name,
            strengths: preview(&c.strengths),
            practices: preview(&c.practices),
        })
        .collect();

    CompetitorsView { benchmark, cards }
}

fn preview(items: &[String]) -> &[String] {
    &items[..items.len().min(COMPETITOR_PREVIEW)]
}

fn diagnosis_view(document: &AnalysisDocument) -> DiagnosisView<'_> {
    let opportunities = document
        .diagnosis
        .opportunities
        .iter()
        .map(|o| OpportunityView {
            area: &o.area,
            priority: &o.priority,
            treatment: PriorityTreatment::classify(&o.priority),
            advice: &o.advice,
        })
        .collect();

    DiagnosisView {
        opportunities,
        gaps: &document.diagnosis.gaps_vs_competitors,
    }
}

fn proposal_view(document: &AnalysisDocument) -> ProposalView<'_> {
    let proposal = &document.commercial_proposal;
    let solution = &proposal.solution;
    ProposalView {
        introduction: &proposal.introduction,
        pain_points: &proposal.pain_points,
        solutions: [
            SolutionItem {
                title: "Web Ecosystem",
                body: &solution.web_design,
            },
            SolutionItem {
                title: "AI & Automation",
                body: &solution.chatbot,
            },
            SolutionItem {
                title: "Booking",
                body: &solution.booking_system,
            },
            SolutionItem {
                title: "Social Optimization",
                body: &solution.social_optimization,
            },
        ],
        benefits: proposal
            .projected_benefits
            .iter()
            .map(|b| (b.metric.as_str(), b.improvement.as_str()))
            .collect(),
    }
}

pub fn sidebar(document: &AnalysisDocument) -> SidebarView<'_> {
    let contact = &document.basic_info.contact;
    SidebarView {
        phone: present(contact.phone.as_deref()).unwrap_or(CONTACT_FALLBACK),
        email: present(contact.email.as_deref()).unwrap_or(CONTACT_FALLBACK),
        main_link: present(contact.main_link.as_deref()).unwrap_or(MAIN_LINK_FALLBACK),
        sources: &document.sources,
    }
}

// Blank strings count as missing
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures;

    #[test]
    fn ring_offset_for_score_seven() {
        let offset = score_ring_offset(7.0, 364.0);
        assert!((offset - 109.2).abs() < 1e-9);
    }

    #[test]
    fn ring_offset_bounds() {
        assert_eq!(score_ring_offset(0.0, RING_CIRCUMFERENCE), 364.0);
        assert_eq!(score_ring_offset(10.0, RING_CIRCUMFERENCE), 0.0);
        // out-of-range scores pass through
        assert!(score_ring_offset(12.0, RING_CIRCUMFERENCE) < 0.0);
    }

    #[test]
    fn ring_fill_is_clamped_for_drawing() {
        assert!((ring_fill_ratio(109.2, 364.0) - 0.7).abs() < 1e-9);
        assert_eq!(ring_fill_ratio(-72.8, 364.0), 1.0);
        assert_eq!(ring_fill_ratio(400.0, 364.0), 0.0);
    }

    #[test]
    fn priority_classification_defaults_to_low() {
        assert_eq!(PriorityTreatment::classify("Alta"), PriorityTreatment::High);
        assert_eq!(PriorityTreatment::classify("Media"), PriorityTreatment::Medium);
        assert_eq!(PriorityTreatment::classify("Baja"), PriorityTreatment::Low);
        assert_eq!(PriorityTreatment::classify("alta"), PriorityTreatment::Low);
        assert_eq!(PriorityTreatment::classify("Urgent"), PriorityTreatment::Low);
        assert_eq!(PriorityTreatment::classify(""), PriorityTreatment::Low);
    }

    #[test]
    fn priority_classification_accepts_english_tokens() {
        assert_eq!(PriorityTreatment::classify("High"), PriorityTreatment::High);
        assert_eq!(PriorityTreatment::classify("Medium"), PriorityTreatment::Medium);
        assert_eq!(PriorityTreatment::classify("Low"), PriorityTreatment::Low);
    }

    #[test]
    fn engagement_emphasis() {
        assert_eq!(Emphasis::for_engagement("Alto"), Emphasis::Strong);
        assert_eq!(Emphasis::for_engagement("Medio"), Emphasis::Moderate);
        assert_eq!(Emphasis::for_engagement("High"), Emphasis::Strong);
        assert_eq!(Emphasis::for_engagement("Low"), Emphasis::Moderate);
    }

    #[test]
    fn bar_width_scales_and_clamps() {
        assert_eq!(bar_width(50.0, 40), 20);
        assert_eq!(bar_width(0.0, 40), 0);
        assert_eq!(bar_width(150.0, 40), 40);
        assert_eq!(bar_width(-5.0, 40), 0);
        assert_eq!(bar_width(f64::NAN, 40), 0);
    }

    #[test]
    fn format_score_drops_trailing_zero() {
        assert_eq!(format_score(7.0), "7");
        assert_eq!(format_score(7.5), "7.5");
    }

    #[test]
    fn competitor_cards_show_first_two_entries() {
        let doc = fixtures::sample();
        let TabView::Competitors(view) = tab_view(&doc, Tab::Competitors) else {
            panic!("expected competitors view");
        };
        let card = &view.cards[0];
        assert_eq!(card.strengths, &["Daily stories", "Clear pricing"]);
        assert_eq!(card.practices, &["Weekly giveaways", "Pinned menu"]);
        assert_eq!(view.benchmark.reference, "Panadería Sol");
        assert_eq!(view.benchmark.series[0].0, "Horno Luna");
    }

    #[test]
    fn short_competitor_lists_are_not_padded() {
        let mut doc = fixtures::sample();
        doc.competitors[0].strengths.truncate(1);
        doc.competitors[0].practices.clear();
        let TabView::Competitors(view) = tab_view(&doc, Tab::Competitors) else {
            panic!("expected competitors view");
        };
        assert_eq!(view.cards[0].strengths.len(), 1);
        assert!(view.cards[0].practices.is_empty());
    }

    #[test]
    fn sidebar_uses_fallbacks_for_missing_contacts() {
        let doc = fixtures::sample();
        let view = sidebar(&doc);
        assert_eq!(view.phone, "+34 600 000 000");
        assert_eq!(view.email, CONTACT_FALLBACK);
        assert_eq!(view.main_link, MAIN_LINK_FALLBACK);
        assert_eq!(view.sources.len(), 1);
    }

    #[test]
    fn diagnosis_view_classifies_each_opportunity() {
        let doc = fixtures::sample();
        let TabView::Diagnosis(view) = tab_view(&doc, Tab::Diagnosis) else {
            panic!("expected diagnosis view");
        };
        let treatments: Vec<_> = view.opportunities.iter().map(|o| o.treatment).collect();
        assert_eq!(treatments, vec![PriorityTreatment::High, PriorityTreatment::Low]);
        assert_eq!(view.gaps, &["No pinned menu"]);
    }

    #[test]
    fn render_is_idempotent_and_leaves_document_untouched() {
        let doc = fixtures::sample();
        for tab in Tab::ALL {
            assert_eq!(render(&doc, tab), render(&doc, tab));
        }
        assert_eq!(doc, fixtures::sample());
    }

    #[test]
    fn score_card_carries_offset() {
        let doc = fixtures::sample();
        let card = score_card(&doc);
        assert_eq!(card.score, 7.0);
        assert!((card.fill_ratio() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn blank_contact_values_fall_back() {
        let mut doc = fixtures::sample();
        doc.basic_info.contact.phone = Some(String::new());
        doc.basic_info.contact.email = Some("  ".to_string());
        doc.basic_info.contact.main_link = Some(String::new());

        let view = sidebar(&doc);
        assert_eq!(view.phone, CONTACT_FALLBACK);
        assert_eq!(view.email, CONTACT_FALLBACK);
        assert_eq!(view.main_link, MAIN_LINK_FALLBACK);
    }
}

//! AnalysisDocument - the structured business analysis returned by the LLM.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete analysis of a business's Instagram presence.
///
/// Received wholesale from the analyst and never mutated afterwards.
/// Numeric fields are kept exactly as the model produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDocument {
    pub basic_info: BasicInfo,
    pub content_metrics: ContentMetrics,
    pub competitors: Vec<Competitor>,
    pub diagnosis: Diagnosis,
    pub commercial_proposal: CommercialProposal,
    /// Where the information was gathered from
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Profile data of the analysed business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    /// Instagram handle without the leading "@"
    pub handle: String,
    pub business_name: String,
    pub category: String,
    pub bio: String,
    pub services: Vec<String>,
    pub location: String,
    pub target_audience: String,
    pub unique_value_prop: String,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Link-in-bio target (Linktree and similar)
    #[serde(default)]
    pub main_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub post_frequency: String,
    pub content_types: Vec<ContentType>,
    pub themes: Vec<String>,
    pub tone: String,
    pub visual_style: String,
    /// One of "Bajo", "Medio" or "Alto"
    pub engagement_level: String,
    /// Score from 1 to 10
    pub brand_consistency: f64,
    pub quality_score: QualityScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContentType {
    #[serde(rename = "type")]
    pub kind: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QualityScore {
    pub visual: f64,
    pub copywriting: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Competitor {
    pub name: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub practices: Vec<String>,
    pub metrics: CompetitorMetrics,
}

/// Benchmark scores from 0 to 10
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompetitorMetrics {
    pub presence: f64,
    pub consistency: f64,
    pub professionalism: f64,
    pub engagement: f64,
}

impl CompetitorMetrics {
    /// Metric labels in chart order
    pub const LABELS: [&'static str; 4] = ["Presence", "Consistency", "Professionalism", "Engagement"];

    /// Values in the same order as [`CompetitorMetrics::LABELS`]
    pub fn values(&self) -> [f64; 4] {
        [
            self.presence,
            self.consistency,
            self.professionalism,
            self.engagement,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    /// Score from 0 to 10
    pub overall_score: f64,
    pub executive_summary: String,
    pub opportunities: Vec<Opportunity>,
    pub gaps_vs_competitors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Opportunity {
    pub area: String,
    /// One of "Alta", "Media" or "Baja"
    pub priority: String,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommercialProposal {
    pub introduction: String,
    pub pain_points: Vec<String>,
    pub solution: Solution,
    pub projected_benefits: Vec<ProjectedBenefit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub web_design: String,
    pub chatbot: String,
    pub booking_system: String,
    pub social_optimization: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectedBenefit {
    pub metric: String,
    pub improvement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Source {
    pub title: String,
    pub uri: String,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_document() {
        let json = serde_json::to_string(&fixtures::sample()).unwrap();
        assert!(json.contains("\"basicInfo\""));
        assert!(json.contains("\"gapsVsCompetitors\""));
        assert!(json.contains("\"type\":\"Reels\""));

        let parsed: AnalysisDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fixtures::sample());
    }

    #[test]
    fn contact_fields_are_optional() {
        let contact: Contact = serde_json::from_str(r#"{"phone":"123"}"#).unwrap();
        assert_eq!(contact.phone.as_deref(), Some("123"));
        assert!(contact.email.is_none());
        assert!(contact.main_link.is_none());
    }

    #[test]
    fn out_of_range_scores_are_kept_as_is() {
        let mut doc = fixtures::sample();
        doc.diagnosis.overall_score = 14.0;
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: AnalysisDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.diagnosis.overall_score, 14.0);
    }

    #[test]
    fn competitor_metric_values_follow_label_order() {
        let metrics = fixtures::sample().competitors[0].metrics;
        assert_eq!(metrics.values(), [8.0, 7.0, 6.0, 9.0]);
        assert_eq!(CompetitorMetrics::LABELS[3], "Engagement");
    }
}

//! LLM agent module for structured business analysis.
//!
//! Uses rstructor for the Gemini request and schemars to describe the expected output.

pub use crate::analysis::AnalysisDocument;

use crate::config::Config;
use async_trait::async_trait;
use rstructor::{GeminiClient, GeminiModel, LLMClient};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("LLM returned an empty response")]
    EmptyResponse,
    #[error("failed to parse response: {0}")]
    ParseError(String),
    #[error("configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),
}

/// The external analysis call: one request, one outcome.
#[async_trait]
pub trait Analyst: Send + Sync {
    async fn analyze(&self, handle: &str) -> Result<AnalysisDocument, AgentError>;
}

/// Gemini-backed analyst
#[derive(Debug, Clone)]
pub struct GeminiAnalyst {
    api_key: String,
    model: String,
    persona: String,
    language: String,
}

impl GeminiAnalyst {
    /// Build an analyst from config, failing early when the API key is missing
    pub fn from_config(config: &Config) -> Result<Self, AgentError> {
        let api_key = config.api_key()?.to_string();
        Ok(Self {
            api_key,
            model: config.agent.model.clone(),
            persona: config.agent.persona.clone(),
            language: config.agent.language.clone(),
        })
    }
}

#[async_trait]
impl Analyst for GeminiAnalyst {
    async fn analyze(&self, handle: &str) -> Result<AnalysisDocument, AgentError> {
        let model = parse_gemini_model(&self.model);

        let client = GeminiClient::new(self.api_key.as_str())
            .map_err(|e| AgentError::RequestFailed(e.to_string()))?
            .model(model);

        let prompt = build_prompt(&self.persona, &self.language, handle)?;

        info!(handle, model = %self.model, "Requesting analysis");
        let result = client
            .generate_with_metadata(&prompt)
            .await
            .map_err(|e| AgentError::RequestFailed(e.to_string()))?;
        debug!(bytes = result.text.len(), "Received analysis response");

        parse_document(&result.text)
    }
}

/// Build the analysis prompt including persona, instructions, schema and handle
pub fn build_prompt(persona: &str, language: &str, handle: &str) -> Result<String, AgentError> {
    let schema = schemars::schema_for!(AnalysisDocument);
    let schema_json =
        serde_json::to_string_pretty(&schema).map_err(|e| AgentError::ParseError(e.to_string()))?;

    Ok(format!(
        r#"{persona}

Research the public presence of the Instagram business account @{handle}: the profile itself,
its website, Google listings, reviews and press mentions. Then produce a professional audit:

1. Basic profile data, services and contact channels.
2. Content analysis: posting frequency, content mix in percentages, recurring themes, tone,
   visual style, engagement level ("Bajo", "Medio" or "Alto") and brand consistency from 1 to 10.
3. The three most relevant local competitors with strengths, weaknesses, best practices and
   scores from 0 to 10 for presence, consistency, professionalism and engagement.
4. A diagnosis with an overall score from 0 to 10, an executive summary, prioritised
   opportunities (priority "Alta", "Media" or "Baja") and gaps versus competitors.
5. A commercial proposal selling web design, an AI chatbot, a booking system and social media
   optimisation, with projected benefits over the next six months.
6. The sources you used, as title and URI.

Write all text in {language}.

You MUST respond with valid JSON matching this exact schema:
{schema_json}

Do not include any markdown formatting, code blocks, or explanations. Only output the raw JSON object."#
    ))
}

/// Parse a raw model reply into a document
pub fn parse_document(text: &str) -> Result<AnalysisDocument, AgentError> {
    let cleaned = strip_markdown_json(text);
    if cleaned.is_empty() {
        return Err(AgentError::EmptyResponse);
    }

    serde_json::from_str(&cleaned).map_err(|e| AgentError::ParseError(format!("{}: {}", e, cleaned)))
}

/// Strip markdown code block wrappers from JSON response
fn strip_markdown_json(text: &str) -> String {
    let trimmed = text.trim();

    // Remove ```json ... ``` or ``` ... ```
    if let Some(rest) = trimmed.strip_prefix("```") {
        let without_prefix = rest.strip_prefix("json").unwrap_or(rest);

        if let Some(end_idx) = without_prefix.rfind("```") {
            return without_prefix[..end_idx].trim().to_string();
        }
    }

    trimmed.to_string()
}

/// Parse a model string into a GeminiModel
fn parse_gemini_model(model: &str) -> GeminiModel {
    match model {
        "gemini-2.0-flash" => GeminiModel::Gemini20Flash,
        "gemini-2.5-flash" => GeminiModel::Gemini25Flash,
        "gemini-2.5-pro" => GeminiModel::Gemini25Pro,
        _ => GeminiModel::Gemini25Flash, // Default
    }
}

//! Enrichment: turn posting text into a tech/focus summary through the
//! extraction service.

use tracing::warn;

use crate::clients::OllamaClient;
use crate::models::EnrichmentResult;
use crate::parse;

/// Placeholder used when the extraction service is unreachable. Deliberately
/// distinct from the invalid sentinel: an outage keeps the lead (with this
/// marker) the same way headcount degrades to zero, instead of silently
/// discarding the rest of the harvest.
pub const AI_ERROR_PLACEHOLDER: &str = "AI Error";

/// Upper bound on posting text spliced into the prompt, to respect service
/// context limits.
const MAX_PROMPT_TEXT_CHARS: usize = 6000;

pub struct EnrichmentEngine<'a> {
    llm: &'a OllamaClient,
}

impl<'a> EnrichmentEngine<'a> {
    pub fn new(llm: &'a OllamaClient) -> Self {
        Self { llm }
    }

    /// Analyze posting text. Never fails: a service outage degrades to the
    /// error placeholder with `valid = true`.
    pub async fn analyze(&self, text: &str) -> EnrichmentResult {
        let prompt = build_analysis_prompt(text);
        match self.llm.generate(&prompt).await {
            Ok(raw) => parse::parse_analysis(&raw),
            Err(e) => {
                warn!("Enrichment degraded to placeholder: {}", e);
                EnrichmentResult {
                    tech_stack: Vec::new(),
                    focus_summary: AI_ERROR_PLACEHOLDER.to_string(),
                    valid: true,
                }
            }
        }
    }
}

fn build_analysis_prompt(text: &str) -> String {
    let bounded: String = text.chars().take(MAX_PROMPT_TEXT_CHARS).collect();
    format!(
        "Analyze this job posting text. Extract:\n\
         1. Tech Stack (top 5 tools)\n\
         2. Focus (one sentence describing the hiring goal)\n\
         If the text is a login page, an error page, or otherwise not a job posting, return \"{}\".\n\
         \n\
         Format:\n\
         Tech: [comma-separated list]\n\
         Focus: [sentence]\n\
         \n\
         Text: {}",
        parse::INVALID_SENTINEL,
        bounded
    )
}

//! Job Analyzer — turns a pasted job description into a short summary and
//! the three skills to highlight on a resume.
//!
//! The remote model sits behind `AnalysisGateway`; `LlmClient` is the
//! production implementation. Everything after the raw text comes back
//! (fence stripping, parsing, shape checks) happens here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, LlmClient, LlmError};

/// Number of resume skills every analysis must return.
pub const SKILL_COUNT: usize = 3;

const DESCRIPTION_REQUIRED: &str = "Job description is required and must be a string";
const INVALID_FORMAT: &str = "Invalid response format from Gemini";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub summary: String,
    pub skills: Vec<String>,
}

/// The remote text-generation capability. Returns the model's raw text.
///
/// Carried in `AppState` as `Arc<dyn AnalysisGateway>`.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl AnalysisGateway for LlmClient {
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        self.call(prompt, system)
            .await?
            .text()
            .ok_or(LlmError::EmptyContent)
    }
}

/// Sends one analysis request through `gateway` and validates the result.
pub async fn analyze_job_description(
    description: &str,
    gateway: &dyn AnalysisGateway,
) -> Result<JobAnalysis, AppError> {
    if description.trim().is_empty() {
        return Err(AppError::Analysis(DESCRIPTION_REQUIRED.to_string()));
    }

    let prompt = ANALYSIS_PROMPT_TEMPLATE.replace("{job_description}", description);
    let system = format!("{ANALYSIS_SYSTEM} {JSON_ONLY_SYSTEM}");

    let raw = gateway
        .generate(&prompt, &system)
        .await
        .map_err(|e| analysis_failed(&e.to_string()))?;

    parse_analysis(&raw).map_err(|reason| {
        warn!("Rejected model output: {raw}");
        analysis_failed(&reason)
    })
}

fn parse_analysis(raw: &str) -> Result<JobAnalysis, String> {
    let analysis: JobAnalysis =
        serde_json::from_str(strip_json_fences(raw)).map_err(|e| e.to_string())?;

    let complete = !analysis.summary.trim().is_empty()
        && analysis.skills.len() == SKILL_COUNT
        && analysis.skills.iter().all(|s| !s.trim().is_empty());

    if complete {
        Ok(analysis)
    } else {
        Err(INVALID_FORMAT.to_string())
    }
}

fn analysis_failed(reason: &str) -> AppError {
    AppError::Analysis(format!("Failed to analyze job description: {reason}"))
}

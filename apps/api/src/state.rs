use std::sync::Arc;

use crate::analysis::analyzer::AnalysisGateway;
use crate::jobs::service::JobService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<JobService>,
    /// Pluggable analysis backend. Default: `LlmClient` against Gemini.
    pub analyzer: Arc<dyn AnalysisGateway>,
}

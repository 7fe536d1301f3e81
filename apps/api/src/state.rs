use std::sync::Arc;

use crate::ats::scorer::AtsScorer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ATS scorer. Default: HeuristicAtsScorer. Swap via ENABLE_LLM_ATS_SCORING.
    pub ats_scorer: Arc<dyn AtsScorer>,
}

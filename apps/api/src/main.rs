mod ats;
mod config;
mod errors;
mod llm_client;
mod roles;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ats::scorer::{AtsScorer, HeuristicAtsScorer, LlmAtsScorer, NOTICE_NO_API_KEY};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Placement API v{}", env!("CARGO_PKG_VERSION"));

    let ats_scorer = build_ats_scorer(&config)?;

    let state = AppState {
        config: config.clone(),
        ats_scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the dashboard origin once it is fixed per deployment

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Heuristic scoring by default; LLM-enhanced scoring when enabled and a key is set.
fn build_ats_scorer(config: &Config) -> Result<Arc<dyn AtsScorer>> {
    match config.llm_scoring_key() {
        Some(key) => {
            let llm = LlmClient::new(key.to_string(), config.retry_policy())?;
            info!(
                "ATS scorer: LLM-enhanced (model: {}, max attempts: {})",
                llm_client::MODEL,
                config.llm_max_retries
            );
            Ok(Arc::new(LlmAtsScorer(llm)))
        }
        None => {
            if config.enable_llm_ats_scoring {
                warn!("ENABLE_LLM_ATS_SCORING is set but ANTHROPIC_API_KEY is missing");
            }
            info!("ATS scorer: heuristic");
            Ok(Arc::new(HeuristicAtsScorer::with_notice(NOTICE_NO_API_KEY)))
        }
    }
}

//! Axum route handlers for the ATS API.
//!
//! Handlers own the sanitization boundary: text is cleaned and truncated here
//! before any scorer sees it.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::ats::keywords::{extract_keywords, KeywordMatch};
use crate::ats::sanitize::{sanitize_job_description, sanitize_text};
use crate::ats::scorer::ScoredAnalysis;
use crate::ats::sections::{extract_sections, ResumeSection};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SectionsRequest {
    pub resume_text: String,
}

/// Sanitized request text, ready for a scorer.
struct CleanInput {
    resume_text: String,
    job_description: Option<String>,
}

/// Text that is blank after sanitization is passed through; the analyzer's
/// short-input guard turns it into a zero report.
fn clean_input(
    state: &AppState,
    resume_text: &str,
    job_description: Option<&str>,
) -> CleanInput {
    CleanInput {
        resume_text: sanitize_text(resume_text, state.config.max_resume_chars),
        job_description: sanitize_job_description(job_description, state.config.max_jd_chars),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
///
/// Scores resume text, optionally against a job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ScoredAnalysis>, AppError> {
    let input = clean_input(
        &state,
        &request.resume_text,
        request.job_description.as_deref(),
    );

    let scored = state
        .ats_scorer
        .score(&input.resume_text, input.job_description.as_deref())
        .await?;

    Ok(Json(scored))
}

/// POST /api/v1/ats/analyze/upload
///
/// Multipart form: `file` (PDF resume, required), `job_description` (text, optional).
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoredAnalysis>, AppError> {
    let mut pdf_bytes: Option<Vec<u8>> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
                pdf_bytes = Some(bytes.to_vec());
            }
            Some("job_description") => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job_description: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let pdf_bytes =
        pdf_bytes.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;
    info!("Extracting text from uploaded resume ({} bytes)", pdf_bytes.len());

    let resume_text = extract_pdf_text(pdf_bytes).await?;
    let input = clean_input(&state, &resume_text, job_description.as_deref());

    let scored = state
        .ats_scorer
        .score(&input.resume_text, input.job_description.as_deref())
        .await?;

    Ok(Json(scored))
}

/// PDF parsing is CPU-bound; keep it off the async runtime.
async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed extracting PDF: {e}"))
        })?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))
}

/// POST /api/v1/ats/sections
pub async fn handle_sections(
    State(state): State<AppState>,
    Json(request): Json<SectionsRequest>,
) -> Result<Json<Vec<ResumeSection>>, AppError> {
    let input = clean_input(&state, &request.resume_text, None);
    Ok(Json(extract_sections(&input.resume_text)))
}

/// POST /api/v1/ats/keywords
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<KeywordMatch>, AppError> {
    let input = clean_input(
        &state,
        &request.resume_text,
        request.job_description.as_deref(),
    );
    Ok(Json(extract_keywords(
        &input.resume_text,
        input.job_description.as_deref(),
    )))
}

//! ATS scoring backends — pluggable, trait-based.
//!
//! Default: `HeuristicAtsScorer` (pure-Rust, deterministic, never fails).
//! Optional: `LlmAtsScorer` refines the heuristic baseline via Claude and falls
//! back to the baseline whenever the LLM is unavailable.
//!
//! `AppState` holds an `Arc<dyn AtsScorer>`, chosen at startup from config.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ats::analyzer::{analyze_ats, AtsAnalysis};
use crate::ats::keywords::MAX_KEYWORD_SCORE;
use crate::ats::prompts::{build_ats_prompt, ATS_SYSTEM};
use crate::ats::recommendations::MAX_RECOMMENDATIONS;
use crate::ats::scorers::{
    MAX_CONTACT_SCORE, MAX_EXPERIENCE_SCORE, MAX_FORMAT_SCORE, MAX_READABILITY_SCORE,
    MAX_SKILLS_SCORE,
};
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};

pub const BACKEND_HEURISTIC: &str = "heuristic";
pub const BACKEND_LLM: &str = "llm";

pub const NOTICE_NO_API_KEY: &str = "Configure an API key to enable AI-enhanced scoring";
pub const NOTICE_AI_UNAVAILABLE: &str = "AI enhancement unavailable; showing heuristic analysis";

/// Analysis plus which backend produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnalysis {
    pub analysis: AtsAnalysis,
    pub backend: String, // "heuristic" | "llm"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Implement this to swap scoring backends without touching handlers.
#[async_trait]
pub trait AtsScorer: Send + Sync {
    async fn score(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<ScoredAnalysis, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAtsScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct HeuristicAtsScorer {
    notice: Option<String>,
}

impl HeuristicAtsScorer {
    /// Heuristic scorer that tells callers AI scoring could be enabled.
    pub fn with_notice(notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
        }
    }
}

#[async_trait]
impl AtsScorer for HeuristicAtsScorer {
    async fn score(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<ScoredAnalysis, AppError> {
        let analysis = run_heuristic(resume_text, job_description).await?;
        info!(
            "Heuristic ATS analysis complete: overall_score={}",
            analysis.overall_score
        );
        Ok(ScoredAnalysis {
            analysis,
            backend: BACKEND_HEURISTIC.to_string(),
            notice: self.notice.clone(),
        })
    }
}

/// Runs the CPU-bound analyzer off the async runtime.
pub async fn run_heuristic(
    resume_text: &str,
    job_description: Option<&str>,
) -> Result<AtsAnalysis, AppError> {
    let resume_text = resume_text.to_owned();
    let job_description = job_description.map(str::to_owned);

    tokio::task::spawn_blocking(move || analyze_ats(&resume_text, job_description.as_deref()))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "spawn_blocking failed in ATS analysis: {e}"
            ))
        })
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAtsScorer
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAtsScorer(pub LlmClient);

#[async_trait]
impl AtsScorer for LlmAtsScorer {
    async fn score(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<ScoredAnalysis, AppError> {
        let baseline = run_heuristic(resume_text, job_description).await?;

        // Nothing for the LLM to refine.
        if baseline.overall_score == 0 {
            return Ok(ScoredAnalysis {
                analysis: baseline,
                backend: BACKEND_HEURISTIC.to_string(),
                notice: None,
            });
        }

        let baseline_json = serde_json::to_string(&baseline)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("serializing ATS baseline: {e}")))?;
        let prompt = build_ats_prompt(resume_text, job_description, &baseline_json);

        let refined = self.0.call_json::<AtsAnalysis>(&prompt, ATS_SYSTEM).await;
        Ok(merge_llm_result(baseline, refined))
    }
}

/// Accepts a bounded LLM analysis, or falls back to the heuristic baseline.
pub(crate) fn merge_llm_result(
    baseline: AtsAnalysis,
    refined: Result<AtsAnalysis, LlmError>,
) -> ScoredAnalysis {
    match refined {
        Ok(analysis) => {
            let analysis = bound_llm_analysis(analysis);
            info!(
                "LLM ATS analysis complete: overall_score={} (baseline {})",
                analysis.overall_score, baseline.overall_score
            );
            ScoredAnalysis {
                analysis,
                backend: BACKEND_LLM.to_string(),
                notice: None,
            }
        }
        Err(e) => {
            warn!("LLM ATS scoring failed, falling back to heuristic: {e}");
            ScoredAnalysis {
                analysis: baseline,
                backend: BACKEND_HEURISTIC.to_string(),
                notice: Some(NOTICE_AI_UNAVAILABLE.to_string()),
            }
        }
    }
}

/// Clamps every category to its bound and recomputes the overall score, so the
/// LLM path honours the same invariants as the heuristic path.
fn bound_llm_analysis(mut analysis: AtsAnalysis) -> AtsAnalysis {
    let s = &mut analysis.category_scores;
    s.format = s.format.min(MAX_FORMAT_SCORE as u32);
    s.keywords = s.keywords.min(MAX_KEYWORD_SCORE as u32);
    s.experience = s.experience.min(MAX_EXPERIENCE_SCORE as u32);
    s.skills = s.skills.min(MAX_SKILLS_SCORE as u32);
    s.contact = s.contact.min(MAX_CONTACT_SCORE as u32);
    s.readability = s.readability.min(MAX_READABILITY_SCORE as u32);
    analysis.overall_score = analysis.category_scores.total();
    analysis.recommendations.truncate(MAX_RECOMMENDATIONS);
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::analyzer::{CategoryScores, TOO_SHORT_MESSAGE};

    const RESUME: &str =
        "Contact: a@b.com 555-123-4567\nEducation\nMIT BS Computer Science\nSkills\nPython React SQL\n";

    #[tokio::test]
    async fn test_heuristic_scorer_matches_pure_analyzer() {
        let scored = HeuristicAtsScorer::default()
            .score(RESUME, Some("Docker"))
            .await
            .unwrap();
        assert_eq!(scored.backend, BACKEND_HEURISTIC);
        assert_eq!(scored.notice, None);
        assert_eq!(scored.analysis, analyze_ats(RESUME, Some("Docker")));
    }

    #[tokio::test]
    async fn test_heuristic_scorer_carries_notice() {
        let scored = HeuristicAtsScorer::with_notice(NOTICE_NO_API_KEY)
            .score("", None)
            .await
            .unwrap();
        assert_eq!(scored.notice.as_deref(), Some(NOTICE_NO_API_KEY));
        assert_eq!(scored.analysis.improvements, vec![TOO_SHORT_MESSAGE.to_string()]);
    }

    #[test]
    fn test_llm_failure_falls_back_to_baseline() {
        let baseline = analyze_ats(RESUME, None);
        let scored = merge_llm_result(baseline.clone(), Err(LlmError::EmptyContent));
        assert_eq!(scored.backend, BACKEND_HEURISTIC);
        assert_eq!(scored.notice.as_deref(), Some(NOTICE_AI_UNAVAILABLE));
        assert_eq!(scored.analysis, baseline);
    }

    #[test]
    fn test_llm_result_is_bounded() {
        let inflated = AtsAnalysis {
            overall_score: 180,
            category_scores: CategoryScores {
                format: 40,
                keywords: 30,
                experience: 25,
                skills: 20,
                contact: 12,
                readability: 11,
            },
            recommendations: (0..12).map(|i| format!("rec {i}")).collect(),
            ..AtsAnalysis::default()
        };
        let scored = merge_llm_result(AtsAnalysis::default(), Ok(inflated));
        assert_eq!(scored.backend, BACKEND_LLM);
        assert_eq!(scored.analysis.overall_score, 100);
        assert_eq!(scored.analysis.category_scores.format, 20);
        assert_eq!(scored.analysis.recommendations.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_partial_llm_json_deserializes_with_defaults() {
        let json = r#"{"overallScore": 55, "categoryScores": {"format": 10, "keywords": 12, "experience": 9, "skills": 8, "contact": 6, "readability": 10}}"#;
        let analysis: AtsAnalysis = serde_json::from_str(json).unwrap();
        assert!(analysis.strengths.is_empty());
        let scored = merge_llm_result(AtsAnalysis::default(), Ok(analysis));
        assert_eq!(scored.analysis.overall_score, 55);
    }
}

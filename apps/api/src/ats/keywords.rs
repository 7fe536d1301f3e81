//! Keyword Matcher — catalog hits in the resume, and gaps against a job description.

use serde::{Deserialize, Serialize};

use crate::ats::catalog::{all_keywords, keyword_count};

pub const MAX_KEYWORD_SCORE: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Catalog keywords present in the resume, catalog order.
    pub found: Vec<String>,
    /// Catalog keywords the job description asks for that the resume lacks.
    pub missing: Vec<String>,
    /// 0.0 – 25.0
    pub score: f64,
}

/// Matches the keyword catalog against the resume (case-insensitive substrings).
///
/// Without a job description (or with a blank one) `missing` is empty.
pub fn extract_keywords(resume_text: &str, job_description: Option<&str>) -> KeywordMatch {
    let resume_lower = resume_text.to_lowercase();
    let jd_lower = job_description
        .filter(|jd| !jd.trim().is_empty())
        .map(str::to_lowercase);

    let mut found = Vec::new();
    let mut missing = Vec::new();

    for keyword in all_keywords() {
        if resume_lower.contains(keyword) {
            found.push(keyword.to_string());
        } else if jd_lower.as_deref().is_some_and(|jd| jd.contains(keyword)) {
            missing.push(keyword.to_string());
        }
    }

    let score = (found.len() as f64 / keyword_count() as f64 * MAX_KEYWORD_SCORE)
        .min(MAX_KEYWORD_SCORE);

    KeywordMatch {
        found,
        missing,
        score,
    }
}

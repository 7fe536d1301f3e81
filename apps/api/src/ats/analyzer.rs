//! ATS Aggregator — runs every sub-scorer and assembles the final analysis.
//!
//! `analyze_ats` is pure and deterministic: identical inputs serialize to
//! identical output. It never fails; degenerate input yields a zero report.

use serde::{Deserialize, Serialize};

use crate::ats::keywords::{extract_keywords, KeywordMatch};
use crate::ats::recommendations::build_recommendations;
use crate::ats::scorers::{
    count_action_verbs, score_contact, score_experience, score_format, score_readability,
    score_skills, ContactScore,
};
use crate::ats::sections::{extract_sections, ResumeSection};

pub const MIN_RESUME_CHARS: usize = 50;
pub const TOO_SHORT_MESSAGE: &str = "Resume text is too short or empty";

const STRONG_SECTION_COUNT: usize = 5;
const STRONG_KEYWORD_COUNT: usize = 10;
const STRONG_EXPERIENCE_SCORE: u32 = 15;
const STRONG_READABILITY_SCORE: u32 = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryScores {
    pub format: u32,
    pub keywords: u32,
    pub experience: u32,
    pub skills: u32,
    pub contact: u32,
    pub readability: u32,
}

impl CategoryScores {
    pub fn total(&self) -> u32 {
        self.format + self.keywords + self.experience + self.skills + self.contact + self.readability
    }
}

/// Full ATS report, in the shape the dashboard renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AtsAnalysis {
    pub overall_score: u32,
    pub category_scores: CategoryScores,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Raw sub-scorer outputs, before rounding. Shared with the recommendation builder.
#[derive(Debug, Clone)]
pub struct AtsSignals {
    pub sections: Vec<ResumeSection>,
    pub keywords: KeywordMatch,
    pub contact: ContactScore,
    pub action_verbs: usize,
    pub format: f64,
    pub experience: f64,
    pub skills: f64,
    pub readability: f64,
}

impl AtsSignals {
    pub fn collect(resume_text: &str, job_description: Option<&str>) -> Self {
        let sections = extract_sections(resume_text);
        let format = score_format(resume_text, &sections);
        Self {
            keywords: extract_keywords(resume_text, job_description),
            contact: score_contact(resume_text),
            action_verbs: count_action_verbs(resume_text),
            format,
            experience: score_experience(resume_text),
            skills: score_skills(resume_text),
            readability: score_readability(resume_text),
            sections,
        }
    }

    pub fn present_section_count(&self) -> usize {
        self.sections.iter().filter(|s| s.present).count()
    }

    pub fn category_scores(&self) -> CategoryScores {
        CategoryScores {
            format: round_score(self.format),
            keywords: round_score(self.keywords.score),
            experience: round_score(self.experience),
            skills: round_score(self.skills),
            contact: round_score(self.contact.score),
            readability: round_score(self.readability),
        }
    }
}

fn round_score(score: f64) -> u32 {
    score.max(0.0).round() as u32
}

/// Scores a resume, optionally against a job description.
pub fn analyze_ats(resume_text: &str, job_description: Option<&str>) -> AtsAnalysis {
    if resume_text.trim().chars().count() < MIN_RESUME_CHARS {
        return too_short_analysis();
    }

    let signals = AtsSignals::collect(resume_text, job_description);
    let category_scores = signals.category_scores();
    let overall_score = category_scores.total();

    AtsAnalysis {
        overall_score,
        strengths: build_strengths(&signals, &category_scores),
        improvements: build_improvements(&signals, &category_scores),
        missing_keywords: signals.keywords.missing.clone(),
        recommendations: build_recommendations(&signals, &category_scores, overall_score),
        category_scores,
    }
}

fn too_short_analysis() -> AtsAnalysis {
    AtsAnalysis {
        improvements: vec![TOO_SHORT_MESSAGE.to_string()],
        ..AtsAnalysis::default()
    }
}

fn build_strengths(signals: &AtsSignals, scores: &CategoryScores) -> Vec<String> {
    let mut strengths = Vec::new();

    if signals.contact.present {
        strengths.push("Contact information is clear and easy to find".to_string());
    }
    let section_count = signals.present_section_count();
    if section_count >= STRONG_SECTION_COUNT {
        strengths.push(format!(
            "Well-organized with {section_count} standard resume sections"
        ));
    }
    let keyword_count = signals.keywords.found.len();
    if keyword_count >= STRONG_KEYWORD_COUNT {
        strengths.push(format!(
            "Strong technical keyword coverage ({keyword_count} keywords detected)"
        ));
    }
    if scores.experience >= STRONG_EXPERIENCE_SCORE {
        strengths.push(
            "Experience is described with quantified results and action verbs".to_string(),
        );
    }
    if scores.readability >= STRONG_READABILITY_SCORE {
        strengths.push("Clean, readable formatting".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Resume structure is good".to_string());
    }
    strengths
}

fn build_improvements(signals: &AtsSignals, scores: &CategoryScores) -> Vec<String> {
    let mut improvements = Vec::new();

    if !signals.contact.present {
        improvements.push("Add complete contact information (email and phone)".to_string());
    }
    if signals.present_section_count() < STRONG_SECTION_COUNT {
        improvements.push("Include more standard resume sections".to_string());
    }
    if signals.keywords.found.len() < STRONG_KEYWORD_COUNT {
        improvements.push("Add more relevant technical keywords".to_string());
    }
    if scores.experience < STRONG_EXPERIENCE_SCORE {
        improvements.push(
            "Quantify achievements with metrics and lead bullets with action verbs".to_string(),
        );
    }
    if scores.readability < STRONG_READABILITY_SCORE {
        improvements.push("Improve formatting consistency and readability".to_string());
    }

    if improvements.is_empty() {
        improvements.push("Only minor improvements needed".to_string());
    }
    improvements
}

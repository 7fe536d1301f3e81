//! Category sub-scorers. Each is a pure function returning a bounded score.
//!
//! The weights below are tuning constants and are kept as literals.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ats::catalog::{ESSENTIAL_SECTIONS, RECOMMENDED_SECTIONS, TECHNICAL_SKILLS};
use crate::ats::patterns::{
    ACTION_VERB, BLANK_LINE_RUN, BULLET_OR_NUMBERING, DATE_RANGE, EMAIL, EXPERIENCE_METRICS,
    GITHUB, LINKEDIN, MULTI_SPACE, PHONE, SKILLS_HEADER, SKILL_CATEGORY,
};
use crate::ats::sections::{find_section, ResumeSection};

pub const MAX_FORMAT_SCORE: f64 = 20.0;
pub const MAX_CONTACT_SCORE: f64 = 10.0;
pub const MAX_EXPERIENCE_SCORE: f64 = 20.0;
pub const MAX_SKILLS_SCORE: f64 = 15.0;
pub const MAX_READABILITY_SCORE: f64 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Format
// ────────────────────────────────────────────────────────────────────────────

const ESSENTIAL_SECTION_WEIGHT: f64 = 4.0;
const RECOMMENDED_SECTION_WEIGHT: f64 = 8.0 / 3.0;
const BULLET_POINTS: f64 = 2.0;
const CONSISTENT_SPACING_POINTS: f64 = 3.0;

/// Format score (≤ 20) from section coverage, bullets and line spacing.
pub fn score_format(resume_text: &str, sections: &[ResumeSection]) -> f64 {
    let weighted = |names: &[&str], weight: f64| -> f64 {
        names
            .iter()
            .filter_map(|name| find_section(sections, name))
            .filter(|s| s.present)
            .map(|s| weight * s.quality)
            .sum::<f64>()
    };

    let mut score = weighted(ESSENTIAL_SECTIONS, ESSENTIAL_SECTION_WEIGHT)
        + weighted(RECOMMENDED_SECTIONS, RECOMMENDED_SECTION_WEIGHT);

    if BULLET_OR_NUMBERING.is_match(resume_text) {
        score += BULLET_POINTS;
    }
    if !BLANK_LINE_RUN.is_match(&normalize_newlines(resume_text)) {
        score += CONSISTENT_SPACING_POINTS;
    }

    score.clamp(0.0, MAX_FORMAT_SCORE)
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Contact
// ────────────────────────────────────────────────────────────────────────────

const EMAIL_POINTS: f64 = 3.0;
const PHONE_POINTS: f64 = 3.0;
const LINKEDIN_POINTS: f64 = 2.0;
const GITHUB_POINTS: f64 = 2.0;
const CONTACT_PRESENT_THRESHOLD: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactScore {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
    pub has_github: bool,
    /// True once at least one primary channel (score ≥ 3) is found.
    pub present: bool,
    /// 0.0 – 10.0
    pub score: f64,
}

impl ContactScore {
    /// Names of the contact channels that were not detected.
    pub fn missing_channels(&self) -> Vec<&'static str> {
        [
            (self.has_email, "email"),
            (self.has_phone, "phone"),
            (self.has_linkedin, "LinkedIn"),
            (self.has_github, "GitHub"),
        ]
        .into_iter()
        .filter(|(found, _)| !found)
        .map(|(_, name)| name)
        .collect()
    }
}

pub fn score_contact(resume_text: &str) -> ContactScore {
    let has_email = EMAIL.is_match(resume_text);
    let has_phone = PHONE.is_match(resume_text);
    let has_linkedin = LINKEDIN.is_match(resume_text);
    let has_github = GITHUB.is_match(resume_text);

    let score = [
        (has_email, EMAIL_POINTS),
        (has_phone, PHONE_POINTS),
        (has_linkedin, LINKEDIN_POINTS),
        (has_github, GITHUB_POINTS),
    ]
    .iter()
    .filter(|(hit, _)| *hit)
    .map(|(_, points)| points)
    .sum::<f64>()
    .min(MAX_CONTACT_SCORE);

    ContactScore {
        has_email,
        has_phone,
        has_linkedin,
        has_github,
        present: score >= CONTACT_PRESENT_THRESHOLD,
        score,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

const POINTS_PER_METRIC: f64 = 2.0;
const MAX_METRIC_POINTS: f64 = 10.0;
const POINTS_PER_ACTION_VERB: f64 = 1.0;
const MAX_ACTION_VERB_POINTS: f64 = 5.0;
const EXPERIENCE_KEYWORD_POINTS: f64 = 2.0;
const DATE_RANGE_POINTS: f64 = 3.0;

/// Experience score (≤ 20) from quantified results, action verbs and dated roles.
pub fn score_experience(resume_text: &str) -> f64 {
    let metric_hits: usize = EXPERIENCE_METRICS
        .iter()
        .map(|re| re.find_iter(resume_text).count())
        .sum();

    let mut score = (metric_hits as f64 * POINTS_PER_METRIC).min(MAX_METRIC_POINTS);
    score += (count_action_verbs(resume_text) as f64 * POINTS_PER_ACTION_VERB)
        .min(MAX_ACTION_VERB_POINTS);

    let lower = resume_text.to_lowercase();
    if lower.contains("project") || lower.contains("experience") {
        score += EXPERIENCE_KEYWORD_POINTS;
    }
    if DATE_RANGE.is_match(resume_text) {
        score += DATE_RANGE_POINTS;
    }

    score.clamp(0.0, MAX_EXPERIENCE_SCORE)
}

/// Distinct action verbs from the catalog used anywhere in the text.
pub fn count_action_verbs(resume_text: &str) -> usize {
    ACTION_VERB
        .find_iter(resume_text)
        .map(|m| m.as_str().to_lowercase())
        .collect::<BTreeSet<_>>()
        .len()
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

const POINTS_PER_SKILL: f64 = 1.0;
const MAX_SKILL_MATCH_POINTS: f64 = 10.0;
const SKILLS_HEADER_POINTS: f64 = 3.0;
const SKILL_CATEGORY_POINTS: f64 = 2.0;

/// Skills score (≤ 15) from the technical skill list and an organised skills block.
pub fn score_skills(resume_text: &str) -> f64 {
    let lower = resume_text.to_lowercase();
    let matches = TECHNICAL_SKILLS
        .iter()
        .filter(|skill| lower.contains(*skill))
        .count();

    let mut score = (matches as f64 * POINTS_PER_SKILL).min(MAX_SKILL_MATCH_POINTS);
    if SKILLS_HEADER.is_match(resume_text) {
        score += SKILLS_HEADER_POINTS;
    }
    if SKILL_CATEGORY.is_match(resume_text) {
        score += SKILL_CATEGORY_POINTS;
    }

    score.clamp(0.0, MAX_SKILLS_SCORE)
}

// ────────────────────────────────────────────────────────────────────────────
// Readability
// ────────────────────────────────────────────────────────────────────────────

const LONG_LINE_CHARS: usize = 80;
const LONG_LINE_PENALTY: f64 = 0.1;
const MAX_LONG_LINE_PENALTY: f64 = 2.0;
const SECTION_BREAK_MIN_LINES: usize = 20;
const NO_SECTION_BREAK_PENALTY: f64 = 2.0;
const MIXED_WHITESPACE_PENALTY: f64 = 1.0;

/// Readability score (≤ 10): starts full and loses points for layout problems.
pub fn score_readability(resume_text: &str) -> f64 {
    let lines: Vec<&str> = resume_text.lines().collect();
    let mut score = MAX_READABILITY_SCORE;

    let long_lines = lines
        .iter()
        .filter(|l| l.chars().count() > LONG_LINE_CHARS)
        .count();
    score -= (long_lines as f64 * LONG_LINE_PENALTY).min(MAX_LONG_LINE_PENALTY);

    let has_section_break = lines.iter().any(|l| l.trim().is_empty());
    if lines.len() > SECTION_BREAK_MIN_LINES && !has_section_break {
        score -= NO_SECTION_BREAK_PENALTY;
    }

    if resume_text.contains('\t') && MULTI_SPACE.is_match(resume_text) {
        score -= MIXED_WHITESPACE_PENALTY;
    }

    score.clamp(0.0, MAX_READABILITY_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::sections::extract_sections;

    #[test]
    fn test_contact_email_and_phone() {
        let contact = score_contact("Contact: a@b.com 555-123-4567");
        assert!(contact.has_email);
        assert!(contact.has_phone);
        assert!(!contact.has_linkedin);
        assert_eq!(contact.score, 6.0);
        assert!(contact.present);
        assert_eq!(contact.missing_channels(), vec!["LinkedIn", "GitHub"]);
    }

    #[test]
    fn test_contact_profiles_only_are_not_present() {
        let contact = score_contact("linkedin");
        assert_eq!(contact.score, 2.0);
        assert!(!contact.present);
    }

    #[test]
    fn test_contact_full_is_capped() {
        let contact = score_contact(
            "jane@example.com | +1 555 123 4567 | linkedin.com/in/jane | github.com/jane",
        );
        assert_eq!(contact.score, MAX_CONTACT_SCORE);
    }

    #[test]
    fn test_format_counts_weighted_sections() {
        let text = "Contact\nEducation\nSkills";
        let sections = extract_sections(text);
        // 3 essential sections at quality 0.3, no bullets, consistent spacing.
        let score = score_format(text, &sections);
        assert!((score - (3.0 * 4.0 * 0.3 + 3.0)).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_format_bullets_and_spacing() {
        let with_bullets = "- one\n- two";
        assert_eq!(score_format(with_bullets, &extract_sections(with_bullets)), 5.0);

        let gappy = "one\n\n\n\ntwo";
        assert_eq!(score_format(gappy, &extract_sections(gappy)), 0.0);
    }

    #[test]
    fn test_format_is_capped() {
        let mut text = String::new();
        for header in [
            "Contact", "Summary", "Education", "Experience", "Projects", "Skills",
        ] {
            text.push_str(header);
            text.push('\n');
            text.push_str(&"- delivered results that increased revenue by 25%\n".repeat(4));
        }
        let sections = extract_sections(&text);
        assert_eq!(score_format(&text, &sections), MAX_FORMAT_SCORE);
    }

    #[test]
    fn test_experience_components() {
        assert_eq!(score_experience("nothing to see"), 0.0);
        // two action verbs, one metric, experience keyword, date range
        let text = "Experience 2019 - Present\nDeveloped and deployed a service, reduced cost";
        // metrics: "reduced" = 1 → 2; verbs: developed, deployed → 2; keyword → 2; date → 3
        assert_eq!(score_experience(text), 9.0);
    }

    #[test]
    fn test_experience_month_named_date_range() {
        assert_eq!(score_experience("Jan 2020 - Mar 2022"), DATE_RANGE_POINTS);
        assert_eq!(
            score_experience("Jan 2020 - Mar 2022"),
            score_experience("2020 - 2022")
        );
    }

    #[test]
    fn test_experience_metric_points_capped() {
        let text = "10% 20% 30% 40% 50% 60%";
        assert_eq!(score_experience(text), MAX_METRIC_POINTS);
    }

    #[test]
    fn test_action_verbs_are_distinct() {
        assert_eq!(count_action_verbs("Built, built, BUILT and led"), 2);
    }

    #[test]
    fn test_skills_score() {
        assert_eq!(score_skills("no skills here"), 0.0);
        let text = "Skills: Python, React\nFrontend and Backend";
        // python, react = 2; header +3; category +2
        assert_eq!(score_skills(text), 7.0);
    }

    #[test]
    fn test_skills_capped() {
        let text = format!("Skills: {}\nBackend", TECHNICAL_SKILLS.join(", "));
        assert_eq!(score_skills(&text), MAX_SKILLS_SCORE);
    }

    #[test]
    fn test_readability_full_for_clean_text() {
        assert_eq!(score_readability("Short line\n\nAnother short line"), 10.0);
    }

    #[test]
    fn test_readability_long_lines_penalty_capped() {
        let long = "x".repeat(81);
        let text = vec![long.as_str(); 30].join("\n\n");
        assert_eq!(score_readability(&text), 8.0);
    }

    #[test]
    fn test_readability_missing_breaks_and_mixed_whitespace() {
        let text = vec!["line"; 21].join("\n");
        assert_eq!(score_readability(&text), 8.0);

        let mixed = "a\tb\nc   d";
        assert_eq!(score_readability(mixed), 9.0);
    }
}

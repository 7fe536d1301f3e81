//! Section Extractor — heuristic detection of standard resume sections.
//!
//! This is keyword matching, not parsing. A section written under phrasing the
//! catalog does not know is reported absent, and that is acceptable.

use serde::{Deserialize, Serialize};

use crate::ats::catalog::{SectionSpec, SECTIONS};
use crate::ats::patterns::QUANTIFIED_METRIC;

/// Header lines are short; anything longer is treated as body text.
const MAX_HEADER_LINE_CHARS: usize = 50;
const MAX_BODY_LINES: usize = 20;
/// An all-caps line shorter than this ends the current section.
const MAX_NEXT_HEADER_CHARS: usize = 30;
const METRIC_BONUS: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSection {
    pub name: String,
    pub present: bool,
    /// 0.0 – 1.0
    pub quality: f64,
}

/// Detects all eight known sections, in catalog order.
pub fn extract_sections(resume_text: &str) -> Vec<ResumeSection> {
    let lower = resume_text.to_lowercase();
    let lines: Vec<&str> = resume_text.lines().collect();

    SECTIONS
        .iter()
        .map(|spec| detect_section(spec, &lower, &lines))
        .collect()
}

/// Looks up one section by name in an extractor result.
pub fn find_section<'a>(sections: &'a [ResumeSection], name: &str) -> Option<&'a ResumeSection> {
    sections.iter().find(|s| s.name == name)
}

fn detect_section(spec: &SectionSpec, lower: &str, lines: &[&str]) -> ResumeSection {
    let present = spec.keywords.iter().any(|kw| lower.contains(kw));
    if !present {
        return ResumeSection {
            name: spec.name.to_string(),
            present: false,
            quality: 0.0,
        };
    }

    let body = section_body(spec, lines);
    ResumeSection {
        name: spec.name.to_string(),
        present: true,
        quality: section_quality(&body),
    }
}

/// Collects the text following the section's header line.
///
/// Empty when no short line carries a section keyword (the keyword only
/// occurred inside body text elsewhere).
fn section_body(spec: &SectionSpec, lines: &[&str]) -> String {
    let start = lines.iter().position(|line| {
        let line_lower = line.to_lowercase();
        line.chars().count() < MAX_HEADER_LINE_CHARS
            && spec.keywords.iter().any(|kw| line_lower.contains(kw))
    });

    let Some(start) = start else {
        return String::new();
    };

    let mut body: Vec<&str> = Vec::new();
    for line in lines[start + 1..]
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
    {
        if body.len() >= MAX_BODY_LINES || looks_like_header(line) {
            break;
        }
        body.push(line);
    }
    body.join("\n")
}

fn looks_like_header(line: &str) -> bool {
    line.chars().count() < MAX_NEXT_HEADER_CHARS
        && line.chars().any(|c| c.is_alphabetic())
        && !line.chars().any(|c| c.is_lowercase())
}

/// Quality from body length, plus a bonus for quantified content.
pub(crate) fn section_quality(body: &str) -> f64 {
    let len = body.chars().count();
    let base = if len < 20 {
        0.3
    } else if len < 50 {
        0.5
    } else if len < 100 {
        0.7
    } else {
        (0.8 + (len - 100) as f64 / 1000.0).min(1.0)
    };

    if QUANTIFIED_METRIC.is_match(body) {
        (base + METRIC_BONUS).min(1.0)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_reported_in_order() {
        let sections = extract_sections("nothing relevant here");
        let names: Vec<_> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Contact",
                "Summary",
                "Education",
                "Experience",
                "Projects",
                "Skills",
                "Certifications",
                "Achievements"
            ]
        );
        assert!(sections.iter().all(|s| !s.present && s.quality == 0.0));
    }

    #[test]
    fn test_skills_header_detected() {
        let text = "Jane Doe\nSkills: Python, React, Node.js\nMore text follows here";
        let sections = extract_sections(text);
        let skills = find_section(&sections, "Skills").unwrap();
        assert!(skills.present);
        assert!(skills.quality > 0.0);
    }

    #[test]
    fn test_case_insensitive_detection() {
        let sections = extract_sections("EDUCATION\nState University, BS 2020");
        assert!(find_section(&sections, "Education").unwrap().present);
    }

    #[test]
    fn test_body_stops_at_next_uppercase_header() {
        let text = "Experience\nBuilt a payments service used daily\nSKILLS\nRust, Go, SQL";
        let spec = SECTIONS.iter().find(|s| s.name == "Experience").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(section_body(spec, &lines), "Built a payments service used daily");
    }

    #[test]
    fn test_body_capped_at_twenty_lines() {
        let mut text = String::from("Projects\n");
        for i in 0..30 {
            text.push_str(&format!("project line {i}\n"));
        }
        let spec = SECTIONS.iter().find(|s| s.name == "Projects").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(section_body(spec, &lines).lines().count(), 20);
    }

    #[test]
    fn test_keyword_only_in_long_line_gives_empty_body() {
        let text = "I have always enjoyed writing software and my employment history is long";
        let spec = SECTIONS.iter().find(|s| s.name == "Experience").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(section_body(spec, &lines).is_empty());
        let sections = extract_sections(text);
        let exp = find_section(&sections, "Experience").unwrap();
        assert!(exp.present);
        assert_eq!(exp.quality, 0.3);
    }

    #[test]
    fn test_quality_tiers() {
        assert_eq!(section_quality("short"), 0.3);
        assert_eq!(section_quality(&"a".repeat(30)), 0.5);
        assert_eq!(section_quality(&"a".repeat(70)), 0.7);
        assert!((section_quality(&"a".repeat(100)) - 0.8).abs() < 1e-9);
        assert_eq!(section_quality(&"a".repeat(5000)), 1.0);
    }

    #[test]
    fn test_quality_metric_bonus() {
        let plain = "a".repeat(30);
        let with_metric = format!("{plain} improved by 40%");
        assert!(section_quality(&with_metric) > section_quality(&plain));
        assert!(section_quality(&format!("{} 40%", "a".repeat(3000))) <= 1.0);
    }
}

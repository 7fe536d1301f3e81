//! Actionable recommendations derived from the same thresholds as the aggregator.

use crate::ats::analyzer::{AtsSignals, CategoryScores};
use crate::ats::catalog::{ESSENTIAL_SECTIONS, RECOMMENDED_SECTIONS};
use crate::ats::sections::find_section;

pub const MAX_RECOMMENDATIONS: usize = 8;
/// Overall scores below this get a closing general tip.
pub const GENERAL_TIP_THRESHOLD: u32 = 70;
pub const GENERAL_TIP: &str =
    "Tailor your resume to each job description and re-run the analysis before applying";

const MAX_LISTED_KEYWORDS: usize = 5;

const WEAK_FORMAT: u32 = 12;
const WEAK_KEYWORDS: u32 = 15;
const WEAK_EXPERIENCE: u32 = 10;
const WEAK_SKILLS: u32 = 10;
const WEAK_READABILITY: u32 = 8;
const FEW_ACTION_VERBS: usize = 3;

/// Builds up to eight recommendations, plus a general tip for low overall scores.
pub fn build_recommendations(
    signals: &AtsSignals,
    scores: &CategoryScores,
    overall_score: u32,
) -> Vec<String> {
    let mut recs = Vec::new();

    let missing_sections: Vec<&str> = ESSENTIAL_SECTIONS
        .iter()
        .chain(RECOMMENDED_SECTIONS)
        .copied()
        .filter(|name| !find_section(&signals.sections, name).is_some_and(|s| s.present))
        .collect();
    if !missing_sections.is_empty() {
        recs.push(format!(
            "Add missing sections: {}",
            missing_sections.join(", ")
        ));
    }

    let missing_channels = signals.contact.missing_channels();
    if !missing_channels.is_empty() {
        recs.push(format!(
            "Add missing contact details: {}",
            missing_channels.join(", ")
        ));
    }

    if !signals.keywords.missing.is_empty() {
        let listed: Vec<&str> = signals
            .keywords
            .missing
            .iter()
            .take(MAX_LISTED_KEYWORDS)
            .map(String::as_str)
            .collect();
        recs.push(format!(
            "Add keywords from the job description you can honestly claim: {}",
            listed.join(", ")
        ));
    }

    if scores.keywords < WEAK_KEYWORDS {
        recs.push(
            "Mention the specific languages, frameworks and tools you have used".to_string(),
        );
    }

    if scores.experience < WEAK_EXPERIENCE {
        recs.push(
            "Quantify your impact with numbers, e.g. \"reduced load time by 40%\" or \"served 10,000 users\""
                .to_string(),
        );
    }
    if signals.action_verbs < FEW_ACTION_VERBS {
        recs.push(
            "Start bullet points with strong action verbs such as developed, implemented or led"
                .to_string(),
        );
    }

    if scores.skills < WEAK_SKILLS {
        recs.push(
            "Add a dedicated \"Skills:\" section grouped by category (Frontend, Backend, Database)"
                .to_string(),
        );
    }

    if scores.format < WEAK_FORMAT {
        recs.push("Use bullet points and consistent spacing between sections".to_string());
    }

    if scores.readability < WEAK_READABILITY {
        recs.push(
            "Keep lines under 80 characters and separate sections with a blank line".to_string(),
        );
    }

    recs.truncate(MAX_RECOMMENDATIONS);

    if overall_score < GENERAL_TIP_THRESHOLD {
        recs.push(GENERAL_TIP.to_string());
    }
    recs
}

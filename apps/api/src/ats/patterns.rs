//! Compiled regexes shared by the section extractor and the sub-scorers.
//!
//! All patterns are literals compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

use crate::ats::catalog::ACTION_VERBS;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("ATS pattern literal must compile")
}

/// Quantified outcomes inside a section body (drives the quality bonus).
pub static QUANTIFIED_METRIC: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\d+(?:\.\d+)?\s?%|\d+\+|\b\d+\s*(?:users|customers|clients|requests|transactions|downloads|members|people)\b|\b(?:increased|decreased|improved|reduced)\b",
    )
});

pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}"));

pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?:\+?\d{1,3}[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}")
});

pub static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)linkedin"));

pub static GITHUB: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)github"));

/// The five metric-indicating patterns counted by the experience scorer, in order:
/// percentages, `N+`, result verbs, quantified objects, years of experience.
pub static EXPERIENCE_METRICS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        compile(r"\d+(?:\.\d+)?\s?%"),
        compile(r"\d+\+"),
        compile(r"(?i)\b(?:increased|decreased|improved|reduced|boosted|saved|generated|grew)\b"),
        compile(
            r"(?i)\b\d+(?:,\d{3})*\s*(?:users|customers|clients|requests|transactions|projects|members|people|applications|students)\b",
        ),
        compile(r"(?i)\b\d+\+?\s*(?:years?|yrs?)\b"),
    ]
});

pub static ACTION_VERB: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"(?i)\b(?:{})\b", ACTION_VERBS.join("|"))));

pub static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:19|20)\d{2}\s*(?:-|–|—|to)\s*(?:(?:[a-z]{3,9}\.?\s+)?(?:19|20)\d{2}|present|current)\b|\b(?:present|current)\b",
    )
});

pub static BULLET_OR_NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^[ \t]*(?:[•▪◦●\-\*]|\d+[.)])[ \t]+\S"));

/// Two or more consecutive blank lines.
pub static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\n[ \t]*\n[ \t]*\n"));

pub static SKILLS_HEADER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bskills?\s*:"));

pub static SKILL_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:frontend|front-end|backend|back-end|databases?|full[- ]stack|devops)\b")
});

pub static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r" {2,}"));

//! Static scoring catalogs: section headers, keyword categories, verb lists.
//!
//! Every list here is a tuning constant. Order matters: results are emitted in
//! catalog order so that repeated analyses serialize identically.

/// A resume section type and the lowercase phrases that reveal it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub const SECTION_CONTACT: &str = "Contact";
pub const SECTION_SUMMARY: &str = "Summary";
pub const SECTION_EDUCATION: &str = "Education";
pub const SECTION_EXPERIENCE: &str = "Experience";
pub const SECTION_PROJECTS: &str = "Projects";
pub const SECTION_SKILLS: &str = "Skills";
pub const SECTION_CERTIFICATIONS: &str = "Certifications";
pub const SECTION_ACHIEVEMENTS: &str = "Achievements";

pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        name: SECTION_CONTACT,
        keywords: &["contact", "email", "phone", "address", "linkedin"],
    },
    SectionSpec {
        name: SECTION_SUMMARY,
        keywords: &["summary", "objective", "profile", "about me"],
    },
    SectionSpec {
        name: SECTION_EDUCATION,
        keywords: &["education", "academic", "degree", "university", "college"],
    },
    SectionSpec {
        name: SECTION_EXPERIENCE,
        keywords: &["experience", "employment", "work history", "internship"],
    },
    SectionSpec {
        name: SECTION_PROJECTS,
        keywords: &["projects", "project"],
    },
    SectionSpec {
        name: SECTION_SKILLS,
        keywords: &["skills", "technical skills", "technologies", "competencies"],
    },
    SectionSpec {
        name: SECTION_CERTIFICATIONS,
        keywords: &["certifications", "certificate", "certified"],
    },
    SectionSpec {
        name: SECTION_ACHIEVEMENTS,
        keywords: &["achievements", "awards", "honors", "accomplishments"],
    },
];

/// Sections weighted at 4 points × quality in the format score.
pub const ESSENTIAL_SECTIONS: &[&str] = &[SECTION_CONTACT, SECTION_EDUCATION, SECTION_SKILLS];

/// Sections weighted at 8/3 points × quality in the format score.
pub const RECOMMENDED_SECTIONS: &[&str] = &[SECTION_SUMMARY, SECTION_EXPERIENCE, SECTION_PROJECTS];

/// Technical keyword catalog, grouped by category. All entries lowercase.
pub const KEYWORD_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python",
            "java",
            "javascript",
            "typescript",
            "c++",
            "c#",
            "golang",
            "rust",
            "kotlin",
            "swift",
        ],
    ),
    (
        "web",
        &[
            "react", "angular", "vue", "node.js", "express", "html", "css", "next.js", "django",
            "flask",
        ],
    ),
    (
        "databases",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "firebase"],
    ),
    ("cloud", &["aws", "azure", "gcp", "docker", "kubernetes"]),
    ("tools", &["git", "github", "jenkins", "jira", "linux"]),
    (
        "ml",
        &[
            "machine learning",
            "tensorflow",
            "pytorch",
            "pandas",
            "numpy",
            "scikit-learn",
        ],
    ),
    ("mobile", &["android", "ios", "react native", "flutter"]),
];

/// Flattened keyword catalog in category order.
pub fn all_keywords() -> impl Iterator<Item = &'static str> {
    KEYWORD_CATEGORIES
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().copied())
}

pub fn keyword_count() -> usize {
    KEYWORD_CATEGORIES.iter().map(|(_, k)| k.len()).sum()
}

/// Verbs that open strong experience bullets.
pub const ACTION_VERBS: &[&str] = &[
    "developed",
    "designed",
    "implemented",
    "led",
    "managed",
    "created",
    "built",
    "optimized",
    "architected",
    "launched",
    "delivered",
    "automated",
    "collaborated",
    "analyzed",
    "engineered",
    "deployed",
    "mentored",
    "coordinated",
    "established",
    "streamlined",
];

/// Skill list scored by the skills sub-scorer (distinct from the keyword catalog).
pub const TECHNICAL_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "sql",
    "html",
    "css",
    "git",
    "aws",
    "docker",
    "typescript",
    "mongodb",
    "c++",
    "machine learning",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_eight_section_types() {
        assert_eq!(SECTIONS.len(), 8);
    }

    #[test]
    fn test_catalog_has_seven_categories_and_no_duplicates() {
        assert_eq!(KEYWORD_CATEGORIES.len(), 7);
        let unique: HashSet<_> = all_keywords().collect();
        assert_eq!(unique.len(), keyword_count());
        assert_eq!(keyword_count(), 46);
    }

    #[test]
    fn test_catalog_entries_are_lowercase() {
        for kw in all_keywords().chain(TECHNICAL_SKILLS.iter().copied()) {
            assert_eq!(kw, kw.to_lowercase(), "{kw} is not lowercase");
        }
    }

    #[test]
    fn test_weighted_sections_are_known() {
        let names: HashSet<_> = SECTIONS.iter().map(|s| s.name).collect();
        for name in ESSENTIAL_SECTIONS.iter().chain(RECOMMENDED_SECTIONS) {
            assert!(names.contains(name));
        }
    }

    #[test]
    fn test_skill_list_has_fifteen_entries() {
        assert_eq!(TECHNICAL_SKILLS.len(), 15);
    }
}

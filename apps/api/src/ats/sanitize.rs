//! Input sanitization applied before text reaches the analyzer.

pub const DEFAULT_MAX_RESUME_CHARS: usize = 50_000;
pub const DEFAULT_MAX_JD_CHARS: usize = 20_000;

/// Normalises line endings, strips control characters (keeping `\n` and `\t`)
/// and truncates to `max_chars` characters.
pub fn sanitize_text(input: &str, max_chars: usize) -> String {
    input
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .take(max_chars)
        .collect()
}

/// Sanitizes an optional job description; blank input becomes `None`.
pub fn sanitize_job_description(input: Option<&str>, max_chars: usize) -> Option<String> {
    input
        .map(|jd| sanitize_text(jd, max_chars))
        .filter(|jd| !jd.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(sanitize_text("a\u{0}b\u{7}c\td\n", 100), "abc\td\n");
    }

    #[test]
    fn test_normalises_line_endings() {
        assert_eq!(sanitize_text("one\r\ntwo\rthree", 100), "one\ntwo\nthree");
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        let out = sanitize_text("ééééé", 3);
        assert_eq!(out, "ééé");
    }

    #[test]
    fn test_blank_job_description_is_none() {
        assert_eq!(sanitize_job_description(Some(" \u{1}\n "), 100), None);
        assert_eq!(sanitize_job_description(None, 100), None);
        assert_eq!(
            sanitize_job_description(Some("Rust"), 100).as_deref(),
            Some("Rust")
        );
    }
}

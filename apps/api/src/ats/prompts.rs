// Prompt templates for AI-enhanced ATS scoring.

pub const ATS_SYSTEM: &str = "\
You are an experienced technical recruiter operating an applicant tracking system. \
Score resumes strictly and consistently. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const ATS_PROMPT_TEMPLATE: &str = r#"Score the following resume for ATS compatibility.

RESUME:
{resume_text}

JOB DESCRIPTION (may be empty):
{job_description}

A rule-based pre-scan produced this baseline; refine it, do not ignore it:
{baseline}

OUTPUT SCHEMA (return exactly this structure):
{
  "overallScore": number,
  "categoryScores": {
    "format": number (0-20),
    "keywords": number (0-25),
    "experience": number (0-20),
    "skills": number (0-15),
    "contact": number (0-10),
    "readability": number (0-10)
  },
  "strengths": ["string"],
  "improvements": ["string"],
  "missingKeywords": ["string"],
  "recommendations": ["string", at most 8]
}"#;

/// Fills the ATS prompt template in one pass, so placeholder-like text inside the
/// resume or job description reaches the model untouched.
pub fn build_ats_prompt(resume_text: &str, job_description: Option<&str>, baseline: &str) -> String {
    let fills = [
        ("{resume_text}", resume_text),
        ("{job_description}", job_description.unwrap_or("")),
        ("{baseline}", baseline),
    ];

    let mut prompt = String::with_capacity(
        ATS_PROMPT_TEMPLATE.len() + fills.iter().map(|(_, v)| v.len()).sum::<usize>(),
    );
    let mut rest = ATS_PROMPT_TEMPLATE;
    while let Some(start) = rest.find('{') {
        prompt.push_str(&rest[..start]);
        let tail = &rest[start..];
        match fills.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                prompt.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                prompt.push('{');
                rest = &tail[1..];
            }
        }
    }
    prompt.push_str(rest);
    prompt
}

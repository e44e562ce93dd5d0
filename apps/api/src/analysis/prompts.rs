// Prompt constants for job description analysis.
// Reuses the JSON-only fragment from llm_client::prompts.

/// System prompt for analysis. `JSON_ONLY_SYSTEM` is appended at call time.
pub const ANALYSIS_SYSTEM: &str = "You are a career assistant who reads job descriptions \
    and advises candidates on what to emphasize in their resume.";

/// Analysis prompt template. Replace `{job_description}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Given the job description below, provide:
1. A concise summary of the job (2-3 sentences).
2. Exactly three specific skills the candidate should highlight in their resume for this role.

Return a JSON object with this EXACT schema (no extra fields):
{
  "summary": "Summary text here",
  "skills": ["Skill 1", "Skill 2", "Skill 3"]
}

Job Description:
{job_description}"#;

//! The transcript-evaluation prompt. Specifies the exact target JSON schema
//! and instructs the model to emit raw JSON only.

/// Evaluation prompt template. Replace `{transcript}` before sending.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are an expert technical interviewer. Analyze the following mock interview transcript.

TRANSCRIPT:
{transcript}

TASK:
Evaluate the candidate and return a strictly valid JSON object.
Do not output Markdown, code blocks (no ```), or extra text. Just the raw JSON.

The JSON must match this structure exactly:
{
  "totalScore": number (0-100),
  "categoryScores": [
    { "name": "Communication Skills", "score": number, "comment": "string" },
    { "name": "Technical Knowledge", "score": number, "comment": "string" },
    { "name": "Problem-Solving", "score": number, "comment": "string" },
    { "name": "Cultural & Role Fit", "score": number, "comment": "string" },
    { "name": "Confidence & Clarity", "score": number, "comment": "string" }
  ],
  "strengths": ["string", "string"],
  "areasForImprovement": ["string", "string"],
  "finalAssessment": "string"
}"#;

/// Renders the evaluation prompt for a formatted transcript block.
pub fn render_feedback_prompt(transcript_block: &str) -> String {
    FEEDBACK_PROMPT_TEMPLATE.replace("{transcript}", transcript_block)
}

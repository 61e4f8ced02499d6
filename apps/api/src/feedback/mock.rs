//! The fixed fallback payload used when the model stage fails. Substituted
//! wholesale — never merged with partial model output — so the user always
//! sees a complete, well-formed assessment.

use crate::models::feedback::{CategoryScore, FeedbackResult};

fn category(name: &str, score: f64, comment: &str) -> CategoryScore {
    CategoryScore {
        name: name.to_string(),
        score,
        comment: comment.to_string(),
    }
}

/// The backup feedback payload. The final assessment states explicitly that
/// it is a placeholder.
pub fn mock_feedback() -> FeedbackResult {
    FeedbackResult {
        total_score: 75.0,
        category_scores: vec![
            category(
                "Communication Skills",
                80.0,
                "Spoke clearly but could be more concise.",
            ),
            category(
                "Technical Knowledge",
                70.0,
                "Understood basics but missed advanced concepts.",
            ),
            category("Problem-Solving", 75.0, "Good approach, but needed hints."),
            category("Cultural & Role Fit", 85.0, "Very polite and professional."),
            category(
                "Confidence & Clarity",
                65.0,
                "Seemed a bit nervous at times.",
            ),
        ],
        strengths: vec![
            "Polite demeanor".to_string(),
            "Good basic knowledge".to_string(),
            "Willingness to learn".to_string(),
        ],
        areas_for_improvement: vec![
            "Practice advanced topics".to_string(),
            "Speak with more confidence".to_string(),
        ],
        final_assessment: "The AI service is currently busy, so this is a placeholder assessment. \
            The candidate showed promise but should study more before the next round."
            .to_string(),
    }
}

//! The fixed interview question list and request-field defaulting.
//!
//! No AI call here: the questions are a hardcoded set, with the first one
//! interpolating the raw techstack string supplied by the caller.

/// Builds the five interview questions. The techstack string is embedded
/// as supplied (unsplit); absent techstack falls back to "coding".
pub fn build_questions(techstack: Option<&str>) -> Vec<String> {
    vec![
        format!(
            "Could you tell me about your experience with {}?",
            techstack.unwrap_or("coding")
        ),
        "What is the most challenging technical problem you have solved?".to_string(),
        "How do you handle tight deadlines?".to_string(),
        "Why do you want to work here?".to_string(),
        "Do you have any questions for us?".to_string(),
    ]
}

/// Splits a comma-separated techstack into its persisted sequence.
/// No trimming: the split is verbatim. Absent input yields `["General"]`.
pub fn split_techstack(techstack: Option<&str>) -> Vec<String> {
    match techstack {
        Some(stack) => stack.split(',').map(str::to_string).collect(),
        None => vec!["General".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_questions_defaults_to_coding() {
        let questions = build_questions(None);
        assert_eq!(questions.len(), 5);
        assert_eq!(
            questions[0],
            "Could you tell me about your experience with coding?"
        );
    }

    #[test]
    fn test_build_questions_interpolates_raw_techstack() {
        let questions = build_questions(Some("Python,Go"));
        assert!(questions[0].contains("Python,Go"));
        assert_eq!(questions.len(), 5);
    }

    #[test]
    fn test_split_techstack_defaults_to_general() {
        assert_eq!(split_techstack(None), vec!["General"]);
    }

    #[test]
    fn test_split_techstack_splits_on_comma() {
        assert_eq!(split_techstack(Some("Python,Go")), vec!["Python", "Go"]);
    }

    #[test]
    fn test_split_techstack_single_entry() {
        assert_eq!(split_techstack(Some("Rust")), vec!["Rust"]);
    }
}

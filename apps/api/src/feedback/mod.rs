//! Feedback generation — formats a transcript into the evaluation prompt,
//! calls the model, tolerantly parses the response, and persists the result
//! with a hard fallback to mock data when the model stage fails.

pub mod generator;
pub mod handlers;
pub mod mock;
pub mod parser;
pub mod prompts;
pub mod transcript;

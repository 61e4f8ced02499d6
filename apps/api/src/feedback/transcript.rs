use crate::models::feedback::TranscriptEntry;

/// Renders the transcript into the text block embedded in the evaluation
/// prompt: one line per entry, `- {role}: {content}`, in conversation order.
pub fn format_transcript(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("- {}: {}\n", entry.role, entry.content))
        .collect()
}

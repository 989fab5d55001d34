//! Cleanup applied to the model's reply before it is parsed as JSON.
//!
//! Models asked for bare JSON still wrap it in a markdown fence now and then.
//! This is the only place that knows about it.

const OPENING_FENCES: [&str; 2] = ["```json", "```"];
const CLOSING_FENCE: &str = "```";

/// Strips one leading ```` ```json ```` (or bare ```` ``` ````) fence and one
/// trailing ```` ``` ```` fence, then trims surrounding whitespace. Text
/// without fences comes back trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let mut cleaned = text.trim();

    if let Some(rest) = OPENING_FENCES
        .iter()
        .find_map(|fence| cleaned.strip_prefix(fence))
    {
        cleaned = rest;
    }

    if let Some(rest) = cleaned.strip_suffix(CLOSING_FENCE) {
        cleaned = rest;
    }

    cleaned.trim()
}

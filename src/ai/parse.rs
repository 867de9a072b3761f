//! Best-effort extraction of structured recommendations from generated text
//!
//! Generative models are asked to answer with a JSON array, but the reply is
//! free-form prose with the array buried somewhere inside it, if at all. The
//! extraction here is deliberately fail-open: anything that does not contain
//! a well-formed array yields an empty list, never an error.

use tracing::debug;

use super::AiRecommendation;

/// Extract place recommendations from free-form generated text.
///
/// Locates the first bracketed JSON-array substring and parses it; returns an
/// empty list when no such substring exists or parsing fails.
#[must_use]
pub fn extract_recommendations(text: &str) -> Vec<AiRecommendation> {
    let Some(candidate) = find_json_array(text) else {
        debug!("no JSON array found in generated text");
        return Vec::new();
    };

    match serde_json::from_str::<Vec<AiRecommendation>>(candidate) {
        Ok(recommendations) => recommendations,
        Err(err) => {
            debug!(error = %err, "generated text contained a malformed JSON array");
            Vec::new()
        }
    }
}

/// Find the first balanced `[...]` substring, respecting JSON string
/// literals so brackets inside quoted text do not terminate the scan.
fn find_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

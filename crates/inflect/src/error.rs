//! Error types for rendering.

use strsim::levenshtein;
use thiserror::Error;

/// An error produced while rendering a text entry.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Render called on an entry with zero registered inflections.
    #[error("no inflections registered for this entry")]
    EmptyEntry,

    /// A template token has no placeholder value (strict mode only; the
    /// default lenient mode substitutes the empty string instead).
    #[error("missing placeholder '{name}', available: {}", available.join(", "))]
    MissingPlaceholder {
        name: String,
        available: Vec<String>,
    },

    /// Render requested for a message key the active locale does not hold.
    #[error("no text registered for key '{key}'{}", format_suggestions(suggestions))]
    UnknownKey {
        key: String,
        suggestions: Vec<String>,
    },
}

/// Format suggestions as a did-you-mean suffix; empty when there are none.
fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - Limit to 3 suggestions, sorted by distance
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

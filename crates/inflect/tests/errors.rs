//! Tests for error types, message formatting, and typo suggestions.

use inflect::{RenderError, compute_suggestions};

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn compute_suggestions_finds_similar_keys() {
    let available = vec![
        "one".to_string(),
        "other".to_string(),
        "few".to_string(),
        "many".to_string(),
    ];

    // "on" is close to "one" (distance 1)
    let suggestions = compute_suggestions("on", &available);
    assert_eq!(suggestions, vec!["one"]);

    // "oter" is close to "other" (distance 1), also close to "one"
    // (distance 2). Both qualify because max_distance=2 for names longer
    // than 3 chars; the closest match sorts first.
    let suggestions = compute_suggestions("oter", &available);
    assert!(suggestions.contains(&"other".to_string()));
    assert_eq!(suggestions[0], "other");

    // "xyz" has no close matches
    let suggestions = compute_suggestions("xyz", &available);
    assert!(suggestions.is_empty());
}

#[test]
fn compute_suggestions_limits_to_three() {
    let available: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();

    let suggestions = compute_suggestions("item", &available);
    assert!(suggestions.len() <= 3);
}

#[test]
fn compute_suggestions_skips_exact_matches() {
    let available = vec!["greet".to_string()];
    // Distance 0 is not a typo, so no suggestion.
    assert!(compute_suggestions("greet", &available).is_empty());
}

// =========================================================================
// Display formatting
// =========================================================================

#[test]
fn empty_entry_display() {
    let msg = RenderError::EmptyEntry.to_string();
    assert!(msg.contains("no inflections"));
}

#[test]
fn missing_placeholder_display_lists_available() {
    let err = RenderError::MissingPlaceholder {
        name: "name".to_string(),
        available: vec!["count".to_string(), "user".to_string()],
    };
    let msg = err.to_string();
    assert!(msg.contains("'name'"));
    assert!(msg.contains("count, user"));
}

#[test]
fn unknown_key_display_includes_suggestions() {
    let err = RenderError::UnknownKey {
        key: "greting".to_string(),
        suggestions: vec!["greeting".to_string()],
    };
    let msg = err.to_string();
    assert!(msg.contains("'greting'"));
    assert!(msg.contains("did you mean: greeting?"));
}

#[test]
fn unknown_key_display_without_suggestions() {
    let err = RenderError::UnknownKey {
        key: "nope".to_string(),
        suggestions: Vec::new(),
    };
    let msg = err.to_string();
    assert!(msg.contains("'nope'"));
    assert!(!msg.contains("did you mean"));
}

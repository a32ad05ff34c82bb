//! Integration tests for placeholder substitution.

use inflect::{RenderError, RenderOptions, TextEntry, placeholders};

// =========================================================================
// Basic substitution
// =========================================================================

#[test]
fn substitutes_named_placeholder() {
    let mut entry = TextEntry::new();
    entry.one("Hello {{name}}");

    let options = RenderOptions::builder()
        .count(1)
        .placeholders(placeholders! { "name" => "World" })
        .build();
    assert_eq!(entry.render(&options).unwrap(), "Hello World");
}

#[test]
fn substitutes_multiple_tokens_left_to_right() {
    let mut entry = TextEntry::new();
    entry.other("{{count}} cats for {{name}}");

    let options = RenderOptions::builder()
        .count(3)
        .placeholders(placeholders! { "count" => 3, "name" => "Alice" })
        .build();
    assert_eq!(entry.render(&options).unwrap(), "3 cats for Alice");
}

#[test]
fn adjacent_tokens_substitute_independently() {
    let mut entry = TextEntry::new();
    entry.one("{{a}}{{b}}");

    let options = RenderOptions::builder()
        .count(1)
        .placeholders(placeholders! { "a" => "x", "b" => "y" })
        .build();
    assert_eq!(entry.render(&options).unwrap(), "xy");
}

#[test]
fn numeric_and_float_values_stringify() {
    let mut entry = TextEntry::new();
    entry.one("{{n}} and {{f}}");

    let options = RenderOptions::builder()
        .count(1)
        .placeholders(placeholders! { "n" => 3, "f" => 2.5 })
        .build();
    assert_eq!(entry.render(&options).unwrap(), "3 and 2.5");
}

// =========================================================================
// Missing placeholders
// =========================================================================

#[test]
fn missing_placeholder_is_empty_by_default() {
    let mut entry = TextEntry::new();
    entry.one("Hi {{name}}");

    let options = RenderOptions::builder().count(1).build();
    assert_eq!(entry.render(&options).unwrap(), "Hi ");
}

#[test]
fn missing_placeholder_is_an_error_in_strict_mode() {
    let mut entry = TextEntry::new();
    entry.one("Hi {{name}}, you have {{count}} cats");

    let options = RenderOptions::builder()
        .count(1)
        .placeholders(placeholders! { "count" => 1 })
        .strict(true)
        .build();

    let err = entry.render(&options).unwrap_err();
    match err {
        RenderError::MissingPlaceholder { name, available } => {
            assert_eq!(name, "name");
            assert_eq!(available, vec!["count".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_mode_passes_when_all_placeholders_supplied() {
    let mut entry = TextEntry::new();
    entry.one("Hi {{name}}");

    let options = RenderOptions::builder()
        .count(1)
        .placeholders(placeholders! { "name" => "Bob" })
        .strict(true)
        .build();
    assert_eq!(entry.render(&options).unwrap(), "Hi Bob");
}

// =========================================================================
// Scanning edge cases
// =========================================================================

#[test]
fn substituted_text_is_not_rescanned() {
    let mut entry = TextEntry::new();
    entry.one("{{a}}");

    let options = RenderOptions::builder()
        .count(1)
        .placeholders(placeholders! { "a" => "{{b}}", "b" => "X" })
        .build();

    // Single pass: the value "{{b}}" is emitted verbatim.
    assert_eq!(entry.render(&options).unwrap(), "{{b}}");
}

#[test]
fn stray_braces_are_literal() {
    let mut entry = TextEntry::new();
    entry.one("a { b } c {{ d }} e {{}}");

    let options = RenderOptions::builder().count(1).build();
    assert_eq!(entry.render(&options).unwrap(), "a { b } c {{ d }} e {{}}");
}

#[test]
fn triple_braces_substitute_the_inner_token() {
    let mut entry = TextEntry::new();
    entry.one("{{{n}}}");

    let options = RenderOptions::builder()
        .count(1)
        .placeholders(placeholders! { "n" => 1 })
        .build();
    assert_eq!(entry.render(&options).unwrap(), "{1}");
}

#[test]
fn names_with_digits_and_underscores_substitute() {
    let mut entry = TextEntry::new();
    entry.one("{{user_1}}");

    let options = RenderOptions::builder()
        .count(1)
        .placeholders(placeholders! { "user_1" => "Ada" })
        .build();
    assert_eq!(entry.render(&options).unwrap(), "Ada");
}

#[test]
fn template_without_tokens_renders_verbatim() {
    let mut entry = TextEntry::new();
    entry.one("just a cat");

    let options = RenderOptions::builder()
        .count(1)
        .placeholders(placeholders! { "unused" => "value" })
        .build();
    assert_eq!(entry.render(&options).unwrap(), "just a cat");
}

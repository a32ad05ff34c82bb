//! Locale registry: per-locale message maps and the active-locale switch.

use std::collections::HashMap;

use bon::Builder;

use crate::entry::{RenderOptions, TextEntry};
use crate::error::{RenderError, compute_suggestions};

/// Owner of per-locale message maps and the active-locale selection.
///
/// A registry is an explicit value rather than process state, so
/// independent locale sets can coexist (per request, per test). Exactly
/// one locale map is active at a time; switching locales swaps the
/// selection and never merges maps.
///
/// # Example
///
/// ```
/// use inflect::Registry;
///
/// let mut registry = Registry::new();
/// registry.set("greet", "Hello!");
/// assert!(registry.has("greet"));
///
/// // Entries are scoped to the locale they were defined under.
/// registry.set_locale("fr");
/// assert!(!registry.has("greet"));
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct Registry {
    /// Active locale identifier.
    #[builder(default = "en".to_string())]
    language: String,

    /// Message maps, one per locale identifier.
    #[builder(skip)]
    locales: HashMap<String, HashMap<String, TextEntry>>,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builder().build()
    }
}

impl Registry {
    /// Create a registry with the default `"en"` locale active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the given locale active.
    pub fn with_locale(language: impl Into<String>) -> Self {
        Registry::builder().language(language.into()).build()
    }

    /// The active locale identifier.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switch the active locale, creating an empty map for it if none
    /// exists yet. Chainable; never fails.
    pub fn set_locale(&mut self, language: impl Into<String>) -> &mut Self {
        let language = language.into();
        self.locales.entry(language.clone()).or_default();
        self.language = language;
        self
    }

    /// True when the active locale holds an entry for the message key.
    pub fn has(&self, key: &str) -> bool {
        self.locales
            .get(&self.language)
            .is_some_and(|map| map.contains_key(key))
    }

    /// Look up the entry for `key` in the active locale, creating an empty
    /// one if absent. This is the builder path:
    ///
    /// ```
    /// use inflect::Registry;
    ///
    /// let mut registry = Registry::new();
    /// registry
    ///     .get("cats")
    ///     .none("no cats")
    ///     .one("a cat")
    ///     .other("{{count}} cats");
    /// ```
    pub fn get(&mut self, key: impl Into<String>) -> &mut TextEntry {
        self.locales
            .entry(self.language.clone())
            .or_default()
            .entry(key.into())
            .or_default()
    }

    /// Replace `key` with a brand new entry holding `value` as its
    /// singular, present-tense inflection. Any prior inflections for the
    /// key are discarded.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut TextEntry {
        let slot = self
            .locales
            .entry(self.language.clone())
            .or_default()
            .entry(key.into())
            .or_default();
        *slot = TextEntry::new();
        slot.one(value)
    }

    /// Non-creating lookup in the active locale.
    pub fn entry(&self, key: &str) -> Option<&TextEntry> {
        self.locales
            .get(&self.language)
            .and_then(|map| map.get(key))
    }

    /// Message keys registered in the active locale, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.locales
            .get(&self.language)
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    /// Render `key` from the active locale without creating it.
    ///
    /// Unlike [`Registry::get`], an absent key is an error here, carrying
    /// did-you-mean suggestions computed from the registered keys.
    pub fn render(&self, key: &str, options: &RenderOptions) -> Result<String, RenderError> {
        let Some(entry) = self.entry(key) else {
            let available: Vec<String> = self.keys().map(str::to_string).collect();
            return Err(RenderError::UnknownKey {
                key: key.to_string(),
                suggestions: compute_suggestions(key, &available),
            });
        };
        entry.render(options)
    }
}

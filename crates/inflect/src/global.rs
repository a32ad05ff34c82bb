//! Global registry storage for the `global-registry` feature.
//!
//! Provides thread-safe access to a shared `Registry` instance, for
//! programs that want a define-anywhere, render-anywhere surface without
//! threading a registry through every call site.

use std::sync::{LazyLock, RwLock};

use crate::entry::{RenderOptions, TextEntry};
use crate::error::RenderError;
use crate::registry::Registry;

static GLOBAL_REGISTRY: LazyLock<RwLock<Registry>> =
    LazyLock::new(|| RwLock::new(Registry::new()));

/// Provides read access to the global registry.
pub fn with_registry<T>(f: impl FnOnce(&Registry) -> T) -> T {
    let guard = GLOBAL_REGISTRY
        .read()
        .expect("global registry lock poisoned");
    f(&guard)
}

/// Provides write access to the global registry.
pub fn with_registry_mut<T>(f: impl FnOnce(&mut Registry) -> T) -> T {
    let mut guard = GLOBAL_REGISTRY
        .write()
        .expect("global registry lock poisoned");
    f(&mut guard)
}

/// Switches the active locale of the global registry.
pub fn set_locale(language: impl Into<String>) {
    with_registry_mut(|registry| {
        registry.set_locale(language);
    });
}

/// Returns the active locale of the global registry.
pub fn locale() -> String {
    with_registry(|registry| registry.language().to_owned())
}

/// Checks whether `key` exists in the global registry's active locale.
pub fn has(key: &str) -> bool {
    with_registry(|registry| registry.has(key))
}

/// Defines `key` as a fresh singular, present-tense entry, discarding any
/// prior inflections for the key.
pub fn define(key: &str, value: &str) {
    with_registry_mut(|registry| {
        registry.set(key, value);
    });
}

/// Looks up or creates the entry for `key` and passes it to `f` for
/// chained building.
pub fn text<T>(key: &str, f: impl FnOnce(&mut TextEntry) -> T) -> T {
    with_registry_mut(|registry| f(registry.get(key)))
}

/// Renders `key` from the global registry's active locale.
pub fn render(key: &str, options: &RenderOptions) -> Result<String, RenderError> {
    with_registry(|registry| registry.render(key, options))
}

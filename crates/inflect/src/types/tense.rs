use serde::{Deserialize, Serialize};

/// The grammatical tense attached to an inflection.
///
/// Defaults to `Present`, both for registered inflections and for render
/// requests that do not name a tense.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    /// Past tense ("was a cat").
    Past,

    /// Present tense ("is a cat").
    #[default]
    Present,

    /// Future tense ("will be a cat").
    Future,
}

impl Tense {
    /// Get the tense as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Past => "past",
            Tense::Present => "present",
            Tense::Future => "future",
        }
    }
}

impl std::fmt::Display for Tense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

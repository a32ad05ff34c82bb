//! Text entries: the per-key variant store, its builder surface, and the
//! renderer that picks the best inflection for a request.

use std::collections::HashMap;

use bon::Builder;

use crate::error::RenderError;
use crate::template::{parse_template, substitute};
use crate::types::{Count, Inflection, Tense, Value};

/// Configuration for a single render call.
///
/// `count` and `tense` drive variant selection; placeholder values are
/// carried in the explicit `placeholders` map rather than as ambient
/// fields. The default options request present tense with no count.
///
/// # Example
///
/// ```
/// use inflect::{RenderOptions, Tense, placeholders};
///
/// let options = RenderOptions::builder()
///     .count(3)
///     .tense(Tense::Past)
///     .placeholders(placeholders! { "count" => 3 })
///     .build();
///
/// assert_eq!(options.count, Some(3));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct RenderOptions {
    /// Numeric count for pluralization. Absent and zero both classify as
    /// `Count::None`, exactly one as `Count::One`, anything else as
    /// `Count::Other`.
    pub count: Option<i64>,

    /// Requested grammatical tense.
    #[builder(default)]
    pub tense: Tense,

    /// Named placeholder values substituted into the winning template.
    #[builder(default)]
    pub placeholders: HashMap<String, Value>,

    /// When set, a template token with no placeholder value is an error
    /// instead of an empty substitution.
    #[builder(default)]
    pub strict: bool,
}

impl RenderOptions {
    /// The count class this request resolves to.
    pub fn count_class(&self) -> Count {
        Count::classify(self.count)
    }
}

/// The full variant set registered under one message key.
///
/// Entries are built by chaining count and tense operations; every builder
/// method appends an [`Inflection`] and returns the entry for further
/// chaining. Context for the tense shorthands is scoped to this entry:
/// `past`/`present`/`future` inherit the count of the most recently added
/// inflection on *this* entry, so interleaving the construction of two
/// entries cannot leak a count across them.
///
/// # Example
///
/// ```
/// use inflect::{RenderOptions, TextEntry, placeholders};
///
/// let mut cats = TextEntry::new();
/// cats.none("no cats")
///     .one("a cat")
///     .past("was a cat")
///     .other("{{count}} cats");
///
/// let options = RenderOptions::builder()
///     .count(3)
///     .placeholders(placeholders! { "count" => 3 })
///     .build();
/// assert_eq!(cats.render(&options).unwrap(), "3 cats");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextEntry {
    inflections: Vec<Inflection>,
}

impl TextEntry {
    /// Create an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered inflections, in insertion order.
    pub fn inflections(&self) -> &[Inflection] {
        &self.inflections
    }

    /// True when no inflection has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.inflections.is_empty()
    }

    /// Register a past-tense variant, inheriting the entry's current count.
    pub fn past(&mut self, text: impl Into<String>) -> &mut Self {
        let count = self.context_count();
        self.add_inflection(text, count, Tense::Past)
    }

    /// Register a present-tense variant, inheriting the entry's current
    /// count.
    pub fn present(&mut self, text: impl Into<String>) -> &mut Self {
        let count = self.context_count();
        self.add_inflection(text, count, Tense::Present)
    }

    /// Register a future-tense variant, inheriting the entry's current
    /// count.
    pub fn future(&mut self, text: impl Into<String>) -> &mut Self {
        let count = self.context_count();
        self.add_inflection(text, count, Tense::Future)
    }

    /// Register a variant with an explicit tense and count, bypassing
    /// count inheritance.
    pub fn tense(&mut self, text: impl Into<String>, tense: Tense, count: Count) -> &mut Self {
        self.add_inflection(text, count, tense)
    }

    /// Register a zero-count, present-tense variant.
    pub fn none(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_inflection(text, Count::None, Tense::Present)
    }

    /// Register a singular, present-tense variant.
    pub fn one(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_inflection(text, Count::One, Tense::Present)
    }

    /// Register a plural, present-tense variant.
    pub fn other(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_inflection(text, Count::Other, Tense::Present)
    }

    /// Append an inflection. The primitive behind every builder operation;
    /// always succeeds.
    pub fn add_inflection(
        &mut self,
        text: impl Into<String>,
        count: Count,
        tense: Tense,
    ) -> &mut Self {
        self.inflections.push(
            Inflection::builder()
                .text(text.into())
                .count(count)
                .tense(tense)
                .build(),
        );
        self
    }

    /// Render the best-matching inflection for `options`.
    ///
    /// Inflections are scanned in insertion order and scored one point per
    /// matching axis (count class, tense). A later inflection displaces the
    /// running best only on a strictly greater score, so the highest score
    /// wins and ties go to the earliest registration. When nothing matches
    /// at all, the first-registered inflection is the fallback. Placeholder
    /// tokens in the winner are then substituted from
    /// `options.placeholders`.
    ///
    /// Rendering never mutates the entry; an entry with zero inflections is
    /// a hard error.
    pub fn render(&self, options: &RenderOptions) -> Result<String, RenderError> {
        let Some(first) = self.inflections.first() else {
            return Err(RenderError::EmptyEntry);
        };

        let count = options.count_class();
        let tense = options.tense;

        let mut best = first;
        let mut best_score = 0;
        for inflection in &self.inflections {
            let score = inflection.score(count, tense);
            if score > best_score {
                best = inflection;
                best_score = score;
            }
        }

        let segments = parse_template(&best.text);
        substitute(&segments, &options.placeholders, options.strict)
    }

    /// Count inherited by the tense shorthands: the count of the most
    /// recently added inflection, or `All` for a fresh entry.
    fn context_count(&self) -> Count {
        self.inflections.last().map_or(Count::All, |i| i.count)
    }
}

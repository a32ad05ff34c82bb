use bon::Builder;

use super::{Count, Tense};

/// One surface-form variant of a message.
///
/// An inflection carries the raw template text plus the (count, tense)
/// pair it applies to. Both axes are always concrete: when a builder
/// operation leaves one unspecified it is defaulted (`Count::All`,
/// `Tense::Present`), never left absent.
///
/// # Example
///
/// ```
/// use inflect::{Count, Inflection, Tense};
///
/// let was = Inflection::builder()
///     .text("was a cat")
///     .count(Count::One)
///     .tense(Tense::Past)
///     .build();
///
/// assert_eq!(was.text, "was a cat");
///
/// // Unspecified axes are defaulted.
/// let any = Inflection::builder().text("cats").build();
/// assert_eq!(any.count, Count::All);
/// assert_eq!(any.tense, Tense::Present);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct Inflection {
    /// Raw template text, containing zero or more `{{name}}` tokens.
    #[builder(into)]
    pub text: String,

    /// Pluralization class this variant applies to.
    #[builder(default)]
    pub count: Count,

    /// Grammatical tense of this variant.
    #[builder(default)]
    pub tense: Tense,
}

impl Inflection {
    /// Match score against a requested (count, tense) pair.
    ///
    /// One point per axis that matches exactly, so scores are 0, 1, or 2.
    /// `Count::All` never equals a requested class: count-agnostic variants
    /// score zero on that axis and win only as the first-registered
    /// fallback.
    pub fn score(&self, count: Count, tense: Tense) -> u8 {
        u8::from(self.count == count) + u8::from(self.tense == tense)
    }
}

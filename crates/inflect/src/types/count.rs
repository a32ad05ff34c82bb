use serde::{Deserialize, Serialize};

/// The pluralization class attached to an inflection.
///
/// Render requests classify their numeric count into `None`, `One`, or
/// `Other`. `All` appears only on registered inflections: it is the default
/// when no count is given and stands for "applies to any count". Because
/// `All` never equals a requested class it scores zero in variant selection
/// and is reached only through the first-registered fallback.
///
/// # Example
///
/// ```
/// use inflect::Count;
///
/// assert_eq!(Count::classify(None), Count::None);
/// assert_eq!(Count::classify(Some(0)), Count::None);
/// assert_eq!(Count::classify(Some(1)), Count::One);
/// assert_eq!(Count::classify(Some(7)), Count::Other);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Count {
    /// A count of zero, or a request carrying no count at all.
    None,

    /// Exactly one.
    One,

    /// Two or more, or any other count outside `None` and `One`.
    Other,

    /// Applies to any requested class, at lower priority than an exact
    /// match.
    #[default]
    All,
}

impl Count {
    /// Classify a request's numeric count.
    ///
    /// An absent count and an explicit zero both classify as `None`;
    /// exactly one as `One`; everything else, negative values included,
    /// as `Other`. `All` is never returned here.
    pub fn classify(count: Option<i64>) -> Count {
        match count {
            None | Some(0) => Count::None,
            Some(1) => Count::One,
            Some(_) => Count::Other,
        }
    }

    /// Get the count class as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Count::None => "none",
            Count::One => "one",
            Count::Other => "other",
            Count::All => "all",
        }
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

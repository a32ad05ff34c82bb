pub mod entry;
pub mod error;
#[cfg(feature = "global-registry")]
pub mod global;
pub mod registry;
mod template;
pub mod types;

pub use entry::{RenderOptions, TextEntry};
pub use error::{RenderError, compute_suggestions};
pub use registry::Registry;
pub use types::{Count, Inflection, Tense, Value};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use inflect::{Value, placeholders};
///
/// let p = placeholders! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! placeholders {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

mod count;
mod inflection;
mod tense;
mod value;

pub use count::Count;
pub use inflection::Inflection;
pub use tense::Tense;
pub use value::Value;

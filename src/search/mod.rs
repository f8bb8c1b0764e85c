//! Job search and ranking engine
//!
//! String similarity, the fuzzy field matcher built on it, structured
//! query parsing, numeric sort-value extraction and the query engine that
//! composes them over a job collection.

pub mod engine;
pub mod fuzzy;
pub mod numeric;
pub mod parser;
pub mod similarity;

pub use engine::{FuzzyThresholds, QueryEngine, QueryOptions, QueryOutcome, SortKey};
pub use fuzzy::FuzzyMatcher;
pub use parser::{parse_search_text, ParsedSearch};

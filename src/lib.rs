//! jobsift: fuzzy search, filtering and sorting for job listing collections
//!
//! The heart of the crate is [`search`]: a pure, synchronous query engine
//! over an in-memory job collection, combining Levenshtein-based fuzzy
//! matching, a small structured-query mini-language (`@age:`, `@company:`,
//! `@location:`) and deterministic multi-key sorting with lenient numeric
//! extraction for salary and experience text. [`jobs`] supplies the record
//! model and the snapshot data source; [`saved`] is the file-backed store
//! behind `jobsift saved`.

pub mod cli;
pub mod commands;
pub mod error;
pub mod jobs;
pub mod saved;
pub mod search;
pub mod utils;

pub use error::AppError;
pub use jobs::{JobRecord, JobSource, SnapshotSource};
pub use search::{FuzzyThresholds, QueryEngine, QueryOptions, QueryOutcome, SortKey};

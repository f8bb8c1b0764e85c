//! Job listing model and data sources

pub mod enrich;
pub mod records;
pub mod source;

pub use enrich::JobPatch;
pub use records::JobRecord;
pub use source::{JobSource, SnapshotSource};

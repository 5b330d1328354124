//! Cause-tree report generator and row sinks for shared error handles.

pub mod report;
pub mod sink;

pub use report::{render_compact, CauseEntry, CauseKind, Report};
pub use sink::ndjson::NdjsonSink;

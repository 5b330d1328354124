//! Data sink for flattened cause-tree reports.
//!
//! Two row schemas:
//! - [`ReportSummaryRow`] — one per reported error
//! - [`CauseRow`] — one per cause-tree node (denormalized)
//!
//! One backend:
//! - **NDJSON stream** — write newline-delimited JSON rows to any `Write` impl

pub mod ndjson;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Serializable row types
// ---------------------------------------------------------------------------

/// One row per reported error — summary statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummaryRow {
    pub root_message: String,
    pub node_count: u32,
    pub max_depth: u32,
    pub aggregate_count: u32,
    pub created_at_unix: u64,
}

/// One row per cause-tree node — append-only, fully denormalized.
#[derive(Debug, Clone, Serialize)]
pub struct CauseRow {
    /// Position in depth-first visit order; 0 is the reported error itself.
    pub seq: u32,
    pub depth: u32,
    /// "leaf", "wrapped", or "aggregate".
    pub kind: String,
    pub message: String,
    pub child_count: u32,
    pub created_at_unix: u64,
}

// ---------------------------------------------------------------------------
// Builder: Report → Rows
// ---------------------------------------------------------------------------

use crate::report::Report;

impl Report {
    /// Flatten the report into sink-ready rows.
    pub fn to_rows(&self) -> (ReportSummaryRow, Vec<CauseRow>) {
        let now = unix_now();

        let summary = ReportSummaryRow {
            root_message: self.root_message.clone(),
            node_count: self.node_count as u32,
            max_depth: self.max_depth as u32,
            aggregate_count: self.aggregate_count as u32,
            created_at_unix: now,
        };

        let causes: Vec<CauseRow> = self
            .entries
            .iter()
            .enumerate()
            .map(|(seq, entry)| CauseRow {
                seq: seq as u32,
                depth: entry.depth as u32,
                kind: entry.kind.as_str().into(),
                message: entry.message.clone(),
                child_count: entry.child_count as u32,
                created_at_unix: now,
            })
            .collect();

        (summary, causes)
    }
}

/// Seconds since the Unix epoch; 0 when the clock sits before it.
fn unix_now() -> u64 {
    use std::time::SystemTime;
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

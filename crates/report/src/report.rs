//! Cause-tree report generator.
//!
//! Takes any error and produces a flattened, depth-annotated view of its
//! full cause tree with summary statistics, plus human-readable renderings.

use faultline_core::{chain, direct_causes, is_aggregate};
use std::error::Error;

/// Classification of one cause-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CauseKind {
    /// No cause below this node.
    Leaf,
    /// Exactly one cause below this node, through `source()`.
    Wrapped,
    /// An ordered cause sequence below this node.
    Aggregate,
}

impl CauseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CauseKind::Leaf => "leaf",
            CauseKind::Wrapped => "wrapped",
            CauseKind::Aggregate => "aggregate",
        }
    }
}

/// One node of the flattened cause tree, in depth-first visit order.
#[derive(Debug, Clone)]
pub struct CauseEntry {
    /// 0 for the reported error itself.
    pub depth: usize,
    pub message: String,
    pub kind: CauseKind,
    pub child_count: usize,
}

/// Flattened report over one error's cause tree.
#[derive(Debug)]
pub struct Report {
    pub root_message: String,
    pub node_count: usize,
    pub max_depth: usize,
    pub aggregate_count: usize,
    pub entries: Vec<CauseEntry>,
}

impl Report {
    /// Build a report by walking `err`'s cause tree depth-first.
    pub fn build(err: &(dyn Error + 'static)) -> Self {
        let mut entries = Vec::new();
        collect(err, 0, &mut entries);

        let node_count = entries.len();
        let max_depth = entries.iter().map(|e| e.depth).max().unwrap_or(0);
        let aggregate_count = entries
            .iter()
            .filter(|e| e.kind == CauseKind::Aggregate)
            .count();

        Report {
            root_message: err.to_string(),
            node_count,
            max_depth,
            aggregate_count,
            entries,
        }
    }

    /// Render the report as an indented "caused by" listing.
    ///
    /// Aggregate nodes print as a `N joined causes` label; their members
    /// follow as children, so the messages appear once each.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let Some(root) = self.entries.first() else {
            return out;
        };

        out.push_str(&format!("error: {}\n", entry_line(root)));

        if self.entries.len() > 1 {
            out.push_str("caused by:\n");
            for entry in &self.entries[1..] {
                out.push_str(&"    ".repeat(entry.depth));
                out.push_str(&format!("- {}\n", entry_line(entry)));
            }
        }

        out
    }
}

/// The display line for one entry; aggregates get a count label in place of
/// their concatenated member messages.
fn entry_line(entry: &CauseEntry) -> String {
    match entry.kind {
        CauseKind::Aggregate => format!("{} joined causes", entry.child_count),
        _ => entry.message.clone(),
    }
}

// Linear links advance in place; only aggregate members recurse, so stack
// depth tracks aggregate nesting, never chain length.
fn collect(err: &(dyn Error + 'static), mut depth: usize, entries: &mut Vec<CauseEntry>) {
    let mut current = err;
    loop {
        let children = direct_causes(current);
        let kind = if is_aggregate(current) {
            CauseKind::Aggregate
        } else if children.is_empty() {
            CauseKind::Leaf
        } else {
            CauseKind::Wrapped
        };

        entries.push(CauseEntry {
            depth,
            message: current.to_string(),
            kind,
            child_count: children.len(),
        });

        if kind == CauseKind::Aggregate {
            for member in children {
                collect(member, depth + 1, entries);
            }
            return;
        }

        match children.into_iter().next() {
            Some(child) => {
                current = child;
                depth += 1;
            }
            None => return,
        }
    }
}

/// Render the linear `source()` chain on a single `a: b: c` line.
///
/// Aggregates are not descended into; a joined node contributes its own
/// display, with member messages collapsed onto the line.
pub fn render_compact(err: &(dyn Error + 'static)) -> String {
    let mut out = String::new();
    for (index, node) in chain(err).enumerate() {
        if index > 0 {
            out.push_str(": ");
        }
        out.push_str(&node.to_string().replace('\n', "; "));
    }
    out
}

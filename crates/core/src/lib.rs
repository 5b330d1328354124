//! Cause-chain inspection, extraction, and sentinel filtering for composite
//! errors.
//!
//! Foundation crate -- pure, synchronous, no I/O dependencies.

pub mod cause;
pub mod chain;
pub mod filter;
pub mod types;

pub use cause::{direct_causes, has_source, is_aggregate, is_composite};
pub use chain::{any_cause, chain, contains_cause, find_cause, root_cause, same_error, Chain};
pub use filter::{discard, filter_matching, keep, matches_any, ResultExt};
pub use types::{
    aggregate, annotate, sentinel, shared, Aggregate, Annotated, Sentinel, SharedError,
};

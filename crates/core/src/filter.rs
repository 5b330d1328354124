//! Sentinel matching and allow/deny filtering over shared error handles.

use crate::chain::contains_cause;
use crate::types::SharedError;
use std::error::Error;

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// True when `err`'s cause tree contains any of `targets`.
///
/// Targets are scanned left to right, short-circuiting on the first hit, and
/// are not deduplicated. An empty target set never matches.
pub fn matches_any(err: &(dyn Error + 'static), targets: &[SharedError]) -> bool {
    targets
        .iter()
        .any(|target| contains_cause(err, target.as_ref()))
}

/// The ordered subsequence of `errs` whose cause trees match any of
/// `targets`.
///
/// Input order and duplicates are preserved, and the returned handles are
/// clones of the matching entries, never copies of the errors themselves.
/// Empty when either input is empty.
pub fn filter_matching(errs: &[SharedError], targets: &[SharedError]) -> Vec<SharedError> {
    if errs.is_empty() || targets.is_empty() {
        return Vec::new();
    }

    errs.iter()
        .filter(|err| matches_any(err.as_ref(), targets))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Allow / deny
// ---------------------------------------------------------------------------

/// Allow-list filter: passes `err` through only when it matches a target.
///
/// The returned handle is `err` itself, untouched.
pub fn keep(err: SharedError, targets: &[SharedError]) -> Option<SharedError> {
    if matches_any(err.as_ref(), targets) {
        return Some(err);
    }
    tracing::trace!(error = %err, "keep: no target matched, swallowing");
    None
}

/// Deny-list filter: swallows `err` when it matches a target, passes it
/// through untouched otherwise.
pub fn discard(err: SharedError, targets: &[SharedError]) -> Option<SharedError> {
    // An empty deny-list passes nothing, not everything.
    if targets.is_empty() {
        tracing::trace!(error = %err, "discard: empty target set, swallowing");
        return None;
    }
    if matches_any(err.as_ref(), targets) {
        tracing::trace!(error = %err, "discard: target matched, swallowing");
        return None;
    }
    Some(err)
}

// ---------------------------------------------------------------------------
// Result adapters
// ---------------------------------------------------------------------------

/// Deny-list filtering for the error channel of a `Result`.
pub trait ResultExt<T, E> {
    /// Converts an `Err` whose value satisfies `pred` into `Ok(T::default())`.
    fn discard_if<F>(self, pred: F) -> Result<T, E>
    where
        F: FnOnce(&E) -> bool,
        T: Default;

    /// Converts an `Err` whose cause tree matches any of `targets` into
    /// `Ok(T::default())`.
    fn discard_matching(self, targets: &[SharedError]) -> Result<T, E>
    where
        T: Default;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + 'static,
{
    fn discard_if<F>(self, pred: F) -> Result<T, E>
    where
        F: FnOnce(&E) -> bool,
        T: Default,
    {
        match self {
            Err(err) if pred(&err) => {
                tracing::trace!(error = %err, "discard_if: predicate matched, swallowing");
                Ok(T::default())
            }
            other => other,
        }
    }

    fn discard_matching(self, targets: &[SharedError]) -> Result<T, E>
    where
        T: Default,
    {
        self.discard_if(|err| matches_any(err, targets))
    }
}

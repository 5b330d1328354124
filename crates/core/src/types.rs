//! Error handles and the composite error containers.

use smallvec::SmallVec;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Shared handle
// ---------------------------------------------------------------------------

/// Owned, clonable handle to an error value.
///
/// Errors travel behind `Arc` so one value can be held as a sentinel and sit
/// inside a cause tree at the same heap address. Identity matching
/// ([`crate::chain::same_error`]) compares exactly that address.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Moves `err` behind a [`SharedError`] handle.
pub fn shared<E>(err: E) -> SharedError
where
    E: Error + Send + Sync + 'static,
{
    Arc::new(err)
}

// ---------------------------------------------------------------------------
// Sentinel: message-only leaf
// ---------------------------------------------------------------------------

/// Leaf error carrying a message and nothing else.
///
/// The usual building block for well-known comparison values: construct once,
/// hand out clones of the handle, match by identity later.
#[derive(Debug)]
pub struct Sentinel {
    message: String,
}

impl Sentinel {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Sentinel {}

/// Creates a message-only leaf error behind a shared handle.
pub fn sentinel(message: impl Into<String>) -> SharedError {
    Arc::new(Sentinel::new(message))
}

// ---------------------------------------------------------------------------
// Annotated: one wrapped cause
// ---------------------------------------------------------------------------

/// Context message wrapping exactly one underlying cause.
///
/// `Display` shows the context alone; the cause stays reachable through
/// `source()`, so chain walkers and reports see both layers.
#[derive(Debug)]
pub struct Annotated {
    context: String,
    source: SharedError,
}

impl Annotated {
    pub fn new(context: impl Into<String>, source: SharedError) -> Self {
        Self {
            context: context.into(),
            source,
        }
    }

    #[inline]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The wrapped cause, as stored.
    #[inline]
    pub fn cause(&self) -> &SharedError {
        &self.source
    }
}

impl fmt::Display for Annotated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.context)
    }
}

// Hand-written rather than derived: a derived `#[source]` on an `Arc` field
// resolves through `impl Error for Arc<T>` and reports the handle, not the
// shared allocation. Identity matching needs the allocation address.
impl Error for Annotated {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause: &(dyn Error + 'static) = self.source.as_ref();
        Some(cause)
    }
}

/// Wraps `source` in a context message, behind a shared handle.
pub fn annotate(context: impl Into<String>, source: SharedError) -> SharedError {
    Arc::new(Annotated::new(context, source))
}

// ---------------------------------------------------------------------------
// Aggregate: many joined causes
// ---------------------------------------------------------------------------

/// Ordered collection of joined causes.
///
/// The sequence is preserved exactly as given, duplicates included, and may
/// be empty. `source()` stays `None`: holding many causes is a different
/// capability from wrapping one, and the two never blur into each other.
///
/// `Display` prints one cause message per line, in order.
#[derive(Debug)]
pub struct Aggregate {
    sources: SmallVec<[SharedError; 4]>,
}

impl Aggregate {
    pub fn new(sources: impl IntoIterator<Item = SharedError>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
        }
    }

    /// The joined causes, in insertion order.
    #[inline]
    pub fn sources(&self) -> &[SharedError] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, source) in self.sources.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", source)?;
        }
        Ok(())
    }
}

impl Error for Aggregate {}

/// Joins `errs` into a single error behind a shared handle.
///
/// Returns `None` when `errs` is empty: no causes means no error. Callers
/// who want an empty container anyway can build [`Aggregate::new`] directly.
pub fn aggregate(errs: impl IntoIterator<Item = SharedError>) -> Option<SharedError> {
    let sources: SmallVec<[SharedError; 4]> = errs.into_iter().collect();
    if sources.is_empty() {
        return None;
    }
    Some(Arc::new(Aggregate { sources }))
}

// Compile-time capability assertions.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sentinel>();
    assert_send_sync::<Annotated>();
    assert_send_sync::<Aggregate>();
};
const _: () = assert!(std::mem::size_of::<SharedError>() == 2 * std::mem::size_of::<usize>());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_displays_its_message() {
        let err = sentinel("disk full");
        assert_eq!(err.to_string(), "disk full");
        assert!(err.source().is_none());
    }

    #[test]
    fn annotated_displays_context_and_exposes_cause() {
        let outer = annotate("flush failed", sentinel("disk full"));
        assert_eq!(outer.to_string(), "flush failed");

        let source = outer.source().unwrap();
        assert_eq!(source.to_string(), "disk full");
    }

    #[test]
    fn aggregate_displays_one_message_per_line() {
        let joined = aggregate([sentinel("first"), sentinel("second")]).unwrap();
        assert_eq!(joined.to_string(), "first\nsecond");
        // Joined causes are a sequence, not a single chained source.
        assert!(joined.source().is_none());
    }

    #[test]
    fn aggregate_of_nothing_is_no_error() {
        assert!(aggregate([]).is_none());
    }

    #[test]
    fn empty_aggregate_container_is_allowed() {
        let empty = Aggregate::new([]);
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn aggregate_preserves_order_and_duplicates() {
        let dup = sentinel("dup");
        let agg = Aggregate::new([dup.clone(), sentinel("mid"), dup.clone()]);
        assert_eq!(agg.len(), 3);
        assert_eq!(agg.sources()[0].to_string(), "dup");
        assert_eq!(agg.sources()[1].to_string(), "mid");
        assert_eq!(agg.sources()[2].to_string(), "dup");
    }
}

//! Cause-tree traversal and the identity matching primitive.
//!
//! Every predicate and filter in [`crate::cause`] and [`crate::filter`] is
//! built on the walkers here, so traversal order lives in exactly one place.

use crate::types::Aggregate;
use std::error::Error;

// ---------------------------------------------------------------------------
// Linear chain
// ---------------------------------------------------------------------------

/// Iterator over an error and its transitive `source()` chain.
///
/// Aggregates are yielded as single nodes; descending into their members is
/// the job of [`any_cause`] and [`crate::cause::direct_causes`].
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Walks `err` followed by every transitive `source()`.
///
/// `err` itself is always the first item.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// The deepest error in the linear chain; `err` itself when it has no source.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Address identity on error trait objects.
///
/// Only the data pointers are compared, never the vtable halves, so the
/// result is stable even when codegen duplicates vtables across units. Two
/// clones of one [`crate::types::SharedError`] handle are the same error;
/// two separately constructed values never are, whatever their messages say.
#[inline]
pub fn same_error(a: &(dyn Error + 'static), b: &(dyn Error + 'static)) -> bool {
    std::ptr::addr_eq(a, b)
}

// ---------------------------------------------------------------------------
// Tree walk
// ---------------------------------------------------------------------------

/// Depth-first, left-to-right walk of the full cause tree, short-circuiting
/// at the first node satisfying `pred`.
///
/// The tree is the linear chain of `err` plus, below every [`Aggregate`]
/// node, the trees of its members in order. `err` is the first node visited,
/// so a predicate matching `err` itself returns `true` immediately.
pub fn any_cause<F>(err: &(dyn Error + 'static), mut pred: F) -> bool
where
    F: FnMut(&(dyn Error + 'static)) -> bool,
{
    walk(err, &mut pred)
}

fn walk<F>(err: &(dyn Error + 'static), pred: &mut F) -> bool
where
    F: FnMut(&(dyn Error + 'static)) -> bool,
{
    let mut current = err;
    loop {
        if pred(current) {
            return true;
        }
        if let Some(agg) = current.downcast_ref::<Aggregate>() {
            for member in agg.sources() {
                if walk(member.as_ref(), pred) {
                    return true;
                }
            }
            return false;
        }
        match current.source() {
            Some(source) => current = source,
            None => return false,
        }
    }
}

/// Reports whether `target` occurs anywhere in `err`'s cause tree.
///
/// Comparison is [`same_error`] identity, and an error always contains
/// itself.
pub fn contains_cause(err: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    any_cause(err, |node| same_error(node, target))
}

/// The first node in `err`'s cause tree downcastable to `T`, in the same
/// depth-first order as [`any_cause`].
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    let mut current = err;
    loop {
        if let Some(found) = current.downcast_ref::<T>() {
            return Some(found);
        }
        if let Some(agg) = current.downcast_ref::<Aggregate>() {
            return agg
                .sources()
                .iter()
                .find_map(|member| find_cause::<T>(member.as_ref()));
        }
        match current.source() {
            Some(source) => current = source,
            None => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{aggregate, annotate, sentinel, shared, Sentinel};

    #[test]
    fn chain_yields_self_then_sources() {
        let top = annotate("top", annotate("mid", sentinel("root")));

        let messages: Vec<String> = chain(top.as_ref()).map(|e| e.to_string()).collect();
        assert_eq!(messages, ["top", "mid", "root"]);
    }

    #[test]
    fn chain_of_leaf_is_just_the_leaf() {
        let leaf = sentinel("alone");
        assert_eq!(chain(leaf.as_ref()).count(), 1);
    }

    #[test]
    fn root_cause_finds_the_deepest_error() {
        let leaf = sentinel("root");
        let top = annotate("top", annotate("mid", leaf.clone()));

        let root = root_cause(top.as_ref());
        assert!(same_error(root, leaf.as_ref()));
    }

    #[test]
    fn root_cause_of_leaf_is_itself() {
        let leaf = sentinel("alone");
        assert!(same_error(root_cause(leaf.as_ref()), leaf.as_ref()));
    }

    #[test]
    fn same_error_is_identity_not_equality() {
        let a = sentinel("same message");
        let b = sentinel("same message");

        assert!(same_error(a.as_ref(), a.clone().as_ref()));
        assert!(!same_error(a.as_ref(), b.as_ref()));
    }

    #[test]
    fn zero_sized_errors_keep_per_allocation_identity() {
        #[derive(Debug)]
        struct Saturated;

        impl std::fmt::Display for Saturated {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("saturated")
            }
        }
        impl std::error::Error for Saturated {}

        let a = shared(Saturated);
        let b = shared(Saturated);

        assert!(same_error(a.as_ref(), a.clone().as_ref()));
        assert!(!same_error(a.as_ref(), b.as_ref()));
    }

    #[test]
    fn any_cause_descends_into_aggregate_members() {
        let needle = sentinel("needle");
        let joined = aggregate([sentinel("hay"), annotate("wrap", needle.clone())]).unwrap();
        let top = annotate("top", joined);

        assert!(any_cause(top.as_ref(), |node| same_error(node, needle.as_ref())));
        assert!(!any_cause(top.as_ref(), |node| node.to_string() == "missing"));
    }

    #[test]
    fn contains_cause_includes_the_error_itself() {
        let leaf = sentinel("self");
        assert!(contains_cause(leaf.as_ref(), leaf.as_ref()));
    }

    #[test]
    fn contains_cause_sees_through_wrapping() {
        let inner = sentinel("inner");
        let outer = annotate("outer", inner.clone());

        assert!(contains_cause(outer.as_ref(), inner.as_ref()));
        assert!(!contains_cause(inner.as_ref(), outer.as_ref()));
    }

    #[test]
    fn find_cause_locates_a_typed_node() {
        let typed = shared(Sentinel::new("typed"));
        let top = annotate("top", typed);

        let found = find_cause::<Sentinel>(top.as_ref()).unwrap();
        assert_eq!(found.message(), "typed");
    }

    #[test]
    fn find_cause_descends_into_aggregates() {
        let joined = aggregate([annotate("a", sentinel("x")), sentinel("y")]).unwrap();

        // Depth-first order reaches "x" before "y".
        let found = find_cause::<Sentinel>(joined.as_ref()).unwrap();
        assert_eq!(found.message(), "x");
    }

    #[test]
    fn find_cause_misses_absent_types() {
        #[derive(Debug)]
        struct Marker;

        impl std::fmt::Display for Marker {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("marker")
            }
        }
        impl std::error::Error for Marker {}

        assert!(find_cause::<Marker>(sentinel("plain").as_ref()).is_none());
    }
}

//! Capability probes and direct-cause extraction.
//!
//! An error value can expose one wrapped cause through `source()`, an ordered
//! cause sequence by being an [`Aggregate`], both, or neither. The probes
//! here answer each question independently.

use crate::types::Aggregate;
use smallvec::{smallvec, SmallVec};
use std::error::Error;

/// True when `err` exposes a single wrapped cause through `source()`.
///
/// Says nothing about the sequence capability; see [`is_aggregate`].
#[inline]
pub fn has_source(err: &(dyn Error + 'static)) -> bool {
    err.source().is_some()
}

/// True when `err` carries an ordered cause sequence, empty or not.
///
/// Says nothing about `source()`; see [`has_source`].
#[inline]
pub fn is_aggregate(err: &(dyn Error + 'static)) -> bool {
    err.downcast_ref::<Aggregate>().is_some()
}

/// True when `err` can be unwrapped at all, through either capability.
#[inline]
pub fn is_composite(err: &(dyn Error + 'static)) -> bool {
    has_source(err) || is_aggregate(err)
}

/// The immediate causes of `err`, one unwrapping step deep.
///
/// An aggregate yields its sequence as-is, even when that sequence is empty;
/// the sequence capability wins over `source()` for values exhibiting both.
/// A plain wrapped error yields its one cause, and a leaf yields nothing.
pub fn direct_causes<'a>(
    err: &'a (dyn Error + 'static),
) -> SmallVec<[&'a (dyn Error + 'static); 4]> {
    if let Some(agg) = err.downcast_ref::<Aggregate>() {
        let mut causes: SmallVec<[&(dyn Error + 'static); 4]> = SmallVec::new();
        for member in agg.sources() {
            causes.push(member.as_ref());
        }
        return causes;
    }
    if let Some(source) = err.source() {
        return smallvec![source];
    }
    SmallVec::new()
}

//! Consumers that test elements against a predicate or a set of values.

use std::hash::Hash;

use ahash::AHashSet;
use seqkit_optional::Optional;

use crate::seq::Seq;

/// Returns `true` if every element of `seq` satisfies `predicate`.
///
/// Vacuously `true` for an empty sequence. Stops at the first failure.
pub fn all<S: Seq>(seq: S, mut predicate: impl FnMut(&S::Item) -> bool) -> bool {
    let mut res = true;
    seq.traverse(&mut |value| {
        if !predicate(&value) {
            res = false;
        }
        res
    });
    res
}

/// Returns `true` if some element of `seq` satisfies `predicate`.
///
/// `false` for an empty sequence. Stops at the first match.
pub fn any<S: Seq>(seq: S, mut predicate: impl FnMut(&S::Item) -> bool) -> bool {
    let mut res = false;
    seq.traverse(&mut |value| {
        if predicate(&value) {
            res = true;
        }
        !res
    });
    res
}

/// Returns `true` if `seq` contains an element equal to `needle`.
pub fn contains<S>(seq: S, needle: &S::Item) -> bool
where
    S: Seq,
    S::Item: PartialEq,
{
    any(seq, |value| value == needle)
}

/// Returns `true` if some element of `seq` satisfies `predicate`.
pub fn contains_by<S: Seq>(seq: S, predicate: impl FnMut(&S::Item) -> bool) -> bool {
    any(seq, predicate)
}

/// Returns `true` if `seq` contains at least one of the values in `needles`.
///
/// `false` when `needles` is empty, without traversing `seq`.
pub fn contains_any<S>(seq: S, needles: &[S::Item]) -> bool
where
    S: Seq,
    S::Item: Eq + Hash,
{
    if needles.is_empty() {
        return false;
    }
    let wanted: AHashSet<&S::Item> = needles.iter().collect();
    any(seq, |value| wanted.contains(value))
}

/// Returns `true` if `seq` contains every distinct value in `needles`.
///
/// `needles` is treated as a set: `[1, 1]` is satisfied by a single `1`.
/// `true` when `needles` is empty, without traversing `seq`. Stops as soon as
/// the last missing value is seen.
pub fn contains_all<S>(seq: S, needles: &[S::Item]) -> bool
where
    S: Seq,
    S::Item: Eq + Hash,
{
    if needles.is_empty() {
        return true;
    }
    let mut missing: AHashSet<&S::Item> = needles.iter().collect();
    seq.traverse(&mut |value| {
        missing.remove(&value);
        !missing.is_empty()
    });
    missing.is_empty()
}

/// Returns the first element of `seq` satisfying `predicate`, or `None`.
pub fn find<S: Seq>(seq: S, mut predicate: impl FnMut(&S::Item) -> bool) -> Option<S::Item> {
    let mut found = None;
    seq.traverse(&mut |value| {
        if predicate(&value) {
            found = Some(value);
            false
        } else {
            true
        }
    });
    found
}

/// Same as [`find`], wrapped in an [`Optional`].
pub fn find_o<S: Seq>(seq: S, predicate: impl FnMut(&S::Item) -> bool) -> Optional<S::Item> {
    find(seq, predicate).into()
}

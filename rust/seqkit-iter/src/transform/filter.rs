//! Sequence adapters that keep only the elements matching a predicate.

use crate::seq::{Seq, Seq2};

/// A sequence adapter that forwards only the elements for which the
/// predicate returns `true`.
///
/// A stop requested downstream stops the upstream traversal as well: no
/// further elements are pulled from the source once the consumer is done.
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    /// The upstream sequence.
    inner: S,
    /// The predicate elements must satisfy to be forwarded.
    predicate: P,
}

impl<S, P> Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    /// Creates a new `Filter` adapter.
    ///
    /// # Arguments
    ///
    /// * `inner` - The upstream sequence.
    /// * `predicate` - Called once per upstream element; `true` keeps it.
    pub fn new(inner: S, predicate: P) -> Self {
        Filter { inner, predicate }
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn traverse(&self, f: &mut dyn FnMut(S::Item) -> bool) {
        self.inner.traverse(&mut |value| {
            if (self.predicate)(&value) {
                f(value)
            } else {
                true
            }
        });
    }
}

/// A pair sequence adapter that forwards only the pairs for which the
/// predicate returns `true`.
#[derive(Debug, Clone)]
pub struct Filter2<S, P> {
    inner: S,
    predicate: P,
}

impl<S, P> Filter2<S, P>
where
    S: Seq2,
    P: Fn(&S::Key, &S::Value) -> bool,
{
    /// Creates a new `Filter2` adapter.
    pub fn new(inner: S, predicate: P) -> Self {
        Filter2 { inner, predicate }
    }
}

impl<S, P> Seq2 for Filter2<S, P>
where
    S: Seq2,
    P: Fn(&S::Key, &S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    fn traverse2(&self, f: &mut dyn FnMut(S::Key, S::Value) -> bool) {
        self.inner.traverse2(&mut |key, value| {
            if (self.predicate)(&key, &value) {
                f(key, value)
            } else {
                true
            }
        });
    }
}

//! Adapters from pair sequences ([`Seq2`]) to single-value sequences.

use crate::seq::{Seq, Seq2};

/// Yields the keys of a pair sequence.
#[derive(Debug, Clone)]
pub struct Keys<S> {
    inner: S,
}

impl<S: Seq2> Keys<S> {
    /// Creates a new `Keys` adapter.
    pub fn new(inner: S) -> Self {
        Keys { inner }
    }
}

impl<S: Seq2> Seq for Keys<S> {
    type Item = S::Key;

    fn traverse(&self, f: &mut dyn FnMut(S::Key) -> bool) {
        self.inner.traverse2(&mut |key, _| f(key));
    }
}

/// Yields the values of a pair sequence.
#[derive(Debug, Clone)]
pub struct Values<S> {
    inner: S,
}

impl<S: Seq2> Values<S> {
    /// Creates a new `Values` adapter.
    pub fn new(inner: S) -> Self {
        Values { inner }
    }
}

impl<S: Seq2> Seq for Values<S> {
    type Item = S::Value;

    fn traverse(&self, f: &mut dyn FnMut(S::Value) -> bool) {
        self.inner.traverse2(&mut |_, value| f(value));
    }
}

/// Yields `(key, value)` tuples of a pair sequence.
#[derive(Debug, Clone)]
pub struct Pairs<S> {
    inner: S,
}

impl<S: Seq2> Pairs<S> {
    /// Creates a new `Pairs` adapter.
    pub fn new(inner: S) -> Self {
        Pairs { inner }
    }
}

impl<S: Seq2> Seq for Pairs<S> {
    type Item = (S::Key, S::Value);

    fn traverse(&self, f: &mut dyn FnMut((S::Key, S::Value)) -> bool) {
        self.inner.traverse2(&mut |key, value| f((key, value)));
    }
}

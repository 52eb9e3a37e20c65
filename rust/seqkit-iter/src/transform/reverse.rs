//! A sequence adapter that emits elements in reverse encounter order.

use crate::{consume::pull_out, seq::Seq};

/// A sequence adapter that yields the upstream elements last to first.
///
/// The reverse order is unknown until the upstream end is reached, so every
/// traversal first materializes the whole upstream sequence into a buffer.
/// An endless upstream sequence makes the traversal block forever.
///
/// To reverse a slice, [`crate::source::from_slice_reverse`] avoids the
/// buffer.
#[derive(Debug, Clone)]
pub struct Reverse<S> {
    inner: S,
}

impl<S: Seq> Reverse<S> {
    /// Creates a new `Reverse` adapter.
    pub fn new(inner: S) -> Self {
        Reverse { inner }
    }
}

impl<S: Seq> Seq for Reverse<S> {
    type Item = S::Item;

    fn traverse(&self, f: &mut dyn FnMut(S::Item) -> bool) {
        let buffer = pull_out(&self.inner, -1);
        for value in buffer.into_iter().rev() {
            if !f(value) {
                break;
            }
        }
    }
}

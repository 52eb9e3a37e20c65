//! A sequence adapter that caps the number of forwarded elements.

use crate::seq::Seq;

/// A sequence adapter that forwards at most `n` upstream elements.
///
/// The upstream traversal is stopped right after the `n`th element, even if
/// the source has more. A non-positive `n` forwards nothing and does not
/// traverse the source at all.
#[derive(Debug, Clone)]
pub struct Limit<S> {
    inner: S,
    n: isize,
}

impl<S: Seq> Limit<S> {
    /// Creates a new `Limit` adapter.
    pub fn new(inner: S, n: isize) -> Self {
        Limit { inner, n }
    }
}

impl<S: Seq> Seq for Limit<S> {
    type Item = S::Item;

    fn traverse(&self, f: &mut dyn FnMut(S::Item) -> bool) {
        if self.n <= 0 {
            return;
        }
        let mut remaining = self.n;
        self.inner.traverse(&mut |value| {
            remaining -= 1;
            f(value) && remaining > 0
        });
    }
}

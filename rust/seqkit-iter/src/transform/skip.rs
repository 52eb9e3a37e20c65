//! A sequence adapter that drops a leading run of elements.

use crate::seq::Seq;

/// A sequence adapter that suppresses the first `n` upstream elements and
/// forwards the rest.
///
/// A non-positive `n` suppresses nothing.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    inner: S,
    n: isize,
}

impl<S: Seq> Skip<S> {
    /// Creates a new `Skip` adapter.
    ///
    /// # Arguments
    ///
    /// * `inner` - The upstream sequence.
    /// * `n` - The number of leading elements to suppress.
    pub fn new(inner: S, n: isize) -> Self {
        Skip { inner, n }
    }
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;

    fn traverse(&self, f: &mut dyn FnMut(S::Item) -> bool) {
        if self.n <= 0 {
            return self.inner.traverse(f);
        }
        let mut skipped = 0;
        self.inner.traverse(&mut |value| {
            if skipped < self.n {
                skipped += 1;
                true
            } else {
                f(value)
            }
        });
    }
}

//! A sequence adapter that rewrites matching elements.

use crate::seq::Seq;

/// A sequence adapter that rewrites elements equal to `from` into `to`.
///
/// `n` caps the number of replacements per traversal:
/// - `n > 0`: at most `n` matches are replaced; later matches pass through
///   unchanged.
/// - `n == 0`: nothing is replaced.
/// - `n < 0`: every match is replaced.
#[derive(Debug, Clone)]
pub struct Replace<S: Seq> {
    inner: S,
    from: S::Item,
    to: S::Item,
    n: isize,
}

impl<S> Replace<S>
where
    S: Seq,
    S::Item: PartialEq + Clone,
{
    /// Creates a new `Replace` adapter.
    ///
    /// # Arguments
    ///
    /// * `inner` - The upstream sequence.
    /// * `from` - The value to look for.
    /// * `to` - The value substituted for each replaced match.
    /// * `n` - The replacement cap, see the type documentation.
    pub fn new(inner: S, from: S::Item, to: S::Item, n: isize) -> Self {
        Replace { inner, from, to, n }
    }

    /// Creates a `Replace` adapter that replaces every match.
    pub fn all(inner: S, from: S::Item, to: S::Item) -> Self {
        Replace::new(inner, from, to, -1)
    }
}

impl<S> Seq for Replace<S>
where
    S: Seq,
    S::Item: PartialEq + Clone,
{
    type Item = S::Item;

    fn traverse(&self, f: &mut dyn FnMut(S::Item) -> bool) {
        if self.n == 0 {
            return self.inner.traverse(f);
        }
        let mut left = self.n;
        self.inner.traverse(&mut |value| {
            if left != 0 && value == self.from {
                if left > 0 {
                    left -= 1;
                }
                f(self.to.clone())
            } else {
                f(value)
            }
        });
    }
}

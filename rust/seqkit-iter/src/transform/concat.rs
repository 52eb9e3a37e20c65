//! Sequence adapters that visit several sequences one after another.

use crate::seq::Seq;

/// A sequence adapter that visits each source sequence fully, in the order
/// given, before moving on to the next one.
///
/// A stop requested downstream ends the whole traversal: the current source
/// is abandoned and no subsequent source is visited.
///
/// All sources share one type. To concatenate sequences of different types,
/// box them (`Vec<Box<dyn Seq<Item = T>>>`) or use [`Chain`].
#[derive(Debug, Clone)]
pub struct Concat<S> {
    sources: Vec<S>,
}

impl<S: Seq> Concat<S> {
    /// Creates a new `Concat` adapter over `sources`.
    pub fn new(sources: impl IntoIterator<Item = S>) -> Self {
        Concat {
            sources: sources.into_iter().collect(),
        }
    }

    /// Appends another source to visit after the current ones.
    pub fn push(&mut self, source: S) {
        self.sources.push(source);
    }
}

impl<S: Seq> Seq for Concat<S> {
    type Item = S::Item;

    fn traverse(&self, f: &mut dyn FnMut(S::Item) -> bool) {
        let mut stopped = false;
        for source in &self.sources {
            source.traverse(&mut |value| {
                if f(value) {
                    true
                } else {
                    stopped = true;
                    false
                }
            });
            if stopped {
                return;
            }
        }
    }
}

/// A sequence adapter that visits `first` and then `second`, two sequences
/// of possibly different types but the same item type.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    /// Creates a new `Chain` adapter.
    pub fn new(first: A, second: B) -> Self {
        Chain { first, second }
    }
}

impl<A, B> Seq for Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    type Item = A::Item;

    fn traverse(&self, f: &mut dyn FnMut(A::Item) -> bool) {
        let mut stopped = false;
        self.first.traverse(&mut |value| {
            stopped = !f(value);
            !stopped
        });
        if !stopped {
            self.second.traverse(f);
        }
    }
}

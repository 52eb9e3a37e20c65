//! The core sequence abstractions.
//!
//! A [`Seq`] is a pull-based, single-pass, possibly infinite generator of
//! values. It is driven by handing it a callback: the sequence invokes the
//! callback once per element, in order, until either the source is exhausted
//! or the callback returns `false`. [`Seq2`] is the same contract for
//! key/value pairs.
//!
//! # Traversal contract
//!
//! - Once the callback returns `false`, the sequence stops immediately, never
//!   calls the callback again and returns normally. Early termination is not
//!   an error.
//! - Each call to [`Seq::traverse`] is an independent traversal from the start
//!   of the logical stream. The exception is a sequence backed by a single-use
//!   source (such as a channel receiver): a second traversal continues from
//!   wherever the source currently is and may be shorter or empty.
//! - Traversal runs on the calling thread, calling the callback inline.
//!
//! Operators wrap sequences into new sequences and compose lazily; consumers
//! drive a traversal and reduce it to a result. Both live in sibling modules.

use std::{marker::PhantomData, rc::Rc, sync::Arc};

/// A lazy sequence of values, driven by a callback.
///
/// The trait is object safe: `Box<dyn Seq<Item = T>>` is itself a `Seq`,
/// which allows sequences of different concrete types to be stored together
/// (for example, as the inputs of [`crate::transform::Concat`]).
pub trait Seq {
    /// The type of the elements produced by the sequence.
    type Item;

    /// Drives one traversal, calling `f` for each element until the sequence
    /// is exhausted or `f` returns `false`.
    fn traverse(&self, f: &mut dyn FnMut(Self::Item) -> bool);
}

/// A lazy sequence of key/value pairs, driven by a callback.
///
/// Follows the same traversal contract as [`Seq`].
pub trait Seq2 {
    type Key;
    type Value;

    /// Drives one traversal, calling `f` for each pair until the sequence is
    /// exhausted or `f` returns `false`.
    fn traverse2(&self, f: &mut dyn FnMut(Self::Key, Self::Value) -> bool);
}

impl<S: Seq + ?Sized> Seq for &S {
    type Item = S::Item;

    #[inline]
    fn traverse(&self, f: &mut dyn FnMut(Self::Item) -> bool) {
        (**self).traverse(f)
    }
}

impl<S: Seq + ?Sized> Seq for Box<S> {
    type Item = S::Item;

    #[inline]
    fn traverse(&self, f: &mut dyn FnMut(Self::Item) -> bool) {
        (**self).traverse(f)
    }
}

impl<S: Seq + ?Sized> Seq for Rc<S> {
    type Item = S::Item;

    #[inline]
    fn traverse(&self, f: &mut dyn FnMut(Self::Item) -> bool) {
        (**self).traverse(f)
    }
}

impl<S: Seq + ?Sized> Seq for Arc<S> {
    type Item = S::Item;

    #[inline]
    fn traverse(&self, f: &mut dyn FnMut(Self::Item) -> bool) {
        (**self).traverse(f)
    }
}

impl<S: Seq2 + ?Sized> Seq2 for &S {
    type Key = S::Key;
    type Value = S::Value;

    #[inline]
    fn traverse2(&self, f: &mut dyn FnMut(Self::Key, Self::Value) -> bool) {
        (**self).traverse2(f)
    }
}

impl<S: Seq2 + ?Sized> Seq2 for Box<S> {
    type Key = S::Key;
    type Value = S::Value;

    #[inline]
    fn traverse2(&self, f: &mut dyn FnMut(Self::Key, Self::Value) -> bool) {
        (**self).traverse2(f)
    }
}

/// A sequence backed by a traversal closure. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<T, F> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

impl<T, F> Seq for FromFn<T, F>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    #[inline]
    fn traverse(&self, f: &mut dyn FnMut(T) -> bool) {
        (self.f)(f)
    }
}

impl<T, F> std::fmt::Debug for FromFn<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Builds a sequence from a closure that performs one traversal.
///
/// The closure receives the consumer's callback and must stop producing as
/// soon as the callback returns `false`.
///
/// # Examples
///
/// ```
/// use seqkit_iter::{SeqExt, seq::from_fn};
///
/// // All natural numbers; the consumer decides when to stop.
/// let naturals = from_fn(|yield_fn: &mut dyn FnMut(u64) -> bool| {
///     let mut n = 0;
///     while yield_fn(n) {
///         n += 1;
///     }
/// });
/// assert_eq!(naturals.limit(3).to_vec(), vec![0, 1, 2]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    FromFn {
        f,
        _item: PhantomData,
    }
}

/// A pair sequence backed by a traversal closure. See [`from_fn2`].
#[derive(Clone)]
pub struct FromFn2<K, V, F> {
    f: F,
    _pair: PhantomData<fn() -> (K, V)>,
}

impl<K, V, F> Seq2 for FromFn2<K, V, F>
where
    F: Fn(&mut dyn FnMut(K, V) -> bool),
{
    type Key = K;
    type Value = V;

    #[inline]
    fn traverse2(&self, f: &mut dyn FnMut(K, V) -> bool) {
        (self.f)(f)
    }
}

impl<K, V, F> std::fmt::Debug for FromFn2<K, V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn2").finish_non_exhaustive()
    }
}

/// Builds a pair sequence from a closure that performs one traversal.
pub fn from_fn2<K, V, F>(f: F) -> FromFn2<K, V, F>
where
    F: Fn(&mut dyn FnMut(K, V) -> bool),
{
    FromFn2 {
        f,
        _pair: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counting_seq(
        limit: u32,
        produced: &Cell<u32>,
    ) -> FromFn<u32, impl Fn(&mut dyn FnMut(u32) -> bool) + '_> {
        from_fn(move |f: &mut dyn FnMut(u32) -> bool| {
            for i in 0..limit {
                produced.set(produced.get() + 1);
                if !f(i) {
                    return;
                }
            }
        })
    }

    #[test]
    fn test_from_fn_full_traversal() {
        let produced = Cell::new(0);
        let seq = counting_seq(5, &produced);
        let mut seen = Vec::new();
        seq.traverse(&mut |v| {
            seen.push(v);
            true
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(produced.get(), 5);
    }

    #[test]
    fn test_early_stop_is_honored() {
        let produced = Cell::new(0);
        let seq = counting_seq(100, &produced);
        let mut calls = 0;
        seq.traverse(&mut |v| {
            calls += 1;
            v < 2
        });
        assert_eq!(calls, 3);
        assert_eq!(produced.get(), 3);
    }

    #[test]
    fn test_each_traversal_is_fresh() {
        let produced = Cell::new(0);
        let seq = counting_seq(3, &produced);
        for _ in 0..2 {
            let mut seen = Vec::new();
            seq.traverse(&mut |v| {
                seen.push(v);
                true
            });
            assert_eq!(seen, vec![0, 1, 2]);
        }
        assert_eq!(produced.get(), 6);
    }

    #[test]
    fn test_boxed_and_shared_seqs() {
        let produced = Cell::new(0);
        let seq = counting_seq(4, &produced);
        let boxed: Box<dyn Seq<Item = u32> + '_> = Box::new(&seq);
        let mut sum = 0;
        boxed.traverse(&mut |v| {
            sum += v;
            true
        });
        assert_eq!(sum, 6);

        let shared = Rc::new(counting_seq(2, &produced));
        let mut count = 0;
        (&shared).traverse(&mut |_| {
            count += 1;
            true
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn test_arc_seq_shared_across_threads() {
        let evens: Arc<dyn Seq<Item = u32> + Send + Sync> =
            Arc::new(from_fn(|f: &mut dyn FnMut(u32) -> bool| {
                for i in (0..10).step_by(2) {
                    if !f(i) {
                        return;
                    }
                }
            }));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let evens = Arc::clone(&evens);
                std::thread::spawn(move || {
                    let mut seen = Vec::new();
                    evens.traverse(&mut |v| {
                        seen.push(v);
                        true
                    });
                    seen
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec![0, 2, 4, 6, 8]);
        }

        let mut first = None;
        (&evens).traverse(&mut |v| {
            first = Some(v);
            false
        });
        assert_eq!(first, Some(0));
    }

    #[test]
    fn test_from_fn2() {
        let pairs = from_fn2(|f: &mut dyn FnMut(&'static str, i32) -> bool| {
            let _ = f("a", 1) && f("b", 2) && f("c", 3);
        });
        let mut seen = Vec::new();
        pairs.traverse2(&mut |k, v| {
            seen.push((k, v));
            k != "b"
        });
        assert_eq!(seen, vec![("a", 1), ("b", 2)]);
    }
}

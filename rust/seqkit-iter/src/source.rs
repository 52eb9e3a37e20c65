//! Constructors that turn a backing collection into a [`Seq`] or [`Seq2`].
//!
//! - Slices: [`from_slice`], [`from_vec`], [`from_slice_reverse`],
//!   [`from_slice_shuffle`]. Elements are cloned out of the slice, so the
//!   sequence yields `T`. For non-`Clone` elements, use
//!   `from_iter(slice.iter())`, which yields `&T`.
//! - Iterators: [`from_iter`] over any cloneable iterator (ranges, adapters).
//! - Channels: [`from_channel`], a single-use source.
//! - Maps: [`from_map`], a [`Seq2`] over `(key, value)` pairs.

use std::{marker::PhantomData, sync::mpsc::Receiver};

use crate::seq::{Seq, Seq2};

/// A sequence over the elements of a borrowed slice, in index order.
#[derive(Debug)]
pub struct SliceSeq<'a, T> {
    slice: &'a [T],
}

impl<T> Clone for SliceSeq<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceSeq<'_, T> {}

impl<T: Clone> Seq for SliceSeq<'_, T> {
    type Item = T;

    fn traverse(&self, f: &mut dyn FnMut(T) -> bool) {
        for value in self.slice {
            if !f(value.clone()) {
                break;
            }
        }
    }
}

/// Returns a sequence over `slice` that reproduces its order exactly.
pub fn from_slice<T: Clone>(slice: &[T]) -> SliceSeq<'_, T> {
    SliceSeq { slice }
}

/// A sequence that owns its elements.
#[derive(Debug, Clone, Default)]
pub struct VecSeq<T> {
    values: Vec<T>,
}

impl<T> VecSeq<T> {
    /// Gives back the backing vector.
    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T: Clone> Seq for VecSeq<T> {
    type Item = T;

    fn traverse(&self, f: &mut dyn FnMut(T) -> bool) {
        from_slice(&self.values).traverse(f)
    }
}

/// Returns a sequence that owns `values` and yields clones of them in order.
pub fn from_vec<T: Clone>(values: Vec<T>) -> VecSeq<T> {
    VecSeq { values }
}

/// A sequence over the elements of a borrowed slice, last element first.
#[derive(Debug)]
pub struct ReverseSliceSeq<'a, T> {
    slice: &'a [T],
}

impl<T> Clone for ReverseSliceSeq<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReverseSliceSeq<'_, T> {}

impl<T: Clone> Seq for ReverseSliceSeq<'_, T> {
    type Item = T;

    fn traverse(&self, f: &mut dyn FnMut(T) -> bool) {
        for value in self.slice.iter().rev() {
            if !f(value.clone()) {
                break;
            }
        }
    }
}

/// Returns a sequence over `slice` in strictly reverse index order.
///
/// Unlike [`crate::transform::Reverse`], this needs no buffering.
pub fn from_slice_reverse<T: Clone>(slice: &[T]) -> ReverseSliceSeq<'_, T> {
    ReverseSliceSeq { slice }
}

/// A sequence over the elements of a borrowed slice in a fixed random
/// order.
#[derive(Debug, Clone)]
pub struct ShuffleSeq<'a, T> {
    slice: &'a [T],
    /// A permutation of `0..slice.len()`, fixed at construction.
    order: Vec<usize>,
}

impl<T> ShuffleSeq<'_, T> {
    /// The index permutation this sequence follows.
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

impl<T: Clone> Seq for ShuffleSeq<'_, T> {
    type Item = T;

    fn traverse(&self, f: &mut dyn FnMut(T) -> bool) {
        for &idx in &self.order {
            if !f(self.slice[idx].clone()) {
                break;
            }
        }
    }
}

/// Returns a sequence that yields every element of `slice` exactly once, in
/// an order given by a uniform random permutation drawn from `rng`.
///
/// The permutation is drawn once, here. Every traversal of the returned
/// sequence follows the same order.
pub fn from_slice_shuffle<'a, T: Clone>(
    slice: &'a [T],
    rng: &mut fastrand::Rng,
) -> ShuffleSeq<'a, T> {
    let mut order: Vec<usize> = (0..slice.len()).collect();
    rng.shuffle(&mut order);
    ShuffleSeq { slice, order }
}

/// Same as [`from_slice_shuffle`], with a generator seeded by `seed`.
///
/// Equal seeds produce equal orders for equally sized slices.
pub fn from_slice_shuffle_seeded<T: Clone>(slice: &[T], seed: u64) -> ShuffleSeq<'_, T> {
    from_slice_shuffle(slice, &mut fastrand::Rng::with_seed(seed))
}

/// A sequence backed by a cloneable iterator.
#[derive(Debug, Clone)]
pub struct IterSeq<I> {
    iter: I,
}

impl<I> Seq for IterSeq<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn traverse(&self, f: &mut dyn FnMut(I::Item) -> bool) {
        for value in self.iter.clone() {
            if !f(value) {
                break;
            }
        }
    }
}

/// Returns a sequence over `iter`. Each traversal starts from a fresh clone
/// of the iterator, so the sequence can be traversed repeatedly.
///
/// # Examples
///
/// ```
/// use seqkit_iter::{SeqExt, source::from_iter};
///
/// let evens = from_iter(0..10).filter(|v| v % 2 == 0);
/// assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
/// assert_eq!(evens.count(), 5);
/// ```
pub fn from_iter<I>(iter: I) -> IterSeq<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    IterSeq {
        iter: iter.into_iter(),
    }
}

/// A sequence that yields nothing.
#[derive(Debug)]
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn traverse(&self, _f: &mut dyn FnMut(T) -> bool) {}
}

/// Returns a sequence that yields nothing.
pub fn empty<T>() -> Empty<T> {
    Empty { _item: PhantomData }
}

/// A sequence that drains a channel receiver.
///
/// This is a single-use source: values consumed by one traversal are gone, so
/// a later traversal continues from wherever the channel currently is.
/// Driving two traversals over the same receiver from different threads at
/// once is not supported.
#[derive(Debug)]
pub struct ChannelSeq<'a, T> {
    rx: &'a Receiver<T>,
}

impl<T> Seq for ChannelSeq<'_, T> {
    type Item = T;

    fn traverse(&self, f: &mut dyn FnMut(T) -> bool) {
        while let Ok(value) = self.rx.recv() {
            if !f(value) {
                break;
            }
        }
    }
}

/// Returns a sequence over the values arriving on `rx`, in arrival order.
///
/// A traversal blocks the calling thread while the channel is empty and at
/// least one sender is alive, and ends when all senders have been dropped
/// and the buffered values are drained.
pub fn from_channel<T>(rx: &Receiver<T>) -> ChannelSeq<'_, T> {
    ChannelSeq { rx }
}

/// A pair sequence over the entries of a borrowed map.
#[derive(Debug)]
pub struct MapSeq<'a, M: ?Sized> {
    map: &'a M,
}

impl<M: ?Sized> Clone for MapSeq<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for MapSeq<'_, M> {}

impl<'a, K, V, M> Seq2 for MapSeq<'a, M>
where
    M: ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
{
    type Key = &'a K;
    type Value = &'a V;

    fn traverse2(&self, f: &mut dyn FnMut(&'a K, &'a V) -> bool) {
        for (key, value) in self.map {
            if !f(key, value) {
                break;
            }
        }
    }
}

/// Returns a pair sequence over any map whose reference iterates as
/// `(&K, &V)`: `HashMap`, `BTreeMap`, `ahash::AHashMap` and the like. The
/// pairs borrow from the map.
///
/// The order is the map's own iteration order: sorted for `BTreeMap`,
/// unspecified but stable between traversals for hash maps that are not
/// modified in between.
pub fn from_map<M: ?Sized>(map: &M) -> MapSeq<'_, M> {
    MapSeq { map }
}

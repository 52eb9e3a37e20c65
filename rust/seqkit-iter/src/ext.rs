//! Method-call syntax for sequences.
//!
//! [`SeqExt`] and [`Seq2Ext`] are implemented for every [`Seq`] and [`Seq2`].
//! Operators take the sequence by value and return a new sequence; consumers
//! borrow it, so the same sequence can be consumed more than once.

use std::{collections::HashMap, hash::Hash};

use num_traits::AsPrimitive;
use seqkit_common::Result;
use seqkit_optional::Optional;

use crate::{
    consume,
    seq::{Seq, Seq2},
    transform::{Chain, Filter, Filter2, Keys, Limit, Map, Pairs, Replace, Reverse, Skip, Values},
};

/// Extension methods for [`Seq`] implementations.
///
/// # Examples
///
/// ```
/// use seqkit_iter::{SeqExt, source::from_slice};
///
/// let words = ["apple", "kiwi", "banana", "fig"];
/// let long = from_slice(&words).filter(|w| w.len() > 3);
/// assert_eq!(long.join(","), "apple,kiwi,banana");
/// assert_eq!(long.count(), 3);
/// assert_eq!(long.map(str::len).max().must(), 6);
/// ```
pub trait SeqExt: Seq + Sized {
    /// See [`crate::transform::filter`].
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// See [`crate::transform::map`].
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// See [`crate::transform::Skip`].
    fn skip(self, n: isize) -> Skip<Self> {
        Skip::new(self, n)
    }

    /// See [`crate::transform::Limit`].
    fn limit(self, n: isize) -> Limit<Self> {
        Limit::new(self, n)
    }

    /// See [`crate::transform::Replace`].
    fn replace(self, from: Self::Item, to: Self::Item, n: isize) -> Replace<Self>
    where
        Self::Item: PartialEq + Clone,
    {
        Replace::new(self, from, to, n)
    }

    /// See [`crate::transform::replace_all`].
    fn replace_all(self, from: Self::Item, to: Self::Item) -> Replace<Self>
    where
        Self::Item: PartialEq + Clone,
    {
        Replace::all(self, from, to)
    }

    /// See [`crate::transform::Reverse`].
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    /// See [`crate::transform::chain`].
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        B: Seq<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// See [`consume::all`].
    fn all(&self, predicate: impl FnMut(&Self::Item) -> bool) -> bool {
        consume::all(self, predicate)
    }

    /// See [`consume::any`].
    fn any(&self, predicate: impl FnMut(&Self::Item) -> bool) -> bool {
        consume::any(self, predicate)
    }

    /// See [`consume::count`].
    fn count(&self) -> usize {
        consume::count(self)
    }

    /// See [`consume::avg`].
    fn avg(&self) -> f64
    where
        Self::Item: AsPrimitive<f64>,
    {
        consume::avg(self)
    }

    /// See [`consume::avg_by`].
    fn avg_by<N: AsPrimitive<f64>>(&self, f: impl FnMut(Self::Item) -> N) -> f64 {
        consume::avg_by(self, f)
    }

    /// See [`consume::contains`].
    fn contains(&self, needle: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        consume::contains(self, needle)
    }

    /// See [`consume::contains_by`].
    fn contains_by(&self, predicate: impl FnMut(&Self::Item) -> bool) -> bool {
        consume::contains_by(self, predicate)
    }

    /// See [`consume::contains_any`].
    fn contains_any(&self, needles: &[Self::Item]) -> bool
    where
        Self::Item: Eq + Hash,
    {
        consume::contains_any(self, needles)
    }

    /// See [`consume::contains_all`].
    fn contains_all(&self, needles: &[Self::Item]) -> bool
    where
        Self::Item: Eq + Hash,
    {
        consume::contains_all(self, needles)
    }

    /// See [`consume::find`].
    fn find(&self, predicate: impl FnMut(&Self::Item) -> bool) -> Option<Self::Item> {
        consume::find(self, predicate)
    }

    /// See [`consume::find_o`].
    fn find_o(&self, predicate: impl FnMut(&Self::Item) -> bool) -> Optional<Self::Item> {
        consume::find_o(self, predicate)
    }

    /// See [`consume::head`].
    fn head(&self) -> Option<Self::Item> {
        consume::head(self)
    }

    /// See [`consume::head_o`].
    fn head_o(&self) -> Optional<Self::Item> {
        consume::head_o(self)
    }

    /// See [`consume::for_each`].
    fn for_each(&self, f: impl FnMut(Self::Item) -> bool) {
        consume::for_each(self, f)
    }

    /// See [`consume::for_each_idx`].
    fn for_each_idx(&self, f: impl FnMut(usize, Self::Item) -> bool) {
        consume::for_each_idx(self, f)
    }

    /// See [`consume::join`].
    fn join(&self, sep: &str) -> String
    where
        Self::Item: AsRef<str>,
    {
        consume::join(self, sep)
    }

    /// See [`consume::min`].
    fn min(&self) -> Optional<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        consume::min(self)
    }

    /// See [`consume::max`].
    fn max(&self) -> Optional<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        consume::max(self)
    }

    /// See [`consume::min_by`].
    fn min_by(&self, less: impl FnMut(&Self::Item, &Self::Item) -> bool) -> Optional<Self::Item> {
        consume::min_by(self, less)
    }

    /// See [`consume::max_by`].
    fn max_by(&self, less: impl FnMut(&Self::Item, &Self::Item) -> bool) -> Optional<Self::Item> {
        consume::max_by(self, less)
    }

    /// See [`consume::to_vec`].
    fn to_vec(&self) -> Vec<Self::Item> {
        consume::to_vec(self)
    }

    /// See [`consume::pull_out`].
    fn pull_out(&self, n: isize) -> Vec<Self::Item> {
        consume::pull_out(self, n)
    }

    /// See [`consume::at`].
    #[track_caller]
    fn at(&self, index: isize) -> Optional<Self::Item> {
        consume::at(self, index)
    }

    /// See [`consume::try_at`].
    fn try_at(&self, index: isize) -> Result<Optional<Self::Item>> {
        consume::try_at(self, index)
    }
}

impl<S: Seq> SeqExt for S {}

/// Extension methods for [`Seq2`] implementations.
pub trait Seq2Ext: Seq2 + Sized {
    /// See [`crate::transform::keys`].
    fn keys(self) -> Keys<Self> {
        Keys::new(self)
    }

    /// See [`crate::transform::values`].
    fn values(self) -> Values<Self> {
        Values::new(self)
    }

    /// See [`crate::transform::pairs`].
    fn pairs(self) -> Pairs<Self> {
        Pairs::new(self)
    }

    /// See [`crate::transform::filter2`].
    fn filter2<P>(self, predicate: P) -> Filter2<Self, P>
    where
        P: Fn(&Self::Key, &Self::Value) -> bool,
    {
        Filter2::new(self, predicate)
    }

    /// See [`consume::count2`].
    fn count2(&self) -> usize {
        consume::count2(self)
    }

    /// See [`consume::all2`].
    fn all2(&self, predicate: impl FnMut(&Self::Key, &Self::Value) -> bool) -> bool {
        consume::all2(self, predicate)
    }

    /// See [`consume::any2`].
    fn any2(&self, predicate: impl FnMut(&Self::Key, &Self::Value) -> bool) -> bool {
        consume::any2(self, predicate)
    }

    /// See [`consume::find2`].
    fn find2(
        &self,
        predicate: impl FnMut(&Self::Key, &Self::Value) -> bool,
    ) -> Option<(Self::Key, Self::Value)> {
        consume::find2(self, predicate)
    }

    /// See [`consume::find2_o`].
    fn find2_o(
        &self,
        predicate: impl FnMut(&Self::Key, &Self::Value) -> bool,
    ) -> Optional<(Self::Key, Self::Value)> {
        consume::find2_o(self, predicate)
    }

    /// See [`consume::for_each2`].
    fn for_each2(&self, f: impl FnMut(Self::Key, Self::Value) -> bool) {
        consume::for_each2(self, f)
    }

    /// See [`consume::to_map`].
    fn to_map(&self) -> HashMap<Self::Key, Self::Value>
    where
        Self::Key: Eq + Hash,
    {
        consume::to_map(self)
    }
}

impl<S: Seq2> Seq2Ext for S {}

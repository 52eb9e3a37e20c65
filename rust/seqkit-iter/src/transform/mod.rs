//! Sequence operators: adapters that wrap one or more sequences into a new
//! sequence.
//!
//! Operators compose lazily. Building one does no work; each traversal of
//! the outer sequence drives a traversal of the inner ones, and a stop
//! requested by the consumer propagates all the way to the source. The only
//! operator that buffers is [`Reverse`], which cannot know the reverse order
//! before reaching the end.
//!
//! # Provided Adapters
//!
//! - [`Filter`] / [`Filter2`]: keep elements (pairs) matching a predicate.
//! - [`Map`]: transform every element.
//! - [`Concat`] / [`Chain`]: visit sequences one after another.
//! - [`Skip`]: drop the first `n` elements.
//! - [`Limit`]: forward at most `n` elements.
//! - [`Replace`]: rewrite elements equal to a given value.
//! - [`Reverse`]: emit elements last to first.
//! - [`Keys`], [`Values`], [`Pairs`]: turn a pair sequence into a sequence.
//!
//! The free functions below construct the adapters; [`crate::SeqExt`]
//! offers the same as methods.

use crate::seq::{Seq, Seq2};

pub mod concat;
pub mod filter;
pub mod limit;
pub mod map;
pub mod pairs;
pub mod replace;
pub mod reverse;
pub mod skip;

pub use concat::{Chain, Concat};
pub use filter::{Filter, Filter2};
pub use limit::Limit;
pub use map::Map;
pub use pairs::{Keys, Pairs, Values};
pub use replace::Replace;
pub use reverse::Reverse;
pub use skip::Skip;

/// Keeps the elements of `seq` for which `predicate` returns `true`.
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    Filter::new(seq, predicate)
}

/// Keeps the pairs of `seq` for which `predicate` returns `true`.
pub fn filter2<S, P>(seq: S, predicate: P) -> Filter2<S, P>
where
    S: Seq2,
    P: Fn(&S::Key, &S::Value) -> bool,
{
    Filter2::new(seq, predicate)
}

/// Transforms every element of `seq` with `f`.
pub fn map<S, F, U>(seq: S, f: F) -> Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> U,
{
    Map::new(seq, f)
}

/// Visits every sequence in `sources`, in order.
pub fn concat<S: Seq>(sources: impl IntoIterator<Item = S>) -> Concat<S> {
    Concat::new(sources)
}

/// Visits `first`, then `second`.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    Chain::new(first, second)
}

/// Suppresses the first `n` elements of `seq`. `n <= 0` suppresses none.
pub fn skip<S: Seq>(seq: S, n: isize) -> Skip<S> {
    Skip::new(seq, n)
}

/// Forwards at most `n` elements of `seq`. `n <= 0` forwards nothing.
pub fn limit<S: Seq>(seq: S, n: isize) -> Limit<S> {
    Limit::new(seq, n)
}

/// Rewrites up to `n` elements equal to `from` into `to`.
///
/// `n < 0` replaces every match, `n == 0` replaces nothing.
pub fn replace<S>(seq: S, from: S::Item, to: S::Item, n: isize) -> Replace<S>
where
    S: Seq,
    S::Item: PartialEq + Clone,
{
    Replace::new(seq, from, to, n)
}

/// Rewrites every element equal to `from` into `to`.
pub fn replace_all<S>(seq: S, from: S::Item, to: S::Item) -> Replace<S>
where
    S: Seq,
    S::Item: PartialEq + Clone,
{
    Replace::all(seq, from, to)
}

/// Emits the elements of `seq` last to first, buffering each traversal.
pub fn reverse<S: Seq>(seq: S) -> Reverse<S> {
    Reverse::new(seq)
}

/// The keys of a pair sequence.
pub fn keys<S: Seq2>(seq: S) -> Keys<S> {
    Keys::new(seq)
}

/// The values of a pair sequence.
pub fn values<S: Seq2>(seq: S) -> Values<S> {
    Values::new(seq)
}

/// A pair sequence as a sequence of `(key, value)` tuples.
pub fn pairs<S: Seq2>(seq: S) -> Pairs<S> {
    Pairs::new(seq)
}

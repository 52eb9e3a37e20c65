//! Lazy, callback-driven sequences.
//!
//! A sequence is a generator of values that pushes its elements into a
//! consumer callback until it runs dry or the consumer asks it to stop. This
//! crate provides:
//!
//! - **Core traits**: [`Seq`] for single values and [`Seq2`] for key/value
//!   pairs, plus closure-backed sequences ([`seq::from_fn`], [`seq::from_fn2`])
//! - **Sources**: sequences over slices, iterators, channels and maps
//! - **Operators**: lazy adapters such as filter, map, skip, limit, replace,
//!   reverse and concatenation
//! - **Consumers**: functions that drive a traversal to a result (counts,
//!   averages, searches, min/max, indexing)
//!
//! # Key Types
//!
//! - [`Seq`] / [`Seq2`] - The sequence abstractions
//! - [`SeqExt`] / [`Seq2Ext`] - Extension traits with operators and consumers
//!   as methods
//! - [`Optional`] - Returned by consumers whose result may be absent
//!
//! # Examples
//!
//! ```
//! use seqkit_iter::{SeqExt, source::from_slice};
//!
//! let scores = [72, 91, 85, 60, 91];
//! let passing = from_slice(&scores).filter(|s| *s >= 70);
//! assert_eq!(passing.count(), 4);
//! assert_eq!(passing.max().must(), 91);
//! assert!(from_slice(&scores).at(10).is_empty());
//! ```

pub mod consume;
pub mod ext;
pub mod seq;
pub mod source;
pub mod transform;

pub use ext::{Seq2Ext, SeqExt};
pub use seq::{Seq, Seq2};
pub use seqkit_optional::Optional;

#[cfg(test)]
mod tests;

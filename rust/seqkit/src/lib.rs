//! # seqkit: lazy sequences and functional helpers
//!
//! seqkit is a small library of functional-style operations (filter, map,
//! find, min/max, contains, join and friends) over slices, maps and channels.
//! All of them are built on one abstraction: a lazy, callback-driven
//! sequence that stops as soon as its consumer has seen enough.
//!
//! This crate re-exports the component crates so they can be used through a
//! single dependency.
//!
//! ## Module Organization
//!
//! * [`iter`] - The [`Seq`]/[`Seq2`] traits, sources, operators and consumers
//! * [`slice`] - One-call helpers over slices
//! * [`map`] - One-call helpers over hash maps
//! * [`optional`] - The [`Optional`] result wrapper
//! * [`common`] - Error type and argument checks shared by all crates
//!
//! ### Support Modules
//!
//! * [`support::collections`] - Stack, handle-addressed linked list and a
//!   thread-safe object pool
//!
//! ## Features
//!
//! * `serde` - `Serialize`/`Deserialize` for [`Optional`], as the bare value or
//!   `null`
//!
//! ## Getting Started
//!
//! ```
//! use seqkit::{SeqExt, iter::source::from_iter};
//!
//! let squares = from_iter(1..).map(|v: u64| v * v);
//! let first_big = squares.filter(|v| *v > 50).head();
//! assert_eq!(first_big, Some(64));
//! ```

pub use seqkit_common as common;
pub use seqkit_iter as iter;
pub use seqkit_map as map;
pub use seqkit_optional as optional;
pub use seqkit_slice as slice;

pub use seqkit_iter::{Seq, Seq2, Seq2Ext, SeqExt};
pub use seqkit_optional::Optional;

pub mod support {
    pub use seqkit_collections as collections;
}

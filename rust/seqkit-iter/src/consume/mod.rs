//! Sequence consumers: functions that drive a traversal and reduce it to a
//! result.
//!
//! Every consumer takes the sequence by value. Pass `&seq` to keep the
//! sequence around for further traversals. Consumers that can decide early
//! (such as [`any`], [`find`] or [`head`]) stop the traversal as soon as the
//! outcome is known.
//!
//! # Provided Consumers
//!
//! - predicates: [`all`], [`any`], [`contains`], [`contains_by`],
//!   [`contains_any`], [`contains_all`], [`find`], [`find_o`].
//! - aggregates: [`count`], [`avg`], [`avg_by`], [`min`], [`max`],
//!   [`min_by`], [`max_by`], [`join`], [`to_vec`].
//! - visiting: [`for_each`], [`for_each_idx`], [`head`], [`head_o`].
//! - positional: [`pull_out`], [`at`], [`try_at`].
//! - pairs: [`count2`], [`all2`], [`any2`], [`find2`], [`find2_o`],
//!   [`for_each2`], [`to_map`].

pub mod aggregate;
pub mod index;
pub mod pairs;
pub mod predicate;
pub mod visit;

pub use aggregate::{avg, avg_by, count, join, max, max_by, min, min_by, to_vec};
pub use index::{at, pull_out, try_at};
pub use pairs::{all2, any2, count2, find2, find2_o, for_each2, to_map};
pub use predicate::{all, any, contains, contains_all, contains_any, contains_by, find, find_o};
pub use visit::{for_each, for_each_idx, head, head_o};

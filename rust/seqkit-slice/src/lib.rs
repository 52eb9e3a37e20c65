//! Slice convenience functions built on `seqkit-iter` sequences.
//!
//! Every function here wraps its input slice into a sequence and hands it to
//! the matching consumer or operator. Queries borrow: elements they return
//! are references into the input. Operators materialize their result into a
//! new `Vec`.
//!
//! # Examples
//!
//! ```
//! let scores = [72, 91, 85, 60];
//! assert!(seqkit_slice::any(&scores, |s| *s > 90));
//! assert_eq!(seqkit_slice::max(&scores).must(), &91);
//! assert_eq!(seqkit_slice::filter(&scores, |s| *s >= 80), vec![91, 85]);
//! ```

mod query;
mod transform;

pub use query::{
    all, any, at, avg, avg_by, contains, contains_all, contains_any, contains_by, count, find,
    find_o, for_each, for_each_idx, head, head_o, join, max, max_by, min, min_by, try_at,
};
pub use transform::{
    concat, filter, limit, map, replace, replace_all, reverse, shuffle, shuffle_with, skip,
};

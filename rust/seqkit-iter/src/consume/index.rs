//! Positional consumers: materializing a prefix and picking an element by
//! index.

use seqkit_common::{Result, assert::must_not_be_negative, verify_arg};
use seqkit_optional::Optional;

use crate::seq::Seq;

/// Collects up to `n` elements from the front of `seq`.
///
/// `n < 0` collects every element, `n == 0` returns an empty vector without
/// starting a traversal. The traversal stops as soon as `n` elements have
/// been collected, so a positive `n` is safe on an endless sequence.
pub fn pull_out<S: Seq>(seq: S, n: isize) -> Vec<S::Item> {
    if n == 0 {
        return Vec::new();
    }
    if n < 0 {
        let mut out = Vec::new();
        seq.traverse(&mut |value| {
            out.push(value);
            true
        });
        log::trace!("pull_out: collected all {} elements", out.len());
        return out;
    }

    let n = n as usize;
    let mut out = Vec::with_capacity(n.min(1024));
    seq.traverse(&mut |value| {
        out.push(value);
        out.len() < n
    });
    out
}

/// Returns the element at zero-based position `index`, or an empty
/// [`Optional`] if the sequence has fewer elements.
///
/// Only the first `index + 1` elements are traversed.
///
/// # Panics
///
/// Panics if `index` is negative. See [`try_at`] for the non-panicking form.
#[track_caller]
pub fn at<S: Seq>(seq: S, index: isize) -> Optional<S::Item> {
    must_not_be_negative(index);
    let mut prefix = pull_out(seq, index.saturating_add(1));
    if prefix.len() as isize > index {
        prefix.pop().into()
    } else {
        Optional::empty()
    }
}

/// Same as [`at`], but reports a negative `index` as an `InvalidArgument`
/// error.
pub fn try_at<S: Seq>(seq: S, index: isize) -> Result<Optional<S::Item>> {
    verify_arg!(index, index >= 0);
    Ok(at(seq, index))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use seqkit_common::error::ErrorKind;

    use super::*;
    use crate::{
        seq::from_fn,
        source::{from_iter, from_slice},
    };

    #[test]
    fn test_pull_out() {
        let data: Vec<i32> = (0..10).collect();
        assert_eq!(pull_out(from_slice(&data), 3), vec![0, 1, 2]);
        assert_eq!(pull_out(from_slice(&data), -1), data);
        assert_eq!(pull_out(from_slice(&data), 0), Vec::<i32>::new());
        assert_eq!(pull_out(from_slice(&data), 100), data);
    }

    #[test]
    fn test_pull_out_stops_on_endless_seq() {
        let produced = Cell::new(0);
        let naturals = from_fn(|f: &mut dyn FnMut(u64) -> bool| {
            let mut n = 0;
            loop {
                produced.set(produced.get() + 1);
                if !f(n) {
                    return;
                }
                n += 1;
            }
        });
        assert_eq!(pull_out(&naturals, 4), vec![0, 1, 2, 3]);
        assert_eq!(produced.get(), 4);
        assert_eq!(pull_out(&naturals, 0), Vec::<u64>::new());
        assert_eq!(produced.get(), 4);
    }

    #[test]
    fn test_at() {
        let data = ["a", "b", "c"];
        assert_eq!(at(from_slice(&data), 0).must(), "a");
        assert_eq!(at(from_slice(&data), 2).must(), "c");
        assert!(at(from_slice(&data), 3).is_empty());
        assert!(at(from_iter(0..0), 0).is_empty());
    }

    #[test]
    #[should_panic(expected = "number -1[isize] must not be negative")]
    fn test_at_negative_index_panics() {
        at(from_iter(0..10), -1);
    }

    #[test]
    fn test_try_at() {
        assert_eq!(try_at(from_iter(0..10), 7).unwrap().must(), 7);
        assert!(try_at(from_iter(0..10), 10).unwrap().is_empty());
        let err = try_at(from_iter(0..10), -2).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }
}

//! A sequence adapter that transforms every element.

use crate::seq::Seq;

/// A sequence adapter that forwards `f(element)` for every upstream element.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F, U> Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> U,
{
    /// Creates a new `Map` adapter.
    pub fn new(inner: S, f: F) -> Self {
        Map { inner, f }
    }
}

impl<S, F, U> Seq for Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn traverse(&self, f: &mut dyn FnMut(U) -> bool) {
        self.inner.traverse(&mut |value| f((self.f)(value)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::from_slice;

    #[test]
    fn test_map_changes_type() {
        let data = [1, 2, 3];
        let seq = Map::new(from_slice(&data), |v: i32| format!("#{v}"));
        let mut out = Vec::new();
        seq.traverse(&mut |v| {
            out.push(v);
            true
        });
        assert_eq!(out, vec!["#1", "#2", "#3"]);
    }

    #[test]
    fn test_map_early_stop() {
        let data: Vec<u32> = (0..100).collect();
        let seq = Map::new(from_slice(&data), |v: u32| v * 10);
        let mut out = Vec::new();
        seq.traverse(&mut |v| {
            out.push(v);
            v < 20
        });
        assert_eq!(out, vec![0, 10, 20]);
    }
}

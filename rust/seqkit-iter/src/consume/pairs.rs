//! Consumers over pair sequences.

use std::{collections::HashMap, hash::Hash};

use seqkit_optional::Optional;

use crate::seq::Seq2;

/// Returns the number of pairs in `seq`.
pub fn count2<S: Seq2>(seq: S) -> usize {
    let mut n = 0;
    seq.traverse2(&mut |_, _| {
        n += 1;
        true
    });
    n
}

/// Reports whether `predicate` holds for every pair. `true` when empty.
pub fn all2<S: Seq2>(seq: S, mut predicate: impl FnMut(&S::Key, &S::Value) -> bool) -> bool {
    let mut result = true;
    seq.traverse2(&mut |k, v| {
        if !predicate(&k, &v) {
            result = false;
        }
        result
    });
    result
}

/// Reports whether `predicate` holds for at least one pair. `false` when
/// empty.
pub fn any2<S: Seq2>(seq: S, mut predicate: impl FnMut(&S::Key, &S::Value) -> bool) -> bool {
    let mut result = false;
    seq.traverse2(&mut |k, v| {
        if predicate(&k, &v) {
            result = true;
        }
        !result
    });
    result
}

/// Returns the first pair satisfying `predicate`.
pub fn find2<S: Seq2>(
    seq: S,
    mut predicate: impl FnMut(&S::Key, &S::Value) -> bool,
) -> Option<(S::Key, S::Value)> {
    let mut found = None;
    seq.traverse2(&mut |k, v| {
        if predicate(&k, &v) {
            found = Some((k, v));
            return false;
        }
        true
    });
    found
}

/// Like [`find2`], wrapping the result in an [`Optional`].
pub fn find2_o<S: Seq2>(
    seq: S,
    predicate: impl FnMut(&S::Key, &S::Value) -> bool,
) -> Optional<(S::Key, S::Value)> {
    find2(seq, predicate).into()
}

/// Calls `f` for the pairs of `seq`, stopping after the first call that
/// returns `false`.
pub fn for_each2<S: Seq2>(seq: S, mut f: impl FnMut(S::Key, S::Value) -> bool) {
    seq.traverse2(&mut |k, v| f(k, v));
}

/// Collects a pair sequence into a hash map. Later duplicates of a key
/// overwrite earlier ones.
pub fn to_map<S>(seq: S) -> HashMap<S::Key, S::Value>
where
    S: Seq2,
    S::Key: Eq + Hash,
{
    let mut out = HashMap::new();
    seq.traverse2(&mut |k, v| {
        out.insert(k, v);
        true
    });
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{seq::from_fn2, source::from_map};

    fn sample() -> BTreeMap<&'static str, i32> {
        BTreeMap::from([("a", 1), ("b", 2), ("c", 3)])
    }

    #[test]
    fn test_count2() {
        let m = sample();
        assert_eq!(count2(from_map(&m)), 3);
        let empty = BTreeMap::<i32, i32>::new();
        assert_eq!(count2(from_map(&empty)), 0);
    }

    #[test]
    fn test_all2_any2() {
        let m = sample();
        assert!(all2(from_map(&m), |_, v| **v > 0));
        assert!(!all2(from_map(&m), |_, v| **v > 1));
        assert!(any2(from_map(&m), |k, _| **k == "b"));
        assert!(!any2(from_map(&m), |k, _| **k == "z"));

        let empty = BTreeMap::<i32, i32>::new();
        assert!(all2(from_map(&empty), |_, _| false));
        assert!(!any2(from_map(&empty), |_, _| true));
    }

    #[test]
    fn test_find2() {
        let m = sample();
        assert_eq!(find2(from_map(&m), |_, v| **v >= 2), Some((&"b", &2)));
        assert!(find2_o(from_map(&m), |_, v| **v > 3).is_empty());
    }

    #[test]
    fn test_for_each2_and_to_map() {
        let m = sample();
        let mut keys = Vec::new();
        for_each2(from_map(&m), |k, _| {
            keys.push(*k);
            true
        });
        assert_eq!(keys, vec!["a", "b", "c"]);

        let mut visited = 0;
        for_each2(from_map(&m), |_, v| {
            visited += 1;
            *v < 2
        });
        assert_eq!(visited, 2);

        let dup = from_fn2(|f: &mut dyn FnMut(i32, char) -> bool| {
            let _ = f(1, 'a') && f(2, 'b') && f(1, 'c');
        });
        let collected = to_map(&dup);
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[&1], 'c');
        assert_eq!(collected[&2], 'b');
    }
}

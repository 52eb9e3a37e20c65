//! Hash map convenience functions built on `seqkit-iter` pair sequences.
//!
//! Each function wraps the map with [`from_map`] and runs the matching pair
//! consumer. Visit order is the map's iteration order, which for a hash map
//! is unspecified. Functions that return entries return references into the
//! map.
//!
//! Maps with a custom hasher work as is; an `ahash::AHashMap` can be passed
//! through its `HashMap` deref.

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

use seqkit_iter::{Seq2Ext, SeqExt, consume, source::from_map};
use seqkit_optional::Optional;

/// The keys of `map`, in its iteration order.
pub fn keys<K, V, H>(map: &HashMap<K, V, H>) -> Vec<&K> {
    from_map(map).keys().to_vec()
}

/// The values of `map`, in its iteration order.
pub fn values<K, V, H>(map: &HashMap<K, V, H>) -> Vec<&V> {
    from_map(map).values().to_vec()
}

/// Returns every `(key, value)` entry of `map`.
pub fn items<K, V, H>(map: &HashMap<K, V, H>) -> Vec<(&K, &V)> {
    from_map(map).pairs().to_vec()
}

/// Reports whether every entry satisfies `f`. `true` for an empty map.
pub fn all<K, V, H>(map: &HashMap<K, V, H>, mut f: impl FnMut(&K, &V) -> bool) -> bool {
    consume::all2(from_map(map), |k, v| f(*k, *v))
}

/// Reports whether some entry satisfies `f`. `false` for an empty map.
pub fn any<K, V, H>(map: &HashMap<K, V, H>, mut f: impl FnMut(&K, &V) -> bool) -> bool {
    consume::any2(from_map(map), |k, v| f(*k, *v))
}

/// The number of entries in `map`.
pub fn count<K, V, H>(map: &HashMap<K, V, H>) -> usize {
    from_map(map).count2()
}

/// Returns some entry satisfying `f`. Which one is unspecified when several
/// match.
pub fn find<K, V, H>(
    map: &HashMap<K, V, H>,
    mut f: impl FnMut(&K, &V) -> bool,
) -> Option<(&K, &V)> {
    consume::find2(from_map(map), |k, v| f(*k, *v))
}

/// Like [`find`], wrapping the result in an [`Optional`].
pub fn find_o<K, V, H>(
    map: &HashMap<K, V, H>,
    f: impl FnMut(&K, &V) -> bool,
) -> Optional<(&K, &V)> {
    find(map, f).into()
}

/// Visits the entries until `f` returns `false`.
pub fn for_each<K, V, H>(map: &HashMap<K, V, H>, f: impl FnMut(&K, &V) -> bool) {
    consume::for_each2(from_map(map), f)
}

/// Returns a new map holding clones of the entries that satisfy `f`. The
/// result uses a clone of `map`'s hasher.
pub fn filter<K, V, H>(map: &HashMap<K, V, H>, f: impl Fn(&K, &V) -> bool) -> HashMap<K, V, H>
where
    K: Eq + Hash + Clone,
    V: Clone,
    H: BuildHasher + Clone,
{
    let mut out = HashMap::with_hasher(map.hasher().clone());
    from_map(map)
        .filter2(|k, v| f(*k, *v))
        .for_each2(|k, v| {
            out.insert(k.clone(), v.clone());
            true
        });
    out
}

/// Reports whether some entry holds `value`.
pub fn contains_value<K, V: PartialEq, H>(map: &HashMap<K, V, H>, value: &V) -> bool {
    from_map(map).values().contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<String, i32> {
        (1..=5).map(|i| (format!("k{i}"), i * 10)).collect()
    }

    #[test]
    fn test_keys_values_items() {
        let m = sample();
        let mut k = keys(&m);
        k.sort();
        assert_eq!(k, vec!["k1", "k2", "k3", "k4", "k5"]);

        let mut v: Vec<i32> = values(&m).into_iter().copied().collect();
        v.sort();
        assert_eq!(v, vec![10, 20, 30, 40, 50]);

        let mut entries = items(&m);
        entries.sort();
        assert_eq!(entries[0], (&"k1".to_string(), &10));
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_empty_map() {
        let m: HashMap<i32, i32> = HashMap::new();
        assert!(keys(&m).is_empty());
        assert_eq!(count(&m), 0);
        assert!(all(&m, |_, _| false));
        assert!(!any(&m, |_, _| true));
        assert!(find(&m, |_, _| true).is_none());
        assert!(filter(&m, |_, _| true).is_empty());
    }

    #[test]
    fn test_all_any_count() {
        let m = sample();
        assert_eq!(count(&m), 5);
        assert!(all(&m, |k, v| k.starts_with('k') && *v > 0));
        assert!(!all(&m, |_, v| *v > 10));
        assert!(any(&m, |k, _| k == "k3"));
        assert!(!any(&m, |_, v| *v == 15));
    }

    #[test]
    fn test_find() {
        let m = sample();
        assert_eq!(find(&m, |_, v| *v == 30), Some((&"k3".to_string(), &30)));
        assert!(find_o(&m, |k, _| k == "k9").is_empty());
        assert_eq!(find_o(&m, |k, _| k == "k2").must().1, &20);
    }

    #[test]
    fn test_for_each_early_stop() {
        let m = sample();
        let mut visited = 0;
        for_each(&m, |_, _| {
            visited += 1;
            visited < 2
        });
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_filter_and_contains_value() {
        let m = sample();
        let even = filter(&m, |_, v| v % 20 == 0);
        assert_eq!(even.len(), 2);
        assert_eq!(even["k2"], 20);
        assert_eq!(even["k4"], 40);
        assert!(contains_value(&m, &50));
        assert!(!contains_value(&m, &55));
    }

    #[test]
    fn test_custom_hasher() {
        let mut m = ahash::AHashMap::new();
        m.insert(1u32, "one");
        m.insert(2, "two");
        let only_two = filter(&m, |k, _| *k == 2);
        assert_eq!(only_two.len(), 1);
        assert!(contains_value(&m, &"one"));
        assert_eq!(count(&m), 2);
    }
}

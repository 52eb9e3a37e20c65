use seqkit_iter::{
    SeqExt,
    source::{from_iter, from_slice, from_slice_reverse, from_slice_shuffle},
    transform,
};

/// Returns the elements satisfying `f`, in order.
pub fn filter<T: Clone>(input: &[T], f: impl Fn(&T) -> bool) -> Vec<T> {
    from_slice(input).filter(f).to_vec()
}

/// Returns `f(element)` for every element, in order.
pub fn map<T, U>(input: &[T], f: impl Fn(&T) -> U) -> Vec<U> {
    from_iter(input.iter()).map(f).to_vec()
}

/// Returns a copy of `input` with the first `n` occurrences of `from`
/// replaced by `to`. `n < 0` replaces all of them.
pub fn replace<T>(input: &[T], from: T, to: T, n: isize) -> Vec<T>
where
    T: PartialEq + Clone,
{
    from_slice(input).replace(from, to, n).to_vec()
}

/// Copies `input`, rewriting every element equal to `from` into `to`.
pub fn replace_all<T>(input: &[T], from: T, to: T) -> Vec<T>
where
    T: PartialEq + Clone,
{
    from_slice(input).replace_all(from, to).to_vec()
}

/// Copies `input` in reverse order.
pub fn reverse<T: Clone>(input: &[T]) -> Vec<T> {
    from_slice_reverse(input).to_vec()
}

/// Returns the elements of `input` in a uniformly random order.
pub fn shuffle<T: Clone>(input: &[T]) -> Vec<T> {
    shuffle_with(input, &mut fastrand::Rng::new())
}

/// Same as [`shuffle`], drawing the permutation from `rng`.
pub fn shuffle_with<T: Clone>(input: &[T], rng: &mut fastrand::Rng) -> Vec<T> {
    from_slice_shuffle(input, rng).to_vec()
}

/// Returns the elements of all `inputs`, one slice after another.
pub fn concat<T: Clone>(inputs: &[&[T]]) -> Vec<T> {
    transform::concat(inputs.iter().map(|input| from_slice(*input))).to_vec()
}

/// Returns `input` without its first `n` elements.
pub fn skip<T: Clone>(input: &[T], n: isize) -> Vec<T> {
    from_slice(input).skip(n).to_vec()
}

/// Returns at most the first `n` elements of `input`.
pub fn limit<T: Clone>(input: &[T], n: isize) -> Vec<T> {
    from_slice(input).limit(n).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(a: i32, b: i32) -> Vec<i32> {
        (a..b).collect()
    }

    #[test]
    fn test_filter_map() {
        assert_eq!(filter(&range(0, 10), |x| x % 2 == 0), vec![0, 2, 4, 6, 8]);
        assert_eq!(filter(&range(0, 10), |x| *x > 100), Vec::<i32>::new());
        assert_eq!(map(&["a", "bb"], |s| s.len()), vec![1, 2]);
        assert_eq!(map(&range(0, 3), |x| x.to_string()), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_replace() {
        let data = range(0, 10);
        let mut expected = data.clone();
        expected[0] = 10;
        assert_eq!(replace(&data, 0, 10, 1), expected);
        assert_eq!(replace(&data, 0, 10, 0), data);
        assert_eq!(replace(&[1, 1, 1], 1, 2, 2), vec![2, 2, 1]);
        assert_eq!(replace(&[1, 1, 1], 1, 2, -1), vec![2, 2, 2]);
        assert_eq!(replace_all(&["a", "b", "a"], "a", "c"), vec!["c", "b", "c"]);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(&range(0, 5)), vec![4, 3, 2, 1, 0]);
        assert_eq!(reverse::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_shuffle() {
        let data = range(0, 50);
        let mut shuffled = shuffle(&data);
        shuffled.sort_unstable();
        assert_eq!(shuffled, data);

        let a = shuffle_with(&data, &mut fastrand::Rng::with_seed(5));
        let b = shuffle_with(&data, &mut fastrand::Rng::with_seed(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_concat_skip_limit() {
        let a = range(0, 5);
        let b = range(5, 10);
        assert_eq!(concat(&[a.as_slice(), b.as_slice()]), range(0, 10));
        assert_eq!(concat::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(limit(&range(0, 30), 10), range(0, 10));
        assert_eq!(skip(&range(0, 30), 10), range(10, 30));
        assert_eq!(skip(&range(0, 30), -3), range(0, 30));
        assert_eq!(limit(&range(0, 30), 0), Vec::<i32>::new());
    }
}

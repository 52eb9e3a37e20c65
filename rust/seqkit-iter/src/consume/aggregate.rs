//! Consumers that reduce a whole sequence to a single value.

use num_traits::AsPrimitive;
use seqkit_optional::Optional;

use crate::seq::Seq;

/// Returns the number of elements in `seq`. `0` for an empty sequence.
pub fn count<S: Seq>(seq: S) -> usize {
    let mut n = 0;
    seq.traverse(&mut |_| {
        n += 1;
        true
    });
    n
}

/// Returns the arithmetic mean of the elements of `seq`.
///
/// Returns `0.0` (not NaN) for an empty sequence. Elements are accumulated
/// as `f64`.
pub fn avg<S>(seq: S) -> f64
where
    S: Seq,
    S::Item: AsPrimitive<f64>,
{
    avg_by(seq, |value| value)
}

/// Returns the arithmetic mean of `f(element)` over `seq`.
///
/// Returns `0.0` for an empty sequence.
pub fn avg_by<S, N>(seq: S, mut f: impl FnMut(S::Item) -> N) -> f64
where
    S: Seq,
    N: AsPrimitive<f64>,
{
    let mut sum = 0f64;
    let mut n = 0usize;
    seq.traverse(&mut |value| {
        sum += f(value).as_();
        n += 1;
        true
    });
    if n == 0 { 0f64 } else { sum / n as f64 }
}

/// Returns the smallest element of `seq`, or an empty [`Optional`] if the
/// sequence is empty. Among equal minima the first one encountered wins.
pub fn min<S>(seq: S) -> Optional<S::Item>
where
    S: Seq,
    S::Item: PartialOrd,
{
    min_by(seq, |a, b| a < b)
}

/// Returns the largest element of `seq`, or an empty [`Optional`] if the
/// sequence is empty. Among equal maxima the first one encountered wins.
pub fn max<S>(seq: S) -> Optional<S::Item>
where
    S: Seq,
    S::Item: PartialOrd,
{
    max_by(seq, |a, b| a < b)
}

/// Returns the element `m` of `seq` such that no later element `v` satisfies
/// `less(v, m)`.
///
/// The comparison direction is entirely up to `less`; with a strict
/// less-than, the first-encountered minimum wins ties.
pub fn min_by<S: Seq>(
    seq: S,
    mut less: impl FnMut(&S::Item, &S::Item) -> bool,
) -> Optional<S::Item> {
    let mut best: Option<S::Item> = None;
    seq.traverse(&mut |value| {
        let replace = match &best {
            Some(current) => less(&value, current),
            None => true,
        };
        if replace {
            best = Some(value);
        }
        true
    });
    best.into()
}

/// Returns the element `m` of `seq` such that no later element `v` satisfies
/// `less(m, v)`.
///
/// With a strict less-than, the first-encountered maximum wins ties.
pub fn max_by<S: Seq>(
    seq: S,
    mut less: impl FnMut(&S::Item, &S::Item) -> bool,
) -> Optional<S::Item> {
    let mut best: Option<S::Item> = None;
    seq.traverse(&mut |value| {
        let replace = match &best {
            Some(current) => less(current, &value),
            None => true,
        };
        if replace {
            best = Some(value);
        }
        true
    });
    best.into()
}

/// Concatenates the string-like elements of `seq`, separated by `sep`.
///
/// Returns an empty string for an empty sequence; the separator never
/// appears at either end.
pub fn join<S>(seq: S, sep: &str) -> String
where
    S: Seq,
    S::Item: AsRef<str>,
{
    let mut out = String::new();
    let mut first = true;
    seq.traverse(&mut |value| {
        if !first {
            out.push_str(sep);
        }
        first = false;
        out.push_str(value.as_ref());
        true
    });
    out
}

/// Collects all elements of `seq` in encounter order.
///
/// Returns an empty vector for an empty sequence.
pub fn to_vec<S: Seq>(seq: S) -> Vec<S::Item> {
    let mut out = Vec::new();
    seq.traverse(&mut |value| {
        out.push(value);
        true
    });
    out
}

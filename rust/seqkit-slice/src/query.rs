use std::hash::Hash;

use num_traits::AsPrimitive;
use seqkit_common::Result;
use seqkit_iter::{
    consume,
    source::{from_iter, from_slice},
};
use seqkit_optional::Optional;

/// Reports whether every element satisfies `f`. `true` for an empty slice.
pub fn all<T>(input: &[T], mut f: impl FnMut(&T) -> bool) -> bool {
    consume::all(from_iter(input.iter()), |v| f(*v))
}

/// Reports whether at least one element satisfies `f`. `false` for an empty
/// slice.
pub fn any<T>(input: &[T], mut f: impl FnMut(&T) -> bool) -> bool {
    consume::any(from_iter(input.iter()), |v| f(*v))
}

/// Returns the mean of the elements, `0.0` for an empty slice.
pub fn avg<T>(input: &[T]) -> f64
where
    T: AsPrimitive<f64>,
{
    consume::avg(from_slice(input))
}

/// Returns the mean of `f(element)`, `0.0` for an empty slice.
pub fn avg_by<T, N>(input: &[T], mut f: impl FnMut(&T) -> N) -> f64
where
    N: AsPrimitive<f64>,
{
    consume::avg_by(from_iter(input.iter()), |v| f(v))
}

/// Reports whether `input` holds an element equal to `value`.
pub fn contains<T: PartialEq>(input: &[T], value: &T) -> bool {
    consume::contains(from_iter(input.iter()), &value)
}

/// Reports whether any element of `input` satisfies `f`.
pub fn contains_by<T>(input: &[T], mut f: impl FnMut(&T) -> bool) -> bool {
    consume::contains_by(from_iter(input.iter()), |v| f(*v))
}

/// Reports whether the slice holds at least one of `values`. `false` when
/// `values` is empty.
pub fn contains_any<T: Eq + Hash>(input: &[T], values: &[T]) -> bool {
    let values: Vec<&T> = values.iter().collect();
    consume::contains_any(from_iter(input.iter()), values.as_slice())
}

/// Reports whether the slice holds every one of `values`, ignoring
/// multiplicity. `true` when `values` is empty.
pub fn contains_all<T: Eq + Hash>(input: &[T], values: &[T]) -> bool {
    let values: Vec<&T> = values.iter().collect();
    consume::contains_all(from_iter(input.iter()), values.as_slice())
}

/// The number of elements in `input`.
pub fn count<T>(input: &[T]) -> usize {
    consume::count(from_iter(input.iter()))
}

/// Returns the first element satisfying `f`.
pub fn find<T>(input: &[T], mut f: impl FnMut(&T) -> bool) -> Option<&T> {
    consume::find(from_iter(input.iter()), |v| f(*v))
}

/// Like [`find`], wrapping the result in an [`Optional`].
pub fn find_o<T>(input: &[T], mut f: impl FnMut(&T) -> bool) -> Optional<&T> {
    consume::find_o(from_iter(input.iter()), |v| f(*v))
}

/// Visits the elements in order until `f` returns `false`.
pub fn for_each<T>(input: &[T], f: impl FnMut(&T) -> bool) {
    consume::for_each(from_iter(input.iter()), f)
}

/// Visits `(index, element)` in order until `f` returns `false`.
pub fn for_each_idx<T>(input: &[T], f: impl FnMut(usize, &T) -> bool) {
    consume::for_each_idx(from_iter(input.iter()), f)
}

/// The first element of `input`, if any.
pub fn head<T>(input: &[T]) -> Option<&T> {
    consume::head(from_iter(input.iter()))
}

/// Like [`head`], wrapping the result in an [`Optional`].
pub fn head_o<T>(input: &[T]) -> Optional<&T> {
    consume::head_o(from_iter(input.iter()))
}

/// Joins string-like elements with `sep`. `""` for an empty slice.
pub fn join<T: AsRef<str>>(input: &[T], sep: &str) -> String {
    consume::join(from_iter(input.iter()), sep)
}

/// Returns the smallest element, or an empty [`Optional`] for an empty slice.
pub fn min<T: PartialOrd>(input: &[T]) -> Optional<&T> {
    consume::min(from_iter(input.iter()))
}

/// Returns the largest element, or an empty [`Optional`] for an empty slice.
pub fn max<T: PartialOrd>(input: &[T]) -> Optional<&T> {
    consume::max(from_iter(input.iter()))
}

/// The smallest element under `less`. Ties keep the first one.
pub fn min_by<T>(input: &[T], mut less: impl FnMut(&T, &T) -> bool) -> Optional<&T> {
    consume::min_by(from_iter(input.iter()), |a, b| less(*a, *b))
}

/// The largest element under `less`. Ties keep the first one.
pub fn max_by<T>(input: &[T], mut less: impl FnMut(&T, &T) -> bool) -> Optional<&T> {
    consume::max_by(from_iter(input.iter()), |a, b| less(*a, *b))
}

/// Returns the element at `index`, or an empty [`Optional`] past the end.
///
/// # Panics
///
/// Panics if `index` is negative.
#[track_caller]
pub fn at<T>(input: &[T], index: isize) -> Optional<&T> {
    consume::at(from_iter(input.iter()), index)
}

/// Like [`at`], reporting a negative `index` as an error instead of
/// panicking.
pub fn try_at<T>(input: &[T], index: isize) -> Result<Optional<&T>> {
    consume::try_at(from_iter(input.iter()), index)
}

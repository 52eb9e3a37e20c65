//! Panic-class checks for caller mistakes.
//!
//! These guard arguments whose invalid values indicate a bug in the calling
//! code (for example, a negative element index). They never return an error:
//! the current operation is aborted with a panic.

use std::fmt::Display;

use num_traits::Zero;

/// Panics if `n` is negative.
///
/// # Panics
///
/// Panics with `number {n}[{type}] must not be negative` when `n < 0`.
#[inline]
#[track_caller]
pub fn must_not_be_negative<T>(n: T)
where
    T: PartialOrd + Zero + Display,
{
    if n < T::zero() {
        negative_number(n);
    }
}

#[cold]
#[track_caller]
fn negative_number<T: Display>(n: T) -> ! {
    panic!(
        "number {}[{}] must not be negative",
        n,
        std::any::type_name::<T>()
    )
}

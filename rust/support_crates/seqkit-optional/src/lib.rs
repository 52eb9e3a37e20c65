//! A value-or-absent result wrapper.
//!
//! [`Optional<T>`] is what the sequence consumers return when a result may
//! legitimately be missing (the minimum of an empty sequence, the first
//! element matching a predicate, the element at an index past the end).
//! Absence is ordinary data here, never an error: the caller either checks
//! [`Optional::is_present`], unwraps with a fallback, or unwraps with
//! [`Optional::must`], which treats absence as a bug in the calling code.
//!
//! `Optional<T>` converts freely to and from [`Option<T>`].
//!
//! # Examples
//!
//! ```
//! use seqkit_optional::Optional;
//!
//! let found = Optional::from_value(42);
//! assert!(found.is_present());
//! assert_eq!(found.must(), 42);
//!
//! let missing = Optional::<i32>::empty();
//! assert_eq!(missing.value_or(7), 7);
//! assert_eq!(missing.value_or_default(), 0);
//! ```

use seqkit_common::{Result, error::Error};

/// A value of type `T` paired with a presence flag.
///
/// When the flag is off the wrapped value is not meaningful and is never
/// handed out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// Wraps a present value.
    #[inline]
    pub fn from_value(value: T) -> Optional<T> {
        Optional { value: Some(value) }
    }

    /// Wraps `value` with an explicit presence flag, as returned by the
    /// `(value, found)` style lookups. `value` is dropped when `present` is
    /// false.
    #[inline]
    pub fn from_value2(value: T, present: bool) -> Optional<T> {
        if present {
            Optional::from_value(value)
        } else {
            Optional::empty()
        }
    }

    /// An absent value.
    #[inline]
    pub const fn empty() -> Optional<T> {
        Optional { value: None }
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns a reference to the value if present.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns a mutable reference to the value if present.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent. Use [`Optional::try_must`] or one of the
    /// `value_or*` accessors when absence is expected.
    #[inline]
    #[track_caller]
    pub fn must(self) -> T {
        match self.value {
            Some(value) => value,
            None => not_present::<T>(),
        }
    }

    /// Returns the value, or a `ValueNotPresent` error if absent.
    pub fn try_must(self) -> Result<T> {
        self.value.ok_or_else(Error::value_not_present::<T>)
    }

    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    #[inline]
    pub fn value_or_else(self, f: impl FnOnce() -> T) -> T {
        self.value.unwrap_or_else(f)
    }

    /// Returns the value if present, or the zero value of `T`.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// Maps a present value, keeping absence as is.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        Optional {
            value: self.value.map(f),
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

#[cold]
#[track_caller]
fn not_present<T>() -> ! {
    panic!(
        "Optional<{}> has no valid value",
        std::any::type_name::<T>()
    )
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.value
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Optional(<empty>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        let o = Optional::from_value("a".to_string());
        assert!(o.is_present());
        assert!(!o.is_empty());
        assert_eq!(o.as_ref().map(|s| s.as_str()), Some("a"));
        assert_eq!(o.must(), "a");
    }

    #[test]
    fn test_from_value2() {
        assert_eq!(Optional::from_value2(5, true).must(), 5);
        assert!(!Optional::from_value2(5, false).is_present());
    }

    #[test]
    fn test_empty_fallbacks() {
        let o = Optional::<i32>::empty();
        assert!(o.is_empty());
        assert_eq!(o.as_ref(), None);
        assert_eq!(o.value_or(3), 3);
        assert_eq!(o.value_or_else(|| 4), 4);
        assert_eq!(o.value_or_default(), 0);
        assert_eq!(Optional::<String>::default().value_or_default(), "");
    }

    #[test]
    fn test_present_ignores_fallbacks() {
        let o = Optional::from_value(9);
        assert_eq!(o.value_or(3), 9);
        assert_eq!(o.value_or_else(|| 4), 9);
        assert_eq!(o.value_or_default(), 9);
    }

    #[test]
    #[should_panic(expected = "Optional<i32> has no valid value")]
    fn test_must_on_empty_panics() {
        Optional::<i32>::empty().must();
    }

    #[test]
    fn test_try_must() {
        assert_eq!(Optional::from_value(1u8).try_must().unwrap(), 1);
        let err = Optional::<u8>::empty().try_must().unwrap_err();
        assert_eq!(err.to_string(), "Optional<u8> has no valid value");
    }

    #[test]
    fn test_as_mut_and_map() {
        let mut o = Optional::from_value(10);
        if let Some(v) = o.as_mut() {
            *v += 1;
        }
        assert_eq!(o.map(|v| v * 2).must(), 22);
        assert!(Optional::<i32>::empty().map(|v| v * 2).is_empty());
    }

    #[test]
    fn test_option_conversions() {
        let o: Optional<i32> = Some(1).into();
        assert_eq!(Option::from(o), Some(1));
        let o: Optional<i32> = None.into();
        assert_eq!(o.into_option(), None);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Optional::from_value(1)), "Optional(1)");
        assert_eq!(format!("{:?}", Optional::<i32>::empty()), "Optional(<empty>)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Optional::from_value(3)).unwrap();
        assert_eq!(json, "3");
        let json = serde_json::to_string(&Optional::<i32>::empty()).unwrap();
        assert_eq!(json, "null");
        let o: Optional<i32> = serde_json::from_str("5").unwrap();
        assert_eq!(o.must(), 5);
        let o: Optional<i32> = serde_json::from_str("null").unwrap();
        assert!(o.is_empty());
    }
}

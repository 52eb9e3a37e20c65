pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns `Err(InvalidArgument)` from the enclosing function when `$expr`
/// evaluates to `false`.
///
/// The enclosing function must return `seqkit_common::Result<_>`.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::Error::invalid_arg(name, condition))
}

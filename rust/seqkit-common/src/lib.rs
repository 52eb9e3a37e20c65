//! Core definitions relied upon by all seqkit-* crates: the error type,
//! argument verification and panic-class usage checks.

pub mod assert;
pub mod error;
pub mod result;

pub use result::Result;

//! Error types for maktab-rs.
//!
//! A single `thiserror`-derived enum covers every failure the workspace
//! raises, with the `ensure!` and `fail!` convenience macros for guard
//! clauses in fallible constructors.

use thiserror::Error;

/// The top-level error type used throughout maktab-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (invalid components, out-of-range arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// A string could not be parsed into the requested type.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout maktab-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mk_core::ensure;
/// fn month_number(m: u8) -> mk_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month_number(7).is_ok());
/// assert!(month_number(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` unconditionally.
///
/// # Example
/// ```
/// use mk_core::fail;
/// fn unsupported(kind: &str) -> mk_core::errors::Result<()> {
///     fail!("unsupported roster kind: {kind}");
/// }
/// assert!(unsupported("legacy").is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(
            format!($($msg)*)
        ))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::Date("day 32 out of range".into());
        assert_eq!(e.to_string(), "date error: day 32 out of range");
        let e = Error::Parse("not an ISO date: 'x'".into());
        assert_eq!(e.to_string(), "parse error: not an ISO date: 'x'");
    }

    #[test]
    fn ensure_passes_and_fails() {
        fn guarded(x: i32) -> Result<i32> {
            ensure!(x >= 0, "x must be non-negative, got {x}");
            Ok(x)
        }
        assert_eq!(guarded(3), Ok(3));
        assert_eq!(
            guarded(-1),
            Err(Error::Precondition("x must be non-negative, got -1".into()))
        );
    }
}

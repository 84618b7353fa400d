//! Result type definition and logging fallbacks.
//!
//! The page must always render, so most callers end a fallible chain by
//! logging the error and falling back to a safe value instead of bubbling it
//! further. [`ResultExt::or_else_logged`] makes that explicit without
//! unwrap/expect/panic.

use crate::error::Error;

/// The standard Result type for folio operations.
///
/// # Examples
///
/// ```
/// use folio_core::{FolioConfig, Result};
///
/// fn load(text: &str) -> Result<FolioConfig> {
///     let config = FolioConfig::from_toml_str(text)?;
///     Ok(config)
/// }
///
/// assert!(load("[reveal]\nthreshold = 0.25").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing a logged fallback for Results.
pub trait ResultExt<T> {
    /// Get the value or compute a fallback from the error, logging it first.
    fn or_else_logged<F: FnOnce(&Error) -> T>(self, fallback: F) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_else_logged<F: FnOnce(&Error) -> T>(self, fallback: F) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                if e.is_fail_open() {
                    tracing::warn!(error = %e, "failing open");
                } else {
                    tracing::error!(error = %e, "operation failed, using fallback");
                }
                fallback(&e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_else_logged_keeps_ok_value() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.or_else_logged(|_| 0), 42);
    }

    #[test]
    fn test_or_else_logged_falls_back_on_hard_error() {
        let err: Result<i32> = Err(Error::InvalidThreshold { value: 7.0 });
        assert_eq!(err.or_else_logged(|_| 99), 99);
    }

    #[test]
    fn test_or_else_logged_sees_error() {
        let err: Result<bool> = Err(Error::observer_unavailable("no observer"));
        let failed_open = err.or_else_logged(Error::is_fail_open);
        assert!(failed_open);
    }
}

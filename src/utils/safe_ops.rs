//! Presence-aware helpers over `Option`.
//!
//! Each helper runs the caller's closure only when the value is present and
//! otherwise returns a fixed fallback (`false` or the supplied default).

use tracing::trace;

/// Evaluates `predicate` against a present value, or returns `false` when absent.
///
/// The predicate is never called with an absent value. Panics raised by the
/// predicate reach the caller unchanged.
pub fn safe_test<T, F>(value: Option<T>, predicate: F) -> bool
where
    F: FnOnce(T) -> bool,
{
    match value {
        Some(v) => {
            trace!("safe_test: value present, evaluating predicate");
            predicate(v)
        }
        None => {
            trace!("safe_test: value absent, returning false");
            false
        }
    }
}

/// Applies `transform` to a present value, or returns `default_value` when absent.
pub fn safe_op<T, R, F>(value: Option<T>, default_value: R, transform: F) -> R
where
    F: FnOnce(T) -> R,
{
    match value {
        Some(v) => {
            trace!("safe_op: value present, applying transform");
            transform(v)
        }
        None => {
            trace!("safe_op: value absent, returning default");
            default_value
        }
    }
}

/// Fallible form of [`safe_test`]. The predicate's error is returned as is.
pub fn try_safe_test<T, E, F>(value: Option<T>, predicate: F) -> Result<bool, E>
where
    F: FnOnce(T) -> Result<bool, E>,
{
    match value {
        Some(v) => {
            trace!("try_safe_test: value present, evaluating predicate");
            predicate(v)
        }
        None => {
            trace!("try_safe_test: value absent, returning false");
            Ok(false)
        }
    }
}

/// Fallible form of [`safe_op`]. The transform's error is returned as is.
pub fn try_safe_op<T, R, E, F>(value: Option<T>, default_value: R, transform: F) -> Result<R, E>
where
    F: FnOnce(T) -> Result<R, E>,
{
    match value {
        Some(v) => {
            trace!("try_safe_op: value present, applying transform");
            transform(v)
        }
        None => {
            trace!("try_safe_op: value absent, returning default");
            Ok(default_value)
        }
    }
}

/// Method-call form of the helpers in this module.
pub trait SafeOption<T> {
    /// See [`safe_test`].
    fn safe_test<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool;

    /// See [`safe_op`].
    fn safe_op<R, F>(self, default_value: R, transform: F) -> R
    where
        F: FnOnce(T) -> R;

    /// See [`try_safe_test`].
    fn try_safe_test<E, F>(self, predicate: F) -> Result<bool, E>
    where
        F: FnOnce(T) -> Result<bool, E>;

    /// See [`try_safe_op`].
    fn try_safe_op<R, E, F>(self, default_value: R, transform: F) -> Result<R, E>
    where
        F: FnOnce(T) -> Result<R, E>;
}

impl<T> SafeOption<T> for Option<T> {
    fn safe_test<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        safe_test(self, predicate)
    }

    fn safe_op<R, F>(self, default_value: R, transform: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        safe_op(self, default_value, transform)
    }

    fn try_safe_test<E, F>(self, predicate: F) -> Result<bool, E>
    where
        F: FnOnce(T) -> Result<bool, E>,
    {
        try_safe_test(self, predicate)
    }

    fn try_safe_op<R, E, F>(self, default_value: R, transform: F) -> Result<R, E>
    where
        F: FnOnce(T) -> Result<R, E>,
    {
        try_safe_op(self, default_value, transform)
    }
}

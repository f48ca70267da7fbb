//! The boundary between fallible code and the outcome world.

use super::Outcome;
use crate::{BoxError, Failure};

impl<T> Outcome<T> {
    /// Runs `computation` and records how it finished.
    ///
    /// `Ok(value)` becomes [`Outcome::ok`]; `Err(error)` becomes a failure
    /// wrapping `error` without extra context, so its own source chain
    /// drives [`Failure::describe`].
    ///
    /// Only errors the computation returns are captured. Panics are treated
    /// as programmer errors and keep unwinding; opt into catching them with
    /// `Outcome::capture_unwind` (feature `unwind`).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let parsed = Outcome::capture(|| "42".parse::<u32>());
    /// assert_eq!(parsed, Outcome::ok(42));
    ///
    /// let failed = Outcome::capture(|| "forty-two".parse::<u32>());
    /// assert!(failed.is_error());
    /// ```
    pub fn capture<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        match computation() {
            Ok(value) => Self::ok(value),
            Err(error) => {
                let failure = Failure::wrap(error);
                tracing::debug!(failure = %failure, "captured failed computation");
                Self::from_failure(failure)
            }
        }
    }
}

//! Transformations and side-effect hooks.
//!
//! Callbacks run on the caller's thread and are not sandboxed: a panic in a
//! callback unwinds through these methods untouched.

use super::Outcome;
use crate::Failure;

impl<T> Outcome<T> {
    /// Applies `f` to the value of a successful outcome.
    ///
    /// A failed outcome is returned as-is, carrying the same failure.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            inner: self.inner.map(f),
        }
    }

    /// Chains a fallible step after a successful outcome.
    ///
    /// The outcome returned by `f` is returned unchanged, including when it
    /// is itself a failure. A failed receiver short-circuits without calling
    /// `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let halve = |n: u32| {
    ///     if n % 2 == 0 { Outcome::ok(n / 2) } else { Outcome::error("odd") }
    /// };
    /// assert_eq!(Outcome::ok(8).flat_map(halve).flat_map(halve), Outcome::ok(2));
    /// assert!(Outcome::ok(6).flat_map(halve).flat_map(halve).is_error());
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.inner {
            Ok(value) => f(value),
            Err(failure) => Outcome::from_failure(failure),
        }
    }

    /// Calls `consumer` with the value when the outcome is successful.
    pub fn if_ok<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self.inner {
            consumer(value);
        }
    }

    /// Calls `consumer` with the failure when the outcome failed.
    pub fn if_error<F>(&self, consumer: F)
    where
        F: FnOnce(&Failure),
    {
        if let Err(failure) = &self.inner {
            consumer(failure);
        }
    }

    /// Runs [`Outcome::if_ok`] and then [`Outcome::if_error`]; exactly one
    /// of the consumers is called.
    pub fn apply<F, G>(&self, on_ok: F, on_error: G)
    where
        F: FnOnce(&T),
        G: FnOnce(&Failure),
    {
        self.if_ok(on_ok);
        self.if_error(on_error);
    }
}

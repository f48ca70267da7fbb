//! Terminal accessors that leave the outcome world.

use super::Outcome;
use crate::{Failure, NoValuePresent, RaisedFault};

impl<T> Outcome<T> {
    /// Borrows the held value.
    ///
    /// Meant for call sites that already checked [`Outcome::is_ok`].
    ///
    /// # Errors
    ///
    /// Returns [`NoValuePresent`] when the outcome holds a failure.
    pub const fn get(&self) -> Result<&T, NoValuePresent> {
        match &self.inner {
            Ok(value) => Ok(value),
            Err(_) => Err(NoValuePresent),
        }
    }

    /// Takes the held value.
    ///
    /// # Errors
    ///
    /// Returns [`NoValuePresent`] when the outcome holds a failure.
    pub fn into_value(self) -> Result<T, NoValuePresent> {
        self.inner.map_err(|_| NoValuePresent)
    }

    /// Returns the value, or `fallback` when the outcome failed.
    #[doc(alias = "unwrap_or")]
    pub fn or_else(self, fallback: T) -> T {
        self.inner.unwrap_or(fallback)
    }

    /// Returns the value, or the result of `supplier` when the outcome
    /// failed. `supplier` is not called for a successful outcome.
    #[doc(alias = "unwrap_or_else")]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.inner {
            Ok(value) => value,
            Err(_) => supplier(),
        }
    }

    /// Returns the value, or the error `mapper` builds from the failure.
    ///
    /// # Errors
    ///
    /// Returns `mapper(failure)` when the outcome holds a failure.
    pub fn or_else_throw<X, F>(self, mapper: F) -> Result<T, X>
    where
        F: FnOnce(Failure) -> X,
    {
        self.inner.map_err(mapper)
    }

    /// Returns the value, or a [`RaisedFault`] translated from the failure.
    ///
    /// The fault's `source()` chain mirrors the failure chain; see
    /// [`Failure::to_raised_fault`].
    ///
    /// # Errors
    ///
    /// Returns the translated [`RaisedFault`] when the outcome holds a
    /// failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Failure, Outcome, RaisedFault};
    ///
    /// fn load() -> Result<u16, RaisedFault> {
    ///     let port = Outcome::nested("a", Failure::simple("b")).or_else_propagate()?;
    ///     Ok(port)
    /// }
    ///
    /// let fault = load().err();
    /// assert_eq!(fault.as_ref().map(RaisedFault::message), Some("a"));
    /// ```
    pub fn or_else_propagate(self) -> Result<T, RaisedFault> {
        self.inner.map_err(|failure| {
            tracing::debug!(failure = %failure, "propagating failure as raised fault");
            failure.to_raised_fault()
        })
    }
}

//! The success-or-failure carrier.
//!
//! [`Outcome`] holds exactly one of a value or a [`Failure`]. It is built
//! through the constructors below, composed with [`Outcome::map`] and
//! [`Outcome::flat_map`], and consumed through one of the terminal
//! accessors in `extract`.

mod capture;
mod combinators;
mod extract;

use crate::{BoxError, Failure};

/// The result of a computation that either produced a value or failed.
///
/// The representation is private, so an outcome holding neither or both
/// cannot be built:
///
/// ```compile_fail
/// let neither = outcome::Outcome::<u8> { inner: Ok(1) };
/// ```
///
/// Transformations consume the receiver and return a new outcome.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let port = Outcome::ok("8080")
///     .flat_map(|raw| match raw.parse::<u16>() {
///         Ok(port) => Outcome::ok(port),
///         Err(err) => Outcome::from_error_with("invalid port", err),
///     })
///     .map(|port| port + 1);
/// assert_eq!(port.or_else(80), 8081);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome may hold a failure that should be handled"]
pub struct Outcome<T> {
    inner: Result<T, Failure>,
}

impl Outcome<()> {
    /// The shared zero-payload success, for operations whose only result is
    /// that no failure occurred.
    pub const UNIT: Self = Self::ok(());

    /// Returns [`Outcome::UNIT`].
    pub const fn unit() -> Self {
        Self::UNIT
    }
}

impl<T> Outcome<T> {
    /// Creates a successful outcome holding `value`.
    pub const fn ok(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// Creates a failed outcome described by `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self::from_failure(Failure::simple(message))
    }

    /// Creates a failed outcome wrapping a native error.
    pub fn from_error<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::from_failure(Failure::wrap(error))
    }

    /// Creates a failed outcome wrapping a native error annotated with
    /// `message`.
    pub fn from_error_with<E>(message: impl Into<String>, error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::from_failure(Failure::wrap_with(message, error))
    }

    /// Creates a failed outcome that adds `message` as context on top of
    /// `cause`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Failure, Outcome};
    ///
    /// let outcome: Outcome<u8> = Outcome::nested("loading profile", Failure::simple("timeout"));
    /// assert_eq!(outcome.failure().map(Failure::describe).as_deref(), Some("loading profile - timeout"));
    /// ```
    pub fn nested(message: impl Into<String>, cause: Failure) -> Self {
        Self::from_failure(Failure::nest(message, cause))
    }

    /// Creates a failed outcome from a prebuilt failure.
    pub const fn from_failure(failure: Failure) -> Self {
        Self { inner: Err(failure) }
    }

    /// Returns `true` when the outcome holds a value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    /// Returns `true` when the outcome holds a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.inner.is_err()
    }

    /// Borrows the value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match &self.inner {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    /// Borrows the failure, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match &self.inner {
            Ok(_) => None,
            Err(failure) => Some(failure),
        }
    }

    /// Takes the failure, discarding any value.
    #[must_use]
    pub fn into_failure(self) -> Option<Failure> {
        self.inner.err()
    }

    /// Converts into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the held [`Failure`] when the outcome is not successful.
    pub fn into_result(self) -> Result<T, Failure> {
        self.inner
    }
}

impl<T> From<Result<T, Failure>> for Outcome<T> {
    fn from(inner: Result<T, Failure>) -> Self {
        Self { inner }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.inner
    }
}

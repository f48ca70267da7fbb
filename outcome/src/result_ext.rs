//! Extensions for moving between `Result` and [`Outcome`] concisely.
//!
//! These helpers replace repetitive `match` blocks at the edges of fallible
//! code:
//!
//! - Use [`OutcomeResultExt::into_outcome`] to wrap any `Result<T, E>` whose
//!   error converts into a boxed error (e.g., `std::io::Error`).
//! - Use [`OutcomeResultExt::into_outcome_with`] to annotate that error.
//! - Use [`OutcomeContextExt::context`] to add a layer of context to an
//!   outcome that already failed.
//!
//! # Examples
//!
//! ```
//! use outcome::{Outcome, OutcomeContextExt, OutcomeResultExt};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().into_outcome_with("invalid port")
//! }
//!
//! let outcome = parse_port("http").context("reading listener settings");
//! assert_eq!(
//!     outcome.failure().map(ToString::to_string).as_deref(),
//!     Some("reading listener settings - invalid port - invalid digit found in string"),
//! );
//! ```

use crate::{BoxError, Failure, Outcome};

/// Conversion of a standard `Result` into an [`Outcome`].
pub trait OutcomeResultExt<T, E> {
    /// Wraps the error, if any, in a [`Failure::Wrapped`] with no extra
    /// message.
    fn into_outcome(self) -> Outcome<T>;

    /// Wraps the error, if any, in a [`Failure::Wrapped`] annotated with
    /// `message`.
    fn into_outcome_with(self, message: impl Into<String>) -> Outcome<T>;
}

impl<T, E> OutcomeResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::from_error(error),
        }
    }

    fn into_outcome_with(self, message: impl Into<String>) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::from_error_with(message, error),
        }
    }
}

/// Context layering for outcomes that may already hold a failure.
pub trait OutcomeContextExt<T> {
    /// Nests the failure, if any, beneath `message`. Successful outcomes
    /// pass through unchanged.
    fn context(self, message: impl Into<String>) -> Outcome<T>;

    /// Like [`OutcomeContextExt::context`], building the message only when
    /// there is a failure to annotate.
    fn with_context<F>(self, message: F) -> Outcome<T>
    where
        F: FnOnce() -> String;
}

impl<T> OutcomeContextExt<T> for Outcome<T> {
    fn context(self, message: impl Into<String>) -> Outcome<T> {
        self.with_context(|| message.into())
    }

    fn with_context<F>(self, message: F) -> Outcome<T>
    where
        F: FnOnce() -> String,
    {
        match self.into_result() {
            Ok(value) => Outcome::ok(value),
            Err(cause) => Outcome::from_failure(Failure::nest(message(), cause)),
        }
    }
}

//! Factories for the failure family.

use std::sync::Arc;

use super::{BoxError, Failure, FailureDescriptor, NestedCause, into_native};
use crate::NoValuePresent;

impl Failure {
    /// Builds a failure described by `message` alone.
    #[must_use]
    pub fn simple(message: impl Into<String>) -> Self {
        Self::Simple {
            message: message.into(),
        }
    }

    /// Wraps a native error without any extra context.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Failure;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    /// assert_eq!(Failure::wrap(io).describe(), "missing");
    /// ```
    #[must_use]
    pub fn wrap<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Wrapped {
            message: None,
            native: into_native(error),
        }
    }

    /// Wraps a native error, placing `message` in front of its root cause.
    #[must_use]
    pub fn wrap_with<E>(message: impl Into<String>, error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Wrapped {
            message: Some(message.into()),
            native: into_native(error),
        }
    }

    /// Adds `message` as context on top of an earlier failure.
    #[must_use]
    pub fn nest(message: impl Into<String>, cause: Self) -> Self {
        Self::Nested {
            message: message.into(),
            cause: NestedCause::new(cause),
        }
    }

    /// Builds a failure from a caller-defined descriptor.
    #[must_use]
    pub fn custom<D>(descriptor: D) -> Self
    where
        D: FailureDescriptor + 'static,
    {
        Self::Custom(Arc::new(descriptor))
    }
}

impl From<NoValuePresent> for Failure {
    fn from(error: NoValuePresent) -> Self {
        Self::wrap(error)
    }
}

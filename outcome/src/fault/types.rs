//! The raised-fault error type.

use std::error::Error;
use std::fmt;
use std::iter::FusedIterator;

use crate::NativeError;

/// An error carrying a message and, optionally, the fault or native error
/// that caused it.
///
/// # Examples
///
/// ```
/// use std::error::Error as _;
/// use outcome::{Failure, RaisedFault};
///
/// let fault = RaisedFault::from(Failure::nest("a", Failure::simple("b")));
/// assert_eq!(fault.message(), "a");
/// let cause = fault.source().and_then(|s| s.downcast_ref::<RaisedFault>());
/// assert_eq!(cause.map(RaisedFault::message), Some("b"));
/// ```
#[derive(Debug, Clone)]
pub struct RaisedFault {
    message: String,
    cause: Option<FaultCause>,
}

#[derive(Debug, Clone)]
enum FaultCause {
    Raised(Box<RaisedFault>),
    Native(NativeError),
}

impl RaisedFault {
    /// Creates a fault with a message and no cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a fault chained onto an earlier fault.
    #[must_use]
    pub fn caused_by(message: impl Into<String>, cause: Self) -> Self {
        Self {
            message: message.into(),
            cause: Some(FaultCause::Raised(Box::new(cause))),
        }
    }

    /// Creates a fault whose cause is a native error.
    #[must_use]
    pub fn from_native(message: impl Into<String>, native: NativeError) -> Self {
        Self {
            message: message.into(),
            cause: Some(FaultCause::Native(native)),
        }
    }

    /// The message of this fault alone.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The chained fault, when this fault was built from a nested failure.
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        match &self.cause {
            Some(FaultCause::Raised(cause)) => Some(&**cause),
            Some(FaultCause::Native(_)) | None => None,
        }
    }

    /// The native error, when this fault was built from a wrapped failure.
    #[must_use]
    pub const fn native(&self) -> Option<&NativeError> {
        match &self.cause {
            Some(FaultCause::Native(native)) => Some(native),
            Some(FaultCause::Raised(_)) | None => None,
        }
    }

    /// Iterates over the messages of this fault and of every fault chained
    /// beneath it. Native causes are not included.
    #[must_use = "iterators should be consumed to inspect the chain"]
    pub const fn messages(&self) -> FaultMessages<'_> {
        FaultMessages { next: Some(self) }
    }
}

impl Drop for RaisedFault {
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(FaultCause::Raised(mut fault)) = next {
            next = fault.cause.take();
        }
    }
}

impl fmt::Display for RaisedFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for RaisedFault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(FaultCause::Raised(cause)) => Some(&**cause),
            Some(FaultCause::Native(native)) => Some(&**native),
            None => None,
        }
    }
}

/// Iterator over the messages of a fault chain, outermost first.
///
/// Created by [`RaisedFault::messages`].
#[derive(Debug, Clone)]
pub struct FaultMessages<'a> {
    next: Option<&'a RaisedFault>,
}

impl<'a> Iterator for FaultMessages<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current.message())
    }
}

impl FusedIterator for FaultMessages<'_> {}

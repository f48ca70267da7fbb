//! Native error chains for exercising source unwinding.

use thiserror::Error;

/// A native error with a message and an optional source.
///
/// # Examples
///
/// ```
/// use std::error::Error as _;
/// use outcome_test_helpers::ChainedError;
///
/// let err = ChainedError::chain(["A", "B", "C"]);
/// assert_eq!(err.to_string(), "A");
/// assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("B"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ChainedError {
    message: String,
    #[source]
    source: Option<Box<ChainedError>>,
}

impl ChainedError {
    /// Creates an error without a source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Sets `cause` as the source of this error.
    #[must_use]
    pub fn caused_by(self, cause: Self) -> Self {
        Self {
            source: Some(Box::new(cause)),
            ..self
        }
    }

    /// Builds a chain from messages listed outermost first.
    ///
    /// An empty list yields a single error with an empty message.
    #[must_use]
    pub fn chain<'a, I>(messages: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: DoubleEndedIterator,
    {
        messages
            .into_iter()
            .rev()
            .fold(None, |cause: Option<Self>, message| {
                let link = Self::new(message);
                Some(match cause {
                    Some(inner) => link.caused_by(inner),
                    None => link,
                })
            })
            .unwrap_or_else(|| Self::new(""))
    }

    /// Number of errors in the chain, this one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Some(next) = current.source.as_deref() {
            depth += 1;
            current = next;
        }
        depth
    }
}

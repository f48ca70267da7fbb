//! Owned link from a nested failure to its cause.

use std::fmt;
use std::mem;
use std::ops::Deref;

use super::Failure;

/// The boxed cause of a [`Failure::Nested`] link.
///
/// Dereferences to the [`Failure`] it holds. Dropping it unlinks the rest of
/// the chain one link at a time, so the stack stays flat however deep the
/// chain is.
#[derive(Clone)]
pub struct NestedCause(Box<Failure>);

impl NestedCause {
    /// Boxes `cause` as the cause of a nested failure.
    #[must_use]
    pub fn new(cause: Failure) -> Self {
        Self(Box::new(cause))
    }

    /// Unwraps the cause.
    #[must_use]
    pub fn into_inner(mut self) -> Failure {
        self.take()
    }

    /// Moves the cause out, leaving an empty message behind.
    fn take(&mut self) -> Failure {
        mem::replace(
            &mut *self.0,
            Failure::Simple {
                message: String::new(),
            },
        )
    }
}

impl Deref for NestedCause {
    type Target = Failure;

    fn deref(&self) -> &Failure {
        &self.0
    }
}

impl AsRef<Failure> for NestedCause {
    fn as_ref(&self) -> &Failure {
        &self.0
    }
}

impl From<Failure> for NestedCause {
    fn from(cause: Failure) -> Self {
        Self::new(cause)
    }
}

impl fmt::Debug for NestedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl Drop for NestedCause {
    fn drop(&mut self) {
        let mut current = self.take();
        loop {
            let next = match &mut current {
                Failure::Nested { cause, .. } => cause.take(),
                Failure::Simple { .. } | Failure::Wrapped { .. } | Failure::Custom(_) => break,
            };
            current = next;
        }
    }
}

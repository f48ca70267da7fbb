//! The closed family of failure descriptors.

use std::sync::Arc;

use super::{FailureDescriptor, NativeError, NestedCause};

/// Why an operation failed.
///
/// Each variant is built through the factories on [`Failure`] (or directly,
/// since every field is owned data). Ownership rules out cycles, so every
/// chain of [`Failure::Nested`] values ends in one of the other variants.
#[derive(Debug, Clone)]
pub enum Failure {
    /// A failure described by a message alone.
    Simple {
        /// The root-cause message.
        message: String,
    },

    /// A failure caused by a native error, optionally annotated.
    Wrapped {
        /// Extra context placed in front of the native root cause. `None` and
        /// the empty string are treated alike.
        message: Option<String>,
        /// The native error; its own source chain is unwound when the
        /// failure is described.
        native: NativeError,
    },

    /// A failure that adds context to an earlier failure.
    Nested {
        /// Context for this link of the chain.
        message: String,
        /// The failure that caused this one.
        cause: NestedCause,
    },

    /// A caller-defined descriptor.
    Custom(Arc<dyn FailureDescriptor>),
}

impl Failure {
    /// Returns the message attached to this link of the chain, if any.
    ///
    /// Wrapped failures without an annotation and custom descriptors have no
    /// message of their own.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Simple { message } | Self::Nested { message, .. } => Some(message.as_str()),
            Self::Wrapped { message, .. } => message.as_deref(),
            Self::Custom(_) => None,
        }
    }

    /// Returns the failure that caused this one, for nested failures.
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        match self {
            Self::Nested { cause, .. } => Some(&**cause),
            Self::Simple { .. } | Self::Wrapped { .. } | Self::Custom(_) => None,
        }
    }

    /// Returns the native error, for wrapped failures.
    #[must_use]
    pub const fn native(&self) -> Option<&NativeError> {
        match self {
            Self::Wrapped { native, .. } => Some(native),
            Self::Simple { .. } | Self::Nested { .. } | Self::Custom(_) => None,
        }
    }

    /// Compares a single link, ignoring whatever it nests.
    fn same_link(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Simple { message: left }, Self::Simple { message: right })
            | (Self::Nested { message: left, .. }, Self::Nested { message: right, .. }) => {
                left == right
            }
            (
                Self::Wrapped {
                    message: left_message,
                    native: left_native,
                },
                Self::Wrapped {
                    message: right_message,
                    native: right_native,
                },
            ) => left_message == right_message && Arc::ptr_eq(left_native, right_native),
            (Self::Custom(left), Self::Custom(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

/// Messages compare by value; native errors and custom descriptors compare
/// by identity, as they carry no equality of their own.
impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.causes();
        let mut right = other.causes();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(l), Some(r)) if l.same_link(r) => {}
                _ => return false,
            }
        }
    }
}

impl Eq for Failure {}

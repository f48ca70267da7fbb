//! Conversion of failure chains into raised faults.

use std::sync::Arc;

use super::RaisedFault;
use crate::Failure;

impl Failure {
    /// Converts this failure into a [`RaisedFault`] that mirrors its chain.
    ///
    /// * `Wrapped` keeps its annotation as the fault message (falling back to
    ///   the native error's own message) and chains the native error.
    /// * `Simple` becomes a fault with its message and no cause.
    /// * `Nested` becomes a fault with its message, chained onto the fault
    ///   translated from its cause.
    /// * `Custom` becomes a fault whose message is the descriptor's text.
    #[must_use]
    pub fn to_raised_fault(&self) -> RaisedFault {
        let mut contexts = Vec::new();
        let mut current = self;
        let innermost = loop {
            match current {
                Self::Nested { message, cause } => {
                    contexts.push(message.as_str());
                    current = &**cause;
                }
                Self::Simple { message } => break RaisedFault::new(message.as_str()),
                Self::Wrapped { message, native } => {
                    let text = match message.as_deref() {
                        Some(annotation) if !annotation.is_empty() => annotation.to_owned(),
                        _ => native.to_string(),
                    };
                    break RaisedFault::from_native(text, Arc::clone(native));
                }
                Self::Custom(descriptor) => break RaisedFault::new(descriptor.describe()),
            }
        };
        contexts
            .into_iter()
            .rev()
            .fold(innermost, |cause, message| RaisedFault::caused_by(message, cause))
    }
}

impl From<&Failure> for RaisedFault {
    fn from(failure: &Failure) -> Self {
        failure.to_raised_fault()
    }
}

impl From<Failure> for RaisedFault {
    fn from(failure: Failure) -> Self {
        failure.to_raised_fault()
    }
}

impl From<RaisedFault> for Failure {
    /// Re-enters the outcome world with the fault as the native error, so
    /// its chain is unwound when the failure is described.
    fn from(fault: RaisedFault) -> Self {
        Self::wrap(fault)
    }
}

//! Structured descriptions of why an operation did not succeed.
//!
//! A [`Failure`] is inert data held by a failed [`Outcome`](crate::Outcome).
//! The family is closed: plain messages, wrapped native errors, and nested
//! failures that add context to an earlier one. Callers needing a descriptor
//! outside that set plug in through [`FailureDescriptor`].

mod constructors;
mod describe;
mod descriptor;
mod native;
mod nested;
mod types;

pub use describe::Causes;
pub use descriptor::FailureDescriptor;
pub use native::{BoxError, NativeError};
pub use nested::NestedCause;
pub use types::Failure;

pub(crate) use native::{deepest_cause, into_native};

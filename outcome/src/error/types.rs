//! Misuse errors for terminal outcome accessors.

use thiserror::Error;

/// Returned by [`Outcome::get`](crate::Outcome::get) and
/// [`Outcome::into_value`](crate::Outcome::into_value) when the outcome holds
/// a failure instead of a value.
///
/// This signals caller misuse: the call site should have checked
/// [`Outcome::is_ok`](crate::Outcome::is_ok) first, or used one of the
/// fallback accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("no value present")]
pub struct NoValuePresent;

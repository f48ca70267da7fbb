//! Extension point for failure descriptors outside the built-in variants.

use std::fmt;

/// A caller-defined failure description carried by
/// [`Failure::Custom`](super::Failure::Custom).
///
/// Implementors only supply the root-cause text. When such a failure is
/// turned into a [`RaisedFault`](crate::RaisedFault) the text becomes the
/// fault message and no structured cause is attached.
///
/// # Examples
///
/// ```
/// use outcome::{Failure, FailureDescriptor};
///
/// #[derive(Debug)]
/// struct QuotaExceeded {
///     limit: u32,
/// }
///
/// impl FailureDescriptor for QuotaExceeded {
///     fn describe(&self) -> String {
///         format!("quota of {} exceeded", self.limit)
///     }
/// }
///
/// let failure = Failure::custom(QuotaExceeded { limit: 10 });
/// assert_eq!(failure.describe(), "quota of 10 exceeded");
/// ```
pub trait FailureDescriptor: fmt::Debug + Send + Sync {
    /// Returns the root-cause text for this failure.
    fn describe(&self) -> String;
}

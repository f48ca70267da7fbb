//! Opt-in conversion of panics into failures.
//!
//! [`Outcome::capture`] leaves panics alone because they usually signal a
//! bug. Code that has to survive a panicking dependency can scope the
//! conversion to one closure with [`Outcome::capture_unwind`]. The panic hook
//! still runs, so the panic is reported as usual before it is captured.

use std::any::Any;
use std::panic::{self, UnwindSafe};

use thiserror::Error;

use crate::Outcome;

/// A panic captured by [`Outcome::capture_unwind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_owned()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "panic with non-string payload".to_owned()
        };
        Self { message }
    }

    /// The panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T> Outcome<T> {
    /// Runs `computation`, turning a panic into a failure wrapping a
    /// [`PanicError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<u8> = Outcome::capture_unwind(|| panic!("index out of range"));
    /// assert_eq!(outcome.failure().map(ToString::to_string).as_deref(), Some("index out of range"));
    /// ```
    pub fn capture_unwind<F>(computation: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(computation) {
            Ok(value) => Self::ok(value),
            Err(payload) => {
                let error = PanicError::from_payload(&*payload);
                tracing::warn!(panic = %error, "captured panic as failure");
                Self::from_error(error)
            }
        }
    }
}

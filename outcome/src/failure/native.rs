//! Native error handles carried by [`Failure::Wrapped`](super::Failure::Wrapped).

use std::error::Error;
use std::sync::Arc;

/// Owned, thread-safe trait object accepted wherever a native error is
/// wrapped. Anything convertible into it (any `Error + Send + Sync`, `&str`,
/// `String`, `anyhow::Error`) can enter the outcome world.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Shared handle to a native error.
///
/// Failures are immutable and cloned freely, so the native error is held
/// behind an [`Arc`] rather than a [`Box`].
pub type NativeError = Arc<dyn Error + Send + Sync + 'static>;

pub(crate) fn into_native<E>(error: E) -> NativeError
where
    E: Into<BoxError>,
{
    Arc::from(error.into())
}

/// Follows [`Error::source`] until the innermost error is reached.
///
/// Terminates for any finite source chain.
pub(crate) fn deepest_cause<'a>(error: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut root = error;
    while let Some(next) = root.source() {
        root = next;
    }
    root
}

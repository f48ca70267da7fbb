//! Errors reported when an [`Outcome`](crate::Outcome) is used incorrectly.

mod types;

pub use types::NoValuePresent;

//! Faults raised when a failure has to leave the outcome world.
//!
//! A [`RaisedFault`] is what [`Outcome::or_else_propagate`](crate::Outcome::or_else_propagate)
//! returns to callers that only understand `std::error::Error`. Its
//! `source()` chain mirrors the structure of the failure it was built from.

mod translate;
mod types;

pub use types::{FaultMessages, RaisedFault};

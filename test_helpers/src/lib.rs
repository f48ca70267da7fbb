//! Test helpers shared across crates in the outcome workspace.
//!
//! [`ChainedError`] builds native error chains of any depth, and
//! [`CallCounter`] records how often a supplier or callback ran.

mod chain;
mod counter;

pub use chain::ChainedError;
pub use counter::CallCounter;

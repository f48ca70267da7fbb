//! A success-or-failure outcome type with causal failure chains.
//!
//! [`Outcome`] carries either a value or a [`Failure`] describing why the
//! computation did not succeed. Failures are data: they flow through
//! [`Outcome::map`] and [`Outcome::flat_map`] chains without interrupting
//! control flow, and only become errors at an explicit terminal boundary
//! ([`Outcome::get`], [`Outcome::or_else_throw`],
//! [`Outcome::or_else_propagate`]).
//!
//! ```
//! use outcome::{Failure, Outcome};
//!
//! fn register(email: &str) -> Outcome<String> {
//!     outcome::check_not_empty(email, "email")
//!         .map(str::to_lowercase)
//!         .flat_map(|email| {
//!             if email.contains('@') {
//!                 Outcome::ok(email)
//!             } else {
//!                 Outcome::nested("registering client", Failure::simple("malformed email"))
//!             }
//!         })
//! }
//!
//! assert_eq!(register("Ada@Example.com").or_else_get(String::new), "ada@example.com");
//! assert_eq!(
//!     register("ada").failure().map(Failure::describe).as_deref(),
//!     Some("registering client - malformed email"),
//! );
//! ```
//!
//! Native errors enter through [`Outcome::capture`] or the
//! [`OutcomeResultExt`] helpers, and failures leave as a [`RaisedFault`]
//! whose `source()` chain mirrors the failure chain.

mod error;
mod failure;
mod fault;
mod outcome;
mod preconditions;
mod result_ext;
#[cfg(feature = "unwind")]
mod unwind;

pub use error::NoValuePresent;
pub use failure::{BoxError, Causes, Failure, FailureDescriptor, NativeError, NestedCause};
pub use fault::{FaultMessages, RaisedFault};
pub use outcome::Outcome;
pub use preconditions::check_not_empty;
pub use result_ext::{OutcomeContextExt, OutcomeResultExt};
#[cfg(feature = "unwind")]
pub use unwind::PanicError;

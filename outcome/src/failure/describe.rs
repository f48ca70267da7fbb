//! Root-cause traversal for failure chains.
//!
//! Every walk here is iterative, so a chain of any depth is described
//! without growing the call stack.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::iter::FusedIterator;

use super::{Failure, deepest_cause};

/// Placed between the messages of consecutive links in a described chain.
const CHAIN_SEPARATOR: &str = " - ";

/// Iterator over a failure chain, from the outermost failure to the root.
///
/// Created by [`Failure::causes`].
#[derive(Debug, Clone)]
pub struct Causes<'a> {
    next: Option<&'a Failure>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a Failure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Causes<'_> {}

impl Failure {
    /// Iterates over this failure and every failure nested beneath it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Failure;
    ///
    /// let failure = Failure::nest("saving", Failure::simple("disk full"));
    /// let messages: Vec<_> = failure.causes().filter_map(Failure::message).collect();
    /// assert_eq!(messages, ["saving", "disk full"]);
    /// ```
    #[must_use = "iterators should be consumed to inspect the chain"]
    pub const fn causes(&self) -> Causes<'_> {
        Causes { next: Some(self) }
    }

    /// Returns the innermost failure of the chain.
    ///
    /// For anything other than [`Failure::Nested`] this is `self`.
    #[must_use]
    pub fn root(&self) -> &Self {
        let mut root = self;
        while let Some(cause) = root.cause() {
            root = cause;
        }
        root
    }

    /// Summarises the chain as a single root-cause string.
    ///
    /// * `Simple` contributes its message.
    /// * `Wrapped` contributes its message (when non-empty) followed by the
    ///   message of the deepest source of the native error.
    /// * `Nested` contributes its message and continues with its cause.
    /// * `Custom` contributes whatever its descriptor reports.
    ///
    /// Contributions are joined with `" - "`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Failure;
    ///
    /// let failure = Failure::nest("ctx1", Failure::nest("ctx2", Failure::simple("root")));
    /// assert_eq!(failure.describe(), "ctx1 - ctx2 - root");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts: Vec<Cow<'_, str>> = Vec::new();
        for link in self.causes() {
            match link {
                Self::Simple { message } | Self::Nested { message, .. } => {
                    parts.push(Cow::Borrowed(message.as_str()));
                }
                Self::Wrapped { message, native } => {
                    if let Some(annotation) = message.as_deref().filter(|m| !m.is_empty()) {
                        parts.push(Cow::Borrowed(annotation));
                    }
                    parts.push(Cow::Owned(deepest_cause(&**native).to_string()));
                }
                Self::Custom(descriptor) => parts.push(Cow::Owned(descriptor.describe())),
            }
        }
        parts.join(CHAIN_SEPARATOR)
    }
}

/// Displays the root-cause summary produced by [`Failure::describe`].
impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// The display text already spans the whole chain, so no `source` is
/// reported. Use [`Failure::to_raised_fault`] for a structured chain.
impl Error for Failure {}

//! Argument checks that report through [`Outcome`] instead of panicking.

use crate::Outcome;

/// Accepts `value` when it is not empty.
///
/// An empty value yields a failure reading `Field <field> cannot be empty`.
///
/// # Examples
///
/// ```
/// use outcome::check_not_empty;
///
/// assert_eq!(check_not_empty("ada@example.com", "email").or_else(""), "ada@example.com");
/// assert_eq!(
///     check_not_empty("", "email").failure().map(ToString::to_string).as_deref(),
///     Some("Field <email> cannot be empty"),
/// );
/// ```
pub fn check_not_empty<S>(value: S, field: &str) -> Outcome<S>
where
    S: AsRef<str>,
{
    if value.as_ref().is_empty() {
        Outcome::error(format!("Field <{field}> cannot be empty"))
    } else {
        Outcome::ok(value)
    }
}

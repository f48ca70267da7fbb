//! Validates and registers a client email through outcome chains.

use outcome::{Failure, Outcome, OutcomeContextExt};

#[derive(Debug, Clone, PartialEq)]
struct Email(String);

fn email(raw: &str) -> Outcome<Email> {
    outcome::check_not_empty(raw, "email")
        .flat_map(|value| {
            if value.contains('@') {
                Outcome::ok(Email(value.to_owned()))
            } else {
                Outcome::error("missing @")
            }
        })
        .context("validating email")
}

fn register(raw: &str) -> Outcome<()> {
    email(raw).flat_map(|email| {
        if email.0.ends_with(".invalid") {
            Outcome::error("reserved domain")
        } else {
            Outcome::UNIT
        }
    })
}

fn main() {
    assert!(register("ada@example.com").is_ok());
    assert!(register("ada@example.invalid").is_error());
    let failure = register("ada").into_failure();
    assert_eq!(
        failure.as_ref().map(Failure::describe).as_deref(),
        Some("validating email - missing @")
    );
}

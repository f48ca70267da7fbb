//! Steps composing and consuming outcomes.

use crate::fixtures::OutcomeContext;
use anyhow::{Result, anyhow, ensure};
use outcome::{Failure, Outcome};
use rstest_bdd_macros::{given, then, when};
use test_helpers::CallCounter;

fn take_outcome(outcome_context: &OutcomeContext) -> Result<Outcome<u32>> {
    outcome_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome has been built"))
}

#[given("a successful outcome holding {value:u32}")]
fn successful_outcome(outcome_context: &OutcomeContext, value: u32) {
    outcome_context.outcome.set(Outcome::ok(value));
}

#[given("a failed outcome with message {message}")]
fn failed_outcome(outcome_context: &OutcomeContext, message: String) {
    outcome_context.outcome.set(Outcome::error(message));
}

#[when("the value is doubled")]
fn double(outcome_context: &OutcomeContext) -> Result<()> {
    let doubled = take_outcome(outcome_context)?.map(|n| n * 2);
    outcome_context.outcome.set(doubled);
    Ok(())
}

#[when("the value is checked to be even")]
fn check_even(outcome_context: &OutcomeContext) -> Result<()> {
    let checked = take_outcome(outcome_context)?.flat_map(|n| {
        if n % 2 == 0 {
            Outcome::ok(n)
        } else {
            Outcome::nested("checking parity", Failure::simple("odd value"))
        }
    });
    outcome_context.outcome.set(checked);
    Ok(())
}

#[when("the value is extracted with a counted fallback of {fallback:u32}")]
fn extract_with_fallback(outcome_context: &OutcomeContext, fallback: u32) -> Result<()> {
    let outcome = take_outcome(outcome_context)?;
    let counter = CallCounter::new();
    let value = outcome.or_else_get(counter.supplier(fallback));
    outcome_context.extracted.set(value);
    outcome_context.fallback_calls.set(counter.count());
    Ok(())
}

#[then("the outcome holds {expected:u32}")]
fn outcome_holds(outcome_context: &OutcomeContext, expected: u32) -> Result<()> {
    let outcome = take_outcome(outcome_context)?;
    ensure!(
        outcome.get() == Ok(&expected),
        "expected ok({expected}), got {outcome:?}"
    );
    Ok(())
}

#[then("the outcome fails with description {description}")]
fn outcome_fails_with(outcome_context: &OutcomeContext, description: String) -> Result<()> {
    let failure = take_outcome(outcome_context)?
        .into_failure()
        .ok_or_else(|| anyhow!("expected a failed outcome"))?;
    ensure!(
        failure.describe() == description,
        "unexpected description: {failure}"
    );
    Ok(())
}

#[then("the extracted value is {expected:u32}")]
fn extracted_value(outcome_context: &OutcomeContext, expected: u32) -> Result<()> {
    let value = outcome_context
        .extracted
        .take()
        .ok_or_else(|| anyhow!("no value was extracted"))?;
    ensure!(value == expected, "expected {expected}, got {value}");
    Ok(())
}

#[then("the fallback ran {times:u32} times")]
fn fallback_ran(outcome_context: &OutcomeContext, times: u32) -> Result<()> {
    let calls = outcome_context
        .fallback_calls
        .take()
        .ok_or_else(|| anyhow!("no fallback extraction was attempted"))?;
    ensure!(
        calls == usize::try_from(times)?,
        "fallback ran {calls} times, expected {times}"
    );
    Ok(())
}

//! Steps describing and propagating failure chains.

use crate::fixtures::OutcomeContext;
use anyhow::{Result, anyhow, ensure};
use outcome::{Failure, Outcome};
use rstest_bdd_macros::{given, then, when};
use test_helpers::ChainedError;

fn take_failure(outcome_context: &OutcomeContext) -> Result<Failure> {
    outcome_context
        .failure
        .take()
        .ok_or_else(|| anyhow!("no failure has been built"))
}

fn native_chain(messages: &str) -> ChainedError {
    ChainedError::chain(messages.split(',').map(str::trim))
}

#[given("a simple failure {message}")]
fn simple_failure(outcome_context: &OutcomeContext, message: String) -> Result<()> {
    ensure!(
        outcome_context.failure.is_empty(),
        "failure already initialised"
    );
    outcome_context.failure.set(Failure::simple(message));
    Ok(())
}

#[given("it is nested under {context}")]
fn nest_failure(outcome_context: &OutcomeContext, context: String) -> Result<()> {
    let cause = take_failure(outcome_context)?;
    outcome_context.failure.set(Failure::nest(context, cause));
    Ok(())
}

#[given("a native error chain {messages} wrapped without a message")]
fn wrapped_chain(outcome_context: &OutcomeContext, messages: String) {
    outcome_context
        .failure
        .set(Failure::wrap(native_chain(&messages)));
}

#[given("a native error chain {messages} wrapped with message {message}")]
fn annotated_chain(outcome_context: &OutcomeContext, messages: String, message: String) {
    outcome_context
        .failure
        .set(Failure::wrap_with(message, native_chain(&messages)));
}

#[when("the failure is propagated")]
fn propagate(outcome_context: &OutcomeContext) -> Result<()> {
    let failure = take_failure(outcome_context)?;
    let fault = Outcome::<()>::from_failure(failure)
        .or_else_propagate()
        .err()
        .ok_or_else(|| anyhow!("a failed outcome must raise a fault"))?;
    outcome_context.fault.set(fault);
    Ok(())
}

#[then("the failure is described as {description}")]
fn failure_described(outcome_context: &OutcomeContext, description: String) -> Result<()> {
    let failure = take_failure(outcome_context)?;
    ensure!(
        failure.describe() == description,
        "unexpected description: {failure}"
    );
    Ok(())
}

#[then("the raised fault reads {message}")]
fn fault_reads(outcome_context: &OutcomeContext, message: String) -> Result<()> {
    let actual = outcome_context
        .fault
        .with_ref(|fault| fault.message().to_owned())
        .ok_or_else(|| anyhow!("no fault was raised"))?;
    ensure!(actual == message, "fault message was {actual}");
    Ok(())
}

#[then("the chained fault reads {message}")]
fn chained_fault_reads(outcome_context: &OutcomeContext, message: String) -> Result<()> {
    let actual = outcome_context
        .fault
        .with_ref(|fault| fault.cause().map(|cause| cause.message().to_owned()))
        .flatten()
        .ok_or_else(|| anyhow!("the fault has no chained cause"))?;
    ensure!(actual == message, "chained fault message was {actual}");
    Ok(())
}

//! Shared fixtures for the behavioural scenarios.

use outcome::{Failure, Outcome, RaisedFault};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state shared between the steps of one scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct OutcomeContext {
    /// The outcome under test.
    pub outcome: Slot<Outcome<u32>>,
    /// The failure under construction.
    pub failure: Slot<Failure>,
    /// The fault produced by propagating `failure`.
    pub fault: Slot<RaisedFault>,
    /// The value returned by a terminal accessor.
    pub extracted: Slot<u32>,
    /// How many times the fallback supplier ran during extraction.
    pub fallback_calls: Slot<usize>,
}

/// Creates a clean context for each scenario.
#[fixture]
pub fn outcome_context() -> OutcomeContext {
    OutcomeContext::default()
}

//! Binds the `outcome` feature files to the step registry.

use crate::fixtures::{OutcomeContext, outcome_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/outcome_composition.feature",
    fixtures = [outcome_context: OutcomeContext]
);
scenarios!(
    "tests/features/failure_chains.feature",
    fixtures = [outcome_context: OutcomeContext]
);

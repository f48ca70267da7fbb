//! Step definitions for the behavioural scenarios.

mod failure_steps;
mod outcome_steps;

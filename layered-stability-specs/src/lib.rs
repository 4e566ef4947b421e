#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven testing infrastructure for layered-stability.
//!
//! Test cases are sentences written declaratively in `.nlp` fixture files,
//! each with its dependency edges and the expected classification.
//!
//! ## Modules
//!
//! - [`parser`] - Parses `.nlp` fixture files
//! - [`fixture`] - Parsed fixture types
//! - [`loader`] - Fixture file loading
//! - [`runner`] - Runs fixtures through the classifier
//! - [`config`] - Engine configuration for a run
//! - [`errors`] - Error types for the harness
//! - [`formatter`] - Failure reports with the decision trace
//! - [`failures`] - Expected failures tracking via TOML

pub mod config;
pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod parser;
pub mod runner;

pub use config::PipelineConfig;
pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{CompareOp, ExpectField, FieldCheck, FixtureCase, StabilityFixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use parser::{parse_edge, parse_expectation, parse_fixture};
pub use runner::{actual_value, check_case, run_fixture, run_harness, CaseOutcome, FieldMismatch};

#[cfg(test)]
mod tests;

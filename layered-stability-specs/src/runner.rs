//! Test runner for executing fixtures against the classifier.

use std::path::Path;

use layered_stability::{DecisionSynthesizer, SentenceAnalysis};

use crate::config::PipelineConfig;
use crate::errors::SpecResult;
use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::fixture::{CompareOp, ExpectField, FieldCheck, FixtureCase, StabilityFixture};
use crate::formatter::{format_failure, format_summary};
use crate::loader::load_all_fixtures;

/// One field that did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    pub field: ExpectField,
    pub operator: CompareOp,
    pub expected: String,
    pub actual: String,
}

/// Result of checking one case.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub case_index: usize,
    pub source_line: usize,
    pub text: String,
    pub analysis: SentenceAnalysis,
    pub mismatches: Vec<FieldMismatch>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn reference(&self) -> String {
        format!("C{}", self.case_index)
    }
}

/// Render a field of an analysis the way fixtures spell it. Fields of a
/// sentence that produced no classification read as `none`.
pub fn actual_value(analysis: &SentenceAnalysis, field: ExpectField) -> String {
    match (field, analysis.result()) {
        (ExpectField::Discarded, _) => {
            matches!(analysis, SentenceAnalysis::Discarded(_)).to_string()
        }
        (_, None) => "none".to_string(),
        (ExpectField::Label, Some(result)) => result.label.code().to_string(),
        (ExpectField::Reason, Some(result)) => result.reason.as_str().to_string(),
        (ExpectField::Solvent, Some(result)) => result.solvent_present.to_string(),
        (ExpectField::Stability, Some(result)) => result.stability_present.to_string(),
    }
}

fn check_field(check: &FieldCheck, actual: &str) -> bool {
    let expected = match check.field {
        ExpectField::Label => check.expected.trim_start_matches('+'),
        _ => check.expected.as_str(),
    };
    match check.operator {
        CompareOp::Equals => actual == expected,
        CompareOp::Contains => actual.contains(expected),
    }
}

/// Classify one case and compare every check.
pub fn check_case(engine: &DecisionSynthesizer, case: &FixtureCase) -> CaseOutcome {
    let analysis = engine.analyze(&case.text, &case.edges);
    let mismatches = case
        .checks
        .iter()
        .filter_map(|check| {
            let actual = actual_value(&analysis, check.field);
            (!check_field(check, &actual)).then(|| FieldMismatch {
                field: check.field,
                operator: check.operator,
                expected: check.expected.clone(),
                actual,
            })
        })
        .collect();

    CaseOutcome {
        case_index: case.index,
        source_line: case.source_line,
        text: case.text.clone(),
        analysis,
        mismatches,
    }
}

/// Run every case of a fixture through one engine.
pub fn run_fixture(fixture: &StabilityFixture, config: &PipelineConfig) -> Vec<CaseOutcome> {
    let engine = config.build();
    fixture
        .cases
        .iter()
        .map(|case| check_case(&engine, case))
        .collect()
}

/// Run all fixtures under `dir`, sorting failures into expected ones and
/// regressions. Returns the tally and a printable report.
pub fn run_harness(
    dir: &Path,
    failures: &ExpectedFailures,
    config: &PipelineConfig,
) -> SpecResult<(HarnessResult, String)> {
    let mut harness = HarnessResult::new();
    let mut report = String::new();

    for (name, fixture) in load_all_fixtures(dir)? {
        let (mut passed, mut failed, mut expected, mut regressions) = (0, 0, 0, 0);

        for outcome in run_fixture(&fixture, config) {
            if outcome.passed() {
                passed += 1;
                harness.record_pass();
                continue;
            }

            failed += 1;
            let state = failures.is_expected(&name, &outcome.reference());
            harness.record_failure(state);
            match state {
                FailureState::Regression => {
                    regressions += 1;
                    report.push_str(&format_failure(&name, &outcome));
                }
                FailureState::Known | FailureState::Pending => expected += 1,
            }
        }

        tracing::debug!(fixture = %name, passed, failed, "fixture checked");
        report.push_str(&format_summary(&name, passed, failed, expected, regressions));
    }

    Ok((harness, report))
}

//! Runs every fixture under `fixtures/` against the expected-failures ledger.

use std::path::{Path, PathBuf};

use crate::{run_harness, ExpectedFailures, FailureState, PipelineConfig};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

#[test]
fn test_all_fixtures_without_regressions() {
    let failures = ExpectedFailures::load(&fixtures_dir().join("expected-failures.toml")).unwrap();
    let (result, report) =
        run_harness(&fixtures_dir(), &failures, &PipelineConfig::standard()).unwrap();

    assert!(result.success(), "{}", report);
    assert!(result.total >= 20, "only {} cases ran", result.total);
}

#[test]
fn test_ledger_entries_still_fail() {
    // A ledger entry that passes means the entry is stale.
    let failures = ExpectedFailures::load(&fixtures_dir().join("expected-failures.toml")).unwrap();
    let (result, _) =
        run_harness(&fixtures_dir(), &failures, &PipelineConfig::standard()).unwrap();
    assert_eq!(result.expected_failures, failures.count());
}

#[test]
fn test_unlisted_failure_is_regression() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("wrong.nlp"),
        "The framework shows high crystallinity.\n> expect: label=-1\n",
    )
    .unwrap();

    let (result, report) = run_harness(
        dir.path(),
        &ExpectedFailures::default(),
        &PipelineConfig::standard(),
    )
    .unwrap();
    assert_eq!(result.regressions, 1);
    assert!(report.contains("FAIL: wrong.nlp:1 (C0)"));

    let listed: ExpectedFailures =
        toml::from_str("[[pending]]\nfixture = \"wrong.nlp\"\ncase = \"C0\"\n").unwrap();
    assert_eq!(listed.is_expected("wrong.nlp", "C0"), FailureState::Pending);
    let (result, _) = run_harness(dir.path(), &listed, &PipelineConfig::standard()).unwrap();
    assert!(result.success());
}

//! Failure and summary formatting.

use std::fmt::Write;

use crate::runner::CaseOutcome;

/// Format a failed case with the sentence, each mismatched field, and the
/// engine's decision trace.
pub fn format_failure(fixture_name: &str, outcome: &CaseOutcome) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "\nFAIL: {}:{} ({})",
        fixture_name,
        outcome.source_line,
        outcome.reference()
    );
    let _ = writeln!(output, "\n  {}\n", outcome.text);

    for mismatch in &outcome.mismatches {
        let _ = writeln!(
            output,
            "    \u{2717} {}{}{}: found `{}`",
            mismatch.field, mismatch.operator, mismatch.expected, mismatch.actual
        );
    }

    let _ = writeln!(output, "\n  trace:");
    for line in outcome.analysis.to_string().lines() {
        let _ = writeln!(output, "    {}", line);
    }

    output
}

/// Format a one-fixture summary.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let status = if regressions > 0 { "FAIL" } else { "PASS" };
    format!(
        "\n{}: {}\n  {} passed, {} failed ({} expected, {} regressions)\n",
        status, fixture_name, passed, failed, expected_failures, regressions
    )
}

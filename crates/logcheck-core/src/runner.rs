//! Batch runner: executes every test case in order and aggregates a verdict.
//!
//! The trace sink is passed in rather than held globally, so callers decide
//! whether verdict lines go to a terminal, a file, a buffer, or nowhere.
//!
//! A failing case never stops the batch: every failure in the batch is
//! traced in one run. Only fatal errors (see [`Error::is_fatal`]) abort, and
//! those are returned to the caller to report.

use std::error::Error as _;
use std::io::Write;

use crate::error::{Error, Result};
use crate::executor;
use crate::report::{BatchReport, CaseReport, CaseStatus};
use crate::types::TestCase;

/// Final trace line when every case passed.
pub const PASSED: &str = "PASSED";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Append the observed count and expected spec to failure lines.
    pub show_counts: bool,
}

/// Run `cases` in order, writing failures to `trace`.
pub fn run_all<W: Write>(cases: &[TestCase], trace: &mut W, options: &RunOptions) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for case in cases {
        let status = match executor::run(case) {
            Ok(outcome) if outcome.passed => CaseStatus::Passed,
            Ok(outcome) => {
                if options.show_counts {
                    writeln!(
                        trace,
                        "Failed test, {case} ({}: found {}, expected {})",
                        outcome.diagnostic, outcome.count, outcome.expected
                    )?;
                } else {
                    writeln!(trace, "Failed test, {case} ({})", outcome.diagnostic)?;
                }
                CaseStatus::Failed {
                    diagnostic: outcome.diagnostic,
                    count: outcome.count,
                    expected: outcome.expected.to_string(),
                }
            }
            Err(err) if !err.is_fatal() => {
                let error = describe(&err);
                tracing::warn!(record = %case, %error, "test case errored");
                writeln!(trace, "Error in test, {case}: {error}")?;
                CaseStatus::Errored { error }
            }
            Err(err) => {
                trace.flush()?;
                return Err(err);
            }
        };
        report.cases.push(CaseReport {
            record: case.to_string(),
            status,
        });
    }

    tracing::debug!(
        total = report.total(),
        failed = report.failed(),
        errored = report.errored(),
        "batch finished"
    );
    if report.passed() {
        writeln!(trace, "{PASSED}")?;
    }
    trace.flush()?;
    Ok(report)
}

/// Error message followed by its source chain, `: `-separated.
pub fn describe(err: &Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Test executor: runs one [`TestCase`] against its log file.
//!
//! No state survives between calls: the same case against the same file
//! always yields the same [`Outcome`].

use crate::error::{Error, Result};
use crate::occurrence::Occurrences;
use crate::pattern::build_pattern;
use crate::types::TestCase;

/// Diagnostic for a count outside the allowed occurrences.
pub const NOT_IN_RANGE: &str = "not in range";

/// Verdict for a single test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    /// Empty on success, [`NOT_IN_RANGE`] otherwise.
    pub diagnostic: String,
    /// Matches actually found in the log file.
    pub count: usize,
    pub expected: Occurrences,
}

/// Run one test case.
///
/// A count outside the occurrence spec is a failed `Outcome`, not an
/// error. Errors are reserved for an unreadable log file, a pattern that
/// does not compile, and a malformed occurrence spec.
pub fn run(case: &TestCase) -> Result<Outcome> {
    let content = read_log(case)?;
    let pattern = build_pattern(&case.options, &case.pattern)?;
    let count = pattern.count(&content);
    let expected = Occurrences::parse(&case.occurrences)?;
    let passed = expected.evaluate(count);

    tracing::debug!(
        file = %case.file.display(),
        count,
        expected = %expected,
        passed,
        "test evaluated"
    );

    Ok(Outcome {
        passed,
        diagnostic: if passed {
            String::new()
        } else {
            NOT_IN_RANGE.to_string()
        },
        count,
        expected,
    })
}

// Logs are searched whole; stray invalid UTF-8 is replaced rather than fatal.
fn read_log(case: &TestCase) -> Result<String> {
    let bytes = std::fs::read(&case.file).map_err(|source| Error::FileAccess {
        path: case.file.clone(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

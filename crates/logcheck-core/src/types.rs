//! Core types for logcheck-core.
//!
//! A [`TestCase`] is one record of a batch file: option flags, an occurrence
//! spec, the log file to search, and the match string.

use std::fmt;
use std::path::PathBuf;

use crate::pattern::MatchOptions;

/// One parsed test record, immutable once built.
///
/// The occurrence spec is kept as written and only parsed when the test
/// runs, so a bad spec fails that test rather than the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub options: MatchOptions,
    pub occurrences: String,
    pub file: PathBuf,
    /// Regular expression to count; may contain `:` and embedded newlines.
    pub pattern: String,
}

impl TestCase {
    pub fn new(
        options: MatchOptions,
        occurrences: impl Into<String>,
        file: impl Into<PathBuf>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            options,
            occurrences: occurrences.into(),
            file: file.into(),
            pattern: pattern.into(),
        }
    }
}

/// Renders the batch record form, `<options>:<occurrences>:<file>:<pattern>`.
impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.options,
            self.occurrences,
            self.file.display(),
            self.pattern
        )
    }
}

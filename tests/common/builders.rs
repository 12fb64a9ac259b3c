//! Test builders: a scratch directory of log files plus test cases that
//! point into it.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::path::{Path, PathBuf};

use logcheck_core::batch::parse_record;
use logcheck_core::TestCase;

/// A temporary directory holding log files for one test.
///
/// # Example
///
/// ```rust
/// let ws = LogWorkspace::new().with_log("sample.log", "Hello World\n");
/// let case = ws.case(":1:sample.log:Hello World");
/// ```
pub struct LogWorkspace {
    dir: tempfile::TempDir,
}

impl LogWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn with_log(self, name: &str, content: &str) -> Self {
        std::fs::write(self.path(name), content).expect("write log fixture");
        self
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Parse a batch record whose log file is relative to this workspace.
    pub fn case(&self, record: &str) -> TestCase {
        let mut case = parse_record(record).unwrap_or_else(|| panic!("invalid record {record:?}"));
        case.file = self.dir.path().join(&case.file);
        case
    }

    /// Write a batch file, rewriting every record's log file name to an
    /// absolute path inside the workspace.
    pub fn batch_file(&self, name: &str, lines: &[&str]) -> PathBuf {
        let contents: String = lines
            .iter()
            .map(|line| match parse_record(line) {
                Some(case) => {
                    let file = self.dir.path().join(&case.file);
                    format!(
                        "{}:{}:{}:{}\n",
                        case.options,
                        case.occurrences,
                        file.display(),
                        case.pattern
                    )
                }
                None => format!("{line}\n"),
            })
            .collect();
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write batch file");
        path
    }
}

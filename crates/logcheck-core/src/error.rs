//! Error taxonomy for logcheck-core.
//!
//! A range violation is not an error: it is a normal failed [`Outcome`]
//! (see [`crate::executor`]). Everything in [`Error`] is abnormal and must be
//! reported rather than folded into a verdict.
//!
//! [`Outcome`]: crate::executor::Outcome

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// An occurrence spec that matches none of the accepted shapes, or whose
/// digits do not fit in a `usize`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed occurrence spec {spec:?}")]
pub struct MalformedRangeError {
    pub spec: String,
    /// Set when a count is all digits but out of range.
    #[source]
    pub overflow: Option<std::num::ParseIntError>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read batch file {}", path.display())]
    BatchAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid test at line {line}: {record}")]
    MalformedRecord { line: usize, record: String },

    #[error(transparent)]
    MalformedRange(#[from] MalformedRangeError),

    #[error("unknown match option {0:?} (expected 'i' or 'w')")]
    UnknownOption(char),

    #[error("cannot read log file {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern {pattern:?}")]
    PatternCompilation {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("cannot write to trace output")]
    Trace(#[from] std::io::Error),
}

impl Error {
    /// Whether this error aborts the whole batch rather than a single test.
    ///
    /// Malformed occurrence specs and patterns that fail to compile only
    /// poison the test case that carries them.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::MalformedRange(_) | Error::UnknownOption(_) | Error::PatternCompilation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_test_errors_are_not_fatal() {
        let err = Error::from(MalformedRangeError {
            spec: "3|".into(),
            overflow: None,
        });
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), r#"malformed occurrence spec "3|""#);
        assert!(!Error::UnknownOption('x').is_fatal());
    }

    #[test]
    fn io_errors_are_fatal() {
        let err = Error::FileAccess {
            path: PathBuf::from("missing.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "cannot read log file missing.log");
        assert!(Error::MalformedRecord { line: 3, record: "x".into() }.is_fatal());
    }
}

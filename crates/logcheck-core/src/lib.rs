//! logcheck-core: declarative log verification.
//!
//! A batch of test records each names a pattern, a log file, and how many
//! times the pattern may match there. This crate parses those records,
//! counts matches, and aggregates a verdict.
//!
//! # Architecture
//!
//! ```text
//! batch ──► TestCase ──► executor ──► runner ──► BatchReport
//!                          │   │
//!               pattern ◄──┘   └──► occurrence
//! ```
//!
//! Execution is sequential and synchronous. The only shared resource is the
//! trace sink, which callers pass to [`runner::run_all`] explicitly.

pub mod batch;
pub mod config;
pub mod error;
pub mod executor;
pub mod occurrence;
pub mod pattern;
pub mod report;
pub mod runner;
pub mod trace;
pub mod types;

pub use error::{Error, MalformedRangeError, Result};
pub use executor::{run, Outcome};
pub use occurrence::{evaluate, parse_occurrence_spec, Occurrences};
pub use pattern::{build_pattern, CompiledPattern, MatchOptions};
pub use report::{BatchReport, CaseReport, CaseStatus};
pub use runner::{run_all, RunOptions};
pub use types::TestCase;

//! Batch file parser.
//!
//! A batch file holds one test record per line:
//!
//! ```text
//! # comment
//! <options>:<occurrences>:<logfile>:<match string>
//! :1:app.log:Server started
//! iw:2-5:app.log:connection   reset
//! ```
//!
//! Options may be empty but the leading `:` is still required. The match
//! string runs to the end of the record and may itself contain `:`. Any line
//! that is not blank, not a comment, and not a valid record fails the whole
//! load.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::pattern::MatchOptions;
use crate::types::TestCase;

static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?sx)
        ^
        ([iw]*)                                    # options
        :
        ([0-9]+ | [0-9]+[+-] | [0-9]+[|-][0-9]+)   # exact, at least/most, range/or
        :
        ([^:\s]+)                                  # log file
        :
        (.+)                                       # match string
        $",
    )
    .expect("record grammar must be a valid regex")
});

/// Parse a single record. Surrounding whitespace is ignored; the match
/// string may span lines.
pub fn parse_record(record: &str) -> Option<TestCase> {
    let caps = RECORD_RE.captures(record.trim())?;
    Some(TestCase::new(
        MatchOptions::parse(&caps[1]).ok()?,
        &caps[2],
        &caps[3],
        &caps[4],
    ))
}

/// Parse the contents of a batch file, skipping blank and `#` lines.
pub fn parse_batch(contents: &str) -> Result<Vec<TestCase>> {
    contents
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, record)| {
            parse_record(record).ok_or_else(|| Error::MalformedRecord {
                line,
                record: record.to_string(),
            })
        })
        .collect()
}

/// Read and parse a batch file.
pub fn load_batch(path: &Path) -> Result<Vec<TestCase>> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::BatchAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_batch(&contents)?;
    tracing::debug!(path = %path.display(), cases = cases.len(), "batch loaded");
    Ok(cases)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

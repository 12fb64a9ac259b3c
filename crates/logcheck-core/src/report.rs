//! Batch report: per-case verdicts collected by the runner.
//!
//! The aggregate verdict is a logical AND over every case; errored cases
//! count as not passed. [`BatchReport::write_json`] exports the whole report
//! for CI tooling.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseStatus {
    Passed,
    /// Count outside the allowed occurrences.
    Failed {
        diagnostic: String,
        count: usize,
        expected: String,
    },
    /// Malformed occurrence spec or pattern; the case produced no verdict.
    Errored { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// The case in batch record form.
    pub record: String,
    #[serde(flatten)]
    pub status: CaseStatus,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Passed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub cases: Vec<CaseReport>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    total: usize,
    failed: usize,
    errored: usize,
    cases: &'a [CaseReport],
}

impl BatchReport {
    /// True iff every case passed. An empty batch passes.
    pub fn passed(&self) -> bool {
        self.cases.iter().all(CaseReport::passed)
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Failed { .. }))
    }

    pub fn errored(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Errored { .. }))
    }

    fn count(&self, pred: impl Fn(&CaseStatus) -> bool) -> usize {
        self.cases.iter().filter(|c| pred(&c.status)).count()
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json<W: std::io::Write>(&self, writer: W) -> std::io::Result<()> {
        let report = JsonReport {
            passed: self.passed(),
            total: self.total(),
            failed: self.failed(),
            errored: self.errored(),
            cases: &self.cases,
        };
        serde_json::to_writer_pretty(writer, &report)?;
        Ok(())
    }
}

//! Append-only in-memory report store.

use dmap_model::Report;
use tracing::debug;

/// Owns the ordered collection of committed reports for the session.
///
/// Append-only: nothing is ever removed or reordered, and reports are
/// handed out only as a read-only slice.
#[derive(Debug, Default, Clone)]
pub struct ReportStore {
    reports: Vec<Report>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report to the end of the collection. Infallible; report
    /// invariants are enforced at construction, not here.
    pub fn append(&mut self, report: Report) {
        debug!(
            category = %report.category(),
            kind = %report.kind(),
            total = self.reports.len() + 1,
            "report appended"
        );
        self.reports.push(report);
    }

    /// All reports in insertion order.
    pub fn all(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

//! Read-side category filter.

use dmap_model::{Report, ViewSelector};

/// The subsequence of `reports` visible under `selector`, in the same
/// relative order. Pure; the input is never mutated.
pub fn filtered<'a>(reports: &'a [Report], selector: ViewSelector) -> Vec<&'a Report> {
    reports
        .iter()
        .filter(|report| selector.matches(report.category()))
        .collect()
}

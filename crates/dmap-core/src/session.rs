//! The reporting session: owned state plus the submission workflow.
//!
//! All mutation of the report list, the draft, and the view selector is
//! funneled through the named transitions here. The session is a plain
//! `&mut self` object driven by one logical thread of UI events.

use dmap_model::{Category, Draft, IncidentKind, Report, ViewSelector};
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::error::Result;
use crate::filter::filtered;
use crate::location::LocationSource;
use crate::store::ReportStore;

/// Result of a commit attempt.
///
/// A missing location fix is surfaced as an outcome rather than dropped
/// silently, so callers can decide whether to tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A report was appended; the category doubles as the acknowledgment
    /// signal for the presentation layer.
    Committed { category: Category },
    /// The one-shot location fetch has not resolved yet. The draft stays
    /// open and the store is unchanged.
    NoFix,
    /// No draft was open.
    NotOpen,
}

#[derive(Debug, Default)]
pub struct ReportSession {
    store: ReportStore,
    draft: Draft,
    selector: ViewSelector,
}

impl ReportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the entry form for `category`, resetting the draft to that
    /// category's defaults. Re-opening an already-open draft starts clean.
    pub fn open(&mut self, category: Category) {
        debug!(category = %category, "draft opened");
        self.draft = Draft::open_for(category);
    }

    /// Replace the draft kind. Ignored while no draft is open; rejects a
    /// kind outside the draft category's vocabulary.
    pub fn set_kind(&mut self, kind: IncidentKind) -> Result<()> {
        if !self.draft.is_visible() {
            debug!(kind = %kind, "kind change ignored, no open draft");
            return Ok(());
        }
        self.draft.set_kind(kind)?;
        Ok(())
    }

    /// Replace the draft description. Ignored while no draft is open.
    pub fn set_description(&mut self, text: impl Into<String>) {
        if !self.draft.is_visible() {
            debug!("description change ignored, no open draft");
            return;
        }
        self.draft.set_description(text);
    }

    /// Discard the draft without appending anything.
    pub fn cancel(&mut self) {
        self.draft.close();
    }

    /// Commit the open draft as a report at the reporter's current
    /// position.
    ///
    /// Permission denial propagates as an error; an unresolved fix leaves
    /// the draft open and returns [`CommitOutcome::NoFix`].
    pub fn commit(
        &mut self,
        location: &impl LocationSource,
        clock: &impl Clock,
    ) -> Result<CommitOutcome> {
        if !self.draft.is_visible() {
            return Ok(CommitOutcome::NotOpen);
        }
        let Some(coordinate) = location.current_fix()? else {
            warn!("commit attempted before a location fix was available");
            return Ok(CommitOutcome::NoFix);
        };
        let category = self.draft.category();
        let report = Report::new(
            coordinate,
            category,
            self.draft.kind(),
            self.draft.description(),
            clock.now(),
        )?;
        self.store.append(report);
        self.draft.close();
        info!(category = %category, "report committed");
        Ok(CommitOutcome::Committed { category })
    }

    pub fn set_selector(&mut self, selector: ViewSelector) {
        self.selector = selector;
    }

    pub fn selector(&self) -> ViewSelector {
        self.selector
    }

    /// Reports visible under the current selector, insertion order.
    pub fn visible_reports(&self) -> Vec<&Report> {
        filtered(self.store.all(), self.selector)
    }

    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }
}

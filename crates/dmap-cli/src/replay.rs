//! Drives a [`ReportSession`] from a scripted event sequence.

use anyhow::{Context, Result};
use tracing::{debug, info};

use dmap_core::{CommitOutcome, ReportSession, ScriptedLocation, SystemClock};
use dmap_model::{Category, Coordinate};

use crate::events::SessionEvent;
use crate::logging::format_position;

/// The session state and commit acknowledgments left after a replay.
#[derive(Debug)]
pub struct ReplayOutcome {
    pub session: ReportSession,
    /// One entry per successful commit, in order.
    pub acknowledgments: Vec<Category>,
    /// Commits that were ignored (no fix yet, or no open draft).
    pub missed_commits: usize,
}

/// Replay `events` through a fresh session.
///
/// Fails on a denied location permission or a kind label outside the open
/// draft's vocabulary; everything else follows the workflow contract.
pub fn run_events(events: &[SessionEvent]) -> Result<ReplayOutcome> {
    let mut session = ReportSession::new();
    let mut location = ScriptedLocation::fetching();
    let clock = SystemClock;
    let mut acknowledgments = Vec::new();
    let mut missed_commits = 0usize;

    for event in events {
        debug!(?event, "replaying event");
        match event {
            SessionEvent::Fix {
                latitude,
                longitude,
            } => {
                info!(position = %format_position(*latitude, *longitude), "location fix resolved");
                location.set_fix(Coordinate::new(*latitude, *longitude));
            }
            SessionEvent::Deny => location.deny(),
            SessionEvent::Open { category } => session.open(*category),
            SessionEvent::Kind { value } => {
                let kind = session
                    .draft()
                    .category()
                    .parse_kind(value)
                    .context("pick incident kind")?;
                session.set_kind(kind)?;
            }
            SessionEvent::Describe { text } => session.set_description(text.as_str()),
            SessionEvent::Commit => {
                match session.commit(&location, &clock).context("commit report")? {
                    CommitOutcome::Committed { category } => acknowledgments.push(category),
                    CommitOutcome::NoFix | CommitOutcome::NotOpen => missed_commits += 1,
                }
            }
            SessionEvent::Cancel => session.cancel(),
            SessionEvent::Select { selector } => session.set_selector(*selector),
        }
    }

    Ok(ReplayOutcome {
        session,
        acknowledgments,
        missed_commits,
    })
}

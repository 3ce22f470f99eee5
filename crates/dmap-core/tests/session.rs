//! Submission workflow scenarios end to end.

use chrono::{NaiveDate, NaiveDateTime};
use dmap_core::{
    CommitOutcome, FixedClock, LocationError, ReportSession, ScriptedLocation, SessionError,
};
use dmap_model::{Category, Coordinate, IncidentKind, ViewSelector};

fn clock() -> FixedClock {
    FixedClock(stamp())
}

fn stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

#[test]
fn flood_report_scenario() {
    let mut session = ReportSession::new();
    let location = ScriptedLocation::fixed(Coordinate::new(40.0, -75.0));

    session.open(Category::Disaster);
    session.set_kind(IncidentKind::Flood).unwrap();
    session.set_description("river overflow");
    let outcome = session.commit(&location, &clock()).unwrap();

    assert_eq!(
        outcome,
        CommitOutcome::Committed {
            category: Category::Disaster
        }
    );
    assert_eq!(session.store().len(), 1);

    let report = &session.store().all()[0];
    assert_eq!(report.category(), Category::Disaster);
    assert_eq!(report.kind(), IncidentKind::Flood);
    assert_eq!(report.description(), "river overflow");
    assert_eq!(report.coordinate(), Coordinate::new(40.0, -75.0));
    assert_eq!(report.recorded_at(), stamp());

    session.set_selector(ViewSelector::Crime);
    assert!(session.visible_reports().is_empty());
    session.set_selector(ViewSelector::Disaster);
    assert_eq!(session.visible_reports().len(), 1);
    session.set_selector(ViewSelector::All);
    assert_eq!(session.visible_reports().len(), 1);
}

#[test]
fn cancel_discards_draft_without_appending() {
    let mut session = ReportSession::new();
    session.open(Category::Crime);
    session.set_description("never mind");
    session.cancel();

    assert!(session.store().is_empty());
    assert_eq!(session.draft().description(), "");
    assert!(!session.draft().is_visible());
}

#[test]
fn commit_without_fix_leaves_draft_open() {
    let mut session = ReportSession::new();
    let location = ScriptedLocation::fetching();

    session.open(Category::Crime);
    session.set_description("pending fix");
    let outcome = session.commit(&location, &clock()).unwrap();

    assert_eq!(outcome, CommitOutcome::NoFix);
    assert!(session.store().is_empty());
    assert!(session.draft().is_visible());
    assert_eq!(session.draft().description(), "pending fix");
}

#[test]
fn commit_after_fix_resolves_succeeds() {
    let mut session = ReportSession::new();
    let mut location = ScriptedLocation::fetching();

    session.open(Category::Crime);
    assert_eq!(
        session.commit(&location, &clock()).unwrap(),
        CommitOutcome::NoFix
    );

    location.set_fix(Coordinate::new(51.5, -0.12));
    let outcome = session.commit(&location, &clock()).unwrap();
    assert_eq!(
        outcome,
        CommitOutcome::Committed {
            category: Category::Crime
        }
    );
    assert_eq!(session.store().len(), 1);
    assert!(!session.draft().is_visible());
}

#[test]
fn permission_denied_surfaces_as_error() {
    let mut session = ReportSession::new();
    let location = ScriptedLocation::denied();

    session.open(Category::Disaster);
    let error = session.commit(&location, &clock()).unwrap_err();
    assert_eq!(
        error,
        SessionError::Location(LocationError::PermissionDenied)
    );
    assert!(session.store().is_empty());
}

#[test]
fn commit_while_closed_is_not_open() {
    let mut session = ReportSession::new();
    let location = ScriptedLocation::fixed(Coordinate::new(0.0, 0.0));
    assert_eq!(
        session.commit(&location, &clock()).unwrap(),
        CommitOutcome::NotOpen
    );
    assert!(session.store().is_empty());
}

#[test]
fn commit_clears_description_and_machine_is_reenterable() {
    let mut session = ReportSession::new();
    let location = ScriptedLocation::fixed(Coordinate::new(40.0, -75.0));

    session.open(Category::Crime);
    session.set_kind(IncidentKind::Vandalism).unwrap();
    session.set_description("spray paint");
    session.commit(&location, &clock()).unwrap();
    assert_eq!(session.draft().description(), "");
    assert!(!session.draft().is_visible());

    session.open(Category::Disaster);
    assert_eq!(session.draft().kind(), IncidentKind::Flood);
    assert_eq!(session.draft().description(), "");
    session.commit(&location, &clock()).unwrap();

    assert_eq!(session.store().len(), 2);
    assert_eq!(session.store().all()[0].category(), Category::Crime);
    assert_eq!(session.store().all()[1].category(), Category::Disaster);
}

#[test]
fn reopening_resets_kind_and_description() {
    let mut session = ReportSession::new();
    session.open(Category::Crime);
    session.set_kind(IncidentKind::Assault).unwrap();
    session.set_description("draft text");

    session.open(Category::Crime);
    assert_eq!(session.draft().kind(), IncidentKind::Theft);
    assert_eq!(session.draft().description(), "");
}

#[test]
fn edits_while_closed_are_ignored() {
    let mut session = ReportSession::new();
    assert!(session.set_kind(IncidentKind::Theft).is_ok());
    session.set_description("ghost edit");
    assert_eq!(session.draft().description(), "");
    assert!(!session.draft().is_visible());
}

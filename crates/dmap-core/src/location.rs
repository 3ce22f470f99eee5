//! Location capability consumed by the submission workflow.
//!
//! The real application performs a one-shot permission request and
//! position fetch; the workflow only ever sees the result through
//! [`LocationSource`], so it stays testable without a device.

use dmap_model::Coordinate;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    /// Terminal for the whole report-creation flow; there is no retry.
    #[error("permission to access location was denied")]
    PermissionDenied,
}

/// Supplies the reporter's current position.
pub trait LocationSource {
    /// `Ok(Some(_))` once the one-shot fetch has resolved, `Ok(None)`
    /// while it is still pending.
    fn current_fix(&self) -> Result<Option<Coordinate>, LocationError>;
}

/// A scripted source for tests and the CLI: starts pending, then either
/// resolves to a fix or is denied.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScriptedLocation {
    state: FixState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
enum FixState {
    #[default]
    Fetching,
    Fixed(Coordinate),
    Denied,
}

impl ScriptedLocation {
    pub fn fetching() -> Self {
        Self::default()
    }

    pub fn fixed(coordinate: Coordinate) -> Self {
        Self {
            state: FixState::Fixed(coordinate),
        }
    }

    pub fn denied() -> Self {
        Self {
            state: FixState::Denied,
        }
    }

    pub fn set_fix(&mut self, coordinate: Coordinate) {
        self.state = FixState::Fixed(coordinate);
    }

    pub fn deny(&mut self) {
        self.state = FixState::Denied;
    }
}

impl LocationSource for ScriptedLocation {
    fn current_fix(&self) -> Result<Option<Coordinate>, LocationError> {
        match self.state {
            FixState::Fetching => Ok(None),
            FixState::Fixed(coordinate) => Ok(Some(coordinate)),
            FixState::Denied => Err(LocationError::PermissionDenied),
        }
    }
}

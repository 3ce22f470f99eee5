//! The JSON session event file consumed by `dmap replay`.
//!
//! A session script is a JSON array of tagged events, e.g.:
//!
//! ```json
//! [
//!   { "event": "fix", "latitude": 40.0, "longitude": -75.0 },
//!   { "event": "open", "category": "Disaster" },
//!   { "event": "kind", "value": "Flood" },
//!   { "event": "describe", "text": "river overflow" },
//!   { "event": "commit" }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use dmap_model::{Category, ViewSelector};

/// One user- or device-originated event in a reporting session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum SessionEvent {
    /// The one-shot location fetch resolved to a position.
    Fix { latitude: f64, longitude: f64 },
    /// Location permission was denied; terminal for the flow.
    Deny,
    /// Open the entry form for a category.
    Open { category: Category },
    /// Pick a kind label from the open draft's vocabulary.
    Kind { value: String },
    /// Replace the draft description.
    Describe { text: String },
    Commit,
    Cancel,
    /// Change the view selector.
    Select { selector: ViewSelector },
}

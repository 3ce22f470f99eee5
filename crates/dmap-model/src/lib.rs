pub mod draft;
pub mod error;
pub mod report;
pub mod taxonomy;
pub mod view;

pub use draft::Draft;
pub use error::{ModelError, Result};
pub use report::{Coordinate, Report};
pub use taxonomy::{Category, IncidentKind};
pub use view::ViewSelector;

pub mod clock;
pub mod error;
pub mod filter;
pub mod location;
pub mod session;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, SessionError};
pub use filter::filtered;
pub use location::{LocationError, LocationSource, ScriptedLocation};
pub use session::{CommitOutcome, ReportSession};
pub use store::ReportStore;

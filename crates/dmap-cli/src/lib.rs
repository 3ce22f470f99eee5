//! Library components of the DangerMap CLI.

pub mod events;
pub mod logging;
pub mod replay;

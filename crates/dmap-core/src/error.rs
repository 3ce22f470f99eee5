use thiserror::Error;

use dmap_model::ModelError;

use crate::location::LocationError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

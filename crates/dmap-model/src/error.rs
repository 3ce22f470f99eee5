use thiserror::Error;

use crate::taxonomy::Category;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("kind '{kind}' is not in the {category} vocabulary")]
    KindOutOfVocabulary { kind: String, category: Category },
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown view selector: {0}")]
    UnknownSelector(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

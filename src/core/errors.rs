use thiserror::Error;

use super::models::CardKey;

#[derive(Error, Debug)]
pub enum SklonError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Card not found: {0}")]
    CardNotFound(CardKey),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Catch-all for embedders wrapping their own failures, and for internal
    /// mapping inconsistencies the type system cannot rule out. Nothing in
    /// this crate constructs it.
    #[error("SklonError: {0}")]
    Internal(String),
}

impl From<std::io::Error> for SklonError {
    fn from(error: std::io::Error) -> Self {
        SklonError::Io(Box::new(error))
    }
}

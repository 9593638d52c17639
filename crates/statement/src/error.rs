//! Statement error model.

use thiserror::Error;

use crate::play::PlayId;

pub type StatementResult<T> = Result<T, StatementError>;

#[derive(Debug, Error)]
pub enum StatementError {
    /// A catalogue entry has a type other than tragedy or comedy.
    #[error("unknown type: {0}")]
    UnknownPlayType(String),

    /// A performance refers to a play missing from the catalogue.
    #[error("unknown play reference: {0}")]
    UnknownPlay(PlayId),

    /// Catalogue or invoice JSON could not be decoded.
    #[error("invalid fixture data: {0}")]
    Fixture(#[from] serde_json::Error),
}

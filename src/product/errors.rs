use thiserror::Error;

use crate::backend::OperationError;
use crate::product::validation::ErrorMap;

/// Whole-record validation failure. The map is never partial.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct ValidationError(pub ErrorMap);

impl ValidationError {
    pub fn errors(&self) -> &ErrorMap {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),
    #[error("save failed: {0}")]
    Operation(#[from] OperationError),
    #[error("a submission is already in progress")]
    InFlight,
}

/// Raised when a textual field path names nothing on the product record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldPathError {
    #[error("unknown field path: {0}")]
    UnknownPath(String),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("malformed assignment '{0}', expected path=value")]
    MalformedAssignment(String),
}

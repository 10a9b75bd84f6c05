use thiserror::Error;

/// Errors returned by the feed and swipe operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A referenced user does not exist in the store
    #[error("{0}")]
    NotFound(String),

    /// A business rule rejected an otherwise well-formed request
    #[error("{0}")]
    Validation(String),
}

/// Discriminant of [`CoreError`], for the boundary layer to switch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::NotFound(_) => ErrorKind::NotFound,
            CoreError::Validation(_) => ErrorKind::Validation,
        }
    }
}

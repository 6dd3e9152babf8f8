use docket_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("{kind} id already exists: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("{kind} id does not exist: {id}")]
    UnknownId { kind: &'static str, id: String },
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Core,
    DuplicateId,
    UnknownId,
    NotFound,
}

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    InvalidArgument,
    NotFound,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::DuplicateId { .. } => StoreErrorKind::DuplicateId,
            StoreError::UnknownId { .. } => StoreErrorKind::UnknownId,
            StoreError::NotFound { .. } => StoreErrorKind::NotFound,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self.kind() {
            StoreErrorKind::NotFound => ErrorClass::NotFound,
            StoreErrorKind::Core | StoreErrorKind::DuplicateId | StoreErrorKind::UnknownId => {
                ErrorClass::InvalidArgument
            }
        }
    }
}

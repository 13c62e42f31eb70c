use crate::StorageState;
use std::fmt;

pub type Result<T> = std::result::Result<T, EitherError>;

/// Which side of an [`Either`](crate::Either) an operation asked for.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Side {
    Success,
    Error,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Success => f.write_str("success"),
            Side::Error => f.write_str("error"),
        }
    }
}

/// Logic errors raised by variant-checked access.
///
/// Both kinds mean the caller skipped an `is_success`/`is_error` check. They
/// are never produced for correctly guarded code.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EitherError {
    #[error("invalid state access: requested {requested} value, found {found}")]
    BadAccess {
        requested: Side,
        found: StorageState,
    },
    #[error("invalid assignment: expected {expected} value, found {found}")]
    BadAssign {
        expected: Side,
        found: StorageState,
    },
}

impl EitherError {
    pub(crate) fn access(requested: Side, found: StorageState) -> Self {
        EitherError::BadAccess { requested, found }
    }

    pub(crate) fn assign(expected: Side, found: StorageState) -> Self {
        EitherError::BadAssign { expected, found }
    }
}

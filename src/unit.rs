use crate::{EitherError, Result, Side, StorageState};
use std::{convert::Infallible, fmt};

/// A value committed to the success side, before the error type is fixed.
///
/// Widen it into an [`Either`](crate::Either) with `.into()`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Success<S>(pub S);

/// A value committed to the error side, before the success type is fixed.
///
/// Widen it into an [`Either`](crate::Either) with `.into()`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Error<E>(pub E);

/// Wraps `value` as a success.
pub const fn success<S>(value: S) -> Success<S> {
    Success(value)
}

/// Wraps `value` as an error.
pub const fn error<E>(value: E) -> Error<E> {
    Error(value)
}

impl<S> Success<S> {
    pub const fn is_success(&self) -> bool {
        true
    }

    pub const fn is_error(&self) -> bool {
        false
    }

    pub const fn success(&self) -> &S {
        &self.0
    }

    pub fn success_mut(&mut self) -> &mut S {
        &mut self.0
    }

    pub fn into_success(self) -> S {
        self.0
    }

    /// Always panics: a `Success` has no error side.
    #[track_caller]
    pub fn error(&self) -> &Infallible {
        match self.try_error() {
            Ok(never) => never,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_error(&self) -> Result<&Infallible> {
        Err(EitherError::access(Side::Error, StorageState::HasSuccess))
    }
}

impl<E> Error<E> {
    pub const fn is_success(&self) -> bool {
        false
    }

    pub const fn is_error(&self) -> bool {
        true
    }

    pub const fn error(&self) -> &E {
        &self.0
    }

    pub fn error_mut(&mut self) -> &mut E {
        &mut self.0
    }

    pub fn into_error(self) -> E {
        self.0
    }

    /// Always panics: an `Error` has no success side.
    #[track_caller]
    pub fn success(&self) -> &Infallible {
        match self.try_success() {
            Ok(never) => never,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_success(&self) -> Result<&Infallible> {
        Err(EitherError::access(Side::Success, StorageState::HasError))
    }
}

impl<S> From<&Success<S>> for bool {
    fn from(_: &Success<S>) -> bool {
        true
    }
}

impl<E> From<&Error<E>> for bool {
    fn from(_: &Error<E>) -> bool {
        false
    }
}

impl<S, E> PartialEq<Error<E>> for Success<S> {
    fn eq(&self, _: &Error<E>) -> bool {
        false
    }
}

impl<S, E> PartialEq<Success<S>> for Error<E> {
    fn eq(&self, _: &Success<S>) -> bool {
        false
    }
}

impl<S: fmt::Display> fmt::Display for Success<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

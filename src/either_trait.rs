use crate::{Either, EitherError, Error, Result, Side, StorageState, Success};
use std::convert::Infallible;

/// Checked queries shared by every success/error carrier.
///
/// One-sided carriers use [`Infallible`] for the side they cannot hold.
pub trait EitherTrait {
    type Success;
    type Error;

    #[must_use]
    fn state(&self) -> StorageState;

    fn try_success(&self) -> Result<&Self::Success>;

    fn try_error(&self) -> Result<&Self::Error>;

    #[must_use]
    fn is_success(&self) -> bool {
        self.state() == StorageState::HasSuccess
    }

    #[must_use]
    fn is_error(&self) -> bool {
        self.state() == StorageState::HasError
    }
}

impl<S, E> EitherTrait for Either<S, E> {
    type Success = S;
    type Error = E;

    fn state(&self) -> StorageState {
        Either::state(self)
    }

    fn try_success(&self) -> Result<&S> {
        Either::try_success(self)
    }

    fn try_error(&self) -> Result<&E> {
        Either::try_error(self)
    }
}

impl<S> EitherTrait for Success<S> {
    type Success = S;
    type Error = Infallible;

    fn state(&self) -> StorageState {
        StorageState::HasSuccess
    }

    fn try_success(&self) -> Result<&S> {
        Ok(&self.0)
    }

    fn try_error(&self) -> Result<&Infallible> {
        Success::try_error(self)
    }
}

impl<E> EitherTrait for Error<E> {
    type Success = Infallible;
    type Error = E;

    fn state(&self) -> StorageState {
        StorageState::HasError
    }

    fn try_success(&self) -> Result<&Infallible> {
        Error::try_success(self)
    }

    fn try_error(&self) -> Result<&E> {
        Ok(&self.0)
    }
}

impl<S, E> EitherTrait for std::result::Result<S, E> {
    type Success = S;
    type Error = E;

    fn state(&self) -> StorageState {
        match self {
            Ok(_) => StorageState::HasSuccess,
            Err(_) => StorageState::HasError,
        }
    }

    fn try_success(&self) -> Result<&S> {
        self.as_ref()
            .map_err(|_| EitherError::access(Side::Success, StorageState::HasError))
    }

    fn try_error(&self) -> Result<&E> {
        match self {
            Ok(_) => Err(EitherError::access(Side::Error, StorageState::HasSuccess)),
            Err(e) => Ok(e),
        }
    }
}

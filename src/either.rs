use crate::storage::Storage;
use crate::{EitherError, Error, Result, Side, StorageState, Success};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The outcome of an operation: a success value `S` or an error value `E`.
///
/// An `Either` holds exactly one payload until it is moved out of with
/// [`take`](Either::take) or a `take_*` accessor, after which it is empty and
/// reports neither side. Reading the side that is not live is a caller bug:
/// the plain accessors panic, the `try_*` accessors return
/// [`EitherError::BadAccess`].
///
/// `Either` is `Clone`/`Copy` exactly when both payload types are.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Either<S, E> {
    storage: Storage<S, E>,
}

impl<S, E> Either<S, E> {
    pub const fn success(value: S) -> Self {
        Self {
            storage: Storage::with_success(value),
        }
    }

    pub const fn error(value: E) -> Self {
        Self {
            storage: Storage::with_error(value),
        }
    }

    pub fn state(&self) -> StorageState {
        self.storage.state()
    }

    pub fn is_success(&self) -> bool {
        self.state() == StorageState::HasSuccess
    }

    pub fn is_error(&self) -> bool {
        self.state() == StorageState::HasError
    }

    /// True once the payload has been moved out.
    pub fn is_empty(&self) -> bool {
        self.state() == StorageState::Empty
    }

    pub fn try_success(&self) -> Result<&S> {
        let state = self.state();
        self.storage
            .success()
            .ok_or_else(|| EitherError::access(Side::Success, state))
    }

    pub fn try_error(&self) -> Result<&E> {
        let state = self.state();
        self.storage
            .error()
            .ok_or_else(|| EitherError::access(Side::Error, state))
    }

    pub fn try_success_mut(&mut self) -> Result<&mut S> {
        let state = self.state();
        self.storage
            .success_mut()
            .ok_or_else(|| EitherError::access(Side::Success, state))
    }

    pub fn try_error_mut(&mut self) -> Result<&mut E> {
        let state = self.state();
        self.storage
            .error_mut()
            .ok_or_else(|| EitherError::access(Side::Error, state))
    }

    /// Moves the success payload out and leaves `self` empty.
    ///
    /// On failure `self` is left as it was.
    pub fn try_take_success(&mut self) -> Result<S> {
        let state = self.state();
        self.storage
            .take_success()
            .ok_or_else(|| EitherError::access(Side::Success, state))
    }

    /// Moves the error payload out and leaves `self` empty.
    ///
    /// On failure `self` is left as it was.
    pub fn try_take_error(&mut self) -> Result<E> {
        let state = self.state();
        self.storage
            .take_error()
            .ok_or_else(|| EitherError::access(Side::Error, state))
    }

    pub fn try_into_success(mut self) -> Result<S> {
        self.try_take_success()
    }

    pub fn try_into_error(mut self) -> Result<E> {
        self.try_take_error()
    }

    #[track_caller]
    pub fn as_success(&self) -> &S {
        fail_fast(self.try_success())
    }

    #[track_caller]
    pub fn as_error(&self) -> &E {
        fail_fast(self.try_error())
    }

    #[track_caller]
    pub fn success_mut(&mut self) -> &mut S {
        fail_fast(self.try_success_mut())
    }

    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        fail_fast(self.try_error_mut())
    }

    #[track_caller]
    pub fn take_success(&mut self) -> S {
        fail_fast(self.try_take_success())
    }

    #[track_caller]
    pub fn take_error(&mut self) -> E {
        fail_fast(self.try_take_error())
    }

    #[track_caller]
    pub fn into_success(self) -> S {
        fail_fast(self.try_into_success())
    }

    #[track_caller]
    pub fn into_error(self) -> E {
        fail_fast(self.try_into_error())
    }

    /// Moves the whole value out, leaving `self` empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            storage: self.storage.take(),
        }
    }

    /// Installs `other` and returns the previous value.
    pub fn replace(&mut self, other: Self) -> Self {
        Self {
            storage: self.storage.replace(other.storage),
        }
    }

    pub fn assign_success(&mut self, value: Success<S>) {
        self.set_success(value.0);
    }

    pub fn assign_error(&mut self, value: Error<E>) {
        self.set_error(value.0);
    }

    pub fn set_success(&mut self, value: S) {
        self.storage.replace(Storage::with_success(value));
    }

    pub fn set_error(&mut self, value: E) {
        self.storage.replace(Storage::with_error(value));
    }

    pub fn as_ref(&self) -> Either<&S, &E> {
        let storage = match &self.storage {
            Storage::Success(v) => Storage::Success(v),
            Storage::Error(e) => Storage::Error(e),
            Storage::Empty => Storage::Empty,
        };
        Either { storage }
    }

    pub fn map_success<T, F>(self, f: F) -> Either<T, E>
    where
        F: FnOnce(S) -> T,
    {
        let storage = match self.storage {
            Storage::Success(v) => Storage::Success(f(v)),
            Storage::Error(e) => Storage::Error(e),
            Storage::Empty => Storage::Empty,
        };
        Either { storage }
    }

    pub fn map_error<T, F>(self, f: F) -> Either<S, T>
    where
        F: FnOnce(E) -> T,
    {
        let storage = match self.storage {
            Storage::Success(v) => Storage::Success(v),
            Storage::Error(e) => Storage::Error(f(e)),
            Storage::Empty => Storage::Empty,
        };
        Either { storage }
    }
}

#[track_caller]
fn fail_fast<T>(value: Result<T>) -> T {
    match value {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}

impl<S, E> From<Success<S>> for Either<S, E> {
    fn from(value: Success<S>) -> Self {
        Self::success(value.0)
    }
}

impl<S, E> From<Error<E>> for Either<S, E> {
    fn from(value: Error<E>) -> Self {
        Self::error(value.0)
    }
}

impl<S: Clone, E> From<&Success<S>> for Either<S, E> {
    fn from(value: &Success<S>) -> Self {
        Self::success(value.0.clone())
    }
}

impl<S, E: Clone> From<&Error<E>> for Either<S, E> {
    fn from(value: &Error<E>) -> Self {
        Self::error(value.0.clone())
    }
}

impl<S, E> From<std::result::Result<S, E>> for Either<S, E> {
    fn from(value: std::result::Result<S, E>) -> Self {
        match value {
            Ok(v) => Self::success(v),
            Err(e) => Self::error(e),
        }
    }
}

impl<S, E> From<&Either<S, E>> for bool {
    fn from(value: &Either<S, E>) -> bool {
        value.is_success()
    }
}

impl<S, E> TryFrom<Either<S, E>> for Success<S> {
    type Error = EitherError;

    fn try_from(mut value: Either<S, E>) -> Result<Self> {
        let state = value.state();
        value
            .storage
            .take_success()
            .map(Success)
            .ok_or_else(|| EitherError::assign(Side::Success, state))
    }
}

impl<S, E> TryFrom<Either<S, E>> for Error<E> {
    type Error = EitherError;

    fn try_from(mut value: Either<S, E>) -> Result<Self> {
        let state = value.state();
        value
            .storage
            .take_error()
            .map(Error)
            .ok_or_else(|| EitherError::assign(Side::Error, state))
    }
}

impl<S, E> TryFrom<Either<S, E>> for std::result::Result<S, E> {
    type Error = EitherError;

    fn try_from(value: Either<S, E>) -> Result<Self> {
        match value.storage {
            Storage::Success(v) => Ok(Ok(v)),
            Storage::Error(e) => Ok(Err(e)),
            Storage::Empty => Err(EitherError::access(Side::Success, StorageState::Empty)),
        }
    }
}

/// Equal only when both sides are live, on the same side, with equal
/// payloads. An empty value equals nothing, itself included.
impl<S: PartialEq, E: PartialEq> PartialEq for Either<S, E> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (Storage::Success(a), Storage::Success(b)) => a == b,
            (Storage::Error(a), Storage::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl<S: PartialEq, E> PartialEq<Success<S>> for Either<S, E> {
    fn eq(&self, other: &Success<S>) -> bool {
        self.storage.success() == Some(&other.0)
    }
}

impl<S, E: PartialEq> PartialEq<Error<E>> for Either<S, E> {
    fn eq(&self, other: &Error<E>) -> bool {
        self.storage.error() == Some(&other.0)
    }
}

impl<S: PartialEq, E> PartialEq<Either<S, E>> for Success<S> {
    fn eq(&self, other: &Either<S, E>) -> bool {
        other == self
    }
}

impl<S, E: PartialEq> PartialEq<Either<S, E>> for Error<E> {
    fn eq(&self, other: &Either<S, E>) -> bool {
        other == self
    }
}

impl<S: Hash, E: Hash> Hash for Either<S, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.hash(state);
    }
}

/// Renders the live payload with no framing. An empty value renders nothing.
impl<S: fmt::Display, E: fmt::Display> fmt::Display for Either<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.storage {
            Storage::Success(v) => v.fmt(f),
            Storage::Error(e) => e.fmt(f),
            Storage::Empty => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error, success};
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    fn example(val: i32) -> Either<i32, String> {
        if val > 0 {
            success(2 * val).into()
        } else {
            error(String::from("[example] error: val must be > 0")).into()
        }
    }

    #[test]
    fn success_scenario() {
        let e: Either<i32, &str> = success(2 * 2).into();
        assert!(e.is_success());
        assert!(bool::from(&e));
        assert_eq!(*e.as_success(), 4);
        assert_eq!(
            e.try_error(),
            Err(EitherError::access(Side::Error, StorageState::HasSuccess))
        );
    }

    #[test]
    fn error_scenario() {
        let e: Either<i32, &str> = error("boom").into();
        assert!(e.is_error());
        assert!(!bool::from(&e));
        assert_eq!(*e.as_error(), "boom");
        assert_eq!(
            e.try_success(),
            Err(EitherError::access(Side::Success, StorageState::HasError))
        );
    }

    #[test]
    #[should_panic(expected = "invalid state access: requested success value, found error")]
    fn success_on_error_panics() {
        let e: Either<i32, char> = Either::error('c');
        e.as_success();
    }

    #[test]
    fn destructive_read_empties() {
        let mut e: Either<String, char> = Either::success("Hello".repeat(7));
        assert_eq!(e.take_success(), "Hello".repeat(7));
        assert!(e.is_empty());
        assert!(!e.is_success());
        assert!(!e.is_error());
        assert_eq!(
            e.try_take_success(),
            Err(EitherError::access(Side::Success, StorageState::Empty))
        );
    }

    #[test]
    fn failed_take_keeps_payload() {
        let mut e: Either<u8, char> = Either::error('x');
        assert!(e.try_take_success().is_err());
        assert_eq!(e.take_error(), 'x');
    }

    #[test]
    fn take_moves_whole_value() {
        let mut a: Either<i32, String> = error(String::from("moved")).into();
        let b = a.take();
        assert!(b.is_error());
        assert_eq!(b.as_error(), "moved");
        assert!(!a.is_success() && !a.is_error());

        a = b.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn reassign_from_empty() {
        let mut e: Either<i32, char> = Either::success(1);
        let _ = e.take();
        e.assign_error(error('z'));
        assert_eq!(e.state(), StorageState::HasError);
        e.assign_success(success(9));
        assert_eq!(*e.as_success(), 9);
        let old = e.replace(Either::error('q'));
        assert_eq!(old, success(9));
    }

    #[test]
    fn mutate_in_place() {
        let mut e: Either<Vec<u8>, ()> = Either::success(vec![1]);
        e.success_mut().push(2);
        assert_eq!(e.as_success(), &vec![1, 2]);
        assert!(e.try_error_mut().is_err());
    }

    #[test]
    fn empty_equals_nothing() {
        let mut a: Either<u8, u8> = Either::success(1);
        let _ = a.take();
        let mut b: Either<u8, u8> = Either::success(1);
        let _ = b.take();
        assert!(a != b);
        assert!(a != a.clone());
    }

    #[test]
    fn success_never_equals_error() {
        let a: Either<u8, u8> = Either::success(7);
        let b: Either<u8, u8> = Either::error(7);
        assert!(a != b);
        assert!(a == success(7));
        assert!(b == error(7));
        assert!(a != error(7));
    }

    #[test]
    fn unit_side_equality_is_symmetric() {
        let mut a: Either<u8, char> = Either::success(7);
        assert!(success(7) == a);
        assert!(success(8) != a);
        assert!(error('x') != a);
        a.set_error('x');
        assert!(error('x') == a);
        assert!(success(7) != a);
        let _ = a.take();
        assert!(error('x') != a);
    }

    #[test]
    fn narrowing_checks_side() {
        let e: Either<u8, char> = Either::error('x');
        assert_eq!(
            Success::<u8>::try_from(e),
            Err(EitherError::assign(Side::Success, StorageState::HasError))
        );
        let e: Either<u8, char> = Either::error('x');
        assert_eq!(Error::<char>::try_from(e), Ok(error('x')));

        let mut e: Either<u8, char> = Either::success(1);
        let _ = e.take();
        assert!(matches!(
            Error::<char>::try_from(e),
            Err(EitherError::BadAssign { found: StorageState::Empty, .. })
        ));
    }

    #[test]
    fn result_interop() {
        let e: Either<u8, String> = Ok(3).into();
        assert_eq!(std::result::Result::<u8, String>::try_from(e), Ok(Ok(3)));
        let mut e: Either<u8, String> = Err(String::from("no")).into();
        assert_eq!(*e.as_error(), "no");
        let _ = e.take();
        assert!(std::result::Result::<u8, String>::try_from(e).is_err());
    }

    #[test]
    fn maps_preserve_side() {
        let e: Either<i32, char> = Either::success(20);
        assert_eq!(e.map_success(|v| v + 1).map_error(u32::from), success(21));
        let e: Either<i32, char> = Either::error('a');
        assert_eq!(e.map_error(u32::from), error(97));
    }

    #[test]
    fn renders_live_payload() {
        assert_eq!(example(2).to_string(), "4");
        assert_eq!(
            example(-1).to_string(),
            "[example] error: val must be > 0"
        );
        let mut e = example(1);
        let _ = e.take();
        assert_eq!(e.to_string(), "");
    }

    #[test]
    fn copy_when_payloads_are_copy() {
        let a: Either<i32, char> = Either::success(5);
        let b = a;
        assert_eq!(a, b);
    }

    #[quickcheck]
    fn success_roundtrip(s: i64) -> bool {
        let e: Either<i64, String> = success(s).into();
        e.is_success() && !e.is_error() && *e.as_success() == s && e.try_error().is_err()
    }

    #[quickcheck]
    fn error_roundtrip(s: String) -> bool {
        let e: Either<i64, String> = error(s.clone()).into();
        e.is_error() && !e.is_success() && *e.as_error() == s && e.try_success().is_err()
    }

    #[quickcheck]
    fn take_transfers_state(v: i32, as_error: bool) -> bool {
        let mut a: Either<i32, i32> = if as_error {
            Either::error(v)
        } else {
            Either::success(v)
        };
        let before = a;
        let b = a.take();
        b == before && a.is_empty() && !a.is_success() && !a.is_error()
    }

    #[quickcheck]
    fn sides_never_equal(x: u16, y: u16) -> bool {
        let a: Either<u16, u16> = Either::success(x);
        let b: Either<u16, u16> = Either::error(y);
        a != b && a == Either::success(x) && b == Either::error(y)
    }
}

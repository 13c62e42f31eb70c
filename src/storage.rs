use crate::trace::trace_transition;
use std::{fmt, mem};

/// Discriminant of an [`Either`](crate::Either).
///
/// `Empty` is only reachable by moving the payload out.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StorageState {
    HasSuccess,
    HasError,
    Empty,
}

impl StorageState {
    pub fn is_live(self) -> bool {
        self != StorageState::Empty
    }
}

impl fmt::Display for StorageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageState::HasSuccess => f.write_str("success"),
            StorageState::HasError => f.write_str("error"),
            StorageState::Empty => f.write_str("empty"),
        }
    }
}

/// Holds at most one of `S` or `E`.
///
/// Dropping a `Storage` drops exactly the live payload. Moving a payload out
/// leaves `Empty` behind, so the slot is never dropped twice. No method here
/// validates access; callers get `None` and decide what that means.
#[derive(Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum Storage<S, E> {
    Success(S),
    Error(E),
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Empty,
}

impl<S, E> Storage<S, E> {
    pub(crate) const fn with_success(value: S) -> Self {
        Storage::Success(value)
    }

    pub(crate) const fn with_error(value: E) -> Self {
        Storage::Error(value)
    }

    pub(crate) fn state(&self) -> StorageState {
        match self {
            Storage::Success(_) => StorageState::HasSuccess,
            Storage::Error(_) => StorageState::HasError,
            Storage::Empty => StorageState::Empty,
        }
    }

    pub(crate) fn success(&self) -> Option<&S> {
        match self {
            Storage::Success(v) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn error(&self) -> Option<&E> {
        match self {
            Storage::Error(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn success_mut(&mut self) -> Option<&mut S> {
        match self {
            Storage::Success(v) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn error_mut(&mut self) -> Option<&mut E> {
        match self {
            Storage::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Moves the success payload out, leaving `Empty`. Other states are untouched.
    pub(crate) fn take_success(&mut self) -> Option<S> {
        if !matches!(self, Storage::Success(_)) {
            return None;
        }
        match self.take() {
            Storage::Success(v) => Some(v),
            _ => None,
        }
    }

    /// Moves the error payload out, leaving `Empty`. Other states are untouched.
    pub(crate) fn take_error(&mut self) -> Option<E> {
        if !matches!(self, Storage::Error(_)) {
            return None;
        }
        match self.take() {
            Storage::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Moves the whole storage out, leaving `Empty`.
    pub(crate) fn take(&mut self) -> Self {
        let taken = mem::replace(self, Storage::Empty);
        trace_transition!(taken.state(), StorageState::Empty, "take");
        taken
    }

    /// Drops the current occupant (if any) and installs `other`.
    pub(crate) fn replace(&mut self, other: Self) -> Self {
        let from = self.state();
        let old = mem::replace(self, other);
        trace_transition!(from, self.state(), "replace");
        old
    }
}

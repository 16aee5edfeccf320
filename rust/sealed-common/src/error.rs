use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index, len }.into())
    }

    /// Classifies a failed reservation of `requested` additional slots.
    ///
    /// `TryReserveError::kind()` is not stable, so the source is compared against
    /// a known overflow error instead. Anything else is an allocator failure.
    pub fn reserve_failed(requested: usize, source: TryReserveError) -> Error {
        let kind = if is_capacity_overflow(&source) {
            ErrorKind::CapacityOverflow { requested, source }
        } else {
            ErrorKind::AllocationFailed { requested, source }
        };
        Error(kind.into())
    }
}

/// Reserving `usize::MAX` bytes on an empty `Vec` fails the size computation
/// before any allocation is attempted, so it always yields the overflow kind.
fn is_capacity_overflow(source: &TryReserveError) -> bool {
    match Vec::<u8>::new().try_reserve(usize::MAX) {
        Err(overflow) => *source == overflow,
        Ok(()) => false,
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("capacity overflow while reserving {requested} additional elements")]
    CapacityOverflow {
        requested: usize,
        source: TryReserveError,
    },

    #[error("allocation failed while reserving {requested} additional elements")]
    AllocationFailed {
        requested: usize,
        source: TryReserveError,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

//! Errors returned by buffer operations.
use std::io;

/// A specialized result type for buffer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a read or write on a buffer can be refused.
///
/// Neither variant leaves the buffer modified. Running out of room is not an error: writes grow the buffer instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A zero-length slice was given to read into or write from.
    #[error("input slice is empty")]
    EmptyInput,

    /// A read was attempted while no bytes are stored.
    #[error("ring buffer is empty")]
    BufferEmpty,
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        let kind = match error {
            Error::EmptyInput => io::ErrorKind::InvalidInput,
            Error::BufferEmpty => io::ErrorKind::UnexpectedEof,
        };

        io::Error::new(kind, error)
    }
}

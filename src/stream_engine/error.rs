use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// Referencing an unknown stream, deleting missing ids or trimming past the
/// end of a stream are **not** errors; they are defined to behave as if an
/// empty stream existed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Malformed input the engine can detect on its own, e.g. a read whose
    /// stream-name and after-id lists differ in length. State is untouched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A thread panicked while holding the engine lock.
    #[error("stream engine lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, StreamError>;

use crate::stream_engine::StreamError;
use thiserror::Error;

/// Why a command line could not be parsed or executed.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Invalid quoting")]
    InvalidQuoting,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} requires {expected}")]
    WrongArity {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Unknown {command} option: {option}")]
    UnknownOption {
        command: &'static str,
        option: String,
    },

    /// A token that failed numeric validation.
    #[error("{0}")]
    InvalidValue(String),

    #[error(transparent)]
    Stream(#[from] StreamError),

    /// Writing the command's output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

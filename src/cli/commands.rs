use crate::stream_engine::{Field, StreamId, TrimStrategy};
use std::time::Duration;

/// A parsed interpreter command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Append an entry and print its id
    Add { stream: String, fields: Vec<Field> },

    /// Read from one or more streams, optionally blocking
    Read {
        count: Option<usize>,
        block: Option<Duration>,
        streams: Vec<String>,
        ids: Vec<StreamId>,
    },

    /// Print an inclusive id range of one stream
    Range {
        stream: String,
        start: StreamId,
        end: StreamId,
        count: Option<usize>,
    },

    /// Print the number of live entries
    Len { stream: String },

    /// Delete entries by id and print how many were removed
    Del { stream: String, ids: Vec<StreamId> },

    /// Trim a stream and print how many entries were removed
    Trim {
        stream: String,
        strategy: TrimStrategy,
    },

    /// Print the command summary
    Help,
}

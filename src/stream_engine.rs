mod constants;
pub use constants::*;

mod engine;
pub use engine::StreamEngine;

mod error;
pub use error::{Result, StreamError};

mod read_cancellation;
pub use read_cancellation::ReadCancellation;

mod read_options;
pub use read_options::{ReadOptions, ReadResult};

mod stream;
pub use stream::Stream;

mod stream_indexer;
pub use stream_indexer::{StreamHandle, StreamIndexer};

mod trim_strategy;
pub use trim_strategy::TrimStrategy;

pub mod digest;

pub mod traits;

pub use streamlog_entry::{Entry, Field, StreamId, fields_from_pairs};

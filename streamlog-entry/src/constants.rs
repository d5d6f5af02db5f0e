use crate::StreamId;

/// Smallest representable id. Used as the open lower bound of a range (`-`).
pub const MIN_STREAM_ID: StreamId = StreamId::MIN;

/// Largest representable id. Used as the open upper bound of a range (`+`).
pub const MAX_STREAM_ID: StreamId = StreamId::MAX;

/// Id assigned to the first entry appended to a stream.
pub const FIRST_STREAM_ID: StreamId = 0;

use crate::stream_engine::{Field, Result, StreamId, TrimStrategy};

pub trait StreamWriter {
    /// Appends an entry to `stream_name`, creating the stream on first use.
    ///
    /// The id is taken from the stream's counter and the entry is inserted in
    /// the same exclusive step, then **every** blocked reader is woken.
    ///
    /// # Parameters:
    /// - `stream_name`: Any string, including the empty string.
    /// - `fields`: Ordered field/value pairs. May be empty; names may repeat.
    ///
    /// # Returns:
    /// - `Ok(id)`: The id assigned to the new entry.
    /// - `Err(StreamError::LockPoisoned)`: If a previous holder of the engine
    ///   lock panicked.
    fn append(&self, stream_name: &str, fields: Vec<Field>) -> Result<StreamId>;

    /// Deletes the entries with the given ids.
    ///
    /// Ids that are not live (never assigned, already deleted, trimmed, or
    /// repeated in `ids`) are skipped. Deleted ids are never reassigned.
    ///
    /// # Returns:
    /// - `Ok(count)`: The number of entries actually removed.
    fn delete(&self, stream_name: &str, ids: &[StreamId]) -> Result<usize>;

    /// Evicts the oldest entries of `stream_name` according to `strategy`.
    ///
    /// # Returns:
    /// - `Ok(count)`: The number of entries removed.
    ///
    /// # Notes:
    /// - `MaxLen(n)` removes nothing when the stream holds `n` or fewer entries.
    /// - `MinId(t)` removes ids strictly below `t`.
    fn trim(&self, stream_name: &str, strategy: TrimStrategy) -> Result<usize>;
}

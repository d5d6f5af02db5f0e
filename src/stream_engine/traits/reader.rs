use crate::stream_engine::{Entry, ReadOptions, ReadResult, Result, StreamId};

pub trait StreamReader {
    /// Reads every entry with `id >= after_id` from each requested stream.
    ///
    /// `stream_names` and `after_ids` are parallel lists. Streams are created
    /// on first reference, so each requested name is present in the result;
    /// if a name is repeated, its last `(name, after_id)` pair wins.
    ///
    /// # Blocking:
    /// - Without [`ReadOptions::block`], the streams are evaluated once.
    /// - With a block duration, if no requested stream has data the caller is
    ///   suspended (without holding the engine lock) until an append wakes it
    ///   and data is found, the duration elapses, or the read's
    ///   [`crate::ReadCancellation`] is cancelled. Timing out or being
    ///   cancelled is not an error; the (possibly all-empty) result is returned.
    ///
    /// # Returns:
    /// - `Ok(ReadResult)`: Name → entries, ascending by id, each list capped
    ///   at [`ReadOptions::count`] when given.
    /// - `Err(StreamError::InvalidArgument)`: If the two lists differ in
    ///   length, or the cancellation handle belongs to another engine.
    fn read<S: AsRef<str>>(
        &self,
        stream_names: &[S],
        after_ids: &[StreamId],
        options: &ReadOptions,
    ) -> Result<ReadResult>;

    /// Returns entries with `start_id <= id <= end_id`, ascending.
    ///
    /// Use [`crate::MIN_STREAM_ID`] / [`crate::MAX_STREAM_ID`] for open bounds.
    /// Inverted bounds and unknown streams yield an empty list.
    fn range(
        &self,
        stream_name: &str,
        start_id: StreamId,
        end_id: StreamId,
        limit: Option<usize>,
    ) -> Result<Vec<Entry>>;

    /// Number of live entries in the stream.
    ///
    /// Referencing a stream through `length` creates it (empty), which is
    /// observable through [`Self::contains_stream`].
    fn length(&self, stream_name: &str) -> Result<usize>;

    /// Equivalent to `length(stream_name)? == 0`.
    fn is_empty(&self, stream_name: &str) -> Result<bool>;

    /// Most recently assigned id, `None` before the first append.
    ///
    /// Does **not** create the stream.
    fn last_id(&self, stream_name: &str) -> Result<Option<StreamId>>;

    /// Whether any operation has referenced (and so created) the stream.
    ///
    /// Does **not** create the stream.
    fn contains_stream(&self, stream_name: &str) -> Result<bool>;

    /// Number of streams created so far.
    fn stream_count(&self) -> Result<usize>;
}

use crate::stream_engine::{Entry, ReadCancellation};
use std::collections::BTreeMap;
use std::time::Duration;

/// Result of a read: stream name → entries in ascending id order.
///
/// Every requested stream is present; a stream with nothing at or after the
/// requested id maps to an empty list.
pub type ReadResult = BTreeMap<String, Vec<Entry>>;

/// Optional knobs for [`crate::stream_engine::traits::StreamReader::read`].
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use streamlog::ReadOptions;
///
/// let options = ReadOptions::new()
///     .block(Duration::from_millis(200))
///     .count(10);
///
/// assert_eq!(options.block_duration(), Some(Duration::from_millis(200)));
/// assert_eq!(options.limit(), Some(10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    block: Option<Duration>,
    count: Option<usize>,
    cancellation: Option<ReadCancellation>,
}

impl ReadOptions {
    /// Non-blocking read with no per-stream limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits up to `duration` for data when the first evaluation finds none.
    /// A zero duration returns immediately.
    pub fn block(mut self, duration: Duration) -> Self {
        self.block = Some(duration);
        self
    }

    /// Caps each stream's result at `count` entries.
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Lets another thread end a blocking read early.
    pub fn cancellation(mut self, cancellation: ReadCancellation) -> Self {
        self.cancellation = Some(cancellation);
        self
    }

    #[inline]
    pub fn block_duration(&self) -> Option<Duration> {
        self.block
    }

    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.count
    }

    #[inline]
    pub fn cancellation_handle(&self) -> Option<&ReadCancellation> {
        self.cancellation.as_ref()
    }

    #[inline]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(ReadCancellation::is_cancelled)
    }
}

use crate::stream_engine::traits::{StreamReader, StreamWriter};
use crate::stream_engine::{
    Entry, Field, ReadCancellation, ReadOptions, ReadResult, Result, StreamError, StreamHandle,
    StreamId, StreamIndexer, TrimStrategy,
};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// State shared between an engine and the cancellation handles it issues.
pub(crate) struct EngineShared {
    /// Every stream, behind the single exclusive region.
    pub(crate) indexer: Mutex<StreamIndexer>,
    /// Broadcast on every append ("new data may be available").
    pub(crate) new_data: Condvar,
}

/// In-memory, append-only multi-stream log.
///
/// A `StreamEngine` owns a set of named streams and is meant to be shared by
/// reference (typically an `Arc<StreamEngine>`) between any number of
/// producer and consumer threads. Each engine is fully independent; there is
/// no process-wide state.
///
/// ## Concurrency
/// - All mutations (append, delete, trim) and all point-in-time queries
///   (read's evaluation, range, length) run under one exclusive lock, so no
///   caller ever observes a stream mid-mutation.
/// - Id assignment and insertion are a single step under that lock, giving
///   each stream a total order that matches id order.
/// - Only a blocking read suspends, and it waits on a condition variable that
///   releases the lock. Producers are never blocked by waiting readers.
/// - Appends wake **all** waiting readers. A woken reader re-evaluates its
///   streams under the lock before deciding to return or keep waiting, so
///   spurious wakeups and wakeups meant for other streams are harmless.
///
/// # Examples
/// ```
/// use streamlog::{ReadOptions, StreamEngine, fields_from_pairs};
/// use streamlog::traits::{StreamReader, StreamWriter};
///
/// let engine = StreamEngine::new();
/// let id = engine.append("events", fields_from_pairs([("kind", "login")])).unwrap();
///
/// let result = engine.read(&["events"], &[0], &ReadOptions::new()).unwrap();
/// assert_eq!(result["events"][0].id(), id);
/// ```
pub struct StreamEngine {
    shared: Arc<EngineShared>,
}

impl Default for StreamEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamEngine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(EngineShared {
                indexer: Mutex::new(StreamIndexer::new()),
                new_data: Condvar::new(),
            }),
        }
    }

    /// Issues a cancellation handle for blocking reads on this engine.
    pub fn cancellation(&self) -> ReadCancellation {
        ReadCancellation::new(Arc::clone(&self.shared))
    }

    /// Acquires the exclusive region.
    fn lock_indexer(&self) -> Result<MutexGuard<'_, StreamIndexer>> {
        self.shared
            .indexer
            .lock()
            .map_err(|_| StreamError::LockPoisoned)
    }

    /// Evaluates a read request against the current state.
    ///
    /// Must be called with the exclusive region held.
    fn collect_entries(
        indexer: &StreamIndexer,
        requests: &[(String, StreamHandle, StreamId)],
        limit: Option<usize>,
    ) -> ReadResult {
        let mut result = ReadResult::new();

        for (name, handle, after_id) in requests {
            let entries = indexer.stream(*handle).entries_from(*after_id, limit);
            result.insert(name.clone(), entries);
        }

        result
    }

    #[inline]
    fn has_entries(result: &ReadResult) -> bool {
        result.values().any(|entries| !entries.is_empty())
    }

    /// Suspends until data arrives for `requests`, `block` elapses, or the
    /// read is cancelled. Returns the last evaluation.
    ///
    /// # Locks:
    /// - Entered with the exclusive region held; the region is released while
    ///   parked on `new_data` and re-acquired before every evaluation.
    fn wait_for_entries<'a>(
        &'a self,
        mut indexer: MutexGuard<'a, StreamIndexer>,
        requests: &[(String, StreamHandle, StreamId)],
        options: &ReadOptions,
        block: Duration,
    ) -> Result<ReadResult> {
        // An unrepresentable deadline means "wait until woken".
        let deadline = Instant::now().checked_add(block);

        loop {
            if options.is_cancelled() {
                debug!(streams = requests.len(), "blocking read cancelled");
                return Ok(Self::collect_entries(&indexer, requests, options.limit()));
            }

            indexer = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        debug!(
                            streams = requests.len(),
                            block_ms = block.as_millis() as u64,
                            "blocking read timed out"
                        );
                        return Ok(Self::collect_entries(&indexer, requests, options.limit()));
                    }

                    self.shared
                        .new_data
                        .wait_timeout(indexer, deadline - now)
                        .map_err(|_| StreamError::LockPoisoned)?
                        .0
                }
                None => self
                    .shared
                    .new_data
                    .wait(indexer)
                    .map_err(|_| StreamError::LockPoisoned)?,
            };

            let result = Self::collect_entries(&indexer, requests, options.limit());
            if Self::has_entries(&result) {
                debug!(streams = requests.len(), "blocking read woken with data");
                return Ok(result);
            }

            trace!("blocking read woken without data, waiting again");
        }
    }
}

impl StreamWriter for StreamEngine {
    fn append(&self, stream_name: &str, fields: Vec<Field>) -> Result<StreamId> {
        let id = {
            let mut indexer = self.lock_indexer()?;
            indexer.get_or_create(stream_name).append(fields)
        };

        // Waiters re-check under the lock, so notifying after release cannot
        // lose a wakeup.
        self.shared.new_data.notify_all();

        trace!(stream = stream_name, id, "appended entry");
        Ok(id)
    }

    fn delete(&self, stream_name: &str, ids: &[StreamId]) -> Result<usize> {
        let mut indexer = self.lock_indexer()?;
        let deleted = indexer.get_or_create(stream_name).delete(ids);

        debug!(
            stream = stream_name,
            requested = ids.len(),
            deleted,
            "deleted entries"
        );
        Ok(deleted)
    }

    fn trim(&self, stream_name: &str, strategy: TrimStrategy) -> Result<usize> {
        let mut indexer = self.lock_indexer()?;
        let stream = indexer.get_or_create(stream_name);
        let removed = stream.trim(strategy);

        debug!(
            stream = stream_name,
            %strategy,
            removed,
            remaining = stream.len(),
            "trimmed stream"
        );
        Ok(removed)
    }
}

impl StreamReader for StreamEngine {
    fn read<S: AsRef<str>>(
        &self,
        stream_names: &[S],
        after_ids: &[StreamId],
        options: &ReadOptions,
    ) -> Result<ReadResult> {
        if stream_names.len() != after_ids.len() {
            warn!(
                streams = stream_names.len(),
                ids = after_ids.len(),
                "rejected read with mismatched stream and id lists"
            );
            return Err(StreamError::InvalidArgument(format!(
                "got {} stream names but {} ids",
                stream_names.len(),
                after_ids.len()
            )));
        }

        if let Some(cancellation) = options.cancellation_handle() {
            if !cancellation.is_bound_to(&self.shared) {
                return Err(StreamError::InvalidArgument(
                    "cancellation handle belongs to a different engine".to_string(),
                ));
            }
        }

        let mut indexer = self.lock_indexer()?;

        // Resolve every name once; reading creates streams on first reference.
        let requests: Vec<(String, StreamHandle, StreamId)> = stream_names
            .iter()
            .zip(after_ids)
            .map(|(name, &after_id)| {
                let name = name.as_ref();
                (name.to_owned(), indexer.intern(name), after_id)
            })
            .collect();

        let result = Self::collect_entries(&indexer, &requests, options.limit());

        match options.block_duration() {
            Some(block) if !block.is_zero() && !Self::has_entries(&result) => {
                trace!(
                    streams = requests.len(),
                    block_ms = block.as_millis() as u64,
                    "no data yet, blocking"
                );
                self.wait_for_entries(indexer, &requests, options, block)
            }
            _ => Ok(result),
        }
    }

    fn range(
        &self,
        stream_name: &str,
        start_id: StreamId,
        end_id: StreamId,
        limit: Option<usize>,
    ) -> Result<Vec<Entry>> {
        let mut indexer = self.lock_indexer()?;
        let entries = indexer
            .get_or_create(stream_name)
            .range(start_id, end_id, limit);

        trace!(
            stream = stream_name,
            start_id,
            end_id,
            returned = entries.len(),
            "range query"
        );
        Ok(entries)
    }

    fn length(&self, stream_name: &str) -> Result<usize> {
        let mut indexer = self.lock_indexer()?;
        Ok(indexer.get_or_create(stream_name).len())
    }

    fn is_empty(&self, stream_name: &str) -> Result<bool> {
        self.length(stream_name).map(|len| len == 0)
    }

    fn last_id(&self, stream_name: &str) -> Result<Option<StreamId>> {
        let indexer = self.lock_indexer()?;
        Ok(indexer.get(stream_name).and_then(|stream| stream.last_id()))
    }

    fn contains_stream(&self, stream_name: &str) -> Result<bool> {
        let indexer = self.lock_indexer()?;
        Ok(indexer.contains(stream_name))
    }

    fn stream_count(&self) -> Result<usize> {
        let indexer = self.lock_indexer()?;
        Ok(indexer.len())
    }
}

use crate::stream_engine::{Entry, FIRST_STREAM_ID, Field, MAX_STREAM_ID, StreamId, TrimStrategy};
use std::collections::BTreeMap;

/// One named, totally ordered collection of entries plus its id counter.
///
/// `Stream` itself is not synchronized. [`crate::StreamEngine`] owns every
/// stream behind its lock and is the only place that mutates them
/// concurrently.
///
/// ## Invariants
/// - Entries are keyed and ordered by id; ids are strictly increasing in
///   insertion order.
/// - `next_id` only ever grows, so an id is never handed out twice, even
///   after the entry holding it was deleted or trimmed.
/// - `last_id` is the most recently **assigned** id and is not rolled back by
///   deletes or trims.
#[derive(Debug, Clone)]
pub struct Stream {
    entries: BTreeMap<StreamId, Entry>,
    next_id: StreamId,
    last_id: Option<StreamId>,
}

impl Default for Stream {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: FIRST_STREAM_ID,
            last_id: None,
        }
    }

    /// Assigns the next id to `fields` and inserts the resulting entry.
    ///
    /// Id assignment and insertion happen in one step on `&mut self`, so
    /// under the engine lock concurrent appends are totally ordered by id.
    ///
    /// # Returns:
    /// - The id assigned to the new entry.
    pub fn append(&mut self, fields: Vec<Field>) -> StreamId {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.insert(id, Entry::new(id, fields));
        self.last_id = Some(id);

        id
    }

    /// Returns entries with `start_id <= id <= end_id` in ascending order.
    ///
    /// # Parameters:
    /// - `start_id` / `end_id`: Inclusive bounds. `start_id > end_id` yields
    ///   an empty result rather than an error.
    /// - `limit`: Optional cap on the number of returned entries.
    pub fn range(&self, start_id: StreamId, end_id: StreamId, limit: Option<usize>) -> Vec<Entry> {
        if start_id > end_id {
            return Vec::new();
        }

        let matching = self.entries.range(start_id..=end_id).map(|(_, entry)| entry);

        match limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        }
    }

    /// Returns every entry with `id >= after_id`, optionally capped at `limit`.
    #[inline]
    pub fn entries_from(&self, after_id: StreamId, limit: Option<usize>) -> Vec<Entry> {
        self.range(after_id, MAX_STREAM_ID, limit)
    }

    /// Removes the entries whose ids appear in `ids`.
    ///
    /// Missing ids and repeated ids are skipped, so the result does not depend
    /// on the order of `ids`.
    ///
    /// # Returns:
    /// - The number of entries actually removed.
    pub fn delete(&mut self, ids: &[StreamId]) -> usize {
        ids.iter()
            .filter(|&&id| self.entries.remove(&id).is_some())
            .count()
    }

    /// Evicts the oldest entries according to `strategy`.
    ///
    /// # Returns:
    /// - The number of entries removed.
    #[inline]
    pub fn trim(&mut self, strategy: TrimStrategy) -> usize {
        strategy.apply(&mut self.entries)
    }

    /// Returns the entry stored under `id`, if it is still live.
    #[inline]
    pub fn get(&self, id: StreamId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Number of live (non-deleted, non-trimmed) entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The id the next append will receive.
    #[inline]
    pub fn next_id(&self) -> StreamId {
        self.next_id
    }

    /// The most recently assigned id, or `None` before the first append.
    #[inline]
    pub fn last_id(&self) -> Option<StreamId> {
        self.last_id
    }

    /// Smallest live id.
    #[inline]
    pub fn first_live_id(&self) -> Option<StreamId> {
        self.entries.keys().next().copied()
    }
}

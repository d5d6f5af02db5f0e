use crate::stream_engine::{Entry, StreamId};
use std::collections::BTreeMap;
use std::fmt;

/// Eviction policy for [`crate::stream_engine::traits::StreamWriter::trim`].
///
/// Both strategies evict in ascending id order (oldest first), so the entries
/// that survive a trim are always a contiguous suffix of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimStrategy {
    /// Keep only the `n` most recent entries. `MaxLen(0)` empties the stream.
    MaxLen(usize),

    /// Remove every entry whose id is **strictly less** than the threshold.
    MinId(StreamId),
}

impl TrimStrategy {
    /// Evicts entries from `entries` according to the strategy.
    ///
    /// # Returns:
    /// - The number of entries removed (`0` when nothing qualifies).
    pub(crate) fn apply(&self, entries: &mut BTreeMap<StreamId, Entry>) -> usize {
        match *self {
            TrimStrategy::MaxLen(max_len) => {
                let excess = entries.len().saturating_sub(max_len);
                for _ in 0..excess {
                    entries.pop_first();
                }
                excess
            }
            TrimStrategy::MinId(min_id) => {
                // `split_off` keeps `[min_id, ..)` in the returned map.
                let retained = entries.split_off(&min_id);
                let removed = entries.len();
                *entries = retained;
                removed
            }
        }
    }
}

impl fmt::Display for TrimStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrimStrategy::MaxLen(max_len) => write!(f, "MAXLEN {max_len}"),
            TrimStrategy::MinId(min_id) => write!(f, "MINID {min_id}"),
        }
    }
}

use crate::stream_engine::engine::EngineShared;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation handle for blocking reads.
///
/// Obtained from [`crate::StreamEngine::cancellation`] and passed to a read via
/// [`crate::ReadOptions::cancellation`]. Calling [`Self::cancel`] from any
/// thread makes every read carrying this handle (or a clone of it) return
/// immediately with whatever it has found so far.
///
/// A handle is bound to the engine that created it; handing it to another
/// engine's read is rejected as an invalid argument.
#[derive(Clone)]
pub struct ReadCancellation {
    cancelled: Arc<AtomicBool>,
    shared: Arc<EngineShared>,
}

impl ReadCancellation {
    pub(crate) fn new(shared: Arc<EngineShared>) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            shared,
        }
    }

    /// Requests cancellation and wakes every blocked reader of the engine.
    ///
    /// Calling this more than once has no further effect.
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }

        // A waiter checks the flag while holding the lock and only releases it
        // by entering `wait`. Passing through the lock here means the waiter
        // either sees the flag or is already parked when we notify.
        drop(self.shared.indexer.lock());
        self.shared.new_data.notify_all();
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    #[inline]
    pub(crate) fn is_bound_to(&self, shared: &Arc<EngineShared>) -> bool {
        Arc::ptr_eq(&self.shared, shared)
    }
}

impl fmt::Debug for ReadCancellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadCancellation")
            .field("cancelled", &self.is_cancelled())
            .finish_non_exhaustive()
    }
}

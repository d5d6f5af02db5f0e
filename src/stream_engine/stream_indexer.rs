use crate::stream_engine::Stream;
use crate::stream_engine::digest::Xxh3BuildHasher;
use std::collections::HashMap;

/// Dense, stable index of a stream inside a [`StreamIndexer`].
///
/// Handles are never reused or invalidated: streams are created implicitly
/// and never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamHandle(usize);

impl StreamHandle {
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Name → stream registry.
///
/// Stream names are interned to a [`StreamHandle`] and the streams live in a
/// dense arena indexed by that handle. The registry carries no
/// synchronization of its own; [`crate::StreamEngine`] keeps it behind its
/// single exclusive lock so that name lookup, creation and mutation form one
/// atomic step.
#[derive(Debug, Default)]
pub struct StreamIndexer {
    handles: HashMap<String, StreamHandle, Xxh3BuildHasher>,
    streams: Vec<Stream>,
}

impl StreamIndexer {
    pub fn new() -> Self {
        Self {
            handles: HashMap::with_hasher(Xxh3BuildHasher),
            streams: Vec::new(),
        }
    }

    /// Looks up the handle for `name` without creating the stream.
    #[inline]
    pub fn handle(&self, name: &str) -> Option<StreamHandle> {
        self.handles.get(name).copied()
    }

    /// Returns the handle for `name`, creating an empty stream first if this
    /// is the first reference to it. The empty string is a valid name.
    pub fn intern(&mut self, name: &str) -> StreamHandle {
        if let Some(handle) = self.handle(name) {
            return handle;
        }

        let handle = StreamHandle(self.streams.len());
        self.streams.push(Stream::new());
        self.handles.insert(name.to_owned(), handle);

        handle
    }

    /// Returns the stream for `name`, if it has been created.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Stream> {
        self.handle(name).map(|handle| &self.streams[handle.0])
    }

    /// Returns the stream for `name`, creating it on first reference.
    #[inline]
    pub fn get_or_create(&mut self, name: &str) -> &mut Stream {
        let handle = self.intern(name);
        &mut self.streams[handle.0]
    }

    /// Resolves a handle previously returned by this indexer.
    #[inline]
    pub fn stream(&self, handle: StreamHandle) -> &Stream {
        &self.streams[handle.0]
    }

    #[inline]
    pub fn stream_mut(&mut self, handle: StreamHandle) -> &mut Stream {
        &mut self.streams[handle.0]
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.handles.contains_key(name)
    }

    /// Number of streams created so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Iterates over `(name, stream)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stream)> {
        self.handles
            .iter()
            .map(|(name, handle)| (name.as_str(), &self.streams[handle.0]))
    }
}

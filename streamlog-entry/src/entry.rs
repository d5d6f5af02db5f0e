use std::fmt;
use std::sync::Arc;

/// Per-stream entry identifier.
///
/// Ids are assigned by a per-stream counter starting at
/// [`crate::constants::FIRST_STREAM_ID`] and are only unique **within** one
/// stream. Negative values are valid as query bounds but are never assigned.
pub type StreamId = i64;

/// A single `(name, value)` pair. Names may repeat within an entry.
pub type Field = (String, String);

/// Builds an owned field list from borrowed pairs.
///
/// # Examples
/// ```
/// use streamlog_entry::fields_from_pairs;
///
/// let fields = fields_from_pairs([("sensor", "a1"), ("temp", "21.5")]);
/// assert_eq!(fields[1], ("temp".to_string(), "21.5".to_string()));
/// ```
pub fn fields_from_pairs<I, K, V>(pairs: I) -> Vec<Field>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// One appended record: an id plus an ordered list of field/value pairs.
///
/// An `Entry` is immutable once created. The field list is reference-counted,
/// so handing an entry out of the engine only bumps a counter; the copy a
/// reader holds stays valid after the entry is deleted or trimmed from its
/// stream.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    id: StreamId,
    fields: Arc<[Field]>,
}

impl Entry {
    /// Creates an entry with the given id and fields.
    pub fn new(id: StreamId, fields: impl Into<Arc<[Field]>>) -> Self {
        Self {
            id,
            fields: fields.into(),
        }
    }

    /// Returns the id this entry was assigned at append time.
    #[inline]
    pub fn id(&self) -> StreamId {
        self.id
    }

    /// Returns the field/value pairs in insertion order.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the value of the **first** field named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of field/value pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Splits the entry into its id and an owned copy of its fields.
    pub fn into_parts(self) -> (StreamId, Vec<Field>) {
        (self.id, self.fields.to_vec())
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("fields", &&*self.fields)
            .finish()
    }
}

impl<'a> IntoIterator for &'a Entry {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

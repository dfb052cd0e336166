use crate::common::exception::TableError;

/// Keyed store operations shared by the course tables.
///
/// `K` is the lookup key as callers spell it, `V` the stored value which
/// carries its own key.
pub trait HashTable<K: ?Sized, V> {
    /// Inserts `value`, rejecting it if its key cannot be hashed.
    fn insert(&mut self, value: V) -> Result<(), TableError>;

    /// Performs a point query, returning the first value stored under `key`.
    fn find(&self, key: &K) -> Option<&V>;

    /// Unlinks the first value stored under `key` and hands it back.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Number of stored values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

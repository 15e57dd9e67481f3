//! RecordStore trait: the abstract key-value interface beneath a registry.
//!
//! A registry never talks to a concrete map. Anything that can hold one
//! record per key, hand out in-place mutable access, and enumerate its
//! entries can back a registry.

/// Key-value storage for permission records.
///
/// # Design Notes
///
/// - **One record per key**: `put` replaces whatever was there.
/// - **No removal**: records are mutated in place and never deleted, so the
///   trait has no `remove`.
/// - **Synchronous**: every call is a bounded lookup or write. Callers are
///   already serialized by the host ledger.
pub trait RecordStore<K, V> {
    /// Get the record at `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Get mutable access to the record at `key`, if any.
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Insert or replace the record at `key`.
    ///
    /// Returns the previous record, if there was one.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Number of records held.
    fn len(&self) -> usize;

    /// Iterate over all records.
    ///
    /// Order is backend-defined.
    fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
    where
        K: 'a,
        V: 'a;

    /// Check if a record exists at `key`.
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

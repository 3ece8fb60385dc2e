//! In-memory [`StoragePort`] adapter.
//!
//! Keys are `(namespace, key)` pairs. Used as the host-side store and as
//! the storage double in tests.

use std::collections::HashMap;

use crate::app::ports::StoragePort;
use crate::error::StorageError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<(String, String), Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StoragePort for MemoryStore {
    fn read(&self, namespace: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        self.entries
            .get(&(namespace.to_owned(), key.to_owned()))
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError> {
        self.entries
            .insert((namespace.to_owned(), key.to_owned()), data.to_vec());
        Ok(())
    }

    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError> {
        self.entries
            .remove(&(namespace.to_owned(), key.to_owned()))
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }

    fn exists(&self, namespace: &str, key: &str) -> bool {
        self.entries
            .contains_key(&(namespace.to_owned(), key.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_delete() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("ns", "k"), Err(StorageError::NotFound));

        store.write("ns", "k", &[1, 2, 3]).unwrap();
        assert!(store.exists("ns", "k"));
        assert_eq!(store.read("ns", "k").unwrap(), vec![1, 2, 3]);

        store.delete("ns", "k").unwrap();
        assert!(!store.exists("ns", "k"));
        assert_eq!(store.delete("ns", "k"), Err(StorageError::NotFound));
    }

    #[test]
    fn namespaces_are_isolated() {
        let mut store = MemoryStore::new();
        store.write("a", "k", &[1]).unwrap();
        store.write("b", "k", &[2]).unwrap();
        assert_eq!(store.read("a", "k").unwrap(), vec![1]);
        assert_eq!(store.read("b", "k").unwrap(), vec![2]);
    }
}

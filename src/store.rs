use mockall::automock;
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Operations a command can perform against a session's key-value map.
///
/// All operations are total: a missing key reads as the empty string and
/// deleting a missing key does nothing.
#[automock]
pub trait StoreBase: Send + Sync {
    fn get(&self, key: &str) -> String;

    fn set(&self, key: String, value: String);

    fn update(&self, key: String, value: String);

    fn delete(&self, key: &str);
}

/// Per-session key-value store
///
/// Cloning `Store` only increments an atomic reference count, so clones
/// observe the same map. Every session builds its own with `Store::new`,
/// which is never handed to another session.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Readers proceed concurrently, a writer excludes everyone else.
    ///
    /// The critical sections hold no `.await`, so `std::sync::RwLock`
    /// is used rather than the tokio one.
    shared: Arc<RwLock<HashMap<String, String>>>,
}

impl Store {
    pub fn new() -> Store {
        Store::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.read(|data| data.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock still guards a consistent map: a single insert or
    // remove either happened or it didn't.
    fn read<T>(&self, f: impl FnOnce(&HashMap<String, String>) -> T) -> T {
        let guard = self.shared.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> T {
        let mut guard = self.shared.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl StoreBase for Store {
    /// Get the value associated with `key`
    ///
    /// Returns the empty string if the key is absent, which callers cannot
    /// tell apart from a key explicitly set to the empty string.
    fn get(&self, key: &str) -> String {
        self.read(|data| data.get(key).cloned().unwrap_or_default())
    }

    /// Insert `value` at `key`, overwriting any previous value
    fn set(&self, key: String, value: String) {
        self.write(|data| {
            data.insert(key, value);
        })
    }

    /// Same contract as `set`: the key does not have to exist already
    fn update(&self, key: String, value: String) {
        self.write(|data| {
            data.insert(key, value);
        })
    }

    fn delete(&self, key: &str) {
        self.write(|data| {
            data.remove(key);
        })
    }
}

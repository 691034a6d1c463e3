//! In-Memory State Storage Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{StateStoragePort, StorageError};

/// 内存状态存储
pub struct InMemoryStateStorage {
    entries: DashMap<String, String>,
}

impl InMemoryStateStorage {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryStateStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStoragePort for InMemoryStateStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

// src/store/memory.rs
use super::tree::{get_at, set_at};
use super::{DocumentStore, StorePath};
use crate::errors::StoreError;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

/// Process-local store, used as the substitutable fake in tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    root: RwLock<Value>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing tree, rooted above `properties`.
    pub fn with_data(root: Value) -> Self {
        Self {
            root: RwLock::new(root),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn read(&self, path: &StorePath) -> Result<Option<Value>, StoreError> {
        let root = self.root.read().await;
        Ok(get_at(&root, path.segments()).cloned())
    }

    async fn write(&self, path: &StorePath, value: &Value) -> Result<(), StoreError> {
        let mut root = self.root.write().await;
        set_at(&mut root, path.segments(), value.clone());
        Ok(())
    }
}

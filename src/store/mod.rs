//! Key-path addressed document stores.
//!
//! A store holds one JSON tree. Paths are slash-separated segments from the
//! root, e.g. `properties/New Jersey/monarch`. A path holding `null` or an empty
//! object has no data; reads report that as `Ok(None)`.

mod memory;
mod rest;
mod sqlite;
mod tree;

use crate::errors::StoreError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

pub use memory::InMemoryStore;
pub use rest::RestStore;
pub use sqlite::SqliteStore;

/// Top-level key all property data lives under.
pub const PROPERTIES_ROOT: &str = "properties";

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// One-shot read of the value at `path`; `None` when nothing is stored there.
    async fn read(&self, path: &StorePath) -> Result<Option<Value>, StoreError>;

    /// Replaces the whole value at `path`. Writing `null` deletes it.
    async fn write(&self, path: &StorePath, value: &Value) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorePath {
    segments: Vec<String>,
}

impl StorePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn properties() -> Self {
        Self::root().child(PROPERTIES_ROOT)
    }

    pub fn child(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

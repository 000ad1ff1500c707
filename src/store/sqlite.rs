// src/store/sqlite.rs
use super::tree::{get_at, set_at};
use super::{DocumentStore, StorePath};
use crate::errors::StoreError;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use serde_json::Value;
use std::cell::RefCell;
use std::time::Duration;
use tracing::debug;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    id   INTEGER PRIMARY KEY CHECK (id = 1),
    body TEXT NOT NULL
);
"#;

// Thread-local connection slot, tagged with the file it was opened for.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = RefCell::new(None);
}

/// Local SQLite file holding the whole document tree as one JSON row.
///
/// Lets the app run against real persisted data without a remote store.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: String,
}

impl SqliteStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Provides this thread's connection to the closure, opening it (and
    /// applying the schema) on first use.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();

                let stale = !matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| StoreError::Db(format!("Open DB failed: {e}")))?;
                    conn.busy_timeout(Duration::from_secs(5))?;
                    conn.execute_batch(SCHEMA)
                        .map_err(|e| StoreError::Db(format!("Failed to apply schema: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }

                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(StoreError::Internal("connection slot empty".into())),
                }
            })
            .map_err(|_| StoreError::Internal("thread-local connection unavailable".into()))?
    }

    fn read_blocking(&self, path: &StorePath) -> Result<Option<Value>, StoreError> {
        self.with_conn(|conn| {
            let tree = load_tree(conn)?;
            Ok(get_at(&tree, path.segments()).cloned())
        })
    }

    fn write_blocking(&self, path: &StorePath, value: Value) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let mut tree = load_tree(&tx)?;
            set_at(&mut tree, path.segments(), value);
            save_tree(&tx, &tree)?;

            tx.commit()?;
            Ok(())
        })
    }
}

fn load_tree(conn: &Connection) -> Result<Value, StoreError> {
    let body: Option<String> = conn
        .query_row("SELECT body FROM documents WHERE id = 1", [], |row| row.get(0))
        .optional()?;

    match body {
        Some(text) => serde_json::from_str(&text)
            .map_err(|e| StoreError::Decode(format!("stored document is not JSON: {e}"))),
        None => Ok(Value::Null),
    }
}

fn save_tree(conn: &Connection, tree: &Value) -> Result<(), StoreError> {
    if tree.is_null() {
        conn.execute("DELETE FROM documents WHERE id = 1", [])?;
        return Ok(());
    }

    let body = serde_json::to_string(tree).map_err(|e| StoreError::Decode(e.to_string()))?;
    conn.execute(
        r#"
        INSERT INTO documents (id, body) VALUES (1, ?1)
        ON CONFLICT(id) DO UPDATE SET body = excluded.body
        "#,
        params![body],
    )?;
    Ok(())
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn read(&self, path: &StorePath) -> Result<Option<Value>, StoreError> {
        debug!(db = %self.path, %path, "sqlite read");
        let store = self.clone();
        let path = path.clone();

        tokio::task::spawn_blocking(move || store.read_blocking(&path))
            .await
            .map_err(|e| StoreError::Internal(e.to_string()))?
    }

    async fn write(&self, path: &StorePath, value: &Value) -> Result<(), StoreError> {
        debug!(db = %self.path, %path, "sqlite write");
        let store = self.clone();
        let path = path.clone();
        let value = value.clone();

        tokio::task::spawn_blocking(move || store.write_blocking(&path, value))
            .await
            .map_err(|e| StoreError::Internal(e.to_string()))?
    }
}

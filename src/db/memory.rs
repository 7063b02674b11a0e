// SPDX-License-Identifier: MIT

//! In-memory document store backend.
//!
//! Holds JSON documents keyed by collection and document ID. Used for tests
//! and offline development; the production backend is Firestore.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Collection name -> (document ID -> document).
pub type Collections = HashMap<&'static str, BTreeMap<String, Value>>;

/// In-process document store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

fn codec_err(e: serde_json::Error) -> AppError {
    AppError::Database(e.to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a document by ID.
    pub async fn get<T: DeserializeOwned>(
        &self,
        col: &'static str,
        id: &str,
    ) -> Result<Option<T>, AppError> {
        let guard = self.inner.read().await;
        guard
            .get(col)
            .and_then(|docs| docs.get(id))
            .map(|doc| serde_json::from_value(doc.clone()).map_err(codec_err))
            .transpose()
    }

    /// Create or replace a document.
    pub async fn put<T: Serialize>(
        &self,
        col: &'static str,
        id: &str,
        doc: &T,
    ) -> Result<(), AppError> {
        let value = serde_json::to_value(doc).map_err(codec_err)?;
        let mut guard = self.inner.write().await;
        guard.entry(col).or_default().insert(id.to_string(), value);
        Ok(())
    }

    /// Delete a document; returns whether it existed.
    pub async fn delete(&self, col: &'static str, id: &str) -> Result<bool, AppError> {
        let mut guard = self.inner.write().await;
        Ok(guard
            .get_mut(col)
            .map(|docs| docs.remove(id).is_some())
            .unwrap_or(false))
    }

    /// All documents in a collection.
    pub async fn list<T: DeserializeOwned>(&self, col: &'static str) -> Result<Vec<T>, AppError> {
        let guard = self.inner.read().await;
        guard
            .get(col)
            .map(|docs| {
                docs.values()
                    .map(|doc| serde_json::from_value(doc.clone()).map_err(codec_err))
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    /// Documents whose string field equals `value`.
    pub async fn find_by_field<T: DeserializeOwned>(
        &self,
        col: &'static str,
        field: &str,
        value: &str,
    ) -> Result<Vec<T>, AppError> {
        let guard = self.inner.read().await;
        guard
            .get(col)
            .map(|docs| {
                docs.values()
                    .filter(|doc| doc.get(field).and_then(Value::as_str) == Some(value))
                    .map(|doc| serde_json::from_value(doc.clone()).map_err(codec_err))
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    /// Run several operations under a single write lock.
    ///
    /// The closure sees the whole store; everything it does is atomic with
    /// respect to the other methods here.
    pub async fn mutate<R>(
        &self,
        f: impl FnOnce(&mut Collections) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut guard = self.inner.write().await;
        f(&mut guard)
    }
}

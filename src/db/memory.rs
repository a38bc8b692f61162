// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store for local development and tests.

use crate::error::AppError;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Collections of JSON documents kept in insertion order.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    collections: Arc<DashMap<String, Vec<(String, serde_json::Value)>>>,
    /// When set, every operation fails with this reason.
    outage: Option<Arc<str>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that is reachable but fails every operation, for exercising
    /// degraded-store handling.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            outage: Some(Arc::from(reason)),
            ..Self::default()
        }
    }

    fn check_available(&self) -> Result<(), AppError> {
        match &self.outage {
            Some(reason) => Err(AppError::Database(format!(
                "Memory store unavailable: {}",
                reason
            ))),
            None => Ok(()),
        }
    }

    pub fn insert<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        record: &T,
    ) -> Result<(), AppError> {
        self.check_available()?;
        let value = serde_json::to_value(record)
            .map_err(|e| AppError::Database(format!("Failed to encode document: {}", e)))?;

        self.collections
            .entry(collection.to_string())
            .or_default()
            .push((id.to_string(), value));
        Ok(())
    }

    pub fn list<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<(String, T)>, AppError> {
        self.check_available()?;
        // Clone out so the shard lock is not held while decoding
        let entries = match self.collections.get(collection) {
            Some(docs) => docs.clone(),
            None => return Ok(Vec::new()),
        };

        entries
            .into_iter()
            .map(|(id, value)| {
                serde_json::from_value(value)
                    .map(|fields| (id.clone(), fields))
                    .map_err(|e| {
                        AppError::Database(format!("Failed to decode document {}: {}", id, e))
                    })
            })
            .collect()
    }

    pub fn first_ids(&self, collection: &str, limit: usize) -> Result<Vec<String>, AppError> {
        self.check_available()?;
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.iter().take(limit).map(|(id, _)| id.clone()).collect())
            .unwrap_or_default())
    }

    pub fn collection_ids(&self, limit: usize) -> Result<Vec<String>, AppError> {
        self.check_available()?;
        let mut names: Vec<String> = self
            .collections
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names.truncate(limit);
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_preserves_insertion_order() {
        let backend = MemoryBackend::new();
        backend.insert("trainer", "b", &json!({"name": "B"})).unwrap();
        backend.insert("trainer", "a", &json!({"name": "A"})).unwrap();

        let docs: Vec<(String, serde_json::Value)> = backend.list("trainer").unwrap();
        let ids: Vec<&str> = docs.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(backend.first_ids("trainer", 1).unwrap(), ["b"]);
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let backend = MemoryBackend::new();
        let docs: Vec<(String, serde_json::Value)> = backend.list("nope").unwrap();
        assert!(docs.is_empty());
        assert!(backend.first_ids("nope", 3).unwrap().is_empty());
    }

    #[test]
    fn test_decode_failure_is_database_error() {
        let backend = MemoryBackend::new();
        backend.insert("plan", "x", &json!({"unexpected": 1})).unwrap();

        let err = backend
            .list::<crate::models::MembershipPlan>("plan")
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_collection_ids_sorted_and_limited() {
        let backend = MemoryBackend::new();
        for name in ["lead", "booking", "trainer"] {
            backend.insert(name, "1", &json!({})).unwrap();
        }
        assert_eq!(backend.collection_ids(2).unwrap(), ["booking", "lead"]);
    }

    #[test]
    fn test_unavailable_backend_fails_every_operation() {
        let backend = MemoryBackend::unavailable("connection reset");

        let err = backend.insert("lead", "1", &json!({})).unwrap_err();
        assert!(matches!(err, AppError::Database(ref msg) if msg.contains("connection reset")));
        assert!(backend.list::<serde_json::Value>("lead").is_err());
        assert!(backend.first_ids("lead", 1).is_err());
        assert!(backend.collection_ids(10).is_err());
    }
}

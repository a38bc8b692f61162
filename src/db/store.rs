// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-wide document store handle.
//!
//! The handle is either connected to a backend or explicitly absent. Data
//! operations on an absent handle fail with [`AppError::NotConfigured`]; the
//! service itself keeps running so diagnostics stay reachable.

use super::firestore::FirestoreBackend;
use super::memory::MemoryBackend;
use crate::error::AppError;
use crate::models::Document;
use ring::rand::{SecureRandom, SystemRandom};
use serde::{de::DeserializeOwned, Serialize};

/// Random bytes per generated id (hex-encoded to 24 chars).
const ID_BYTES: usize = 12;

#[derive(Clone)]
enum Backend {
    Firestore(FirestoreBackend),
    Memory(MemoryBackend),
}

/// Where a connection string points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    Firestore { project_id: String },
    Memory,
}

impl StoreTarget {
    /// Parse `firestore://<project-id>` or `memory://`.
    pub fn parse(url: &str) -> Result<Self, AppError> {
        let url = url.trim();
        if let Some(project_id) = url.strip_prefix("firestore://") {
            let project_id = project_id.trim_end_matches('/');
            if project_id.is_empty() || project_id.contains('/') {
                return Err(AppError::Database(format!(
                    "Invalid Firestore project in DATABASE_URL: {:?}",
                    project_id
                )));
            }
            return Ok(StoreTarget::Firestore {
                project_id: project_id.to_string(),
            });
        }
        if url == "memory://" || url == "memory" {
            return Ok(StoreTarget::Memory);
        }
        Err(AppError::Database(format!(
            "Unsupported DATABASE_URL scheme: {:?}",
            url.split("://").next().unwrap_or(url)
        )))
    }
}

/// Shared document store handle.
#[derive(Clone)]
pub struct DocumentStore {
    backend: Option<Backend>,
    rng: SystemRandom,
}

impl DocumentStore {
    /// Connect using a `DATABASE_URL` value.
    ///
    /// Never fails: a missing, malformed or unreachable store yields an
    /// unconfigured handle and a warning.
    pub async fn connect(url: Option<&str>) -> Self {
        let Some(url) = url else {
            tracing::warn!("DATABASE_URL not set; running without a database");
            return Self::unconfigured();
        };

        let target = match StoreTarget::parse(url) {
            Ok(target) => target,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring DATABASE_URL");
                return Self::unconfigured();
            }
        };

        match target {
            StoreTarget::Memory => {
                tracing::info!("Using in-memory document store");
                Self::in_memory()
            }
            StoreTarget::Firestore { project_id } => {
                match FirestoreBackend::connect(&project_id).await {
                    Ok(backend) => Self::with_backend(Backend::Firestore(backend)),
                    Err(e) => {
                        tracing::warn!(error = %e, project = %project_id, "Firestore unavailable");
                        Self::unconfigured()
                    }
                }
            }
        }
    }

    /// Connect straight to a Firestore project.
    pub async fn firestore(project_id: &str) -> Result<Self, AppError> {
        let backend = FirestoreBackend::connect(project_id).await?;
        Ok(Self::with_backend(Backend::Firestore(backend)))
    }

    /// A fresh, empty in-process store.
    pub fn in_memory() -> Self {
        Self::with_backend(Backend::Memory(MemoryBackend::new()))
    }

    /// An in-process store that is connected but fails every operation.
    pub fn in_memory_unavailable(reason: &str) -> Self {
        Self::with_backend(Backend::Memory(MemoryBackend::unavailable(reason)))
    }

    /// A handle with no database behind it (offline mode).
    pub fn unconfigured() -> Self {
        Self {
            backend: None,
            rng: SystemRandom::new(),
        }
    }

    fn with_backend(backend: Backend) -> Self {
        Self {
            backend: Some(backend),
            rng: SystemRandom::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Database name for diagnostics.
    pub fn name(&self) -> Option<&str> {
        match self.backend.as_ref()? {
            Backend::Firestore(fs) => Some(fs.project_id()),
            Backend::Memory(_) => Some("memory"),
        }
    }

    /// Helper to get the backend or return an error if offline.
    fn backend(&self) -> Result<&Backend, AppError> {
        self.backend.as_ref().ok_or(AppError::NotConfigured)
    }

    fn generate_id(&self) -> Result<String, AppError> {
        let mut bytes = [0u8; ID_BYTES];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| anyhow::anyhow!("System RNG failed while generating document id"))?;
        Ok(hex::encode(bytes))
    }

    /// Insert a record and return its generated id.
    pub async fn create_document<T>(&self, collection: &str, record: &T) -> Result<String, AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        let backend = self.backend()?;
        let id = self.generate_id()?;

        match backend {
            Backend::Firestore(fs) => fs.insert(collection, &id, record).await?,
            Backend::Memory(mem) => mem.insert(collection, &id, record)?,
        }

        tracing::debug!(collection, id = %id, "Document created");
        Ok(id)
    }

    /// All documents in a collection, in store order.
    pub async fn get_documents<T>(&self, collection: &str) -> Result<Vec<Document<T>>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        let rows = match self.backend()? {
            Backend::Firestore(fs) => fs.list(collection).await?,
            Backend::Memory(mem) => mem.list(collection)?,
        };

        Ok(rows
            .into_iter()
            .map(|(id, fields)| Document { id, fields })
            .collect())
    }

    /// Ids of up to `limit` documents, in store order.
    pub async fn first_ids(&self, collection: &str, limit: u32) -> Result<Vec<String>, AppError> {
        match self.backend()? {
            Backend::Firestore(fs) => fs.first_ids(collection, limit).await,
            Backend::Memory(mem) => mem.first_ids(collection, limit as usize),
        }
    }

    pub async fn is_empty(&self, collection: &str) -> Result<bool, AppError> {
        Ok(self.first_ids(collection, 1).await?.is_empty())
    }

    /// Up to `limit` collection names.
    pub async fn list_collections(&self, limit: usize) -> Result<Vec<String>, AppError> {
        match self.backend()? {
            Backend::Firestore(fs) => fs.collection_ids(limit).await,
            Backend::Memory(mem) => mem.collection_ids(limit),
        }
    }
}

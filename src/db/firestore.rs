// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore backend for the document store.
//!
//! Documents are written under generated ids and read back with the
//! `_firestore_id` field the client injects into every document it returns.

use crate::error::AppError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A document as returned by the Firestore client, id included.
#[derive(Deserialize)]
struct FirestoreRecord<T> {
    #[serde(rename = "_firestore_id")]
    id: String,
    #[serde(flatten)]
    fields: T,
}

#[derive(Deserialize)]
struct FirestoreIdOnly {
    #[serde(rename = "_firestore_id")]
    id: String,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreBackend {
    client: firestore::FirestoreDb,
    project_id: String,
}

impl FirestoreBackend {
    /// Connect to Firestore for the given project.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn connect(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::connect_emulator(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client,
            project_id: project_id.to_string(),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn connect_emulator(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client,
            project_id: project_id.to_string(),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Insert a document under the given id.
    pub async fn insert<T>(&self, collection: &str, id: &str, record: &T) -> Result<(), AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        let _: () = self
            .client
            .fluent()
            .insert()
            .into(collection)
            .document_id(id)
            .object(record)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Read every document in a collection.
    pub async fn list<T>(&self, collection: &str) -> Result<Vec<(String, T)>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        let records: Vec<FirestoreRecord<T>> = self
            .client
            .fluent()
            .select()
            .from(collection)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(records.into_iter().map(|r| (r.id, r.fields)).collect())
    }

    /// Ids of the first `limit` documents in a collection.
    pub async fn first_ids(&self, collection: &str, limit: u32) -> Result<Vec<String>, AppError> {
        let records: Vec<FirestoreIdOnly> = self
            .client
            .fluent()
            .select()
            .from(collection)
            .limit(limit)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(records.into_iter().map(|r| r.id).collect())
    }

    /// Names of the root collections, at most `limit` of them.
    pub async fn collection_ids(&self, limit: usize) -> Result<Vec<String>, AppError> {
        let page = self
            .client
            .fluent()
            .list()
            .collections()
            .page_size(limit)
            .get_page()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(page.collection_ids.into_iter().take(limit).collect())
    }
}

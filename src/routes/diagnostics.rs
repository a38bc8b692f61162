// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store connectivity diagnostics.
//!
//! `/test` never fails at the HTTP level: a broken store shows up in the
//! status fields of a 200 response.

use crate::error::truncate_detail;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_LISTED_COLLECTIONS: usize = 10;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/test", get(test_database))
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let store = &state.store;
    if !store.is_configured() {
        response.database = "⚠️ Available but not initialized".to_string();
        return Json(response);
    }

    response.database = "✅ Available".to_string();
    response.database_url = Some(
        if state.config.database_url.is_some() {
            "✅ Set"
        } else {
            "❌ Not Set"
        }
        .to_string(),
    );
    response.database_name = Some(
        store
            .name()
            .unwrap_or("❌ Not Available")
            .to_string(),
    );
    response.connection_status = "Connected".to_string();

    match store.list_collections(MAX_LISTED_COLLECTIONS).await {
        Ok(collections) => {
            response.collections = collections;
            response.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Store diagnostics failed");
            response.database = format!(
                "⚠️ Connected but Error: {}",
                truncate_detail(&e.to_string())
            );
        }
    }

    Json(response)
}

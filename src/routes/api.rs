// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public API routes for the marketing site.

use crate::db::collections;
use crate::error::Result;
use crate::extract::ValidatedJson;
use crate::models::{Booking, Document, GymClass, Lead, MembershipPlan, Trainer};
use crate::services::{seed_sample_data, InsertedCounts};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/bootstrap", post(bootstrap))
        .route("/api/trainers", get(list_trainers))
        .route("/api/classes", get(list_classes))
        .route("/api/plans", get(list_plans))
        .route("/api/leads", post(create_lead))
        .route("/api/bookings", post(create_booking))
}

// ─── Bootstrap ───────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BootstrapResponse {
    pub status: String,
    pub inserted: InsertedCounts,
}

/// Seed sample catalog data into empty collections.
async fn bootstrap(State(state): State<Arc<AppState>>) -> Result<Json<BootstrapResponse>> {
    // Single-flight within this process; the empty checks are not atomic.
    let _guard = state.bootstrap_lock.lock().await;
    let inserted = seed_sample_data(&state.store).await?;

    Ok(Json(BootstrapResponse {
        status: "ok".to_string(),
        inserted,
    }))
}

// ─── Catalog ─────────────────────────────────────────────────

async fn list_trainers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Document<Trainer>>>> {
    Ok(Json(state.store.get_documents(collections::TRAINERS).await?))
}

async fn list_classes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Document<GymClass>>>> {
    Ok(Json(state.store.get_documents(collections::CLASSES).await?))
}

async fn list_plans(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Document<MembershipPlan>>>> {
    Ok(Json(state.store.get_documents(collections::PLANS).await?))
}

// ─── Submissions ─────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreatedResponse {
    pub status: String,
    pub id: String,
}

impl CreatedResponse {
    fn ok(id: String) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

/// Record a contact-form lead.
async fn create_lead(
    State(state): State<Arc<AppState>>,
    ValidatedJson(lead): ValidatedJson<Lead>,
) -> Result<Json<CreatedResponse>> {
    let id = state.store.create_document(collections::LEADS, &lead).await?;
    tracing::info!(lead_id = %id, interest = ?lead.interest, "Lead captured");
    Ok(Json(CreatedResponse::ok(id)))
}

/// Record a class booking request.
async fn create_booking(
    State(state): State<Arc<AppState>>,
    ValidatedJson(booking): ValidatedJson<Booking>,
) -> Result<Json<CreatedResponse>> {
    let id = state
        .store
        .create_document(collections::BOOKINGS, &booking)
        .await?;
    tracing::info!(booking_id = %id, class_id = %booking.class_id, "Booking captured");
    Ok(Json(CreatedResponse::ok(id)))
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Gym Pro: backend for a gym's marketing site
//!
//! Serves trainers, classes and membership plans from a document store and
//! records lead and class-booking submissions.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::DocumentStore;
use tokio::sync::Mutex;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: DocumentStore,
    /// Serializes bootstrap runs within this process.
    pub bootstrap_lock: Mutex<()>,
}

impl AppState {
    pub fn new(config: Config, store: DocumentStore) -> Self {
        Self {
            config,
            store,
            bootstrap_lock: Mutex::new(()),
        }
    }
}

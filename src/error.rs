// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Longest error detail echoed back to clients.
pub const MAX_DETAIL_CHARS: usize = 80;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Database not configured")]
    NotConfigured,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// A single rejected field in a request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: Option<String>,
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldError>>,
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    code: e.code.to_string(),
                    message: e.message.as_ref().map(|m| m.to_string()),
                })
            })
            .collect();
        // field_errors() is a HashMap; keep reports stable for clients
        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        AppError::Validation(fields)
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for AppError {
    /// Map a body decode failure to the field it happened on.
    ///
    /// serde reports a missing field against the enclosing struct, so the
    /// field name is taken from the message and joined to that path.
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let message = err.inner().to_string();
        let path = err.path().to_string();
        let at_root = path == ".";

        let (field, code) = match missing_field_name(&message) {
            Some(name) if at_root => (name.to_string(), "required"),
            Some(name) => (format!("{}.{}", path, name), "required"),
            None if at_root => ("body".to_string(), "type"),
            None => (path, "type"),
        };

        AppError::Validation(vec![FieldError {
            field,
            code: code.to_string(),
            message: Some(message),
        }])
    }
}

fn missing_field_name(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details, fields) = match self {
            AppError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                None,
                Some(fields),
            ),
            AppError::InvalidBody(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_body",
                Some(msg),
                None,
            ),
            AppError::NotConfigured => {
                tracing::error!("Request needs the database but none is configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_not_configured",
                    None,
                    None,
                )
            }
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    Some(truncate_detail(&msg)),
                    None,
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    None,
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
            fields,
        };

        (status, Json(body)).into_response()
    }
}

/// Cut a message down to [`MAX_DETAIL_CHARS`] characters.
pub fn truncate_detail(msg: &str) -> String {
    msg.chars().take(MAX_DETAIL_CHARS).collect()
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

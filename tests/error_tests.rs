// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use gym_pro::error::{truncate_detail, AppError, FieldError, MAX_DETAIL_CHARS};

async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_truncate_detail_is_char_safe() {
    let long = "é".repeat(200);
    let cut = truncate_detail(&long);
    assert_eq!(cut.chars().count(), MAX_DETAIL_CHARS);

    assert_eq!(truncate_detail("short"), "short");
}

#[tokio::test]
async fn test_database_error_details_truncated() {
    let (status, body) = body_of(AppError::Database("x".repeat(500))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "database_error");
    assert_eq!(
        body["details"].as_str().unwrap().len(),
        MAX_DETAIL_CHARS
    );
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let (status, body) = body_of(AppError::Internal(anyhow::anyhow!("secret path /etc/x"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_validation_error_lists_fields() {
    let err = AppError::Validation(vec![FieldError {
        field: "duration_minutes".to_string(),
        code: "range".to_string(),
        message: None,
    }]);
    let (status, body) = body_of(err).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["fields"][0]["field"], "duration_minutes");
}

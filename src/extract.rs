// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request extractors.

use crate::error::AppError;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed schema validation.
///
/// Rejects with a 422 before the handler runs, so invalid payloads never
/// reach the store. Malformed JSON is an `InvalidBody`; missing fields, wrong
/// types and range violations are reported per field.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<serde_json::Value>::from_request(req, state).await?;
        let value: T = serde_path_to_error::deserialize(raw)?;
        value.validate()?;
        Ok(Self(value))
    }
}

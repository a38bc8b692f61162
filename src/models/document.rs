// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stored document wrapper.

use serde::Serialize;

/// An entity read back from the store, tagged with its string id.
///
/// Serializes flat: the entity's own fields plus `"_id"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public form submissions. These are written once and never read back by the API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// A prospective-customer contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Area of interest (e.g., "Weight Loss", "Muscle Gain")
    pub interest: Option<String>,
    pub message: Option<String>,
}

/// A request for a seat in a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Booking {
    /// Class document id. Not checked against the class collection.
    pub class_id: String,
    /// Member name
    pub name: String,
    pub email: String,
    pub note: Option<String>,
}

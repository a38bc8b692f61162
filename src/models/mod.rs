// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod catalog;
pub mod document;
pub mod submission;

pub use catalog::{GymClass, MembershipPlan, Trainer};
pub use document::Document;
pub use submission::{Booking, Lead};

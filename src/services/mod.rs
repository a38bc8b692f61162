// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Business logic services.

pub mod bootstrap;

pub use bootstrap::{seed_sample_data, InsertedCounts};

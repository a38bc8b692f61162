// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Idempotent sample-data seeding.
//!
//! Each catalog collection is seeded only when it is empty. Nothing is ever
//! updated or deleted, and there is no transaction across collections: if a
//! later collection fails, earlier inserts stay.

use crate::db::{collections, DocumentStore};
use crate::error::AppError;
use crate::models::{GymClass, MembershipPlan, Trainer};
use futures_util::{stream, StreamExt, TryStreamExt};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// How many trainer ids the sample classes may reference.
const TRAINER_REFS: u32 = 3;
const MAX_CONCURRENT_INSERTS: usize = 8;

/// Documents inserted per collection by one bootstrap run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct InsertedCounts {
    pub trainer: u32,
    pub gymclass: u32,
    pub membershipplan: u32,
}

/// Seed trainers, classes and plans into any of those collections that are empty.
pub async fn seed_sample_data(store: &DocumentStore) -> Result<InsertedCounts, AppError> {
    let mut inserted = InsertedCounts::default();

    if store.is_empty(collections::TRAINERS).await? {
        inserted.trainer = insert_all(store, collections::TRAINERS, sample_trainers()).await?;
    }

    if store.is_empty(collections::CLASSES).await? {
        let trainer_ids = store
            .first_ids(collections::TRAINERS, TRAINER_REFS)
            .await?;
        inserted.gymclass =
            insert_all(store, collections::CLASSES, sample_classes(&trainer_ids)).await?;
    }

    if store.is_empty(collections::PLANS).await? {
        inserted.membershipplan = insert_all(store, collections::PLANS, sample_plans()).await?;
    }

    tracing::info!(
        trainers = inserted.trainer,
        classes = inserted.gymclass,
        plans = inserted.membershipplan,
        "Bootstrap complete"
    );

    Ok(inserted)
}

async fn insert_all<T>(
    store: &DocumentStore,
    collection: &str,
    records: Vec<T>,
) -> Result<u32, AppError>
where
    T: Serialize + DeserializeOwned + Sync + Send,
{
    let ids: Vec<String> = stream::iter(records)
        .map(|record| async move { store.create_document(collection, &record).await })
        .buffered(MAX_CONCURRENT_INSERTS)
        .try_collect()
        .await?;

    Ok(ids.len() as u32)
}

pub fn sample_trainers() -> Vec<Trainer> {
    let trainer = |name: &str, specialty: &str, bio: &str, experience_years| Trainer {
        name: name.to_string(),
        specialty: specialty.to_string(),
        bio: Some(bio.to_string()),
        experience_years,
        avatar_url: None,
        socials: None,
    };

    vec![
        trainer(
            "Ava Stone",
            "Strength & Conditioning",
            "Former national powerlifter coaching efficient, injury-safe strength.",
            8,
        ),
        trainer(
            "Leo Cruz",
            "HIIT & Fat Loss",
            "Explosive, science-backed fat-loss programming.",
            6,
        ),
        trainer(
            "Maya Chen",
            "Mobility & Yoga",
            "Restore movement, build core control, breathe better.",
            9,
        ),
    ]
}

/// Sample classes. Each references the trainer at a fixed position in
/// `trainer_ids`, or none when fewer trainers exist.
///
/// Positions follow store order. Firestore orders by document id, and ids are
/// random, so which sample trainer a class gets is arbitrary there.
pub fn sample_classes(trainer_ids: &[String]) -> Vec<GymClass> {
    let trainer_at = |index: usize| trainer_ids.get(index).cloned();
    let slots = |times: &[&str]| times.iter().map(|t| t.to_string()).collect::<Vec<_>>();

    vec![
        GymClass {
            title: "Power HIIT".to_string(),
            description: Some("High-intensity intervals with compound moves.".to_string()),
            difficulty: "Intermediate".to_string(),
            duration_minutes: 45,
            trainer_id: trainer_at(1),
            schedule: slots(&["Mon 07:00", "Wed 18:00", "Fri 07:00"]),
        },
        GymClass {
            title: "Barbell Fundamentals".to_string(),
            description: Some("Technique-first strength training.".to_string()),
            difficulty: "Beginner".to_string(),
            duration_minutes: 60,
            trainer_id: trainer_at(0),
            schedule: slots(&["Tue 17:00", "Thu 17:00"]),
        },
        GymClass {
            title: "Mobility Flow".to_string(),
            description: Some("Joint prep, core, and breath-led flow.".to_string()),
            difficulty: "All Levels".to_string(),
            duration_minutes: 50,
            trainer_id: trainer_at(2),
            schedule: slots(&["Sat 09:30"]),
        },
    ]
}

pub fn sample_plans() -> Vec<MembershipPlan> {
    let plan = |name: &str, price_monthly: f64, features: &[&str], best_value| MembershipPlan {
        name: name.to_string(),
        price_monthly,
        features: features.iter().map(|f| f.to_string()).collect(),
        best_value,
    };

    vec![
        plan("Starter", 29.0, &["Gym Access", "Locker", "Open Gym"], false),
        plan(
            "Pro",
            59.0,
            &["All Starter", "Unlimited Classes", "Program Audit"],
            true,
        ),
        plan(
            "Elite",
            99.0,
            &["All Pro", "1:1 Coaching", "Priority Booking", "Recovery Suite"],
            false,
        ),
    ]
}

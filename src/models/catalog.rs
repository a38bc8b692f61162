// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog entities shown on the marketing site: trainers, classes and plans.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// A coach on staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Trainer {
    /// Full name
    pub name: String,
    /// Primary specialty (e.g., "Strength", "HIIT", "Yoga")
    pub specialty: String,
    pub bio: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 60))]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub experience_years: i64,
    /// Public image URL
    pub avatar_url: Option<String>,
    /// Social links and stats keyed by network (e.g., "instagram"); values are free-form
    pub socials: Option<BTreeMap<String, serde_json::Value>>,
}

/// A recurring group class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GymClass {
    pub title: String,
    pub description: Option<String>,
    /// Free-text level label ("Beginner", "All Levels", ...)
    pub difficulty: String,
    #[validate(range(min = 15, max = 180))]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration_minutes: i64,
    /// Trainer document id. Not checked against the trainer collection.
    pub trainer_id: Option<String>,
    /// Weekly slots, e.g. ["Mon 07:00", "Wed 18:00"]
    #[serde(default)]
    pub schedule: Vec<String>,
}

/// A monthly membership tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MembershipPlan {
    pub name: String,
    /// Monthly price in USD
    #[validate(range(min = 0.0))]
    pub price_monthly: f64,
    #[serde(default)]
    pub features: Vec<String>,
    /// Highlight as best value
    #[serde(default)]
    pub best_value: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trainer_with_experience(years: i64) -> Trainer {
        Trainer {
            name: "Ava Stone".to_string(),
            specialty: "Strength".to_string(),
            bio: None,
            experience_years: years,
            avatar_url: None,
            socials: None,
        }
    }

    #[test]
    fn test_experience_years_bounds() {
        assert!(trainer_with_experience(0).validate().is_ok());
        assert!(trainer_with_experience(60).validate().is_ok());

        let err = trainer_with_experience(61).validate().unwrap_err();
        assert!(err.field_errors().contains_key("experience_years"));
        assert!(trainer_with_experience(-1).validate().is_err());
    }

    #[test]
    fn test_trainer_defaults() {
        let trainer: Trainer =
            serde_json::from_value(json!({"name": "Leo", "specialty": "HIIT"})).unwrap();
        assert_eq!(trainer.experience_years, 0);
        assert_eq!(trainer.bio, None);
        assert_eq!(trainer.socials, None);
        assert!(trainer.validate().is_ok());
    }

    #[test]
    fn test_trainer_socials_map() {
        let trainer: Trainer = serde_json::from_value(json!({
            "name": "Maya",
            "specialty": "Yoga",
            "socials": {"instagram": "@maya", "followers": 1200, "verified": true}
        }))
        .unwrap();
        let socials = trainer.socials.unwrap();
        assert_eq!(socials.get("instagram"), Some(&json!("@maya")));
        assert_eq!(socials.get("followers"), Some(&json!(1200)));
        assert_eq!(socials.get("verified"), Some(&json!(true)));
    }

    #[test]
    fn test_duration_minutes_bounds() {
        let mut class = GymClass {
            title: "Power HIIT".to_string(),
            description: None,
            difficulty: "Intermediate".to_string(),
            duration_minutes: 15,
            trainer_id: None,
            schedule: vec![],
        };
        assert!(class.validate().is_ok());
        class.duration_minutes = 180;
        assert!(class.validate().is_ok());
        class.duration_minutes = 14;
        assert!(class.validate().is_err());
        class.duration_minutes = 181;
        assert!(class.validate().is_err());
    }

    #[test]
    fn test_gym_class_requires_duration() {
        let result = serde_json::from_value::<GymClass>(json!({
            "title": "Mobility Flow",
            "difficulty": "All Levels"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut plan = MembershipPlan {
            name: "Free Trial".to_string(),
            price_monthly: 0.0,
            features: vec![],
            best_value: false,
        };
        assert!(plan.validate().is_ok());
        plan.price_monthly = -0.01;
        let err = plan.validate().unwrap_err();
        assert!(err.field_errors().contains_key("price_monthly"));
    }

    #[test]
    fn test_optional_fields_serialize_as_null() {
        let value = serde_json::to_value(trainer_with_experience(3)).unwrap();
        assert_eq!(value["bio"], serde_json::Value::Null);
        assert_eq!(value["avatar_url"], serde_json::Value::Null);
        assert_eq!(value["socials"], serde_json::Value::Null);
    }
}

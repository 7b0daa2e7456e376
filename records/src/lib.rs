//! Shared account model for the coaching app.
//!
//! This crate owns the persisted-account shape used by both `server` and
//! `client`, the fixed goal/activity catalogs, and the validation contract
//! both sides apply to registration input.

pub mod catalog;
pub mod validate;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role discriminator. Wizard-created accounts are always `Client`;
/// `Coach` accounts are provisioned out of band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Client,
    Coach,
}

/// Self-reported gender. `Unset` is the pre-selection default and is never
/// valid in a persisted record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unset,
}

/// Weekly activity level, from least to most active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    /// All levels in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Human-readable label for selection lists.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly active",
            Self::ModeratelyActive => "Moderately active",
            Self::VeryActive => "Very active",
            Self::ExtremelyActive => "Extremely active",
        }
    }
}

/// Coaching goal, selected from a fixed catalog during registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    BuildMuscle,
    ImproveEndurance,
    EatHealthier,
    SleepBetter,
    ReduceStress,
}

impl Goal {
    /// All goals in catalog order.
    pub const ALL: [Self; 6] = [
        Self::LoseWeight,
        Self::BuildMuscle,
        Self::ImproveEndurance,
        Self::EatHealthier,
        Self::SleepBetter,
        Self::ReduceStress,
    ];

    /// Human-readable label for selection lists.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LoseWeight => "Lose weight",
            Self::BuildMuscle => "Build muscle",
            Self::ImproveEndurance => "Improve endurance",
            Self::EatHealthier => "Eat healthier",
            Self::SleepBetter => "Sleep better",
            Self::ReduceStress => "Reduce stress",
        }
    }
}

/// A persisted account as exchanged between client and companion server.
///
/// Password material never travels on this type; the server keeps hashes in
/// its own storage records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: f32,
    pub goals: Vec<Goal>,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub favorite_sport: String,
}

impl UserRecord {
    /// Display name, `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Account-creation request built by the registration wizard's final gate.
///
/// Carries every draft field, already parsed and validated, plus the fixed
/// role discriminator and the plaintext password (hashed server-side).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: f32,
    pub goals: Vec<Goal>,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub favorite_sport: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

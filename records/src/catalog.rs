//! Static sport catalog.
//!
//! Read-only reference data: the registration wizard's sport step and the
//! home screen both render from this list, keyed by stable string ids.

use serde::{Deserialize, Serialize};

/// Broad grouping used to section the sport picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportCategory {
    Team,
    Racket,
    Endurance,
    Strength,
    Water,
    Combat,
}

impl SportCategory {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Team,
        Self::Racket,
        Self::Endurance,
        Self::Strength,
        Self::Water,
        Self::Combat,
    ];

    /// Section heading for the sport picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Team => "Team sports",
            Self::Racket => "Racket sports",
            Self::Endurance => "Endurance",
            Self::Strength => "Strength",
            Self::Water => "Water sports",
            Self::Combat => "Combat sports",
        }
    }
}

/// A catalog entry. Ids are stable and stored on accounts verbatim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sport {
    pub id: &'static str,
    pub name: &'static str,
    pub category: SportCategory,
    pub emoji: &'static str,
}

/// The full catalog, in display order within each category.
pub const ALL_SPORTS: &[Sport] = &[
    Sport { id: "football", name: "Football", category: SportCategory::Team, emoji: "⚽" },
    Sport { id: "basketball", name: "Basketball", category: SportCategory::Team, emoji: "🏀" },
    Sport { id: "volleyball", name: "Volleyball", category: SportCategory::Team, emoji: "🏐" },
    Sport { id: "handball", name: "Handball", category: SportCategory::Team, emoji: "🤾" },
    Sport { id: "tennis", name: "Tennis", category: SportCategory::Racket, emoji: "🎾" },
    Sport { id: "badminton", name: "Badminton", category: SportCategory::Racket, emoji: "🏸" },
    Sport { id: "table-tennis", name: "Table tennis", category: SportCategory::Racket, emoji: "🏓" },
    Sport { id: "running", name: "Running", category: SportCategory::Endurance, emoji: "🏃" },
    Sport { id: "cycling", name: "Cycling", category: SportCategory::Endurance, emoji: "🚴" },
    Sport { id: "triathlon", name: "Triathlon", category: SportCategory::Endurance, emoji: "🏅" },
    Sport { id: "weightlifting", name: "Weightlifting", category: SportCategory::Strength, emoji: "🏋️" },
    Sport { id: "crossfit", name: "CrossFit", category: SportCategory::Strength, emoji: "💪" },
    Sport { id: "swimming", name: "Swimming", category: SportCategory::Water, emoji: "🏊" },
    Sport { id: "rowing", name: "Rowing", category: SportCategory::Water, emoji: "🚣" },
    Sport { id: "boxing", name: "Boxing", category: SportCategory::Combat, emoji: "🥊" },
    Sport { id: "judo", name: "Judo", category: SportCategory::Combat, emoji: "🥋" },
];

/// Look up a sport by its stable id.
#[must_use]
pub fn sport_by_id(id: &str) -> Option<&'static Sport> {
    ALL_SPORTS.iter().find(|s| s.id == id)
}

/// Group the catalog by category, preserving catalog order in both the
/// category list and each group.
#[must_use]
pub fn sports_by_category() -> Vec<(SportCategory, Vec<&'static Sport>)> {
    SportCategory::ALL
        .iter()
        .map(|&category| {
            let group = ALL_SPORTS.iter().filter(|s| s.category == category).collect();
            (category, group)
        })
        .collect()
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

// ABOUTME: Achievement catalog configuration with badge definitions and composite rules
// ABOUTME: Distance, duration, weekly, occasion badges plus marathon/elevation/speed/month/calorie rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use serde::{Deserialize, Serialize};

/// Marathon distance in meters
pub const MARATHON_METERS: f64 = 42_195.0;

/// Half-marathon distance in meters
pub const HALF_MARATHON_METERS: f64 = 21_097.5;

/// A badge counting activities that individually cover at least this distance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceBadge {
    /// Badge display name
    pub name: String,
    /// Badge emoji
    pub emoji: String,
    /// Inclusive distance threshold in meters
    pub threshold_meters: f64,
}

/// A badge counting activities that individually last at least this long
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationBadge {
    /// Badge display name
    pub name: String,
    /// Badge emoji
    pub emoji: String,
    /// Inclusive moving-time threshold in minutes
    pub threshold_minutes: f64,
}

/// A badge counting ISO weeks whose summed moving hours reach this threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyBadge {
    /// Badge display name
    pub name: String,
    /// Badge emoji
    pub emoji: String,
    /// Inclusive weekly-hours threshold
    pub threshold_hours: f64,
}

/// A badge counting activities that land on listed calendar dates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccasionBadge {
    /// Badge display name
    pub name: String,
    /// Badge emoji
    pub emoji: String,
    /// Matching dates in `MM-DD` form
    pub dates: Vec<String>,
}

/// A badge counting distinct calendar days with a qualifying activity of a
/// given kind and minimum distance (marathon-style rules)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceDayBadge {
    /// Badge display name
    pub name: String,
    /// Badge emoji
    pub emoji: String,
    /// Tooltip description
    pub description: String,
    /// Activity kind the rule applies to
    pub kind: String,
    /// Inclusive distance threshold in meters
    pub threshold_meters: f64,
}

/// Tunables for the remaining composite achievement rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeRules {
    /// Cumulative elevation meters per climbing milestone
    pub elevation_milestone_meters: f64,
    /// Average speed in km/h an activity must strictly exceed
    pub speed_threshold_kmh: f64,
    /// Cumulative kilocalories per calorie milestone
    pub calorie_milestone_kcal: f64,
}

impl Default for CompositeRules {
    fn default() -> Self {
        Self {
            elevation_milestone_meters: 1000.0,
            speed_threshold_kmh: 30.0,
            calorie_milestone_kcal: 5000.0,
        }
    }
}

/// Fixed configuration of badge definitions evaluated by the achievement
/// engine. The catalog itself is immutable; counts come back in a fresh
/// [`crate::achievements::AchievementSummary`] per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementCatalog {
    /// Per-activity distance badges
    pub distance_badges: Vec<DistanceBadge>,
    /// Per-activity duration badges
    pub duration_badges: Vec<DurationBadge>,
    /// ISO-week volume badges
    pub weekly_badges: Vec<WeeklyBadge>,
    /// Calendar-date occasion badges
    pub special_occasions: Vec<OccasionBadge>,
    /// Marathon-style distinct-day badges
    pub distance_day_badges: Vec<DistanceDayBadge>,
    /// Remaining composite rule tunables
    pub composite: CompositeRules,
}

impl Default for AchievementCatalog {
    /// The stock catalog: 100/200/300 km runs, 3/6/12 hour efforts, 10/20
    /// hour weeks, New Year and Christmas runs, marathon and half-marathon
    /// masters, and the default composite tunables.
    fn default() -> Self {
        Self {
            distance_badges: vec![
                DistanceBadge {
                    name: "100 km Run".to_owned(),
                    emoji: "🏃‍♂️".to_owned(),
                    threshold_meters: 100_000.0,
                },
                DistanceBadge {
                    name: "200 km Run".to_owned(),
                    emoji: "🏃‍♂️".to_owned(),
                    threshold_meters: 200_000.0,
                },
                DistanceBadge {
                    name: "300 km Run".to_owned(),
                    emoji: "🏃‍♂️".to_owned(),
                    threshold_meters: 300_000.0,
                },
            ],
            duration_badges: vec![
                DurationBadge {
                    name: "3 Hours".to_owned(),
                    emoji: "⏱️".to_owned(),
                    threshold_minutes: 180.0,
                },
                DurationBadge {
                    name: "6 Hours".to_owned(),
                    emoji: "⏱️".to_owned(),
                    threshold_minutes: 360.0,
                },
                DurationBadge {
                    name: "12 Hours".to_owned(),
                    emoji: "⏱️".to_owned(),
                    threshold_minutes: 720.0,
                },
            ],
            weekly_badges: vec![
                WeeklyBadge {
                    name: "10 Hours Week".to_owned(),
                    emoji: "📅".to_owned(),
                    threshold_hours: 10.0,
                },
                WeeklyBadge {
                    name: "20 Hours Week".to_owned(),
                    emoji: "📅".to_owned(),
                    threshold_hours: 20.0,
                },
            ],
            special_occasions: vec![
                OccasionBadge {
                    name: "New Year Run".to_owned(),
                    emoji: "🎉".to_owned(),
                    dates: vec!["01-01".to_owned()],
                },
                OccasionBadge {
                    name: "Christmas Run".to_owned(),
                    emoji: "🎄".to_owned(),
                    dates: vec!["12-25".to_owned()],
                },
            ],
            distance_day_badges: vec![
                DistanceDayBadge {
                    name: "Marathon Master".to_owned(),
                    emoji: "🏅".to_owned(),
                    description: "Completed a marathon (42.195 km)".to_owned(),
                    kind: "Run".to_owned(),
                    threshold_meters: MARATHON_METERS,
                },
                DistanceDayBadge {
                    name: "Half Marathon Master".to_owned(),
                    emoji: "🎖️".to_owned(),
                    description: "Completed a half marathon (21.0975 km)".to_owned(),
                    kind: "Run".to_owned(),
                    threshold_meters: HALF_MARATHON_METERS,
                },
            ],
            composite: CompositeRules::default(),
        }
    }
}

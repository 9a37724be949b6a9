// ABOUTME: Immutable engine configuration passed in at construction time
// ABOUTME: Calorie constants, coin divisors, rank ladder, and achievement catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

//! Engine configuration.
//!
//! All tunables live here as one immutable value handed to the engine, rather
//! than as shared mutable module state. Defaults reproduce the canonical
//! deployment: 80 kg body weight, Everest-height and pizza-kcal coin
//! divisors, the Bronze-to-Prestige rank ladder, and the stock achievement
//! catalog.

/// Achievement catalog configuration (badges and composite rules)
pub mod achievements;

/// Rank ladder configuration (ordered tiers)
pub mod rank;

use serde::{Deserialize, Serialize};

pub use achievements::{
    AchievementCatalog, CompositeRules, DistanceBadge, DistanceDayBadge, DurationBadge,
    OccasionBadge, WeeklyBadge,
};
pub use rank::{RankLadder, RankTier};

/// Default body weight used by the calorie formula, in kilograms
pub const DEFAULT_BODY_WEIGHT_KG: f64 = 80.0;

/// Everest's height in meters; one Everest coin per this much elevation
pub const EVEREST_HEIGHT_METERS: f64 = 8848.0;

/// Kilocalories per pizza coin
pub const PIZZA_KCAL: f64 = 1000.0;

/// Immutable configuration for the aggregation and gamification engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Body weight in kilograms, feeds the calorie-per-minute formula
    pub body_weight_kg: f64,
    /// Elevation meters per Everest coin
    pub everest_height_meters: f64,
    /// Kilocalories per pizza coin
    pub pizza_kcal: f64,
    /// Ordered rank ladder
    pub ladder: RankLadder,
    /// Achievement badge catalog
    pub catalog: AchievementCatalog,
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            body_weight_kg: DEFAULT_BODY_WEIGHT_KG,
            everest_height_meters: EVEREST_HEIGHT_METERS,
            pizza_kcal: PIZZA_KCAL,
            ladder: RankLadder::default(),
            catalog: AchievementCatalog::default(),
        }
    }
}

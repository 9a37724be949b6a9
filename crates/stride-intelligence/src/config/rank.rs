// ABOUTME: Rank ladder configuration with ordered tiers and the default ladder
// ABOUTME: Bronze through Challenger plus generated Master Prestige levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use serde::{Deserialize, Serialize};

/// Point spacing between the base tiers of the default ladder
const BASE_TIER_STEP: f64 = 150.0;

/// Points required per Master Prestige level beyond Challenger
const PRESTIGE_STEP: f64 = 75.0;

/// Highest generated Master Prestige level
const MAX_PRESTIGE_LEVEL: u32 = 100;

/// One tier of the rank ladder.
///
/// A point equals one cumulative hour of moving time, so `min_points` values
/// read as hour thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTier {
    /// Tier display name
    pub name: String,
    /// Tier emoji
    pub emoji: String,
    /// Minimum cumulative points to hold this tier
    pub min_points: f64,
}

impl RankTier {
    /// Create a tier
    #[must_use]
    pub fn new(name: impl Into<String>, emoji: impl Into<String>, min_points: f64) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            min_points,
        }
    }
}

/// Ordered, fixed sequence of rank tiers, strictly increasing by `min_points`.
///
/// The constructor sorts the tiers and guarantees a base tier at zero points
/// so every non-negative input resolves to some rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<RankTier>")]
pub struct RankLadder(Vec<RankTier>);

impl From<Vec<RankTier>> for RankLadder {
    fn from(tiers: Vec<RankTier>) -> Self {
        Self::new(tiers)
    }
}

impl RankLadder {
    /// Build a ladder from tiers, sorting ascending by `min_points` and
    /// inserting an "Unranked" base tier when none starts at zero.
    #[must_use]
    pub fn new(mut tiers: Vec<RankTier>) -> Self {
        tiers.sort_by(|a, b| a.min_points.total_cmp(&b.min_points));
        if tiers.first().is_none_or(|t| t.min_points > 0.0) {
            tiers.insert(0, RankTier::new("Unranked", "·", 0.0));
        }
        Self(tiers)
    }

    /// The ordered tiers
    #[must_use]
    pub fn tiers(&self) -> &[RankTier] {
        &self.0
    }

    /// Number of tiers in the ladder
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A ladder always holds at least the base tier
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for RankLadder {
    /// The canonical ladder: Bronze 3 through Challenger in 150-point steps,
    /// then Master Prestige 2..=100 in 75-point steps.
    fn default() -> Self {
        let base: [(&str, &str); 22] = [
            ("Bronze 3", "🥉"),
            ("Bronze 2", "🥉"),
            ("Bronze 1", "🥉"),
            ("Silver 3", "🥈"),
            ("Silver 2", "🥈"),
            ("Silver 1", "🥈"),
            ("Gold 3", "🥇"),
            ("Gold 2", "🥇"),
            ("Gold 1", "🥇"),
            ("Platinum 3", "🏆"),
            ("Platinum 2", "🏆"),
            ("Platinum 1", "🏆"),
            ("Diamond 3", "💎"),
            ("Diamond 2", "💎"),
            ("Diamond 1", "💎"),
            ("Master 3", "🔥"),
            ("Master 2", "🔥"),
            ("Master 1", "🔥"),
            ("Grandmaster 3", "🚀"),
            ("Grandmaster 2", "🚀"),
            ("Grandmaster 1", "🚀"),
            ("Challenger", "🌟"),
        ];

        let challenger_points = BASE_TIER_STEP * (base.len() - 1) as f64;
        let mut tiers: Vec<RankTier> = base
            .iter()
            .enumerate()
            .map(|(i, (name, emoji))| RankTier::new(*name, *emoji, BASE_TIER_STEP * i as f64))
            .collect();

        for level in 2..=MAX_PRESTIGE_LEVEL {
            tiers.push(RankTier::new(
                format!("Master Prestige {level}"),
                "⭐",
                challenger_points + f64::from(level - 1) * PRESTIGE_STEP,
            ));
        }

        Self(tiers)
    }
}

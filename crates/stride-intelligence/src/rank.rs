// ABOUTME: Rank engine mapping cumulative points onto the tiered ladder
// ABOUTME: Computes current and next tier, progress percent, and weekly gain percent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use serde::{Deserialize, Serialize};

use crate::config::{RankLadder, RankTier};

/// Full progress bar value used at the terminal tier
const FULL_PROGRESS: f64 = 100.0;

/// Result of a rank computation: where the athlete sits on the ladder and how
/// far along they are toward the next tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankProgress {
    /// The tier the athlete currently holds
    pub current_rank: RankTier,
    /// The tier after the current one; equals `current_rank` at the top
    pub next_rank: RankTier,
    /// Progress toward the next tier, 0..=100; 100 at the terminal tier
    pub progress_percent: f64,
    /// This week's point gain expressed against the same tier span
    pub weekly_gain_percent: f64,
    /// The cumulative points the computation was run with
    pub current_points: f64,
}

impl RankProgress {
    /// Whether the athlete holds the final tier of the ladder
    #[must_use]
    pub fn is_top_rank(&self) -> bool {
        self.current_rank == self.next_rank
    }
}

/// Map cumulative points onto the ladder.
///
/// The current rank is the last tier whose `min_points` does not exceed
/// `cumulative_points`; the next rank is the tier after it, or the current
/// tier itself at the top of the ladder (terminal state, progress pinned to
/// 100). A point equals one cumulative moving hour.
///
/// Deterministic, pure, and total over any non-negative `cumulative_points`;
/// the ladder constructor guarantees an ascending order with a base tier at
/// zero, so every input resolves to some rank.
#[must_use]
pub fn compute_rank(
    ladder: &RankLadder,
    cumulative_points: f64,
    weekly_gain_points: f64,
) -> RankProgress {
    let tiers = ladder.tiers();
    let mut current_index = 0;
    for (i, tier) in tiers.iter().enumerate() {
        if tier.min_points <= cumulative_points {
            current_index = i;
        } else {
            break;
        }
    }

    // Every construction path runs through `RankLadder::new`, which leaves
    // the ladder non-empty with a base tier at zero points.
    let current_rank = tiers[current_index].clone();
    let next_rank = tiers
        .get(current_index + 1)
        .cloned()
        .unwrap_or_else(|| current_rank.clone());

    let span = next_rank.min_points - current_rank.min_points;
    let (progress_percent, weekly_gain_percent) = if span > 0.0 {
        (
            (cumulative_points - current_rank.min_points) / span * FULL_PROGRESS,
            weekly_gain_points / span * FULL_PROGRESS,
        )
    } else {
        // Terminal tier: the bar is full and there is no span to gain against.
        (FULL_PROGRESS, 0.0)
    };

    RankProgress {
        current_rank,
        next_rank,
        progress_percent,
        weekly_gain_percent,
        current_points: cumulative_points,
    }
}

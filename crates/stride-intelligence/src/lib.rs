// ABOUTME: Aggregation and gamification engine for the Stride fitness dashboard
// ABOUTME: Pure transformation pipeline from activity records to totals, rank, and achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! The pure data-transformation pipeline of the dashboard: it folds a growing
//! list of activity records into cumulative and time-windowed totals, derives
//! a rank-and-progress state from those totals, and evaluates a fixed catalog
//! of achievement badge rules (thresholds, calendar occasions, streaks, and
//! composites).
//!
//! Every entry point is a total, deterministic function over its input
//! snapshot: no hidden state is carried between calls, results are fresh
//! values, and re-running any computation is always safe. All tunables come
//! in through an immutable [`config::IntelligenceConfig`].

/// Engine configuration: calorie constants, rank ladder, achievement catalog
pub mod config;

/// Calorie and heartbeat estimation from heart rate data
pub mod calories;

/// Totals aggregator: cumulative and this-week sums, extrema, coins
pub mod totals;

/// Rank engine: ladder walk, progress, and weekly gain percentages
pub mod rank;

/// Achievement engine: badge counting, streaks, and calendar buckets
pub mod achievements;

pub use achievements::{compute_achievements, AchievementSummary, BadgeCount};
pub use calories::{calories_per_minute, estimated_kcal};
pub use config::IntelligenceConfig;
pub use rank::{compute_rank, RankProgress};
pub use totals::{activity_coins, compute_totals, CoinTotals, Totals};

// ABOUTME: Totals aggregator folding activity records into cumulative and this-week sums
// ABOUTME: Tracks record-holder extrema, athlete reference, and coin totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use stride_core::models::{Activity, AthleteRef};
use tracing::debug;

use crate::calories::estimated_kcal;
use crate::config::IntelligenceConfig;

/// Gamified coin totals derived from the aggregate sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinTotals {
    /// Elevation divided by Everest's height
    pub everest: f64,
    /// Kilocalories divided by the pizza divisor
    pub pizza: f64,
    /// Raw heartbeat count, unscaled
    pub heartbeat: f64,
}

/// Aggregate totals over a sequence of activity records.
///
/// Ephemeral: recomputed in full on every change to the activity set or the
/// timeframe filter. The result is order-independent except for the extrema
/// tie-break, where the first-seen activity wins on equal values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Cumulative moving time in hours
    pub hours: f64,
    /// Cumulative distance in meters
    pub distance_meters: f64,
    /// Cumulative elevation gain in meters
    pub elevation_meters: f64,
    /// Cumulative estimated kilocalories
    pub calories: f64,
    /// Cumulative heartbeat count
    pub heartbeats: u64,
    /// Number of activities aggregated
    pub activity_count: usize,

    /// Moving hours inside the rolling 7-day window ending now
    pub hours_this_week: f64,
    /// Distance in meters inside the rolling 7-day window
    pub distance_this_week: f64,
    /// Elevation gain in meters inside the rolling 7-day window
    pub elevation_this_week: f64,
    /// Estimated kilocalories inside the rolling 7-day window
    pub calories_this_week: f64,

    /// Activity with the largest elevation gain seen so far
    pub max_elevation_activity: Option<Activity>,
    /// Activity with the largest moving time seen so far
    pub max_duration_activity: Option<Activity>,
    /// Activity with the largest distance seen so far
    pub max_distance_activity: Option<Activity>,

    /// Last athlete reference seen in iteration order
    pub athlete: Option<AthleteRef>,

    /// Coin totals accumulated per activity
    pub coins: CoinTotals,
}

/// Coins earned by one activity: its elevation share of an Everest, its
/// estimated kilocalories in pizzas, and its raw heartbeat count.
///
/// The renderer shows these per activity; [`compute_totals`] accumulates the
/// same values, so the aggregate coin totals equal the sum over this helper.
#[must_use]
pub fn activity_coins(activity: &Activity, config: &IntelligenceConfig) -> CoinTotals {
    let kcal = estimated_kcal(activity, config.body_weight_kg);
    CoinTotals {
        everest: activity.elevation_gain_meters / config.everest_height_meters,
        pizza: kcal / config.pizza_kcal,
        heartbeat: activity.total_heartbeats() as f64,
    }
}

/// Fold a sequence of activity records into aggregate totals.
///
/// Total function: missing or NaN inputs contribute zero, so the aggregate is
/// always defined. The `now` timestamp anchors the inclusive
/// `[now − 7 days, now]` this-week window.
pub fn compute_totals<'a, I>(
    activities: I,
    now: DateTime<Utc>,
    config: &IntelligenceConfig,
) -> Totals
where
    I: IntoIterator<Item = &'a Activity>,
{
    let week_start = now - Duration::days(7);
    let mut totals = Totals::default();

    for activity in activities {
        let kcal = estimated_kcal(activity, config.body_weight_kg);
        let heartbeats = activity.total_heartbeats();

        totals.hours += activity.moving_hours();
        totals.distance_meters += activity.distance_meters;
        totals.elevation_meters += activity.elevation_gain_meters;
        totals.calories += kcal;
        totals.heartbeats += heartbeats;
        totals.activity_count += 1;

        if activity.start_date >= week_start && activity.start_date <= now {
            totals.hours_this_week += activity.moving_hours();
            totals.distance_this_week += activity.distance_meters;
            totals.elevation_this_week += activity.elevation_gain_meters;
            totals.calories_this_week += kcal;
        }

        // Strictly-greater replacement keeps the first-seen record on ties.
        if totals.max_elevation_activity.as_ref().is_none_or(|max| {
            activity.elevation_gain_meters > max.elevation_gain_meters
        }) {
            totals.max_elevation_activity = Some(activity.clone());
        }
        if totals.max_duration_activity.as_ref().is_none_or(|max| {
            activity.moving_time_seconds > max.moving_time_seconds
        }) {
            totals.max_duration_activity = Some(activity.clone());
        }
        if totals
            .max_distance_activity
            .as_ref()
            .is_none_or(|max| activity.distance_meters > max.distance_meters)
        {
            totals.max_distance_activity = Some(activity.clone());
        }

        if let Some(athlete) = &activity.athlete {
            totals.athlete = Some(athlete.clone());
        }

        let coins = activity_coins(activity, config);
        totals.coins.everest += coins.everest;
        totals.coins.pizza += coins.pizza;
        totals.coins.heartbeat += coins.heartbeat;
    }

    debug!(
        activities = totals.activity_count,
        hours = totals.hours,
        distance_meters = totals.distance_meters,
        "computed aggregate totals"
    );
    totals
}

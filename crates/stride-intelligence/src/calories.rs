// ABOUTME: Calorie estimation from heart rate data using the ACSM-derived formula
// ABOUTME: Per-minute burn rate and per-activity kilocalorie estimates with fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use stride_core::models::Activity;

/// ACSM formula multiplier applied to heart rate times body weight
const ACSM_FACTOR: f64 = 0.6309;

/// Joules per calorie, converts the ACSM product to kilocalories
const JOULES_PER_CALORIE: f64 = 4.184;

/// Scale factor applied to the per-activity estimate
const KCAL_SCALE: f64 = 100.0;

/// Kilocalories burned per minute at the given heart rate.
///
/// `hr × body_weight × 0.6309 / 4.184`, clamped to non-negative. Returns 0
/// when heart rate is missing or not a number. The formula is
/// gender-invariant.
#[must_use]
pub fn calories_per_minute(heart_rate: Option<f64>, body_weight_kg: f64) -> f64 {
    let Some(hr) = heart_rate.filter(|hr| hr.is_finite()) else {
        return 0.0;
    };
    let per_minute = hr * body_weight_kg * ACSM_FACTOR / JOULES_PER_CALORIE;
    per_minute.max(0.0)
}

/// Estimated kilocalories for one activity.
///
/// Precedence: the heartbeat-derived estimate when a heartbeat count exists,
/// the feed-supplied calorie figure otherwise, zero when both are absent.
#[must_use]
pub fn estimated_kcal(activity: &Activity, body_weight_kg: f64) -> f64 {
    if activity.total_heartbeats() > 0 {
        return calories_per_minute(activity.heart_rate(), body_weight_kg)
            * activity.moving_minutes()
            / KCAL_SCALE;
    }
    activity.supplied_kcal().unwrap_or(0.0)
}

// ABOUTME: Tests for the totals aggregator over activity sequences
// ABOUTME: Validates lifetime vs this-week sums, extrema tie-breaks, athlete, and coins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::{assert_close, at, run_on};
use stride_dashboard::core::models::AthleteRef;
use stride_dashboard::intelligence::config::IntelligenceConfig;
use stride_dashboard::intelligence::totals::{activity_coins, compute_totals};

#[test]
fn test_empty_sequence_yields_default_totals() {
    let config = IntelligenceConfig::default();
    let totals = compute_totals(&[], Utc::now(), &config);
    assert_eq!(totals.activity_count, 0);
    assert_close(totals.hours, 0.0);
    assert!(totals.max_distance_activity.is_none());
    assert!(totals.athlete.is_none());
}

#[test]
fn test_lifetime_sums_accumulate() {
    let config = IntelligenceConfig::default();
    let activities = vec![
        run_on("1", "2024-01-01T08:00:00Z", 3600)
            .with_distance(10_000.0)
            .with_elevation_gain(120.0),
        run_on("2", "2024-01-02T08:00:00Z", 1800)
            .with_distance(5_000.0)
            .with_elevation_gain(30.0),
    ];
    let totals = compute_totals(&activities, at("2024-06-01T00:00:00Z"), &config);

    assert_eq!(totals.activity_count, 2);
    assert_close(totals.hours, 1.5);
    assert_close(totals.distance_meters, 15_000.0);
    assert_close(totals.elevation_meters, 150.0);
}

#[test]
fn test_this_week_window_is_inclusive_rolling_seven_days() {
    let config = IntelligenceConfig::default();
    let now = Utc::now();
    let activities = vec![
        run_on("old", "2020-01-01T08:00:00Z", 3600).with_distance(10_000.0),
        {
            let mut act = run_on("recent", "2020-01-01T08:00:00Z", 1800).with_distance(4_000.0);
            act.start_date = now - Duration::days(3);
            act
        },
    ];
    let totals = compute_totals(&activities, now, &config);

    assert_close(totals.hours, 1.5);
    assert_close(totals.hours_this_week, 0.5);
    assert_close(totals.distance_this_week, 4_000.0);
    // Lifetime totals always dominate the windowed ones.
    assert!(totals.hours >= totals.hours_this_week);
    assert!(totals.distance_meters >= totals.distance_this_week);
    assert!(totals.elevation_meters >= totals.elevation_this_week);
    assert!(totals.calories >= totals.calories_this_week);
}

#[test]
fn test_future_activity_outside_week_window() {
    let config = IntelligenceConfig::default();
    let now = at("2024-06-01T00:00:00Z");
    let mut act = run_on("future", "2024-06-05T08:00:00Z", 3600);
    act = act.with_distance(1_000.0);
    let totals = compute_totals(&[act], now, &config);

    assert_close(totals.hours, 1.0);
    assert_close(totals.hours_this_week, 0.0);
}

#[test]
fn test_extrema_strictly_greater_replaces_first_seen_wins_ties() {
    let config = IntelligenceConfig::default();
    let activities = vec![
        run_on("first", "2024-01-01T08:00:00Z", 3600).with_distance(10_000.0),
        run_on("tied", "2024-01-02T08:00:00Z", 3600).with_distance(10_000.0),
        run_on("longer", "2024-01-03T08:00:00Z", 7200).with_distance(8_000.0),
    ];
    let totals = compute_totals(&activities, at("2024-06-01T00:00:00Z"), &config);

    assert_eq!(
        totals.max_distance_activity.as_ref().unwrap().id,
        "first",
        "equal distance must not replace the first-seen record"
    );
    assert_eq!(totals.max_duration_activity.as_ref().unwrap().id, "longer");
}

#[test]
fn test_athlete_last_reference_wins() {
    let config = IntelligenceConfig::default();
    let activities = vec![
        run_on("1", "2024-01-01T08:00:00Z", 3600)
            .with_athlete(AthleteRef::new("First", "Seen")),
        run_on("2", "2024-01-02T08:00:00Z", 3600),
        run_on("3", "2024-01-03T08:00:00Z", 3600)
            .with_athlete(AthleteRef::new("Last", "Wins")),
    ];
    let totals = compute_totals(&activities, at("2024-06-01T00:00:00Z"), &config);

    assert_eq!(totals.athlete.unwrap().display_name(), "Last Wins");
}

#[test]
fn test_coin_totals() {
    let config = IntelligenceConfig::default();
    let activities = vec![
        run_on("1", "2024-01-01T08:00:00Z", 3600)
            .with_elevation_gain(8848.0)
            .with_kilojoules(2000.0),
    ];
    let totals = compute_totals(&activities, at("2024-06-01T00:00:00Z"), &config);

    assert_close(totals.coins.everest, 1.0);
    assert_close(totals.coins.pizza, 2.0);
    assert_close(totals.coins.heartbeat, 0.0);
}

#[test]
fn test_activity_coins_per_record_values() {
    let config = IntelligenceConfig::default();
    let activity = run_on("1", "2024-01-01T08:00:00Z", 3600)
        .with_elevation_gain(4424.0)
        .with_average_heart_rate(150.0);
    let coins = activity_coins(&activity, &config);

    assert_close(coins.everest, 0.5);
    let kcal = (150.0 * 80.0 * 0.6309 / 4.184) * 60.0 / 100.0;
    assert_close(coins.pizza, kcal / 1000.0);
    assert_close(coins.heartbeat, 9000.0);
}

#[test]
fn test_activity_coins_sum_to_aggregate_coins() {
    let config = IntelligenceConfig::default();
    let activities = vec![
        run_on("1", "2024-01-01T08:00:00Z", 3600)
            .with_elevation_gain(1200.0)
            .with_kilojoules(640.0),
        run_on("2", "2024-01-02T08:00:00Z", 1800).with_average_heart_rate(140.0),
    ];
    let totals = compute_totals(&activities, at("2024-06-01T00:00:00Z"), &config);

    let summed = activities
        .iter()
        .map(|act| activity_coins(act, &config))
        .fold((0.0, 0.0, 0.0), |acc, coins| {
            (
                acc.0 + coins.everest,
                acc.1 + coins.pizza,
                acc.2 + coins.heartbeat,
            )
        });
    assert_close(totals.coins.everest, summed.0);
    assert_close(totals.coins.pizza, summed.1);
    assert_close(totals.coins.heartbeat, summed.2);
}

#[test]
fn test_heartbeat_coins_unscaled() {
    let config = IntelligenceConfig::default();
    let activities =
        vec![run_on("1", "2024-01-01T08:00:00Z", 3600).with_average_heart_rate(150.0)];
    let totals = compute_totals(&activities, at("2024-06-01T00:00:00Z"), &config);

    assert_eq!(totals.heartbeats, 9000);
    assert_close(totals.coins.heartbeat, 9000.0);
}

#[test]
fn test_calorie_precedence_heartbeat_estimate_over_supplied_figure() {
    let config = IntelligenceConfig::default();
    let with_hr = vec![run_on("1", "2024-01-01T08:00:00Z", 3600)
        .with_average_heart_rate(150.0)
        .with_kilojoules(10.0)];
    let totals = compute_totals(&with_hr, at("2024-06-01T00:00:00Z"), &config);

    let expected = (150.0 * 80.0 * 0.6309 / 4.184) * 60.0 / 100.0;
    assert_close(totals.calories, expected);
}

#[test]
fn test_nan_heart_rate_never_poisons_totals() {
    let config = IntelligenceConfig::default();
    let activities =
        vec![run_on("1", "2024-01-01T08:00:00Z", 3600).with_average_heart_rate(f64::NAN)];
    let totals = compute_totals(&activities, at("2024-06-01T00:00:00Z"), &config);

    assert!(totals.calories.is_finite());
    assert_close(totals.calories, 0.0);
    assert_eq!(totals.heartbeats, 0);
}

#[test]
fn test_order_independent_sums() {
    let config = IntelligenceConfig::default();
    let now = at("2024-06-01T00:00:00Z");
    let a = run_on("1", "2024-01-01T08:00:00Z", 3600).with_distance(10_000.0);
    let b = run_on("2", "2024-02-01T08:00:00Z", 1800).with_distance(21_097.5);

    let forward = compute_totals(vec![&a, &b], now, &config);
    let reverse = compute_totals(vec![&b, &a], now, &config);

    assert_close(forward.hours, reverse.hours);
    assert_close(forward.distance_meters, reverse.distance_meters);
    assert_eq!(forward.activity_count, reverse.activity_count);
}

// ABOUTME: Shared test helpers for building activity records with fixed dates
// ABOUTME: Used by the totals, rank, achievement, and dashboard integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use stride_dashboard::core::models::Activity;

/// Parse an RFC 3339 timestamp, e.g. `2024-01-01T08:00:00Z`
pub fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap()
}

/// A run with the given moving time, no distance or elevation
pub fn run_on(id: &str, timestamp: &str, moving_time_seconds: u64) -> Activity {
    Activity::new(
        id,
        format!("Run {id}"),
        "Run",
        at(timestamp),
        moving_time_seconds,
    )
}

/// A run with a distance, one hour of moving time by default
pub fn run_with_distance(id: &str, timestamp: &str, distance_meters: f64) -> Activity {
    run_on(id, timestamp, 3600).with_distance(distance_meters)
}

pub const EPS: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

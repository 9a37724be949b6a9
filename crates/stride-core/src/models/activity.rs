// ABOUTME: Activity record model consumed by the aggregation and gamification engine
// ABOUTME: Normalized workout entry with duration, distance, elevation, and heart rate data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::AthleteRef;

/// Activity kind assigned when the feed omits the `type` field
pub const DEFAULT_KIND: &str = "Run";

fn default_kind() -> String {
    DEFAULT_KIND.to_owned()
}

/// One logged workout as supplied by the paged activity feed.
///
/// Records are read-only to the engine: they are appended by the load
/// controller and never mutated afterwards. Numeric fields that the feed
/// omits deserialize to zero so aggregation stays defined; optional fields
/// (`average_heart_rate`, `kilojoules`, `athlete`) stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Opaque unique identifier (provider-specific)
    pub id: String,
    /// Human-readable name/title of the activity
    #[serde(default)]
    pub name: String,
    /// Activity kind (e.g. "Run"); defaults to "Run" when absent in the feed
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// When the activity started (UTC)
    pub start_date: DateTime<Utc>,
    /// Time spent actually moving, in seconds
    #[serde(default)]
    pub moving_time_seconds: u64,
    /// Distance covered in meters
    #[serde(default)]
    pub distance_meters: f64,
    /// Total elevation gained in meters (may be zero)
    #[serde(default)]
    pub elevation_gain_meters: f64,
    /// Average heart rate during the activity (BPM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_heart_rate: Option<f64>,
    /// Calorie figure supplied by the feed, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kilojoules: Option<f64>,
    /// Athlete reference side-channel, present on some records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete: Option<AthleteRef>,
}

impl Activity {
    /// Create a new activity record with the required fields
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        start_date: DateTime<Utc>,
        moving_time_seconds: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            start_date,
            moving_time_seconds,
            distance_meters: 0.0,
            elevation_gain_meters: 0.0,
            average_heart_rate: None,
            kilojoules: None,
            athlete: None,
        }
    }

    /// Set the distance covered in meters
    #[must_use]
    pub const fn with_distance(mut self, meters: f64) -> Self {
        self.distance_meters = meters;
        self
    }

    /// Set the elevation gain in meters
    #[must_use]
    pub const fn with_elevation_gain(mut self, meters: f64) -> Self {
        self.elevation_gain_meters = meters;
        self
    }

    /// Set the average heart rate in BPM
    #[must_use]
    pub const fn with_average_heart_rate(mut self, bpm: f64) -> Self {
        self.average_heart_rate = Some(bpm);
        self
    }

    /// Set the supplied calorie figure
    #[must_use]
    pub const fn with_kilojoules(mut self, kcal: f64) -> Self {
        self.kilojoules = Some(kcal);
        self
    }

    /// Attach the athlete reference side-channel
    #[must_use]
    pub fn with_athlete(mut self, athlete: AthleteRef) -> Self {
        self.athlete = Some(athlete);
        self
    }

    /// Moving time expressed in minutes
    #[must_use]
    pub fn moving_minutes(&self) -> f64 {
        self.moving_time_seconds as f64 / 60.0
    }

    /// Moving time expressed in hours
    #[must_use]
    pub fn moving_hours(&self) -> f64 {
        self.moving_time_seconds as f64 / 3600.0
    }

    /// Average heart rate, filtered for NaN so downstream math stays defined
    #[must_use]
    pub fn heart_rate(&self) -> Option<f64> {
        self.average_heart_rate.filter(|hr| hr.is_finite())
    }

    /// Supplied calorie figure, filtered for NaN
    #[must_use]
    pub fn supplied_kcal(&self) -> Option<f64> {
        self.kilojoules.filter(|kcal| kcal.is_finite())
    }

    /// Total heartbeats over the activity: `round(avg_hr * minutes)`, 0 when
    /// heart rate is missing or not a number.
    #[must_use]
    pub fn total_heartbeats(&self) -> u64 {
        self.heart_rate().map_or(0, |hr| {
            let beats = (hr * self.moving_minutes()).round();
            if beats > 0.0 {
                beats as u64
            } else {
                0
            }
        })
    }

    /// Average speed in km/h, `None` when no time was spent moving
    #[must_use]
    pub fn average_speed_kmh(&self) -> Option<f64> {
        if self.moving_time_seconds == 0 {
            return None;
        }
        Some((self.distance_meters / 1000.0) / self.moving_hours())
    }

    /// Calendar day the activity started on, used for streak and occasion logic
    #[must_use]
    pub fn calendar_day(&self) -> NaiveDate {
        self.start_date.date_naive()
    }

    /// Month-day key in `MM-DD` form, used for special-occasion badges
    #[must_use]
    pub fn month_day(&self) -> String {
        self.start_date.format("%m-%d").to_string()
    }
}

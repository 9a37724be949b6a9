// ABOUTME: Time-window filters applied to the activity sequence before aggregation
// ABOUTME: Weekly, last-6-months, last-year, and all-time cutoff computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Activity;

/// Time window narrowing the activity sequence passed to the totals
/// aggregator. The filter is a pre-step: the aggregator itself is
/// window-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    /// Full history, no cutoff
    #[default]
    All,
    /// Rolling 7-day window ending now
    Weekly,
    /// Last six calendar months
    LastSixMonths,
    /// Last calendar year
    LastYear,
}

impl Timeframe {
    /// Parse a timeframe from string (case-insensitive), defaulting to `All`
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "last6months" | "last_six_months" => Self::LastSixMonths,
            "lastyear" | "last_year" => Self::LastYear,
            _ => Self::All,
        }
    }

    /// String representation for display and logging
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Weekly => "weekly",
            Self::LastSixMonths => "last6months",
            Self::LastYear => "lastyear",
        }
    }

    /// Inclusive lower bound of the window, `None` for the full history
    #[must_use]
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::All => None,
            Self::Weekly => Some(now - Duration::days(7)),
            Self::LastSixMonths => Some(now.checked_sub_months(Months::new(6)).unwrap_or(now)),
            Self::LastYear => Some(now.checked_sub_months(Months::new(12)).unwrap_or(now)),
        }
    }

    /// Narrow a sequence of activities to this window
    #[must_use]
    pub fn filter<'a>(self, activities: &'a [Activity], now: DateTime<Utc>) -> Vec<&'a Activity> {
        match self.cutoff(now) {
            None => activities.iter().collect(),
            Some(cutoff) => activities
                .iter()
                .filter(|act| act.start_date >= cutoff)
                .collect(),
        }
    }
}

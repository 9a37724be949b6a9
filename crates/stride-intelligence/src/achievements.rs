// ABOUTME: Achievement engine evaluating the badge catalog against the activity set
// ABOUTME: Streak detection, threshold counting, ISO-week buckets, and composite rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use stride_core::models::Activity;
use tracing::debug;

use crate::calories::estimated_kcal;
use crate::config::{AchievementCatalog, IntelligenceConfig};

const CLIMBING_KING: (&str, &str, &str) = ("Climbing King", "🧗‍♂️", "Total elevation gain milestones");
const SPEEDSTER: (&str, &str, &str) = ("Speedster", "⚡", "Achieved an average speed over the limit");
const CONSISTENCY_CHAMPION: (&str, &str, &str) = (
    "Consistency Champion",
    "📈",
    "Logged activities every day for a month",
);
const CALORIE_BURNER: (&str, &str, &str) = ("Calorie Burner", "🔥", "Cumulative calorie milestones");

/// One evaluated badge: its display identity and how many times it was earned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeCount {
    /// Badge display name
    pub name: String,
    /// Badge emoji
    pub emoji: String,
    /// Tooltip description, when the catalog carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of times the badge rule was satisfied
    pub count: u64,
}

impl BadgeCount {
    fn new(name: &str, emoji: &str, count: u64) -> Self {
        Self {
            name: name.to_owned(),
            emoji: emoji.to_owned(),
            description: None,
            count,
        }
    }

    fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

/// Evaluated achievement state: a scalar streak plus per-category badge
/// lists. Returned fresh from every [`compute_achievements`] call; nothing is
/// mutated in place between recomputations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementSummary {
    /// Longest run of consecutive calendar days with at least one activity
    pub longest_streak: u64,
    /// Per-activity distance badge counts
    pub distance_badges: Vec<BadgeCount>,
    /// Per-activity duration badge counts
    pub duration_badges: Vec<BadgeCount>,
    /// ISO-week volume badge counts
    pub weekly_badges: Vec<BadgeCount>,
    /// Calendar-date occasion badge counts
    pub special_occasions: Vec<BadgeCount>,
    /// Composite rule badge counts (marathons, milestones, streak months)
    pub composite_achievements: Vec<BadgeCount>,
}

impl AchievementSummary {
    /// Flat view over every badge list, in catalog order, for renderers
    pub fn badges(&self) -> impl Iterator<Item = &BadgeCount> {
        self.distance_badges
            .iter()
            .chain(&self.duration_badges)
            .chain(&self.weekly_badges)
            .chain(&self.special_occasions)
            .chain(&self.composite_achievements)
    }
}

/// Evaluate the badge catalog against the full activity set.
///
/// Full recompute, idempotent: every count is derived from scratch over the
/// given snapshot and no state is carried between calls.
pub fn compute_achievements<'a, I>(activities: I, config: &IntelligenceConfig) -> AchievementSummary
where
    I: IntoIterator<Item = &'a Activity>,
{
    let activities: Vec<&Activity> = activities.into_iter().collect();
    let catalog = &config.catalog;

    let summary = AchievementSummary {
        longest_streak: longest_streak(&activities),
        distance_badges: count_distance_badges(&activities, catalog),
        duration_badges: count_duration_badges(&activities, catalog),
        weekly_badges: count_weekly_badges(&activities, catalog),
        special_occasions: count_special_occasions(&activities, catalog),
        composite_achievements: count_composites(&activities, config),
    };

    debug!(
        activities = activities.len(),
        longest_streak = summary.longest_streak,
        "evaluated achievement catalog"
    );
    summary
}

/// Longest run of consecutive calendar days with at least one activity.
///
/// Distinct days are sorted by date value; a gap of exactly one day extends
/// the running streak, anything else resets it. Minimum 1 when any activity
/// exists, 0 for an empty set.
fn longest_streak(activities: &[&Activity]) -> u64 {
    let days: BTreeSet<NaiveDate> = activities.iter().map(|act| act.calendar_day()).collect();
    if days.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut current = 1;
    let mut prev: Option<NaiveDate> = None;
    for day in days {
        if let Some(prev_day) = prev {
            if (day - prev_day).num_days() == 1 {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 1;
            }
        }
        prev = Some(day);
    }
    longest
}

fn count_distance_badges(activities: &[&Activity], catalog: &AchievementCatalog) -> Vec<BadgeCount> {
    catalog
        .distance_badges
        .iter()
        .map(|badge| {
            let count = activities
                .iter()
                .filter(|act| act.distance_meters >= badge.threshold_meters)
                .count() as u64;
            BadgeCount::new(&badge.name, &badge.emoji, count)
        })
        .collect()
}

fn count_duration_badges(activities: &[&Activity], catalog: &AchievementCatalog) -> Vec<BadgeCount> {
    catalog
        .duration_badges
        .iter()
        .map(|badge| {
            let count = activities
                .iter()
                .filter(|act| act.moving_minutes() >= badge.threshold_minutes)
                .count() as u64;
            BadgeCount::new(&badge.name, &badge.emoji, count)
        })
        .collect()
}

/// Bucket moving hours by `(ISO year, ISO week)` and count buckets per badge.
fn count_weekly_badges(activities: &[&Activity], catalog: &AchievementCatalog) -> Vec<BadgeCount> {
    let mut weeks: HashMap<(i32, u32), f64> = HashMap::new();
    for act in activities {
        let iso = act.calendar_day().iso_week();
        *weeks.entry((iso.year(), iso.week())).or_insert(0.0) += act.moving_hours();
    }

    catalog
        .weekly_badges
        .iter()
        .map(|badge| {
            let count = weeks
                .values()
                .filter(|hours| **hours >= badge.threshold_hours)
                .count() as u64;
            BadgeCount::new(&badge.name, &badge.emoji, count)
        })
        .collect()
}

fn count_special_occasions(
    activities: &[&Activity],
    catalog: &AchievementCatalog,
) -> Vec<BadgeCount> {
    catalog
        .special_occasions
        .iter()
        .map(|badge| {
            let count = activities
                .iter()
                .filter(|act| badge.dates.contains(&act.month_day()))
                .count() as u64;
            BadgeCount::new(&badge.name, &badge.emoji, count)
        })
        .collect()
}

fn count_composites(activities: &[&Activity], config: &IntelligenceConfig) -> Vec<BadgeCount> {
    let catalog = &config.catalog;
    let rules = &catalog.composite;
    let mut badges = Vec::with_capacity(catalog.distance_day_badges.len() + 4);

    // Marathon-style rules count distinct qualifying days, not raw
    // activities, so same-day duplicates earn the badge once.
    for badge in &catalog.distance_day_badges {
        let days: BTreeSet<NaiveDate> = activities
            .iter()
            .filter(|act| act.kind == badge.kind && act.distance_meters >= badge.threshold_meters)
            .map(|act| act.calendar_day())
            .collect();
        badges.push(
            BadgeCount::new(&badge.name, &badge.emoji, days.len() as u64)
                .with_description(&badge.description),
        );
    }

    let total_elevation: f64 = activities.iter().map(|act| act.elevation_gain_meters).sum();
    let climbing = if rules.elevation_milestone_meters > 0.0 {
        (total_elevation / rules.elevation_milestone_meters).floor() as u64
    } else {
        0
    };
    badges.push(
        BadgeCount::new(CLIMBING_KING.0, CLIMBING_KING.1, climbing)
            .with_description(CLIMBING_KING.2),
    );

    let speedster = activities
        .iter()
        .filter(|act| {
            act.average_speed_kmh()
                .is_some_and(|kmh| kmh > rules.speed_threshold_kmh)
        })
        .count() as u64;
    badges.push(BadgeCount::new(SPEEDSTER.0, SPEEDSTER.1, speedster).with_description(SPEEDSTER.2));

    badges.push(
        BadgeCount::new(
            CONSISTENCY_CHAMPION.0,
            CONSISTENCY_CHAMPION.1,
            full_months(activities),
        )
        .with_description(CONSISTENCY_CHAMPION.2),
    );

    let total_kcal: f64 = activities
        .iter()
        .map(|act| estimated_kcal(act, config.body_weight_kg))
        .sum();
    let burner = if rules.calorie_milestone_kcal > 0.0 {
        (total_kcal / rules.calorie_milestone_kcal).floor() as u64
    } else {
        0
    };
    badges.push(
        BadgeCount::new(CALORIE_BURNER.0, CALORIE_BURNER.1, burner)
            .with_description(CALORIE_BURNER.2),
    );

    badges
}

/// Count `(year, month)` buckets where every calendar day has an activity.
fn full_months(activities: &[&Activity]) -> u64 {
    let days: BTreeSet<NaiveDate> = activities.iter().map(|act| act.calendar_day()).collect();
    let months: BTreeSet<(i32, u32)> = days.iter().map(|day| (day.year(), day.month())).collect();

    months
        .iter()
        .filter(|(year, month)| {
            let day_count = days_in_month(*year, *month);
            day_count > 0
                && (1..=day_count).all(|day| {
                    NaiveDate::from_ymd_opt(*year, *month, day)
                        .is_some_and(|date| days.contains(&date))
                })
        })
        .count() as u64
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month_start
        .and_then(|date| date.pred_opt())
        .map_or(0, |date| date.day())
}

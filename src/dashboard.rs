// ABOUTME: Dashboard load controller appending feed pages and re-running aggregation
// ABOUTME: Owns the in-session activity set, timeframe filter, and snapshot assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stride_core::models::Activity;
use stride_core::pagination::PageParams;
use stride_core::timeframe::Timeframe;
use stride_intelligence::achievements::{compute_achievements, AchievementSummary};
use stride_intelligence::config::IntelligenceConfig;
use stride_intelligence::rank::{compute_rank, RankProgress};
use stride_intelligence::totals::{compute_totals, Totals};
use tracing::{debug, info};

use crate::providers::{ActivityProvider, ProviderError};

/// Everything a renderer needs for one paint of the dashboard.
///
/// `totals` covers the activities inside the selected timeframe; rank and
/// achievements always reflect the full history, since both are lifetime
/// states rather than windowed statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Timeframe the windowed totals were computed over
    pub timeframe: Timeframe,
    /// Aggregate totals over the timeframe-filtered sequence
    pub totals: Totals,
    /// Aggregate totals over the full history
    pub lifetime_totals: Totals,
    /// Rank state derived from lifetime cumulative hours
    pub rank: RankProgress,
    /// Achievement state over the full history
    pub achievements: AchievementSummary,
    /// Whether the feed reports further pages
    pub has_more: bool,
}

/// Load controller for the dashboard.
///
/// Appends fetched pages to the in-memory activity set (append-only within a
/// session) and re-runs the full aggregation pipeline after every append and
/// after every timeframe change. Fetches are awaited sequentially; a new page
/// is requested only after the prior page has been merged.
pub struct Dashboard<P> {
    provider: P,
    config: IntelligenceConfig,
    activities: Vec<Activity>,
    next_page: PageParams,
    has_more: bool,
    timeframe: Timeframe,
}

impl<P: ActivityProvider> Dashboard<P> {
    /// Create a controller over a provider with the given engine
    /// configuration and page size.
    #[must_use]
    pub fn new(provider: P, config: IntelligenceConfig, per_page: u32) -> Self {
        Self {
            provider,
            config,
            activities: Vec::new(),
            next_page: PageParams::first(per_page),
            has_more: true,
            timeframe: Timeframe::default(),
        }
    }

    /// Whether the feed reports more pages to load
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// The activities loaded so far, in feed order
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// The currently selected timeframe
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Fetch the next page, merge it, and re-aggregate.
    ///
    /// Returns the refreshed snapshot. When the feed is already exhausted the
    /// snapshot is recomputed without a fetch.
    pub async fn load_next_page(&mut self) -> Result<DashboardSnapshot, ProviderError> {
        if !self.has_more {
            debug!("feed exhausted, recomputing snapshot without fetch");
            return Ok(self.snapshot_at(Utc::now()));
        }

        let params = self.next_page;
        let page = self.provider.fetch_page(params).await?;
        info!(
            provider = self.provider.name(),
            page = params.page,
            fetched = page.activities.len(),
            has_more = page.has_more,
            "merged activity page"
        );

        self.activities.extend(page.activities);
        self.has_more = page.has_more;
        self.next_page = params.next();

        Ok(self.snapshot_at(Utc::now()))
    }

    /// Load pages sequentially until the feed is exhausted or `max_pages`
    /// pages have been fetched.
    pub async fn load_pages(
        &mut self,
        max_pages: Option<u32>,
    ) -> Result<DashboardSnapshot, ProviderError> {
        let mut fetched = 0;
        let mut snapshot = self.snapshot_at(Utc::now());
        while self.has_more && max_pages.is_none_or(|max| fetched < max) {
            snapshot = self.load_next_page().await?;
            fetched += 1;
        }
        Ok(snapshot)
    }

    /// Change the timeframe filter and re-aggregate over the new window
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> DashboardSnapshot {
        self.timeframe = timeframe;
        debug!(timeframe = timeframe.as_str(), "timeframe changed");
        self.snapshot_at(Utc::now())
    }

    /// Recompute the full snapshot for the current activity set at `now`.
    ///
    /// Pure over the current state: safe to call any number of times.
    #[must_use]
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> DashboardSnapshot {
        let lifetime_totals = compute_totals(&self.activities, now, &self.config);
        let totals = if self.timeframe == Timeframe::All {
            lifetime_totals.clone()
        } else {
            let filtered = self.timeframe.filter(&self.activities, now);
            compute_totals(filtered, now, &self.config)
        };
        let rank = compute_rank(
            &self.config.ladder,
            lifetime_totals.hours,
            lifetime_totals.hours_this_week,
        );
        let achievements = compute_achievements(&self.activities, &self.config);

        DashboardSnapshot {
            timeframe: self.timeframe,
            totals,
            lifetime_totals,
            rank,
            achievements,
            has_more: self.has_more,
        }
    }
}

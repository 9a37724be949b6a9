// ABOUTME: Tests for the dashboard load controller with an in-memory provider
// ABOUTME: Covers sequential paging, exhaustion, error propagation, and timeframes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use common::{at, run_on};
use stride_dashboard::core::pagination::{ActivityPage, PageParams, DEFAULT_PER_PAGE};
use stride_dashboard::core::timeframe::Timeframe;
use stride_dashboard::intelligence::config::IntelligenceConfig;
use stride_dashboard::{ActivityProvider, Dashboard, ProviderError};

/// Serves a fixed sequence of pages and records the params of every fetch.
struct ScriptedProvider {
    pages: Mutex<Vec<ActivityPage>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(pages: Vec<ActivityPage>) -> Self {
        Self {
            pages: Mutex::new(pages),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ActivityProvider for &ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch_page(&self, params: PageParams) -> Result<ActivityPage, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut pages = self.pages.lock().expect("pages lock poisoned");
        if pages.is_empty() {
            return Err(ProviderError::ApiError {
                provider: "scripted".to_owned(),
                status: 500,
                message: format!("no page scripted for page {}", params.page),
            });
        }
        Ok(pages.remove(0))
    }
}

/// Always rejects with a session-expiry error.
struct ExpiredProvider;

#[async_trait]
impl ActivityProvider for ExpiredProvider {
    fn name(&self) -> &'static str {
        "expired"
    }

    async fn fetch_page(&self, _params: PageParams) -> Result<ActivityPage, ProviderError> {
        Err(ProviderError::Unauthorized {
            provider: "expired".to_owned(),
        })
    }
}

fn page(ids: &[&str], has_more: bool) -> ActivityPage {
    ActivityPage {
        activities: ids
            .iter()
            .map(|id| run_on(id, "2024-03-10T08:00:00Z", 3600))
            .collect(),
        has_more,
    }
}

#[test]
fn test_page_params_advance_by_one() {
    let first = PageParams::first(50);
    assert_eq!(first.page, 1);
    assert_eq!(first.per_page, 50);
    let second = first.next();
    assert_eq!(second.page, 2);
    assert_eq!(second.per_page, 50);
}

#[test]
fn test_page_params_default_uses_standard_page_size() {
    let params = PageParams::default();
    assert_eq!(params.page, 1);
    assert_eq!(params.per_page, DEFAULT_PER_PAGE);
}

#[test]
fn test_empty_page_reports_no_activities() {
    let empty = ActivityPage::empty();
    assert!(empty.is_empty());
    assert!(!empty.has_more);
}

#[test]
fn test_unauthorized_is_distinguishable() {
    let unauthorized = ProviderError::Unauthorized {
        provider: "strava-gateway".to_owned(),
    };
    assert!(unauthorized.is_unauthorized());

    let api = ProviderError::ApiError {
        provider: "strava-gateway".to_owned(),
        status: 503,
        message: "unavailable".to_owned(),
    };
    assert!(!api.is_unauthorized());
}

#[tokio::test]
async fn test_pages_append_in_feed_order() {
    let provider = ScriptedProvider::new(vec![page(&["a", "b"], true), page(&["c"], false)]);
    let mut dashboard = Dashboard::new(&provider, IntelligenceConfig::default(), 2);

    let snapshot = dashboard.load_next_page().await.expect("first page");
    assert!(snapshot.has_more);
    assert_eq!(dashboard.activities().len(), 2);

    let snapshot = dashboard.load_next_page().await.expect("second page");
    assert!(!snapshot.has_more);
    let ids: Vec<&str> = dashboard
        .activities()
        .iter()
        .map(|activity| activity.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_exhausted_feed_skips_the_fetch() {
    let provider = ScriptedProvider::new(vec![page(&["a"], false)]);
    let mut dashboard = Dashboard::new(&provider, IntelligenceConfig::default(), 10);

    dashboard.load_next_page().await.expect("only page");
    assert!(!dashboard.has_more());

    let snapshot = dashboard.load_next_page().await.expect("no-op reload");
    assert_eq!(provider.calls(), 1);
    assert_eq!(snapshot.lifetime_totals.activity_count, 1);
}

#[tokio::test]
async fn test_load_pages_runs_until_exhaustion() {
    let provider = ScriptedProvider::new(vec![
        page(&["a"], true),
        page(&["b"], true),
        page(&["c"], false),
    ]);
    let mut dashboard = Dashboard::new(&provider, IntelligenceConfig::default(), 1);

    let snapshot = dashboard.load_pages(None).await.expect("full load");
    assert_eq!(provider.calls(), 3);
    assert_eq!(dashboard.activities().len(), 3);
    assert!(!snapshot.has_more);
}

#[tokio::test]
async fn test_load_pages_honors_the_page_cap() {
    let provider = ScriptedProvider::new(vec![
        page(&["a"], true),
        page(&["b"], true),
        page(&["c"], false),
    ]);
    let mut dashboard = Dashboard::new(&provider, IntelligenceConfig::default(), 1);

    let snapshot = dashboard.load_pages(Some(2)).await.expect("capped load");
    assert_eq!(provider.calls(), 2);
    assert_eq!(dashboard.activities().len(), 2);
    assert!(snapshot.has_more);
}

#[tokio::test]
async fn test_session_expiry_surfaces_as_unauthorized() {
    let mut dashboard = Dashboard::new(ExpiredProvider, IntelligenceConfig::default(), 10);
    let error = dashboard.load_next_page().await.expect_err("must fail");
    assert!(error.is_unauthorized());
    // Nothing was merged.
    assert!(dashboard.activities().is_empty());
}

#[tokio::test]
async fn test_failed_fetch_leaves_state_untouched() {
    let provider = ScriptedProvider::new(vec![page(&["a"], true)]);
    let mut dashboard = Dashboard::new(&provider, IntelligenceConfig::default(), 10);

    dashboard.load_next_page().await.expect("scripted page");
    let error = dashboard.load_next_page().await.expect_err("script ran out");
    assert!(!error.is_unauthorized());
    assert_eq!(dashboard.activities().len(), 1);
    assert!(dashboard.has_more());
}

#[tokio::test]
async fn test_snapshot_recompute_is_idempotent() {
    let provider = ScriptedProvider::new(vec![page(&["a", "b"], false)]);
    let mut dashboard = Dashboard::new(&provider, IntelligenceConfig::default(), 10);
    dashboard.load_next_page().await.expect("only page");

    let now = at("2024-03-15T12:00:00Z");
    let first = dashboard.snapshot_at(now);
    let second = dashboard.snapshot_at(now);
    assert_eq!(first.lifetime_totals, second.lifetime_totals);
    assert_eq!(first.achievements, second.achievements);
    assert_eq!(first.rank.current_points, second.rank.current_points);
}

#[tokio::test]
async fn test_timeframe_windows_the_totals_only() {
    let old = run_on("old", "2023-01-05T08:00:00Z", 7200);
    let recent = run_on("recent", "2024-03-12T08:00:00Z", 3600);
    let provider = ScriptedProvider::new(vec![ActivityPage {
        activities: vec![old, recent],
        has_more: false,
    }]);
    let mut dashboard = Dashboard::new(&provider, IntelligenceConfig::default(), 10);
    dashboard.load_next_page().await.expect("only page");
    dashboard.set_timeframe(Timeframe::Weekly);

    let snapshot = dashboard.snapshot_at(at("2024-03-15T12:00:00Z"));
    assert_eq!(snapshot.timeframe, Timeframe::Weekly);
    assert_eq!(snapshot.totals.activity_count, 1);
    assert_eq!(snapshot.lifetime_totals.activity_count, 2);
    // Rank stays a lifetime state regardless of the window.
    assert!((snapshot.rank.current_points - 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_all_timeframe_matches_lifetime() {
    let provider = ScriptedProvider::new(vec![page(&["a", "b", "c"], false)]);
    let mut dashboard = Dashboard::new(&provider, IntelligenceConfig::default(), 10);
    dashboard.load_next_page().await.expect("only page");

    let snapshot = dashboard.snapshot_at(Utc::now());
    assert_eq!(snapshot.totals, snapshot.lifetime_totals);
}

#[test]
fn test_timeframe_parse_is_lenient() {
    assert_eq!(Timeframe::parse("weekly"), Timeframe::Weekly);
    assert_eq!(Timeframe::parse("WEEKLY"), Timeframe::Weekly);
    assert_eq!(Timeframe::parse("last_six_months"), Timeframe::LastSixMonths);
    assert_eq!(Timeframe::parse("last_year"), Timeframe::LastYear);
    assert_eq!(Timeframe::parse("all"), Timeframe::All);
    assert_eq!(Timeframe::parse("bogus"), Timeframe::All);
}

#[test]
fn test_timeframe_cutoffs() {
    let now = at("2024-03-15T12:00:00Z");
    assert_eq!(Timeframe::All.cutoff(now), None);
    assert_eq!(Timeframe::Weekly.cutoff(now), Some(at("2024-03-08T12:00:00Z")));
    assert_eq!(
        Timeframe::LastSixMonths.cutoff(now),
        Some(at("2023-09-15T12:00:00Z"))
    );
    assert_eq!(Timeframe::LastYear.cutoff(now), Some(at("2023-03-15T12:00:00Z")));
}

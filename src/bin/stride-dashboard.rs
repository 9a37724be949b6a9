// ABOUTME: CLI binary driving the fetch-aggregate-render loop of the dashboard
// ABOUTME: Fetches feed pages, runs the engine, and renders the snapshot as text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

#![allow(clippy::print_stdout)] // renderer output goes to stdout by design

use anyhow::{Context, Result};
use clap::Parser;
use stride_dashboard::core::models::Activity;
use stride_dashboard::core::timeframe::Timeframe;
use stride_dashboard::dashboard::{Dashboard, DashboardSnapshot};
use stride_dashboard::intelligence::config::IntelligenceConfig;
use stride_dashboard::intelligence::totals::activity_coins;
use stride_dashboard::providers::{ProviderError, StravaGateway, StravaGatewayConfig};
use tracing::error;

/// Gamified fitness dashboard: paged activity history, totals, rank, and achievements
#[derive(Debug, Parser)]
#[command(name = "stride-dashboard", version, about)]
struct Cli {
    /// Base URL of the gateway serving the paged activity feed
    #[arg(long, env = "STRIDE_BASE_URL")]
    base_url: String,

    /// Bearer token for the gateway, when it requires one
    #[arg(long, env = "STRIDE_ACCESS_TOKEN")]
    access_token: Option<String>,

    /// Maximum number of pages to fetch (all remaining pages when omitted)
    #[arg(long)]
    pages: Option<u32>,

    /// Activities per page
    #[arg(long, default_value_t = stride_dashboard::core::pagination::DEFAULT_PER_PAGE)]
    per_page: u32,

    /// Timeframe for the windowed statistics: all, weekly, last6months, lastyear
    #[arg(long, default_value = "all")]
    timeframe: String,

    /// Body weight in kilograms, feeds the calorie estimate
    #[arg(long)]
    body_weight_kg: Option<f64>,
}

/// Number of activities listed with their coin values
const RENDERED_ACTIVITIES: usize = 10;

#[tokio::main]
async fn main() -> Result<()> {
    stride_dashboard::logging::init();
    let cli = Cli::parse();

    let mut config = IntelligenceConfig::default();
    if let Some(weight) = cli.body_weight_kg {
        config.body_weight_kg = weight;
    }

    let provider = StravaGateway::new(StravaGatewayConfig {
        base_url: cli.base_url,
        access_token: cli.access_token,
    });

    let mut dashboard = Dashboard::new(provider, config.clone(), cli.per_page);
    dashboard.set_timeframe(Timeframe::parse(&cli.timeframe));

    let snapshot = match dashboard.load_pages(cli.pages).await {
        Ok(snapshot) => snapshot,
        Err(err) if err.is_unauthorized() => {
            error!("session expired: sign in again through the landing page");
            std::process::exit(2);
        }
        Err(err @ ProviderError::ApiError { .. }) => {
            error!("error loading data: {err}");
            std::process::exit(1);
        }
        Err(err) => return Err(err).context("failed to load activity feed"),
    };

    render(&snapshot, dashboard.activities(), &config);
    Ok(())
}

/// Plain-text renderer over the snapshot values.
///
/// The engine produces values; this is the "renderer displays them" half of
/// the contract, kept deliberately dumb.
fn render(snapshot: &DashboardSnapshot, activities: &[Activity], config: &IntelligenceConfig) {
    let totals = &snapshot.totals;
    let lifetime = &snapshot.lifetime_totals;
    let rank = &snapshot.rank;

    if let Some(athlete) = &lifetime.athlete {
        println!("Athlete: {}", athlete.display_name());
    }

    println!();
    println!(
        "Rank: {} {}  ->  {} ({} pts)",
        rank.current_rank.emoji,
        rank.current_rank.name,
        rank.next_rank.name,
        rank.next_rank.min_points.round()
    );
    println!(
        "Progress: {:.1}%  (+{:.1}% this week, {} pts)",
        rank.progress_percent,
        rank.weekly_gain_percent,
        rank.current_points.round()
    );

    println!();
    println!("Statistics ({})", snapshot.timeframe.as_str());
    println!("  Activities: {}", totals.activity_count);
    println!("  Hours:      {:.1} hrs", totals.hours);
    println!("  Distance:   {:.1} km", totals.distance_meters / 1000.0);
    println!("  Elevation:  {:.0} m", totals.elevation_meters);
    println!("  Calories:   {:.0} kcal", totals.calories);
    println!(
        "  This week:  {:.1} hrs / {:.1} km / {:.0} m / {:.0} kcal",
        totals.hours_this_week,
        totals.distance_this_week / 1000.0,
        totals.elevation_this_week,
        totals.calories_this_week
    );
    println!(
        "  Coins:      {:.2} 🏔️  {:.2} 🍕  {:.0} ❤️",
        totals.coins.everest, totals.coins.pizza, totals.coins.heartbeat
    );

    println!();
    println!("Records");
    if let Some(act) = &lifetime.max_elevation_activity {
        println!("  Max elevation: {:.0} m ({})", act.elevation_gain_meters, act.name);
    }
    if let Some(act) = &lifetime.max_duration_activity {
        println!("  Max duration:  {:.1} mins ({})", act.moving_minutes(), act.name);
    }
    if let Some(act) = &lifetime.max_distance_activity {
        println!(
            "  Max distance:  {:.1} km ({})",
            act.distance_meters / 1000.0,
            act.name
        );
    }

    if !activities.is_empty() {
        println!();
        println!("Activities");
        for act in activities.iter().take(RENDERED_ACTIVITIES) {
            let coins = activity_coins(act, config);
            println!(
                "  {} ({:.1} km, {:.0} mins)  +{:.2} 🏔️ +{:.2} 🍕 +{:.0} ❤️",
                act.name,
                act.distance_meters / 1000.0,
                act.moving_minutes(),
                coins.everest,
                coins.pizza,
                coins.heartbeat
            );
        }
        if activities.len() > RENDERED_ACTIVITIES {
            println!("  ... and {} more", activities.len() - RENDERED_ACTIVITIES);
        }
    }

    println!();
    println!("Achievements");
    println!("  🔥 Longest streak: {} days", snapshot.achievements.longest_streak);
    for badge in snapshot.achievements.badges() {
        println!("  {}x {} {}", badge.count, badge.emoji, badge.name);
    }

    if snapshot.has_more {
        println!();
        println!("(more activities available; raise --pages to load them)");
    }
}

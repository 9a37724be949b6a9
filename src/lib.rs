// ABOUTME: Stride dashboard root crate wiring providers, the load controller, and logging
// ABOUTME: Re-exports the core model and intelligence engine crates for consumers and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

#![deny(unsafe_code)]

//! # Stride Dashboard
//!
//! Client-side fitness-activity dashboard engine. The crate paginates a
//! user's workout history from a remote feed, hands the growing activity set
//! to the pure aggregation pipeline in `stride-intelligence`, and exposes the
//! resulting totals, rank, and achievement values as plain data for any
//! renderer (the bundled CLI renders them as text).

/// Activity feed providers: the provider trait and the Strava-gateway client
pub mod providers;

/// Dashboard load controller: page appends, timeframe filters, snapshots
pub mod dashboard;

/// Logging configuration for the binary
pub mod logging;

pub use stride_core as core;
pub use stride_intelligence as intelligence;

pub use dashboard::{Dashboard, DashboardSnapshot};
pub use providers::{ActivityProvider, ProviderError};

// ABOUTME: Activity feed provider layer for the dashboard
// ABOUTME: Provider trait, structured errors, and the Strava-gateway HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

/// Core provider trait and interfaces
pub mod core;

/// Structured error types for provider operations
pub mod errors;

/// Strava-gateway feed client implementation
pub mod strava;

pub use core::ActivityProvider;
pub use errors::ProviderError;
pub use strava::{StravaGateway, StravaGatewayConfig};

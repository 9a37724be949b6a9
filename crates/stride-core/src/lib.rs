// ABOUTME: Core types for the Stride fitness dashboard engine
// ABOUTME: Foundation crate with activity models, page-based pagination, and timeframe filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing the shared data model for the Stride dashboard.
//! Everything downstream (the intelligence engine, the provider layer, the
//! renderer) consumes the types defined here. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Activity records and the athlete side-channel reference
//! - **pagination**: Page-based request/response types for the activity feed
//! - **timeframe**: Time-window filters applied before aggregation

/// Core data models (`Activity`, `AthleteRef`)
pub mod models;

/// Page-based pagination for the activity feed
pub mod pagination;

/// Time-window filters applied before aggregation
pub mod timeframe;

pub use models::{Activity, AthleteRef};
pub use pagination::{ActivityPage, PageParams, DEFAULT_PER_PAGE};
pub use timeframe::Timeframe;

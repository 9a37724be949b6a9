// ABOUTME: Data model module for activity records and athlete references
// ABOUTME: Re-exports Activity and AthleteRef for downstream crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

/// Activity record model as supplied by the paged feed
pub mod activity;

/// Athlete reference carried as a side-channel on activity records
pub mod athlete;

pub use activity::{Activity, DEFAULT_KIND};
pub use athlete::AthleteRef;

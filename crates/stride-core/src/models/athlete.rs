// ABOUTME: Athlete reference model carried as a side-channel on activity records
// ABOUTME: Minimal name pair used for profile display by the renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use serde::{Deserialize, Serialize};

/// Athlete reference attached to some activity records.
///
/// The feed repeats this on every record it decorates; the aggregator keeps
/// the last one seen in iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteRef {
    /// Athlete first name
    #[serde(rename = "firstname", default)]
    pub first_name: String,
    /// Athlete last name
    #[serde(rename = "lastname", default)]
    pub last_name: String,
}

impl AthleteRef {
    /// Create a new athlete reference
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name in "First Last" form
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

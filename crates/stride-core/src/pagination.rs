// ABOUTME: Page-based pagination types for the activity feed
// ABOUTME: Request parameters and the activities/has_more page envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use serde::{Deserialize, Serialize};

use crate::models::Activity;

/// Default page size used by the activity feed
pub const DEFAULT_PER_PAGE: u32 = 200;

/// First page number; the feed is 1-based
pub const FIRST_PAGE: u32 = 1;

/// Request parameters for one page of the activity feed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number
    pub page: u32,
    /// Number of activities per page
    pub per_page: u32,
}

impl PageParams {
    /// Parameters for the first page with the given page size
    #[must_use]
    pub const fn first(per_page: u32) -> Self {
        Self {
            page: FIRST_PAGE,
            per_page,
        }
    }

    /// Parameters for the page after this one, same page size
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page + 1,
            per_page: self.per_page,
        }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::first(DEFAULT_PER_PAGE)
    }
}

/// One page of the activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPage {
    /// Activities on this page, in feed order
    pub activities: Vec<Activity>,
    /// Whether more pages can be requested after this one
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

impl ActivityPage {
    /// An empty terminal page
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            activities: Vec::new(),
            has_more: false,
        }
    }

    /// Number of activities on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the page carries no activities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

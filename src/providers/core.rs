// ABOUTME: Core provider trait for paged activity feeds
// ABOUTME: Async page fetch contract consumed by the dashboard load controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use async_trait::async_trait;
use stride_core::pagination::{ActivityPage, PageParams};

use super::errors::ProviderError;

/// A paged source of activity records.
///
/// Implementations fetch one page per call; the load controller awaits each
/// fetch sequentially, so at most one request is in flight at a time and
/// pages arrive in monotonically increasing order.
#[async_trait]
pub trait ActivityProvider: Send + Sync {
    /// Provider display name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Fetch one page of the activity feed
    async fn fetch_page(&self, params: PageParams) -> Result<ActivityPage, ProviderError>;
}

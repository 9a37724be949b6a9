// ABOUTME: Strava-gateway activity feed client implementation
// ABOUTME: Fetches paged activity JSON over HTTP and converts it to the core model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use stride_core::models::{Activity, AthleteRef};
use stride_core::pagination::{ActivityPage, PageParams};
use tracing::{debug, warn};
use url::Url;

use super::core::ActivityProvider;
use super::errors::ProviderError;

/// Provider name used in logs and error messages
pub const PROVIDER_NAME: &str = "strava-gateway";

/// Feed endpoint path relative to the gateway base URL
const FEED_PATH: &str = "api/strava-data";

/// Configuration for the Strava-gateway client
#[derive(Debug, Clone)]
pub struct StravaGatewayConfig {
    /// Base URL of the gateway serving the paged feed
    pub base_url: String,
    /// Bearer token sent with each request, when the gateway requires one
    pub access_token: Option<String>,
}

/// Raw activity record as the gateway serializes it
#[derive(Debug, Deserialize)]
struct GatewayActivity {
    id: serde_json::Value,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    activity_type: Option<String>,
    start_date: DateTime<Utc>,
    #[serde(default)]
    moving_time: Option<f64>,
    #[serde(default)]
    distance: Option<f64>,
    #[serde(default)]
    total_elevation_gain: Option<f64>,
    #[serde(default)]
    average_heartrate: Option<f64>,
    #[serde(default)]
    kilojoules: Option<f64>,
    #[serde(default)]
    athlete: Option<GatewayAthlete>,
}

#[derive(Debug, Deserialize)]
struct GatewayAthlete {
    #[serde(default)]
    firstname: String,
    #[serde(default)]
    lastname: String,
}

/// One page of the gateway feed
#[derive(Debug, Deserialize)]
struct GatewayPage {
    #[serde(default)]
    activities: Vec<GatewayActivity>,
    #[serde(rename = "hasMore", default)]
    has_more: bool,
}

fn sanitize(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).map_or(0.0, |v| v.max(0.0))
}

impl From<GatewayActivity> for Activity {
    fn from(raw: GatewayActivity) -> Self {
        // Feed IDs are numeric; keep them opaque strings on our side.
        let id = match &raw.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let mut activity = Self::new(
            id,
            raw.name,
            raw.activity_type
                .unwrap_or_else(|| stride_core::models::activity::DEFAULT_KIND.to_owned()),
            raw.start_date,
            sanitize(raw.moving_time) as u64,
        )
        .with_distance(sanitize(raw.distance))
        .with_elevation_gain(sanitize(raw.total_elevation_gain));

        if let Some(hr) = raw.average_heartrate.filter(|hr| hr.is_finite() && *hr > 0.0) {
            activity = activity.with_average_heart_rate(hr);
        }
        if let Some(kcal) = raw.kilojoules.filter(|kcal| kcal.is_finite() && *kcal >= 0.0) {
            activity = activity.with_kilojoules(kcal);
        }
        if let Some(athlete) = raw.athlete {
            activity = activity.with_athlete(AthleteRef::new(athlete.firstname, athlete.lastname));
        }
        activity
    }
}

/// HTTP client for the paged Strava-gateway activity feed
pub struct StravaGateway {
    config: StravaGatewayConfig,
    client: Client,
}

impl StravaGateway {
    /// Create a client for the given gateway configuration
    #[must_use]
    pub fn new(config: StravaGatewayConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Build the request URL by appending the feed path to the base URL.
    ///
    /// Path segments already on the base URL (a gateway mounted under a
    /// prefix) and any query it carries are preserved.
    fn feed_url(&self, params: PageParams) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|err| ProviderError::InvalidBaseUrl(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| {
                ProviderError::InvalidBaseUrl(format!(
                    "{} cannot carry path segments",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(FEED_PATH.split('/'));
        url.query_pairs_mut()
            .append_pair("page", &params.page.to_string())
            .append_pair("per_page", &params.per_page.to_string());
        Ok(url)
    }
}

#[async_trait]
impl ActivityProvider for StravaGateway {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_page(&self, params: PageParams) -> Result<ActivityPage, ProviderError> {
        let url = self.feed_url(params)?;
        debug!(page = params.page, per_page = params.per_page, "fetching activity page");

        let mut request = self.client.get(url);
        if let Some(token) = &self.config.access_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("activity feed rejected the session");
            return Err(ProviderError::Unauthorized {
                provider: PROVIDER_NAME.to_owned(),
            });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                provider: PROVIDER_NAME.to_owned(),
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let page: GatewayPage = serde_json::from_str(&body)?;
        let activities: Vec<Activity> = page.activities.into_iter().map(Activity::from).collect();
        debug!(
            count = activities.len(),
            has_more = page.has_more,
            "decoded activity page"
        );

        Ok(ActivityPage {
            activities,
            has_more: page.has_more,
        })
    }
}
